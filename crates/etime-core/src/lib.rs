//! # E-Time Core Library
//!
//! This library provides the core logic for E-Time, a developer's clock
//! with a digital and an analog display, a background picker, and a small
//! task tracker. It implements a CLI-first philosophy where all operations
//! are available via a standalone CLI binary; any GUI is a thin layer over
//! the same core library.
//!
//! ## Architecture
//!
//! - **Time**: An immutable wall-clock snapshot plus a cancellable
//!   once-per-second ticker that pushes snapshots to subscribers
//! - **Clock**: Pure hand-angle geometry rendered through a `Canvas` trait,
//!   and a 12/24-hour digital formatter
//! - **Stores**: File-backed settings and task stores that persist on every
//!   mutation and notify registered observers
//! - **Background**: Gradient/image/upload backgrounds, URL validation, and
//!   a remote space-imagery search
//!
//! ## Key Components
//!
//! - [`TimeSource`]: Cancellable per-second ticker
//! - [`ClockFace`]: Analog face renderer
//! - [`SettingsStore`] / [`TaskStore`]: Persistent user state
//! - [`Shell`]: Composition root (clock mode + stores)

pub mod background;
pub mod clock;
pub mod error;
pub mod events;
pub mod settings;
pub mod shell;
pub mod storage;
pub mod tasks;
pub mod time;

pub use background::{Background, BackgroundStyle, ImageSearch, PRESET_BACKGROUNDS};
pub use clock::digital::DigitalReadout;
pub use clock::face::{Canvas, ClockFace, HandAngles};
pub use clock::svg::SvgCanvas;
pub use error::{CoreError, FetchError, StorageError, ValidationError};
pub use events::Event;
pub use settings::{Settings, SettingsStore};
pub use shell::{ClockMode, Shell};
pub use storage::KvStore;
pub use tasks::{Task, TaskStore};
pub use time::{ClockTime, Subscription, TimeSource};
