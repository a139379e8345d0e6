//! Clock displays: analog face geometry and the digital formatter.

pub mod digital;
pub mod face;
pub mod svg;

pub use digital::DigitalReadout;
pub use face::{Canvas, ClockFace, HandAngles};
pub use svg::SvgCanvas;
