//! Wall-clock snapshots and the per-second ticker.
//!
//! [`ClockTime`] is an immutable snapshot recreated on every tick and
//! discarded after use. [`TimeSource`] pushes snapshots to subscribers once
//! per second; each subscriber owns its [`Subscription`] and cancellation is
//! a correctness requirement -- after `cancel()` (or drop) returns, no
//! further callback invocation can occur.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

/// An immutable wall-clock snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// 0-23
    pub hour: u32,
    /// 0-59
    pub minute: u32,
    /// 0-59
    pub second: u32,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u32,
    /// Day of month, 1-based
    pub day: u32,
    /// 0 = January .. 11 = December
    pub month: u32,
    pub year: i32,
}

impl ClockTime {
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            weekday: dt.weekday().num_days_from_sunday(),
            day: dt.day(),
            month: dt.month0(),
            year: dt.year(),
        }
    }

    /// A snapshot with fixed calendar fields, for exercising the formatters
    /// and the face geometry at a known time of day.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            weekday: 0,
            day: 1,
            month: 0,
            year: 2026,
        }
    }
}

/// Emits the current wall-clock time once per second to each subscriber.
///
/// Subscribers get an initial reading immediately rather than waiting for
/// the first tick boundary. Subscriptions are independent; cancelling one
/// does not affect the others.
#[derive(Debug, Clone)]
pub struct TimeSource {
    period: Duration,
}

impl Default for TimeSource {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(1),
        }
    }
}

impl TimeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source ticking at a non-standard period. Used by tests; the clock
    /// displays always use the one-second default.
    pub fn with_period(period: Duration) -> Self {
        Self { period }
    }

    /// Start pushing ticks to `on_tick`. The first call happens before this
    /// method returns control flow to the ticker loop, so consumers render
    /// without a visible startup delay.
    pub fn subscribe<F>(&self, mut on_tick: F) -> Subscription
    where
        F: FnMut(ClockTime) + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let period = self.period;
        let handle = std::thread::spawn(move || {
            on_tick(ClockTime::now());
            // Sleep in short slices so cancellation is prompt.
            let slice = Duration::from_millis(25).min(period);
            loop {
                let mut slept = Duration::ZERO;
                while slept < period {
                    if flag.load(Ordering::Acquire) {
                        return;
                    }
                    let step = slice.min(period - slept);
                    std::thread::sleep(step);
                    slept += step;
                }
                if flag.load(Ordering::Acquire) {
                    return;
                }
                on_tick(ClockTime::now());
            }
        });
        Subscription {
            cancelled,
            handle: Some(handle),
        }
    }
}

/// Handle for one active subscription. Cancels (and joins the ticker
/// thread) on `cancel()` or on drop, so a torn-down consumer can never
/// receive a stale tick.
pub struct Subscription {
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Subscription {
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.stop();
    }
}
