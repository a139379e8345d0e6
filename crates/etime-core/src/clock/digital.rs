//! Digital clock formatting.
//!
//! Produces the display strings for the digital face: hour/minute/second,
//! an optional meridiem marker, and a date line resolved from fixed name
//! tables.

use crate::time::ClockTime;

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display strings for one snapshot of the digital clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalReadout {
    pub hours: String,
    /// Always zero-padded to 2 digits.
    pub minutes: String,
    /// Always zero-padded to 2 digits.
    pub seconds: String,
    /// `None` in 24-hour mode.
    pub meridiem: Option<&'static str>,
    /// e.g. `Sunday, March 8, 2026`
    pub date_line: String,
}

impl DigitalReadout {
    /// Format a snapshot.
    ///
    /// 24-hour mode pads the hour to 2 digits (00-23). 12-hour mode maps the
    /// hour to 1-12 without padding -- "1:05:09 PM", not "01:05:09 PM" --
    /// with AM for hours 0-11 and PM for 12-23.
    pub fn format(time: &ClockTime, use_24_hour: bool) -> Self {
        let (hours, meridiem) = if use_24_hour {
            (format!("{:02}", time.hour), None)
        } else {
            let meridiem = if time.hour >= 12 { "PM" } else { "AM" };
            let twelve = match time.hour % 12 {
                0 => 12,
                h => h,
            };
            (twelve.to_string(), Some(meridiem))
        };

        let date_line = format!(
            "{}, {} {}, {}",
            DAY_NAMES[time.weekday as usize % 7],
            MONTH_NAMES[time.month as usize % 12],
            time.day,
            time.year,
        );

        Self {
            hours,
            minutes: format!("{:02}", time.minute),
            seconds: format!("{:02}", time.second),
            meridiem,
            date_line,
        }
    }

    /// The time as a single line, e.g. `14:05:09` or `2:05:09 PM`.
    pub fn time_line(&self) -> String {
        match self.meridiem {
            Some(meridiem) => format!("{}:{}:{} {}", self.hours, self.minutes, self.seconds, meridiem),
            None => format!("{}:{}:{}", self.hours, self.minutes, self.seconds),
        }
    }
}
