//! Analog clock face rendering.
//!
//! All geometry is computed from a [`ClockTime`] snapshot and drawn through
//! the [`Canvas`] trait: a full clear and redraw on every tick, no
//! incremental diffing. Angles are measured clockwise from 12 o'clock, so a
//! hand tip at angle theta and length L sits at
//! `(cx + L*sin(theta), cy - L*cos(theta))`.

use crate::time::ClockTime;

/// Reference drawing surface side length.
pub const SURFACE_SIZE: f64 = 400.0;

/// Accent color used for the border, second hand, and center cap.
pub const ACCENT_COLOR: &str = "#6366f1";
/// Translucent dark face fill.
pub const FACE_FILL: &str = "rgba(18, 18, 18, 0.7)";
/// Hour ticks and hour/minute hands.
pub const HAND_COLOR: &str = "#ffffff";
/// Minute ticks.
pub const MINUTE_TICK_COLOR: &str = "#a0a0a0";

/// Hand angles in degrees, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour_deg: f64,
    pub minute_deg: f64,
    pub second_deg: f64,
}

/// Compute the three hand angles for a snapshot.
///
/// The hour and minute hands creep: each elapsed minute advances the hour
/// hand by 0.5 degrees, each elapsed second advances the minute hand by 0.1
/// degrees. The second hand jumps in whole 6-degree steps.
pub fn hand_angles(time: &ClockTime) -> HandAngles {
    HandAngles {
        hour_deg: f64::from(time.hour % 12) * 30.0 + f64::from(time.minute) * 0.5,
        minute_deg: f64::from(time.minute) * 6.0 + f64::from(time.second) * 0.1,
        second_deg: f64::from(time.second) * 6.0,
    }
}

/// Minimal drawing surface. Implementations only need flat primitives;
/// the face renderer issues everything in back-to-front order.
pub trait Canvas {
    /// Erase the whole surface.
    fn clear(&mut self);
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: &str);
    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, width: f64, color: &str);
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: &str);
}

/// Renderer for the analog clock face on a square surface.
#[derive(Debug, Clone, Copy)]
pub struct ClockFace {
    size: f64,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self { size: SURFACE_SIZE }
    }
}

impl ClockFace {
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Redraw the full frame for a snapshot: face, ticks, hands, center cap.
    pub fn render(&self, time: &ClockTime, canvas: &mut dyn Canvas) {
        let cx = self.size / 2.0;
        let cy = self.size / 2.0;
        let radius = self.size * 0.45;

        canvas.clear();

        canvas.fill_circle(cx, cy, radius, FACE_FILL);
        canvas.stroke_circle(cx, cy, radius, 4.0, ACCENT_COLOR);

        // Hour ticks at 30-degree intervals.
        for i in 0..12 {
            let deg = f64::from(i) * 30.0;
            let (x1, y1) = tip(cx, cy, deg, radius - 10.0);
            let (x2, y2) = tip(cx, cy, deg, radius);
            canvas.line(x1, y1, x2, y2, 4.0, HAND_COLOR);
        }

        // Minute ticks at 6-degree intervals, skipping hour positions.
        for i in 0..60 {
            if i % 5 == 0 {
                continue;
            }
            let deg = f64::from(i) * 6.0;
            let (x1, y1) = tip(cx, cy, deg, radius - 5.0);
            let (x2, y2) = tip(cx, cy, deg, radius);
            canvas.line(x1, y1, x2, y2, 2.0, MINUTE_TICK_COLOR);
        }

        let angles = hand_angles(time);
        self.hand(canvas, cx, cy, angles.hour_deg, radius * 0.6, 6.0, HAND_COLOR);
        self.hand(canvas, cx, cy, angles.minute_deg, radius * 0.75, 4.0, HAND_COLOR);
        self.hand(canvas, cx, cy, angles.second_deg, radius * 0.85, 2.0, ACCENT_COLOR);

        // Center cap sits on top of all hands.
        canvas.fill_circle(cx, cy, 6.0, ACCENT_COLOR);
    }

    fn hand(
        &self,
        canvas: &mut dyn Canvas,
        cx: f64,
        cy: f64,
        deg: f64,
        length: f64,
        width: f64,
        color: &str,
    ) {
        let (x, y) = tip(cx, cy, deg, length);
        canvas.line(cx, cy, x, y, width, color);
    }
}

fn tip(cx: f64, cy: f64, deg: f64, length: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (cx + length * rad.sin(), cy - length * rad.cos())
}
