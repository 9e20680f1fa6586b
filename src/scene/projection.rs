//! Linear mapping from data coordinates into the plot area.
//!
//! The y axis points up in data space and down in pixel space.

use super::types::{Rect, Tick};
use crate::types::{CanvasConfig, Point};

#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub plot: Rect,
    x_range: [f64; 2],
    y_range: [f64; 2],
}

impl Projection {
    /// Build a projection for a canvas. Call `CanvasConfig::validate` first.
    pub fn new(canvas: &CanvasConfig) -> Self {
        let m = &canvas.margins;
        let plot = Rect {
            x: m.left,
            y: m.top,
            width: canvas.width as f64 - m.left - m.right,
            height: canvas.height as f64 - m.top - m.bottom,
        };
        Self {
            plot,
            x_range: canvas.x_range,
            y_range: canvas.y_range,
        }
    }

    pub fn project(&self, p: &Point) -> Point {
        let [x0, x1] = self.x_range;
        let [y0, y1] = self.y_range;
        Point {
            x: self.plot.x + (p.x - x0) / (x1 - x0) * self.plot.width,
            y: self.plot.y + self.plot.height - (p.y - y0) / (y1 - y0) * self.plot.height,
        }
    }

    /// Whole-number ticks inside the x range
    pub fn x_ticks(&self) -> Vec<Tick> {
        integer_steps(self.x_range)
            .map(|v| Tick {
                at: self.project(&Point::new(v, self.y_range[0])).x,
                label: format_tick(v),
            })
            .collect()
    }

    /// Whole-number ticks inside the y range
    pub fn y_ticks(&self) -> Vec<Tick> {
        integer_steps(self.y_range)
            .map(|v| Tick {
                at: self.project(&Point::new(self.x_range[0], v)).y,
                label: format_tick(v),
            })
            .collect()
    }
}

fn integer_steps([min, max]: [f64; 2]) -> impl Iterator<Item = f64> {
    let first = min.ceil() as i64;
    let last = max.floor() as i64;
    (first..=last).map(|v| v as f64)
}

fn format_tick(v: f64) -> String {
    format!("{}", v as i64)
}
