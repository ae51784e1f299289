#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::command::{ArgRole, Path};
use crate::error::{Error, Result};

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

/// Axis-aligned box over a path's coordinate arguments.
///
/// Always derived from a [`Path`] on demand; nothing caches it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct AxisRange {
    range: Option<(f64, f64)>,
}

impl AxisRange {
    fn include(self, v: f64) -> Self {
        let range = match self.range {
            None => (v, v),
            Some((min, max)) => (min.min(v), max.max(v)),
        };
        Self { range: Some(range) }
    }
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True when the box collapses to a single point.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 && self.height() == 0.0
    }

    pub fn min(&self) -> Point {
        point(self.min_x, self.min_y)
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min(), Size::new(self.width(), self.height()))
    }
}

pub fn compute_bounding_box(path: &Path) -> Result<BoundingBox> {
    let (xs, ys) = path
        .commands()
        .iter()
        .flat_map(|c| c.roles())
        .fold(
            (AxisRange::default(), AxisRange::default()),
            |(xs, ys), (role, v)| match role {
                ArgRole::X => (xs.include(v), ys),
                ArgRole::Y => (xs, ys.include(v)),
                _ => (xs, ys),
            },
        );

    match (xs.range, ys.range) {
        (Some((min_x, max_x)), Some((min_y, max_y))) => Ok(BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }),
        _ => Err(Error::EmptyBoundingBox),
    }
}
