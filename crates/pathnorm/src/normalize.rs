//! Translate, scale and fixed-precision formatting pipeline.

use std::fmt;

use crate::command::{ArgRole, Path};
use crate::config::NormalizeOptions;
use crate::error::Result;
use crate::geom::{BoundingBox, compute_bounding_box};
use crate::serialize::{fmt_fixed, fmt_fixed_into, write_path_into};
use crate::transform::to_absolute;

/// Scale factor applied by [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    Uniform(f64),
    /// The bounding box was a single point; scaling was skipped (factor 1).
    Degenerate,
}

impl Scale {
    pub fn factor(self) -> f64 {
        match self {
            Self::Uniform(f) => f,
            Self::Degenerate => 1.0,
        }
    }
}

/// Result of [`normalize`]: the transformed path plus how to print it.
///
/// `Display` writes every number with exactly `precision` fractional digits (arc flags stay
/// `0`/`1`).
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPath {
    pub path: Path,
    pub precision: usize,
    pub scale: Scale,
}

impl NormalizedPath {
    pub fn bounding_box(&self) -> Result<BoundingBox> {
        compute_bounding_box(&self.path)
    }

    pub fn to_path_data(&self) -> String {
        let mut out = String::new();
        write_path_into(&mut out, &self.path, |out, role, v| match role {
            Some(ArgRole::Flag) => out.push(if v == 0.0 { '0' } else { '1' }),
            _ => fmt_fixed_into(out, v, self.precision),
        });
        out
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_data())
    }
}

/// Fits `path` into a `target_size` box anchored at the origin.
///
/// Steps, in order: optional relative-to-absolute resolution, bounding box, translation of
/// `(min_x, min_y)` to `(0, 0)`, one uniform scale so the larger side equals `target_size`,
/// rounding of every value to `precision` fractional digits.
pub fn normalize(path: &Path, options: &NormalizeOptions) -> Result<NormalizedPath> {
    options.validate()?;

    let resolved;
    let path = if options.absolute {
        resolved = to_absolute(path)?;
        &resolved
    } else {
        path
    };

    let bbox = compute_bounding_box(path)?;
    let extent = bbox.width().max(bbox.height());
    let scale = if extent > 0.0 {
        Scale::Uniform(options.target_size / extent)
    } else {
        Scale::Degenerate
    };
    let factor = scale.factor();
    let precision = options.precision;
    let target_size = options.target_size;

    tracing::debug!(
        min_x = bbox.min_x,
        min_y = bbox.min_y,
        extent,
        factor,
        precision,
        "normalize"
    );

    // `(v - min) / extent` is within [0, 1] for coordinates.
    let fit = |len: f64| match scale {
        Scale::Uniform(_) => len / extent * target_size,
        Scale::Degenerate => len,
    };
    let round = |v: f64| fmt_fixed(v, precision).parse::<f64>().unwrap_or(v);
    let path = path
        .map_args(|role, v| match role {
            ArgRole::X => round(fit(v - bbox.min_x)),
            ArgRole::Y => round(fit(v - bbox.min_y)),
            ArgRole::RadiusX | ArgRole::RadiusY => round(fit(v)),
            ArgRole::Angle => round(v),
            ArgRole::Flag => v,
        })
        .ensure_finite()?;

    Ok(NormalizedPath {
        path,
        precision,
        scale,
    })
}
