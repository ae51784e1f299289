#![forbid(unsafe_code)]

//! SVG path-data parsing and normalization (headless).
//!
//! The crate turns a `d` attribute value into a [`Path`], derives its [`BoundingBox`], and
//! produces transformed copies:
//! - [`translate_x_to_origin`]: shift x so the box starts at `x = 0`
//! - [`translate_to_origin`]: shift both axes to `(0, 0)`
//! - [`normalize`]: translate, scale into a `target_size` box, round to a fixed precision
//!
//! Every transform is a pure function returning a new value; the input path can be reused.
//!
//! ```
//! let path = pathnorm::parse("M 0 0 L 50 0 L 50 50 Z")?;
//! let out = pathnorm::normalize(&path, &pathnorm::NormalizeOptions::default())?;
//! assert_eq!(out.to_string(), "M 0 0 L 100 0 L 100 100 Z");
//! # Ok::<(), pathnorm::Error>(())
//! ```
//!
//! # Features
//!
//! - `svg` (default): extract `d` values from SVG markup (`pathnorm::svg`)

pub mod command;
pub mod config;
pub mod error;
pub mod geom;
pub mod normalize;
pub mod parse;
pub mod serialize;
#[cfg(feature = "svg")]
pub mod svg;
pub mod transform;

pub use command::{ArgRole, Command, CommandKind, Path};
pub use config::NormalizeOptions;
pub use error::{Error, Result};
pub use geom::{BoundingBox, compute_bounding_box};
pub use normalize::{NormalizedPath, Scale, normalize};
pub use parse::parse;
pub use transform::{to_absolute, translate_to_origin, translate_x_to_origin};

/// Parses `d` and returns its bounding box.
pub fn bounding_box_of(d: &str) -> Result<BoundingBox> {
    compute_bounding_box(&parse(d)?)
}

/// String-to-string x-only translation (`"M 10 10 L 20 20 Z"` -> `"M 0 10 L 10 20 Z"`).
pub fn translate_x(d: &str) -> Result<String> {
    Ok(translate_x_to_origin(&parse(d)?)?.to_path_data())
}

/// String-to-string translation of both axes.
pub fn translate_xy(d: &str) -> Result<String> {
    Ok(translate_to_origin(&parse(d)?)?.to_path_data())
}

/// String-to-string form of the full [`normalize`] pipeline.
pub fn normalize_str(d: &str, options: &NormalizeOptions) -> Result<String> {
    Ok(normalize(&parse(d)?, options)?.to_path_data())
}

#[cfg(test)]
mod tests;
