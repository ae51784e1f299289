//! SVG document helpers: pulling `d` values out of markup and wrapping one back up for preview.

use crate::error::{Error, Result};
use crate::geom::BoundingBox;
use crate::serialize::js_number_to_string;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

fn parse_document(svg: &str) -> Result<roxmltree::Document<'_>> {
    roxmltree::Document::parse(svg).map_err(|e| Error::Svg {
        message: e.to_string(),
    })
}

/// Yields, in document order, the `d` attribute of every `path` element.
///
/// Elements without a `d` attribute are skipped.
pub fn path_data_values(svg: &str) -> Result<Vec<String>> {
    let doc = parse_document(svg)?;
    let values: Vec<String> = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "path")
        .filter_map(|n| n.attribute("d"))
        .map(str::to_string)
        .collect();
    tracing::debug!(paths = values.len(), "extracted path data");
    Ok(values)
}

/// The `d` attribute of the first `path` element that has one.
pub fn first_path_data(svg: &str) -> Result<String> {
    let doc = parse_document(svg)?;
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "path")
        .find_map(|n| n.attribute("d"))
        .map(str::to_string)
        .ok_or(Error::NoPathElement)
}

/// Wraps path data in a standalone SVG document, optionally framed by `view_box`.
pub fn preview_document(d: &str, view_box: Option<&BoundingBox>) -> String {
    let mut out = String::new();
    out.push_str(r#"<svg xmlns=""#);
    out.push_str(SVG_NAMESPACE);
    out.push('"');
    if let Some(r) = view_box.map(BoundingBox::to_rect) {
        let mut buf = ryu_js::Buffer::new();
        out.push_str(r#" viewBox=""#);
        let values = [r.origin.x, r.origin.y, r.size.width, r.size.height];
        for (i, v) in values.into_iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(js_number_to_string(v, &mut buf));
        }
        out.push('"');
    }
    out.push_str(r#"><path d=""#);
    out.push_str(&htmlize::escape_attribute(d));
    out.push_str(r#"" /></svg>"#);
    out
}
