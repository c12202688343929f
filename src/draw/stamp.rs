//! Star stamp shape: color substitution into an SVG template and parsing.
//!
//! The template is parsed with `usvg` after the fill placeholder is replaced,
//! and the filled outlines are flattened into polygon contours that the
//! Cairo renderer can scale into the stamp's render box.

use super::color::Color;
use log::warn;
use std::collections::HashMap;
use thiserror::Error;

/// Placeholder replaced by the stamp color.
pub const FILL_PLACEHOLDER: &str = "{{fillColor}}";

/// Five-pointed star on a 200x200 viewbox.
pub const STAR_TEMPLATE: &str = concat!(
    r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200">"#,
    r#"<polygon id="star" fill="{{fillColor}}" points="100,0,129.38926261462365,59.54915028125263,"#,
    r#"195.10565162951536,69.09830056250526,147.55282581475768,115.45084971874736,"#,
    r#"158.77852522924732,180.90169943749473,100,150,41.2214747707527,180.90169943749476,"#,
    r#"52.447174185242325,115.45084971874738,4.894348370484636,69.09830056250527,"#,
    r#"70.61073738537632,59.549150281252636"></polygon></svg>"#
);

/// Errors produced while building a stamp shape from a color.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StampShapeError {
    /// The color is not a recognised CSS color
    #[error("unknown stamp color '{0}'")]
    UnknownColor(String),

    /// The template failed to parse after substitution
    #[error("stamp template failed to parse: {0}")]
    Parse(String),

    /// The parsed template contains nothing to fill
    #[error("stamp template has no filled outline")]
    NoFilledPath,

    /// The SVG parser resolved the fill to a different color than requested
    #[error("stamp color '{requested}' resolved to {resolved}")]
    FillMismatch { requested: String, resolved: String },
}

/// Parsed stamp geometry in template (viewbox) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct StampShape {
    /// Fill color resolved from the parsed template
    pub fill: Color,
    /// Closed polygon outlines
    pub contours: Vec<Vec<(f64, f64)>>,
    /// Template width in viewbox units
    pub width: f64,
    /// Template height in viewbox units
    pub height: f64,
}

impl StampShape {
    /// Scale factors mapping the template onto a `size x size` box.
    pub fn scale_to(&self, size: f64) -> (f64, f64) {
        (size / self.width, size / self.height)
    }
}

/// Builds the star shape for `color` from [`STAR_TEMPLATE`].
pub fn render_stamp_shape(color: &str) -> Result<StampShape, StampShapeError> {
    render_shape_from_template(STAR_TEMPLATE, color)
}

/// Substitutes `color` into `template` and parses the result.
///
/// Only the first placeholder is replaced.
pub fn render_shape_from_template(
    template: &str,
    color: &str,
) -> Result<StampShape, StampShapeError> {
    let Some(requested) = Color::parse(color) else {
        return Err(StampShapeError::UnknownColor(color.to_string()));
    };

    let svg = template.replacen(FILL_PLACEHOLDER, color, 1);
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
        .map_err(|e| StampShapeError::Parse(e.to_string()))?;

    let mut fill = None;
    let mut contours = Vec::new();
    collect_filled(tree.root(), &mut fill, &mut contours);

    let fill = fill.ok_or(StampShapeError::NoFilledPath)?;
    if contours.is_empty() {
        return Err(StampShapeError::NoFilledPath);
    }
    // Color forms the SVG parser does not know silently resolve to black
    if !same_rgba(fill, requested) {
        return Err(StampShapeError::FillMismatch {
            requested: color.to_string(),
            resolved: format!("{} a={:.2}", fill.to_hex(), fill.a),
        });
    }

    let size = tree.size();
    Ok(StampShape {
        fill,
        contours,
        width: size.width() as f64,
        height: size.height() as f64,
    })
}

/// Channel-wise comparison within one 8-bit step.
fn same_rgba(a: Color, b: Color) -> bool {
    const TOLERANCE: f64 = 1.0 / 255.0 + 1e-9;
    [(a.r, b.r), (a.g, b.g), (a.b, b.b), (a.a, b.a)]
        .iter()
        .all(|(x, y)| (x - y).abs() <= TOLERANCE)
}

fn collect_filled(
    group: &usvg::Group,
    fill: &mut Option<Color>,
    contours: &mut Vec<Vec<(f64, f64)>>,
) {
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => collect_filled(g, fill, contours),
            usvg::Node::Path(p) => {
                let Some(path_fill) = p.fill() else {
                    continue;
                };
                let usvg::Paint::Color(c) = path_fill.paint() else {
                    continue;
                };
                if fill.is_none() {
                    *fill = Some(Color {
                        r: c.red as f64 / 255.0,
                        g: c.green as f64 / 255.0,
                        b: c.blue as f64 / 255.0,
                        a: path_fill.opacity().get() as f64,
                    });
                }
                flatten_path(p.data(), &p.abs_transform(), contours);
            }
            usvg::Node::Image(_) | usvg::Node::Text(_) => {}
        }
    }
}

/// Flattens path segments into polygons; curves collapse to their end points.
fn flatten_path(
    data: &usvg::tiny_skia_path::Path,
    transform: &usvg::Transform,
    contours: &mut Vec<Vec<(f64, f64)>>,
) {
    use usvg::tiny_skia_path::PathSegment;

    let map = |p: usvg::tiny_skia_path::Point| -> (f64, f64) {
        let x = transform.sx * p.x + transform.kx * p.y + transform.tx;
        let y = transform.ky * p.x + transform.sy * p.y + transform.ty;
        (x as f64, y as f64)
    };

    let mut current: Vec<(f64, f64)> = Vec::new();
    for segment in data.segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                if current.len() > 2 {
                    contours.push(std::mem::take(&mut current));
                }
                current.clear();
                current.push(map(p));
            }
            PathSegment::LineTo(p) => current.push(map(p)),
            PathSegment::QuadTo(_, p) => current.push(map(p)),
            PathSegment::CubicTo(_, _, p) => current.push(map(p)),
            PathSegment::Close => {
                if current.len() > 2 {
                    contours.push(std::mem::take(&mut current));
                }
                current.clear();
            }
        }
    }
    if current.len() > 2 {
        contours.push(current);
    }
}

/// Memoizes stamp shapes per color for repeated render passes.
///
/// Failures are cached too, and logged only the first time a color fails.
#[derive(Debug, Default)]
pub struct StampCache {
    shapes: HashMap<String, Result<StampShape, StampShapeError>>,
}

impl StampCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shape for `color`, or `None` if it cannot be built.
    pub fn get(&mut self, color: &str) -> Option<&StampShape> {
        let entry = self.shapes.entry(color.to_string()).or_insert_with(|| {
            let result = render_stamp_shape(color);
            if let Err(err) = &result {
                warn!("Skipping stamps colored '{color}': {err}");
            }
            result
        });
        entry.as_ref().ok()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_parses_for_palette_colors() {
        for color in ["red", "green", "blue", "yellow"] {
            let shape = render_stamp_shape(color).unwrap();
            assert_eq!(shape.contours.len(), 1);
            assert_eq!(shape.contours[0].len(), 10);
            assert_eq!((shape.width, shape.height), (200.0, 200.0));
        }
    }

    #[test]
    fn fill_reflects_substituted_color() {
        let shape = render_stamp_shape("blue").unwrap();
        assert_eq!(shape.fill, crate::draw::color::BLUE);
    }

    #[test]
    fn star_points_stay_inside_viewbox() {
        let shape = render_stamp_shape("red").unwrap();
        for &(x, y) in &shape.contours[0] {
            assert!((0.0..=200.0).contains(&x), "x out of range: {x}");
            assert!((0.0..=200.0).contains(&y), "y out of range: {y}");
        }
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert_eq!(
            render_stamp_shape("definitely-not-a-color"),
            Err(StampShapeError::UnknownColor("definitely-not-a-color".into()))
        );
    }

    #[test]
    fn malformed_template_reports_parse_error() {
        let broken = r#"<svg xmlns="http://www.w3.org/2000/svg"><polygon fill="{{fillColor}}""#;
        assert!(matches!(
            render_shape_from_template(broken, "red"),
            Err(StampShapeError::Parse(_))
        ));
    }

    #[test]
    fn template_without_fill_is_rejected() {
        let hollow = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><rect width="10" height="10" fill="none" stroke="{{fillColor}}"/></svg>"#;
        assert_eq!(
            render_shape_from_template(hollow, "red"),
            Err(StampShapeError::NoFilledPath)
        );
    }

    #[test]
    fn color_forms_the_svg_parser_misreads_are_rejected() {
        // Valid CSS, but not an SVG paint: the parsed fill would come out black
        assert!(Color::parse("hwb(240 0% 0%)").is_some());
        assert!(matches!(
            render_stamp_shape("hwb(240 0% 0%)"),
            Err(StampShapeError::FillMismatch { .. })
        ));
    }

    #[test]
    fn hex_and_rgb_forms_keep_their_color() {
        let expected = Color::parse("#0080ff").unwrap();
        for color in ["#0080ff", "rgb(0, 128, 255)"] {
            let shape = render_stamp_shape(color).unwrap();
            assert!(same_rgba(shape.fill, expected), "{color}: {:?}", shape.fill);
        }
    }

    #[test]
    fn cache_skips_misread_colors() {
        let mut cache = StampCache::new();
        assert!(cache.get("hwb(240 0% 0%)").is_none());
        assert!(cache.get("blue").is_some());
    }

    #[test]
    fn cache_remembers_failures() {
        let mut cache = StampCache::new();
        assert!(cache.get("red").is_some());
        assert!(cache.get("nope").is_none());
        assert!(cache.get("nope").is_none());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn scale_maps_template_to_render_box() {
        let shape = render_stamp_shape("red").unwrap();
        assert_eq!(shape.scale_to(50.0), (0.25, 0.25));
    }
}
