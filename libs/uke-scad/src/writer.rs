//! # Writer
//!
//! Indented OpenSCAD source for a shape tree. Transforms and extrusions are
//! written without braces, one child indented below; operations take a
//! braced block.
//!
//! ```text
//! difference() {
//!   cube([40, 20, 4]);
//!   translate([20, 10, -1])
//!     cylinder(h = 10, r = 3);
//! }
//! ```

use config::RenderSettings;
use glam::{DVec2, DVec3};
use uke_csg::Shape;

const INDENT: &str = "  ";

/// Formats a number the way a person would type it: no trailing zeros, no
/// negative zero, at most six decimals.
///
/// ```rust
/// use uke_scad::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333");
/// ```
pub fn format_number(value: f64) -> String {
    let text = format!("{value:.6}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

fn vec3(v: DVec3) -> String {
    format!(
        "[{}, {}, {}]",
        format_number(v.x),
        format_number(v.y),
        format_number(v.z)
    )
}

fn vec2(v: DVec2) -> String {
    format!("[{}, {}]", format_number(v.x), format_number(v.y))
}

fn segments(segments: Option<u32>) -> String {
    match segments {
        Some(n) => format!(", $fn = {n}"),
        None => String::new(),
    }
}

fn center(center: bool) -> &'static str {
    if center {
        ", center = true"
    } else {
        ""
    }
}

/// Accumulates source text.
#[derive(Debug, Default)]
pub struct ScadWriter {
    out: String,
    depth: usize,
}

impl ScadWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Title comment and the global resolution variables.
    pub fn header(&mut self, title: &str, settings: &RenderSettings) {
        self.line(&format!("// {title}"));
        self.line("// Generated by uke. Edit the parameters, not this file.");
        self.line(&format!("$fn = {};", settings.fn_));
        self.line(&format!("$fa = {};", format_number(settings.fa)));
        self.line(&format!("$fs = {};", format_number(settings.fs)));
        self.out.push('\n');
    }

    /// Writes `shape` at the current depth. An empty tree becomes a comment.
    pub fn shape(&mut self, shape: &Shape) {
        if shape.is_empty() && self.depth == 0 {
            self.line("// nothing selected");
            return;
        }
        self.node(shape);
    }

    fn node(&mut self, shape: &Shape) {
        match shape {
            Shape::Cube { size, center: c } => {
                self.line(&format!("cube({}{});", vec3(*size), center(*c)));
            }
            Shape::Sphere { radius, segments: n } => {
                self.line(&format!("sphere(r = {}{});", format_number(*radius), segments(*n)));
            }
            Shape::Cylinder {
                height,
                radius_bottom,
                radius_top,
                center: c,
                segments: n,
            } => {
                let radii = if radius_bottom == radius_top {
                    format!("r = {}", format_number(*radius_bottom))
                } else {
                    format!(
                        "r1 = {}, r2 = {}",
                        format_number(*radius_bottom),
                        format_number(*radius_top)
                    )
                };
                self.line(&format!(
                    "cylinder(h = {}, {}{}{});",
                    format_number(*height),
                    radii,
                    center(*c),
                    segments(*n)
                ));
            }
            Shape::Circle { radius, segments: n } => {
                self.line(&format!("circle(r = {}{});", format_number(*radius), segments(*n)));
            }
            Shape::Square { size, center: c } => {
                self.line(&format!("square({}{});", vec2(*size), center(*c)));
            }
            Shape::Polygon { points } => {
                let list: Vec<String> = points.iter().map(|p| vec2(*p)).collect();
                self.line(&format!("polygon(points = [{}]);", list.join(", ")));
            }
            Shape::Translate { offset, child } => {
                self.wrap(&format!("translate({})", vec3(*offset)), child);
            }
            Shape::Rotate { angles, child } => {
                self.wrap(&format!("rotate({})", vec3(*angles)), child);
            }
            Shape::Scale { factors, child } => {
                self.wrap(&format!("scale({})", vec3(*factors)), child);
            }
            Shape::Mirror { normal, child } => {
                self.wrap(&format!("mirror({})", vec3(*normal)), child);
            }
            Shape::LinearExtrude {
                height,
                center: c,
                scale,
                child,
            } => {
                let scale = if *scale == DVec2::ONE {
                    String::new()
                } else if scale.x == scale.y {
                    format!(", scale = {}", format_number(scale.x))
                } else {
                    format!(", scale = {}", vec2(*scale))
                };
                let head = format!(
                    "linear_extrude(height = {}{}{})",
                    format_number(*height),
                    center(*c),
                    scale
                );
                self.wrap(&head, child);
            }
            Shape::Boolean { operation, children } => {
                self.block(operation.keyword(), children);
            }
            Shape::Hull { children } => self.block("hull", children),
            Shape::Minkowski { children } => self.block("minkowski", children),
            Shape::Empty => self.line("union();"),
        }
    }

    fn wrap(&mut self, head: &str, child: &Shape) {
        self.line(head);
        self.depth += 1;
        self.node(child);
        self.depth -= 1;
    }

    fn block(&mut self, keyword: &str, children: &[Shape]) {
        self.line(&format!("{keyword}() {{"));
        self.depth += 1;
        for child in children {
            self.node(child);
        }
        self.depth -= 1;
        self.line("}");
    }

    pub fn finish(self) -> String {
        self.out
    }
}
