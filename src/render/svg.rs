//! Per-formation SVG diagrams.
//!
//! Each formation becomes a standalone SVG document: leaders drawn as
//! squares, followers as circles, a filled "nose" dot on the facing edge,
//! and the couple number as a centered label. Rotation by the facing
//! direction turns the whole dancer group, nose included.

use std::fmt::Write;

use crate::model::{Dancer, Formation, Role};
use crate::shape;

/// Dancer footprint in SVG user units.
pub const DANCER_SIZE: f64 = 20.0;
/// Center-to-center spacing between adjacent grid positions.
pub const DANCER_SPACING: f64 = DANCER_SIZE * 1.4;
/// Radius of the facing-direction nose dot.
pub const NOSE_RADIUS: f64 = 3.0;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;
const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Render a formation as a standalone SVG document.
///
/// The viewBox adds one spacing of margin around the dancer grid. When
/// the formation classifies against the shape catalog, the canonical
/// shape label is embedded as the document title.
pub fn formation_svg(formation: &Formation) -> String {
    let (max_x, max_y) = formation.extent();
    let view_width = DANCER_SPACING * (2 + max_x) as f64;
    let view_height = DANCER_SPACING * (2 + max_y) as f64;

    let mut svg = String::new();
    svg.push_str(XML_DECLARATION);
    svg.push('\n');
    let _ = write!(
        svg,
        r#"<svg xmlns="{SVG_NAMESPACE}" viewBox="0 0 {view_width} {view_height}" width="100" height="100">"#
    );
    svg.push('\n');
    if let Some(matched) = shape::identify(formation).first() {
        let _ = write!(svg, "<title>{}</title>\n", escape_xml(&matched.label()));
    }
    svg.push_str("<g class=\"formation\">\n");
    for dancer in &formation.dancers {
        dancer_svg(&mut svg, dancer);
    }
    svg.push_str("</g>\n</svg>\n");
    svg
}

fn dancer_svg(svg: &mut String, dancer: &Dancer) {
    let cx = DANCER_SPACING + dancer.x as f64 * DANCER_SPACING;
    let cy = DANCER_SPACING + dancer.y as f64 * DANCER_SPACING;
    let rotation = -90 * i32::from(dancer.facing.quarter_turns());
    let half = DANCER_SIZE / 2.0;

    let _ = write!(
        svg,
        r#"<g class="dancer couple{} {}" transform="translate({cx}, {cy}) rotate({rotation})">"#,
        dancer.couple,
        dancer.role.word(),
    );
    svg.push('\n');
    match dancer.role {
        Role::Leader => {
            let _ = write!(
                svg,
                r#"<rect fill="none" stroke="black" width="{DANCER_SIZE}" height="{DANCER_SIZE}" x="{}" y="{}"/>"#,
                -half, -half,
            );
        }
        Role::Follower => {
            let _ = write!(svg, r#"<circle fill="none" stroke="black" r="{half}" cx="0" cy="0"/>"#);
        }
    }
    svg.push('\n');
    // Nose on the leading edge; the group rotation carries it around.
    let _ = write!(
        svg,
        r#"<circle class="nose" r="{NOSE_RADIUS}" cx="0" cy="{}" stroke="none" fill="black"/>"#,
        -half,
    );
    svg.push('\n');
    let _ = write!(
        svg,
        r#"<text class="dancer-label" stroke="black" x="0" y="{NOSE_RADIUS}" text-anchor="middle" alignment-baseline="middle">{}</text>"#,
        dancer.couple,
    );
    svg.push_str("\n</g>\n");
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
