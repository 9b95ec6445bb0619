use crate::angle::format_degrees;
use crate::options::OverlayStyle;
use crate::overlay::{LineShape, MarkerShape, Overlay};
use crate::types::AnglePair;
use std::fmt::Write;

/// Render an overlay scene as an SVG string.
///
/// The viewBox is the square drawing surface; the background image is
/// stretched over it the same way the canvas draws it.
pub fn render(overlay: &Overlay, angles: &AnglePair, style: &OverlayStyle) -> String {
    let size = style.surface_size;
    let caption_h = if style.show_angles {
        style.font_size * 2.5
    } else {
        0.0
    };

    let mut svg = String::with_capacity(1024);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 {} {}">"#,
        size,
        size + caption_h
    );

    // Layer order (back → front):
    // 1. Neutral fill, then the background image
    if let Some(fill) = &overlay.fill {
        let _ = write!(
            svg,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}" />"#,
            size,
            size,
            escape_attr(fill)
        );
    }
    if let Some(url) = &overlay.image_url {
        let _ = write!(
            svg,
            r#"<image x="0" y="0" width="{}" height="{}" preserveAspectRatio="none" href="{}" />"#,
            size,
            size,
            escape_attr(url)
        );
    }
    // 2. Completed segments
    for line in &overlay.lines {
        render_line(&mut svg, line);
    }
    // 3. Markers on top of line ends
    for marker in &overlay.markers {
        render_marker(&mut svg, marker);
    }
    // 4. Caption below the surface (optional)
    if style.show_angles {
        render_caption(&mut svg, angles, size, style);
    }

    svg.push_str("</svg>");
    svg
}

fn render_line(svg: &mut String, line: &LineShape) {
    let _ = write!(
        svg,
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke-width="{}" stroke="{}" />"#,
        line.from.x,
        line.from.y,
        line.to.x,
        line.to.y,
        line.width,
        escape_attr(&line.color)
    );
}

fn render_marker(svg: &mut String, marker: &MarkerShape) {
    let half = marker.size / 2.0;
    let _ = write!(
        svg,
        r#"<rect x="{:.2}" y="{:.2}" width="{}" height="{}" fill="{}" />"#,
        marker.center.x - half,
        marker.center.y - half,
        marker.size,
        marker.size,
        escape_attr(&marker.color)
    );
}

fn render_caption(svg: &mut String, angles: &AnglePair, size: f64, style: &OverlayStyle) {
    let _ = write!(
        svg,
        r#"<text x="{:.2}" y="{:.2}" font-size="{}" text-anchor="middle" font-family="sans-serif">acute: {}° obtuse: {}°</text>"#,
        size / 2.0,
        size + style.font_size * 1.6,
        style.font_size,
        format_degrees(angles.small),
        format_degrees(angles.large)
    );
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
