//! Diagram surface rendering.
//!
//! Owns every pixel of the diagram: the static clock-face (ring bands,
//! segment separators, border) and the per-click feedback marker are painted
//! into a shared pixel buffer; segment number labels are emitted as
//! positioned text for the UI layer to overlay.

use crate::diagram::DiagramGeometry;
use slint::{Rgb8Pixel, SharedPixelBuffer};

const BACKGROUND: (u8, u8, u8) = (0xe8, 0xe8, 0xe8);
const OUTLINE: (u8, u8, u8) = (0x00, 0x00, 0x00);
const OUTER_BAND: (u8, u8, u8) = (0x87, 0xce, 0xeb);
const MIDDLE_BAND: (u8, u8, u8) = (0x93, 0x70, 0xdb);
const INNER_DISC: (u8, u8, u8) = (0x80, 0x80, 0x80);
const CENTER_RING_BAND: (u8, u8, u8) = (0x00, 0xce, 0xd1);
const CENTER_DISC: (u8, u8, u8) = (0xff, 0xff, 0xff);
const MARKER_FILL: (u8, u8, u8) = (0xff, 0x00, 0x00);
const MARKER_EDGE: (u8, u8, u8) = (0xff, 0xff, 0xff);

/// The static diagram with no marker.
pub fn diagram_image(geometry: &DiagramGeometry) -> slint::Image {
    slint::Image::from_rgb8(render(geometry, None))
}

/// The diagram with the click feedback marker painted at the given point.
pub fn diagram_image_with_marker(geometry: &DiagramGeometry, x: f32, y: f32) -> slint::Image {
    slint::Image::from_rgb8(render(geometry, Some((x, y))))
}

fn render(geometry: &DiagramGeometry, marker: Option<(f32, f32)>) -> SharedPixelBuffer<Rgb8Pixel> {
    let width = geometry.canvas_width;
    let height = geometry.canvas_height;
    let mut buffer = SharedPixelBuffer::new(width, height);
    let data = buffer.make_mut_bytes();

    for py in 0..height {
        for px in 0..width {
            // Sample at the pixel center.
            let color = pixel_color(geometry, px as f32 + 0.5, py as f32 + 0.5, marker);
            let i = ((py * width + px) * 3) as usize;
            data[i] = color.0;
            data[i + 1] = color.1;
            data[i + 2] = color.2;
        }
    }

    buffer
}

fn pixel_color(
    geometry: &DiagramGeometry,
    x: f32,
    y: f32,
    marker: Option<(f32, f32)>,
) -> (u8, u8, u8) {
    if let Some((mx, my)) = marker {
        let d = ((x - mx) * (x - mx) + (y - my) * (y - my)).sqrt();
        if d <= geometry.marker_radius {
            return MARKER_FILL;
        }
        if d <= geometry.marker_radius + 1.5 {
            return MARKER_EDGE;
        }
    }

    let (distance, angle) = geometry.polar(x, y);
    let [r_center, r_center_ring, r_inner, r_middle, r_outer, r_border] = geometry.ring_radii;

    if distance > r_border {
        return BACKGROUND;
    }
    if distance > r_outer {
        // The border band is drawn solid black.
        return OUTLINE;
    }
    if distance > r_middle {
        if on_segment_boundary(geometry, distance, angle)
            || r_outer - distance < 1.5
            || distance - r_middle < 1.5
        {
            return OUTLINE;
        }
        return OUTER_BAND;
    }
    if distance > r_inner {
        return MIDDLE_BAND;
    }
    if distance > r_center_ring {
        if on_segment_boundary(geometry, distance, angle) {
            return OUTLINE;
        }
        return INNER_DISC;
    }
    if distance > r_center {
        if r_center_ring - distance < 1.0 || distance - r_center < 1.0 {
            return OUTLINE;
        }
        return CENTER_RING_BAND;
    }
    CENTER_DISC
}

/// True when the point lies within ~a pixel of a segment separator line.
fn on_segment_boundary(geometry: &DiagramGeometry, distance: f32, angle: f32) -> bool {
    let span = 360.0 / geometry.segment_count as f32;
    let rem = angle % span;
    let delta = rem.min(span - rem);
    distance * delta.to_radians().sin() < 0.75
}

/// Label text and canvas position for each segment number, placed at the
/// segment's angular center on the label radius.
pub fn segment_label_positions(geometry: &DiagramGeometry) -> Vec<(String, f32, f32)> {
    let span = 360.0 / geometry.segment_count as f32;
    (1..=geometry.segment_count)
        .map(|segment| {
            let rad = ((segment as f32 - 0.5) * span).to_radians();
            (
                segment.to_string(),
                geometry.center_x + geometry.label_radius * rad.sin(),
                geometry.center_y - geometry.label_radius * rad.cos(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buffer: &SharedPixelBuffer<Rgb8Pixel>, x: u32, y: u32, width: u32) -> (u8, u8, u8) {
        let data = buffer.as_bytes();
        let i = ((y * width + x) * 3) as usize;
        (data[i], data[i + 1], data[i + 2])
    }

    #[test]
    fn buffer_covers_the_whole_canvas() {
        let geometry = DiagramGeometry::default();
        let buffer = render(&geometry, None);
        assert_eq!(buffer.width(), geometry.canvas_width);
        assert_eq!(buffer.height(), geometry.canvas_height);
    }

    #[test]
    fn bands_get_their_colors() {
        let geometry = DiagramGeometry::default();
        let buffer = render(&geometry, None);
        let w = geometry.canvas_width;
        // Corner is outside the diagram.
        assert_eq!(pixel(&buffer, 0, 0, w), BACKGROUND);
        // Dead center is the white center disc.
        assert_eq!(pixel(&buffer, 250, 250, w), CENTER_DISC);
        // Straight up from center at distance 235 is in the black border band.
        assert_eq!(pixel(&buffer, 250, 15, w), OUTLINE);
        // Distance 155 up from center is in the purple middle band.
        assert_eq!(pixel(&buffer, 250, 95, w), MIDDLE_BAND);
    }

    #[test]
    fn marker_overrides_the_underlying_band() {
        let geometry = DiagramGeometry::default();
        let buffer = render(&geometry, Some((250.0, 250.0)));
        assert_eq!(pixel(&buffer, 250, 250, geometry.canvas_width), MARKER_FILL);
    }

    #[test]
    fn one_label_per_segment_inside_the_canvas() {
        let geometry = DiagramGeometry::default();
        let labels = segment_label_positions(&geometry);
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0].0, "1");
        assert_eq!(labels[11].0, "12");
        for (_, x, y) in &labels {
            assert!(*x >= 0.0 && *x <= geometry.canvas_width as f32);
            assert!(*y >= 0.0 && *y <= geometry.canvas_height as f32);
        }
    }
}
