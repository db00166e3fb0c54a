//! Casting diagram geometry and click-zone classification.
//!
//! The diagram is a fixed clock-face layout: 12 equal angular segments
//! numbered clockwise from the top, crossed by 7 concentric bands (6 bounded
//! rings plus `Outside`). Classification maps a click in canvas space to the
//! (segment, ring) zone containing it.

use chrono::{Local, SecondsFormat};
use serde::Serialize;

/// Fixed diagram layout. Part of the product definition, not user
/// configurable.
#[derive(Debug, Clone)]
pub struct DiagramGeometry {
    pub center_x: f32,
    pub center_y: f32,
    /// Ascending outer radii of the six bounded rings, innermost first.
    pub ring_radii: [f32; 6],
    pub segment_count: i32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Click feedback marker radius. Cosmetic, consumed by the renderer only.
    pub marker_radius: f32,
    /// Radius at which the renderer places the segment number labels.
    pub label_radius: f32,
}

impl Default for DiagramGeometry {
    fn default() -> Self {
        Self {
            center_x: 250.0,
            center_y: 250.0,
            ring_radii: [25.0, 35.0, 140.0, 170.0, 230.0, 240.0],
            segment_count: 12,
            canvas_width: 500,
            canvas_height: 500,
            marker_radius: 5.0,
            label_radius: 200.0,
        }
    }
}

/// Concentric bands of the diagram, innermost first. Everything past the
/// last ring radius is `Outside`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Ring {
    Center,
    CenterRing,
    Inner,
    Middle,
    Outer,
    Border,
    Outside,
}

impl Ring {
    /// The six bounded rings, matching `DiagramGeometry::ring_radii` by index.
    pub const BOUNDED: [Ring; 6] = [
        Ring::Center,
        Ring::CenterRing,
        Ring::Inner,
        Ring::Middle,
        Ring::Outer,
        Ring::Border,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ring::Center => "Center",
            Ring::CenterRing => "CenterRing",
            Ring::Inner => "Inner",
            Ring::Middle => "Middle",
            Ring::Outer => "Outer",
            Ring::Border => "Border",
            Ring::Outside => "Outside",
        }
    }
}

impl std::fmt::Display for Ring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The semantic zone of one click, captured at classification time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneDescriptor {
    /// 1-based segment index, clockwise from the top.
    pub segment: i32,
    pub ring: Ring,
    /// Rounded pixel distance from the diagram center.
    pub distance: i32,
    /// Rounded clockwise-from-top angle in [0, 360).
    pub angle: i32,
    /// ISO-8601 classification timestamp.
    pub captured_at: String,
}

impl DiagramGeometry {
    /// Distance from center and clockwise-from-top angle in degrees [0, 360).
    ///
    /// The exact center has no defined direction and reports angle 0.
    pub fn polar(&self, x: f32, y: f32) -> (f32, f32) {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance == 0.0 {
            return (0.0, 0.0);
        }
        let mut angle = dy.atan2(dx).to_degrees() + 90.0;
        if angle < 0.0 {
            angle += 360.0;
        }
        (distance, angle)
    }

    /// Ring containing a point at the given distance from center.
    ///
    /// A distance exactly on a ring radius belongs to the inner ring.
    pub fn ring_at(&self, distance: f32) -> Ring {
        for (radius, ring) in self.ring_radii.iter().zip(Ring::BOUNDED) {
            if distance <= *radius {
                return ring;
            }
        }
        Ring::Outside
    }

    /// 1-based segment index for a clockwise-from-top angle in [0, 360).
    ///
    /// An angle exactly on a segment boundary belongs to the segment
    /// starting there.
    pub fn segment_at(&self, angle: f32) -> i32 {
        let span = 360.0 / self.segment_count as f32;
        let segment = (angle / span).floor() as i32 + 1;
        segment.clamp(1, self.segment_count)
    }

    /// Classify a click in canvas space into its diagram zone.
    pub fn classify(&self, x: f32, y: f32) -> ZoneDescriptor {
        let (distance, angle) = self.polar(x, y);
        ZoneDescriptor {
            segment: self.segment_at(angle),
            ring: self.ring_at(distance),
            distance: distance.round() as i32,
            angle: (angle.round() as i32).rem_euclid(360),
            captured_at: Local::now().to_rfc3339_opts(SecondsFormat::Millis, false),
        }
    }
}
