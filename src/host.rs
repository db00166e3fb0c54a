//! Host-side value delivery.
//!
//! The embedding host receives one serialized record per completed
//! annotation and is told the required display height once at startup. The
//! only annotation history kept on our side is the most recent summary line.

use crate::workflow::AnnotationRecord;

/// Display height requested from the host frame at startup.
pub const FRAME_HEIGHT: u32 = 800;

/// Flat field-to-value JSON serialization of a finished record.
pub fn record_json(record: &AnnotationRecord) -> Result<String, String> {
    serde_json::to_string(record).map_err(|e| format!("Failed to serialize record: {e}"))
}

/// The "set value" call: one JSON line on stdout per completed annotation.
pub fn deliver(record: &AnnotationRecord) -> Result<(), String> {
    println!("{}", record_json(record)?);
    Ok(())
}

/// Most-recent-entry display string shown in the info panel.
pub fn summary_line(record: &AnnotationRecord) -> String {
    format!(
        "Segment {} | {} | {} | {} | Cavity: {}",
        record.segment,
        record.ring.as_str(),
        record.side.as_str(),
        record.defect,
        record.cavity
    )
}
