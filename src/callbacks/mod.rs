//! Callback handlers for the defect logger UI.
//!
//! - `diagram` - diagram surface clicks (classification + draft opening)
//! - `workflow` - disclosure step choices, cavity submission, dismissal

pub mod diagram;
pub mod workflow;
