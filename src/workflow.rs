//! Annotation capture workflow.
//!
//! A click on the diagram opens a draft seeded with the click's zone, then
//! walks three disclosure steps: board side, defect type, casting cavity.
//! At most one draft exists at a time; a completed pass emits one
//! [`AnnotationRecord`] and the workflow returns to idle.

use crate::diagram::{Ring, ZoneDescriptor};
use serde::Serialize;

/// Board side chosen at step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Inboard,
    Outboard,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Inboard => "Inboard",
            Side::Outboard => "Outboard",
        }
    }

    pub fn parse(name: &str) -> Option<Side> {
        match name {
            "Inboard" => Some(Side::Inboard),
            "Outboard" => Some(Side::Outboard),
            _ => None,
        }
    }
}

/// Workflow position. `Idle` doubles as the post-completion state; there is
/// no separate terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Idle,
    AwaitingSide,
    AwaitingDefect,
    AwaitingCavity,
}

/// The single in-progress annotation. Zone fields are frozen at creation;
/// the remaining fields fill in strictly in step order.
#[derive(Debug, Clone)]
pub struct AnnotationDraft {
    pub zone: ZoneDescriptor,
    pub side: Option<Side>,
    pub defect: Option<String>,
    pub cavity: Option<String>,
}

/// Finished annotation, emitted once per completed workflow pass.
/// Serializes as a flat field-to-value map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationRecord {
    pub segment: i32,
    pub ring: Ring,
    pub distance: i32,
    pub angle: i32,
    pub timestamp: String,
    pub side: Side,
    pub defect: String,
    pub cavity: String,
}

/// Cavity submission failure. `Empty` is recoverable: the workflow stays in
/// `AwaitingCavity` and the operator may retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CavityError {
    Empty,
    NotAwaitingCavity,
}

/// The annotation state machine. Methods for steps the workflow is not in
/// report the rejection and leave all state untouched.
#[derive(Debug)]
pub struct AnnotationWorkflow {
    step: Step,
    draft: Option<AnnotationDraft>,
}

impl Default for AnnotationWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationWorkflow {
    pub fn new() -> Self {
        Self {
            step: Step::Idle,
            draft: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> Option<&AnnotationDraft> {
        self.draft.as_ref()
    }

    /// Open a draft for a freshly classified click. Returns false (and
    /// changes nothing) while another draft is in flight.
    pub fn begin(&mut self, zone: ZoneDescriptor) -> bool {
        if self.step != Step::Idle {
            return false;
        }
        self.draft = Some(AnnotationDraft {
            zone,
            side: None,
            defect: None,
            cavity: None,
        });
        self.step = Step::AwaitingSide;
        true
    }

    /// Step 1: record the board side. Only valid in `AwaitingSide`.
    pub fn choose_side(&mut self, side: Side) -> bool {
        if self.step != Step::AwaitingSide {
            return false;
        }
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };
        draft.side = Some(side);
        self.step = Step::AwaitingDefect;
        true
    }

    /// Step 2: record the defect type. Only valid in `AwaitingDefect`.
    /// Re-entering this step overwrites any previously chosen defect.
    pub fn choose_defect(&mut self, defect: &str) -> bool {
        if self.step != Step::AwaitingDefect {
            return false;
        }
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };
        draft.defect = Some(defect.to_string());
        self.step = Step::AwaitingCavity;
        true
    }

    /// Step 3: record the cavity identifier and complete the annotation.
    ///
    /// A value that is empty after trimming is rejected without any state
    /// change. On success the draft is consumed, the finished record is
    /// returned, and the workflow is idle again.
    pub fn submit_cavity(&mut self, cavity: &str) -> Result<AnnotationRecord, CavityError> {
        if self.step != Step::AwaitingCavity {
            return Err(CavityError::NotAwaitingCavity);
        }
        let trimmed = cavity.trim();
        if trimmed.is_empty() {
            return Err(CavityError::Empty);
        }
        let Some(mut draft) = self.draft.take() else {
            return Err(CavityError::NotAwaitingCavity);
        };
        draft.cavity = Some(trimmed.to_string());

        // Step order guarantees side and defect are present by now.
        let (Some(side), Some(defect), Some(cavity)) =
            (draft.side, draft.defect, draft.cavity)
        else {
            self.step = Step::Idle;
            return Err(CavityError::NotAwaitingCavity);
        };

        self.step = Step::Idle;
        Ok(AnnotationRecord {
            segment: draft.zone.segment,
            ring: draft.zone.ring,
            distance: draft.zone.distance,
            angle: draft.zone.angle,
            timestamp: draft.zone.captured_at,
            side,
            defect,
            cavity,
        })
    }

    /// Backdrop dismissal: step back one disclosure, or discard the draft
    /// when still on step 1. Earlier choices survive a step back so the
    /// operator can reselect.
    pub fn dismiss(&mut self) {
        match self.step {
            Step::Idle => {}
            Step::AwaitingSide => {
                self.draft = None;
                self.step = Step::Idle;
            }
            Step::AwaitingDefect => self.step = Step::AwaitingSide,
            Step::AwaitingCavity => self.step = Step::AwaitingDefect,
        }
    }
}
