//! Diagram click handling.
//!
//! A click is classified into its zone and offered to the workflow. While a
//! draft is already open the click is ignored; otherwise the marker is
//! painted and step 1 opens.

use crate::diagram::DiagramGeometry;
use crate::render;
use crate::workflow::AnnotationWorkflow;
use crate::AppWindow;
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

/// Sets up the diagram surface callbacks on the UI.
pub fn setup_diagram_callbacks(
    ui: &AppWindow,
    workflow: Rc<RefCell<AnnotationWorkflow>>,
    geometry: Rc<DiagramGeometry>,
) {
    let ui_weak = ui.as_weak();
    ui.on_diagram_clicked(move |x, y| {
        let zone = geometry.classify(x, y);

        if !workflow.borrow_mut().begin(zone.clone()) {
            if let Some(ui) = ui_weak.upgrade() {
                ui.set_status_text("Finish or dismiss the current entry first".into());
            }
            return;
        }

        if let Some(ui) = ui_weak.upgrade() {
            ui.set_diagram_source(render::diagram_image_with_marker(&geometry, x, y));
            ui.set_pending_zone(format!("Segment {} | {}", zone.segment, zone.ring).into());
            ui.set_pending_detail(
                format!("Angle: {}\u{b0} | Distance: {} px", zone.angle, zone.distance).into(),
            );
            ui.set_cavity_invalid(false);
            ui.set_status_text("".into());
            ui.set_workflow_step(1);
        }
    });
}
