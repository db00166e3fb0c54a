//! Disclosure step callbacks.
//!
//! Handles: side choice, defect choice, cavity submission, and backdrop
//! dismissal. Each callback drives the workflow state machine and mirrors
//! the resulting step back into the UI.

use crate::config::AppConfig;
use crate::defects::DefectCatalog;
use crate::diagram::DiagramGeometry;
use crate::workflow::{AnnotationWorkflow, CavityError, Side, Step};
use crate::{host, render, AppWindow};
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

/// UI dialog index for a workflow step (0 = no dialog).
fn step_index(step: Step) -> i32 {
    match step {
        Step::Idle => 0,
        Step::AwaitingSide => 1,
        Step::AwaitingDefect => 2,
        Step::AwaitingCavity => 3,
    }
}

/// Sets up all disclosure step callbacks on the UI.
pub fn setup_workflow_callbacks(
    ui: &AppWindow,
    workflow: Rc<RefCell<AnnotationWorkflow>>,
    geometry: Rc<DiagramGeometry>,
    catalog: Rc<DefectCatalog>,
    config: Rc<AppConfig>,
    click_count: Rc<RefCell<u32>>,
) {
    setup_side_chosen(ui, workflow.clone());
    setup_defect_chosen(ui, workflow.clone(), catalog);
    setup_cavity_submitted(ui, workflow.clone(), geometry.clone(), config, click_count);
    setup_dialog_dismissed(ui, workflow, geometry);
}

fn setup_side_chosen(ui: &AppWindow, workflow: Rc<RefCell<AnnotationWorkflow>>) {
    let ui_weak = ui.as_weak();
    ui.on_side_chosen(move |name| {
        let Some(side) = Side::parse(name.as_str()) else {
            eprintln!("Unknown side choice: {}", name);
            return;
        };

        if !workflow.borrow_mut().choose_side(side) {
            eprintln!("Side choice delivered outside step 1; ignored");
            return;
        }

        if let Some(ui) = ui_weak.upgrade() {
            ui.set_chosen_side(side.as_str().into());
            ui.set_workflow_step(2);
        }
    });
}

fn setup_defect_chosen(
    ui: &AppWindow,
    workflow: Rc<RefCell<AnnotationWorkflow>>,
    catalog: Rc<DefectCatalog>,
) {
    let ui_weak = ui.as_weak();
    ui.on_defect_chosen(move |name| {
        if !catalog.contains(name.as_str()) {
            eprintln!("Defect '{}' is not in the catalog; ignored", name);
            return;
        }

        if !workflow.borrow_mut().choose_defect(name.as_str()) {
            eprintln!("Defect choice delivered outside step 2; ignored");
            return;
        }

        if let Some(ui) = ui_weak.upgrade() {
            ui.set_chosen_defect(name.clone());
            ui.set_cavity_invalid(false);
            ui.set_workflow_step(3);
        }
    });
}

fn setup_cavity_submitted(
    ui: &AppWindow,
    workflow: Rc<RefCell<AnnotationWorkflow>>,
    geometry: Rc<DiagramGeometry>,
    config: Rc<AppConfig>,
    click_count: Rc<RefCell<u32>>,
) {
    let ui_weak = ui.as_weak();
    ui.on_cavity_submitted(move |text| {
        let result = workflow.borrow_mut().submit_cavity(text.as_str());
        match result {
            Ok(record) => {
                *click_count.borrow_mut() += 1;

                if config.output.echo_json {
                    if let Err(e) = host::deliver(&record) {
                        eprintln!("Record delivery failed: {}", e);
                    }
                }

                if let Some(ui) = ui_weak.upgrade() {
                    ui.set_click_count_text(
                        format!("Clicks: {}", click_count.borrow()).into(),
                    );
                    ui.set_last_click(host::summary_line(&record).into());
                    ui.set_diagram_source(render::diagram_image(&geometry));
                    ui.set_pending_zone("".into());
                    ui.set_pending_detail("".into());
                    ui.set_chosen_side("".into());
                    ui.set_chosen_defect("".into());
                    ui.set_cavity_text("".into());
                    ui.set_cavity_invalid(false);
                    ui.set_workflow_step(0);
                    ui.set_status_text("Defect logged".into());
                }
            }
            Err(CavityError::Empty) => {
                // Recoverable: stay on step 3 and prompt again.
                if let Some(ui) = ui_weak.upgrade() {
                    ui.set_cavity_invalid(true);
                }
            }
            Err(CavityError::NotAwaitingCavity) => {
                eprintln!("Cavity submission delivered outside step 3; ignored");
            }
        }
    });
}

fn setup_dialog_dismissed(
    ui: &AppWindow,
    workflow: Rc<RefCell<AnnotationWorkflow>>,
    geometry: Rc<DiagramGeometry>,
) {
    let ui_weak = ui.as_weak();
    ui.on_dialog_dismissed(move || {
        let step = {
            let mut wf = workflow.borrow_mut();
            wf.dismiss();
            wf.step()
        };

        if let Some(ui) = ui_weak.upgrade() {
            ui.set_workflow_step(step_index(step));
            ui.set_cavity_invalid(false);
            if step == Step::Idle {
                // Draft discarded: clear the marker and the pending zone.
                ui.set_diagram_source(render::diagram_image(&geometry));
                ui.set_pending_zone("".into());
                ui.set_pending_detail("".into());
                ui.set_chosen_side("".into());
                ui.set_chosen_defect("".into());
                ui.set_cavity_text("".into());
                ui.set_status_text("Entry discarded".into());
            }
        }
    });
}
