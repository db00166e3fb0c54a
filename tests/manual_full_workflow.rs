// Manual harness: full annotation workflow
// Test: Click the diagram, walk the three dialogs, submit a cavity
// Expected: One JSON record per completed pass, workflow back to idle

slint::include_modules!();

#[path = "../src/diagram.rs"]
mod diagram;
#[path = "../src/workflow.rs"]
mod workflow;
#[path = "../src/render.rs"]
mod render;
#[path = "../src/host.rs"]
mod host;

use diagram::DiagramGeometry;
use slint::VecModel;
use std::cell::RefCell;
use std::rc::Rc;
use workflow::{AnnotationWorkflow, CavityError, Side, Step};

fn step_index(step: Step) -> i32 {
    match step {
        Step::Idle => 0,
        Step::AwaitingSide => 1,
        Step::AwaitingDefect => 2,
        Step::AwaitingCavity => 3,
    }
}

fn main() -> Result<(), slint::PlatformError> {
    let ui = AppWindow::new()?;
    let geometry = Rc::new(DiagramGeometry::default());
    let wf = Rc::new(RefCell::new(AnnotationWorkflow::new()));

    ui.set_frame_height(host::FRAME_HEIGHT as f32);
    ui.set_diagram_source(render::diagram_image(&geometry));

    let labels: Vec<SegmentLabel> = render::segment_label_positions(&geometry)
        .into_iter()
        .map(|(text, x, y)| SegmentLabel {
            text: text.into(),
            x,
            y,
        })
        .collect();
    ui.set_segment_labels(Rc::new(VecModel::from(labels)).into());

    let defect_names: Vec<slint::SharedString> = defects_for_harness()
        .into_iter()
        .map(|name| name.into())
        .collect();
    ui.set_defect_types(Rc::new(VecModel::from(defect_names)).into());

    let ui_weak = ui.as_weak();
    let wf_handle = wf.clone();
    let geometry_handle = geometry.clone();
    ui.on_diagram_clicked(move |x, y| {
        let zone = geometry_handle.classify(x, y);
        if !wf_handle.borrow_mut().begin(zone.clone()) {
            println!("✗ Click ignored: a draft is already open");
            return;
        }
        println!(
            "✓ Click at ({x:.0}, {y:.0}) -> segment {} ring {}",
            zone.segment, zone.ring
        );
        if let Some(ui) = ui_weak.upgrade() {
            ui.set_diagram_source(render::diagram_image_with_marker(&geometry_handle, x, y));
            ui.set_pending_zone(format!("Segment {} | {}", zone.segment, zone.ring).into());
            ui.set_workflow_step(1);
        }
    });

    let ui_weak = ui.as_weak();
    let wf_handle = wf.clone();
    ui.on_side_chosen(move |name| {
        let Some(side) = Side::parse(name.as_str()) else { return };
        if wf_handle.borrow_mut().choose_side(side) {
            println!("✓ Side: {}", side.as_str());
            if let Some(ui) = ui_weak.upgrade() {
                ui.set_chosen_side(name.clone());
                ui.set_workflow_step(2);
            }
        }
    });

    let ui_weak = ui.as_weak();
    let wf_handle = wf.clone();
    ui.on_defect_chosen(move |name| {
        if wf_handle.borrow_mut().choose_defect(name.as_str()) {
            println!("✓ Defect: {}", name);
            if let Some(ui) = ui_weak.upgrade() {
                ui.set_chosen_defect(name.clone());
                ui.set_workflow_step(3);
            }
        }
    });

    let ui_weak = ui.as_weak();
    let wf_handle = wf.clone();
    let geometry_handle = geometry.clone();
    ui.on_cavity_submitted(move |text| {
        match wf_handle.borrow_mut().submit_cavity(text.as_str()) {
            Ok(record) => {
                println!("✓ Record: {}", host::record_json(&record).unwrap());
                println!("✓ Summary: {}", host::summary_line(&record));
                if let Some(ui) = ui_weak.upgrade() {
                    ui.set_last_click(host::summary_line(&record).into());
                    ui.set_diagram_source(render::diagram_image(&geometry_handle));
                    ui.set_cavity_text("".into());
                    ui.set_cavity_invalid(false);
                    ui.set_workflow_step(0);
                }
            }
            Err(CavityError::Empty) => {
                println!("✗ Empty cavity rejected, still awaiting input");
                if let Some(ui) = ui_weak.upgrade() {
                    ui.set_cavity_invalid(true);
                }
            }
            Err(CavityError::NotAwaitingCavity) => {
                println!("✗ Cavity submitted outside step 3");
            }
        }
    });

    let ui_weak = ui.as_weak();
    let wf_handle = wf.clone();
    let geometry_handle = geometry.clone();
    ui.on_dialog_dismissed(move || {
        let step = {
            let mut wf = wf_handle.borrow_mut();
            wf.dismiss();
            wf.step()
        };
        println!("✓ Dismissed, now at step {}", step_index(step));
        if let Some(ui) = ui_weak.upgrade() {
            ui.set_workflow_step(step_index(step));
            if step == Step::Idle {
                ui.set_diagram_source(render::diagram_image(&geometry_handle));
            }
        }
    });

    println!("=== Manual: Full Annotation Workflow ===");
    println!("Instructions:");
    println!("1. Click anywhere on the diagram - step 1 opens, marker appears");
    println!("2. Pick a side, then a defect, then type a cavity and submit");
    println!("3. Verify one JSON line is printed and the workflow resets");
    println!("4. Try submitting a blank cavity - it must be rejected in place");
    println!("5. Click the dimmed backdrop - step back (discard on step 1)");
    println!("6. While a dialog is open, diagram clicks must be ignored");
    println!("========================================");

    ui.run()
}

fn defects_for_harness() -> Vec<&'static str> {
    vec![
        "Drop in Mold",
        "Stains",
        "Cracks",
        "Short Pours",
        "Pinholes",
        "Other",
    ]
}
