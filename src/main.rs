slint::include_modules!();

mod callbacks;
mod config;
mod defects;
mod diagram;
mod host;
mod render;
mod workflow;

use diagram::DiagramGeometry;
use slint::VecModel;
use std::cell::RefCell;
use std::rc::Rc;
use workflow::AnnotationWorkflow;

fn main() -> Result<(), slint::PlatformError> {
    let ui = AppWindow::new()?;

    let app_config = Rc::new(config::load_config());
    if !config::config_path().exists() {
        if let Err(e) = config::save_config(&app_config) {
            eprintln!("Failed to write default config: {}", e);
        }
    }
    let catalog = Rc::new(defects::load_catalog(
        app_config.defects.config_file.as_deref(),
    ));
    let geometry = Rc::new(DiagramGeometry::default());
    let workflow = Rc::new(RefCell::new(AnnotationWorkflow::new()));
    let click_count = Rc::new(RefCell::new(0u32));

    // Host-frame contract: the required display height is pushed once here.
    ui.set_frame_height(host::FRAME_HEIGHT as f32);
    ui.set_show_info_panel(app_config.appearance.show_info_panel);
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

    let defect_names: Vec<slint::SharedString> = catalog
        .defects
        .iter()
        .map(|name| name.as_str().into())
        .collect();
    ui.set_defect_types(Rc::new(VecModel::from(defect_names)).into());

    callbacks::diagram::setup_diagram_callbacks(&ui, workflow.clone(), geometry.clone());
    callbacks::workflow::setup_workflow_callbacks(
        &ui,
        workflow,
        geometry,
        catalog,
        app_config,
        click_count,
    );

    ui.run()
}
