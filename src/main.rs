use eframe::egui;
use prepwise::gui::app::PrepwiseApp;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("PrepWise"),
        ..Default::default()
    };

    eframe::run_native("PrepWise", options, Box::new(|cc| Ok(Box::new(PrepwiseApp::new(cc)))))
}
