// Morph Calendar Application
// Main entry point

use anyhow::Context;
use morph_calendar::services::header::CalendarHeader;
use morph_calendar::services::settings::SettingsService;
use morph_calendar::ui_egui::MorphCalendarApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Morph Calendar");

    let settings_service = SettingsService::from_default_location();
    let settings = settings_service.load_or_default();
    let header = CalendarHeader::new(&settings).context("Failed to build the calendar header")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Morph Calendar")
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Morph Calendar",
        options,
        Box::new(move |cc| Ok(Box::new(MorphCalendarApp::new(cc, settings, header)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run Morph Calendar: {e}"))
}
