use config::Config;
use device_screen::impl_egui::DeviceScreenEgui;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use prediction_api::impl_http::PredictionApiHttp;
use recognizer::main::Recognizer;
use std::sync::Arc;

mod config;
mod device_screen;
mod library;
mod prediction_api;
mod recognizer;
mod video_file;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let _ = logger.info(&format!("predict endpoint: {}/predict", config.api_base_url));

    let device_screen = Arc::new(DeviceScreenEgui::new());

    let prediction_api = Arc::new(PredictionApiHttp::new(&config, logger.clone())?);

    let recognizer = Recognizer::new(logger, device_screen, prediction_api);

    recognizer.run()?;

    Ok(())
}
