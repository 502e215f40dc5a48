// main.rs - Opens the window and runs the simulation until it is closed

use eframe::egui;
use log::info;

use conway_life::{ui::LifeApp, Config, ConfigError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_args() {
        Ok(config) => config,
        Err(ConfigError::Args(e)) => e.exit(),
        Err(e) => return Err(e.into()),
    };
    info!(
        "{}x{} grid, {}px cells, {} fps, scene {}",
        config.grid_width,
        config.grid_height,
        config.cell_size,
        config.fps,
        config.scene.name()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size())
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(&config))),
    )?;
    Ok(())
}
