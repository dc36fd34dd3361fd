mod app;
mod config;
mod config_gen;
mod host;
mod setup;
mod terminal;

use std::env;

use reverse_ui::UiConfig;

use crate::app::App;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn main() {
    let args: Vec<String> = env::args().collect();
    let config_path = args
        .iter()
        .find_map(|a| a.strip_prefix("--config="))
        .unwrap_or(DEFAULT_CONFIG_PATH);

    if let Err(e) = run(config_path) {
        log::error!("Fatal: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config_path: &str) -> anyhow::Result<()> {
    setup::init(config_path)?;
    log::info!(">>> Reverse Desktop Started (config: {}) <<<", config_path);

    let ui_cfg: UiConfig = reverse_shared::config::get("ui");
    log::info!("Focus policy: {:?}", ui_cfg.focus_policy);

    let mut app = App::new(ui_cfg);
    log::debug!(
        "Registered {} controls (input {:?}, output {:?}, quit {:?})",
        app.ui.len(), app.input, app.output, app.quit
    );

    host::run(&mut app)?;

    log::info!("Reverse Desktop exited");
    Ok(())
}
