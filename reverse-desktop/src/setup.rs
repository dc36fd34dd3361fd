use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::Context;
use env_logger::{Builder, Target};

use crate::config::SystemConfig;
use crate::config_gen;

pub fn init(config_path: &str) -> anyhow::Result<()> {
    if let Err(e) = config_gen::ensure_config_exists(config_path) {
        eprintln!("Config generation warning: {:#}", e);
    }

    if let Err(e) = reverse_shared::config::init(config_path) {
        eprintln!("Config load warning: {:#}", e);
    }

    init_logger()
}

/// The terminal is the UI surface, so logs only go to a file.
fn init_logger() -> anyhow::Result<()> {
    let sys_cfg: SystemConfig = reverse_shared::config::get("system");
    if let Err(e) = fs::create_dir_all(&sys_cfg.log_path) {
        eprintln!("Failed to create log dir: {}", e);
    }

    let log_file_path = Path::new(&sys_cfg.log_path).join("reverse.log");

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("Failed to open log file {:?}", log_file_path))?;

    Builder::from_env(env_logger::Env::default().default_filter_or(&sys_cfg.log_level))
        .target(Target::Pipe(Box::new(log_file)))
        .try_init()
        .context("Failed to install logger")?;

    Ok(())
}
