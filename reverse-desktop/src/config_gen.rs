use std::fs;
use std::path::Path;

use anyhow::Context;
use reverse_ui::UiConfig;
use serde::Serialize;

use crate::config::SystemConfig;

#[derive(Serialize, Default)]
struct FullConfig {
    system: SystemConfig,
    ui: UiConfig,
}

/// Writes a default config to `path` unless a file is already there.
pub fn ensure_config_exists(path: &str) -> anyhow::Result<()> {
    if Path::new(path).exists() {
        return Ok(());
    }

    println!("Creating default configuration at '{}'...", path);

    let toml_str = toml::to_string_pretty(&FullConfig::default())
        .context("Failed to serialize default config")?;
    fs::write(path, toml_str)
        .with_context(|| format!("Failed to write config file '{}'", path))?;

    println!("Config file created successfully.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reverse_shared::config::ConfigStore;
    use reverse_ui::FocusPolicy;

    #[test]
    fn default_config_reads_back() {
        let text = toml::to_string_pretty(&FullConfig::default()).unwrap();
        let store = ConfigStore::parse(&text);

        let sys: SystemConfig = store.section("system");
        assert_eq!(sys.log_level, "info");

        let ui: UiConfig = store.section("ui");
        assert_eq!(ui.focus_policy, FocusPolicy::Overlapping);
        assert_eq!(ui.theme.button_hover, reverse_ui::Color::from_hex(0xEAEAEA));
    }

    #[test]
    fn focus_policy_is_lowercase() {
        let store = ConfigStore::parse("[ui]\nfocus_policy = \"exclusive\"\n");
        let ui: UiConfig = store.section("ui");
        assert_eq!(ui.focus_policy, FocusPolicy::Exclusive);
    }
}
