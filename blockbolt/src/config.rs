//! Plugin configuration, loaded from `config.toml` in the data folder.
//! A missing file is created with the default template so admins have
//! something to edit.

use std::path::Path;

use serde::Deserialize;

const DEFAULT_CONFIG: &str = r#"# BlockBolt configuration

[discord]
# The bridge stays disabled until a guild or channel is set.
# token = ""
# guild = ""
# channel = ""

[afk]
# Seconds without movement, chat, or block changes before a player
# counts as AFK.
timeout_secs = 300
"#;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlockBoltConfig {
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub afk: AfkConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DiscordConfig {
    pub token: Option<String>,
    pub guild: Option<String>,
    pub channel: Option<String>,
}

impl DiscordConfig {
    /// The bridge only starts when a guild or channel is configured.
    pub fn bridge_enabled(&self) -> bool {
        self.guild.is_some() || self.channel.is_some()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AfkConfig {
    #[serde(default = "default_afk_timeout")]
    pub timeout_secs: u64,
}

fn default_afk_timeout() -> u64 {
    300
}

impl Default for AfkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_afk_timeout(),
        }
    }
}

impl BlockBoltConfig {
    pub fn load_or_init(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("create data folder: {e}"))?;
            }
            std::fs::write(path, DEFAULT_CONFIG).map_err(|e| format!("write config: {e}"))?;
            return Ok(Self::default());
        }
        let s = std::fs::read_to_string(path).map_err(|e| format!("read config: {e}"))?;
        toml::from_str(&s).map_err(|e| format!("parse config: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_parses_to_defaults() {
        let config: BlockBoltConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert!(!config.discord.bridge_enabled());
        assert_eq!(config.afk.timeout_secs, 300);
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let config: BlockBoltConfig = toml::from_str("").unwrap();
        assert!(config.discord.token.is_none());
        assert_eq!(config.afk.timeout_secs, 300);
    }

    #[test]
    fn bridge_enabled_by_guild_or_channel() {
        let config: BlockBoltConfig = toml::from_str(
            r#"
            [discord]
            channel = "server-chat"
            "#,
        )
        .unwrap();
        assert!(config.discord.bridge_enabled());
        assert_eq!(config.discord.channel.as_deref(), Some("server-chat"));
    }
}
