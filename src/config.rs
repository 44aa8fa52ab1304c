use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::activity::{ActivityMonitor, BotRoster, DEFAULT_MAX_COUNT, DEFAULT_WINDOW_DAYS, NotificationPolicy};
use crate::error::Result;
use crate::handler::InactiveReviewHandler;
use crate::message::DEFAULT_NOTIFIER;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub policy: PolicyConfig,
    pub actors: ActorsConfig,
    pub notifier: NotifierConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub window_days: i64,
    pub max_count: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorsConfig {
    pub bots: Vec<String>,
    pub bot_suffix: String,
}

impl Default for ActorsConfig {
    fn default() -> Self {
        Self {
            bots: vec!["k8s-merge-robot".to_string(), "k8s-ci-robot".to_string()],
            bot_suffix: "[bot]".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    pub name: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NOTIFIER.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            policy: PolicyConfig::default(),
            actors: ActorsConfig::default(),
            notifier: NotifierConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // Explicit path must load or fail
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_yaml::from_str(&content)?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Validated notification policy
    pub fn policy(&self) -> Result<NotificationPolicy> {
        NotificationPolicy::days(self.policy.window_days, self.policy.max_count)
    }

    pub fn roster(&self) -> BotRoster {
        BotRoster::new(&self.actors.bots).with_suffix(&self.actors.bot_suffix)
    }

    /// Handler wired with this configuration
    pub fn handler(&self) -> Result<InactiveReviewHandler> {
        let monitor = ActivityMonitor::new(self.policy()?, self.roster());
        Ok(InactiveReviewHandler::new(monitor).with_notifier(&self.notifier.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActorClassifier;
    use crate::error::ReviewError;
    use chrono::Duration;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("revwatch.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        let policy = config.policy().unwrap();
        assert_eq!(policy.window(), Duration::days(7));
        assert_eq!(policy.max_count(), 5);
        assert_eq!(config.notifier.name, "INACTIVE-REVIEWER");
        assert!(!config.roster().is_human("k8s-ci-robot"));
        assert!(!config.roster().is_human("renovate[bot]"));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "policy:\n  window_days: 3\nnotifier:\n  name: NUDGE\n");

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.policy.window_days, 3);
        assert_eq!(config.policy.max_count, 5);
        assert_eq!(config.notifier.name, "NUDGE");
        assert_eq!(config.actors.bots.len(), 2);
    }

    #[test]
    fn test_load_bots() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "actors:\n  bots: [ci-helper]\n  bot_suffix: \"\"\n");

        let roster = Config::load(Some(&path)).unwrap().roster();
        assert!(!roster.is_human("ci-helper"));
        assert!(roster.is_human("k8s-ci-robot"));
        assert!(roster.is_human("renovate[bot]"));
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ReviewError::Io(_)));
    }

    #[test]
    fn test_malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "policy: [not, a, map]\n");
        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ReviewError::Yaml(_)));
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let mut config = Config::default();
        config.policy.max_count = 0;
        assert!(config.policy().is_err());
        assert!(config.handler().is_err());
    }

    #[test]
    fn test_handler_uses_notifier() {
        let mut config = Config::default();
        config.notifier.name = "NUDGE".to_string();
        let handler = config.handler().unwrap();
        assert_eq!(handler.notifier(), "NUDGE");
        assert_eq!(handler.monitor().policy().max_count(), 5);
    }
}
