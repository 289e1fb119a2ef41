use crate::error::{ManifestError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// マニフェストのご依頼主欄に入る送り主情報
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SenderProfile {
    pub name: String,
    pub zip: String,
    pub address: String,
    pub phone: String,
}

impl Default for SenderProfile {
    fn default() -> Self {
        Self {
            name: "サンライズストア名古屋".into(),
            zip: "455-0065".into(),
            address: "愛知県名古屋市港区港栄2-10-5".into(),
            phone: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub sender: SenderProfile,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ManifestError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home
            .join(".config")
            .join("yupacket-manifest")
            .join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_defaults() {
        let sender = SenderProfile::default();
        assert_eq!(sender.zip, "455-0065");
        assert_eq!(sender.name, "サンライズストア名古屋");
        assert!(sender.phone.is_empty());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            sender: SenderProfile {
                phone: "0521234567".into(),
                ..Default::default()
            },
        };
        let json = serde_json::to_string(&config).expect("シリアライズ失敗");
        let restored: Config = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(restored.sender, config.sender);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let restored: Config = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert_eq!(restored.sender, SenderProfile::default());
    }
}
