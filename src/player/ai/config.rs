use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const CONFIG_PATH: &str = "ai_config.json";

static AI_CONFIG: OnceLock<AIConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    pub search: SearchConfig,
    #[serde(default)]
    pub selfplay: SelfPlaySettings,
}

/// 難易度ごとの探索深さ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub depth_easy: usize,
    pub depth_medium: usize,
    pub depth_hard: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfPlaySettings {
    pub num_games: usize,
    /// 1局の手数上限
    pub max_plies: usize,
    pub output_dir: String,
}

impl Default for SelfPlaySettings {
    fn default() -> Self {
        SelfPlaySettings {
            num_games: 10,
            max_plies: 128,
            output_dir: "selfplay_results".to_string(),
        }
    }
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            eprintln!("[config] {} not loaded ({}), using defaults", CONFIG_PATH, e);
            Self::default()
        })
    }

    /// プロセス内で一度だけ読み込んだ設定
    pub fn get() -> &'static AIConfig {
        AI_CONFIG.get_or_init(Self::load_or_default)
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            search: SearchConfig {
                depth_easy: 1,
                depth_medium: 3,
                depth_hard: 5,
            },
            selfplay: SelfPlaySettings::default(),
        }
    }
}

/// 対局モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// 人間同士 (自動着手なし)
    Friend,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn depth(self, config: &AIConfig) -> usize {
        match self {
            Difficulty::Friend => 0,
            Difficulty::Easy => config.search.depth_easy,
            Difficulty::Medium => config.search.depth_medium,
            Difficulty::Hard => config.search.depth_hard,
        }
    }

    /// Hard ではコンピュータが黒で先に打つ
    pub fn computer_moves_first(self) -> bool {
        self == Difficulty::Hard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depths() {
        let config = AIConfig::default();
        assert_eq!(Difficulty::Friend.depth(&config), 0);
        assert_eq!(Difficulty::Easy.depth(&config), 1);
        assert_eq!(Difficulty::Medium.depth(&config), 3);
        assert_eq!(Difficulty::Hard.depth(&config), 5);
        assert!(Difficulty::Hard.computer_moves_first());
        assert!(!Difficulty::Medium.computer_moves_first());
    }

    #[test]
    fn test_serialization() {
        let config = AIConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AIConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_selfplay_section_is_optional() {
        let json = r#"{"version":"2.0","search":{"depth_easy":2,"depth_medium":4,"depth_hard":6}}"#;
        let config: AIConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.search.depth_hard, 6);
        assert_eq!(config.selfplay, SelfPlaySettings::default());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(AIConfig::load_from("does/not/exist/ai_config.json").is_err());
    }
}
