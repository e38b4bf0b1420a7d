//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use crate::application::config::DefaultsConfig;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub effective_defaults: EffectiveDefaults,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveDefaults {
    pub data_dir: String,
    pub prompt: String,
    pub autoload: Option<String>,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = &loaded.config;
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            defaults: config.defaults.clone(),
            effective_defaults: EffectiveDefaults {
                data_dir: config
                    .defaults
                    .data_dir
                    .clone()
                    .unwrap_or_else(|| ".".to_string()),
                prompt: config.prompt(),
                autoload: config.defaults.autoload.clone(),
            },
        }
    }
}
