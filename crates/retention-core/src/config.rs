//! AppConfig - 設定ファイルの読み込み
//!
//! JSON ファイル 1 つ。すべてのフィールドにデフォルトがあるので `{}` も有効。
//! パスは引数か `RETENTION_CONFIG` 環境変数で渡す。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Result, RetentionError};
use crate::impls::ChurnModelConfig;
use crate::policy::PolicyConfig;

pub const CONFIG_ENV: &str = "RETENTION_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub policy: PolicyConfig,
    pub churn_model: ChurnModelConfig,
}

impl AppConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| RetentionError::Config(format!("parse: {e}")))?;
        config.policy.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| RetentionError::Config(format!("read {}: {e}", path.display())))?;
        let config = Self::from_json_str(&raw)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Explicit path first, then `RETENTION_CONFIG`, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with_env(explicit, std::env::var(CONFIG_ENV).ok().as_deref())
    }

    /// [`load`](Self::load) with the `RETENTION_CONFIG` value passed in.
    /// Blank values count as unset.
    pub fn load_with_env(explicit: Option<&Path>, env_value: Option<&str>) -> Result<Self> {
        match explicit
            .map(Path::to_path_buf)
            .or_else(|| config_path_from_env(env_value))
        {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

fn config_path_from_env(raw: Option<&str>) -> Option<PathBuf> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
