use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// 配置文件结构 (config.toml)，所有字段可选
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub initial_value: i64,
    pub show_history: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_value: 0,
            show_history: true,
            log_level: "info".to_string(),
        }
    }
}

/// 获取配置文件路径 (~/.config/simple-counter/config.toml)
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("simple-counter").join("config.toml"))
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
