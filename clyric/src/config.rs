//! 负责处理持久化配置。

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::info;

use crate::error::Result;
use crate::providers::ProviderId;

/// 检索配置：歌词缓存目录与提供商查询顺序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// 歌词文件保存目录；`None` 时由宿主决定。
    pub save_directory: Option<PathBuf>,
    /// 提供商查询顺序。
    pub providers: Vec<ProviderId>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            save_directory: None,
            providers: ProviderId::iter().collect(),
        }
    }
}

/// 获取配置目录下指定文件的完整路径。
fn config_file_path(filename: &str) -> Result<PathBuf> {
    let mut dir = dirs::config_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "无法找到用户配置目录")
    })?;
    dir.push("clyric");
    fs::create_dir_all(&dir)?;
    dir.push(filename);
    Ok(dir)
}

const CONFIG_FILE: &str = "config.json";

/// 加载检索配置；文件不存在时返回默认配置。
pub fn load_config() -> Result<SearchConfig> {
    let path = config_file_path(CONFIG_FILE)?;
    match fs::read_to_string(&path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("未找到配置文件，使用默认配置。");
            Ok(SearchConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// 保存检索配置。
pub fn save_config(config: &SearchConfig) -> Result<()> {
    let path = config_file_path(CONFIG_FILE)?;
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider_order_is_fixed() {
        let config = SearchConfig::default();
        assert_eq!(
            config.providers,
            vec![
                ProviderId::Xiami,
                ProviderId::Netease,
                ProviderId::QQMusic,
                ProviderId::Kugou,
                ProviderId::Gecimi,
                ProviderId::THBWiki,
            ]
        );
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = SearchConfig {
            save_directory: Some(PathBuf::from("/tmp/lyrics")),
            providers: vec![ProviderId::Netease, ProviderId::Kugou],
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
