//! 提供商边界。
//!
//! 核心自己不做任何网络请求：提供商作为外部协作者实现
//! [`LyricProvider`]，异步返回零或多条待解析的原始歌词。超时与
//! 重试都是提供商自己的责任，跨边界的唯一信号是"该提供商零结果"。

use async_trait::async_trait;
use clyric_core::{LyricStyle, Track};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::Result;

/// 提供商身份，固定顺序即默认查询顺序。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ProviderId {
    Xiami,
    Netease,
    QQMusic,
    Kugou,
    Gecimi,
    THBWiki,
}

/// 提供商返回的一条待解析结果：原始文本、其样式与 API 侧的曲目元数据。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLyrics {
    pub text: String,
    pub style: LyricStyle,
    pub track: Track,
}

/// 提供商能力接口。
///
/// 每次调用彼此独立，可以以任意顺序完成或根本不完成；结果由调用方
/// 串行收集（核心不对并发追加做任何同步）。
#[async_trait]
pub trait LyricProvider: Send + Sync {
    /// 该提供商的身份。
    fn id(&self) -> ProviderId;

    /// 按曲目元数据检索歌词，返回零或多条原始结果。
    async fn search_lyrics(&self, track: &Track) -> Result<Vec<RawLyrics>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_provider_id_round_trip() {
        assert_eq!(ProviderId::from_str("netease").unwrap(), ProviderId::Netease);
        assert_eq!(ProviderId::Kugou.to_string(), "Kugou");
    }
}
