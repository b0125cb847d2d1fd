use thiserror::Error;

/// 核心边界上的错误。
///
/// 解析本身是尽力而为、不报错的（坏行被静默跳过，无效结果由
/// [`clyric_core::Lyric::is_valid`] 判定），这里只覆盖本地存储、
/// 配置和提供商边界。
#[derive(Debug, Error)]
pub enum LyricsError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("提供商返回错误: {0}")]
    Provider(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, LyricsError>;
