//! 歌词解析：行标签拆分、样式相关的条目构造与文档装配。

mod document;
mod item;
mod line;

pub use document::parse;

use clyric_core::{Lyric, LyricStyle, Track};

/// 解析原始文本并用提供商侧的曲目元数据整体覆盖解析出的元数据。
///
/// 提供商 API 的元数据通常比歌词文件内嵌标签更完整，与原始实现
/// 保持一致：整个 `Track` 被替换。
#[must_use]
pub fn parse_with_track(content: &str, style: LyricStyle, track: Track) -> Lyric {
    let mut lyric = parse(content, style);
    lyric.track = track;
    lyric
}
