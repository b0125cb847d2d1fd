//! 从多个在线提供商获取、解析、归一化并同步歌词的核心库。
//!
//! 三类行式微格式（普通 LRC、虾米逐字、酷狗逐字）被解析成同一套
//! 规范表示 [`Lyric`]，再经过翻译合并、候选排序，最终由播放游标
//! 对照活动时间驱动外部显示。桌面界面、IPC 与网络传输都是外部
//! 协作者，核心只暴露窄接口：
//!
//! ```
//! use clyric::{LyricStyle, advance_cursor, parse, serialize};
//!
//! let lyric = parse("[ti]T\n[00:01.00]hello\n", LyricStyle::CLrc);
//! assert!(lyric.is_valid());
//!
//! let update = advance_cursor(&lyric, 1500, 0, None);
//! assert_eq!(update.index, Some(0));
//!
//! let text = serialize(&lyric);
//! assert!(text.contains("[00:01.000]hello"));
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod playback;
pub mod providers;
pub mod search;
pub mod store;
pub mod utils;

pub use clyric_core::{
    Language, Lyric, LyricItem, LyricStyle, TimeCode, Track, lyric_file_name, time_tag,
};

pub use error::{LyricsError, Result};
pub use parser::{parse, parse_with_track};
pub use playback::{CursorUpdate, advance_cursor};
pub use providers::{LyricProvider, ProviderId, RawLyrics};
pub use search::{LyricSearch, merge_translation, rank};
pub use store::LyricStore;

/// 歌词文档的规范文本形式（`.clrc` 文件内容）。
#[must_use]
pub fn serialize(lyric: &Lyric) -> String {
    lyric.canonical_text()
}
