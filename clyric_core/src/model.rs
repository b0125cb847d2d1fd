//! 规范歌词数据模型。

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// 枚举：表示支持的歌词来源样式。
///
/// 解析算法按样式分派，三种样式都归一化为同一套 [`LyricItem`]。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum LyricStyle {
    /// 兼容普通 LRC，支持一行多个时间标签。
    #[default]
    CLrc,
    /// 虾米样式：`x-trans` 翻译标签与 `<gap>word` 逐字时间码。
    Xiami,
    /// 酷狗样式：`[start,duration]` 行标签与 `<start,length,flag>word` 时间码。
    Kugou,
}

/// 文本的语言分类，仅用于决定简繁转换，不影响解析。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// 日语（含假名）。
    Japanese,
    /// 中文。
    Chinese,
    /// 其它语言。
    #[default]
    Other,
}

/// 曲目元数据。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// 标题。
    pub title: String,
    /// 专辑名。
    pub album: String,
    /// 艺术家。
    pub artist: String,
    /// 封面图片地址。
    pub cover_image_url: String,
    /// 歌词来源标识（提供商名称或 `"LocalFile"`）。
    pub source: String,
    /// 时长（秒），-1 表示未知。
    pub duration: i32,
    /// 纯音乐标记，为真时整首歌没有可显示的歌词行。
    pub instrumental: bool,
    /// 主歌词文本的语言。
    pub content_language: Language,
    /// 翻译文本的语言。
    pub translate_language: Language,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            title: String::new(),
            album: String::new(),
            artist: String::new(),
            cover_image_url: String::new(),
            source: String::new(),
            duration: -1,
            instrumental: false,
            content_language: Language::Other,
            translate_language: Language::Other,
        }
    }
}

impl Track {
    /// 以标题创建曲目，其余字段取默认值。
    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// 行内时间码：行内已经过的毫秒数与累计字符数（Unicode 标量，不是字节）。
///
/// 第一个点总是 `(0, 0)`，两个字段都单调不减。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCode {
    /// 行内已经过的毫秒数。
    pub time_ms: u64,
    /// 累计字符数。
    pub chars: usize,
}

impl TimeCode {
    #[must_use]
    pub const fn new(time_ms: u64, chars: usize) -> Self {
        Self { time_ms, chars }
    }
}

/// 一句歌词的规范单元。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LyricItem {
    /// 主行显示文本。
    pub content: String,
    /// 翻译文本，空串表示没有翻译。
    pub translation: String,
    /// 距曲目开始的毫秒数。相同值的多个条目保持原始插入顺序。
    pub start_time: u64,
    /// 逐字时间曲线；来源没有逐字信息时为空。
    pub time_codes: Vec<TimeCode>,
}

impl LyricItem {
    /// 直接构造（占位、纯音乐标记等场景）。
    #[must_use]
    pub fn new(content: impl Into<String>, start_time: u64) -> Self {
        Self {
            content: content.into(),
            start_time,
            ..Self::default()
        }
    }

    /// 是否带翻译（显示时占两行）。
    #[must_use]
    pub fn is_double_line(&self) -> bool {
        !self.translation.is_empty()
    }
}

/// 规范歌词文档：曲目元数据加上按 `start_time` 升序排列的条目序列。
///
/// `offset` 是全局毫秒修正，只在播放和导出时叠加，不写进条目时间戳。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Lyric {
    /// 曲目元数据。
    pub track: Track,
    /// 全局偏移（毫秒，带符号）。
    pub offset: i64,
    /// 歌词条目，升序、稳定。
    pub items: Vec<LyricItem>,
}

impl Lyric {
    /// 由曲目元数据和条目直接构造。
    #[must_use]
    pub fn from_parts(track: Track, items: Vec<LyricItem>) -> Self {
        Self {
            track,
            offset: 0,
            items,
        }
    }

    /// 有效性判定：标题非空，且（纯音乐，或条目非空）。
    ///
    /// 解析失败不会报错，只会产出无效的 `Lyric`，由调用方检查。
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.track.title.is_empty() && (self.track.instrumental || !self.items.is_empty())
    }
}
