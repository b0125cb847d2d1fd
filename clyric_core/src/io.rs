//! 规范磁盘文本格式（`.clrc`）的生成。
//!
//! 每个曲目一个 UTF-8 文件：先是 `[ti]` 等文档级标签，然后每个条目
//! 一个块（主行、可选 `[tr]` 翻译行、可选 `[tc]` 时间码行）。
//! 纯音乐只写 `[instrumental]`，不再输出条目。

use std::fmt::Write;

use crate::model::{Lyric, LyricItem};
use crate::text::normalize_file_name;

/// 规范文件的扩展名。
pub const LYRIC_FILE_EXTENSION: &str = "clrc";

/// 生成条目的时间标签 `[mm:ss.mmm]`。
///
/// 分钟是总分钟数（不对 60 取模），至少补零到两位；秒两位；
/// 毫秒固定三个字符，不足时在右侧补零（沿用既有文件的写法，
/// 保证老文件逐字节可复现）。
#[must_use]
pub fn time_tag(start_time: u64) -> String {
    format!(
        "[{:02}:{:02}.{:0<3}]",
        start_time / 60_000,
        start_time / 1000 % 60,
        start_time % 1000
    )
}

impl LyricItem {
    /// 条目在规范文件中的块形式。
    #[must_use]
    pub fn canonical_block(&self) -> String {
        let tag = time_tag(self.start_time);
        let mut block = format!("{tag}{}\n", self.content);
        if !self.translation.is_empty() {
            let _ = writeln!(block, "{tag}[tr]{}", self.translation);
        }
        if !self.time_codes.is_empty() {
            let codes = self
                .time_codes
                .iter()
                .map(|tc| format!("{},{}", tc.time_ms, tc.chars))
                .collect::<Vec<_>>()
                .join("|");
            let _ = writeln!(block, "{tag}[tc]{codes}");
        }
        block
    }
}

impl Lyric {
    /// 整个文档的规范文本形式。
    #[must_use]
    pub fn canonical_text(&self) -> String {
        let mut out = format!("[ti]{}\n", self.track.title);
        if !self.track.album.is_empty() {
            let _ = writeln!(out, "[al]{}", self.track.album);
        }
        if !self.track.artist.is_empty() {
            let _ = writeln!(out, "[ar]{}", self.track.artist);
        }
        if self.track.duration > 0 {
            let _ = writeln!(out, "[du]{}", self.track.duration);
        }
        if self.offset != 0 {
            let sign = if self.offset > 0 { "+" } else { "" };
            let _ = writeln!(out, "[offset]{sign}{}", self.offset);
        }
        if self.track.instrumental {
            out.push_str("[instrumental]\n");
        } else {
            for item in &self.items {
                out.push_str(&item.canonical_block());
            }
        }
        out
    }

    /// 本文档对应的规范文件名。
    #[must_use]
    pub fn file_name(&self) -> String {
        lyric_file_name(&self.track.title, &self.track.album, &self.track.artist)
    }
}

/// 规范文件名：`<title> - <artist> - <album>.clrc`，各部分经过文件名归一化。
#[must_use]
pub fn lyric_file_name(title: &str, album: &str, artist: &str) -> String {
    normalize_file_name(&format!("{title} - {artist} - {album}.{LYRIC_FILE_EXTENSION}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TimeCode, Track};

    #[test]
    fn test_time_tag_formatting() {
        assert_eq!(time_tag(56_340), "[00:56.340]");
        assert_eq!(time_tag(0), "[00:00.000]");
        // 分钟不封顶，直接累计
        assert_eq!(time_tag(3_857_700), "[64:17.700]");
    }

    #[test]
    fn test_canonical_block_with_markers() {
        let item = LyricItem {
            content: "测试1".to_string(),
            translation: "测试1翻译".to_string(),
            start_time: 56_340,
            time_codes: vec![
                TimeCode::new(0, 0),
                TimeCode::new(128, 1),
                TimeCode::new(256, 2),
                TimeCode::new(384, 3),
            ],
        };
        assert_eq!(
            item.canonical_block(),
            "[00:56.340]测试1\n[00:56.340][tr]测试1翻译\n[00:56.340][tc]0,0|128,1|256,2|384,3\n"
        );
    }

    #[test]
    fn test_canonical_text_header() {
        let mut lyric = Lyric::from_parts(
            Track {
                title: "海阔天空".to_string(),
                album: "乐与怒".to_string(),
                artist: "Beyond".to_string(),
                duration: 326,
                ..Track::default()
            },
            vec![LyricItem::new("原谅我这一生不羁放纵爱自由", 69_000)],
        );
        lyric.offset = 40;
        assert_eq!(
            lyric.canonical_text(),
            "[ti]海阔天空\n[al]乐与怒\n[ar]Beyond\n[du]326\n[offset]+40\n[01:09.000]原谅我这一生不羁放纵爱自由\n"
        );
    }

    #[test]
    fn test_canonical_text_instrumental_suppresses_items() {
        let mut lyric = Lyric::from_parts(Track::with_title("T"), vec![LyricItem::new("x", 0)]);
        lyric.track.instrumental = true;
        assert_eq!(lyric.canonical_text(), "[ti]T\n[instrumental]\n");
    }

    #[test]
    fn test_file_name_normalization() {
        assert_eq!(
            lyric_file_name("a/b", "al:bum", "art*ist"),
            "a b - art ist - al bum.clrc"
        );
    }
}
