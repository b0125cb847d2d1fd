//! 样式相关的条目解析：把共享同一时间戳键的一组原始行折叠成一个
//! [`LyricItem`]。
//!
//! 这里的正则就是各来源微格式的契约本身，改动任何一个都会破坏对
//! 上游数据的兼容，包括其中刻意保留的怪癖（小时字段可选、秒数 ≥60
//! 的补偿、酷狗时间码不做累加）。

use clyric_core::text::utf8_char_count;
use clyric_core::{LyricItem, LyricStyle, TimeCode};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::line::split_tagged_line;

/// 非酷狗样式的时间标签：`[HH]?[MM|MMM]:[SS].[mmm]?`。
static TIME_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(\d{2})?:?(\d{2,3}):(\d{2})\.?(\d{1,3})?\]").expect("编译 TIME_TAG_REGEX 失败")
});

/// 酷狗样式的行标签：`[start,duration]`。
static KUGOU_TIME_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+?),(\d+?)\]").expect("编译 KUGOU_TIME_TAG_REGEX 失败"));

/// 虾米逐字时间码的重复段：`<gap>word<...`。
static XIAMI_PAIR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)>(.*?)<").expect("编译 XIAMI_PAIR_REGEX 失败"));

/// 虾米逐字时间码的末段（没有后继 `<`）。
static XIAMI_LAST_PAIR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*<(\d+)>(.*?)$").expect("编译 XIAMI_LAST_PAIR_REGEX 失败"));

/// 酷狗逐字时间码的重复段：`<start,length,flag>word<...`。
static KUGOU_PAIR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+?),(\d+?),\d+?>(.*?)<").expect("编译 KUGOU_PAIR_REGEX 失败")
});

/// 酷狗逐字时间码的末段。
static KUGOU_LAST_PAIR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*<(\d+?),(\d+?),\d+?>(.*?)$").expect("编译 KUGOU_LAST_PAIR_REGEX 失败")
});

/// 由共享同一时间戳键的一组原始行构造一个条目。
///
/// 逐行折叠：主文本来自第一个产出非空内容的行，`[tr]` 行给出翻译，
/// `[tc]` 行直接给出时间曲线（来自上一轮规范导出，优先于逐字重建）。
pub(crate) fn item_from_group(lines: &[String], style: LyricStyle) -> LyricItem {
    let mut item = LyricItem::default();

    for line in lines {
        let Some(tagged) = split_tagged_line(line) else {
            continue;
        };
        let line_content = tagged.content;

        if style == LyricStyle::Kugou {
            let Some(start) = KUGOU_TIME_TAG_REGEX
                .captures(line)
                .and_then(|c| c[1].parse::<u64>().ok())
            else {
                continue;
            };
            item.start_time = start;
        } else {
            let Some(start) = parse_time_tag(line) else {
                continue;
            };
            item.start_time = start;
        }

        // 第一个纯单词字符组成的标签是语义标记（时间戳标签都带 ':' 或 ','，
        // 不会被误认）。存在标记时不再做逐字重建。
        let marker = tagged
            .tags
            .iter()
            .find(|t| !t.is_empty() && t.chars().all(|c| c.is_alphanumeric() || c == '_'));

        if let Some(&marker) = marker {
            match marker {
                "tr" => item.translation = line_content.to_string(),
                "tc" => item.time_codes = parse_time_codes(line_content),
                _ => {}
            }
        } else if style == LyricStyle::Xiami {
            if let Some((content, codes)) = reconstruct_xiami(line_content) {
                item.content = content;
                item.time_codes = codes;
            }
        } else if style == LyricStyle::Kugou {
            if let Some((content, codes)) = reconstruct_kugou(line_content) {
                item.content = content;
                item.time_codes = codes;
            }
        }

        if item.content.is_empty() {
            item.content = line_content.to_string();
        }
    }

    item
}

/// 解析 `[HH]?[MM|MMM]:[SS].[mmm]?` 时间标签为毫秒。
///
/// 小时解析失败按 0 处理；毫秒按位数归一（1 位 ×100，2 位 ×10）。
/// 秒数 ≥60 时再加一次原始秒数值：这是对上游 `mm:ss:ms` 误写成
/// `mm:ss.ms` 数据的既有补偿，必须保留。
fn parse_time_tag(line: &str) -> Option<u64> {
    let caps = TIME_TAG_REGEX.captures(line)?;

    let hour: u64 = caps
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    let minute: u64 = caps[2].parse().ok()?;
    let second: u64 = caps[3].parse().ok()?;

    let millisecond = caps.get(4).map_or(0, |m| {
        let raw: u64 = m.as_str().parse().unwrap_or(0);
        match m.as_str().len() {
            1 => raw * 100,
            2 => raw * 10,
            _ => raw,
        }
    });

    let mut start_time = hour * 3_600_000 + minute * 60_000 + second * 1000 + millisecond;
    if second >= 60 {
        start_time += second;
    }
    Some(start_time)
}

/// 解析 `[tc]` 行的 `ms,charIdx|ms,charIdx|...` 串。坏的对被跳过。
fn parse_time_codes(content: &str) -> Vec<TimeCode> {
    let mut codes = Vec::new();
    for pair in content.split('|') {
        let mut fields = pair.split(',');
        let (Some(time), Some(chars)) = (fields.next(), fields.next()) else {
            debug!("跳过格式错误的时间码对: {pair:?}");
            continue;
        };
        let (Ok(time_ms), Ok(chars)) = (time.trim().parse(), chars.trim().parse()) else {
            debug!("跳过无法解析的时间码对: {pair:?}");
            continue;
        };
        codes.push(TimeCode::new(time_ms, chars));
    }
    codes
}

/// 虾米逐字重建：`<gap>word` 串，间隔毫秒逐段累加。
fn reconstruct_xiami(line_content: &str) -> Option<(String, Vec<TimeCode>)> {
    let last = XIAMI_LAST_PAIR_REGEX.captures(line_content)?;
    let last_gap: u64 = last[1].parse().ok()?;
    let last_word = &last[2];

    let mut total_time = 0u64;
    let mut char_count = 0usize;
    let mut codes = vec![TimeCode::new(0, 0)];
    let mut content = String::new();

    for caps in XIAMI_PAIR_REGEX.captures_iter(line_content) {
        let word = &caps[2];
        total_time += caps[1].parse::<u64>().unwrap_or(0);
        char_count += utf8_char_count(word);
        codes.push(TimeCode::new(total_time, char_count));
        content.push_str(word);
    }

    total_time += last_gap;
    char_count += utf8_char_count(last_word);
    codes.push(TimeCode::new(total_time, char_count));
    content.push_str(last_word);

    Some((content, codes))
}

/// 酷狗逐字重建：每段的终点是该段的 `start+length`（绝对值，不累加），
/// 字符数照常跨段累计。
fn reconstruct_kugou(line_content: &str) -> Option<(String, Vec<TimeCode>)> {
    let last = KUGOU_LAST_PAIR_REGEX.captures(line_content)?;
    let last_start: u64 = last[1].parse().ok()?;
    let last_length: u64 = last[2].parse().ok()?;
    let last_word = &last[3];

    let mut char_count = 0usize;
    let mut codes = vec![TimeCode::new(0, 0)];
    let mut content = String::new();

    for caps in KUGOU_PAIR_REGEX.captures_iter(line_content) {
        let word = &caps[3];
        let start: u64 = caps[1].parse().unwrap_or(0);
        let length: u64 = caps[2].parse().unwrap_or(0);
        char_count += utf8_char_count(word);
        codes.push(TimeCode::new(start + length, char_count));
        content.push_str(word);
    }

    char_count += utf8_char_count(last_word);
    codes.push(TimeCode::new(last_start + last_length, char_count));
    content.push_str(last_word);

    Some((content, codes))
}
