//! 文档装配：把整段原始歌词文本组装成规范 [`Lyric`]。
//!
//! 行按字面时间戳标签分组（不是按解析后的毫秒值——上游时间戳的
//! 书写差异本来就会解析出不同毫秒，按字面分组避免任何意外合并），
//! 文档级标签填充曲目元数据，最后稳定排序。

use std::collections::BTreeMap;

use clyric_core::{Lyric, LyricStyle, Track};
use tracing::{debug, warn};

use super::item::item_from_group;
use super::line::{is_time_tag, split_tagged_line};

/// 超过该字节数的行视为伪装成歌词的垃圾数据，直接丢弃。
const MAX_LINE_BYTES: usize = 400;

/// 解析整段原始歌词文本。
///
/// 尽力而为：无法识别的行被静默跳过，坏的数字字段取默认值，
/// 绝不因输入而失败。结果可能无效，由 [`Lyric::is_valid`] 判定。
#[must_use]
pub fn parse(content: &str, style: LyricStyle) -> Lyric {
    let text = content.replace('\r', "");
    let lines: Vec<&str> = text.split('\n').collect();

    let mut track = Track::default();
    let mut offset = 0i64;
    // 键是字面标签子串；BTreeMap 保证按键序迭代，组内保持插入顺序
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (index, raw_line) in lines.iter().enumerate() {
        if raw_line.len() > MAX_LINE_BYTES {
            warn!("第 {} 行超过 {MAX_LINE_BYTES} 字节，丢弃", index + 1);
            continue;
        }
        let Some(tagged) = split_tagged_line(raw_line) else {
            continue;
        };

        if let [tag] = tagged.tags.as_slice() {
            if is_time_tag(tag) {
                register(&mut groups, tag, tagged.content);
            } else {
                apply_metadata_tag(
                    tag,
                    tagged.content,
                    &mut track,
                    &mut offset,
                    style,
                    index.checked_sub(1).map(|i| lines[i]),
                    &mut groups,
                );
            }
        } else {
            // 多个时间戳共享一条正文的 LRC 写法；夹在其中的语义标签
            // 作为合成括号并回正文
            let mut content = tagged.content.to_string();
            for tag in &tagged.tags {
                if !is_time_tag(tag) {
                    content = format!("[{tag}]{content}");
                }
            }
            for tag in &tagged.tags {
                if is_time_tag(tag) {
                    register(&mut groups, tag, &content);
                }
            }
        }
    }

    let mut items: Vec<_> = groups
        .values()
        .map(|group| item_from_group(group, style))
        .collect();
    // 稳定排序：解析后毫秒值相同的条目保持分组顺序
    items.sort_by_key(|item| item.start_time);

    Lyric {
        track,
        offset,
        items,
    }
}

fn register(groups: &mut BTreeMap<String, Vec<String>>, tag: &str, content: &str) {
    groups
        .entry(tag.to_string())
        .or_default()
        .push(format!("[{tag}]{content}"));
}

#[allow(clippy::too_many_arguments)]
fn apply_metadata_tag(
    tag: &str,
    content: &str,
    track: &mut Track,
    offset: &mut i64,
    style: LyricStyle,
    previous_line: Option<&str>,
    groups: &mut BTreeMap<String, Vec<String>>,
) {
    match tag {
        "ti" => track.title = content.to_string(),
        "al" => track.album = content.to_string(),
        "ar" => track.artist = content.to_string(),
        "du" => track.duration = content.trim().parse().unwrap_or(-1),
        "offset" => *offset = content.trim().parse().unwrap_or(0),
        "instrumental" => track.instrumental = true,
        // 虾米把翻译放在紧跟源行的 x-trans 行里；翻译为空时上游会
        // 省略原文重复，这时用上一行自己的正文顶替
        "x-trans" if style == LyricStyle::Xiami => {
            let Some(previous) = previous_line.and_then(split_tagged_line) else {
                return;
            };
            let translation = if content.is_empty() {
                previous.content
            } else {
                content
            };
            for previous_tag in &previous.tags {
                if is_time_tag(previous_tag) {
                    register(groups, previous_tag, &format!("[tr]{translation}"));
                }
            }
        }
        other => debug!("忽略未知的语义标签: [{other}]"),
    }
}
