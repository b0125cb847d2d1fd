//! 行标签解析：把一行原始文本拆成行首的 `[...]` 标签序列和其后的正文。

use regex::Regex;
use std::sync::LazyLock;

/// 匹配以至少一个 `[...]` 标签开头的行，捕获标签串与正文。
static LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:\[[^\]]*\])+)(.*)$").expect("编译 LINE_REGEX 失败")
});

/// 从标签串中提取单个标签内容。
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").expect("编译 TAG_REGEX 失败"));

/// 一行物理文本的分解结果：行首标签（按出现顺序）与其后的正文。
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct TaggedLine<'a> {
    pub tags: Vec<&'a str>,
    pub content: &'a str,
}

/// 拆分一行。不以 `[...]` 开头的行不是歌词行，返回 `None`。
pub(crate) fn split_tagged_line(line: &str) -> Option<TaggedLine<'_>> {
    let caps = LINE_REGEX.captures(line)?;
    let tag_run = caps.get(1).map_or("", |m| m.as_str());
    let content = caps.get(2).map_or("", |m| m.as_str());
    let tags = TAG_REGEX
        .captures_iter(tag_run)
        .map(|c| c.get(1).map_or("", |m| m.as_str()))
        .collect();
    Some(TaggedLine { tags, content })
}

/// 标签分类：首字符是 ASCII 数字的为时间戳标签，其余是语义标签。
pub(crate) fn is_time_tag(tag: &str) -> bool {
    tag.as_bytes().first().is_some_and(u8::is_ascii_digit)
}
