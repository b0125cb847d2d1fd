//! 粗粒度的语言分类，只用于宿主决定是否做简繁转换。

use clyric_core::{Language, Lyric};

/// 文本是否含假名（UTF-8 下 U+3040..U+30FF 的首字节是 0xE3，
/// 次字节落在 0x81..=0x83）。
#[must_use]
pub fn contains_kana(s: &str) -> bool {
    s.as_bytes()
        .windows(2)
        .any(|w| w[0] == 0xE3 && (0x81..=0x83).contains(&w[1]))
}

/// 文本是否含 CJK 统一表意字符（首字节 0xE4..=0xEA）。
#[must_use]
pub fn contains_cjk(s: &str) -> bool {
    s.bytes().any(|b| (0xE4..=0xEA).contains(&b))
}

/// 单段文本的语言分类。
#[must_use]
pub fn classify(s: &str) -> Language {
    if contains_kana(s) {
        Language::Japanese
    } else if contains_cjk(s) {
        Language::Chinese
    } else {
        Language::Other
    }
}

/// 扫描全部条目，填充曲目的主文本与翻译语言分类。
///
/// 假名优先：任何一行含假名即判为日语，否则只要出现 CJK 字符
/// 判为中文。
pub fn classify_languages(lyric: &mut Lyric) {
    let mut content_language = Language::Other;
    for item in &lyric.items {
        if contains_kana(&item.content) {
            content_language = Language::Japanese;
            break;
        }
        if contains_cjk(&item.content) {
            content_language = Language::Chinese;
        }
    }

    let mut translate_language = Language::Other;
    for item in &lyric.items {
        if contains_kana(&item.translation) {
            translate_language = Language::Japanese;
            break;
        }
        if contains_cjk(&item.translation) {
            translate_language = Language::Chinese;
        }
    }

    lyric.track.content_language = content_language;
    lyric.track.translate_language = translate_language;
}
