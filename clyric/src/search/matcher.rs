//! 候选排序与翻译合并。

use clyric_core::Lyric;
use clyric_core::text::string_distance;

/// 翻译奖励：任一条目带翻译。
const TRANSLATION_BONUS: f64 = 0.2;
/// 逐字时间码奖励：任一条目带非空时间曲线。
const TIME_CODE_BONUS: f64 = 0.1;
/// 无效候选的罚分。
const INVALID_PENALTY: f64 = 1.0;

/// 计算候选相对目标 `(title, artist)` 的综合得分。
///
/// `score = 1 - distance / length`，其中
/// `distance = d(title) + d(artist)/2`，`length = len(title) + len(artist)/2`
/// （整数除法）。权重是调出来的启发值，为保持行为兼容必须原样保留。
#[must_use]
pub fn score(candidate: &Lyric, title: &str, artist: &str) -> f64 {
    let length = title.len() + artist.len() / 2;
    let distance = string_distance(&candidate.track.title, title)
        + string_distance(&candidate.track.artist, artist) / 2;

    let mut score = if length == 0 {
        0.0
    } else {
        1.0 - distance as f64 / length as f64
    };

    if candidate.items.iter().any(|i| !i.translation.is_empty()) {
        score += TRANSLATION_BONUS;
    }
    if candidate.items.iter().any(|i| !i.time_codes.is_empty()) {
        score += TIME_CODE_BONUS;
    }
    if !candidate.is_valid() {
        score -= INVALID_PENALTY;
    }
    score
}

/// 按得分降序稳定排序候选；得分相同的保持原始相对顺序。
#[must_use]
pub fn rank(candidates: Vec<Lyric>, title: &str, artist: &str) -> Vec<Lyric> {
    let mut scored: Vec<(f64, Lyric)> = candidates
        .into_iter()
        .map(|candidate| (score(&candidate, title, artist), candidate))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, lyric)| lyric).collect()
}

/// 把单独解析出的翻译文档按时间戳合并进基准文档。
///
/// 两个游标并行前进的归并连接：时间戳精确相等才算命中，没有命中的
/// 翻译被静默丢弃（已接受的限制，不做模糊匹配），基准条目数不变。
pub fn merge_translation(base: &mut Lyric, translation: &Lyric) {
    let mut cursor = 0;
    for item in &mut base.items {
        let Some(candidate) = translation.items.get(cursor) else {
            break;
        };
        if item.start_time == candidate.start_time {
            item.translation = candidate.content.clone();
            cursor += 1;
        }
    }
}
