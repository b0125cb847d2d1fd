//! 播放游标：把活动时间映射到当前歌词行。
//!
//! 纯计算，不拥有计时器。返回的 `delay_to_next_ms` 只是给外部显示
//! 驱动安排下一次刷新的调度提示。

use clyric_core::Lyric;

/// 一次游标推进的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorUpdate {
    /// 当前活动行下标；播放位置尚未到达第一行时为 `None`。
    pub index: Option<usize>,
    /// 距下一行生效的毫秒数（调度提示）；没有下一行时为 `None`。
    pub delay_to_next_ms: Option<i64>,
    /// 行内已经过的毫秒数，用于逐字高亮。
    pub in_line_elapsed_ms: Option<i64>,
}

/// 推进播放游标。
///
/// 返回满足 `items[i].start_time + offset <= position` 的最大下标。
/// 只从 `previous_index` 起向前扫描——正常播放位置单调前进，从不回看；
/// 不连续的跳转需要调用方先把游标重置为 `None` 再做一次全量前扫。
/// 只有一个条目时它永远是活动行。
#[must_use]
pub fn advance_cursor(
    lyric: &Lyric,
    position_ms: i64,
    offset_ms: i64,
    previous_index: Option<usize>,
) -> CursorUpdate {
    let items = &lyric.items;
    if items.is_empty() {
        return CursorUpdate::default();
    }

    let effective = |i: usize| items[i].start_time as i64 + offset_ms;

    if items.len() == 1 {
        return CursorUpdate {
            index: Some(0),
            delay_to_next_ms: None,
            in_line_elapsed_ms: Some(position_ms - effective(0)),
        };
    }

    let mut index = previous_index.filter(|&i| i < items.len());
    let mut next = index.map_or(0, |i| i + 1);
    while next < items.len() && effective(next) <= position_ms {
        index = Some(next);
        next += 1;
    }

    CursorUpdate {
        index,
        delay_to_next_ms: (next < items.len()).then(|| effective(next) - position_ms),
        in_line_elapsed_ms: index.map(|i| position_ms - effective(i)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clyric_core::{LyricItem, Track};

    fn lyric(starts: &[u64]) -> Lyric {
        Lyric::from_parts(
            Track::with_title("T"),
            starts
                .iter()
                .map(|&s| LyricItem::new(format!("line at {s}"), s))
                .collect(),
        )
    }

    #[test]
    fn test_forward_scan_finds_active_line() {
        let lyric = lyric(&[1000, 5000, 9000]);
        let update = advance_cursor(&lyric, 6000, 0, None);
        assert_eq!(update.index, Some(1));
        assert_eq!(update.delay_to_next_ms, Some(3000));
        assert_eq!(update.in_line_elapsed_ms, Some(1000));
    }

    #[test]
    fn test_before_first_line() {
        let lyric = lyric(&[1000, 5000]);
        let update = advance_cursor(&lyric, 200, 0, None);
        assert_eq!(update.index, None);
        assert_eq!(update.delay_to_next_ms, Some(800));
        assert_eq!(update.in_line_elapsed_ms, None);
    }

    #[test]
    fn test_monotonic_advance_from_previous() {
        let lyric = lyric(&[1000, 5000, 9000]);
        let first = advance_cursor(&lyric, 1500, 0, None);
        assert_eq!(first.index, Some(0));
        let second = advance_cursor(&lyric, 9500, 0, first.index);
        assert_eq!(second.index, Some(2));
        assert_eq!(second.delay_to_next_ms, None);
    }

    #[test]
    fn test_offset_shifts_boundaries() {
        let lyric = lyric(&[1000, 5000]);
        // offset +500：第二行在 5500 才生效
        let update = advance_cursor(&lyric, 5200, 500, None);
        assert_eq!(update.index, Some(0));
        assert_eq!(update.delay_to_next_ms, Some(300));
    }

    #[test]
    fn test_single_item_always_active() {
        let lyric = lyric(&[10_000]);
        let update = advance_cursor(&lyric, 0, 0, None);
        assert_eq!(update.index, Some(0));
        assert_eq!(update.in_line_elapsed_ms, Some(-10_000));
        assert_eq!(update.delay_to_next_ms, None);
    }

    #[test]
    fn test_seek_requires_reset() {
        let lyric = lyric(&[1000, 5000, 9000]);
        let late = advance_cursor(&lyric, 9500, 0, None);
        assert_eq!(late.index, Some(2));
        // 向后跳转：先重置为 None 再全量前扫
        let after_seek = advance_cursor(&lyric, 1500, 0, None);
        assert_eq!(after_seek.index, Some(0));
        // 不重置时游标保持单调假设，停在原处
        let stale = advance_cursor(&lyric, 1500, 0, late.index);
        assert_eq!(stale.index, Some(2));
    }

    #[test]
    fn test_empty_lyric() {
        let update = advance_cursor(&lyric(&[]), 1000, 0, None);
        assert_eq!(update, CursorUpdate::default());
    }
}
