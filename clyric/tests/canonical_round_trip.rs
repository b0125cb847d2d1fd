//! 规范文本格式的往返测试：三种来源样式解析出的文档，经过
//! `serialize` → `parse` 后条目必须逐位一致。

use clyric::{LyricStyle, parse, serialize};

fn assert_idempotent(text: &str, style: LyricStyle) {
    let first = parse(text, style);
    // 重新解析规范形式时总是 CLrc 样式（[tc] 行直接透传时间曲线）
    let second = parse(&serialize(&first), LyricStyle::CLrc);
    assert_eq!(second.items, first.items);
    assert_eq!(second.offset, first.offset);
    assert_eq!(second.track.title, first.track.title);

    let third = parse(&serialize(&second), LyricStyle::CLrc);
    assert_eq!(third.items, second.items);
}

#[test]
fn clrc_round_trip_preserves_time_codes() {
    let text = "[ti]测试\n[00:56.343]测试1\n[00:56.343][tr]测试1翻译\n\
                [00:56.343][tc]0,0|128,1|256,2|384,3\n";
    let lyric = parse(text, LyricStyle::CLrc);
    let reparsed = parse(&serialize(&lyric), LyricStyle::CLrc);

    assert_eq!(reparsed.items.len(), 1);
    assert_eq!(reparsed.items[0].start_time, 56_343);
    assert_eq!(reparsed.items[0].time_codes, lyric.items[0].time_codes);

    assert_idempotent(text, LyricStyle::CLrc);
}

#[test]
fn xiami_round_trip() {
    let text = "[ti]測試\n[00:04.057]<100>作<100>詞<309>：<602>cittan*\n[x-trans]作词：cittan*\n";
    let lyric = parse(text, LyricStyle::Xiami);
    assert_eq!(lyric.items[0].time_codes.len(), 5);

    let reparsed = parse(&serialize(&lyric), LyricStyle::CLrc);
    assert_eq!(reparsed.items, lyric.items);

    assert_idempotent(text, LyricStyle::Xiami);
}

#[test]
fn kugou_round_trip() {
    let text = "[ti]測試\n[30889,5860]<0,210,0>見<210,220,0>え<430,340,0>な<770,230,0>い<1000,4860,0>の\n";
    let lyric = parse(text, LyricStyle::Kugou);
    assert_eq!(lyric.items[0].time_codes.len(), 6);

    let reparsed = parse(&serialize(&lyric), LyricStyle::CLrc);
    assert_eq!(reparsed.items, lyric.items);

    assert_idempotent(text, LyricStyle::Kugou);
}

#[test]
fn multi_timestamp_document_round_trip() {
    let text = "[ti]海阔天空\n[al]乐与怒\n[ar]Beyond\n[offset]+40\n\
                [03:57.70][03:20.00][02:08.00][01:09.00]原谅我这一生不羁放纵爱自由\n\
                [04:04.50][03:27.00][02:15.00][01:16.00]也会怕有一天会跌倒\n";
    assert_idempotent(text, LyricStyle::CLrc);
}

#[test]
fn instrumental_round_trip() {
    let text = "[ti]间奏曲\n[instrumental]\n";
    let lyric = parse(text, LyricStyle::CLrc);
    assert!(lyric.track.instrumental);

    let reparsed = parse(&serialize(&lyric), LyricStyle::CLrc);
    assert!(reparsed.track.instrumental);
    assert!(reparsed.is_valid());
}
