//! 纯文本工具：UTF-8 字符计数、编辑距离、文件名归一化。
//!
//! 这里的函数全部是无状态的同步计算，解析与排序逻辑都建立在它们之上。

/// 统计 UTF-8 字符串中的 Unicode 标量数量。
///
/// 按首字节分类计数：每个非延续字节（`0b10xxxxxx` 以外）记一个字符。
/// 对非法序列不做校验，计数结果未定义，但绝不会越界或 panic。
#[must_use]
pub fn utf8_char_count(s: &str) -> usize {
    s.bytes().filter(|b| (b & 0xC0) != 0x80).count()
}

/// 复合编辑距离：`levenshtein(compare, base) + base.len() - lcs(compare, base)`。
///
/// 相比纯 Levenshtein，这个组合更偏向与基准串共享长有序公共子序列的候选，
/// 同时仍惩罚长度差异。两个内层算法都按字节逐格填表，O(n·m)。
#[must_use]
pub fn string_distance(compare: &str, base: &str) -> usize {
    levenshtein_distance(compare, base) + base.len() - longest_common_subsequence(compare, base)
}

/// 经典 Levenshtein 距离，按字节比较。
#[must_use]
pub fn levenshtein_distance(str1: &str, str2: &str) -> usize {
    let (a, b) = (str1.as_bytes(), str2.as_bytes());
    let (rows, cols) = (a.len() + 1, b.len() + 1);

    let mut distance = vec![0usize; rows * cols];
    for i in 0..rows {
        distance[i * cols] = i;
    }
    for j in 0..cols {
        distance[j] = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            distance[i * cols + j] = (distance[(i - 1) * cols + j] + 1)
                .min(distance[i * cols + (j - 1)] + 1)
                .min(distance[(i - 1) * cols + (j - 1)] + cost);
        }
    }

    distance[rows * cols - 1]
}

/// 最长公共子序列长度，按字节比较。
#[must_use]
pub fn longest_common_subsequence(str1: &str, str2: &str) -> usize {
    let (a, b) = (str1.as_bytes(), str2.as_bytes());
    let (rows, cols) = (a.len() + 1, b.len() + 1);

    // lcs[i][j] = str1[0..i] 与 str2[0..j] 的 LCS 长度
    let mut lcs = vec![0usize; rows * cols];
    for i in 1..rows {
        for j in 1..cols {
            lcs[i * cols + j] = if a[i - 1] == b[j - 1] {
                1 + lcs[(i - 1) * cols + (j - 1)]
            } else {
                lcs[(i - 1) * cols + j].max(lcs[i * cols + (j - 1)])
            };
        }
    }

    lcs[rows * cols - 1]
}

/// 把文件系统不允许的 ASCII 字符替换为空格。
///
/// 大于 127 的字节原样保留。被替换的字符都是单字节 ASCII，
/// 不会与 UTF-8 延续字节范围冲突，所以可以逐字符独立处理。
#[must_use]
pub fn normalize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | '?' | '%' | '*' | ':' | '|' | '"' | '<' | '>' => ' ',
            other => other,
        })
        .collect()
}

/// 按字面分隔符切分字符串。
///
/// 至少返回一个元素；最后一个分隔符之后的片段即使为空也保留。
#[must_use]
pub fn split_on<'a>(s: &'a str, delimiter: &str) -> Vec<&'a str> {
    s.split(delimiter).collect()
}
