//! 歌词检索编排：依次查询各提供商、解析、排序，并与本地缓存联动。

pub mod matcher;

use clyric_core::{Lyric, Track};
use tracing::{debug, info, warn};

use crate::parser;
use crate::providers::LyricProvider;
use crate::store::LyricStore;

pub use matcher::{merge_translation, rank, score};

/// 本地缓存命中的来源标识。
const LOCAL_SOURCE: &str = "LocalFile";

/// 按固定顺序持有提供商并编排一次检索。
#[derive(Default)]
pub struct LyricSearch {
    providers: Vec<Box<dyn LyricProvider>>,
}

impl LyricSearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 以给定的提供商序列构造；序列顺序就是查询顺序。
    #[must_use]
    pub fn with_providers(providers: Vec<Box<dyn LyricProvider>>) -> Self {
        Self { providers }
    }

    /// 追加一个提供商到查询顺序末尾。
    pub fn register(&mut self, provider: Box<dyn LyricProvider>) {
        self.providers.push(provider);
    }

    /// 查询所有提供商，解析每条原始结果并按目标排序返回。
    ///
    /// 提供商失败只记日志，等同于该提供商零结果。
    pub async fn search(&self, track: &Track) -> Vec<Lyric> {
        let mut candidates = Vec::new();
        for provider in &self.providers {
            match provider.search_lyrics(track).await {
                Ok(raw_results) => {
                    debug!("{} 返回 {} 条结果", provider.id(), raw_results.len());
                    for raw in raw_results {
                        candidates.push(parser::parse_with_track(&raw.text, raw.style, raw.track));
                    }
                }
                Err(e) => warn!("{} 查询失败: {e}", provider.id()),
            }
        }
        rank(candidates, &track.title, &track.artist)
    }

    /// 取一首歌的歌词：本地缓存 → 专辑纯音乐标记 → 在线检索。
    ///
    /// 在线命中的有效结果会写回本地缓存。没有任何有效结果返回 `None`。
    pub async fn fetch(&self, track: &Track, store: &LyricStore) -> Option<Lyric> {
        if let Some(mut local) = store.load(&track.title, &track.album, &track.artist) {
            if local.is_valid() {
                info!("本地缓存命中: {}", track.title);
                local.track.source = LOCAL_SOURCE.to_string();
                return Some(local);
            }
        }

        if store.is_album_instrumental(&track.album) {
            debug!("专辑 {} 标记为纯音乐", track.album);
            let mut instrumental_track = track.clone();
            instrumental_track.instrumental = true;
            return Some(Lyric::from_parts(instrumental_track, vec![]));
        }

        let best = self
            .search(track)
            .await
            .into_iter()
            .next()
            .filter(Lyric::is_valid)?;

        if let Err(e) = store.save(&best) {
            warn!("写入本地缓存失败: {e}");
        }
        Some(best)
    }
}
