//! 本地歌词缓存：每个曲目一个规范 `.clrc` 文件。

use std::fs;
use std::path::{Path, PathBuf};

use clyric_core::text::normalize_file_name;
use clyric_core::{Lyric, LyricStyle, lyric_file_name};
use tracing::debug;

use crate::error::Result;
use crate::parser;

/// 目录级歌词缓存。
#[derive(Debug, Clone)]
pub struct LyricStore {
    directory: PathBuf,
}

impl LyricStore {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// 按曲目读取缓存的歌词；文件不存在或无法读取返回 `None`。
    #[must_use]
    pub fn load(&self, title: &str, album: &str, artist: &str) -> Option<Lyric> {
        let path = self.directory.join(lyric_file_name(title, album, artist));
        let content = fs::read_to_string(&path).ok()?;
        debug!("读取本地歌词文件: {}", path.display());
        Some(parser::parse(&content, LyricStyle::CLrc))
    }

    /// 把歌词以规范文本形式写入缓存。
    pub fn save(&self, lyric: &Lyric) -> Result<()> {
        fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(lyric.file_name());
        fs::write(&path, lyric.canonical_text())?;
        debug!("保存歌词到: {}", path.display());
        Ok(())
    }

    /// 删除曲目对应的缓存文件。文件本就不存在不算错误。
    pub fn delete(&self, lyric: &Lyric) -> Result<()> {
        let path = self.directory.join(lyric.file_name());
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// 专辑是否带纯音乐标记文件（`<album>.instrumental`）。
    #[must_use]
    pub fn is_album_instrumental(&self, album: &str) -> bool {
        if album.is_empty() {
            return false;
        }
        self.directory
            .join(normalize_file_name(&format!("{album}.instrumental")))
            .exists()
    }

    /// 为专辑写入纯音乐标记文件。
    pub fn mark_album_instrumental(&self, album: &str) -> Result<()> {
        fs::create_dir_all(&self.directory)?;
        let path = self
            .directory
            .join(normalize_file_name(&format!("{album}.instrumental")));
        fs::write(path, "")?;
        Ok(())
    }
}
