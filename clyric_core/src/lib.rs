//! clyric 的核心类型。
//!
//! 所有来源格式（普通 LRC、虾米逐字、酷狗逐字）最终都被归一化为
//! 本 crate 中的规范表示 [`Lyric`]，再由上层进行排序、合并与播放同步。

pub mod io;
pub mod model;
pub mod text;

pub use io::*;
pub use model::*;
