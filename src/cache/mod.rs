//! 缓存层
//!
//! 通过插件注册表选择缓存后端（moka 内存缓存或 Redis）。

pub mod object_cache;
pub mod register;
mod traits;

pub use traits::{CacheResult, ObjectCache};
