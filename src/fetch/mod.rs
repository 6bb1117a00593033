//! # 获取模块
//!
//! 负责拿到 gfwlist 原始字节：
//! 1. 判断 `--input` 是远程 URL 还是本地路径
//! 2. 远程地址通过 HTTP 下载（固定 10 秒超时，不重试）
//! 3. 本地路径直接读取
//!
//! 任何失败都是致命错误，在写出任何文件之前中止。

mod http;
pub mod source;

pub use http::download;
pub use source::{read_local, Source};
