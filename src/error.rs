//! # 致命错误
//!
//! 每个变体对应流水线中会中止运行的一个阶段。
//! 解码失败和单条主机名提取失败不在此列：前者回退为纯文本，后者只记日志并丢弃。

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// 下载 gfwlist 失败（超时、DNS、非 2xx 状态码）
    #[error("download failed: {url}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// 读取本地文件失败（输入列表或用户规则）
    #[error("read failed: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 模板不可用
    #[error("render failed: {0}")]
    Render(String),

    /// 写入 action 文件失败
    #[error("write failed: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
