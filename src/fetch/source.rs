//! # 输入来源
//!
//! `--input` 既可以是 URL 也可以是本地路径，靠 URL 正则区分：
//! - 协议：http / https / ftp / ftps
//! - 主机：域名、localhost、IPv4、IPv6
//! - 可选端口和路径
//!
//! 不匹配正则的一律当作本地路径。

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::info;

use crate::error::{Error, Result};

/// 未指定 `--input` 时使用的 gfwlist 地址
pub const DEFAULT_GFWLIST_URL: &str =
    "https://raw.githubusercontent.com/gfwlist/gfwlist/master/gfwlist.txt";

const URL_PATTERN: &str = concat!(
    r"(?i)^(?:http|ftp)s?://",
    r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)|",
    r"localhost|",
    r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}|",
    r"\[?[A-F0-9]*:[A-F0-9:]+\]?)",
    r"(?::\d+)?",
    r"(?:/?|[/?]\S+)$",
);

fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| Regex::new(URL_PATTERN).expect("URL pattern is a valid regex"))
}

/// 判断字符串是否为受支持的 URL
pub fn is_url(input: &str) -> bool {
    url_regex().is_match(input)
}

// ========================================
// 来源枚举
// ========================================

/// gfwlist 来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// 本地文件
    Local(PathBuf),
    /// 远程 URL
    Remote(String),
}

impl Source {
    /// 从 `--input` 参数构造来源
    ///
    /// 未提供参数时使用默认 gfwlist 地址。
    pub fn from_input(input: Option<&str>) -> Self {
        match input {
            None => Source::Remote(DEFAULT_GFWLIST_URL.to_string()),
            Some(s) if is_url(s) => Source::Remote(s.to_string()),
            Some(s) => Source::Local(PathBuf::from(s)),
        }
    }

    /// 获取原始字节
    pub fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            Source::Remote(url) => super::download(url),
            Source::Local(path) => {
                info!("Reading gfwlist from {}", path.display());
                read_local(path)
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Local(path) => write!(f, "{}", path.display()),
            Source::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// 读取本地文件
pub fn read_local(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}
