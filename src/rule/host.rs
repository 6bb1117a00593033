//! # 主机名提取
//!
//! 候选字符串补上 `http://` 后按 URL 解析，取 host 部分。
//! 解析失败只记日志，丢弃这一条候选。

use std::borrow::Cow;

use tracing::debug;
use url::Url;

use crate::domain::DomainSet;

/// 候选是否已经带有 `scheme://` 前缀
fn has_scheme(candidate: &str) -> bool {
    match candidate.split_once("://") {
        Some((scheme, _)) => {
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// 从主机表达式中提取主机名
///
/// 结果去掉首部的 `.` 和尾部的 `/` 并转为小写，为空时返回 `None`。
pub fn extract_host(candidate: &str) -> Option<String> {
    let candidate = candidate.trim();

    let url_str = if has_scheme(candidate) {
        Cow::Borrowed(candidate)
    } else {
        Cow::Owned(format!("http://{}", candidate.trim_start_matches('.')))
    };

    let url = match Url::parse(&url_str) {
        Ok(url) => url,
        Err(e) => {
            debug!("can't extract host from {:?}: {}", candidate, e);
            return None;
        }
    };

    let host = url
        .host_str()?
        .trim_start_matches('.')
        .trim_end_matches('/');

    if host.is_empty() {
        None
    } else {
        Some(host.to_ascii_lowercase())
    }
}

/// 提取主机名并加入集合，返回是否成功提取
pub fn add_domain_to_set(set: &mut DomainSet, candidate: &str) -> bool {
    match extract_host(candidate) {
        Some(host) => {
            set.insert(host);
            true
        }
        None => false,
    }
}
