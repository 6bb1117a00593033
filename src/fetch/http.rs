//! # HTTP 下载

use std::time::Duration;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// 下载超时
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// 下载指定 URL 的全部内容
///
/// 非 2xx 状态码视为失败。
pub fn download(url: &str) -> Result<Vec<u8>> {
    info!("Downloading gfwlist from {}", url);

    let wrap = |source| Error::Download {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(wrap)?;

    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(wrap)?;

    let content = response.bytes().map_err(wrap)?;
    debug!(bytes = content.len(), "download finished");

    Ok(content.to_vec())
}
