//! # gfwlist 解码
//!
//! 官方 gfwlist 以 base64 发布（每 64 字符一行），但用户也可能直接给出纯文本列表。
//!
//! ## 判定规则
//! 1. 内容里出现 `.` 就认为已经是纯文本（base64 字母表里没有 `.`），不解码
//! 2. 否则尝试 base64 解码，解码或 UTF-8 校验失败都原样返回
//!
//! 注意：没有 `.` 却恰好是合法 base64 的纯文本会被误解码。
//! 下游依赖这一行为，这里保持不变。

use base64::{engine::general_purpose, Engine as _};
use tracing::debug;

/// 解码 gfwlist 内容
pub fn decode(content: &[u8]) -> String {
    if content.contains(&b'.') {
        debug!("content contains '.', treat as plain text");
        return String::from_utf8_lossy(content).into_owned();
    }

    // 去掉换行等空白后再解码
    let compact: Vec<u8> = content
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    match general_purpose::STANDARD.decode(&compact) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                debug!("decoded content is not UTF-8, fall back to plain text: {}", e);
                String::from_utf8_lossy(content).into_owned()
            }
        },
        Err(e) => {
            debug!("base64 decode failed, fall back to plain text: {}", e);
            String::from_utf8_lossy(content).into_owned()
        }
    }
}
