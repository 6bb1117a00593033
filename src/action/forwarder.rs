//! # 转发指令
//!
//! privoxy 的 forward 语法：
//! - HTTP 父代理：`forward <addr>`
//! - SOCKS 父代理：`forward-<type> <addr> .`（末尾的 `.` 表示不再经过 HTTP 父代理）

use std::fmt;

use serde::Serialize;

/// 父代理类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProxyType {
    #[value(name = "http")]
    Http,
    #[value(name = "socks4")]
    Socks4,
    #[value(name = "socks4a")]
    Socks4a,
    #[value(name = "socks5")]
    Socks5,
    /// SOCKS5，并让 privoxy 用 TFO 连接
    #[value(name = "socks5t")]
    Socks5t,
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyType::Http => write!(f, "http"),
            ProxyType::Socks4 => write!(f, "socks4"),
            ProxyType::Socks4a => write!(f, "socks4a"),
            ProxyType::Socks5 => write!(f, "socks5"),
            ProxyType::Socks5t => write!(f, "socks5t"),
        }
    }
}

/// 生成转发指令，`proxy` 原样写入（如 `127.0.0.1:1080`）
pub fn forwarder(proxy_type: ProxyType, proxy: &str) -> String {
    match proxy_type {
        ProxyType::Http => format!("forward {}", proxy),
        socks => format!("forward-{} {} .", socks, proxy),
    }
}
