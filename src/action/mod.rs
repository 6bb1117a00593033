//! # action 文件生成模块
//!
//! 此模块负责：
//! 1. 根据代理类型生成 privoxy 转发指令
//! 2. 把域名集合和生成时间填入模板
//! 3. 原子地写出封锁文件和（非空时的）例外文件

pub mod forwarder;
pub mod template;
mod writer;

use std::path::Path;

use tracing::debug;

use crate::domain::DomainSets;
use crate::error::Result;

pub use forwarder::{forwarder, ProxyType};
pub use template::{gfwlist_template, timestamp, white_template};
pub use writer::{write_all, RenderedAction};

/// 渲染结果
#[derive(Debug, Clone)]
pub struct Rendered {
    /// 封锁 action 文件，总是生成
    pub block: String,
    /// 例外 action 文件，例外集合为空时为 `None`
    pub white: Option<String>,
}

/// 使用内置模板渲染
pub fn render(
    domains: &DomainSets,
    proxy_type: ProxyType,
    proxy: &str,
    time: &str,
) -> Result<Rendered> {
    let forward = forwarder(proxy_type, proxy);

    let template = gfwlist_template()?;
    debug!("render {} with {} domains", template.name(), domains.block.len());
    let block = template.render(&forward, &domains.block, time);

    let white = if domains.exception.is_empty() {
        None
    } else {
        let template = white_template()?;
        debug!("render {} with {} domains", template.name(), domains.exception.len());
        Some(template.render(&forward, &domains.exception, time))
    };

    Ok(Rendered { block, white })
}

impl Rendered {
    /// 组装待写出的文件列表
    pub fn into_actions(self, output: &Path, white_output: &Path) -> Vec<RenderedAction> {
        let mut actions = vec![RenderedAction {
            path: output.to_path_buf(),
            content: self.block,
        }];
        if let Some(content) = self.white {
            actions.push(RenderedAction {
                path: white_output.to_path_buf(),
                content,
            });
        }
        actions
    }
}
