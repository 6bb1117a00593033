//! # 转换流水线
//!
//! 获取 → 解码 → 解析 → 精简 → 渲染 → 写出，每个阶段只依赖上一阶段的输出。
//!
//! 所有致命错误都发生在写出之前，写出本身也是两阶段提交，
//! 所以失败的运行不会留下半截 action 文件。

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use tracing::{debug, info};

use crate::action::{self, ProxyType};
use crate::decode;
use crate::domain::{self, SuffixTable};
use crate::fetch::{self, Source};
use crate::rule;

// ========================================
// 运行参数
// ========================================

/// 一次转换所需的全部参数
#[derive(Debug, Clone)]
pub struct Options {
    /// gfwlist 来源
    pub source: Source,
    /// 追加在 gfwlist 之后的用户规则文件
    pub user_rule: Option<PathBuf>,
    /// 封锁 action 文件路径
    pub output: PathBuf,
    /// 例外 action 文件路径
    pub white_output: PathBuf,
    /// 父代理地址，如 `127.0.0.1:1080`
    pub proxy: String,
    pub proxy_type: ProxyType,
}

// ========================================
// 运行报告
// ========================================

/// 运行报告（用于 --json 输出）
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// gfwlist 来源
    pub input: String,
    /// 解析得到的封锁候选数（含内置域名）
    pub candidates: usize,
    /// 精简后的封锁域名数
    pub domains: usize,
    /// 例外域名数
    pub white_domains: usize,
    /// 实际写出的文件
    pub written: Vec<PathBuf>,
    pub proxy_type: ProxyType,
    pub generated_at: String,
}

/// 执行一次完整转换
pub fn run(opts: &Options) -> Result<RunReport> {
    let table = SuffixTable::builtin();
    run_with_table(opts, &table)
}

/// 使用指定后缀表执行转换
pub fn run_with_table(opts: &Options, table: &SuffixTable) -> Result<RunReport> {
    debug!(suffixes = table.len(), "suffix table loaded");

    // 1. 获取
    let raw = opts.source.fetch().context("failed to fetch gfwlist")?;
    let user_rule = match &opts.user_rule {
        Some(path) => {
            let bytes = fetch::read_local(path).context("failed to load user rule")?;
            Some(String::from_utf8_lossy(&bytes).into_owned())
        }
        None => None,
    };

    // 2. 解码
    info!("Start decode gfwlist");
    let content = decode::decode(&raw);

    // 3. 解析
    info!("Start parse gfwlist");
    let parsed = rule::parse(&content, user_rule.as_deref());
    info!("Size of domains: {}", parsed.block.len());

    // 4. 精简
    info!("Reduce domains");
    let reduced = domain::reduce(&parsed, table);

    // 5. 渲染
    info!("Regenerate action file");
    let generated_at = action::timestamp(&Local::now());
    let rendered = action::render(&reduced, opts.proxy_type, &opts.proxy, &generated_at)
        .context("failed to render action file")?;

    // 6. 写出
    let actions = rendered.into_actions(&opts.output, &opts.white_output);
    action::write_all(&actions).context("failed to write action file")?;

    Ok(RunReport {
        input: opts.source.to_string(),
        candidates: parsed.block.len(),
        domains: reduced.block.len(),
        white_domains: reduced.exception.len(),
        written: actions.into_iter().map(|a| a.path).collect(),
        proxy_type: opts.proxy_type,
        generated_at,
    })
}
