//! # 规则集合构建
//!
//! 用户规则追加在 gfwlist 之后一起处理。内置域名在解析前先放入封锁集合。
//!
//! 例外规则（`@` 开头）只在来自用户规则时生效；gfwlist 自带的例外规则直接丢弃。

use tracing::{debug, trace};

use super::host::add_domain_to_set;
use super::kind::RuleKind;
use crate::domain::{DomainSet, DomainSets};

const BUILTIN_DOMAINS: &str = include_str!("../../resources/builtin.txt");

/// 规则行的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// gfwlist 本身
    Main,
    /// `--user-rule` 文件
    User,
}

/// 内置的始终封锁域名
pub fn builtin_domains() -> impl Iterator<Item = &'static str> {
    BUILTIN_DOMAINS
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// 使用内置域名解析规则
pub fn parse(content: &str, user_rule: Option<&str>) -> DomainSets {
    parse_with_seeds(builtin_domains(), content, user_rule)
}

/// 解析规则，`seeds` 预先放入封锁集合
pub fn parse_with_seeds<'a>(
    seeds: impl IntoIterator<Item = &'a str>,
    content: &str,
    user_rule: Option<&str>,
) -> DomainSets {
    let mut block: DomainSet = seeds.into_iter().map(str::to_ascii_lowercase).collect();
    let mut exception = DomainSet::new();

    let main_lines = content.lines().map(|line| (Origin::Main, line));
    let user_lines = user_rule
        .unwrap_or_default()
        .lines()
        .map(|line| (Origin::User, line));

    let mut dropped = 0usize;

    for (origin, line) in main_lines.chain(user_lines) {
        let kind = RuleKind::classify(line);

        let extracted = match (&kind, origin) {
            (RuleKind::Exception(expr), Origin::User) => add_domain_to_set(&mut exception, expr),
            (RuleKind::Exception(_), Origin::Main) => {
                trace!("ignore exception rule from gfwlist: {}", line);
                continue;
            }
            _ => match kind.block_expr() {
                Some(expr) => add_domain_to_set(&mut block, expr),
                None => continue,
            },
        };

        if !extracted {
            dropped += 1;
        }
    }

    debug!(
        block = block.len(),
        exception = exception.len(),
        dropped,
        "rules parsed"
    );

    DomainSets { block, exception }
}
