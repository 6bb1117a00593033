//! # 域名精简
//!
//! - 封锁集合：每个域名替换为它的可注册域名（`www.google.com` → `google.com`），无效的丢弃
//! - 例外集合：只做有效性检查，保留原始域名
//!
//! 例外必须精确匹配。把 `direct.example.com` 精简成 `example.com`
//! 会让整个 `example.com` 都绕过代理。

use tracing::{debug, trace};

use super::set::{DomainSet, DomainSets};
use super::suffix::SuffixTable;

/// 精简封锁集合和例外集合
pub fn reduce(sets: &DomainSets, table: &SuffixTable) -> DomainSets {
    DomainSets {
        block: reduce_block(&sets.block, table),
        exception: reduce_exception(&sets.exception, table),
    }
}

/// 封锁集合：替换为可注册域名
pub fn reduce_block(domains: &DomainSet, table: &SuffixTable) -> DomainSet {
    let reduced: DomainSet = domains
        .iter()
        .filter_map(|domain| {
            let root = table.registrable(domain);
            if root.is_none() {
                trace!("drop invalid domain: {}", domain);
            }
            root
        })
        .collect();

    debug!(before = domains.len(), after = reduced.len(), "block domains reduced");
    reduced
}

/// 例外集合：有可注册形式的保留原样
pub fn reduce_exception(domains: &DomainSet, table: &SuffixTable) -> DomainSet {
    let kept: DomainSet = domains
        .iter()
        .filter(|domain| {
            let valid = table.registrable(domain).is_some();
            if !valid {
                trace!("drop invalid exception domain: {}", domain);
            }
            valid
        })
        .collect();

    debug!(before = domains.len(), after = kept.len(), "exception domains checked");
    kept
}
