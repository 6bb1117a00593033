//! # 域名集合

use std::collections::BTreeSet;

/// 小写、去重的域名集合
///
/// 使用 BTreeSet 保证输出顺序稳定，相同输入两次运行得到相同的 action 文件。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainSet {
    inner: BTreeSet<String>,
}

impl DomainSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入域名，返回是否为新条目
    pub fn insert(&mut self, domain: impl Into<String>) -> bool {
        self.inner.insert(domain.into())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.inner.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for DomainSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// 封锁集合 + 例外集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainSets {
    /// 走代理的域名
    pub block: DomainSet,
    /// 例外（直连）域名，只来自用户规则
    pub exception: DomainSet,
}
