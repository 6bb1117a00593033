//! # 公共后缀表
//!
//! 每行一个后缀，如 `com`、`co.uk`。空行和 `//` 开头的注释行忽略。
//!
//! 内置表由 Public Suffix List（ICANN 与 PRIVATE 两部分）生成：
//! 去掉 `*.` 通配和 `!` 例外规则，国际化域名转为 punycode。
//!
//! ## 可注册域名
//! 从最右边的标签开始向左扩展后缀，只要扩展后的字符串仍在表中就继续；
//! 最后命中的后缀再向左多取一个标签，就是可注册域名：
//!
//! ```text
//! www.example.co.uk
//!   uk            ✓ 在表中
//!   co.uk         ✓ 在表中
//!   example.co.uk ✗ 不在表中 → 结果
//! ```
//!
//! 最右标签本身不在表中（裸 IP、单标签垃圾数据）直接判为无效。

use std::collections::HashSet;

const BUILTIN_TLDS: &str = include_str!("../../resources/tld.txt");

/// 公共后缀表，加载后只读
#[derive(Debug, Clone, Default)]
pub struct SuffixTable {
    suffixes: HashSet<String>,
}

impl SuffixTable {
    /// 加载内置后缀表
    pub fn builtin() -> Self {
        Self::from_list(BUILTIN_TLDS)
    }

    /// 从文本加载后缀表
    pub fn from_list(content: &str) -> Self {
        let suffixes = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("//"))
            .map(str::to_ascii_lowercase)
            .collect();
        Self { suffixes }
    }

    pub fn contains(&self, suffix: &str) -> bool {
        self.suffixes.contains(suffix)
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// 计算可注册域名
    ///
    /// 返回 `domain` 的一个后缀切片；无效域名或本身就是公共后缀时返回 `None`。
    pub fn registrable<'a>(&self, domain: &'a str) -> Option<&'a str> {
        if domain.is_empty() || domain.split('.').any(str::is_empty) {
            return None;
        }

        let candidates = suffix_candidates(domain);

        // 从最不具体的后缀开始，统计连续命中的个数
        let matched = candidates
            .iter()
            .rev()
            .take_while(|suffix| self.contains(suffix))
            .count();

        if matched == 0 || matched == candidates.len() {
            return None;
        }

        Some(candidates[candidates.len() - matched - 1])
    }
}

/// 域名的所有后缀，从最具体到最不具体
///
/// `www.example.co.uk` → `[www.example.co.uk, example.co.uk, co.uk, uk]`
fn suffix_candidates(domain: &str) -> Vec<&str> {
    std::iter::once(domain)
        .chain(domain.match_indices('.').map(|(i, _)| &domain[i + 1..]))
        .collect()
}
