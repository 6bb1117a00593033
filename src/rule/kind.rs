//! # 规则行分类
//!
//! 按优先级从高到低：
//! 1. 空行 → 跳过
//! 2. 含 `.*` → 不支持的通配模式，跳过
//! 3. 含 `*` → 全部替换为 `/` 后继续分类
//! 4. `!` 开头 → 注释
//! 5. `[` 开头 → 段落头（如 `[AutoProxy 0.2.9]`）
//! 6. `@` 开头 → 例外规则
//! 7. `||` 开头 → 域名锚点
//! 8. `|` 开头 → 精确锚点
//! 9. `.` 开头 → 等同域名锚点
//! 10. 其他 → 整行当作主机表达式

/// 一行规则的分类结果
///
/// 携带的字符串是去掉前缀标记后的主机表达式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    Blank,
    Wildcard,
    Comment,
    SectionHeader,
    /// `@@||example.com`，`@` 和随后的锚点标记都会去掉
    Exception(String),
    /// `||example.com`
    DomainAnchor(String),
    /// `|https://example.com/path`
    ExactAnchor(String),
    /// `.example.com`
    DotPrefixed(String),
    /// `example.com/path`
    Plain(String),
}

impl RuleKind {
    pub fn classify(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return RuleKind::Blank;
        }
        if line.contains(".*") {
            return RuleKind::Wildcard;
        }

        let line = line.replace('*', "/");

        if line.starts_with('!') {
            RuleKind::Comment
        } else if line.starts_with('[') {
            RuleKind::SectionHeader
        } else if line.starts_with('@') {
            let expr = line.trim_start_matches('@').trim_start_matches('|');
            RuleKind::Exception(expr.to_string())
        } else if line.starts_with("||") {
            RuleKind::DomainAnchor(line.trim_start_matches('|').to_string())
        } else if line.starts_with('|') {
            RuleKind::ExactAnchor(line.trim_start_matches('|').to_string())
        } else if line.starts_with('.') {
            RuleKind::DotPrefixed(line.trim_start_matches('.').to_string())
        } else {
            RuleKind::Plain(line)
        }
    }

    /// 应进入封锁集合的主机表达式
    pub fn block_expr(&self) -> Option<&str> {
        match self {
            RuleKind::DomainAnchor(expr)
            | RuleKind::ExactAnchor(expr)
            | RuleKind::DotPrefixed(expr)
            | RuleKind::Plain(expr) => Some(expr),
            _ => None,
        }
    }
}
