//! # action 文件模板
//!
//! 模板是纯文本，包含三个占位符，按字面量替换：
//! - `__FORWARDER__`：转发指令
//! - `__DOMAINS__`：域名列表，每行一个 `.domain.tld`
//! - `__TIME__`：生成时间

use chrono::{DateTime, Local};

use crate::domain::DomainSet;
use crate::error::{Error, Result};

pub const FORWARDER: &str = "__FORWARDER__";
pub const DOMAINS: &str = "__DOMAINS__";
pub const TIME: &str = "__TIME__";

const GFWLIST_TEMPLATE: &str = include_str!("../../resources/gfwlist.action");
const WHITE_TEMPLATE: &str = include_str!("../../resources/white.action");

/// 一个 action 文件模板
#[derive(Debug, Clone, Copy)]
pub struct ActionTemplate<'a> {
    name: &'static str,
    content: &'a str,
}

impl<'a> ActionTemplate<'a> {
    /// 创建模板，缺少 `__DOMAINS__` 占位符视为不可用
    pub fn new(name: &'static str, content: &'a str) -> Result<Self> {
        if !content.contains(DOMAINS) {
            return Err(Error::Render(format!(
                "template {} has no {} placeholder",
                name, DOMAINS
            )));
        }
        Ok(Self { name, content })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn render(&self, forwarder: &str, domains: &DomainSet, time: &str) -> String {
        self.content
            .replace(FORWARDER, forwarder)
            .replace(DOMAINS, &format_domains(domains))
            .replace(TIME, time)
    }
}

/// 内置的封锁模板
pub fn gfwlist_template() -> Result<ActionTemplate<'static>> {
    ActionTemplate::new("gfwlist.action", GFWLIST_TEMPLATE)
}

/// 内置的例外模板
pub fn white_template() -> Result<ActionTemplate<'static>> {
    ActionTemplate::new("white.action", WHITE_TEMPLATE)
}

/// 每个域名一行，前面加 `.`
pub fn format_domains(domains: &DomainSet) -> String {
    domains.iter().map(|domain| format!(".{}\n", domain)).collect()
}

/// `YYYY-MM-DD HH:MM:SS ±HHMM`
pub fn timestamp(time: &DateTime<Local>) -> String {
    time.format("%Y-%m-%d %H:%M:%S %z").to_string()
}

// ========================================
// 测试模块
// ========================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_replaces_all_placeholders() {
        let template =
            ActionTemplate::new("test", "# __TIME__\n{+forward-override{__FORWARDER__}}\n__DOMAINS__")
                .unwrap();
        let domains: DomainSet = ["example.com", "example.org"].into_iter().collect();

        let rendered = template.render("forward 10.0.0.1:8080", &domains, "2024-01-02 03:04:05 +0800");
        assert_eq!(
            rendered,
            "# 2024-01-02 03:04:05 +0800\n{+forward-override{forward 10.0.0.1:8080}}\n.example.com\n.example.org\n"
        );
    }

    #[test]
    fn test_template_without_domains_is_rejected() {
        let err = ActionTemplate::new("broken", "{+forward-override{__FORWARDER__}}").unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn test_builtin_templates() {
        let gfwlist = gfwlist_template().unwrap();
        assert_eq!(gfwlist.name(), "gfwlist.action");

        let rendered = gfwlist.render("forward 1.1.1.1:80", &DomainSet::new(), "now");
        assert!(rendered.contains("{+forward-override{forward 1.1.1.1:80}}"));
        assert!(!rendered.contains("__"));

        let white = white_template().unwrap();
        let rendered = white.render("unused", &DomainSet::new(), "now");
        assert!(rendered.contains("{+forward-override{forward .}}"));
    }

    #[test]
    fn test_timestamp_format() {
        let time = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let formatted = timestamp(&time);

        assert!(formatted.starts_with("2024-01-02 03:04:05 "));
        let offset = &formatted["2024-01-02 03:04:05 ".len()..];
        assert_eq!(offset.len(), 5);
        assert!(offset.starts_with('+') || offset.starts_with('-'));
    }
}
