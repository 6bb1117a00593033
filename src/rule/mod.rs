//! # 规则解析模块
//!
//! 此模块负责：
//! 1. 按语法给 gfwlist 的每一行分类（注释、段落头、例外、锚点……）
//! 2. 从规则行中提取主机名
//! 3. 生成待精简的封锁集合和例外集合

mod host;
mod kind;
mod parser;

pub use parser::parse;
