//! # 域名模块
//!
//! 1. `DomainSet`：去重、有序的域名集合
//! 2. `SuffixTable`：公共后缀表（如 `com`、`co.uk`）
//! 3. 精简：把候选主机名缩减为可注册域名，丢弃无效条目

mod reducer;
mod set;
pub mod suffix;

pub use reducer::reduce;
pub use set::{DomainSet, DomainSets};
pub use suffix::SuffixTable;
