//! # gfwlist2privoxy
//!
//! 把 gfwlist 转换为 privoxy 的 action 文件。
//!
//! ## 流程
//! - 获取 gfwlist（本地文件或远程 URL，默认官方地址）
//! - 如有必要做 base64 解码
//! - 逐行解析规则，提取主机名
//! - 用公共后缀表把主机名精简为可注册域名
//! - 填入模板，写出 action 文件
//!
//! ## 使用
//! ```bash
//! # 使用官方 gfwlist，走本地 SOCKS5 代理
//! gfwlist2privoxy -p 127.0.0.1:1080 -t socks5
//!
//! # 本地 gfwlist + 用户规则，输出到 privoxy 配置目录
//! gfwlist2privoxy -i gfwlist.txt --user-rule user-rule.txt \
//!     -p 127.0.0.1:8118 -t http \
//!     -f /etc/privoxy/gfwlist.action -w /etc/privoxy/white.action
//!
//! # 以 JSON 输出运行报告
//! gfwlist2privoxy -p 127.0.0.1:1080 -t socks5 --json
//! ```

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

mod action;
mod decode;
mod domain;
mod error;
mod fetch;
mod logging;
mod pipeline;
mod rule;

use action::ProxyType;
use fetch::Source;

// ========================================
// CLI 参数定义
// ========================================

/// 把 gfwlist 转换为 privoxy action 文件
#[derive(Parser, Debug)]
#[command(name = "gfwlist2privoxy")]
#[command(version)]
#[command(about = "Convert gfwlist into a privoxy action file")]
struct Cli {
    /// gfwlist 的本地路径或远程 URL，不指定则使用官方地址
    #[arg(short, long, value_name = "GFWLIST")]
    input: Option<String>,

    /// 输出的 action 文件路径
    #[arg(short = 'f', long = "file", value_name = "ACTION", default_value = "gfwlist.action")]
    output: PathBuf,

    /// action 文件中的代理地址，例如 "127.0.0.1:1080"
    #[arg(short, long, value_name = "PROXY")]
    proxy: String,

    /// 代理类型
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    proxy_type: ProxyType,

    /// 用户规则文件，追加在 gfwlist 之后
    #[arg(long, value_name = "PATH")]
    user_rule: Option<PathBuf>,

    /// 输出的例外 action 文件路径（仅在存在例外规则时写出）
    #[arg(short = 'w', long = "white-file", value_name = "ACTION", default_value = "white.action")]
    white_output: PathBuf,

    /// 以 JSON 格式输出运行报告
    #[arg(long)]
    json: bool,

    /// 详细日志（-v 调试，-vv 跟踪）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// 只输出错误
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

// ========================================
// 主函数
// ========================================

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let opts = pipeline::Options {
        source: Source::from_input(cli.input.as_deref()),
        user_rule: cli.user_rule,
        output: cli.output,
        white_output: cli.white_output,
        proxy: cli.proxy,
        proxy_type: cli.proxy_type,
    };

    let report = pipeline::run(&opts)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
