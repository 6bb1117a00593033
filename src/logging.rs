//! # 日志初始化
//!
//! 日志统一写到 stderr，stdout 只留给 `--json` 报告。

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 根据命令行参数初始化日志
///
/// - `quiet`: 只输出错误
/// - `verbose`: 0 = INFO, 1 = DEBUG, 2+ = TRACE
///
/// 设置了 `RUST_LOG` 时以环境变量为准。
pub fn init(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose >= 2),
        )
        .init();
}
