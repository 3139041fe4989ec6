//! 桶哈希微基准测试入口
//!
//! 报告输出到标准输出，日志输出到标准错误 (`RUST_LOG` 控制级别，默认 info)。
//! 退出码：0 全部成功，1 致命错误，2 部分组合被跳过。

use std::process::ExitCode;

use bucket_hash_bench::{log_error, log_warn, run_default};

// 初始化日志记录器
#[cfg(feature = "logging")]
fn init_logger() {
    use env_logger::{Builder, Env};
    use std::io::Write;

    let env = Env::default()
        .filter_or("RUST_LOG", "info")
        .write_style_or("RUST_LOG_STYLE", "auto");

    Builder::from_env(env)
        .format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level(), record.args())
        })
        .init();
}

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    init_logger();

    match run_default() {
        Ok(report) => {
            print!("{}", report.summary());
            if report.failures().is_empty() {
                ExitCode::SUCCESS
            } else {
                log_warn!("{} 个组合被跳过", report.failures().len());
                ExitCode::from(2)
            }
        }
        Err(e) => {
            log_error!("基准测试中止: {}", e);
            eprintln!("错误: {}", e);
            if let Some(hint) = e.recovery_suggestion() {
                eprintln!("建议: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}
