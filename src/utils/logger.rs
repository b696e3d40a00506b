// ============================================================================
// TransX - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 面向用户的输出和诊断日志初始化
// 边界:
//   - ✅ 用户提示格式化输出
//   - ✅ tracing 订阅器初始化
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件日志写入
//   - ❌ 不应包含日志内容生成
//
// ============================================================================

use tracing_subscriber::EnvFilter;

use super::colors::Colors;
use super::constants::APP_NAME;

/// 简单的日志工具
pub struct Logger;

impl Logger {
    /// 初始化诊断日志（输出到 stderr，RUST_LOG 优先）
    pub fn init_tracing(verbose: bool) {
        let default_level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("transx={}", default_level)));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// 日志前缀
    pub fn get_prefix(level: &str) -> String {
        let tag = format!("[{}]", APP_NAME);
        match level {
            "WARN" => Colors::warn("[WARN]"),
            "ERROR" => Colors::error("[ERROR]"),
            "SUCCESS" => Colors::success(&tag),
            _ => Colors::info(&tag),
        }
    }

    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("INFO"), msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("WARN"), msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", Self::get_prefix("ERROR"), msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("SUCCESS"), msg.as_ref());
    }
}
