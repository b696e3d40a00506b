// ============================================================================
// TransX - CLI Check 命令
// ============================================================================
//
// 文件: src/cli/check.rs
// 职责: 非交互式翻译完整性检查
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用会话获取缺失统计
//   - ✅ 检查结果格式化输出（table / json）
//   - ✅ 退出码（存在缺失时为 1，便于 CI 使用）
//   - ❌ 不应包含缺失键计算
//   - ❌ 不应包含用户交互
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::cli::open_session;
use crate::ui::summary::{self, CheckReport};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 检查缺失的翻译
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// 输出格式 (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub output: String,

    /// 显示缺失键明细
    #[arg(short = 'd', long)]
    pub detail: bool,
}

pub fn handle_check(args: CheckArgs) -> Result<()> {
    if !matches!(args.output.as_str(), "table" | "json") {
        anyhow::bail!(tf!("error.invalid_format", args.output));
    }

    if args.output == "table" {
        Logger::info(t!("cli.check.start"));
    }

    let session = open_session()?;
    let summary = session.summarize();
    let default_locale = session.store().default_locale();

    match args.output.as_str() {
        "json" => {
            let report = CheckReport::new(&summary, session.worklist(), default_locale);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            if summary.is_complete() {
                Logger::success(t!("check.all_good"));
            } else {
                summary::print_locale_summary(&summary, default_locale);
                if args.detail {
                    summary::print_missing_details(session.worklist());
                }
                summary::print_totals(&summary);
            }
        }
    }

    if !summary.is_complete() {
        std::process::exit(1);
    }
    Ok(())
}
