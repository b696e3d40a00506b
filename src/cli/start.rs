// ============================================================================
// TransX - CLI Start 命令
// ============================================================================
//
// 文件: src/cli/start.rs
// 职责: 交互式翻译主循环
// 边界:
//   - ✅ 主菜单循环（翻译 / 检查 / 保存 / 退出）
//   - ✅ 调用会话执行翻译和保存
//   - ✅ 结果提示输出
//   - ❌ 不应包含缺失键计算
//   - ❌ 不应包含文件读写逻辑
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;
use std::io::BufRead;

use crate::cli::open_session;
use crate::core::session::Session;
use crate::ui::prompt::{Action, TerminalPrompter};
use crate::ui::summary;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 启动交互式翻译
#[derive(Debug, Args)]
pub struct StartArgs {
    /// 检查时显示缺失键明细
    #[arg(short = 'd', long)]
    pub detail: bool,
}

/// 交互会话的结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// 检查时已没有缺失条目
    Complete,
    /// 操作员选择退出
    Exit,
    /// 菜单处输入结束
    EndOfInput,
}

pub fn handle_start(args: StartArgs) -> Result<()> {
    Logger::info(t!("cli.start.start"));

    let mut session = open_session()?;
    report_loaded(&session);

    let mut prompter = TerminalPrompter::stdin();
    run_menu(&mut session, &mut prompter, args.detail)?;
    Ok(())
}

/// 主菜单循环，启动时自动检查一次
pub fn run_menu<R: BufRead>(
    session: &mut Session,
    prompter: &mut TerminalPrompter<R>,
    detail: bool,
) -> Result<SessionEnd> {
    if !check(session, detail) {
        return Ok(SessionEnd::Complete);
    }

    loop {
        let Some(input) = prompter.ask_action()? else {
            Logger::info(t!("start.bye"));
            return Ok(SessionEnd::EndOfInput);
        };

        match Action::parse(&input) {
            Some(Action::Translate) => translate(session, prompter)?,
            Some(Action::Check) => {
                if !check(session, detail) {
                    return Ok(SessionEnd::Complete);
                }
            }
            Some(Action::Save) => save(session)?,
            Some(Action::Exit) => {
                Logger::info(t!("start.bye"));
                return Ok(SessionEnd::Exit);
            }
            None if input.is_empty() => {}
            None => Logger::warn(tf!("start.unknown_action", input)),
        }
    }
}

/// 输出加载结果
fn report_loaded(session: &Session) {
    let store = session.store();
    Logger::info(tf!(
        "start.loaded",
        store.bundle_count(),
        store.locales().len(),
        store.format()
    ));
    if let Some(locale) = store.default_locale() {
        Logger::info(tf!("start.default_locale", locale));
    }
}

/// 检查翻译状态；全部齐全时返回 false 表示结束会话
fn check(session: &Session, detail: bool) -> bool {
    let summary = session.summarize();
    if summary.is_complete() {
        Logger::success(t!("check.all_good"));
        return false;
    }

    summary::print_locale_summary(&summary, session.store().default_locale());
    if detail {
        summary::print_missing_details(session.worklist());
    }
    true
}

/// 执行一轮交互翻译
fn translate<R: BufRead>(
    session: &mut Session,
    prompter: &mut TerminalPrompter<R>,
) -> Result<()> {
    let stats = session.translate_pending(prompter)?;

    Logger::info("");
    if stats.interrupted {
        Logger::warn(t!("translate.interrupted"));
    } else {
        Logger::info(t!("translate.done"));
    }
    Logger::info(tf!(
        "translate.stats",
        stats.committed,
        stats.skipped,
        stats.unsupported
    ));
    Ok(())
}

/// 保存并刷新
fn save(session: &mut Session) -> Result<()> {
    Logger::info("");
    let written = session.save().context(t!("error.save_failed"))?;

    for path in &written {
        Logger::info(format!(
            "{} {}",
            icons::SAVE,
            tf!("save.file_saved", path.display())
        ));
    }
    Logger::success(tf!("save.completed", written.len()));
    Logger::info(tf!("save.refreshed", session.worklist().len()));
    Logger::info("");
    Ok(())
}
