// ============================================================================
// TransX - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 会话创建（读取配置）
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含缺失键计算
//
// ============================================================================

pub mod check;
pub mod init;
pub mod start;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::core::discovery::LangDirectory;
use crate::core::session::Session;
use crate::error::TransxError;
use crate::models::config::{Config, RuntimeArgs};
use crate::models::translation::BundleFormat;
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use crate::{t, tf};
use check::{handle_check, CheckArgs};
use init::{handle_init, InitArgs};
use start::{handle_start, StartArgs};

/// TransX - Interactive translation completeness tool
#[derive(Debug, Parser)]
#[command(name = "transx")]
#[command(about = "Find missing translation keys across locales and fill them in interactively")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Translation root directory (one sub-directory per locale)
    #[arg(short = 'C', long, global = true)]
    pub root: Option<String>,

    /// Translation file format (json, yaml, toml)
    #[arg(long, global = true)]
    pub format: Option<BundleFormat>,

    /// Default locale, shown in reports
    #[arg(long, global = true)]
    pub default_locale: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive translator
    Start(StartArgs),
    /// Report missing translations without prompting
    Check(CheckArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Build runtime args to override config
    let runtime_args = build_runtime_args(&cli);
    // Merge runtime args to global config
    Config::merge_runtime_args(runtime_args)?;

    Logger::init_tracing(Config::get_verbose());
    Colors::configure(Config::get_colored());

    match cli.command {
        Commands::Start(args) => handle_start(args),
        Commands::Check(args) => handle_check(args),
        Commands::Init(args) => handle_init(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        source_root: cli.root.clone(),
        format: cli.format,
        default_locale: cli.default_locale.clone(),
        language: cli.language.clone(),
    }
}

/// 根据全局配置建立翻译会话
pub(crate) fn open_session() -> Result<Session> {
    let root = Config::get_source_root();
    let format = Config::get_bundle_format();
    let ignore = Config::get_ignore_patterns().unwrap_or_default();

    Logger::info(tf!("start.loading", root.display()));

    let directory = LangDirectory::new(&root).with_ignore_patterns(&ignore);
    match Session::open(directory, format, Config::get_default_locale()) {
        Ok(session) => Ok(session),
        Err(TransxError::SourceNotFound(path)) => {
            anyhow::bail!(tf!("error.source_not_found", path.display()))
        }
        Err(e) => Err(e).context(t!("error.load_failed")),
    }
}
