// ============================================================================
// TransX - 初始化命令处理
// ============================================================================
//
// 文件: src/cli/init.rs
// 职责: 生成 transx.toml 并报告翻译根目录现状
// 边界:
//   - ✅ 配置模板生成（合并命令行指定的根目录 / 格式 / 默认语言区域）
//   - ✅ 已存在配置的覆盖保护
//   - ✅ 翻译根目录中已有语言区域的探测
//   - ❌ 不应包含配置文件格式定义
//   - ❌ 不应解析翻译文件内容
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::core::discovery::LangDirectory;
use crate::models::config::{Config, RuntimeArgs, CONFIG_FILE_NAME};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 初始化命令参数
#[derive(Debug, Args)]
pub struct InitArgs {
    /// 配置文件路径
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// 强制覆盖已存在的配置文件
    #[arg(short, long)]
    pub force: bool,
}

pub fn handle_init(args: InitArgs) -> Result<()> {
    Logger::info(t!("init.start"));

    if args.config.exists() && !args.force {
        Logger::warn(tf!("init.config_exists", args.config.display()));
        Logger::info(t!("init.use_force_hint"));
        return Ok(());
    }

    let config = resolved_template();
    if let Err(e) = config.save_to_file(&args.config) {
        Logger::error(tf!("init.create_failed", e));
        return Err(e);
    }

    Logger::success(tf!("init.config_created", args.config.display()));
    report_source(&config);
    Logger::info(t!("init.next_steps"));
    Ok(())
}

/// 默认模板叠加当前生效的 -C / --format / --default-locale
fn resolved_template() -> Config {
    let mut config = Config::generate_default_template();
    config.apply_runtime_args(RuntimeArgs {
        source_root: Some(Config::get_source_root().display().to_string()),
        format: Some(Config::get_bundle_format()),
        default_locale: Config::get_default_locale(),
        ..RuntimeArgs::default()
    });
    config
}

/// 根目录下已有当前格式翻译文件的语言区域；根目录不存在时返回 None
fn detect_locales(config: &Config) -> Option<Vec<String>> {
    let files = LangDirectory::new(&config.source.root)
        .with_ignore_patterns(&config.source.ignore)
        .discover()
        .ok()?;

    let locales: BTreeSet<String> = files
        .into_iter()
        .filter(|file| {
            file.extension
                .as_deref()
                .map(|ext| config.source.format.recognizes(ext))
                .unwrap_or(false)
        })
        .map(|file| file.locale)
        .collect();
    Some(locales.into_iter().collect())
}

fn report_source(config: &Config) {
    let source = &config.source;
    Logger::info(tf!("init.source", source.root, source.format));

    match detect_locales(config) {
        Some(locales) if !locales.is_empty() => {
            Logger::info(tf!("init.locales_found", locales.len(), locales.join(", ")))
        }
        Some(_) => Logger::warn(tf!("init.no_bundles", source.format, source.root)),
        None => Logger::warn(tf!("init.root_missing", source.root)),
    }
}
