// ============================================================================
// TransX - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置验证和默认值
//   - ✅ 配置文件读写操作
//   - ✅ CLI 运行时参数合并
//   - ❌ 不应包含配置应用逻辑
//   - ❌ 不应包含翻译文件扫描
//   - ❌ 不应包含 CLI 参数定义
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::models::translation::BundleFormat;

/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = "transx.toml";

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// TransX 配置文件结构
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// 翻译源配置
    #[serde(default)]
    pub source: SourceConfig,
    /// 语言区域配置
    #[serde(default)]
    pub locale: LocaleConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 界面国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 翻译源配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// 翻译文件根目录（每个子目录为一个语言区域）
    #[serde(default = "default_source_root")]
    pub root: String,
    /// 翻译文件格式
    #[serde(default)]
    pub format: BundleFormat,
    /// 排除扫描的目录或文件模式
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// 语言区域配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LocaleConfig {
    /// 默认语言区域（仅用于展示）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "default_true")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub source_root: Option<String>,
    pub format: Option<BundleFormat>,
    pub default_locale: Option<String>,
    pub language: Option<String>,
}

fn default_source_root() -> String {
    Config::default_source_root()
}

fn default_language() -> String {
    Config::default_language()
}

fn default_true() -> bool {
    true
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 获取默认翻译根目录
    fn default_source_root() -> String {
        "lang".to_string()
    }

    /// 获取默认忽略模式
    fn default_ignore_patterns() -> Vec<String> {
        vec![".git".to_string(), "*.bak".to_string()]
    }

    /// 获取默认是否详细输出
    fn default_verbose() -> bool {
        false
    }

    /// 获取默认是否彩色输出
    fn default_colored() -> bool {
        true
    }

    /// 获取默认语言
    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize() -> anyhow::Result<()> {
        let config = Self::load_config(Path::new(CONFIG_FILE_NAME))?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件
    pub fn load_config(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Self::from_toml_str(&content)
        } else {
            // 如果配置文件不存在，使用默认配置
            Ok(Self::default())
        }
    }

    /// 从 TOML 文本解析配置
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 合并运行时参数到全局配置
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        config.apply_runtime_args(args);
        Ok(())
    }

    /// 用运行时参数覆盖配置项
    pub fn apply_runtime_args(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(source_root) = args.source_root {
            self.source.root = source_root;
        }
        if let Some(format) = args.format {
            self.source.format = format;
        }
        if let Some(default_locale) = args.default_locale {
            self.locale.default = Some(default_locale);
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板
    pub fn generate_default_template() -> Self {
        let mut config = Self::default();
        config.locale.default = Some("en".to_string());
        config
    }

    /// 在读锁下访问全局配置
    fn read_global<T>(f: impl FnOnce(&Config) -> T) -> anyhow::Result<T> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(f(&config))
    }

    /// 获取翻译根目录（带默认值）
    pub fn get_source_root() -> PathBuf {
        let root = Self::read_global(|config| config.source.root.clone())
            .unwrap_or_else(|_| Self::default_source_root());
        PathBuf::from(root)
    }

    /// 获取翻译文件格式
    pub fn get_bundle_format() -> BundleFormat {
        Self::read_global(|config| config.source.format).unwrap_or_default()
    }

    /// 获取忽略模式列表
    pub fn get_ignore_patterns() -> anyhow::Result<Vec<String>> {
        Self::read_global(|config| config.source.ignore.clone())
    }

    /// 获取默认语言区域
    pub fn get_default_locale() -> Option<String> {
        Self::read_global(|config| config.locale.default.clone())
            .ok()
            .flatten()
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Self::read_global(|config| config.i18n.language.clone())
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        Self::read_global(|config| config.output.verbose).unwrap_or_else(|_| Self::default_verbose())
    }

    /// 获取是否彩色输出（带默认值）
    pub fn get_colored() -> bool {
        Self::read_global(|config| config.output.colored).unwrap_or_else(|_| Self::default_colored())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            locale: LocaleConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: Config::default_source_root(),
            format: BundleFormat::default(),
            ignore: Config::default_ignore_patterns(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}
