// ============================================================================
// TransX - 翻译数据模型
// ============================================================================
//
// 文件: src/models/translation.rs
// 职责: 翻译值与翻译文件格式定义
// 边界:
//   - ✅ 翻译值类型定义（文本 / 不支持的结构化值）
//   - ✅ 翻译文件格式枚举
//   - ✅ 翻译文件内容解析与序列化
//   - ❌ 不应包含文件系统操作
//   - ❌ 不应包含缺失键计算逻辑
//   - ❌ 不应包含用户交互
//
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, TransxError};

/// 单个翻译值
///
/// 只有纯文本可以交互式编辑；数组、嵌套对象、数字等原样保留，
/// 保存时写回，不做任何改动。
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationValue {
    /// 纯文本翻译
    Text(String),
    /// 不支持编辑的结构化值
    Unsupported(Value),
}

impl TranslationValue {
    /// 获取文本内容
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationValue::Text(text) => Some(text),
            TranslationValue::Unsupported(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, TranslationValue::Text(_))
    }

    /// 转换为 JSON 值（用于序列化）
    pub fn to_json(&self) -> Value {
        match self {
            TranslationValue::Text(text) => Value::String(text.clone()),
            TranslationValue::Unsupported(raw) => raw.clone(),
        }
    }
}

impl From<Value> for TranslationValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => TranslationValue::Text(text),
            other => TranslationValue::Unsupported(other),
        }
    }
}

impl From<&str> for TranslationValue {
    fn from(text: &str) -> Self {
        TranslationValue::Text(text.to_string())
    }
}

impl From<String> for TranslationValue {
    fn from(text: String) -> Self {
        TranslationValue::Text(text)
    }
}

impl fmt::Display for TranslationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationValue::Text(text) => write!(f, "{}", text),
            TranslationValue::Unsupported(raw) => write!(f, "{}", raw),
        }
    }
}

/// 一个翻译包的键值映射
pub type Bundle = BTreeMap<String, TranslationValue>;

/// 翻译文件格式
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BundleFormat {
    /// JSON 文件 (.json)
    #[default]
    Json,
    /// YAML 文件 (.yaml / .yml)
    Yaml,
    /// TOML 文件 (.toml)
    Toml,
}

impl BundleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleFormat::Json => "json",
            BundleFormat::Yaml => "yaml",
            BundleFormat::Toml => "toml",
        }
    }

    /// 保存时使用的扩展名
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// 是否识别该扩展名
    pub fn recognizes(&self, extension: &str) -> bool {
        let extension = extension.to_ascii_lowercase();
        match self {
            BundleFormat::Json => extension == "json",
            BundleFormat::Yaml => extension == "yaml" || extension == "yml",
            BundleFormat::Toml => extension == "toml",
        }
    }

    /// 解析翻译文件内容
    ///
    /// 文件根节点必须是键值映射；空文档视为空映射。
    pub fn parse(&self, content: &str, path: &Path) -> Result<Bundle> {
        if content.trim().is_empty() {
            return Ok(Bundle::new());
        }

        let root: Value = match self {
            BundleFormat::Json => {
                serde_json::from_str(content).map_err(|e| TransxError::parse(path, e))?
            }
            BundleFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| TransxError::parse(path, e))?
            }
            BundleFormat::Toml => {
                toml::from_str(content).map_err(|e| TransxError::parse(path, e))?
            }
        };

        match root {
            Value::Object(entries) => Ok(entries
                .into_iter()
                .map(|(key, value)| (key, TranslationValue::from(value)))
                .collect()),
            Value::Null => Ok(Bundle::new()),
            _ => Err(TransxError::parse(path, "root is not a key-value mapping")),
        }
    }

    /// 序列化翻译包
    pub fn serialize(&self, bundle: &Bundle, path: &Path) -> Result<String> {
        let root = Value::Object(
            bundle
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect::<Map<String, Value>>(),
        );

        let to_error = |message: String| TransxError::Serialize {
            path: path.to_path_buf(),
            message,
        };

        match self {
            BundleFormat::Json => serde_json::to_string_pretty(&root)
                .map(|text| text + "\n")
                .map_err(|e| to_error(e.to_string())),
            BundleFormat::Yaml => serde_yaml::to_string(&root).map_err(|e| to_error(e.to_string())),
            BundleFormat::Toml => {
                toml::to_string_pretty(&root).map_err(|e| to_error(e.to_string()))
            }
        }
    }
}

impl FromStr for BundleFormat {
    type Err = TransxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(BundleFormat::Json),
            "yaml" | "yml" => Ok(BundleFormat::Yaml),
            "toml" => Ok(BundleFormat::Toml),
            _ => Err(TransxError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for BundleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
