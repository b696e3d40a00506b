// ============================================================================
// TransX - 错误类型
// ============================================================================
//
// 文件: src/error.rs
// 职责: 翻译引擎统一错误类型定义
// 边界:
//   - ✅ 错误分类定义
//   - ✅ 错误信息格式化
//   - ✅ 致命/可恢复错误判定
//   - ❌ 不应包含错误输出逻辑
//   - ❌ 不应包含重试逻辑
//
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// 翻译引擎错误
#[derive(Debug, Error)]
pub enum TransxError {
    /// 翻译源目录不存在
    #[error("translation source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// 翻译文件内容无法解析为键值映射
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// 文件读写失败
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 翻译文件序列化失败
    #[error("failed to serialize {}: {message}", path.display())]
    Serialize { path: PathBuf, message: String },

    /// 同一 (locale, bundle) 对应多个翻译文件
    #[error("duplicate bundle [{locale}] {bundle}: {} and {}", first.display(), second.display())]
    DuplicateBundle {
        locale: String,
        bundle: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// 不支持的翻译文件格式
    #[error("unsupported bundle format: {0} (expected json, yaml or toml)")]
    UnsupportedFormat(String),

    /// 读取操作员输入失败
    #[error("failed to read operator input: {0}")]
    Input(#[source] std::io::Error),

    /// 缺失矩阵与存储不一致（内部错误）
    #[error("no locale provides a value for {bundle}.{key} missing in [{locale}]")]
    Inconsistent {
        locale: String,
        bundle: String,
        key: String,
    },
}

impl TransxError {
    /// 构造 I/O 错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 构造解析错误
    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// 是否为内部一致性错误
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Inconsistent { .. })
    }
}

pub type Result<T> = std::result::Result<T, TransxError>;
