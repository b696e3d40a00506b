// ============================================================================
// TransX - 翻译文件发现
// ============================================================================
//
// 文件: src/core/discovery.rs
// 职责: 扫描翻译根目录并枚举翻译文件
// 边界:
//   - ✅ 翻译根目录存在性检查
//   - ✅ 目录遍历和忽略模式过滤
//   - ✅ 语言区域 / 翻译包名推导
//   - ✅ 翻译文件内容读取
//   - ❌ 不应包含文件格式过滤（由存储负责）
//   - ❌ 不应包含缺失键计算
//   - ❌ 不应包含用户交互
//
// 约定:
//   <root>/<locale>/<bundle>.<ext>
//   locale 为文件所在目录相对 root 的路径，bundle 为去掉扩展名的文件名
//
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::{Result, TransxError};
use crate::models::translation::{Bundle, BundleFormat};

/// 翻译文件描述
///
/// 存储层只通过这个 trait 读取文件，测试中可以用内存实现替代。
pub trait BundleSource {
    /// 相对翻译根目录的路径
    fn relative_path(&self) -> &Path;
    /// 语言区域
    fn locale(&self) -> &str;
    /// 翻译包名
    fn bundle(&self) -> &str;
    /// 文件扩展名
    fn extension(&self) -> Option<&str>;
    /// 读取并解析键值内容
    fn read_entries(&self, format: BundleFormat) -> Result<Bundle>;
}

/// 磁盘上的翻译文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangFile {
    /// 绝对路径
    pub path: PathBuf,
    /// 相对路径
    pub relative_path: PathBuf,
    /// 语言区域
    pub locale: String,
    /// 翻译包名
    pub bundle: String,
    /// 扩展名
    pub extension: Option<String>,
}

impl LangFile {
    /// 根据相对路径构造；位于根目录下（没有语言区域）的文件返回 None
    fn from_relative(root: &Path, relative_path: &Path) -> Option<Self> {
        let locale = relative_path
            .parent()
            .map(|parent| {
                parent
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .filter(|locale| !locale.is_empty())?;

        let bundle = relative_path.file_stem()?.to_string_lossy().into_owned();
        let extension = relative_path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned());

        Some(Self {
            path: root.join(relative_path),
            relative_path: relative_path.to_path_buf(),
            locale,
            bundle,
            extension,
        })
    }
}

impl BundleSource for LangFile {
    fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    fn locale(&self) -> &str {
        &self.locale
    }

    fn bundle(&self) -> &str {
        &self.bundle
    }

    fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    fn read_entries(&self, format: BundleFormat) -> Result<Bundle> {
        let content = fs::read_to_string(&self.path).map_err(|e| TransxError::io(&self.path, e))?;
        format.parse(&content, &self.path)
    }
}

/// 翻译根目录
#[derive(Debug, Clone)]
pub struct LangDirectory {
    root: PathBuf,
    ignore: Vec<glob::Pattern>,
}

impl LangDirectory {
    /// 创建翻译根目录
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore: Vec::new(),
        }
    }

    /// 设置忽略模式（无效的 glob 模式会被跳过）
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Self {
        self.ignore = patterns
            .iter()
            .filter_map(|pattern| match glob::Pattern::new(pattern) {
                Ok(p) => Some(p),
                Err(e) => {
                    debug!("ignoring invalid pattern {}: {}", pattern, e);
                    None
                }
            })
            .collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 检查路径是否应该被忽略（任一路径片段或完整相对路径匹配即忽略）
    pub fn should_ignore(&self, relative_path: &Path) -> bool {
        let full = relative_path.to_string_lossy();
        self.ignore.iter().any(|pattern| {
            pattern.matches(&full)
                || relative_path
                    .components()
                    .any(|c| pattern.matches(&c.as_os_str().to_string_lossy()))
        })
    }

    /// 枚举所有翻译文件
    ///
    /// 按文件名排序遍历，保证发现顺序稳定。
    pub fn discover(&self) -> Result<Vec<LangFile>> {
        if !self.root.is_dir() {
            return Err(TransxError::SourceNotFound(self.root.clone()));
        }

        debug!("scanning translation root {}", self.root.display());

        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
                relative.as_os_str().is_empty() || !self.should_ignore(relative)
            });

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                TransxError::io(path, e.into())
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path());

            match LangFile::from_relative(&self.root, relative) {
                Some(file) => {
                    trace!("found {} ({}/{})", relative.display(), file.locale, file.bundle);
                    files.push(file);
                }
                None => debug!("skipping {} outside any locale", relative.display()),
            }
        }

        debug!("discovered {} files", files.len());
        Ok(files)
    }
}
