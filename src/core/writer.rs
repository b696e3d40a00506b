// ============================================================================
// TransX - 翻译文件写回
// ============================================================================
//
// 文件: src/core/writer.rs
// 职责: 将内存中的翻译包写回磁盘
// 边界:
//   - ✅ 目标路径推导：写回来源文件，新建翻译包用 <root>/<locale>/<bundle>.<ext>
//   - ✅ 目录创建和文件覆盖写入
//   - ❌ 不应包含格式解析细节（由 BundleFormat 负责）
//   - ❌ 不应包含重新加载逻辑
//   - ❌ 不保证跨文件原子性
//
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::store::TranslationStore;
use crate::error::{Result, TransxError};
use crate::models::translation::BundleFormat;

/// 翻译包写入器
#[derive(Debug, Clone)]
pub struct BundleWriter {
    root: PathBuf,
    format: BundleFormat,
}

impl BundleWriter {
    pub fn new(root: impl Into<PathBuf>, format: BundleFormat) -> Self {
        Self {
            root: root.into(),
            format,
        }
    }

    /// 新建翻译包的目标路径
    pub fn bundle_path(&self, locale: &str, bundle: &str) -> PathBuf {
        self.root
            .join(locale)
            .join(format!("{}.{}", bundle, self.format.extension()))
    }

    /// 写入全部翻译包，返回写入的文件列表
    ///
    /// 从磁盘载入的翻译包写回原文件（保留 `.yml` 等扩展名），
    /// 每个文件独立写入，中途失败时已写入的文件不会回滚。
    pub fn save_all(&self, store: &TranslationStore) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        for (locale, bundles) in store.export() {
            for (bundle, entries) in bundles {
                let path = match store.bundle_origin(locale, bundle) {
                    Some(relative) => self.root.join(relative),
                    None => self.bundle_path(locale, bundle),
                };
                let content = self.format.serialize(entries, &path)?;
                write_file(&path, &content)?;
                debug!("wrote {} keys to {}", entries.len(), path.display());
                written.push(path);
            }
        }

        Ok(written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| TransxError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| TransxError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::discovery::LangDirectory;
    use crate::models::translation::TranslationValue;
    use serde_json::json;

    fn sample_store(format: BundleFormat) -> TranslationStore {
        let mut store = TranslationStore::new(format);
        store.put("en", "messages", "hello", "Hello");
        store.put(
            "en",
            "messages",
            "days",
            TranslationValue::Unsupported(json!(["Mon", "Tue"])),
        );
        store.put("fr", "messages", "hello", "Bonjour");
        store
    }

    #[test]
    fn test_bundle_path_layout() {
        let writer = BundleWriter::new("lang", BundleFormat::Yaml);
        assert_eq!(
            writer.bundle_path("pt_BR", "auth"),
            PathBuf::from("lang/pt_BR/auth.yaml")
        );
    }

    #[test]
    fn test_save_round_trips_through_discovery() {
        for format in [BundleFormat::Json, BundleFormat::Yaml, BundleFormat::Toml] {
            let dir = tempfile::tempdir().unwrap();
            let store = sample_store(format);

            let written = BundleWriter::new(dir.path(), format)
                .save_all(&store)
                .unwrap();
            assert_eq!(written.len(), 2);

            let files = LangDirectory::new(dir.path()).discover().unwrap();
            let reloaded = TranslationStore::load(&files, format).unwrap();
            assert_eq!(reloaded.export(), store.export(), "format {}", format);
        }
    }

    #[test]
    fn test_save_creates_new_locale_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TranslationStore::new(BundleFormat::Json);
        store.put("de", "app", "title", "Titel");

        BundleWriter::new(dir.path(), BundleFormat::Json)
            .save_all(&store)
            .unwrap();

        let content = fs::read_to_string(dir.path().join("de/app.json")).unwrap();
        assert!(content.contains("\"title\": \"Titel\""));
    }

    #[test]
    fn test_yml_bundle_is_written_back_in_place() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("en")).unwrap();
        fs::create_dir_all(dir.path().join("fr")).unwrap();
        fs::write(dir.path().join("en/messages.yml"), "hello: Hello\n").unwrap();
        fs::write(dir.path().join("fr/messages.yml"), "{}\n").unwrap();

        let files = LangDirectory::new(dir.path()).discover().unwrap();
        let mut store = TranslationStore::load(&files, BundleFormat::Yaml).unwrap();
        store.put("fr", "messages", "hello", "Bonjour");
        store.put("fr", "auth", "login", "Connexion");

        let written = BundleWriter::new(dir.path(), BundleFormat::Yaml)
            .save_all(&store)
            .unwrap();
        assert!(written.contains(&dir.path().join("fr/messages.yml")));
        assert!(written.contains(&dir.path().join("fr/auth.yaml")));
        assert!(!dir.path().join("fr/messages.yaml").exists());

        let files = LangDirectory::new(dir.path()).discover().unwrap();
        let reloaded = TranslationStore::load(&files, BundleFormat::Yaml).unwrap();
        assert_eq!(
            reloaded
                .get("fr", "messages", "hello")
                .and_then(|v| v.as_text()),
            Some("Bonjour")
        );
        assert_eq!(reloaded.export(), store.export());
    }
}
