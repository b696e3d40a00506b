// ============================================================================
// TransX - 翻译存储
// ============================================================================
//
// 文件: src/core/store.rs
// 职责: 内存中的翻译存储和缺失键矩阵计算
// 边界:
//   - ✅ 翻译文件过滤和解析入库
//   - ✅ 语言区域列表维护
//   - ✅ 缺失键矩阵计算
//   - ✅ 翻译值读取 / 写入
//   - ❌ 不应包含文件系统遍历
//   - ❌ 不应包含翻译文件写回
//   - ❌ 不应包含用户交互
//
// 算法设计:
//   对每个 (locale, bundle) 的每个 key，检查所有其他语言区域的同名 bundle，
//   缺少该 key（或整个 bundle 不存在）即记入缺失矩阵。矩阵使用有序集合，
//   同一 key 被多个语言区域同时“证明”缺失时天然去重。
//
// ============================================================================

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::core::discovery::BundleSource;
use crate::error::{Result, TransxError};
use crate::models::translation::{Bundle, BundleFormat, TranslationValue};

/// locale → bundle → 翻译包
pub type Translations = BTreeMap<String, BTreeMap<String, Bundle>>;

/// locale → bundle → 缺失键集合
pub type MissingMatrix = BTreeMap<String, BTreeMap<String, BTreeSet<String>>>;

/// locale → bundle → 来源文件相对路径
type Origins = BTreeMap<String, BTreeMap<String, PathBuf>>;

/// 翻译存储
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    format: BundleFormat,
    source: Translations,
    origins: Origins,
    locales: Vec<String>,
    default_locale: Option<String>,
    missing: MissingMatrix,
}

impl TranslationStore {
    /// 创建空存储
    pub fn new(format: BundleFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// 从翻译文件列表构建存储
    pub fn load<S: BundleSource>(files: &[S], format: BundleFormat) -> Result<Self> {
        let mut store = Self::new(format);
        store.reload(files)?;
        Ok(store)
    }

    /// 重新载入翻译文件，替换全部内容
    ///
    /// 只解析扩展名符合当前格式的文件，其他文件静默跳过。
    /// 同一 (locale, bundle) 出现多个文件（如 `.yaml` 和 `.yml`）时报错。
    /// 任一文件解析失败时存储保持原状。
    pub fn reload<S: BundleSource>(&mut self, files: &[S]) -> Result<()> {
        let mut source = Translations::new();
        let mut origins = Origins::new();

        for file in files {
            let recognized = file
                .extension()
                .map(|ext| self.format.recognizes(ext))
                .unwrap_or(false);

            if !recognized {
                trace!("skipping {}", file.relative_path().display());
                continue;
            }

            let seen = origins.entry(file.locale().to_string()).or_default();
            if let Some(first) = seen.get(file.bundle()) {
                return Err(TransxError::DuplicateBundle {
                    locale: file.locale().to_string(),
                    bundle: file.bundle().to_string(),
                    first: first.clone(),
                    second: file.relative_path().to_path_buf(),
                });
            }
            seen.insert(
                file.bundle().to_string(),
                file.relative_path().to_path_buf(),
            );

            let entries = file.read_entries(self.format)?;
            debug!(
                "loaded {} keys from {}",
                entries.len(),
                file.relative_path().display()
            );

            source
                .entry(file.locale().to_string())
                .or_default()
                .insert(file.bundle().to_string(), entries);
        }

        self.source = source;
        self.origins = origins;
        self.locales = self.source.keys().cloned().collect();
        self.recompute();
        Ok(())
    }

    /// 从已有内容构建存储（主要用于测试和程序化使用）
    pub fn from_translations(source: Translations, format: BundleFormat) -> Self {
        let mut store = Self::new(format);
        store.locales = source.keys().cloned().collect();
        store.source = source;
        store.recompute();
        store
    }

    /// 重新计算缺失键矩阵
    pub fn recompute(&mut self) {
        let mut missing = MissingMatrix::new();

        for locale_bundles in self.source.values() {
            for (bundle, entries) in locale_bundles {
                for key in entries.keys() {
                    for (other_locale, other_bundles) in &self.source {
                        let present = other_bundles
                            .get(bundle)
                            .map(|other| other.contains_key(key))
                            .unwrap_or(false);

                        if !present {
                            missing
                                .entry(other_locale.clone())
                                .or_default()
                                .entry(bundle.clone())
                                .or_default()
                                .insert(key.clone());
                        }
                    }
                }
            }
        }

        debug!(
            "{} missing entries across {} locales",
            count_entries(&missing),
            missing.len()
        );
        self.missing = missing;
    }

    /// 读取翻译值，任一层级不存在时返回 None
    pub fn get(&self, locale: &str, bundle: &str, key: &str) -> Option<&TranslationValue> {
        self.source.get(locale)?.get(bundle)?.get(key)
    }

    /// 写入翻译值，必要时创建 (locale, bundle)
    ///
    /// 不会更新缺失矩阵；需要同步时调用 [`Self::mark_resolved`] 或 [`Self::recompute`]。
    pub fn put(
        &mut self,
        locale: &str,
        bundle: &str,
        key: &str,
        value: impl Into<TranslationValue>,
    ) {
        if !self.source.contains_key(locale) {
            self.locales.push(locale.to_string());
            self.locales.sort();
        }

        self.source
            .entry(locale.to_string())
            .or_default()
            .entry(bundle.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    /// 从缺失矩阵中移除一个已补全的键，返回该键此前是否在矩阵中
    pub fn mark_resolved(&mut self, locale: &str, bundle: &str, key: &str) -> bool {
        let Some(bundles) = self.missing.get_mut(locale) else {
            return false;
        };
        let Some(keys) = bundles.get_mut(bundle) else {
            return false;
        };

        let removed = keys.remove(key);
        if keys.is_empty() {
            bundles.remove(bundle);
        }
        if bundles.is_empty() {
            self.missing.remove(locale);
        }
        removed
    }

    /// 所有语言区域（字典序，与发现顺序一致）
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// 缺失键矩阵快照
    pub fn missing(&self) -> &MissingMatrix {
        &self.missing
    }

    /// 缺失条目总数
    pub fn missing_count(&self) -> usize {
        count_entries(&self.missing)
    }

    /// 翻译包总数（按 locale × bundle 计）
    pub fn bundle_count(&self) -> usize {
        self.source.values().map(BTreeMap::len).sum()
    }

    /// 翻译包的来源文件（相对翻译根目录）；由 put 新建的翻译包返回 None
    pub fn bundle_origin(&self, locale: &str, bundle: &str) -> Option<&Path> {
        self.origins.get(locale)?.get(bundle).map(PathBuf::as_path)
    }

    /// 全部翻译内容（用于写回）
    pub fn export(&self) -> &Translations {
        &self.source
    }

    pub fn format(&self) -> BundleFormat {
        self.format
    }

    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    pub fn set_default_locale(&mut self, locale: Option<String>) {
        self.default_locale = locale;
    }
}

fn count_entries(missing: &MissingMatrix) -> usize {
    missing
        .values()
        .flat_map(BTreeMap::values)
        .map(BTreeSet::len)
        .sum()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// 内存中的翻译文件
    pub(crate) struct MemoryFile {
        pub path: PathBuf,
        pub locale: String,
        pub bundle: String,
        pub content: String,
    }

    impl MemoryFile {
        pub(crate) fn new(relative: &str, content: &str) -> Self {
            let path = PathBuf::from(relative);
            let locale = path.parent().unwrap().to_string_lossy().into_owned();
            let bundle = path.file_stem().unwrap().to_string_lossy().into_owned();
            Self {
                path,
                locale,
                bundle,
                content: content.to_string(),
            }
        }
    }

    impl BundleSource for MemoryFile {
        fn relative_path(&self) -> &Path {
            &self.path
        }

        fn locale(&self) -> &str {
            &self.locale
        }

        fn bundle(&self) -> &str {
            &self.bundle
        }

        fn extension(&self) -> Option<&str> {
            self.path.extension().and_then(|ext| ext.to_str())
        }

        fn read_entries(&self, format: BundleFormat) -> Result<Bundle> {
            format.parse(&self.content, &self.path)
        }
    }

    pub(crate) fn store(files: &[(&str, &str)]) -> TranslationStore {
        let files: Vec<MemoryFile> = files
            .iter()
            .map(|(path, content)| MemoryFile::new(path, content))
            .collect();
        TranslationStore::load(&files, BundleFormat::Json).unwrap()
    }

    fn keys(store: &TranslationStore, locale: &str, bundle: &str) -> Vec<String> {
        store
            .missing()
            .get(locale)
            .and_then(|bundles| bundles.get(bundle))
            .map(|keys| keys.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_single_missing_key() {
        let store = store(&[
            ("en/messages.json", r#"{"hello": "Hello"}"#),
            ("fr/messages.json", "{}"),
        ]);

        assert_eq!(store.locales(), &["en".to_string(), "fr".to_string()]);
        assert_eq!(store.missing().len(), 1);
        assert_eq!(keys(&store, "fr", "messages"), vec!["hello"]);
    }

    #[test]
    fn test_union_of_keys_across_locales() {
        let store = store(&[
            ("de/app.json", r#"{"a": "A", "c": "C"}"#),
            ("en/app.json", r#"{"a": "A", "b": "B"}"#),
            ("fr/app.json", r#"{"b": "B", "c": "C"}"#),
        ]);

        assert_eq!(keys(&store, "de", "app"), vec!["b"]);
        assert_eq!(keys(&store, "en", "app"), vec!["c"]);
        assert_eq!(keys(&store, "fr", "app"), vec!["a"]);
    }

    #[test]
    fn test_missing_bundle_reports_all_keys() {
        let store = store(&[
            ("en/auth.json", r#"{"login": "Log in", "logout": "Log out"}"#),
            ("en/messages.json", r#"{"hello": "Hello"}"#),
            ("fr/messages.json", r#"{"hello": "Bonjour"}"#),
        ]);

        assert_eq!(keys(&store, "fr", "auth"), vec!["login", "logout"]);
        assert!(store.missing().get("en").is_none());
        assert_eq!(store.missing_count(), 2);
    }

    #[test]
    fn test_missing_is_deduplicated() {
        let store = store(&[
            ("de/app.json", r#"{"title": "Titel"}"#),
            ("en/app.json", r#"{"title": "Title"}"#),
            ("es/app.json", r#"{"title": "Título"}"#),
            ("fr/app.json", "{}"),
        ]);

        assert_eq!(keys(&store, "fr", "app"), vec!["title"]);
        assert_eq!(store.missing_count(), 1);
    }

    #[test]
    fn test_no_false_positives() {
        let store = store(&[
            ("de/app.json", r#"{"a": "A"}"#),
            ("en/app.json", r#"{"a": "A", "b": "B"}"#),
            ("en/extra.json", r#"{"x": "X"}"#),
            ("fr/extra.json", r#"{"y": "Y"}"#),
        ]);

        for (locale, bundles) in store.missing() {
            for (bundle, keys) in bundles {
                for key in keys {
                    assert!(store.get(locale, bundle, key).is_none());
                    assert!(store
                        .locales()
                        .iter()
                        .any(|other| other != locale && store.get(other, bundle, key).is_some()));
                }
            }
        }
    }

    #[test]
    fn test_identical_key_sets_have_no_missing() {
        let store = store(&[
            ("en/app.json", r#"{"a": "A", "b": "B"}"#),
            ("fr/app.json", r#"{"a": "A", "b": "B"}"#),
        ]);
        assert!(store.missing().is_empty());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut store = store(&[
            ("en/app.json", r#"{"a": "A", "b": "B"}"#),
            ("fr/app.json", r#"{"a": "A"}"#),
        ]);
        let first = store.missing().clone();
        store.recompute();
        assert_eq!(store.missing(), &first);
    }

    #[test]
    fn test_unrecognized_files_are_skipped() {
        let store = store(&[
            ("en/app.json", r#"{"a": "A"}"#),
            ("en/notes.txt", "not a bundle"),
            ("fr/app.php", "<?php return [];"),
        ]);
        assert_eq!(store.locales(), &["en".to_string()]);
        assert_eq!(store.bundle_count(), 1);
    }

    #[test]
    fn test_parse_error_names_path() {
        let files = vec![MemoryFile::new("en/app.json", "{ broken")];
        let err = TranslationStore::load(&files, BundleFormat::Json).unwrap_err();
        match err {
            TransxError::Parse { path, .. } => assert_eq!(path, Path::new("en/app.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_bundle_files_are_rejected() {
        let files = vec![
            MemoryFile::new("fr/messages.yaml", "hello: Bonjour\n"),
            MemoryFile::new("fr/messages.yml", "hello: Salut\n"),
        ];
        let err = TranslationStore::load(&files, BundleFormat::Yaml).unwrap_err();
        match err {
            TransxError::DuplicateBundle {
                locale,
                bundle,
                first,
                second,
            } => {
                assert_eq!((locale.as_str(), bundle.as_str()), ("fr", "messages"));
                assert_eq!(first, Path::new("fr/messages.yaml"));
                assert_eq!(second, Path::new("fr/messages.yml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bundle_origin_tracks_source_file() {
        let files = vec![MemoryFile::new("en/messages.yml", "hello: Hello\n")];
        let mut store = TranslationStore::load(&files, BundleFormat::Yaml).unwrap();
        store.put("fr", "messages", "hello", "Bonjour");

        assert_eq!(
            store.bundle_origin("en", "messages"),
            Some(Path::new("en/messages.yml"))
        );
        assert!(store.bundle_origin("fr", "messages").is_none());
    }

    #[test]
    fn test_get_requires_every_level() {
        let store = store(&[("en/app.json", r#"{"a": "A"}"#)]);
        assert_eq!(store.get("en", "app", "a").and_then(|v| v.as_text()), Some("A"));
        assert!(store.get("fr", "app", "a").is_none());
        assert!(store.get("en", "other", "a").is_none());
        assert!(store.get("en", "app", "b").is_none());
    }

    #[test]
    fn test_put_then_get() {
        let mut store = store(&[("en/app.json", r#"{"a": "A"}"#), ("fr/app.json", "{}")]);

        store.put("fr", "app", "a", "À");
        assert_eq!(store.get("fr", "app", "a").and_then(|v| v.as_text()), Some("À"));

        // put 不会自动同步缺失矩阵
        assert_eq!(keys(&store, "fr", "app"), vec!["a"]);
        store.recompute();
        assert!(store.missing().is_empty());
    }

    #[test]
    fn test_put_creates_locale_and_bundle() {
        let mut store = store(&[("en/app.json", r#"{"a": "A"}"#)]);
        store.put("pt", "app", "a", "A");

        assert_eq!(store.locales(), &["en".to_string(), "pt".to_string()]);
        assert!(store.get("pt", "app", "a").is_some());
        assert_eq!(store.bundle_count(), 2);
    }

    #[test]
    fn test_mark_resolved_prunes_empty_levels() {
        let mut store = store(&[
            ("en/app.json", r#"{"a": "A", "b": "B"}"#),
            ("fr/app.json", "{}"),
        ]);

        assert!(store.mark_resolved("fr", "app", "a"));
        assert_eq!(keys(&store, "fr", "app"), vec!["b"]);
        assert!(!store.mark_resolved("fr", "app", "a"));

        assert!(store.mark_resolved("fr", "app", "b"));
        assert!(store.missing().is_empty());
    }
}
