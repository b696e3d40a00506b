// ============================================================================
// TransX - 翻译补全会话
// ============================================================================
//
// 文件: src/core/session.rs
// 职责: 交互式补全缺失翻译的会话状态和流程
// 边界:
//   - ✅ 缺失矩阵展开为待办列表
//   - ✅ 各语言区域进度汇总
//   - ✅ 示例值查找和类型检查
//   - ✅ 操作员决策应用（采纳 / 跳过）
//   - ✅ 保存后整体刷新
//   - ❌ 不应包含终端输入输出（通过 Prompter 注入）
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含文件格式细节
//
// 条目状态:
//   Pending → {有示例值, Unsupported} → {Committed, 跳过}
//   Committed 与 Unsupported 在本次会话内不再变化；跳过的条目保持 Pending，
//   下一轮翻译时会再次出现。
//
// ============================================================================

use serde::Serialize;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use tracing::debug;

use crate::core::discovery::LangDirectory;
use crate::core::store::{MissingMatrix, TranslationStore};
use crate::core::writer::BundleWriter;
use crate::error::{Result, TransxError};
use crate::models::translation::{BundleFormat, TranslationValue};

/// 待办条目状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryState {
    /// 等待翻译
    Pending,
    /// 已翻译，尚未保存
    Committed,
    /// 示例值不是纯文本，无法交互编辑
    Unsupported,
}

/// 待办条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorklistEntry {
    pub locale: String,
    pub bundle: String,
    pub key: String,
    pub state: EntryState,
}

impl WorklistEntry {
    pub fn is_translated(&self) -> bool {
        self.state == EntryState::Committed
    }

    /// 显示名称 bundle.key
    pub fn name(&self) -> String {
        format!("{}.{}", self.bundle, self.key)
    }
}

/// 单个语言区域的进度
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSummary {
    pub locale: String,
    /// 缺失条目总数
    pub total: usize,
    /// 已翻译未保存的条目数
    pub unsaved: usize,
}

impl LocaleSummary {
    /// 尚未翻译的条目数
    pub fn outstanding(&self) -> usize {
        self.total - self.unsaved
    }

    pub fn is_complete(&self) -> bool {
        self.outstanding() == 0
    }
}

/// 待办列表汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorklistSummary {
    pub locales: Vec<LocaleSummary>,
}

impl WorklistSummary {
    /// 待办列表为空，即所有翻译齐全
    pub fn is_complete(&self) -> bool {
        self.locales.is_empty()
    }
}

/// 待办列表（会话开始时的快照）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worklist {
    entries: Vec<WorklistEntry>,
}

impl Worklist {
    /// 将缺失矩阵展开为待办列表（locale → bundle → key 顺序）
    pub fn flatten(missing: &MissingMatrix) -> Self {
        let entries = missing
            .iter()
            .flat_map(|(locale, bundles)| {
                bundles.iter().flat_map(move |(bundle, keys)| {
                    keys.iter().map(move |key| WorklistEntry {
                        locale: locale.clone(),
                        bundle: bundle.clone(),
                        key: key.clone(),
                        state: EntryState::Pending,
                    })
                })
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[WorklistEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&WorklistEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按语言区域汇总
    pub fn summarize(&self) -> WorklistSummary {
        let mut by_locale: BTreeMap<&str, LocaleSummary> = BTreeMap::new();

        for entry in &self.entries {
            let summary = by_locale
                .entry(entry.locale.as_str())
                .or_insert_with(|| LocaleSummary {
                    locale: entry.locale.clone(),
                    total: 0,
                    unsaved: 0,
                });
            summary.total += 1;
            if entry.is_translated() {
                summary.unsaved += 1;
            }
        }

        WorklistSummary {
            locales: by_locale.into_values().collect(),
        }
    }

    /// 每个语言区域的条目总数
    fn totals(&self) -> BTreeMap<String, usize> {
        let mut totals = BTreeMap::new();
        for entry in &self.entries {
            *totals.entry(entry.locale.clone()).or_insert(0) += 1;
        }
        totals
    }
}

/// 从其他语言区域找到的示例值
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub locale: String,
    pub value: TranslationValue,
}

/// 按语言区域顺序查找第一个拥有该键的示例值
pub fn resolve_sample(
    store: &TranslationStore,
    bundle: &str,
    key: &str,
    exclude_locale: &str,
) -> Option<Sample> {
    store
        .locales()
        .iter()
        .filter(|locale| locale.as_str() != exclude_locale)
        .find_map(|locale| {
            store.get(locale, bundle, key).map(|value| Sample {
                locale: locale.clone(),
                value: value.clone(),
            })
        })
}

/// 提供给操作员的示例
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Offer {
    /// 纯文本示例，可以交互翻译
    Text { locale: String, value: String },
    /// 示例值不是纯文本
    Unsupported { locale: String },
}

/// 操作员决策
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// 采纳译文（空白视为跳过）
    Accept(String),
    Skip,
}

/// 决策应用结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Committed,
    Skipped,
    /// 条目已是终态或不存在，未做任何修改
    Unchanged,
}

/// 一次翻译请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub locale: String,
    pub bundle: String,
    pub key: String,
    /// 在该语言区域条目中的位置（从 1 开始）
    pub position: usize,
    pub total: usize,
    pub sample_locale: String,
    pub sample_value: String,
}

impl TranslationRequest {
    pub fn name(&self) -> String {
        format!("{}.{}", self.bundle, self.key)
    }
}

/// 翻译过程中的通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassEvent {
    Unsupported {
        locale: String,
        name: String,
        position: usize,
        total: usize,
    },
    Committed,
    Skipped,
}

/// 操作员交互接口
pub trait Prompter {
    /// 请求译文；输入结束时返回 None
    fn ask(&mut self, request: &TranslationRequest) -> io::Result<Option<String>>;

    fn notify(&mut self, _event: &PassEvent) {}
}

/// 一轮翻译的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateStats {
    pub committed: usize,
    pub skipped: usize,
    pub unsupported: usize,
    /// 输入提前结束
    pub interrupted: bool,
}

/// 翻译补全会话
#[derive(Debug)]
pub struct Session {
    directory: LangDirectory,
    store: TranslationStore,
    worklist: Worklist,
}

impl Session {
    /// 扫描翻译目录并建立会话
    pub fn open(
        directory: LangDirectory,
        format: BundleFormat,
        default_locale: Option<String>,
    ) -> Result<Self> {
        let files = directory.discover()?;
        let mut store = TranslationStore::load(&files, format)?;
        store.set_default_locale(default_locale);
        Ok(Self::from_store(directory, store))
    }

    /// 使用已加载的存储建立会话
    pub fn from_store(directory: LangDirectory, store: TranslationStore) -> Self {
        let worklist = Worklist::flatten(store.missing());
        Self {
            directory,
            store,
            worklist,
        }
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn worklist(&self) -> &Worklist {
        &self.worklist
    }

    pub fn summarize(&self) -> WorklistSummary {
        self.worklist.summarize()
    }

    /// 为条目查找示例值并做类型检查
    pub fn offer(&self, index: usize) -> Result<Offer> {
        let entry = self
            .worklist
            .get(index)
            .ok_or_else(|| TransxError::Inconsistent {
                locale: String::new(),
                bundle: String::new(),
                key: format!("#{}", index),
            })?;

        let sample = resolve_sample(&self.store, &entry.bundle, &entry.key, &entry.locale)
            .ok_or_else(|| TransxError::Inconsistent {
                locale: entry.locale.clone(),
                bundle: entry.bundle.clone(),
                key: entry.key.clone(),
            })?;

        Ok(match sample.value {
            TranslationValue::Text(value) => Offer::Text {
                locale: sample.locale,
                value,
            },
            TranslationValue::Unsupported(_) => Offer::Unsupported {
                locale: sample.locale,
            },
        })
    }

    /// 应用操作员决策
    ///
    /// 示例值为结构化数据的条目会被标记为不支持，决策不生效。
    pub fn advance(&mut self, index: usize, decision: Decision) -> Advance {
        match self.worklist.get(index) {
            Some(entry) if entry.state == EntryState::Pending => {}
            _ => return Advance::Unchanged,
        }
        if let Ok(Offer::Unsupported { .. }) = self.offer(index) {
            self.mark_unsupported(index);
            return Advance::Unchanged;
        }

        let Some(entry) = self.worklist.entries.get_mut(index) else {
            return Advance::Unchanged;
        };
        let value = match decision {
            Decision::Accept(value) => value.trim().to_string(),
            Decision::Skip => return Advance::Skipped,
        };
        if value.is_empty() {
            return Advance::Skipped;
        }

        self.store.put(&entry.locale, &entry.bundle, &entry.key, value);
        self.store
            .mark_resolved(&entry.locale, &entry.bundle, &entry.key);
        entry.state = EntryState::Committed;
        debug!("committed {} for [{}]", entry.name(), entry.locale);
        Advance::Committed
    }

    /// 将条目标记为不支持编辑
    fn mark_unsupported(&mut self, index: usize) {
        if let Some(entry) = self.worklist.entries.get_mut(index) {
            if entry.state == EntryState::Pending {
                entry.state = EntryState::Unsupported;
            }
        }
    }

    /// 对全部待翻译条目执行一轮交互翻译
    pub fn translate_pending<P: Prompter + ?Sized>(
        &mut self,
        prompter: &mut P,
    ) -> Result<TranslateStats> {
        let totals = self.worklist.totals();
        let mut positions: BTreeMap<String, usize> = BTreeMap::new();
        let mut stats = TranslateStats::default();

        for index in 0..self.worklist.len() {
            let entry = self.worklist.entries[index].clone();
            let position = {
                let position = positions.entry(entry.locale.clone()).or_insert(0);
                *position += 1;
                *position
            };
            let total = totals.get(&entry.locale).copied().unwrap_or(0);

            if entry.state != EntryState::Pending {
                continue;
            }

            let (sample_locale, sample_value) = match self.offer(index)? {
                Offer::Text { locale, value } => (locale, value),
                Offer::Unsupported { .. } => {
                    self.mark_unsupported(index);
                    stats.unsupported += 1;
                    prompter.notify(&PassEvent::Unsupported {
                        locale: entry.locale.clone(),
                        name: entry.name(),
                        position,
                        total,
                    });
                    continue;
                }
            };

            let request = TranslationRequest {
                locale: entry.locale,
                bundle: entry.bundle,
                key: entry.key,
                position,
                total,
                sample_locale,
                sample_value,
            };

            let Some(answer) = prompter.ask(&request).map_err(TransxError::Input)? else {
                stats.interrupted = true;
                break;
            };

            match self.advance(index, Decision::Accept(answer)) {
                Advance::Committed => {
                    stats.committed += 1;
                    prompter.notify(&PassEvent::Committed);
                }
                Advance::Skipped => {
                    stats.skipped += 1;
                    prompter.notify(&PassEvent::Skipped);
                }
                Advance::Unchanged => {}
            }
        }

        Ok(stats)
    }

    /// 写回全部翻译包并重新加载
    pub fn save(&mut self) -> Result<Vec<PathBuf>> {
        let writer = BundleWriter::new(self.directory.root(), self.store.format());
        let written = writer.save_all(&self.store)?;
        self.refresh()?;
        Ok(written)
    }

    /// 重新扫描、解析并重建待办列表，丢弃当前列表
    pub fn refresh(&mut self) -> Result<()> {
        let files = self.directory.discover()?;
        self.store.reload(&files)?;
        self.worklist = Worklist::flatten(self.store.missing());
        Ok(())
    }
}
