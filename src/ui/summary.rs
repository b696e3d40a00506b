// ============================================================================
// TransX - 检查结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 翻译完整性检查结果显示
// 边界:
//   - ✅ 各语言区域缺失统计输出
//   - ✅ 缺失键明细输出
//   - ✅ 国际化文本支持
//   - ❌ 不应包含缺失键计算
//   - ❌ 不应包含文件操作
//   - ❌ 不应包含用户输入
//
// ============================================================================

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::session::{EntryState, LocaleSummary, Worklist, WorklistSummary};
use crate::utils::colors::Colors;
use crate::utils::constants::{icons, SEPARATOR};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// JSON 输出结构
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub default_locale: Option<&'a str>,
    pub complete: bool,
    pub locales: &'a [LocaleSummary],
    /// locale → bundle → 缺失键
    pub missing: BTreeMap<&'a str, BTreeMap<&'a str, Vec<&'a str>>>,
}

impl<'a> CheckReport<'a> {
    pub fn new(
        summary: &'a WorklistSummary,
        worklist: &'a Worklist,
        default_locale: Option<&'a str>,
    ) -> Self {
        Self {
            default_locale,
            complete: summary.is_complete(),
            locales: &summary.locales,
            missing: group_outstanding(worklist),
        }
    }
}

/// 按 locale / bundle 分组尚未翻译的条目
fn group_outstanding(worklist: &Worklist) -> BTreeMap<&str, BTreeMap<&str, Vec<&str>>> {
    let mut grouped: BTreeMap<&str, BTreeMap<&str, Vec<&str>>> = BTreeMap::new();
    for entry in worklist.entries() {
        if entry.state == EntryState::Committed {
            continue;
        }
        grouped
            .entry(entry.locale.as_str())
            .or_default()
            .entry(entry.bundle.as_str())
            .or_default()
            .push(entry.key.as_str());
    }
    grouped
}

/// 语言区域显示名（默认语言区域带标记）
fn locale_label(locale: &str, default_locale: Option<&str>) -> String {
    if default_locale == Some(locale) {
        format!("{}, {}", locale, t!("check.default_suffix"))
    } else {
        locale.to_string()
    }
}

/// 打印各语言区域的缺失统计
pub fn print_locale_summary(summary: &WorklistSummary, default_locale: Option<&str>) {
    for locale in &summary.locales {
        let label = locale_label(&locale.locale, default_locale);
        if locale.is_complete() {
            Logger::success(tf!("check.locale_complete", label, locale.unsaved));
        } else {
            Logger::info(tf!(
                "check.locale_missing",
                Colors::info(&label),
                locale.total,
                locale.unsaved
            ));
        }
    }
}

/// 打印缺失键明细
pub fn print_missing_details(worklist: &Worklist) {
    Logger::info("");
    Logger::info(t!("check.details"));
    Logger::info(SEPARATOR);

    for (locale, bundles) in group_outstanding(worklist) {
        let count: usize = bundles.values().map(Vec::len).sum();
        Logger::info(tf!(
            "check.locale_header",
            icons::LOCALE,
            Colors::info(&format!("{}: {}", locale, count))
        ));
        for (bundle, keys) in bundles {
            Logger::info(tf!(
                "check.bundle_keys",
                icons::BUNDLE,
                Colors::bold(bundle),
                keys.join(", ")
            ));
        }
    }
    Logger::info("");
}

/// 打印总计
pub fn print_totals(summary: &WorklistSummary) {
    let outstanding: usize = summary.locales.iter().map(LocaleSummary::outstanding).sum();
    Logger::error(tf!("check.summary", outstanding, summary.locales.len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::tests::store;

    #[test]
    fn test_report_groups_outstanding_keys() {
        let store = store(&[
            ("en/app.json", r#"{"a": "A", "b": "B"}"#),
            ("en/auth.json", r#"{"login": "Log in"}"#),
            ("fr/app.json", "{}"),
        ]);
        let worklist = Worklist::flatten(store.missing());
        let summary = worklist.summarize();
        let report = CheckReport::new(&summary, &worklist, Some("en"));

        assert!(!report.complete);
        assert_eq!(report.missing["fr"]["app"], vec!["a", "b"]);
        assert_eq!(report.missing["fr"]["auth"], vec!["login"]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["default_locale"], "en");
        assert_eq!(json["locales"][0]["total"], 3);
    }
}
