//! TransX - 交互式多语言翻译补全工具
//!
//! 扫描 `<root>/<locale>/<bundle>.<ext>` 结构的翻译文件，计算各语言区域之间
//! 缺失的翻译键，并通过交互会话借助其他语言区域的示例值补全，最后写回磁盘。

pub mod cli;
pub mod core;
pub mod error;
pub mod i18n;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::{LangDirectory, Session, TranslationStore};
pub use crate::error::{Result, TransxError};
