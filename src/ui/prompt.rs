// ============================================================================
// TransX - 终端交互组件
// ============================================================================
//
// 文件: src/ui/prompt.rs
// 职责: 从标准输入读取操作员的选择和译文
// 边界:
//   - ✅ 菜单提示和操作解析
//   - ✅ 逐条翻译提示
//   - ✅ 翻译过程通知输出
//   - ❌ 不应包含会话状态修改
//   - ❌ 不应包含文件操作
//
// ============================================================================

use std::io::{self, BufRead, Write};

use crate::core::session::{PassEvent, Prompter, TranslationRequest};
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 主菜单操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Translate,
    Check,
    Save,
    Exit,
}

impl Action {
    /// 解析操作（大小写不敏感，接受首字母或完整单词）
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "T" | "TRANSLATE" => Some(Action::Translate),
            "C" | "CHECK" => Some(Action::Check),
            "S" | "SAVE" => Some(Action::Save),
            "E" | "EXIT" | "Q" | "QUIT" => Some(Action::Exit),
            _ => None,
        }
    }
}

/// 基于标准输入输出的交互组件
pub struct TerminalPrompter<R> {
    input: R,
}

impl TerminalPrompter<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> TerminalPrompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// 读取一行；输入结束时返回 None
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// 询问主菜单操作；输入结束视为退出
    pub fn ask_action(&mut self) -> io::Result<Option<String>> {
        self.read_line(&format!("{} ", Colors::bold(&t!("start.menu"))))
    }
}

impl<R: BufRead> Prompter for TerminalPrompter<R> {
    fn ask(&mut self, request: &TranslationRequest) -> io::Result<Option<String>> {
        Logger::info("");
        Logger::info(tf!(
            "translate.header",
            Colors::info(&request.name()),
            request.locale,
            request.position,
            request.total
        ));
        Logger::info(tf!(
            "translate.sample",
            request.sample_locale,
            Colors::muted(&request.sample_value)
        ));
        self.read_line(&format!(" {} ", t!("translate.prompt")))
    }

    fn notify(&mut self, event: &PassEvent) {
        match event {
            PassEvent::Unsupported {
                locale,
                name,
                position,
                total,
            } => {
                Logger::info("");
                Logger::info(tf!(
                    "translate.header",
                    Colors::info(name),
                    locale,
                    position,
                    total
                ));
                Logger::warn(t!("translate.unsupported"));
            }
            PassEvent::Committed => Logger::success(t!("translate.added")),
            PassEvent::Skipped => Logger::info(t!("translate.skipped")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_action_parse() {
        assert_eq!(Action::parse("t"), Some(Action::Translate));
        assert_eq!(Action::parse(" Check "), Some(Action::Check));
        assert_eq!(Action::parse("S"), Some(Action::Save));
        assert_eq!(Action::parse("exit"), Some(Action::Exit));
        assert_eq!(Action::parse("x"), None);
    }

    #[test]
    fn test_reads_trimmed_lines_until_eof() {
        let mut prompter = TerminalPrompter::new(Cursor::new("  Bonjour \n"));
        let request = TranslationRequest {
            locale: "fr".to_string(),
            bundle: "messages".to_string(),
            key: "hello".to_string(),
            position: 1,
            total: 1,
            sample_locale: "en".to_string(),
            sample_value: "Hello".to_string(),
        };

        assert_eq!(prompter.ask(&request).unwrap().as_deref(), Some("Bonjour"));
        assert_eq!(prompter.ask(&request).unwrap(), None);
    }
}
