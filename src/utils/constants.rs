// ============================================================================
// TransX - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 图标字符定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "TRANSX";

/// 分隔线
pub const SEPARATOR: &str = "───────────────────────────────────────";

/// 图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 错误图标
    pub const ERROR: &str = "✗";
    /// 警告图标
    pub const WARNING: &str = "!";
    /// 语言区域图标
    pub const LOCALE: &str = "●";
    /// 翻译包图标
    pub const BUNDLE: &str = "◦";
    /// 箭头图标
    pub const ARROW: &str = "→";
    /// 跳过图标
    pub const SKIP: &str = "○";
    /// 保存图标
    pub const SAVE: &str = "▲";
}
