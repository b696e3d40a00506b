// ============================================================================
// TransX - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 交互会话
    ("cli.start.start", "启动交互式翻译..."),
    ("start.loading", "从 {} 加载翻译文件"),
    ("start.loaded", "已加载 {} 个翻译包，共 {} 个语言区域（{} 格式）"),
    ("start.default_locale", "默认语言区域: {}"),
    (
        "start.menu",
        "请选择操作: [T]翻译, [C]检查, [S]保存, [E]退出",
    ),
    ("start.unknown_action", "未知操作: {}"),
    ("start.bye", "再见。"),
    // 检查相关
    ("cli.check.start", "开始检查翻译完整性..."),
    (
        "check.locale_missing",
        "[{}] 缺失 {} 条翻译（{} 条未保存的修改）",
    ),
    ("check.locale_complete", "[{}] 已补全: {} 条翻译等待保存"),
    ("check.default_suffix", "默认"),
    ("check.all_good", "所有翻译均已齐全！"),
    ("check.summary", "共缺失 {} 条翻译，涉及 {} 个语言区域"),
    ("check.details", "缺失的翻译:"),
    ("check.locale_header", "{} [{}]"),
    ("check.bundle_keys", "  {} {}: {}"),
    // 翻译流程
    ("translate.header", "正在将 [{}] 翻译为 [{}]。[{}/{}]"),
    ("translate.sample", "示例 [{}]: '{}'"),
    ("translate.prompt", "译文（留空跳过）: "),
    ("translate.unsupported", "暂不支持非字符串值。"),
    ("translate.added", "翻译已添加！"),
    ("translate.skipped", "已跳过。"),
    ("translate.done", "没有更多需要翻译的内容。"),
    ("translate.interrupted", "输入已结束，停止翻译。"),
    (
        "translate.stats",
        "本轮添加 {} 条，跳过 {} 条，不支持 {} 条",
    ),
    // 保存相关
    ("save.file_saved", "文件已保存: {}"),
    ("save.completed", "共保存 {} 个文件。"),
    ("save.refreshed", "已重新加载翻译: 仍缺失 {} 条"),
    // 初始化相关
    ("init.start", "初始化配置文件..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖已存在的配置文件"),
    ("init.config_created", "配置文件已创建: {}"),
    ("init.source", "翻译根目录: {}（格式: {}）"),
    ("init.locales_found", "发现 {} 个语言区域: {}"),
    ("init.no_bundles", "尚无 {} 翻译文件: {}"),
    ("init.root_missing", "翻译根目录 {} 尚不存在"),
    (
        "init.next_steps",
        "请修改 [source] root 指向翻译目录，然后运行 `transx start`",
    ),
    ("init.create_failed", "创建配置文件失败: {}"),
    // 错误信息
    ("error.source_not_found", "翻译目录不存在: {}"),
    ("error.load_failed", "加载翻译文件失败"),
    ("error.save_failed", "保存翻译文件失败"),
    ("error.invalid_format", "无效的输出格式: {}"),
];
