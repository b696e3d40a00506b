// ============================================================================
// TransX - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain business logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Interactive session
    ("cli.start.start", "Starting interactive translator..."),
    ("start.loading", "Loading translations from {}"),
    (
        "start.loaded",
        "Loaded {} bundles across {} locales ({} format)",
    ),
    ("start.default_locale", "Default locale: {}"),
    (
        "start.menu",
        "What do you want to do? [T]ranslate, [C]heck, [S]ave, [E]xit.",
    ),
    ("start.unknown_action", "Unknown action: {}"),
    ("start.bye", "Bye."),
    // Check related
    ("cli.check.start", "Checking translation completeness..."),
    (
        "check.locale_missing",
        "[{}] is missing: {} translation entries ({} unsaved changes).",
    ),
    (
        "check.locale_complete",
        "[{}] is complete: {} entries translated, waiting to be saved.",
    ),
    ("check.default_suffix", "default"),
    ("check.all_good", "Everything is awesome!"),
    ("check.summary", "{} missing entries in {} locales"),
    ("check.details", "Missing translations:"),
    ("check.locale_header", "{} [{}]"),
    ("check.bundle_keys", "  {} {}: {}"),
    // Translate pass
    ("translate.header", "Translating [{}] into [{}]. [{}/{}]"),
    ("translate.sample", "Sample [{}]: '{}'"),
    ("translate.prompt", "Translation (left blank to skip): "),
    ("translate.unsupported", "Non string value not supported."),
    ("translate.added", "Translation added!"),
    ("translate.skipped", "Translation skipped!"),
    ("translate.done", "No more translation."),
    ("translate.interrupted", "Input closed, translation stopped."),
    (
        "translate.stats",
        "{} added, {} skipped, {} unsupported in this pass",
    ),
    // Save related
    ("save.file_saved", "File saved: {}"),
    ("save.completed", "Saved {} files."),
    (
        "save.refreshed",
        "Translations reloaded: {} missing entries remain",
    ),
    // Init related
    ("init.start", "Initializing configuration file..."),
    ("init.config_exists", "Configuration file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite it"),
    ("init.config_created", "Configuration file created: {}"),
    ("init.source", "Translation root: {} (format: {})"),
    ("init.locales_found", "Found {} locales: {}"),
    ("init.no_bundles", "No {} translation files under {} yet"),
    ("init.root_missing", "Translation root {} does not exist yet"),
    (
        "init.next_steps",
        "Edit [source] root to point at your translation directory, then run `transx start`",
    ),
    ("init.create_failed", "Failed to create configuration file: {}"),
    // Error messages
    (
        "error.source_not_found",
        "Translation directory does not exist: {}",
    ),
    ("error.load_failed", "Failed to load translations"),
    ("error.save_failed", "Failed to save translations"),
    ("error.invalid_format", "Invalid output format: {}"),
];
