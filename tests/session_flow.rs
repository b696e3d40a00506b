use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

use transx::core::session::{PassEvent, Prompter, TranslationRequest};
use transx::models::translation::BundleFormat;
use transx::{LangDirectory, Session, TransxError};

struct Scripted {
    answers: VecDeque<String>,
    asked: Vec<String>,
    unsupported: Vec<String>,
}

impl Scripted {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
            unsupported: Vec::new(),
        }
    }
}

impl Prompter for Scripted {
    fn ask(&mut self, request: &TranslationRequest) -> io::Result<Option<String>> {
        self.asked
            .push(format!("{}:{}<-{}", request.locale, request.name(), request.sample_locale));
        Ok(self.answers.pop_front())
    }

    fn notify(&mut self, event: &PassEvent) {
        if let PassEvent::Unsupported { locale, name, .. } = event {
            self.unsupported.push(format!("{}:{}", locale, name));
        }
    }
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fixture(root: &Path) {
    write(
        root,
        "en/messages.json",
        r#"{"hello": "Hello", "bye": "Goodbye", "days": ["Mon", "Tue"]}"#,
    );
    write(root, "fr/messages.json", r#"{"hello": "Bonjour"}"#);
    write(root, "es/auth.json", r#"{"login": "Entrar"}"#);
    write(root, "fr/notes.txt", "ignored");
}

#[test]
fn translate_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let mut session = Session::open(
        LangDirectory::new(dir.path()),
        BundleFormat::Json,
        Some("en".to_string()),
    )
    .unwrap();

    assert_eq!(session.store().locales(), &["en", "es", "fr"]);
    assert_eq!(session.store().default_locale(), Some("en"));

    let before = session.summarize();
    let totals: Vec<(String, usize)> = before
        .locales
        .iter()
        .map(|l| (l.locale.clone(), l.total))
        .collect();
    assert_eq!(
        totals,
        vec![
            ("en".to_string(), 1),
            ("es".to_string(), 3),
            ("fr".to_string(), 3),
        ]
    );

    // en:auth.login, es:messages.bye, es:messages.days (unsupported),
    // es:messages.hello, fr:auth.login, fr:messages.bye, fr:messages.days (unsupported)
    let mut prompter = Scripted::new(&["Log in", "Adiós", "", "Connexion", "Au revoir"]);
    let stats = session.translate_pending(&mut prompter).unwrap();

    assert_eq!(stats.committed, 4);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.unsupported, 2);
    assert_eq!(
        prompter.asked,
        vec![
            "en:auth.login<-es",
            "es:messages.bye<-en",
            "es:messages.hello<-en",
            // en 在本轮第一条已补全 login，按顺序优先于 es
            "fr:auth.login<-en",
            "fr:messages.bye<-en",
        ]
    );
    assert_eq!(prompter.unsupported, vec!["es:messages.days", "fr:messages.days"]);

    let written = session.save().unwrap();
    assert_eq!(written.len(), 6);

    // 保存后重新加载：已补全的条目消失，只剩跳过和不支持的
    let remaining: Vec<String> = session
        .worklist()
        .entries()
        .iter()
        .map(|e| format!("{}:{}", e.locale, e.name()))
        .collect();
    assert_eq!(
        remaining,
        vec!["es:messages.days", "es:messages.hello", "fr:messages.days"]
    );
    assert!(session.worklist().entries().iter().all(|e| !e.is_translated()));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("fr/auth.json")).unwrap())
            .unwrap();
    assert_eq!(saved["login"], "Connexion");

    let days: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("en/messages.json")).unwrap())
            .unwrap();
    assert_eq!(days["days"], serde_json::json!(["Mon", "Tue"]));
}

#[test]
fn complete_directory_has_empty_worklist() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "en/app.yaml", "title: Title\n");
    write(dir.path(), "fr/app.yml", "title: Titre\n");

    let session = Session::open(LangDirectory::new(dir.path()), BundleFormat::Yaml, None).unwrap();
    assert!(session.worklist().is_empty());
    assert!(session.summarize().is_complete());
}

#[test]
fn missing_root_and_parse_errors() {
    let dir = tempfile::tempdir().unwrap();

    let err = Session::open(
        LangDirectory::new(dir.path().join("lang")),
        BundleFormat::Json,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, TransxError::SourceNotFound(_)));

    write(dir.path(), "lang/en/app.json", "{ broken");
    let err = Session::open(
        LangDirectory::new(dir.path().join("lang")),
        BundleFormat::Json,
        None,
    )
    .unwrap_err();
    match err {
        TransxError::Parse { path, .. } => assert!(path.ends_with("en/app.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn yml_bundles_keep_committed_translations_after_save() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "en/messages.yml", "hello: Hello\n");
    write(dir.path(), "fr/messages.yml", "{}\n");

    let mut session = Session::open(LangDirectory::new(dir.path()), BundleFormat::Yaml, None).unwrap();
    let stats = session
        .translate_pending(&mut Scripted::new(&["Bonjour"]))
        .unwrap();
    assert_eq!(stats.committed, 1);

    session.save().unwrap();
    assert_eq!(
        session
            .store()
            .get("fr", "messages", "hello")
            .and_then(|v| v.as_text()),
        Some("Bonjour")
    );
    assert!(session.worklist().is_empty());

    let mut names: Vec<String> = fs::read_dir(dir.path().join("fr"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["messages.yml"]);
}

#[test]
fn yaml_and_yml_for_one_bundle_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "fr/messages.yaml", "hello: Bonjour\n");
    write(dir.path(), "fr/messages.yml", "hello: Salut\n");

    let err = Session::open(LangDirectory::new(dir.path()), BundleFormat::Yaml, None).unwrap_err();
    assert!(matches!(err, TransxError::DuplicateBundle { .. }));
}
