//! Seeding and read-back of each hook's payload.

mod common;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use common::{CallLog, ScriptedPlugin, manager_registering, manager_with};
use docpipe_plugin::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SiteConfig {
    title: String,
    destination: String,
    #[serde(default)]
    plugins: Vec<PluginEntry>,
}

#[test]
fn test_config_round_trips_through_plugins() {
    let log = CallLog::default();
    let retitle = ScriptedPlugin::new("retitle", &log)
        .config(|event| {
            event.data.config["title"] = event.option["title"].clone();
            Ok(())
        })
        .build();

    let mut manager = manager_registering(vec![("retitle", retitle)]);
    manager
        .init(vec![
            PluginEntry::new("retitle").with_option(json!({"title": "Handbook"})),
        ])
        .expect("init");

    let config = SiteConfig {
        title: "Docs".into(),
        destination: "./out".into(),
        plugins: manager.plugins().to_vec(),
    };
    let handled = manager.on_handle_config(&config).expect("config");

    assert_eq!(handled.title, "Handbook");
    assert_eq!(handled.destination, "./out");
    assert_eq!(config.title, "Docs");
}

#[test]
fn test_config_left_unreadable_is_serialization_error() {
    let log = CallLog::default();
    let breaker = ScriptedPlugin::new("breaker", &log)
        .config(|event| {
            event.data.config = json!("not an object");
            Ok(())
        })
        .build();

    let mut manager = manager_with(vec![("breaker", breaker)]);
    let config = SiteConfig {
        title: "Docs".into(),
        destination: "./out".into(),
        plugins: Vec::new(),
    };
    let err = manager.on_handle_config(&config).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Serialization);
}

#[test]
fn test_unserializable_config_fails_before_any_plugin() {
    #[derive(Debug, Serialize, Deserialize)]
    struct GridConfig {
        cells: BTreeMap<(u8, u8), u8>,
    }

    let log = CallLog::default();
    let watcher = ScriptedPlugin::new("watcher", &log)
        .config(|_| Ok(()))
        .build();
    let mut manager = manager_with(vec![("watcher", watcher)]);

    let config = GridConfig {
        cells: BTreeMap::from([((0, 1), 7)]),
    };
    let err = manager.on_handle_config(&config).unwrap_err();

    assert_eq!(err.kind, ErrorKind::Serialization);
    assert!(log.entries().is_empty());
}

#[test]
fn test_code_hook_sees_file_path() {
    let log = CallLog::default();
    let banner = ScriptedPlugin::new("banner", &log)
        .code(|event| {
            let header = format!("// {}\n", event.data.file_path.display());
            event.data.code.insert_str(0, &header);
            Ok(())
        })
        .build();

    let mut manager = manager_with(vec![("banner", banner)]);
    let code = manager
        .on_handle_code("const a = 1;", "src/a.js")
        .expect("code");
    assert_eq!(code, "// src/a.js\nconst a = 1;");
}

#[test]
fn test_code_parser_can_be_replaced() {
    let log = CallLog::default();
    let swap = ScriptedPlugin::new("swap", &log)
        .code_parser(|event| {
            let inner = Arc::clone(&event.data.parser);
            event.data.parser = Arc::new(move |code: &str, option: &Value| -> AppResult<Value> {
                let mut ast = inner.parse(code, option)?;
                ast["wrapped"] = json!(true);
                Ok(ast)
            });
            event.data.parser_option["plugins"] = json!(["jsx"]);
            Ok(())
        })
        .build();

    let host: Arc<dyn CodeParser> = Arc::new(|code: &str, option: &Value| -> AppResult<Value> {
        Ok(json!({"type": "File", "length": code.len(), "option": option.clone()}))
    });

    let mut manager = manager_with(vec![("swap", swap)]);
    let (parser, option) = manager
        .on_handle_code_parser(Arc::clone(&host), json!({}), "a.js", "abc")
        .expect("parser");

    assert!(!Arc::ptr_eq(&parser, &host));
    assert_eq!(option, json!({"plugins": ["jsx"]}));
    let ast = parser.parse("abc", &option).expect("parse");
    assert_eq!(ast["length"], json!(3));
    assert_eq!(ast["wrapped"], json!(true));
}

#[test]
fn test_code_parser_passes_through_by_reference() {
    let host: Arc<dyn CodeParser> = Arc::new(|_: &str, _: &Value| -> AppResult<Value> { Ok(Value::Null) });
    let mut manager = manager_with(Vec::new());
    let (parser, option) = manager
        .on_handle_code_parser(Arc::clone(&host), json!({"sourceType": "module"}), "a.js", "")
        .expect("parser");
    assert!(Arc::ptr_eq(&parser, &host));
    assert_eq!(option, json!({"sourceType": "module"}));
}

struct StubParam;

impl ParamParser for StubParam {
    fn parse_param(&self, value: &str) -> AppResult<Value> {
        Ok(json!({"types": [value]}))
    }
}

struct StubComment;

impl CommentParser for StubComment {
    fn parse_comment(&self, comment: &str) -> AppResult<Vec<Value>> {
        Ok(comment
            .split('@')
            .skip(1)
            .map(|tag| json!({"tagName": format!("@{}", tag.trim())}))
            .collect())
    }
}

struct StubSyntax;

impl SyntaxParser for StubSyntax {
    fn parse_file(&self, _code: &str, _file_path: &Path) -> AppResult<Value> {
        Ok(json!({"type": "File"}))
    }
}

struct ClassDoc;

impl DocFactory for ClassDoc {
    fn kind(&self) -> &str {
        "Class"
    }

    fn create(&self, _ast: &Value, node: &Value, _file_path: &Path) -> AppResult<Value> {
        Ok(json!({"kind": "class", "name": node["name"].clone()}))
    }
}

/// Factory that tags each record using the host comment parser.
struct TaggedDoc {
    inner: Arc<dyn DocFactory>,
    comments: Arc<dyn CommentParser>,
}

impl DocFactory for TaggedDoc {
    fn kind(&self) -> &str {
        self.inner.kind()
    }

    fn create(&self, ast: &Value, node: &Value, file_path: &Path) -> AppResult<Value> {
        let mut doc = self.inner.create(ast, node, file_path)?;
        let comment = node["comment"].as_str().unwrap_or_default();
        doc["tags"] = Value::Array(self.comments.parse_comment(comment)?);
        Ok(doc)
    }
}

fn capabilities() -> ParsingCapabilities {
    ParsingCapabilities {
        param_parser: Arc::new(StubParam),
        comment_parser: Arc::new(StubComment),
        syntax_parser: Arc::new(StubSyntax),
    }
}

#[test]
fn test_doc_class_can_reuse_host_parsers() {
    let log = CallLog::default();
    let tagger = ScriptedPlugin::new("tagger", &log)
        .doc_class(|event| {
            if event.data.kind == "Class" {
                event.data.class = Arc::new(TaggedDoc {
                    inner: Arc::clone(&event.data.class),
                    comments: Arc::clone(&event.data.comment_parser),
                });
            }
            Ok(())
        })
        .build();

    let mut manager = manager_registering(vec![("tagger", tagger)]).with_capabilities(capabilities());
    manager.init(vec![PluginEntry::new("tagger")]).expect("init");

    let class = manager
        .on_handle_doc_class("Class", Arc::new(ClassDoc))
        .expect("doc class");
    let doc = class
        .create(
            &json!({}),
            &json!({"name": "Foo", "comment": "@public @since 1.0"}),
            Path::new("foo.js"),
        )
        .expect("create");

    assert_eq!(doc["name"], json!("Foo"));
    assert_eq!(doc["tags"][0]["tagName"], json!("@public"));
    assert_eq!(doc["tags"][1]["tagName"], json!("@since 1.0"));
}

#[test]
fn test_doc_class_requires_capabilities() {
    let mut manager = manager_with(Vec::new());
    let err = manager
        .on_handle_doc_class("Class", Arc::new(ClassDoc))
        .err()
        .expect("missing capabilities");
    assert_eq!(err.kind, ErrorKind::Internal);
}

#[test]
fn test_ast_hook_gets_path_and_code() {
    let log = CallLog::default();
    let annotate = ScriptedPlugin::new("annotate", &log)
        .ast(|event| {
            event.data.ast["source"] = json!({
                "path": event.data.file_path.to_string_lossy(),
                "lines": event.data.code.lines().count(),
            });
            Ok(())
        })
        .build();

    let ast = json!({"type": "File", "body": []});
    let mut manager = manager_with(vec![("annotate", annotate)]);
    let handled = manager
        .on_handle_ast(&ast, "lib/b.js", "a\nb\n")
        .expect("ast");

    assert_eq!(handled["source"], json!({"path": "lib/b.js", "lines": 2}));
    assert!(ast.get("source").is_none());
}

#[test]
fn test_publish_exposes_callbacks() {
    let log = CallLog::default();
    let publisher = ScriptedPlugin::new("publisher", &log)
        .publish(|event| {
            (event.data.write_file)(Path::new("extra.txt"), "hello")?;
            (event.data.copy_file)(Path::new("assets/logo.png"), Path::new("logo.png"))?;
            (event.data.copy_dir)(Path::new("assets"), Path::new("assets"))?;
            let read = (event.data.read_file)(Path::new("extra.txt"))?;
            (event.data.write_file)(Path::new("echo.txt"), &read)
        })
        .build();

    let calls: Arc<Mutex<Vec<String>>> = Arc::default();
    let store: Arc<Mutex<Vec<(PathBuf, String)>>> = Arc::default();

    let write_store = Arc::clone(&store);
    let write_file: WriteFileFn = Arc::new(move |path: &Path, content: &str| -> AppResult<()> {
        write_store
            .lock()
            .expect("lock")
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    });
    let copy_calls = Arc::clone(&calls);
    let copy_dir: CopyDirFn = Arc::new(move |src: &Path, dest: &Path| -> AppResult<()> {
        copy_calls
            .lock()
            .expect("lock")
            .push(format!("{} -> {}", src.display(), dest.display()));
        Ok(())
    });
    let read_store = Arc::clone(&store);
    let read_file: ReadFileFn = Arc::new(move |path: &Path| -> AppResult<String> {
        read_store
            .lock()
            .expect("lock")
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| AppError::io(format!("{} not written", path.display())))
    });

    let mut manager = manager_with(vec![("publisher", publisher)]);
    manager
        .on_publish(write_file, copy_dir, read_file)
        .expect("publish");

    assert_eq!(
        *calls.lock().expect("lock"),
        vec!["assets/logo.png -> logo.png", "assets -> assets"]
    );
    let written = store.lock().expect("lock").clone();
    assert_eq!(written[1], (PathBuf::from("echo.txt"), "hello".to_string()));
}

#[test]
fn test_content_hook_sees_file_name() {
    let log = CallLog::default();
    let footer = ScriptedPlugin::new("footer", &log)
        .content(|event| {
            if event.data.file_name.ends_with(".html") {
                event.data.content = event
                    .data
                    .content
                    .replace("</body>", "<footer>built</footer></body>");
            }
            Ok(())
        })
        .build();

    let mut manager = manager_with(vec![("footer", footer)]);
    assert_eq!(
        manager
            .on_handle_content("<body></body>", "index.html")
            .expect("content"),
        "<body><footer>built</footer></body>"
    );
    assert_eq!(
        manager
            .on_handle_content("body { }", "style.css")
            .expect("content"),
        "body { }"
    );
}

#[test]
fn test_lifecycle_order_is_caller_driven() {
    let log = CallLog::default();
    let watcher = ScriptedPlugin::new("watcher", &log)
        .plugins(|_| Ok(()))
        .start(|_| Ok(()))
        .code(|_| Ok(()))
        .docs(|_| Ok(()))
        .content(|_| Ok(()))
        .complete(|_| Ok(()))
        .build();

    let mut manager = manager_with(vec![("watcher", watcher)]);
    manager.on_start().expect("start");
    manager.on_handle_code("", "a.js").expect("code");
    manager.on_handle_docs(&[]).expect("docs");
    manager.on_handle_content("", "index.html").expect("content");
    manager.on_complete().expect("complete");

    assert_eq!(
        log.entries(),
        vec![
            "watcher:on_handle_plugins",
            "watcher:on_start",
            "watcher:on_handle_code",
            "watcher:on_handle_docs",
            "watcher:on_handle_content",
            "watcher:on_complete",
        ]
    );
}
