//! End-to-end behavior of a counting run over real directory trees.

use linecount_engine::report::{FILE_COUNT_HEADER, LINE_COUNT_HEADER, Level};
use linecount_engine::{ConfigBuilder, MatchMode, MemorySink, Resource, run};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn exts(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn counts_matching_files_and_ignores_others() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "A.java", b"class A {\n}\n// end\n");
    write(temp.path(), "pkg/B.java", b"1\n2\n3\n4\n5");
    write(temp.path(), "C.txt", "line\n".repeat(10).as_bytes());

    let config = ConfigBuilder::default()
        .source_directory(temp.path())
        .build()
        .unwrap();
    let sink = MemorySink::new();
    let report = run(&config, &sink);

    assert_eq!(report.tally.files("java"), Some(2));
    assert_eq!(report.tally.lines("java"), Some(8));
    assert_eq!(report.tally.files("txt"), None);
    assert_eq!(report.tally.file_counts().len(), 1);
    assert_eq!(report.warnings, 0);
}

#[test]
fn report_lines_are_emitted_in_order() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let res = temp.path().join("res");
    write(&src, "Main.java", b"a\nb\n");
    write(&res, "app.xml", b"<a/>\n");

    let config = ConfigBuilder::default()
        .source_directory(&src)
        .resources(vec![Resource::from(res.clone())])
        .extensions(exts(&["java", "xml"]))
        .build()
        .unwrap();
    let sink = MemorySink::new();
    let _ = run(&config, &sink);

    let info = sink.messages(Level::Info);
    assert_eq!(
        info,
        vec![
            format!("source directory: {}", src.display()),
            format!("root directory: {}", src.display()),
            format!("root directory: {}", res.display()),
            "extensions: [java, xml]".to_string(),
            FILE_COUNT_HEADER.to_string(),
            "java: 1".to_string(),
            "xml: 1".to_string(),
            LINE_COUNT_HEADER.to_string(),
            "java: 2".to_string(),
            "xml: 1".to_string(),
        ]
    );
}

#[test]
fn suffix_match_has_no_dot_boundary() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "Foo.java", b"x\n");
    write(temp.path(), "Xjava", b"y\nz\n");

    let config = ConfigBuilder::default()
        .source_directory(temp.path())
        .build()
        .unwrap();
    let report = run(&config, &MemorySink::new());
    assert_eq!(report.tally.files("java"), Some(2));
    assert_eq!(report.tally.lines("java"), Some(3));

    let dotted = ConfigBuilder::default()
        .source_directory(temp.path())
        .match_mode(MatchMode::Dotted)
        .build()
        .unwrap();
    let report = run(&dotted, &MemorySink::new());
    assert_eq!(report.tally.files("java"), Some(1));
}

#[test]
fn first_configured_extension_wins() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "index.d.ts", b"declare const x: number;\n");
    write(temp.path(), "main.ts", b"a\nb\n");

    let config = ConfigBuilder::default()
        .source_directory(temp.path())
        .extensions(exts(&["d.ts", "ts"]))
        .build()
        .unwrap();
    let report = run(&config, &MemorySink::new());

    assert_eq!(report.tally.files("d.ts"), Some(1));
    assert_eq!(report.tally.lines("d.ts"), Some(1));
    assert_eq!(report.tally.files("ts"), Some(1));
    assert_eq!(report.tally.lines("ts"), Some(2));
}

#[test]
fn undecodable_file_counts_as_file_with_zero_lines() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "Good.java", b"a\nb\n");
    write(temp.path(), "Bad.java", b"ok\n\xff\xfe\n");

    let config = ConfigBuilder::default()
        .source_directory(temp.path())
        .build()
        .unwrap();
    let sink = MemorySink::new();
    let report = run(&config, &sink);

    assert_eq!(report.tally.files("java"), Some(2));
    assert_eq!(report.tally.lines("java"), Some(2));
    assert_eq!(report.warnings, 1);

    let warnings = sink.messages(Level::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("Bad.java"));
    assert!(sink.messages(Level::Info).contains(&"java: 2".to_string()));
}

#[cfg(unix)]
#[test]
fn unreadable_file_counts_as_file_with_zero_lines() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    write(temp.path(), "Open.java", b"a\n");
    write(temp.path(), "Locked.java", b"a\nb\nc\n");
    let locked = temp.path().join("Locked.java");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::File::open(&locked).is_ok() {
        eprintln!("skipped: running with privileges that bypass permissions");
        return;
    }

    let config = ConfigBuilder::default()
        .source_directory(temp.path())
        .build()
        .unwrap();
    let sink = MemorySink::new();
    let report = run(&config, &sink);

    assert_eq!(report.tally.files("java"), Some(2));
    assert_eq!(report.tally.lines("java"), Some(1));
    let warnings = sink.messages(Level::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("Locked.java"));

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
}

#[cfg(unix)]
#[test]
fn unlistable_directory_is_skipped_with_warning() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    write(temp.path(), "A.java", b"a\n");
    write(temp.path(), "nested/B.java", b"b\nc\n");
    write(temp.path(), "locked/Hidden.java", b"1\n2\n3\n4\n");
    let locked = temp.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("skipped: running with privileges that bypass permissions");
        return;
    }

    let config = ConfigBuilder::default()
        .source_directory(temp.path())
        .build()
        .unwrap();
    let sink = MemorySink::new();
    let report = run(&config, &sink);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(report.tally.files("java"), Some(2));
    assert_eq!(report.tally.lines("java"), Some(3));
    assert_eq!(report.warnings, 1);
    let warnings = sink.messages(Level::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("locked"));
}

#[test]
fn duplicate_resources_are_visited_once() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let res = temp.path().join("res");
    fs::create_dir_all(&src).unwrap();
    write(&res, "config.xml", b"<a>\n</a>\n");

    let config = ConfigBuilder::default()
        .source_directory(&src)
        .resources(vec![Resource::from(res.clone()), Resource::from(res.clone())])
        .extensions(exts(&["xml"]))
        .build()
        .unwrap();
    let sink = MemorySink::new();
    let report = run(&config, &sink);

    assert_eq!(report.roots.len(), 2);
    assert_eq!(report.tally.files("xml"), Some(1));
    assert_eq!(report.tally.lines("xml"), Some(2));
    let root_lines = sink
        .messages(Level::Info)
        .into_iter()
        .filter(|m| m.starts_with("root directory:"))
        .count();
    assert_eq!(root_lines, 2);
}

#[test]
fn source_directory_can_be_excluded() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    write(&src, "Main.java", b"a\n");

    let config = ConfigBuilder::default()
        .source_directory(&src)
        .count_source(false)
        .build()
        .unwrap();
    let report = run(&config, &MemorySink::new());
    assert!(report.roots.is_empty());
    assert!(report.tally.is_empty());
}

#[test]
fn empty_tree_leaves_mappings_empty() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("a/b")).unwrap();

    let config = ConfigBuilder::default()
        .source_directory(temp.path())
        .extensions(exts(&["java", "xml"]))
        .build()
        .unwrap();
    let sink = MemorySink::new();
    let report = run(&config, &sink);

    assert!(report.tally.is_empty());
    assert!(report.tally.line_counts().is_empty());
    assert!(report.rows().is_empty());
    assert!(sink.messages(Level::Warn).is_empty());
}

#[test]
fn missing_directories_are_not_errors() {
    let temp = TempDir::new().unwrap();
    let config = ConfigBuilder::default()
        .source_directory(temp.path().join("absent"))
        .resources(vec![Resource::from(temp.path().join("also-absent"))])
        .build()
        .unwrap();
    let sink = MemorySink::new();
    let report = run(&config, &sink);

    assert!(report.tally.is_empty());
    assert_eq!(report.warnings, 0);
}

#[test]
fn repeated_runs_are_identical() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a/One.java", b"1\n2\n");
    write(temp.path(), "b/Two.java", b"1\r\n2\r\n3");
    write(temp.path(), "b/view.xml", b"<x/>");

    let config = ConfigBuilder::default()
        .source_directory(temp.path())
        .extensions(exts(&["java", "xml"]))
        .build()
        .unwrap();
    let first = run(&config, &MemorySink::new());
    let second = run(&config, &MemorySink::new());

    assert_eq!(first, second);
    assert_eq!(first.tally.lines("java"), Some(5));
}

#[test]
fn report_serializes_to_json() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "A.java", b"a\n");

    let config = ConfigBuilder::default()
        .source_directory(temp.path())
        .build()
        .unwrap();
    let report = run(&config, &MemorySink::new());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["tally"]["files"]["java"], 1);
    assert_eq!(json["tally"]["lines"]["java"], 1);
    assert_eq!(json["extensions"][0], "java");
}
