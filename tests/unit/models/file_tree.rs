use super::*;

fn tree(entries: &[(&str, &str)]) -> FileTree {
    entries.iter().copied().collect()
}

#[test]
fn test_upsert_and_get() {
    let mut tree = FileTree::new();
    assert!(tree.is_empty());

    assert_eq!(tree.upsert("config.lua", ""), None);
    assert_eq!(tree.upsert("config.lua", "x=1"), Some(String::new()));

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get("config.lua"), Some("x=1"));
    assert!(tree.contains("config.lua"));
    assert!(!tree.contains("Config.lua"));
}

#[test]
fn test_set_requires_existing_path() {
    let mut tree = tree(&[("a.lua", "old")]);

    assert!(tree.set("a.lua", "new"));
    assert!(!tree.set("b.lua", "new"));

    assert_eq!(tree.get("a.lua"), Some("new"));
    assert!(!tree.contains("b.lua"));
}

#[test]
fn test_paths_are_sorted() {
    let tree = tree(&[("server/main.lua", ""), ("config.lua", ""), ("client/main.lua", "")]);
    let paths: Vec<_> = tree.paths().collect();
    assert_eq!(paths, vec!["client/main.lua", "config.lua", "server/main.lua"]);
}

#[test]
fn test_rows_emit_each_directory_once() {
    let tree = tree(&[
        ("client/main.lua", ""),
        ("config.lua", ""),
        ("server/db/schema.lua", ""),
        ("server/main.lua", ""),
    ]);

    let rows: Vec<_> = tree
        .rows()
        .into_iter()
        .map(|row| (row.depth, row.name, row.kind))
        .collect();

    assert_eq!(
        rows,
        vec![
            (0, "client", NodeKind::Dir),
            (1, "main.lua", NodeKind::File),
            (0, "config.lua", NodeKind::File),
            (0, "server", NodeKind::Dir),
            (1, "db", NodeKind::Dir),
            (2, "schema.lua", NodeKind::File),
            (1, "main.lua", NodeKind::File),
        ]
    );
}

#[test]
fn test_rows_carry_full_path_for_files() {
    let tree = tree(&[("a/b.lua", "hi")]);
    let rows = tree.rows();

    assert_eq!(rows[0].path, None);
    assert_eq!(rows[1].path, Some("a/b.lua"));
}

#[test]
fn test_serializes_as_plain_object() {
    let tree = tree(&[("a.lua", "X")]);
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(json, r#"{"a.lua":"X"}"#);

    let back: FileTree = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}
