//! 合并引擎的整体性质：顺序无关、往返、稀疏导出、移除文件、新增键、幂等

use fanyi_merge::model::file_ops::{add_key, remove_file};
use fanyi_merge::{get_json, parse, ScalarPolicy, TranslationFile, TranslationNode};
use serde_json::{json, Value};

fn merge_all(files: &[TranslationFile]) -> TranslationNode {
    let mut tree = None;
    for f in files {
        parse(&mut tree, f, "Default", ScalarPolicy::Reject).expect("合并失败");
    }
    tree.expect("树应已创建")
}

/// 只比较名称与结构（分类按名称排序，键名排序）
fn shape(node: &TranslationNode) -> Value {
    let mut keys: Vec<&str> = node.items.iter().map(|i| i.key.as_str()).collect();
    keys.sort();
    let mut children: Vec<(String, Value)> = node
        .children
        .iter()
        .map(|c| (c.name.clone(), shape(c)))
        .collect();
    children.sort_by(|a, b| a.0.cmp(&b.0));
    json!({"name": node.name, "keys": keys, "children": children})
}

fn x_then_y() -> TranslationNode {
    merge_all(&[
        TranslationFile::new("x", json!({"a": "1", "b": {"c": "2"}})),
        TranslationFile::new("y", json!({"a": "9"})),
    ])
}

#[test]
fn merge_order_does_not_change_shape() {
    let f1 = TranslationFile::new("en", json!({"a": "A", "menu": {"open": "Open"}, "z": "Z"}));
    let f2 = TranslationFile::new("fr", json!({"menu": {"close": "Fermer", "sub": {"k": "v"}}, "a": "Un"}));

    let forward = merge_all(&[f1.clone(), f2.clone()]);
    let backward = merge_all(&[f2, f1]);
    assert_eq!(shape(&forward), shape(&backward));
    assert_eq!(get_json(&forward, "fr"), get_json(&backward, "fr"));
    assert_eq!(get_json(&forward, "en"), get_json(&backward, "en"));
}

#[test]
fn single_file_round_trip() {
    let content = json!({
        "title": "Hello",
        "menu": {"file": {"open": "Open", "close": "Close"}, "edit": "Edit"},
        "empty": {},
        "unicode": "🚀 翻译 ✨"
    });
    let tree = merge_all(&[TranslationFile::new("en.json", content.clone())]);
    assert_eq!(get_json(&tree, "en.json"), content);
}

#[test]
fn sparse_export_fills_missing_with_null() {
    let tree = x_then_y();
    assert_eq!(get_json(&tree, "y"), json!({"a": "9", "b": {"c": null}}));
    assert_eq!(get_json(&tree, "x"), json!({"a": "1", "b": {"c": "2"}}));
}

#[test]
fn remove_file_strips_only_that_file() {
    let mut tree = x_then_y();
    remove_file(&mut tree, "x");
    let a = tree.item("a").unwrap();
    assert!(!a.values.contains_key("x"));
    assert_eq!(a.value("y"), Some("9"));
    assert_eq!(get_json(&tree, "x"), json!({"a": null, "b": {"c": null}}));
}

#[test]
fn add_key_is_exportable_for_every_tracked_file() {
    let mut tree = x_then_y();
    let tracked: Vec<String> = tree.tracked_files().into_iter().collect();
    add_key(&mut tree, tracked.as_slice(), "new_key");
    for name in &tracked {
        assert_eq!(get_json(&tree, name)["new_key"], json!(""));
    }
}

#[test]
fn merging_same_content_twice_is_idempotent() {
    let f = TranslationFile::new("en", json!({"a": "1", "b": {"c": "2", "d": {"e": "3"}}}));
    let once = merge_all(&[f.clone()]);
    let twice = merge_all(&[f.clone(), f]);
    assert_eq!(shape(&once), shape(&twice));
    assert_eq!(twice.item_count(), 3);
    assert_eq!(twice.category_count(), 2);
}
