//! 表格视图：把翻译树展开成按深度排列的行，供终端展示统一的键值表

use crate::model::identity::EntryId;
use crate::model::merge::field_path;
use crate::model::tree::TranslationNode;

/// 预览截断长度（字符数）
const PREVIEW_CHARS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Category,
    Key,
}

#[derive(Debug, Clone)]
pub struct TableRow {
    pub id: EntryId,
    /// 分类名或键名
    pub name: String,
    /// JSONPath（根分类为 `$`）
    pub path: String,
    pub kind: RowKind,
    pub depth: u32,
    /// 与传入文件顺序一致的值；分类行为空
    pub values: Vec<Option<String>>,
    /// 是否可见（用于搜索过滤）
    pub visible: bool,
}

/// 深度优先展开：每个分类先列出自己的键，再列出子分类
pub fn build_table<S: AsRef<str>>(tree: &TranslationNode, files: &[S]) -> Vec<TableRow> {
    let mut out = Vec::with_capacity(tree.item_count() + tree.category_count() + 1);

    fn walk<S: AsRef<str>>(
        out: &mut Vec<TableRow>,
        node: &TranslationNode,
        path: &str,
        depth: u32,
        files: &[S],
    ) {
        out.push(TableRow {
            id: node.id.clone(),
            name: node.name.clone(),
            path: path.to_string(),
            kind: RowKind::Category,
            depth,
            values: Vec::new(),
            visible: true,
        });
        for item in &node.items {
            out.push(TableRow {
                id: item.id.clone(),
                name: item.key.clone(),
                path: field_path(path, &item.key),
                kind: RowKind::Key,
                depth: depth + 1,
                values: files
                    .iter()
                    .map(|f| item.value(f.as_ref()).map(str::to_string))
                    .collect(),
                visible: true,
            });
        }
        for child in &node.children {
            walk(out, child, &field_path(path, &child.name), depth + 1, files);
        }
    }

    walk(&mut out, tree, "$", 0, files);
    out
}

/// 只保留路径或名称包含 `filter` 的行；空过滤条件显示全部
pub fn apply_filter(rows: &mut [TableRow], filter: &str) {
    let filter = filter.trim();
    for row in rows {
        row.visible = filter.is_empty() || row.path.contains(filter) || row.name.contains(filter);
    }
}

/// 单元格预览：过长文本截断，缺失值显示为 `-`
pub fn preview(value: Option<&str>) -> String {
    match value {
        None => "-".to_string(),
        Some(s) => {
            let s = s.trim();
            if s.chars().count() > PREVIEW_CHARS {
                let truncated: String = s.chars().take(PREVIEW_CHARS).collect();
                format!("\"{}...\"", truncated)
            } else {
                format!("\"{}\"", s)
            }
        }
    }
}

/// 渲染为制表符分隔的文本，每行缩进表示层级
pub fn render<S: AsRef<str>>(rows: &[TableRow], files: &[S]) -> String {
    let mut out = String::new();
    out.push_str("key");
    for f in files {
        out.push('\t');
        out.push_str(f.as_ref());
    }
    out.push('\n');

    for row in rows.iter().filter(|r| r.visible) {
        out.push_str(&"  ".repeat(row.depth as usize));
        match row.kind {
            RowKind::Category => {
                out.push('[');
                out.push_str(&row.name);
                out.push(']');
            }
            RowKind::Key => {
                out.push_str(&row.name);
                for v in &row.values {
                    out.push('\t');
                    out.push_str(&preview(v.as_deref()));
                }
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::merge::{parse, ScalarPolicy};
    use crate::model::tree::TranslationFile;
    use serde_json::json;

    fn merged() -> TranslationNode {
        let mut tree = None;
        let en = TranslationFile::new("en", json!({"title": "Hello", "menu": {"open": "Open"}}));
        let fr = TranslationFile::new("fr", json!({"title": "Bonjour", "key with spaces": "x"}));
        parse(&mut tree, &en, "Default", ScalarPolicy::Reject).unwrap();
        parse(&mut tree, &fr, "Default", ScalarPolicy::Reject).unwrap();
        tree.unwrap()
    }

    #[test]
    fn test_rows_in_depth_first_order() {
        let tree = merged();
        let rows = build_table(&tree, &["en", "fr"]);
        let paths: Vec<&str> = rows.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["$", "$.title", "$['key with spaces']", "$.menu", "$.menu.open"]
        );
        assert_eq!(rows[0].kind, RowKind::Category);
        assert_eq!(rows[4].depth, 2);
    }

    #[test]
    fn test_row_values_follow_file_order() {
        let tree = merged();
        let rows = build_table(&tree, &["fr", "en"]);
        assert_eq!(rows[1].values, vec![Some("Bonjour".into()), Some("Hello".into())]);
        assert_eq!(rows[2].values, vec![Some("x".into()), None]);
        assert!(rows[3].values.is_empty(), "分类行没有值");
    }

    #[test]
    fn test_filter_and_render() {
        let tree = merged();
        let files = ["en", "fr"];
        let mut rows = build_table(&tree, &files);
        apply_filter(&mut rows, "open");
        let visible: Vec<&str> = rows.iter().filter(|r| r.visible).map(|r| r.name.as_str()).collect();
        assert_eq!(visible, vec!["open"]);

        let text = render(&rows, &files);
        assert_eq!(text, "key\ten\tfr\n    open\t\"Open\"\t-\n");

        apply_filter(&mut rows, "  ");
        assert!(rows.iter().all(|r| r.visible));
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "a".repeat(40);
        let p = preview(Some(&long));
        assert!(p.ends_with("...\""));
        assert_eq!(preview(Some("短文本")), "\"短文本\"");
        assert_eq!(preview(None), "-");
    }
}
