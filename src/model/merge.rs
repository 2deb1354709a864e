//! 合并引擎：把单个文件的JSON对象按名称折叠进共享的翻译树
//!
//! 字符串成为键的值，嵌套对象成为分类；其他类型由 [`ScalarPolicy`] 决定。
//! 在 `Reject` 策略下先完整校验再修改，失败时树保持原样。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::tree::{TranslationFile, TranslationNode};

/// 非字符串/非对象值（数字、布尔、null、数组）的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarPolicy {
    /// 返回 `MalformedInput`，不修改树
    #[default]
    Reject,
    /// 忽略该值
    Skip,
    /// 以紧凑JSON文本作为字符串值保存
    Coerce,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[error("文件内容必须是JSON对象，实际为{found}")]
    NotAnObject { found: &'static str },
    #[error("不支持的值类型{found}（位置: {path}）")]
    MalformedInput { path: String, found: &'static str },
}

#[derive(Debug, Default)]
struct MergeStats {
    categories_created: usize,
    items_created: usize,
    values_set: usize,
    skipped: usize,
}

/// 把 `file` 合并进 `tree`；树不存在时以 `default_root_name` 创建根分类
pub fn parse<'t>(
    tree: &'t mut Option<TranslationNode>,
    file: &TranslationFile,
    default_root_name: &str,
    policy: ScalarPolicy,
) -> Result<&'t mut TranslationNode, MergeError> {
    let Value::Object(map) = &file.content else {
        return Err(MergeError::NotAnObject {
            found: kind_name(&file.content),
        });
    };

    if policy == ScalarPolicy::Reject {
        validate(map, "$")?;
    }

    let root = tree.get_or_insert_with(|| TranslationNode::new(default_root_name));
    let mut stats = MergeStats::default();
    merge_object(root, map, &file.name, policy, "$", &mut stats);

    tracing::debug!(
        "合并文件 {}: 新建分类 {}，新建键 {}，写入值 {}，跳过 {}",
        file.name,
        stats.categories_created,
        stats.items_created,
        stats.values_set,
        stats.skipped
    );
    Ok(root)
}

/// 递归检查内容是否只包含字符串与嵌套对象
fn validate(map: &Map<String, Value>, path: &str) -> Result<(), MergeError> {
    for (name, value) in map {
        match value {
            Value::String(_) => {}
            Value::Object(nested) => validate(nested, &field_path(path, name))?,
            other => {
                return Err(MergeError::MalformedInput {
                    path: field_path(path, name),
                    found: kind_name(other),
                })
            }
        }
    }
    Ok(())
}

fn merge_object(
    node: &mut TranslationNode,
    map: &Map<String, Value>,
    file_name: &str,
    policy: ScalarPolicy,
    path: &str,
    stats: &mut MergeStats,
) {
    for (name, value) in map {
        match value {
            Value::String(s) => set_item_value(node, name, file_name, s.clone(), stats),
            Value::Object(nested) => {
                let before = node.children.len();
                let child = node.find_or_create_child(name);
                merge_object(child, nested, file_name, policy, &field_path(path, name), stats);
                if node.children.len() > before {
                    stats.categories_created += 1;
                }
            }
            // Reject 已在 validate 中处理
            other => match policy {
                ScalarPolicy::Coerce => {
                    set_item_value(node, name, file_name, other.to_string(), stats)
                }
                ScalarPolicy::Skip | ScalarPolicy::Reject => {
                    tracing::warn!(
                        "跳过{}值: {} (文件 {})",
                        kind_name(other),
                        field_path(path, name),
                        file_name
                    );
                    stats.skipped += 1;
                }
            },
        }
    }
}

fn set_item_value(
    node: &mut TranslationNode,
    key: &str,
    file_name: &str,
    value: String,
    stats: &mut MergeStats,
) {
    let before = node.items.len();
    node.find_or_create_item(key)
        .values
        .insert(file_name.to_string(), value);
    if node.items.len() > before {
        stats.items_created += 1;
    }
    stats.values_set += 1;
}

/// JSON值类型的可读名称
pub fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
    }
}

/// 拼接JSONPath字段段；含特殊字符时使用 bracket-notation
pub fn field_path(parent: &str, key: &str) -> String {
    if !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        format!("{}.{}", parent, key)
    } else {
        format!("{}['{}']", parent, key.replace('\'', "\\'"))
    }
}
