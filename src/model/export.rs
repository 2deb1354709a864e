//! 导出：从合并后的翻译树重建单个文件的嵌套JSON视图

use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::tree::TranslationNode;

/// 缩进上限（与设置中的范围一致）
pub const MAX_INDENT: usize = 10;

/// 构建 `file_name` 的JSON对象；该文件未提供的键输出为 `null`
pub fn get_json(tree: &TranslationNode, file_name: &str) -> Value {
    Value::Object(build_object(tree, file_name, true))
}

/// 构建写盘用的JSON对象：省略该文件未提供的键，结果只含字符串与对象
pub fn get_file_json(tree: &TranslationNode, file_name: &str) -> Value {
    Value::Object(build_object(tree, file_name, false))
}

fn build_object(node: &TranslationNode, file_name: &str, keep_missing: bool) -> Map<String, Value> {
    let mut out = Map::with_capacity(node.items.len() + node.children.len());
    for item in &node.items {
        let value = match item.value(file_name) {
            Some(s) => Value::String(s.to_string()),
            None if keep_missing => Value::Null,
            None => continue,
        };
        if out.contains_key(&item.key) {
            tracing::warn!("分类 '{}' 中键 '{}' 重名，导出 {} 时后者覆盖前者", node.name, item.key, file_name);
        }
        out.insert(item.key.clone(), value);
    }
    for child in &node.children {
        if out.contains_key(&child.name) {
            tracing::warn!(
                "分类 '{}' 中 '{}' 同时是键和分类，导出 {} 时分类覆盖键值",
                node.name,
                child.name,
                file_name
            );
        }
        out.insert(child.name.clone(), Value::Object(build_object(child, file_name, keep_missing)));
    }
    out
}

/// 序列化为写盘文本（省略缺失的键）；`indent` 为0时输出单行紧凑格式
pub fn to_json_string(
    tree: &TranslationNode,
    file_name: &str,
    indent: usize,
) -> Result<String, serde_json::Error> {
    let value = get_file_json(tree, file_name);
    if indent == 0 {
        return serde_json::to_string(&value);
    }

    let spaces = " ".repeat(indent.min(MAX_INDENT));
    let formatter = serde_json::ser::PrettyFormatter::with_indent(spaces.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
