//! 文件范围与结构编辑操作：新增键、移除文件的值、删除/重命名条目
//!
//! 这些操作都不会失败；目标不存在时为空操作。

use crate::model::identity::EntryId;
use crate::model::tree::{TranslationItem, TranslationNode};

/// 在 `target` 下新增键，并为每个已跟踪文件写入空字符串
pub fn add_key<'n, S: AsRef<str>>(
    target: &'n mut TranslationNode,
    tracked_files: &[S],
    key: &str,
) -> &'n mut TranslationItem {
    let mut item = TranslationItem::new(key);
    for name in tracked_files {
        item.values.insert(name.as_ref().to_string(), String::new());
    }
    tracing::debug!("新增键 '{}' 于分类 '{}'", key, target.name);
    target.items.push(item);
    let last = target.items.len() - 1;
    &mut target.items[last]
}

/// 从每个键中删除 `file_name` 的值；分类与键本身保留
pub fn remove_file(tree: &mut TranslationNode, file_name: &str) {
    for item in &mut tree.items {
        item.values.remove(file_name);
    }
    for child in &mut tree.children {
        remove_file(child, file_name);
    }
}

/// 删除 `node` 直接拥有的键
pub fn remove_key(node: &mut TranslationNode, item_id: &EntryId) -> Option<TranslationItem> {
    let pos = node.items.iter().position(|i| &i.id == item_id)?;
    Some(node.items.remove(pos))
}

/// 删除 `parent` 的直接子分类及其整棵子树
pub fn remove_category(parent: &mut TranslationNode, node_id: &EntryId) -> Option<TranslationNode> {
    let pos = parent.children.iter().position(|c| &c.id == node_id)?;
    Some(parent.children.remove(pos))
}

/// 重命名 `parent` 下的子分类；与兄弟同名时不合并，只记录警告
pub fn rename_category(parent: &mut TranslationNode, node_id: &EntryId, new_name: &str) -> bool {
    if parent.children.iter().any(|c| &c.id != node_id && c.name == new_name) {
        tracing::warn!("分类 '{}' 与同级分类重名，未合并", new_name);
    }
    match parent.children.iter_mut().find(|c| &c.id == node_id) {
        Some(node) => {
            node.name = new_name.to_string();
            true
        }
        None => false,
    }
}

/// 重命名 `node` 下的键；与兄弟同名时不合并，只记录警告
pub fn rename_key(node: &mut TranslationNode, item_id: &EntryId, new_key: &str) -> bool {
    if node.items.iter().any(|i| &i.id != item_id && i.key == new_key) {
        tracing::warn!("键 '{}' 在分类 '{}' 中重名，未合并", new_key, node.name);
    }
    match node.items.iter_mut().find(|i| &i.id == item_id) {
        Some(item) => {
            item.key = new_key.to_string();
            true
        }
        None => false,
    }
}

/// 编辑单个单元格
pub fn set_value(item: &mut TranslationItem, file_name: &str, value: impl Into<String>) {
    item.values.insert(file_name.to_string(), value.into());
}
