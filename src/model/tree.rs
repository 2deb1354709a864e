//! 翻译树：分类（TranslationNode）与键（TranslationItem）组成的层级模型
//!
//! 每个键按文件名保存稀疏的翻译值；文件本身只以名称出现在树中。

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::model::identity::{new_id, EntryId};

/// 翻译键（叶子）
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationItem {
    pub id: EntryId,
    pub key: String,
    /// 文件名 -> 翻译值；只包含提供过该键的文件
    pub values: BTreeMap<String, String>,
}

impl TranslationItem {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            key: key.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn value(&self, file_name: &str) -> Option<&str> {
        self.values.get(file_name).map(String::as_str)
    }
}

/// 翻译分类（对应一个嵌套的JSON对象）
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationNode {
    pub id: EntryId,
    pub name: String,
    pub children: Vec<TranslationNode>,
    pub items: Vec<TranslationItem>,
}

/// 外部文件描述：名称是所有 `values` 的关联键
#[derive(Debug, Clone)]
pub struct TranslationFile {
    pub name: String,
    pub content: Value,
}

impl TranslationFile {
    pub fn new(name: impl Into<String>, content: Value) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

impl TranslationNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            children: Vec::new(),
            items: Vec::new(),
        }
    }

    /// 按名称查找子分类，不存在则追加一个新的（首个匹配优先）
    pub fn find_or_create_child(&mut self, name: &str) -> &mut TranslationNode {
        let pos = match self.children.iter().position(|c| c.name == name) {
            Some(pos) => pos,
            None => {
                self.children.push(TranslationNode::new(name));
                self.children.len() - 1
            }
        };
        &mut self.children[pos]
    }

    /// 按键名查找条目，不存在则追加一个空值条目（首个匹配优先）
    pub fn find_or_create_item(&mut self, key: &str) -> &mut TranslationItem {
        let pos = match self.items.iter().position(|i| i.key == key) {
            Some(pos) => pos,
            None => {
                self.items.push(TranslationItem::new(key));
                self.items.len() - 1
            }
        };
        &mut self.items[pos]
    }

    pub fn child(&self, name: &str) -> Option<&TranslationNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn item(&self, key: &str) -> Option<&TranslationItem> {
        self.items.iter().find(|i| i.key == key)
    }

    /// 在整棵子树中按ID查找分类（包括自身）
    pub fn find_node(&self, id: &EntryId) -> Option<&TranslationNode> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_node(id))
    }

    pub fn find_node_mut(&mut self, id: &EntryId) -> Option<&mut TranslationNode> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_node_mut(id))
    }

    pub fn find_item(&self, id: &EntryId) -> Option<&TranslationItem> {
        if let Some(item) = self.items.iter().find(|i| &i.id == id) {
            return Some(item);
        }
        self.children.iter().find_map(|c| c.find_item(id))
    }

    pub fn find_item_mut(&mut self, id: &EntryId) -> Option<&mut TranslationItem> {
        if let Some(pos) = self.items.iter().position(|i| &i.id == id) {
            return Some(&mut self.items[pos]);
        }
        self.children.iter_mut().find_map(|c| c.find_item_mut(id))
    }

    /// 查找直接拥有该ID（子分类或键）的分类
    pub fn find_parent_mut(&mut self, id: &EntryId) -> Option<&mut TranslationNode> {
        let owns = self.children.iter().any(|c| &c.id == id)
            || self.items.iter().any(|i| &i.id == id);
        if owns {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_parent_mut(id))
    }

    /// 树中出现过的全部文件名
    pub fn tracked_files(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        fn walk(node: &TranslationNode, out: &mut BTreeSet<String>) {
            for item in &node.items {
                out.extend(item.values.keys().cloned());
            }
            for child in &node.children {
                walk(child, out);
            }
        }
        walk(self, &mut out);
        out
    }

    /// 子树中的分类数量（不含自身）
    pub fn category_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.category_count())
            .sum()
    }

    /// 子树中的键数量
    pub fn item_count(&self) -> usize {
        self.items.len() + self.children.iter().map(|c| c.item_count()).sum::<usize>()
    }
}
