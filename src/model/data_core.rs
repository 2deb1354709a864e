//! AppState：应用核心状态，跟踪已加载的文件并维护合并后的翻译树

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::config::Settings;
use crate::model::export::{get_json, to_json_string};
use crate::model::file_ops;
use crate::model::identity::EntryId;
use crate::model::merge::{parse, MergeError};
use crate::model::table_view::{build_table, TableRow};
use crate::model::tree::{TranslationFile, TranslationNode};
use crate::utils::fs::{read_translation_file, write_json_text};

#[derive(Debug, Default)]
pub struct AppState {
    pub settings: Settings,
    /// 已跟踪的文件名（按加载顺序）
    pub files: Vec<String>,
    pub tree: Option<TranslationNode>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON解析失败: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("内容不合法: {0}")]
    Merge(#[from] MergeError),
    #[error("设置错误: {0}")]
    Config(String),
    #[error("状态错误: {0}")]
    State(String),
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn is_tracked(&self, file_name: &str) -> bool {
        self.files.iter().any(|f| f == file_name)
    }

    /// 合并一个文件；同名文件已跟踪时忽略并返回 `false`
    pub fn add_file(&mut self, file: TranslationFile) -> Result<bool, AppError> {
        if self.is_tracked(&file.name) {
            tracing::info!("文件已加载，忽略: {}", file.name);
            return Ok(false);
        }
        parse(
            &mut self.tree,
            &file,
            &self.settings.default_root_name,
            self.settings.scalar_policy,
        )?;
        tracing::info!("文件已合并: {}", file.name);
        self.files.push(file.name);
        Ok(true)
    }

    /// 从磁盘读取并合并
    pub fn load_file(&mut self, p: &Path) -> Result<bool, AppError> {
        let file = read_translation_file(p)?;
        self.add_file(file)
    }

    /// 移除文件的全部值；移除最后一个文件时丢弃整棵树
    pub fn remove_file(&mut self, file_name: &str) -> bool {
        let Some(pos) = self.files.iter().position(|f| f == file_name) else {
            return false;
        };
        self.files.remove(pos);
        if self.files.is_empty() {
            self.tree = None;
            tracing::info!("最后一个文件已移除，翻译树已清空");
        } else if let Some(tree) = self.tree.as_mut() {
            file_ops::remove_file(tree, file_name);
            tracing::info!("文件已移除: {}", file_name);
        }
        true
    }

    fn tree_mut(&mut self) -> Result<&mut TranslationNode, AppError> {
        self.tree
            .as_mut()
            .ok_or_else(|| AppError::State("尚未加载任何文件".into()))
    }

    fn tree(&self) -> Result<&TranslationNode, AppError> {
        self.tree
            .as_ref()
            .ok_or_else(|| AppError::State("尚未加载任何文件".into()))
    }

    pub fn root_id(&self) -> Option<EntryId> {
        self.tree.as_ref().map(|t| t.id.clone())
    }

    /// 在指定分类下新增键，返回新键的ID
    pub fn add_key(&mut self, category_id: &EntryId, key: &str) -> Result<EntryId, AppError> {
        let files = self.files.clone();
        let category = self
            .tree_mut()?
            .find_node_mut(category_id)
            .ok_or_else(|| AppError::State(format!("分类不存在: {}", category_id)))?;
        Ok(file_ops::add_key(category, files.as_slice(), key).id.clone())
    }

    /// 按ID删除键或分类（根分类不可删除）
    pub fn remove_entry(&mut self, id: &EntryId) -> bool {
        let Some(parent) = self.tree.as_mut().and_then(|t| t.find_parent_mut(id)) else {
            return false;
        };
        file_ops::remove_key(parent, id).is_some() || file_ops::remove_category(parent, id).is_some()
    }

    /// 按ID重命名键或分类
    pub fn rename_entry(&mut self, id: &EntryId, new_name: &str) -> bool {
        let Some(tree) = self.tree.as_mut() else {
            return false;
        };
        if &tree.id == id {
            tree.name = new_name.to_string();
            return true;
        }
        match tree.find_parent_mut(id) {
            Some(parent) => {
                file_ops::rename_key(parent, id, new_name)
                    || file_ops::rename_category(parent, id, new_name)
            }
            None => false,
        }
    }

    /// 编辑某个键在某个文件中的值
    pub fn set_value(&mut self, item_id: &EntryId, file_name: &str, value: &str) -> Result<(), AppError> {
        if !self.is_tracked(file_name) {
            return Err(AppError::State(format!("文件未加载: {}", file_name)));
        }
        let item = self
            .tree_mut()?
            .find_item_mut(item_id)
            .ok_or_else(|| AppError::State(format!("键不存在: {}", item_id)))?;
        file_ops::set_value(item, file_name, value);
        Ok(())
    }

    /// 某个文件当前的JSON视图
    pub fn export_json(&self, file_name: &str) -> Result<Value, AppError> {
        self.ensure_tracked(file_name)?;
        Ok(get_json(self.tree()?, file_name))
    }

    /// 按设置中的缩进序列化某个文件；该文件未提供的键不输出
    pub fn export_file(&self, file_name: &str) -> Result<String, AppError> {
        self.ensure_tracked(file_name)?;
        Ok(to_json_string(self.tree()?, file_name, self.settings.indent)?)
    }

    /// 将某个文件的导出结果保存到指定路径
    pub fn save_file(&self, file_name: &str, path: &Path) -> Result<(), AppError> {
        let text = self.export_file(file_name)?;
        write_json_text(path, &text)?;
        tracing::info!("已导出 {} 到: {}", file_name, path.display());
        Ok(())
    }

    /// 当前树的表格行（列顺序与 `files` 一致）
    pub fn table(&self) -> Vec<TableRow> {
        match &self.tree {
            Some(tree) => build_table(tree, self.files.as_slice()),
            None => Vec::new(),
        }
    }

    fn ensure_tracked(&self, file_name: &str) -> Result<(), AppError> {
        if self.is_tracked(file_name) {
            Ok(())
        } else {
            Err(AppError::State(format!("文件未加载: {}", file_name)))
        }
    }
}
