//! 多语言翻译文件合并库
//! 
//! 将多个语言的JSON文件按键名合并为一棵统一的翻译树，支持结构编辑，
//! 并可从树中重新导出任一语言文件

pub mod config;
pub mod model;
pub mod utils;

// 重新导出主要类型
pub use config::Settings;
pub use model::data_core::{AppState, AppError};
pub use model::export::{get_file_json, get_json, to_json_string};
pub use model::identity::{new_id, EntryId};
pub use model::merge::{parse, MergeError, ScalarPolicy};
pub use model::tree::{TranslationFile, TranslationItem, TranslationNode};
