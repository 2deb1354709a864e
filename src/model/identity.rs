//! 条目标识生成：为分类与键分配进程内唯一、创建后不变的ID

use std::fmt;

use uuid::Uuid;

/// 分类/键的不透明标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(String);

impl EntryId {
    /// 由外部保存的文本恢复ID（如命令行参数）
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 生成新的标识（UUID v4）
pub fn new_id() -> EntryId {
    EntryId(Uuid::new_v4().to_string())
}
