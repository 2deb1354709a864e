//! 设置：根分类名称、导出缩进与非法值处理策略（TOML）

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::data_core::AppError;
use crate::model::export::MAX_INDENT;
use crate::model::merge::ScalarPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// 首次合并时创建的根分类名称
    pub default_root_name: String,
    /// 导出缩进空格数（0-10，0为紧凑单行）
    pub indent: usize,
    pub scalar_policy: ScalarPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_root_name: "Default".to_string(),
            indent: 2,
            scalar_policy: ScalarPolicy::Reject,
        }
    }
}

impl Settings {
    /// 读取设置文件；文件不存在时返回默认值
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            tracing::info!("设置文件不存在，使用默认设置: {}", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let mut settings: Settings =
            toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;
        if settings.indent > MAX_INDENT {
            tracing::warn!("缩进 {} 超出范围，已调整为 {}", settings.indent, MAX_INDENT);
            settings.indent = MAX_INDENT;
        }
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let content = toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}
