//! IO helper: 读取翻译文件、写出导出结果

use std::{fs::File, io::BufReader, path::Path};

use serde_json::Value;
use crate::model::data_core::AppError;
use crate::model::tree::TranslationFile;

/// 从文件读取JSON数据
pub fn read_json_file(p: &Path) -> Result<Value, AppError> {
    let f = File::open(p)?;
    let rdr = BufReader::new(f);
    let v: Value = serde_json::from_reader(rdr)?;
    Ok(v)
}

/// 读取翻译文件；文件名（不含目录）作为关联键
pub fn read_translation_file(p: &Path) -> Result<TranslationFile, AppError> {
    let name = p
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::State(format!("无效的文件路径: {}", p.display())))?;
    let content = read_json_file(p)?;
    Ok(TranslationFile::new(name, content))
}

/// 将已序列化的JSON文本写入文件
pub fn write_json_text(p: &Path, text: &str) -> Result<(), AppError> {
    std::fs::write(p, text)?;
    Ok(())
}
