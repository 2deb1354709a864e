//! 性能基准测试模块
//!
//! 用于测试多语言文件合并与导出在大规模键集合上的耗时

use std::time::Instant;

use serde_json::{json, Map, Value};

use crate::model::export::{get_json, to_json_string};
use crate::model::merge::{parse, ScalarPolicy};
use crate::model::tree::{TranslationFile, TranslationNode};

/// 性能测试结果
#[derive(Debug)]
pub struct PerformanceResult {
    pub operation: String,
    pub duration_ms: u128,
    pub success: bool,
    pub details: String,
}

impl PerformanceResult {
    pub fn new(operation: &str, duration_ms: u128, success: bool, details: &str) -> Self {
        Self {
            operation: operation.to_string(),
            duration_ms,
            success,
            details: details.to_string(),
        }
    }
}

/// 生成语言文件：每层 `width` 个键，其中每隔三个键为一个嵌套分类
pub fn generate_locale_json(depth: usize, width: usize, lang: &str) -> Value {
    fn create_category(current_depth: usize, max_depth: usize, width: usize, lang: &str) -> Value {
        let mut obj = Map::new();
        for i in 0..width {
            let key = format!("field_{}", i);
            let value = if i % 3 == 2 && current_depth < max_depth {
                create_category(current_depth + 1, max_depth, width, lang)
            } else {
                json!(format!("{}_{}_{}", lang, current_depth, i))
            };
            obj.insert(key, value);
        }
        Value::Object(obj)
    }

    create_category(0, depth, width, lang)
}

/// 测试一组文件依次合并的耗时
pub fn benchmark_merge(files: &[TranslationFile]) -> (Option<TranslationNode>, PerformanceResult) {
    let mut tree = None;
    let start = Instant::now();
    let mut failure = None;
    for file in files {
        if let Err(e) = parse(&mut tree, file, "Default", ScalarPolicy::Reject) {
            failure = Some(format!("合并 {} 失败: {}", file.name, e));
            break;
        }
    }
    let duration = start.elapsed();

    let result = match (&failure, &tree) {
        (Some(msg), _) => PerformanceResult::new("合并", duration.as_millis(), false, msg),
        (None, Some(root)) => PerformanceResult::new(
            "合并",
            duration.as_millis(),
            true,
            &format!(
                "合并了 {} 个文件，{} 个分类，{} 个键",
                files.len(),
                root.category_count(),
                root.item_count()
            ),
        ),
        (None, None) => PerformanceResult::new("合并", duration.as_millis(), false, "没有输入文件"),
    };
    (tree, result)
}

/// 测试单个文件导出（构建对象并序列化）的耗时
pub fn benchmark_export(tree: &TranslationNode, file_name: &str, indent: usize) -> PerformanceResult {
    let start = Instant::now();
    let value = get_json(tree, file_name);
    let text = to_json_string(tree, file_name, indent);
    let duration = start.elapsed();

    match text {
        Ok(text) => PerformanceResult::new(
            &format!("导出: {}", file_name),
            duration.as_millis(),
            value.is_object(),
            &format!("导出了 {} 字符", text.len()),
        ),
        Err(e) => PerformanceResult::new(
            &format!("导出: {}", file_name),
            duration.as_millis(),
            false,
            &format!("导出失败: {}", e),
        ),
    }
}

/// 运行综合性能测试
pub fn run_performance_suite() -> Vec<PerformanceResult> {
    let mut results = Vec::new();

    let test_cases = [
        (2, 10), // 小型：深度2，宽度10
        (3, 20), // 中型：深度3，宽度20
        (3, 30), // 大型：深度3，宽度30
    ];

    for (depth, width) in test_cases {
        tracing::info!("测试规模：深度{}，宽度{}", depth, width);

        let start = Instant::now();
        let files: Vec<TranslationFile> = ["en", "fr", "de"]
            .iter()
            .map(|lang| {
                TranslationFile::new(format!("{}.json", lang), generate_locale_json(depth, width, lang))
            })
            .collect();
        results.push(PerformanceResult::new(
            &format!("数据生成({}x{})", depth, width),
            start.elapsed().as_millis(),
            true,
            &format!("生成了 {} 个语言文件", files.len()),
        ));

        let (tree, merge_result) = benchmark_merge(&files);
        results.push(merge_result);

        if let Some(tree) = tree {
            for file in &files {
                results.push(benchmark_export(&tree, &file.name, 2));
            }
        }
    }

    results
}
