//! # 路径发现
//!
//! 在根目录下按 glob 模式查找文件或目录。
//!
//! ## 功能
//! - 相对根目录的 glob 匹配（`*` 不跨越 `/`，`**` 跨越多级目录）
//! - 可同时匹配文件与目录
//! - 根目录不存在时返回空结果
//!
//! ## 依赖关系
//! - 被 `jobs/`, `commands/` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 解析匹配模式

use crate::error::{AdsprepError, Result};

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// 将模式转换为“任意深度匹配”形式
pub fn recursive(pattern: &str) -> String {
    if pattern.starts_with("**/") {
        pattern.to_string()
    } else {
        format!("**/{}", pattern)
    }
}

/// 查找 `root` 下相对路径匹配 `pattern` 的所有路径
///
/// 返回的路径以 `root` 为前缀，顺序为按文件名排序的深度优先遍历顺序。
/// `root` 本身从不参与匹配。
pub fn discover(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Pattern::new(pattern).map_err(|e| AdsprepError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let paths = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .map(|rel| matcher.matches_path_with(rel, MATCH_OPTIONS))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    Ok(paths)
}

/// 仅保留普通文件
pub fn discover_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    Ok(discover(root, pattern)?
        .into_iter()
        .filter(|p| p.is_file())
        .collect())
}

/// 仅保留目录
pub fn discover_dirs(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    Ok(discover(root, pattern)?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect())
}
