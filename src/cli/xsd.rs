//! # to-xsd 子命令 CLI 定义
//!
//! 生成 Materials Studio msi → xsd 批量转换脚本
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/xsd.rs`

use crate::scripts::xsd::DEFAULT_SCRIPT_NAME;

use clap::Args;
use std::path::PathBuf;

/// to-xsd 子命令参数
#[derive(Args, Debug)]
pub struct XsdArgs {
    /// Glob pattern selecting directories to scan for .msi files
    pub dir_pattern: String,

    /// Working root; identifiers are relative to it
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Script file name, written under root
    #[arg(short, long, default_value = DEFAULT_SCRIPT_NAME)]
    pub output: PathBuf,
}
