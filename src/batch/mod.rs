//! # 批量处理模块
//!
//! 提供路径发现与并行批量执行能力。
//!
//! ## 功能
//! - 按 glob 模式发现文件/目录
//! - 并行处理（固定大小线程池）
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `jobs/`, `commands/` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::{discover, discover_dirs, discover_files, recursive};
pub use runner::{BatchResult, BatchRunner, ProcessResult};
