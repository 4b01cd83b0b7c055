//! # 批量执行器
//!
//! 并行执行批量处理任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 每项任务返回结果值，错误不跨越线程池边界
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `jobs/executor.rs`, `commands/lsf.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{AdsprepError, Result};
use crate::utils::progress;

use rayon::prelude::*;

/// 单项任务处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessResult<K> {
    /// 处理成功
    Success(K),
    /// 跳过（如没有可处理的输入）
    Skipped(K),
    /// 处理失败
    Failed(K, String), // (任务标识, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug)]
pub struct BatchResult<K> {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(K, String)>,
}

impl<K> Default for BatchResult<K> {
    fn default() -> Self {
        Self {
            success: 0,
            skipped: 0,
            failed: 0,
            failures: Vec::new(),
        }
    }
}

impl<K> BatchResult<K> {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult<K>) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(key, err) => {
                self.failed += 1;
                self.failures.push((key, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }

    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 进度条标签
    label: String,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = 自动使用全部 CPU）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            label: "Processing".to_string(),
        }
    }

    /// 设置进度条标签
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理任务列表
    ///
    /// 结果以任务完成顺序汇总，不保证与输入顺序一致。
    pub fn run<T, K, F>(&self, items: &[T], processor: F) -> Result<BatchResult<K>>
    where
        T: Sync,
        K: Send,
        F: Fn(&T) -> ProcessResult<K> + Sync + Send,
    {
        let pb = progress::create_progress_bar(items.len() as u64, &self.label);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| AdsprepError::ThreadPool(e.to_string()))?;

        let results: Vec<ProcessResult<K>> = pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let result = processor(item);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}
