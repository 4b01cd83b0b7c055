//! # 作业执行器
//!
//! 对每个候选作业，在其晶格目录中查找结构文件，并逐个调用组装程序。
//!
//! ## 功能
//! - 在派发前为每个晶格目录固定结构文件列表
//! - 每个作业构造一次组装上下文
//! - 并行执行，单个作业失败不影响其他作业
//!
//! ## 依赖关系
//! - 被 `commands/model.rs` 调用
//! - 使用 `batch/` 的路径发现与并行执行器
//! - 使用 `jobs/assembler.rs` 的组装接口

use super::{Assembler, AssemblyContext, CandidateJob, ModelFactory};
use crate::batch::{self, BatchResult, BatchRunner, ProcessResult};
use crate::error::{AdsprepError, Result};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 晶格目录中结构文件的匹配模式
pub const STRUCTURE_PATTERN: &str = "**/*.msi";

/// 作业执行器
pub struct JobExecutor<'a, A: Assembler> {
    assembler: &'a A,
    runner: BatchRunner,
}

impl<'a, A: Assembler> JobExecutor<'a, A> {
    pub fn new(assembler: &'a A, runner: BatchRunner) -> Self {
        Self { assembler, runner }
    }

    /// 并行执行全部作业并汇总结果
    ///
    /// 结构文件在派发前按晶格目录收集一次，批处理期间新写出的文件
    /// 不会成为其他作业的输入。
    pub fn execute(&self, jobs: &[CandidateJob], mol_z: f64) -> Result<BatchResult<CandidateJob>> {
        let structures = snapshot_structures(jobs)?;

        self.runner.run(jobs, |job| {
            let files = structures
                .get(&job.lattice_dir)
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            if files.is_empty() {
                return ProcessResult::Skipped(job.clone());
            }

            match self.run_job(job, mol_z, files) {
                Ok(()) => ProcessResult::Success(job.clone()),
                Err(e) => ProcessResult::Failed(job.clone(), e.to_string()),
            }
        })
    }

    /// 对单个作业的全部结构文件执行组装，遇到第一个错误即停止
    fn run_job(&self, job: &CandidateJob, mol_z: f64, files: &[PathBuf]) -> Result<()> {
        let context = AssemblyContext {
            molecule: job.molecule.clone(),
            mol_z,
            lattice_dir: job.lattice_dir.clone(),
            site: job.site,
        };

        let mut factory = self.assembler.construct(&context)?;
        for file in files {
            factory
                .assemble(file)
                .map_err(|e| AdsprepError::AssemblyFailed {
                    structure: file.display().to_string(),
                    reason: e.to_string(),
                })?;
        }

        Ok(())
    }
}

/// 为每个不同的晶格目录收集结构文件
fn snapshot_structures(jobs: &[CandidateJob]) -> Result<HashMap<PathBuf, Vec<PathBuf>>> {
    let mut structures = HashMap::new();
    for job in jobs {
        if !structures.contains_key(&job.lattice_dir) {
            let files = structure_files(&job.lattice_dir)?;
            structures.insert(job.lattice_dir.clone(), files);
        }
    }
    Ok(structures)
}

/// 晶格目录中的全部结构文件
pub fn structure_files(lattice_dir: &Path) -> Result<Vec<PathBuf>> {
    batch::discover_files(lattice_dir, STRUCTURE_PATTERN)
}
