//! # model 子命令 CLI 定义
//!
//! 为分子 × 位点 × 晶格目录的全部组合生成吸附模型
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/model.rs`

use clap::Args;
use std::path::PathBuf;

/// model 子命令参数
#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Glob pattern selecting lattice directories (matched at any depth)
    #[arg(short, long, required_unless_present = "rerun")]
    pub lattice: Option<String>,

    /// Glob pattern selecting molecule files (matched at any depth)
    #[arg(short, long, default_value = "*.msi")]
    pub molecule: String,

    /// Molecule z coordinate above the lattice
    #[arg(long, default_value_t = 1.54221)]
    pub mol_z: f64,

    /// Working root; every other path is resolved against it
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Directory holding molecule models, relative to root
    #[arg(long, default_value = "graphdiyne/molecules_models")]
    pub molecule_dir: PathBuf,

    /// Directory holding lattice models, relative to root
    #[arg(long, default_value = "msi_models")]
    pub lattice_dir: PathBuf,

    /// External assembly program, called once per structure file
    #[arg(long, env = "ADSPREP_ASSEMBLER", default_value = "msi_assemble")]
    pub assembler: String,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, env = "ADSPREP_JOBS", default_value_t = 0)]
    pub jobs: usize,

    /// CSV file receiving failed jobs, relative to root
    #[arg(long, default_value = "failed_jobs.csv")]
    pub failures: PathBuf,

    /// Re-run only the jobs listed in a failure CSV
    #[arg(long)]
    pub rerun: Option<PathBuf>,

    /// Only enumerate jobs, do not call the assembler
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
