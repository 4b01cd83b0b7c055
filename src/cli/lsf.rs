//! # lsf 子命令 CLI 定义
//!
//! 为匹配的计算目录生成 CASTEP LSF 提交脚本
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/lsf.rs`

use crate::scripts::lsf::{LsfConfig, DEFAULT_SCRIPT_NAME};

use clap::Args;
use std::path::PathBuf;

/// lsf 子命令参数
#[derive(Args, Debug)]
pub struct LsfArgs {
    /// Glob pattern selecting job directories (matched at any depth)
    pub keyword: String,

    /// Working root to search under
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Script file name written into each directory
    #[arg(long, default_value = DEFAULT_SCRIPT_NAME)]
    pub script_name: String,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, env = "ADSPREP_JOBS", default_value_t = 0)]
    pub jobs: usize,

    // ─────────────────────────────────────────────────────────────
    // LSF options
    // ─────────────────────────────────────────────────────────────
    /// APP_NAME queue identity
    #[arg(long, default_value = "intelY_mid")]
    pub app_name: String,

    /// Total process count (NP)
    #[arg(long, default_value_t = 12)]
    pub np: u32,

    /// Processes per node (NP_PER_NODE)
    #[arg(long, default_value_t = 12)]
    pub np_per_node: u32,

    /// OMP_NUM_THREADS
    #[arg(long, default_value_t = 1)]
    pub omp_threads: u32,

    /// RUN mode
    #[arg(long, default_value = "RAW")]
    pub run_mode: String,

    /// RunCASTEP.sh location
    #[arg(
        long,
        default_value = "/home-yw/Soft/msi/MS70/MaterialsStudio7.0/etc/CASTEP/bin/RunCASTEP.sh"
    )]
    pub castep_script: String,
}

impl LsfArgs {
    pub fn lsf_config(&self) -> LsfConfig {
        LsfConfig {
            app_name: self.app_name.clone(),
            np: self.np,
            np_per_node: self.np_per_node,
            omp_num_threads: self.omp_threads,
            run_mode: self.run_mode.clone(),
            castep_script: self.castep_script.clone(),
        }
    }
}
