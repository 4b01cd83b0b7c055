//! # LSF 提交脚本生成
//!
//! 为每个计算目录生成 Materials Studio CASTEP 的 LSF 提交脚本。
//!
//! ## 依赖关系
//! - 被 `commands/lsf.rs` 使用
//! - 无外部模块依赖

use crate::error::{AdsprepError, Result};

use std::fs;
use std::path::{Path, PathBuf};

/// 默认脚本文件名
pub const DEFAULT_SCRIPT_NAME: &str = "MS70_YW_CASTEP.lsf";

/// LSF 作业配置
#[derive(Debug, Clone)]
pub struct LsfConfig {
    pub app_name: String,
    pub np: u32,
    pub np_per_node: u32,
    pub omp_num_threads: u32,
    pub run_mode: String,
    pub castep_script: String,
}

impl Default for LsfConfig {
    fn default() -> Self {
        LsfConfig {
            app_name: "intelY_mid".to_string(),
            np: 12,
            np_per_node: 12,
            omp_num_threads: 1,
            run_mode: "RAW".to_string(),
            castep_script: "/home-yw/Soft/msi/MS70/MaterialsStudio7.0/etc/CASTEP/bin/RunCASTEP.sh"
                .to_string(),
        }
    }
}

/// 由目录名推导作业名：去掉最后一个 `_` 分隔段
///
/// 不含 `_` 的目录名得到空字符串，调用方需自行处理。
pub fn job_name(dir_name: &str) -> String {
    let segments: Vec<&str> = dir_name.split('_').collect();
    segments[..segments.len() - 1].join("_")
}

/// 生成脚本内容：五行预设变量（各以换行结尾）+ 不带换行的运行命令
pub fn generate_lsf_script(config: &LsfConfig, job_name: &str) -> String {
    format!(
        "APP_NAME={}\nNP={}\nNP_PER_NODE={}\nOMP_NUM_THREADS={}\nRUN=\"{}\"\n{} -np $NP {}",
        config.app_name,
        config.np,
        config.np_per_node,
        config.omp_num_threads,
        config.run_mode,
        config.castep_script,
        job_name,
    )
}

/// 在目录中写出脚本，返回脚本路径
pub fn write_lsf_script(dir: &Path, script_name: &str, config: &LsfConfig) -> Result<PathBuf> {
    let dir_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let path = dir.join(script_name);

    fs::write(&path, generate_lsf_script(config, &job_name(&dir_name))).map_err(|e| {
        AdsprepError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        }
    })?;

    Ok(path)
}
