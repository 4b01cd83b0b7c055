//! # lsf 命令实现
//!
//! 为每个匹配的计算目录并行写出 LSF 提交脚本。
//!
//! ## 功能
//! - 按关键字模式查找目录（任意深度）
//! - 由目录名推导作业名
//! - 并行写出，写入失败汇总后作为命令错误返回
//!
//! ## 依赖关系
//! - 使用 `cli/lsf.rs` 定义的参数
//! - 使用 `batch/`, `scripts/lsf.rs`
//! - 使用 `utils/output.rs`

use crate::batch::{self, BatchRunner, ProcessResult};
use crate::cli::lsf::LsfArgs;
use crate::error::{AdsprepError, Result};
use crate::scripts::lsf;
use crate::utils::output;

/// 执行 lsf 命令
pub fn execute(args: LsfArgs) -> Result<()> {
    output::print_header("Writing LSF Scripts");

    if !args.root.is_dir() {
        return Err(AdsprepError::DirectoryNotFound {
            path: args.root.display().to_string(),
        });
    }

    let dirs = batch::discover_dirs(&args.root, &batch::recursive(&args.keyword))?;
    if dirs.is_empty() {
        output::print_warning(&format!(
            "No directories matched '{}' under {}",
            args.keyword,
            args.root.display()
        ));
        return Ok(());
    }
    output::print_info(&format!("Writing lsf scripts into {} director(ies)...", dirs.len()));

    // 空作业名按原样写出，只给出提示
    for dir in &dirs {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if lsf::job_name(&name).is_empty() {
            output::print_warning(&format!(
                "'{}' has no '_' suffix; its job name is empty",
                dir.display()
            ));
        }
    }

    let config = args.lsf_config();
    let runner = BatchRunner::new(args.jobs).with_label("Writing");
    let result = runner.run(&dirs, |dir| {
        match lsf::write_lsf_script(dir, &args.script_name, &config) {
            Ok(_) => ProcessResult::Success(dir.clone()),
            Err(e) => ProcessResult::Failed(dir.clone(), e.to_string()),
        }
    })?;

    output::print_summary(result.success, result.skipped, result.failed);
    for (dir, err) in &result.failures {
        output::print_error(&format!("{}: {}", dir.display(), err));
    }
    if !result.is_clean() {
        return Err(AdsprepError::BatchFailed {
            failed: result.failed,
            total: result.total(),
        });
    }

    output::print_done(&format!("Done: {} script(s) written", result.success));
    Ok(())
}
