//! # model 命令实现
//!
//! 为分子、吸附位点与晶格目录的全部组合调用外部组装程序。
//!
//! ## 功能
//! - 发现分子文件与晶格目录
//! - 枚举 (分子, 位点, 晶格) 组合，或读取失败列表重跑
//! - 并行执行，汇总失败并写出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/model.rs` 定义的参数
//! - 使用 `batch/`, `jobs/`
//! - 使用 `utils/output.rs`

use crate::batch::{self, BatchRunner};
use crate::cli::model::ModelArgs;
use crate::error::{AdsprepError, Result};
use crate::jobs::{self, report, CandidateJob, CommandAssembler, JobExecutor, Site};
use crate::utils::output;

/// 执行 model 命令
pub fn execute(args: ModelArgs) -> Result<()> {
    output::print_header("Adsorption Model Generation");

    if !args.root.is_dir() {
        return Err(AdsprepError::DirectoryNotFound {
            path: args.root.display().to_string(),
        });
    }

    let jobs = match &args.rerun {
        Some(csv) => {
            let jobs = report::read_jobs(&args.root.join(csv))?;
            output::print_info(&format!(
                "Loaded {} job(s) from '{}'",
                jobs.len(),
                csv.display()
            ));
            jobs
        }
        None => enumerate_jobs(&args)?,
    };

    if jobs.is_empty() {
        output::print_warning("No jobs to run");
        output::print_done("Done");
        return Ok(());
    }

    if args.dry_run {
        for job in &jobs {
            output::print_info(&format!("[DRY] {}", job));
        }
        output::print_done(&format!("{} job(s) enumerated", jobs.len()));
        return Ok(());
    }

    let assembler = CommandAssembler::new(&args.assembler);
    let runner = BatchRunner::new(args.jobs).with_label("Assembling");
    output::print_info(&format!(
        "Running {} job(s) with '{}' on {} thread(s), mol_z = {}",
        jobs.len(),
        assembler.program(),
        runner.jobs(),
        args.mol_z
    ));

    let result = JobExecutor::new(&assembler, runner).execute(&jobs, args.mol_z)?;

    output::print_separator();
    output::print_summary(result.success, result.skipped, result.failed);
    if result.skipped > 0 {
        output::print_skip(&format!(
            "{} job(s) had no structure files in their lattice directory",
            result.skipped
        ));
    }

    if !result.is_clean() {
        println!("{}", report::failure_table(&result.failures));
        let failures_path = args.root.join(&args.failures);
        report::write_failures(&failures_path, &result.failures)?;
        output::print_warning(&format!(
            "Failed jobs written to '{}' (rerun with --rerun {})",
            failures_path.display(),
            args.failures.display()
        ));
        return Err(AdsprepError::BatchFailed {
            failed: result.failed,
            total: result.total(),
        });
    }

    output::print_done("Done");
    Ok(())
}

/// 发现输入并枚举全部组合
fn enumerate_jobs(args: &ModelArgs) -> Result<Vec<CandidateJob>> {
    let lattice_pattern = args.lattice.as_deref().ok_or_else(|| {
        AdsprepError::InvalidArgument("--lattice is required unless --rerun is given".to_string())
    })?;

    let molecule_root = args.root.join(&args.molecule_dir);
    let lattice_root = args.root.join(&args.lattice_dir);

    let molecules = batch::discover_files(&molecule_root, &batch::recursive(&args.molecule))?;
    let lattices = batch::discover_dirs(&lattice_root, &batch::recursive(lattice_pattern))?;

    output::print_info(&format!(
        "Found {} molecule(s) under '{}' and {} lattice director(ies) under '{}'",
        molecules.len(),
        molecule_root.display(),
        lattices.len(),
        lattice_root.display()
    ));

    Ok(jobs::enumerate(&molecules, &lattices, &Site::ALL))
}
