//! # 失败作业报告
//!
//! 将失败的作业写入 CSV，便于只重跑失败的子集。
//!
//! ## 功能
//! - 失败列表 → CSV (`molecule,lattice_dir,site,error`)
//! - CSV → 作业列表（重跑）
//! - 终端表格
//!
//! ## 依赖关系
//! - 被 `commands/model.rs` 使用
//! - 使用 `csv` + `serde` 读写，`tabled` 渲染表格

use super::{CandidateJob, Site};
use crate::error::{AdsprepError, Result};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// CSV 中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub molecule: PathBuf,
    pub lattice_dir: PathBuf,
    pub site: Site,
    #[serde(default)]
    pub error: String,
}

impl FailureRecord {
    pub fn new(job: &CandidateJob, error: &str) -> Self {
        Self {
            molecule: job.molecule.clone(),
            lattice_dir: job.lattice_dir.clone(),
            site: job.site,
            error: error.to_string(),
        }
    }

    pub fn into_job(self) -> CandidateJob {
        CandidateJob {
            molecule: self.molecule,
            lattice_dir: self.lattice_dir,
            site: self.site,
        }
    }
}

/// 表格行
#[derive(Tabled)]
struct FailureRow {
    #[tabled(rename = "Job")]
    job: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// 写出失败列表
pub fn write_failures(path: &Path, failures: &[(CandidateJob, String)]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for (job, error) in failures {
        wtr.serialize(FailureRecord::new(job, error))?;
    }
    wtr.flush().map_err(|e| AdsprepError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

/// 读取失败列表中的作业
pub fn read_jobs(path: &Path) -> Result<Vec<CandidateJob>> {
    if !path.is_file() {
        return Err(AdsprepError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut rdr = csv::Reader::from_path(path)?;
    let mut jobs = Vec::new();
    for record in rdr.deserialize::<FailureRecord>() {
        jobs.push(record?.into_job());
    }
    Ok(jobs)
}

/// 渲染失败表格，错误信息只保留第一行
pub fn failure_table(failures: &[(CandidateJob, String)]) -> String {
    let rows: Vec<FailureRow> = failures
        .iter()
        .map(|(job, error)| FailureRow {
            job: job.to_string(),
            error: error.lines().next().unwrap_or("").to_string(),
        })
        .collect();
    Table::new(&rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(lattice: &str, site: Site) -> CandidateJob {
        CandidateJob {
            molecule: PathBuf::from("molecules/CO.msi"),
            lattice_dir: PathBuf::from(lattice),
            site,
        }
    }

    #[test]
    fn test_failed_subset_can_be_rerun() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("failed_jobs.csv");
        let failures = vec![
            (job("msi_models/Fe_opt", Site::C4), "bad, file\nsecond line".to_string()),
            (job("msi_models/Co_opt", Site::Metal), "exit 1".to_string()),
        ];

        write_failures(&path, &failures).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("molecule,lattice_dir,site,error\n"));
        assert!(text.contains("msi_models/Fe_opt,c4,"));

        let jobs = read_jobs(&path).unwrap();
        assert_eq!(jobs, vec![failures[0].0.clone(), failures[1].0.clone()]);
    }

    #[test]
    fn test_read_without_error_column() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("jobs.csv");
        std::fs::write(&path, "molecule,lattice_dir,site\nCO.msi,Fe_opt,c5\n").unwrap();

        let jobs = read_jobs(&path).unwrap();
        assert_eq!(jobs, vec![CandidateJob {
            molecule: "CO.msi".into(),
            lattice_dir: "Fe_opt".into(),
            site: Site::C5,
        }]);
    }

    #[test]
    fn test_read_rejects_unknown_site() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("jobs.csv");
        std::fs::write(&path, "molecule,lattice_dir,site,error\nCO.msi,Fe_opt,c9,\n").unwrap();
        assert!(matches!(read_jobs(&path), Err(AdsprepError::CsvError(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_jobs(&tmp.path().join("none.csv")),
            Err(AdsprepError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_table_uses_first_error_line() {
        let table = failure_table(&[(job("Fe_opt", Site::C1), "first\nsecond".to_string())]);
        assert!(table.contains("molecules/CO.msi @ Fe_opt [c1]"));
        assert!(table.contains("first"));
        assert!(!table.contains("second"));
    }
}
