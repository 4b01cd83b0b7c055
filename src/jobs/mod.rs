//! # 作业模块
//!
//! 分子、晶格目录与吸附位点的组合枚举，以及作业的并行执行。
//!
//! ## 功能
//! - `CandidateJob`: (分子文件, 晶格目录, 位点) 三元组
//! - `enumerate`: 完整笛卡尔积
//! - `assembler`: 外部模型组装接口
//! - `executor`: 并行执行作业
//! - `report`: 失败作业的 CSV 报告与重跑
//!
//! ## 依赖关系
//! - 被 `commands/model.rs` 使用
//! - 使用 `batch/` 进行发现与并行执行

pub mod assembler;
pub mod executor;
pub mod report;
pub mod site;

pub use assembler::{Assembler, AssemblyContext, CommandAssembler, ModelFactory};
pub use executor::JobExecutor;
pub use site::Site;

use std::fmt;
use std::path::PathBuf;

/// 一个待生成的吸附模型作业
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateJob {
    pub molecule: PathBuf,
    pub lattice_dir: PathBuf,
    pub site: Site,
}

impl fmt::Display for CandidateJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} [{}]",
            self.molecule.display(),
            self.lattice_dir.display(),
            self.site
        )
    }
}

/// 枚举全部组合：分子 → 位点 → 晶格目录
///
/// 结果数量恰为 `|molecules| × |sites| × |lattices|`，不去重也不过滤。
pub fn enumerate(molecules: &[PathBuf], lattices: &[PathBuf], sites: &[Site]) -> Vec<CandidateJob> {
    let mut jobs = Vec::with_capacity(molecules.len() * sites.len() * lattices.len());
    for molecule in molecules {
        for site in sites {
            for lattice_dir in lattices {
                jobs.push(CandidateJob {
                    molecule: molecule.clone(),
                    lattice_dir: lattice_dir.clone(),
                    site: *site,
                });
            }
        }
    }
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_cross_product_size() {
        let molecules = paths(&["CO.msi", "CH4.msi", "H2O.msi"]);
        let lattices = paths(&["Fe_opt", "Co_opt"]);
        let jobs = enumerate(&molecules, &lattices, &Site::ALL);

        assert_eq!(jobs.len(), 3 * 6 * 2);
        assert!(jobs.iter().all(|j| Site::ALL.contains(&j.site)));
        for site in Site::ALL {
            assert_eq!(jobs.iter().filter(|j| j.site == site).count(), 3 * 2);
        }
    }

    #[test]
    fn test_nested_order() {
        let molecules = paths(&["CO.msi", "CH4.msi"]);
        let lattices = paths(&["Fe_opt", "Co_opt"]);
        let jobs = enumerate(&molecules, &lattices, &Site::ALL);

        assert_eq!(
            jobs[0],
            CandidateJob {
                molecule: "CO.msi".into(),
                lattice_dir: "Fe_opt".into(),
                site: Site::Metal,
            }
        );
        assert_eq!(jobs[1].lattice_dir, PathBuf::from("Co_opt"));
        assert_eq!(jobs[1].site, Site::Metal);
        assert_eq!(jobs[2].site, Site::C1);
        assert_eq!(jobs[12].molecule, PathBuf::from("CH4.msi"));
        assert_eq!(jobs[12].site, Site::Metal);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let molecules = paths(&["CO.msi", "CO.msi"]);
        let lattices = paths(&["Fe_opt"]);
        assert_eq!(enumerate(&molecules, &lattices, &Site::ALL).len(), 12);
    }

    #[test]
    fn test_empty_inputs() {
        let lattices = paths(&["Fe_opt"]);
        assert!(enumerate(&[], &lattices, &Site::ALL).is_empty());
        assert!(enumerate(&lattices, &[], &Site::ALL).is_empty());
    }

    #[test]
    fn test_display() {
        let job = CandidateJob {
            molecule: "m/CO.msi".into(),
            lattice_dir: "l/Fe_opt".into(),
            site: Site::C3,
        };
        assert_eq!(job.to_string(), "m/CO.msi @ l/Fe_opt [c3]");
    }
}
