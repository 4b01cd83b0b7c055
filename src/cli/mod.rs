//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `model`: 生成吸附模型（分子 × 位点 × 晶格）
//! - `to-xsd`: 生成 msi → xsd 转换脚本
//! - `lsf`: 生成 LSF 提交脚本
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: model, xsd, lsf

pub mod lsf;
pub mod model;
pub mod xsd;

use clap::{Parser, Subcommand};

/// adsprep - 吸附模型与计算脚本批量准备工具
#[derive(Parser)]
#[command(name = "adsprep")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Adsorption model generation and Materials Studio / CASTEP script preparation", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Generate adsorption models for every molecule, site and lattice directory
    Model(model::ModelArgs),

    /// Write a Materials Studio script converting .msi files to .xsd
    #[command(name = "to-xsd")]
    ToXsd(xsd::XsdArgs),

    /// Write CASTEP LSF submission scripts into matching directories
    Lsf(lsf::LsfArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_model_defaults() {
        let cli = Cli::try_parse_from(["adsprep", "model", "--lattice", "*_opt"]).unwrap();
        match cli.command {
            Commands::Model(args) => {
                assert_eq!(args.lattice.as_deref(), Some("*_opt"));
                assert_eq!(args.molecule, "*.msi");
                assert_eq!(args.mol_z, 1.54221);
                assert!(args.rerun.is_none());
            }
            _ => panic!("expected model command"),
        }
    }

    #[test]
    fn test_model_requires_lattice_or_rerun() {
        assert!(Cli::try_parse_from(["adsprep", "model"]).is_err());
        assert!(Cli::try_parse_from(["adsprep", "model", "--rerun", "failed_jobs.csv"]).is_ok());
    }

    #[test]
    fn test_lsf_defaults_match_config() {
        let cli = Cli::try_parse_from(["adsprep", "lsf", "*_opt"]).unwrap();
        match cli.command {
            Commands::Lsf(args) => {
                let config = args.lsf_config();
                let default = crate::scripts::lsf::LsfConfig::default();
                assert_eq!(config.app_name, default.app_name);
                assert_eq!(config.np, default.np);
                assert_eq!(config.np_per_node, default.np_per_node);
                assert_eq!(config.omp_num_threads, default.omp_num_threads);
                assert_eq!(config.run_mode, default.run_mode);
                assert_eq!(config.castep_script, default.castep_script);
            }
            _ => panic!("expected lsf command"),
        }
    }

    #[test]
    fn test_to_xsd_positional() {
        let cli = Cli::try_parse_from(["adsprep", "to-xsd", "GDY_*"]).unwrap();
        match cli.command {
            Commands::ToXsd(args) => {
                assert_eq!(args.dir_pattern, "GDY_*");
                assert_eq!(args.output, std::path::PathBuf::from("msi_to_xsd.pl"));
            }
            _ => panic!("expected to-xsd command"),
        }
    }
}
