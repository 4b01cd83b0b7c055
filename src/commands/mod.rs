//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `jobs/`, `scripts/`, `utils/`
//! - 子模块: model, xsd, lsf

pub mod lsf;
pub mod model;
pub mod xsd;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Model(args) => model::execute(args),
        Commands::ToXsd(args) => xsd::execute(args),
        Commands::Lsf(args) => lsf::execute(args),
    }
}
