//! # adsprep - 吸附模型与计算脚本批量准备工具
//!
//! 枚举分子 × 吸附位点 × 晶格目录的全部组合，调用外部组装程序生成结构文件，
//! 并为 Materials Studio / CASTEP 生成转换脚本与提交脚本。
//!
//! ## 子命令
//! - `model`  - 为全部组合生成吸附模型
//! - `to-xsd` - 生成 msi → xsd 批量转换脚本
//! - `lsf`    - 生成 LSF 提交脚本
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── jobs/      (作业枚举、组装接口、并行执行)
//!   │     └── scripts/   (脚本渲染)
//!   ├── batch/      (路径发现、线程池)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod jobs;
mod scripts;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
