//! # to-xsd 命令实现
//!
//! 扫描匹配目录下的 .msi 文件，生成 Materials Studio 批量转换脚本。
//!
//! ## 依赖关系
//! - 使用 `cli/xsd.rs` 定义的参数
//! - 使用 `batch/collector.rs`, `scripts/xsd.rs`
//! - 使用 `utils/output.rs`

use crate::batch;
use crate::cli::xsd::XsdArgs;
use crate::error::{AdsprepError, Result};
use crate::scripts::xsd;
use crate::utils::output;

/// 执行 to-xsd 命令
pub fn execute(args: XsdArgs) -> Result<()> {
    output::print_header("msi → xsd Conversion Script");

    if !args.root.is_dir() {
        return Err(AdsprepError::DirectoryNotFound {
            path: args.root.display().to_string(),
        });
    }

    let pattern = format!("{}/**/*.msi", args.dir_pattern.trim_end_matches('/'));
    let files = batch::discover_files(&args.root, &pattern)?;
    if files.is_empty() {
        output::print_warning(&format!(
            "No .msi files matched '{}' under {}",
            pattern,
            args.root.display()
        ));
    } else {
        output::print_info(&format!("Found {} .msi file(s)", files.len()));
    }

    let ids = xsd::identifiers(&args.root, &files)?;
    let script_path = args.root.join(&args.output);
    xsd::write_script(&script_path, &ids)?;

    output::print_success(&format!("Script written to '{}'", script_path.display()));
    output::print_done("Done!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_script_lists_matched_files() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        for file in ["GDY_Fe/Fe_opt/Fe.msi", "GDY_Fe/a.msi", "GDY_Fe/a.xsd", "skip/b.msi"] {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }

        execute(XsdArgs {
            dir_pattern: "GDY_*".to_string(),
            root: root.to_path_buf(),
            output: PathBuf::from(xsd::DEFAULT_SCRIPT_NAME),
        })
        .unwrap();

        let script = fs::read_to_string(root.join(xsd::DEFAULT_SCRIPT_NAME)).unwrap();
        assert!(script.contains("my @params = (\r\n\"GDY_Fe/Fe_opt/Fe\", \"GDY_Fe/a\");\r\n"));
        assert!(!script.contains("skip"));
    }

    #[test]
    fn test_no_matches_still_writes_script() {
        let tmp = tempfile::tempdir().unwrap();
        execute(XsdArgs {
            dir_pattern: "nothing_*".to_string(),
            root: tmp.path().to_path_buf(),
            output: PathBuf::from("out.pl"),
        })
        .unwrap();

        let script = fs::read_to_string(tmp.path().join("out.pl")).unwrap();
        assert!(script.contains("my @params = (\r\n);\r\n"));
        assert!(script.contains("foreach my $item (@params) {\r\n"));
    }
}
