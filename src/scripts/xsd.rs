//! # msi → xsd 转换脚本生成
//!
//! 为 Materials Studio 生成批量转换的 Perl 脚本（MaterialsScript）。
//!
//! ## 功能
//! - 由结构文件路径推导作业标识（相对根目录、去掉扩展名）
//! - 渲染固定模板：头部、标识数组、逐项 CalculateBonds/Export/Save/Close
//! - 以 CRLF 行尾写出
//!
//! ## 依赖关系
//! - 被 `commands/xsd.rs` 调用
//! - 无外部 crate 依赖

use crate::error::{AdsprepError, Result};

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// 默认输出文件名
pub const DEFAULT_SCRIPT_NAME: &str = "msi_to_xsd.pl";

const HEADER: &str = "#!perl
use strict;
use Getopt::Long;
use MaterialsScript qw(:all);
";

const ACTIONS: &str = r#"foreach my $item (@params) {
    my $doc = $Documents{"${item}.msi"};
    $doc->CalculateBonds;
    $doc->Export("${item}.xsd");
    $doc->Save;
    $doc->Close;
}
"#;

/// 结构文件相对 `root` 的路径去掉扩展名
pub fn identifier(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative.with_extension("").to_string_lossy().to_string()
}

/// 计算全部标识，重复标识视为调用错误
pub fn identifiers<P: AsRef<Path>>(root: &Path, files: &[P]) -> Result<Vec<String>> {
    let mut seen: HashMap<String, &Path> = HashMap::new();
    let mut ids = Vec::with_capacity(files.len());

    for file in files {
        let file = file.as_ref();
        let id = identifier(root, file);
        if let Some(first) = seen.get(&id) {
            return Err(AdsprepError::DuplicateIdentifier {
                identifier: id,
                first: first.display().to_string(),
                second: file.display().to_string(),
            });
        }
        seen.insert(id.clone(), file);
        ids.push(id);
    }

    Ok(ids)
}

/// 转义为 Perl 双引号字符串内容
fn perl_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        if matches!(c, '\\' | '"' | '$' | '@') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// 渲染脚本（`\n` 行尾）
pub fn render(ids: &[String]) -> String {
    let items = ids
        .iter()
        .map(|id| perl_quote(id))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{}my @params = (\n{});\n{}", HEADER, items, ACTIONS)
}

/// 将 `\n` 行尾转换为 `\r\n`
pub fn to_crlf(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}

/// 写出脚本，覆盖已有文件
pub fn write_script(path: &Path, ids: &[String]) -> Result<()> {
    fs::write(path, to_crlf(&render(ids))).map_err(|e| AdsprepError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}
