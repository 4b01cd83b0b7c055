//! # 外部模型组装接口
//!
//! 分子放置的几何与物理逻辑由外部组装程序负责，这里只定义调用约定。
//!
//! ## 功能
//! - `Assembler`: 根据 (分子, z 偏移, 晶格目录, 位点) 构造组装上下文
//! - `ModelFactory`: 对每个结构文件执行一次组装
//! - `CommandAssembler`: 通过外部可执行程序组装
//!
//! ## 依赖关系
//! - 被 `jobs/executor.rs` 使用
//! - 使用 `std::process::Command` 调用外部程序

use super::Site;
use crate::error::{AdsprepError, Result};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 单个作业的组装上下文
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyContext {
    pub molecule: PathBuf,
    pub mol_z: f64,
    pub lattice_dir: PathBuf,
    pub site: Site,
}

/// 针对一个上下文的组装器实例
pub trait ModelFactory {
    /// 将分子放置到 `structure` 所描述的晶格上，输出由实现自行写入磁盘
    fn assemble(&mut self, structure: &Path) -> Result<()>;
}

/// 组装能力
///
/// 同一个 `Assembler` 会被线程池中的多个作业同时调用，每次 `construct`
/// 产生的 `ModelFactory` 只在一个作业内部使用。
pub trait Assembler: Sync {
    type Factory: ModelFactory;

    fn construct(&self, context: &AssemblyContext) -> Result<Self::Factory>;
}

/// 通过外部程序组装
///
/// 每个结构文件调用一次：
/// `<program> <molecule> <mol_z> <lattice_dir> <site> <structure>`
#[derive(Debug, Clone)]
pub struct CommandAssembler {
    program: String,
}

impl CommandAssembler {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Assembler for CommandAssembler {
    type Factory = CommandFactory;

    fn construct(&self, context: &AssemblyContext) -> Result<CommandFactory> {
        if !context.molecule.is_file() {
            return Err(AdsprepError::FileNotFound {
                path: context.molecule.display().to_string(),
            });
        }
        if !context.lattice_dir.is_dir() {
            return Err(AdsprepError::DirectoryNotFound {
                path: context.lattice_dir.display().to_string(),
            });
        }

        Ok(CommandFactory {
            program: self.program.clone(),
            context: context.clone(),
        })
    }
}

/// `CommandAssembler` 构造的组装器实例
#[derive(Debug)]
pub struct CommandFactory {
    program: String,
    context: AssemblyContext,
}

impl CommandFactory {
    fn command(&self, structure: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.context.molecule)
            .arg(self.context.mol_z.to_string())
            .arg(&self.context.lattice_dir)
            .arg(self.context.site.label())
            .arg(structure);
        cmd
    }
}

impl ModelFactory for CommandFactory {
    fn assemble(&mut self, structure: &Path) -> Result<()> {
        let output = self.command(structure).output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AdsprepError::CommandNotFound {
                    command: self.program.clone(),
                }
            } else {
                AdsprepError::CommandFailed {
                    command: self.program.clone(),
                    stderr: e.to_string(),
                }
            }
        })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(AdsprepError::CommandFailed {
                command: format!("{} {}", self.program, structure.display()),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn context(root: &Path) -> AssemblyContext {
        let molecule = root.join("CO.msi");
        let lattice_dir = root.join("Fe_opt");
        fs::write(&molecule, "").unwrap();
        fs::create_dir_all(&lattice_dir).unwrap();
        AssemblyContext {
            molecule,
            mol_z: 1.54221,
            lattice_dir,
            site: Site::C2,
        }
    }

    #[test]
    fn test_construct_requires_inputs() {
        let tmp = tempfile::tempdir().unwrap();
        let assembler = CommandAssembler::new("msi_assemble");

        let mut ctx = context(tmp.path());
        ctx.molecule = tmp.path().join("missing.msi");
        assert!(matches!(
            assembler.construct(&ctx),
            Err(AdsprepError::FileNotFound { .. })
        ));

        let mut ctx = context(tmp.path());
        ctx.lattice_dir = tmp.path().join("missing_opt");
        assert!(matches!(
            assembler.construct(&ctx),
            Err(AdsprepError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_command_arguments() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = context(tmp.path());
        let factory = CommandAssembler::new("msi_assemble").construct(&ctx).unwrap();

        let structure = ctx.lattice_dir.join("Fe.msi");
        let cmd = factory.command(&structure);
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().to_string())
            .collect();

        assert_eq!(cmd.get_program(), "msi_assemble");
        assert_eq!(
            args,
            vec![
                ctx.molecule.display().to_string(),
                "1.54221".to_string(),
                ctx.lattice_dir.display().to_string(),
                "c2".to_string(),
                structure.display().to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_program() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = context(tmp.path());
        let mut factory = CommandAssembler::new("adsprep-no-such-assembler")
            .construct(&ctx)
            .unwrap();

        let err = factory.assemble(&ctx.lattice_dir.join("Fe.msi")).unwrap_err();
        assert!(matches!(err, AdsprepError::CommandNotFound { .. }));
    }
}
