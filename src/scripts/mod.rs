//! # 脚本生成模块
//!
//! 渲染并写出外部软件使用的控制脚本。
//!
//! ## 子模块
//! - `xsd`: Materials Studio msi → xsd 批量转换脚本 (Perl, CRLF)
//! - `lsf`: CASTEP LSF 提交脚本
//!
//! ## 依赖关系
//! - 被 `commands/` 使用

pub mod lsf;
pub mod xsd;
