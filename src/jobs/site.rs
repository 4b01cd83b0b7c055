//! # 吸附位点
//!
//! 固定的六个吸附位点标签：`metal`, `c1` .. `c5`。
//!
//! ## 依赖关系
//! - 被 `jobs/mod.rs`, `jobs/assembler.rs` 使用
//! - 使用 `serde` 以标签字符串序列化

use crate::error::AdsprepError;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 分子在晶格上的吸附位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Metal,
    C1,
    C2,
    C3,
    C4,
    C5,
}

impl Site {
    /// 全部位点，按枚举顺序
    pub const ALL: [Site; 6] = [Site::Metal, Site::C1, Site::C2, Site::C3, Site::C4, Site::C5];

    pub fn label(&self) -> &'static str {
        match self {
            Site::Metal => "metal",
            Site::C1 => "c1",
            Site::C2 => "c2",
            Site::C3 => "c3",
            Site::C4 => "c4",
            Site::C5 => "c5",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Site {
    type Err = AdsprepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Site::ALL
            .iter()
            .copied()
            .find(|site| site.label() == s)
            .ok_or_else(|| AdsprepError::InvalidArgument(format!("Unknown site label: '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        let labels: Vec<&str> = Site::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["metal", "c1", "c2", "c3", "c4", "c5"]);
        for site in Site::ALL {
            assert_eq!(site.to_string().parse::<Site>().unwrap(), site);
        }
    }

    #[test]
    fn test_unknown_label() {
        assert!("c6".parse::<Site>().is_err());
        assert!("Metal".parse::<Site>().is_err());
    }
}
