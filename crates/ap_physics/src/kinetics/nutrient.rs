// crates/ap_physics/src/kinetics/nutrient.rs

//! 营养响应因子
//!
//! 当前生产行为中营养不构成限制，因子恒为 1.0。
//! 保留为显式命名变体而非隐式默认，便于将来加入
//! Monod 型氮/磷限制而不改动调用方。

use ap_foundation::error::ApResult;
use serde::{Deserialize, Serialize};

/// 营养响应模型（封闭变体族）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum NutrientResponse {
    /// 营养充足：fN ≡ 1.0（显式无限制变体）
    #[default]
    Replete,
}

impl NutrientResponse {
    /// 模型名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Replete => "Replete",
        }
    }

    /// 参数合法性检查（当前无参数，恒成功）
    pub fn validate(&self) -> ApResult<()> {
        Ok(())
    }

    /// 计算营养响应因子 ∈ [0,1]
    #[inline]
    pub fn compute(&self) -> f64 {
        match self {
            Self::Replete => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replete_is_unity() {
        assert_eq!(NutrientResponse::Replete.compute(), 1.0);
    }

    #[test]
    fn test_default_is_replete() {
        assert_eq!(NutrientResponse::default(), NutrientResponse::Replete);
    }
}
