// crates/ap_physics/src/kinetics/light.rs

//! 光响应因子
//!
//! 支持四个封闭变体：
//! - Monod 饱和型
//! - Haldane 高光抑制型
//! - 指数饱和型（无抑制）
//! - 单峰指数型（Steele 1962，先升后对称衰减）
//!
//! 输入为培养液深度平均 PAR（不是表面 PAR），输出截断到 [0,1]。

use ap_foundation::error::{ApError, ApResult};
use serde::{Deserialize, Serialize};

/// 光响应模型（封闭变体族）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum LightResponse {
    /// Monod 饱和型: fL = I / (Ks + I)
    Monod {
        /// 半饱和光强 Ks [µmol/(m²·s)]
        ks: f64,
    },
    /// Haldane 型（高光抑制）: fL = I / (Ks + I + I²/Ki)
    Haldane {
        /// 半饱和光强 Ks [µmol/(m²·s)]
        ks: f64,
        /// 抑制常数 Ki [µmol/(m²·s)]
        ki: f64,
    },
    /// 指数饱和型: fL = 1 − e^{−I/Ik}
    ExponentialSaturation {
        /// 特征光强 Ik [µmol/(m²·s)]
        ik: f64,
    },
    /// 单峰指数型 (Steele 1962): fL = (I/Iopt) · e^{1 − I/Iopt}
    ///
    /// I = Iopt 时 fL = 1，偏离最优光强时对称衰减。
    SingleOptimum {
        /// 最优光强 Iopt [µmol/(m²·s)]
        iopt: f64,
    },
}

impl LightResponse {
    /// 模型名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Monod { .. } => "Monod",
            Self::Haldane { .. } => "Haldane",
            Self::ExponentialSaturation { .. } => "ExponentialSaturation",
            Self::SingleOptimum { .. } => "SingleOptimum",
        }
    }

    /// 参数合法性检查（配置阶段一次性调用）
    pub fn validate(&self) -> ApResult<()> {
        match *self {
            Self::Monod { ks } => {
                if !(ks > 0.0) {
                    return Err(ApError::config("light.ks", ks, "半饱和光强必须为正"));
                }
            }
            Self::Haldane { ks, ki } => {
                if !(ks > 0.0) {
                    return Err(ApError::config("light.ks", ks, "半饱和光强必须为正"));
                }
                if !(ki > 0.0) {
                    return Err(ApError::config("light.ki", ki, "抑制常数必须为正"));
                }
            }
            Self::ExponentialSaturation { ik } => {
                if !(ik > 0.0) {
                    return Err(ApError::config("light.ik", ik, "特征光强必须为正"));
                }
            }
            Self::SingleOptimum { iopt } => {
                if !(iopt > 0.0) {
                    return Err(ApError::config("light.iopt", iopt, "最优光强必须为正"));
                }
            }
        }
        Ok(())
    }

    /// 计算光响应因子 ∈ [0,1]
    ///
    /// 截断到 [0,1] 是建模决定（因子定义域），不是错误恢复。
    #[inline]
    pub fn compute(&self, i_avg: f64) -> f64 {
        let i = i_avg.max(0.0);
        let f = match *self {
            Self::Monod { ks } => i / (ks + i),
            Self::Haldane { ks, ki } => i / (ks + i + i * i / ki),
            Self::ExponentialSaturation { ik } => 1.0 - (-i / ik).exp(),
            Self::SingleOptimum { iopt } => (i / iopt) * (1.0 - i / iopt).exp(),
        };
        f.clamp(0.0, 1.0)
    }
}
