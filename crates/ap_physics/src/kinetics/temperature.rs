// crates/ap_physics/src/kinetics/temperature.rs

//! 温度响应因子
//!
//! 支持四个封闭变体：
//! - 对称高斯型（以 Topt 为中心）
//! - 非对称高斯型（次优侧/超优侧独立形状参数）
//! - Cardinal 多项式型 (CTMI, Rosso 1993)，[Tmin,Tmax] 外严格为零
//! - 有界二次型，[Tmin,Tmax] 外严格为零
//!
//! 输出截断到 [0,1]。

use ap_foundation::error::{ApError, ApResult};
use serde::{Deserialize, Serialize};

/// 温度响应模型（封闭变体族）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum TemperatureResponse {
    /// 对称高斯型: fT = e^{−α·(T−Topt)²}
    GaussianSymmetric {
        /// 最优温度 [°C]
        t_opt: f64,
        /// 形状参数 α [1/°C²]
        alpha: f64,
    },
    /// 非对称高斯型：低于/高于最优温度使用不同形状参数
    GaussianAsymmetric {
        /// 最优温度 [°C]
        t_opt: f64,
        /// 次优侧形状参数 [1/°C²]（T < Topt）
        alpha_sub: f64,
        /// 超优侧形状参数 [1/°C²]（T > Topt）
        alpha_super: f64,
    },
    /// Cardinal 温度模型 (CTMI, Rosso 1993)
    ///
    /// [Tmin, Tmax] 外严格为零，区间内在 Topt 处取 1。
    Cardinal {
        /// 最低生长温度 [°C]
        t_min: f64,
        /// 最优温度 [°C]
        t_opt: f64,
        /// 最高生长温度 [°C]
        t_max: f64,
    },
    /// 有界二次型: fT = 1 − ((T−Topt)/w)²，w 取到较近边界的距离
    ///
    /// [Tmin, Tmax] 外严格为零。
    BoundedQuadratic {
        /// 最低生长温度 [°C]
        t_min: f64,
        /// 最优温度 [°C]
        t_opt: f64,
        /// 最高生长温度 [°C]
        t_max: f64,
    },
}

impl TemperatureResponse {
    /// 模型名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::GaussianSymmetric { .. } => "GaussianSymmetric",
            Self::GaussianAsymmetric { .. } => "GaussianAsymmetric",
            Self::Cardinal { .. } => "Cardinal",
            Self::BoundedQuadratic { .. } => "BoundedQuadratic",
        }
    }

    /// 参数合法性检查（配置阶段一次性调用）
    pub fn validate(&self) -> ApResult<()> {
        match *self {
            Self::GaussianSymmetric { alpha, .. } => {
                if !(alpha > 0.0) {
                    return Err(ApError::config("temperature.alpha", alpha, "必须为正"));
                }
            }
            Self::GaussianAsymmetric {
                alpha_sub,
                alpha_super,
                ..
            } => {
                if !(alpha_sub > 0.0) {
                    return Err(ApError::config(
                        "temperature.alpha_sub",
                        alpha_sub,
                        "必须为正",
                    ));
                }
                if !(alpha_super > 0.0) {
                    return Err(ApError::config(
                        "temperature.alpha_super",
                        alpha_super,
                        "必须为正",
                    ));
                }
            }
            Self::Cardinal { t_min, t_opt, t_max }
            | Self::BoundedQuadratic { t_min, t_opt, t_max } => {
                if !(t_min < t_opt && t_opt < t_max) {
                    return Err(ApError::config(
                        "temperature.t_opt",
                        t_opt,
                        "要求 t_min < t_opt < t_max",
                    ));
                }
            }
        }
        Ok(())
    }

    /// 计算温度响应因子 ∈ [0,1]
    ///
    /// 截断到 [0,1] 是建模决定，不是错误恢复。
    #[inline]
    pub fn compute(&self, t: f64) -> f64 {
        let f = match *self {
            Self::GaussianSymmetric { t_opt, alpha } => {
                let d = t - t_opt;
                (-alpha * d * d).exp()
            }
            Self::GaussianAsymmetric {
                t_opt,
                alpha_sub,
                alpha_super,
            } => {
                let d = t - t_opt;
                let alpha = if d < 0.0 { alpha_sub } else { alpha_super };
                (-alpha * d * d).exp()
            }
            Self::Cardinal { t_min, t_opt, t_max } => {
                if t <= t_min || t >= t_max {
                    0.0
                } else {
                    let num = (t - t_max) * (t - t_min) * (t - t_min);
                    let den = (t_opt - t_min)
                        * ((t_opt - t_min) * (t - t_opt)
                            - (t_opt - t_max) * (t_opt + t_min - 2.0 * t));
                    if den.abs() < 1e-12 {
                        0.0
                    } else {
                        num / den
                    }
                }
            }
            Self::BoundedQuadratic { t_min, t_opt, t_max } => {
                if t <= t_min || t >= t_max {
                    0.0
                } else {
                    let w = if t < t_opt { t_opt - t_min } else { t_max - t_opt };
                    let d = (t - t_opt) / w;
                    1.0 - d * d
                }
            }
        };
        f.clamp(0.0, 1.0)
    }
}
