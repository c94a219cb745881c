// crates/ap_physics/src/kinetics/mod.rs

//! 生长动力学
//!
//! 三个响应因子族（光、温度、营养），各自为封闭枚举变体，
//! 按标签分发到一个纯函数。因子均截断到 [0,1]（建模决定）。
//!
//! 净比生长率：
//! ```text
//! μ_net = μ_max · fL · fT · fN − death_rate   [1/day]
//! ```
//!
//! 参数合法性在配置阶段通过各变体的 `validate()` 一次性检查，
//! 决不在逐步计算中检查。

pub mod light;
pub mod nutrient;
pub mod temperature;

pub use light::LightResponse;
pub use nutrient::NutrientResponse;
pub use temperature::TemperatureResponse;

use serde::{Deserialize, Serialize};

/// 单小时的三个生长因子与净生长率
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthFactors {
    /// 光响应因子 [0,1]
    pub f_light: f64,
    /// 温度响应因子 [0,1]
    pub f_temperature: f64,
    /// 营养响应因子 [0,1]
    pub f_nutrient: f64,
    /// 净比生长率 [1/day]
    pub net_rate: f64,
}

/// 合成净比生长率 [1/day]
///
/// 因子在各自的分发函数中已截断到 [0,1]，此处只做乘积与死亡率扣减。
#[inline]
pub fn net_growth_rate(mu_max: f64, f_l: f64, f_t: f64, f_n: f64, death_rate: f64) -> f64 {
    mu_max * f_l * f_t * f_n - death_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_rate_combines_factors() {
        let r = net_growth_rate(2.0, 0.5, 0.5, 1.0, 0.1);
        assert!((r - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_net_rate_can_be_negative() {
        // 暗期：fL = 0，净生长率为负（死亡占优）
        let r = net_growth_rate(2.0, 0.0, 0.8, 1.0, 0.1);
        assert!((r - (-0.1)).abs() < 1e-12);
    }
}
