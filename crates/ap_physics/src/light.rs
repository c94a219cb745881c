// crates/ap_physics/src/light.rs

//! 光传输
//!
//! 由入射辐射与太阳高度角计算表面 PAR（直射/散射，含 Fresnel 透射损失），
//! 再经 Beer-Lambert 衰减求培养液深度平均 PAR。生长动力学的光响应因子
//! 针对深度平均 PAR 求值，而非表面 PAR。
//!
//! # 衰减模型
//!
//! ```text
//! K = ε · (X[g/L] · 1000) + kb          [1/m]
//! Iavg = I0 · (1 − e^{−K·d}) / (K·d)    K·d → 0 时 Iavg → I0
//! ```
//!
//! 受光深度比例（光强降到补偿光强处以上的水柱比例）仅作诊断输出，
//! 不反馈进生长计算。

use ap_foundation::constants::{
    COMPENSATION_PAR, PAR_FRACTION, WATER_REFRACTIVE_INDEX, WATT_TO_UMOL_PAR,
};
use ap_foundation::error::{ApError, ApResult};
use serde::{Deserialize, Serialize};

/// 散射光有效透射率 [-]
///
/// 散射天空光按等效入射角 ~58° 的 Fresnel 透射处理，取定值。
pub const DIFFUSE_TRANSMISSION: f64 = 0.934;

/// K·d 的安全分支阈值，低于此值取解析极限 Iavg = I0
const OPTICAL_PATH_EPSILON: f64 = 1e-9;

/// 光传输参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightParams {
    /// 比消光系数 ε [m²/g]
    pub epsilon: f64,
    /// 背景衰减系数 kb [1/m]（水体与非藻颗粒）
    pub kb: f64,
}

impl LightParams {
    /// 参数合法性检查（配置阶段一次性调用）
    pub fn validate(&self) -> ApResult<()> {
        if !(self.epsilon > 0.0) {
            return Err(ApError::config("epsilon", self.epsilon, "比消光系数必须为正"));
        }
        if !(self.kb >= 0.0) {
            return Err(ApError::config("kb", self.kb, "背景衰减系数不得为负"));
        }
        Ok(())
    }
}

/// 单小时光场计算结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightField {
    /// 表面直射 PAR [µmol/(m²·s)]（已计 Fresnel 透射）
    pub par_direct_surface: f64,
    /// 表面散射 PAR [µmol/(m²·s)]（已计定值透射）
    pub par_diffuse_surface: f64,
    /// 深度平均 PAR [µmol/(m²·s)]
    pub par_avg_culture: f64,
    /// 直射光 Fresnel 透射率 [-]
    pub fresnel_transmission: f64,
    /// 总衰减系数 K [1/m]
    pub attenuation: f64,
    /// 受光深度比例 [0,1]（诊断量）
    pub lighted_fraction: f64,
}

/// 直射光 Fresnel 透射率
///
/// 由太阳高度角求入射角，经 Snell 定律求折射角，
/// 取 s/p 偏振反射率的平均。正入射附近透射最大（约 0.98），
/// 低太阳高度角时迅速下降；太阳位于地平线下时为 0。
pub fn fresnel_transmission(solar_elevation_deg: f64) -> f64 {
    if solar_elevation_deg <= 0.0 {
        return 0.0;
    }
    let theta_i = (90.0 - solar_elevation_deg).to_radians();
    let n = WATER_REFRACTIVE_INDEX;
    let sin_t = theta_i.sin() / n;
    let theta_t = sin_t.asin();

    let cos_i = theta_i.cos();
    let cos_t = theta_t.cos();

    let r_s = ((cos_i - n * cos_t) / (cos_i + n * cos_t)).powi(2);
    let r_p = ((cos_t - n * cos_i) / (cos_t + n * cos_i)).powi(2);

    (1.0 - 0.5 * (r_s + r_p)).clamp(0.0, 1.0)
}

/// 总衰减系数 K [1/m]
///
/// `biomass` 单位 g/L，换算为 g/m³ 后乘比消光系数。
#[inline]
pub fn attenuation_coefficient(biomass: f64, params: &LightParams) -> f64 {
    params.epsilon * (biomass.max(0.0) * 1000.0) + params.kb
}

/// Beer-Lambert 深度平均光强
///
/// 光学厚度 K·d 趋于零时直接取解析极限 I0，避免近零除法。
#[inline]
pub fn depth_averaged_par(i0: f64, attenuation: f64, depth: f64) -> f64 {
    let optical_path = attenuation * depth;
    if optical_path < OPTICAL_PATH_EPSILON {
        i0
    } else {
        i0 * (1.0 - (-optical_path).exp()) / optical_path
    }
}

/// 受光深度比例 ∈ [0,1]
///
/// 补偿深度 z_c = ln(I0/I_comp)/K 以上的水柱比例。
/// 表面光强不足补偿光强时为 0；衰减可忽略时为 1。
pub fn lighted_fraction(i0: f64, attenuation: f64, depth: f64) -> f64 {
    if i0 <= COMPENSATION_PAR {
        return 0.0;
    }
    if attenuation * depth < OPTICAL_PATH_EPSILON {
        return 1.0;
    }
    let z_comp = (i0 / COMPENSATION_PAR).ln() / attenuation;
    (z_comp / depth).clamp(0.0, 1.0)
}

/// 计算单小时光场
///
/// # 参数
///
/// - `direct_radiation` / `diffuse_radiation`: 入射短波分量 [W/m²]
/// - `solar_elevation_deg`: 太阳高度角 [deg]
/// - `biomass`: 上一小时的生物质浓度 [g/L]
/// - `depth`: 水深 [m]
pub fn compute_light_field(
    direct_radiation: f64,
    diffuse_radiation: f64,
    solar_elevation_deg: f64,
    biomass: f64,
    depth: f64,
    params: &LightParams,
) -> LightField {
    let tau_direct = fresnel_transmission(solar_elevation_deg);

    let par_direct_surface =
        direct_radiation.max(0.0) * PAR_FRACTION * WATT_TO_UMOL_PAR * tau_direct;
    let par_diffuse_surface =
        diffuse_radiation.max(0.0) * PAR_FRACTION * WATT_TO_UMOL_PAR * DIFFUSE_TRANSMISSION;

    let i0 = par_direct_surface + par_diffuse_surface;
    let attenuation = attenuation_coefficient(biomass, params);

    LightField {
        par_direct_surface,
        par_diffuse_surface,
        par_avg_culture: depth_averaged_par(i0, attenuation, depth),
        fresnel_transmission: tau_direct,
        attenuation,
        lighted_fraction: lighted_fraction(i0, attenuation, depth),
    }
}
