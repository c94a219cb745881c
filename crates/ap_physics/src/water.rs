// crates/ap_physics/src/water.rs

//! 水量平衡
//!
//! 逐小时计算蒸发、降雨与补水量，并推进培养液体积。
//! 蒸发质量由热平衡的潜热项换算（q_evap·A·3600/L_vap）。
//!
//! # 补水策略
//!
//! 补水补偿净亏缺：蒸发 − 降雨 + 上一小时收获未返还水量，
//! 取 `max(0, 亏缺)`。收获发生在本小时水量更新之后，
//! 其未返还体积计入下一小时的亏缺项。
//!
//! 体积上限为满水深体积（降雨过量时溢流），下限由补水策略保证。

use ap_foundation::constants::{LATENT_HEAT_VAPORIZATION, LITERS_PER_CUBIC_METER, SECONDS_PER_HOUR};
use serde::{Deserialize, Serialize};

/// 单小时水流量记录 [L]
///
/// 收获字段在收获控制器求值后由步进器填入。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WaterFlows {
    /// 蒸发损失 [L]（凝结时为负）
    pub evaporation_l: f64,
    /// 降雨增益 [L]
    pub rainfall_l: f64,
    /// 补水增益 [L]
    pub makeup_l: f64,
    /// 收获移出水量 [L]
    pub harvest_removed_l: f64,
    /// 收获返还水量 [L]
    pub harvest_returned_l: f64,
}

impl WaterFlows {
    /// 收获净损失 [L]
    #[inline]
    pub fn harvest_net_loss_l(&self) -> f64 {
        self.harvest_removed_l - self.harvest_returned_l
    }
}

/// 蒸发体积 [L]
///
/// 潜热通量 [W/m²] × 面积 × 3600 s / 蒸发潜热，kg ≈ L。
#[inline]
pub fn evaporation_liters(q_evap: f64, surface_area: f64) -> f64 {
    q_evap * surface_area * SECONDS_PER_HOUR / LATENT_HEAT_VAPORIZATION
}

/// 降雨体积 [L]
///
/// mm/h × m² 恰为 L/h。
#[inline]
pub fn rainfall_liters(precipitation_mm: f64, surface_area: f64) -> f64 {
    precipitation_mm.max(0.0) * surface_area
}

/// 补水体积 [L]
///
/// `pending_harvest_loss_l` 为上一小时收获未返还水量。
#[inline]
pub fn makeup_liters(evaporation_l: f64, rainfall_l: f64, pending_harvest_loss_l: f64) -> f64 {
    (evaporation_l - rainfall_l + pending_harvest_loss_l).max(0.0)
}

/// 计算单小时水流量（收获字段为零，稍后填入）
pub fn compute_water_flows(
    q_evap: f64,
    precipitation_mm: f64,
    surface_area: f64,
    pending_harvest_loss_l: f64,
) -> WaterFlows {
    let evaporation_l = evaporation_liters(q_evap, surface_area);
    let rainfall_l = rainfall_liters(precipitation_mm, surface_area);
    let makeup_l = makeup_liters(evaporation_l, rainfall_l, pending_harvest_loss_l);
    WaterFlows {
        evaporation_l,
        rainfall_l,
        makeup_l,
        harvest_removed_l: 0.0,
        harvest_returned_l: 0.0,
    }
}

/// 体积更新（不含收获项）[m³]
///
/// 上限为满水深体积，超出部分溢流。
#[inline]
pub fn apply_flows_to_volume(volume_m3: f64, flows: &WaterFlows, full_volume_m3: f64) -> f64 {
    let delta_l = flows.rainfall_l + flows.makeup_l - flows.evaporation_l;
    (volume_m3 + delta_l / LITERS_PER_CUBIC_METER).min(full_volume_m3)
}
