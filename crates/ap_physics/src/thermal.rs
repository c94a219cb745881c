// crates/ap_physics/src/thermal.rs

//! 热平衡
//!
//! 逐小时计算八项表面热通量与净通量，并以集总热容推进池温：
//!
//! ```text
//! q_net = q_solar + q_lw_in − q_lw_out − q_evap − q_conv − q_cond − q_biomass + q_rain
//! dT/dt = q_net / (ρ · Cp · d)
//! ```
//!
//! 所有通量单位 W/m²，以损失项取正值、在 q_net 中带符号求和，
//! q_net 严格等于各分量的带符号和（记账恒等式）。
//!
//! # 模型出处
//!
//! - 蒸发风速函数: Sweers (1976)
//! - 大气发射率: Brunt 型晴空公式 + 云量修正
//! - 显热: Bowen 比法
//! - 饱和水汽压: Tetens 公式

use ap_foundation::constants::{
    BIOMASS_ENTHALPY, CELSIUS_TO_KELVIN, SECONDS_PER_HOUR, STEFAN_BOLTZMANN, WATER_ALBEDO,
    WATER_DENSITY, WATER_EMISSIVITY, WATER_SPECIFIC_HEAT,
};
use serde::{Deserialize, Serialize};

/// Bowen 系数 [hPa/°C]（显热/潜热通量比的压强当量）
const BOWEN_COEFFICIENT: f64 = 0.61;

/// 池底/土壤传热系数 [W/(m²·K)]（集总值，含底衬与表层土壤）
const SOIL_TRANSFER_COEFFICIENT: f64 = 0.6;

/// 热平衡输入（当前状态 + 当前小时气象）
#[derive(Debug, Clone, Copy)]
pub struct ThermalInput {
    /// 池温 [°C]
    pub pond_temperature: f64,
    /// 气温 [°C]
    pub air_temperature: f64,
    /// 相对湿度 [%]
    pub relative_humidity: f64,
    /// 云量 [0,1]
    pub cloud_cover: f64,
    /// 2 m 风速 [m/s]
    pub wind_speed: f64,
    /// 总短波辐射 [W/m²]
    pub shortwave_radiation: f64,
    /// 土壤温度 [°C]
    pub soil_temperature: f64,
    /// 降水 [mm/h]
    pub precipitation_mm: f64,
    /// 生物质浓度 [g/L]
    pub biomass: f64,
    /// 净比生长率 [1/day]
    pub net_growth_rate: f64,
    /// 水深 [m]
    pub depth: f64,
}

/// 八项热通量与净通量 [W/m²]
///
/// 冻结快照，生成后不再修改。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatFluxes {
    /// 吸收短波（扣除表面反照） [W/m²]
    pub q_solar: f64,
    /// 大气长波入射 [W/m²]
    pub q_longwave_in: f64,
    /// 池面长波发射 [W/m²]
    pub q_longwave_out: f64,
    /// 蒸发潜热损失 [W/m²]（凝结时为负）
    pub q_evap: f64,
    /// 与空气的显热交换 [W/m²]（池温高于气温时为正损失）
    pub q_convection: f64,
    /// 与池底土壤的传导 [W/m²]（池温高于土温时为正损失）
    pub q_conduction: f64,
    /// 生物质代谢项 [W/m²]（正生长时光合固定能量离开热池）
    pub q_biomass: f64,
    /// 降水显热 [W/m²]（雨水按气温进入，气温低于池温时为负）
    pub q_rain: f64,
    /// 净通量（带符号和） [W/m²]
    pub q_net: f64,
}

/// Tetens 饱和水汽压 [hPa]
#[inline]
pub fn saturation_vapor_pressure(t_celsius: f64) -> f64 {
    6.108 * (17.27 * t_celsius / (t_celsius + 237.3)).exp()
}

/// Sweers (1976) 蒸发风速函数 [W/(m²·hPa)]
#[inline]
pub fn wind_function(wind_speed: f64) -> f64 {
    4.4 + 1.82 * wind_speed.max(0.0)
}

/// 大气有效发射率 [-]
///
/// Brunt 型晴空发射率（随近地面水汽压增大）乘云量修正，上限 1。
#[inline]
pub fn atmospheric_emissivity(vapor_pressure_hpa: f64, cloud_cover: f64) -> f64 {
    let clear_sky = 0.605 + 0.048 * vapor_pressure_hpa.max(0.0).sqrt();
    let c = cloud_cover.clamp(0.0, 1.0);
    (clear_sky * (1.0 + 0.17 * c * c)).min(1.0)
}

/// 计算单小时热通量
pub fn compute_heat_fluxes(input: &ThermalInput) -> HeatFluxes {
    let t_w = input.pond_temperature;
    let t_a = input.air_temperature;

    // 短波：扣除表面反照
    let q_solar = input.shortwave_radiation.max(0.0) * (1.0 - WATER_ALBEDO);

    // 长波：大气入射与池面发射
    let e_s_air = saturation_vapor_pressure(t_a);
    let e_a = (input.relative_humidity / 100.0).clamp(0.0, 1.0) * e_s_air;
    let emissivity_air = atmospheric_emissivity(e_a, input.cloud_cover);
    let t_a_k = t_a + CELSIUS_TO_KELVIN;
    let t_w_k = t_w + CELSIUS_TO_KELVIN;
    let q_longwave_in = emissivity_air * STEFAN_BOLTZMANN * t_a_k.powi(4);
    let q_longwave_out = WATER_EMISSIVITY * STEFAN_BOLTZMANN * t_w_k.powi(4);

    // 蒸发：质量传输法，水面-空气水汽压差驱动
    let f_u = wind_function(input.wind_speed);
    let e_s_water = saturation_vapor_pressure(t_w);
    let q_evap = f_u * (e_s_water - e_a);

    // 显热：Bowen 比法
    let q_convection = BOWEN_COEFFICIENT * f_u * (t_w - t_a);

    // 底部传导
    let q_conduction = SOIL_TRANSFER_COEFFICIENT * (t_w - input.soil_temperature);

    // 生物质代谢：X [g/L] = [kg/m³]，质量通量 X·d·μ/86400 [kg/(m²·s)]
    let growth_mass_flux =
        input.biomass.max(0.0) * input.depth * input.net_growth_rate / 86_400.0;
    let q_biomass = growth_mass_flux * BIOMASS_ENTHALPY;

    // 降水显热：雨水按气温进入
    let rain_mass_flux = input.precipitation_mm.max(0.0) / 1000.0 / SECONDS_PER_HOUR
        * WATER_DENSITY;
    let q_rain = rain_mass_flux * WATER_SPECIFIC_HEAT * (t_a - t_w);

    let q_net = q_solar + q_longwave_in - q_longwave_out - q_evap - q_convection
        - q_conduction
        - q_biomass
        + q_rain;

    HeatFluxes {
        q_solar,
        q_longwave_in,
        q_longwave_out,
        q_evap,
        q_convection,
        q_conduction,
        q_biomass,
        q_rain,
        q_net,
    }
}

/// 集总热容温度更新（单步显式，步长 1 小时）
///
/// 返回值的有限性由调用方（步进器）检查并附加日/小时上下文，
/// 此处不截断：非有限结果是数值错误而非建模截断。
#[inline]
pub fn integrate_temperature(pond_temperature: f64, q_net: f64, depth: f64) -> f64 {
    pond_temperature
        + q_net * SECONDS_PER_HOUR / (WATER_DENSITY * WATER_SPECIFIC_HEAT * depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> ThermalInput {
        ThermalInput {
            pond_temperature: 25.0,
            air_temperature: 20.0,
            relative_humidity: 60.0,
            cloud_cover: 0.3,
            wind_speed: 2.0,
            shortwave_radiation: 600.0,
            soil_temperature: 18.0,
            precipitation_mm: 0.0,
            biomass: 0.5,
            net_growth_rate: 1.0,
            depth: 0.2,
        }
    }

    #[test]
    fn test_saturation_vapor_pressure_reference() {
        // 20°C 时约 23.4 hPa
        let e = saturation_vapor_pressure(20.0);
        assert!((e - 23.4).abs() < 0.5, "e_s(20) = {}", e);
        // 单调递增
        assert!(saturation_vapor_pressure(30.0) > e);
    }

    #[test]
    fn test_q_net_is_exact_signed_sum() {
        let q = compute_heat_fluxes(&base_input());
        let sum = q.q_solar + q.q_longwave_in - q.q_longwave_out - q.q_evap - q.q_convection
            - q.q_conduction
            - q.q_biomass
            + q.q_rain;
        assert!((q.q_net - sum).abs() < 1e-9);
    }

    #[test]
    fn test_solar_albedo_applied() {
        let q = compute_heat_fluxes(&base_input());
        assert!((q.q_solar - 600.0 * (1.0 - WATER_ALBEDO)).abs() < 1e-9);
    }

    #[test]
    fn test_evaporation_positive_when_pond_warmer_than_dewpoint() {
        let q = compute_heat_fluxes(&base_input());
        assert!(q.q_evap > 0.0);
    }

    #[test]
    fn test_convection_sign_follows_temperature_difference() {
        let mut input = base_input();
        let warm = compute_heat_fluxes(&input);
        assert!(warm.q_convection > 0.0, "池温高于气温应为损失");

        input.air_temperature = 30.0;
        let cold = compute_heat_fluxes(&input);
        assert!(cold.q_convection < 0.0, "气温高于池温应为增益");
    }

    #[test]
    fn test_biomass_term_sign() {
        let mut input = base_input();
        let growing = compute_heat_fluxes(&input);
        assert!(growing.q_biomass > 0.0, "正生长固定能量");

        input.net_growth_rate = -0.5;
        let decaying = compute_heat_fluxes(&input);
        assert!(decaying.q_biomass < 0.0, "负生长释放能量");
    }

    #[test]
    fn test_cloud_cover_increases_longwave_in() {
        let mut input = base_input();
        input.cloud_cover = 0.0;
        let clear = compute_heat_fluxes(&input);
        input.cloud_cover = 1.0;
        let overcast = compute_heat_fluxes(&input);
        assert!(overcast.q_longwave_in > clear.q_longwave_in);
    }

    #[test]
    fn test_rain_cools_warm_pond() {
        let mut input = base_input();
        input.precipitation_mm = 5.0;
        let q = compute_heat_fluxes(&input);
        assert!(q.q_rain < 0.0, "气温低于池温的降雨带走热量");
    }

    #[test]
    fn test_temperature_integration_direction() {
        // 100 W/m² 净通量，0.2 m 水深，一小时升温约 0.43 °C
        let t1 = integrate_temperature(25.0, 100.0, 0.2);
        let expected = 25.0 + 100.0 * 3600.0 / (WATER_DENSITY * WATER_SPECIFIC_HEAT * 0.2);
        assert!((t1 - expected).abs() < 1e-12);
        assert!(t1 > 25.0 && t1 < 25.5);

        let t2 = integrate_temperature(25.0, -100.0, 0.2);
        assert!(t2 < 25.0);
    }

    #[test]
    fn test_night_balance_cools_pond() {
        let mut input = base_input();
        input.shortwave_radiation = 0.0;
        input.air_temperature = 15.0;
        let q = compute_heat_fluxes(&input);
        assert!(q.q_net < 0.0, "夜间无短波时应净失热: {}", q.q_net);
    }
}
