// crates/ap_engine/src/stepper.rs

//! 步进器
//!
//! 逐小时驱动各物理模型，产出有序、不可变的轨迹。
//! 每小时固定顺序：
//!
//! ```text
//! 气象解析 → 光传输（用上一小时密度） → 生长动力学（对 Iavg 求值）
//! → 生物质积分 → 热平衡 → 水量平衡 → 收获控制 → 生产率 → 记录
//! ```
//!
//! # 积分格式
//!
//! 生物质采用指数生长单步积分（本引擎唯一的积分格式）：
//!
//! ```text
//! X_{t+1} = X_t · e^{μ_net/24}
//! ```
//!
//! 对大生长率仍无条件稳定，且保证浓度非负。
//! 池温采用单步显式欧拉（见 [`ap_physics::thermal`]）。
//!
//! # 失败模式
//!
//! 配置与气象源在入口一次性校验；步进途中任何非有限量
//! 立即以 `Numerical` 错误中止，携带出错的日/小时与量名，
//! 决不以截断值继续。

use ap_foundation::constants::{HOURS_PER_DAY, LITERS_PER_CUBIC_METER};
use ap_foundation::error::ApResult;
use ap_foundation::float::ensure_finite;
use ap_physics::harvest::HarvestController;
use ap_physics::kinetics::{net_growth_rate, GrowthFactors};
use ap_physics::light::compute_light_field;
use ap_physics::thermal::{compute_heat_fluxes, integrate_temperature, ThermalInput};
use ap_physics::water::{apply_flows_to_volume, compute_water_flows};
use log::{debug, info};

use crate::config::SimulationConfig;
use crate::timestep::Timestep;
use crate::weather::{WeatherSource, HOURS};

/// 运行一次完整模拟
///
/// 纯函数：相同的配置与气象必产生逐位相同的轨迹。
/// 单线程、同步、无 IO；独立运行之间可自由并行。
pub fn simulate(
    config: &SimulationConfig,
    weather: &WeatherSource,
    total_days: usize,
) -> ApResult<Vec<Timestep>> {
    config.validate()?;
    weather.validate()?;
    let geometry = config.geometry()?;

    info!(
        "模拟启动: {} 天, 水面 {:.1} m², 收获模式 {}",
        total_days,
        geometry.surface_area,
        config.harvest.mode.name()
    );

    let mut density = config.initial.density;
    let mut temperature = config.initial.temperature;
    let mut volume_m3 = geometry.volume;
    let mut pending_harvest_loss_l = 0.0;
    let mut controller = HarvestController::new(config.harvest);

    let mut trajectory = Vec::with_capacity(total_days * HOURS);

    for day in 0..total_days {
        for hour in 0..HOURS {
            let w = *weather.sample(day, hour);

            // 光传输：用上一小时的密度（本小时开始时的光学状态）
            let light = compute_light_field(
                w.direct_radiation,
                w.diffuse_radiation,
                w.solar_elevation,
                density,
                geometry.depth,
                &config.light,
            );

            // 生长动力学：光响应因子针对深度平均 PAR
            let f_light = config.kinetics.light_response.compute(light.par_avg_culture);
            let f_temperature = config.kinetics.temperature_response.compute(temperature);
            let f_nutrient = config.kinetics.nutrient_response.compute();
            let net_rate = net_growth_rate(
                config.kinetics.mu_max,
                f_light,
                f_temperature,
                f_nutrient,
                config.kinetics.death_rate,
            );
            let growth = GrowthFactors {
                f_light,
                f_temperature,
                f_nutrient,
                net_rate,
            };

            // 生物质积分（指数单步，浓度恒非负）
            let grown_density = ensure_finite(
                density * (net_rate / HOURS_PER_DAY).exp(),
                day,
                hour,
                "biomass_concentration",
            )?;

            // 热平衡
            let fluxes = compute_heat_fluxes(&ThermalInput {
                pond_temperature: temperature,
                air_temperature: w.air_temperature,
                relative_humidity: w.relative_humidity,
                cloud_cover: w.cloud_cover,
                wind_speed: w.wind_speed_2m,
                shortwave_radiation: w.shortwave_radiation,
                soil_temperature: w.soil_temperature,
                precipitation_mm: w.precipitation_mm,
                biomass: grown_density,
                net_growth_rate: net_rate,
                depth: geometry.depth,
            });
            ensure_finite(fluxes.q_net, day, hour, "q_net")?;
            let new_temperature = ensure_finite(
                integrate_temperature(temperature, fluxes.q_net, geometry.depth),
                day,
                hour,
                "pond_temperature",
            )?;

            // 水量平衡（收获项稍后填入）
            let water = compute_water_flows(
                fluxes.q_evap,
                w.precipitation_mm,
                geometry.surface_area,
                pending_harvest_loss_l,
            );
            let mut new_volume_m3 = ensure_finite(
                apply_flows_to_volume(volume_m3, &water, geometry.volume),
                day,
                hour,
                "culture_volume",
            )?;

            // 收获控制：作用于后生长状态
            let (event, harvested_density, new_volume_l) =
                controller.step(grown_density, new_volume_m3 * LITERS_PER_CUBIC_METER);
            new_volume_m3 = new_volume_l / LITERS_PER_CUBIC_METER;
            if event.occurred {
                debug!(
                    "第 {} 天第 {} 小时收获 {:.2} kg, 移出 {:.0} L",
                    day, hour, event.mass_kg, event.water_removed_l
                );
            }

            // 生产率：体积生产率由小时生长增量外推到日，
            // 面积生产率按当前平均培养深度换算
            let productivity_volumetric = (grown_density - density) * HOURS_PER_DAY;
            let productivity_areal = productivity_volumetric * LITERS_PER_CUBIC_METER
                * new_volume_m3
                / geometry.surface_area;

            let mut record = Timestep {
                day,
                hour,
                biomass_concentration: harvested_density,
                pond_temperature: new_temperature,
                culture_volume_m3: new_volume_m3,
                growth,
                light,
                fluxes,
                water,
                weather: w,
                productivity_volumetric,
                productivity_areal,
                harvest_occurred: false,
                harvest_mass_kg: 0.0,
            };
            record.apply_harvest(&event);
            pending_harvest_loss_l = record.water.harvest_net_loss_l();
            trajectory.push(record);

            density = harvested_density;
            temperature = new_temperature;
            volume_m3 = new_volume_m3;
        }
    }

    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::tests_support::constant_sample;
    use crate::weather::{WeatherDay, WeatherSource};

    fn constant_source() -> WeatherSource {
        WeatherSource::SingleDay {
            day: WeatherDay::new(vec![constant_sample(22.0); 24]).unwrap(),
        }
    }

    #[test]
    fn test_record_count_matches_days() {
        let config = SimulationConfig::default();
        let trajectory = simulate(&config, &constant_source(), 3).unwrap();
        assert_eq!(trajectory.len(), 3 * 24);
        assert_eq!(trajectory[0].day, 0);
        assert_eq!(trajectory[0].hour, 0);
        assert_eq!(trajectory.last().unwrap().day, 2);
        assert_eq!(trajectory.last().unwrap().hour, 23);
    }

    #[test]
    fn test_zero_days_yields_empty_trajectory() {
        let config = SimulationConfig::default();
        let trajectory = simulate(&config, &constant_source(), 0).unwrap();
        assert!(trajectory.is_empty());
    }

    #[test]
    fn test_invalid_config_fails_before_stepping() {
        let mut config = SimulationConfig::default();
        config.kinetics.mu_max = -1.0;
        let err = simulate(&config, &constant_source(), 1).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_concentration_never_negative() {
        // 高死亡率长跑：指数积分保证浓度非负
        let mut config = SimulationConfig::default();
        config.kinetics.death_rate = 3.0;
        let trajectory = simulate(&config, &constant_source(), 10).unwrap();
        for ts in &trajectory {
            assert!(ts.biomass_concentration >= 0.0);
        }
    }
}
