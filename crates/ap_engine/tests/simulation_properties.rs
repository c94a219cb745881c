// crates/ap_engine/tests/simulation_properties.rs

//! 模拟轨迹性质验证测试
//!
//! 对完整逐小时轨迹检验引擎的守恒与策略性质：
//!
//! - 收获策略（none / semi_continuous / batch）的字段与阈值行为
//! - 生长因子取值范围
//! - 热通量记账恒等式
//! - 确定性（逐位可复现）
//! - 气象日回绕
//! - 零生物质透明水体极限

use ap_engine::config::SimulationConfig;
use ap_engine::stepper::simulate;
use ap_engine::weather::{WeatherDay, WeatherSample, WeatherSource};
use ap_physics::harvest::HarvestMode;
use ap_physics::kinetics::{LightResponse, TemperatureResponse};

// ============================================================================
// 测试辅助函数
// ============================================================================

/// 正弦日变化的一日气象剖面
///
/// 白昼 6-18 时，太阳高度角与辐射按正弦分布，夜间为零。
fn synthetic_day(peak_air_temp: f64, peak_radiation: f64, precipitation_mm: f64) -> WeatherDay {
    let samples = (0..24)
        .map(|h| {
            let hour = h as f64;
            let daylight = (hour - 6.0) / 12.0;
            let (elevation, solar) = if (0.0..=1.0).contains(&daylight) {
                let s = (daylight * std::f64::consts::PI).sin();
                (s * 65.0, s * peak_radiation)
            } else {
                (-10.0, 0.0)
            };
            WeatherSample {
                air_temperature: peak_air_temp - 6.0 + 6.0 * (elevation.max(0.0) / 65.0),
                relative_humidity: 55.0,
                dew_point: 12.0,
                cloud_cover: 0.2,
                wind_speed_2m: 2.0,
                wind_speed_10m: 3.2,
                precipitation_mm,
                direct_radiation: solar * 0.7,
                diffuse_radiation: solar * 0.3,
                shortwave_radiation: solar,
                soil_temperature: peak_air_temp - 5.0,
                solar_elevation: elevation,
                solar_azimuth: 90.0 + daylight.clamp(0.0, 1.0) * 180.0,
            }
        })
        .collect();
    WeatherDay::new(samples).unwrap()
}

fn single_day_source() -> WeatherSource {
    WeatherSource::SingleDay {
        day: synthetic_day(26.0, 850.0, 0.0),
    }
}

/// 高生长配置：浅水、低消光，保证数日内跨越收获阈值
fn fast_growth_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.pond.depth = 0.15;
    config.kinetics.mu_max = 3.0;
    config.kinetics.death_rate = 0.05;
    config.kinetics.light_response = LightResponse::SingleOptimum { iopt: 250.0 };
    config.kinetics.temperature_response = TemperatureResponse::GaussianSymmetric {
        t_opt: 26.0,
        alpha: 0.005,
    };
    config.light.epsilon = 0.05;
    config.light.kb = 0.2;
    config.initial.density = 0.4;
    config
}

// ============================================================================
// 收获策略性质
// ============================================================================

#[test]
fn no_harvest_mode_keeps_harvest_fields_zero() {
    let mut config = fast_growth_config();
    config.harvest.mode = HarvestMode::None;
    let trajectory = simulate(&config, &single_day_source(), 7).unwrap();
    for ts in &trajectory {
        assert!(!ts.harvest_occurred);
        assert_eq!(ts.harvest_mass_kg, 0.0);
        assert_eq!(ts.water.harvest_removed_l, 0.0);
        assert_eq!(ts.water.harvest_returned_l, 0.0);
    }
}

#[test]
fn biomass_non_decreasing_without_harvest_and_positive_rate() {
    let mut config = fast_growth_config();
    config.harvest.mode = HarvestMode::None;
    let trajectory = simulate(&config, &single_day_source(), 7).unwrap();
    for pair in trajectory.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.growth.net_rate > 0.0 && !next.harvest_occurred {
            assert!(
                next.biomass_concentration >= prev.biomass_concentration,
                "第 {} 天第 {} 小时正生长率下浓度下降",
                next.day,
                next.hour
            );
        }
    }
}

#[test]
fn semi_continuous_never_exceeds_threshold_by_more_than_one_hour_growth() {
    let mut config = fast_growth_config();
    config.harvest.mode = HarvestMode::SemiContinuous;
    config.harvest.threshold = 0.8;
    let trajectory = simulate(&config, &single_day_source(), 14).unwrap();

    // 单小时最大生长倍数
    let max_hourly_factor = (config.kinetics.mu_max / 24.0).exp();
    let ceiling = config.harvest.threshold * max_hourly_factor + 1e-9;
    let mut harvested = 0;
    for ts in &trajectory {
        assert!(
            ts.biomass_concentration <= ceiling,
            "第 {} 天第 {} 小时浓度 {} 超出撇除上限",
            ts.day,
            ts.hour,
            ts.biomass_concentration
        );
        if ts.harvest_occurred {
            harvested += 1;
            // 撇除后回到阈值
            assert!((ts.biomass_concentration - config.harvest.threshold).abs() < 1e-9);
            assert!(ts.harvest_mass_kg > 0.0);
        }
    }
    assert!(harvested > 0, "14 天内应发生撇除");
}

#[test]
fn batch_dilutes_to_target_exactly_once_per_crossing() {
    let mut config = fast_growth_config();
    config.harvest.mode = HarvestMode::Batch;
    config.harvest.threshold = 1.0;
    config.harvest.target = 0.5;
    let trajectory = simulate(&config, &single_day_source(), 10).unwrap();

    let mut events = 0;
    for ts in &trajectory {
        if ts.harvest_occurred {
            events += 1;
            assert!(
                (ts.biomass_concentration - 0.5).abs() < 1e-6,
                "放料后浓度应为目标值，得到 {}",
                ts.biomass_concentration
            );
            assert!(ts.harvest_mass_kg > 0.0);
            assert!(ts.water.harvest_removed_l > 0.0);
            // 80/20 返还比例
            assert!(
                (ts.water.harvest_returned_l - 0.8 * ts.water.harvest_removed_l).abs() < 1e-6
            );
        } else {
            // 未放料的小时浓度必低于阈值（否则应已触发）
            assert!(
                ts.biomass_concentration < config.harvest.threshold,
                "第 {} 天第 {} 小时未触发放料但浓度 {} 达到阈值",
                ts.day,
                ts.hour,
                ts.biomass_concentration
            );
        }
    }
    assert!(events >= 1, "生长足以跨越阈值时应至少放料一次");
}

// ============================================================================
// 数值性质
// ============================================================================

#[test]
fn growth_factors_stay_in_unit_interval() {
    let trajectory = simulate(&fast_growth_config(), &single_day_source(), 7).unwrap();
    for ts in &trajectory {
        assert!((0.0..=1.0).contains(&ts.growth.f_light));
        assert!((0.0..=1.0).contains(&ts.growth.f_temperature));
        assert!((0.0..=1.0).contains(&ts.growth.f_nutrient));
        assert!((0.0..=1.0).contains(&ts.light.lighted_fraction));
    }
}

#[test]
fn q_net_equals_signed_sum_of_components() {
    let trajectory = simulate(&fast_growth_config(), &single_day_source(), 7).unwrap();
    for ts in &trajectory {
        let q = &ts.fluxes;
        let sum = q.q_solar + q.q_longwave_in - q.q_longwave_out - q.q_evap - q.q_convection
            - q.q_conduction
            - q.q_biomass
            + q.q_rain;
        assert!(
            (q.q_net - sum).abs() < 1e-9,
            "第 {} 天第 {} 小时记账恒等式破坏: {} vs {}",
            ts.day,
            ts.hour,
            q.q_net,
            sum
        );
    }
}

#[test]
fn identical_inputs_give_identical_trajectories() {
    let config = fast_growth_config();
    let source = single_day_source();
    let a = simulate(&config, &source, 5).unwrap();
    let b = simulate(&config, &source, 5).unwrap();
    assert_eq!(a, b);
}

#[test]
fn nonfinite_temperature_aborts_with_day_hour_and_quantity() {
    // 极小水深通过正值校验，但集总热容更新在第一小时溢出。
    // 运行必须以数值错误中止并报告出错位置，决不以截断值继续。
    let mut config = SimulationConfig::default();
    config.pond.depth = 1e-310;
    let err = simulate(&config, &single_day_source(), 3).unwrap_err();
    match err {
        ap_foundation::error::ApError::Numerical {
            day,
            hour,
            quantity,
            value,
        } => {
            assert_eq!(day, 0);
            assert_eq!(hour, 0);
            assert_eq!(quantity, "pond_temperature");
            assert!(!value.is_finite());
        }
        other => panic!("期望数值错误，得到 {other}"),
    }
}

#[test]
fn volume_stays_within_operating_range() {
    let mut config = fast_growth_config();
    config.harvest.mode = HarvestMode::Batch;
    config.harvest.threshold = 1.0;
    config.harvest.target = 0.5;
    let geometry = config.geometry().unwrap();
    // 含降雨日：体积上限为满水深体积
    let source = WeatherSource::MultiDay {
        days: vec![
            synthetic_day(26.0, 850.0, 0.0),
            synthetic_day(22.0, 400.0, 4.0),
        ],
    };
    let trajectory = simulate(&config, &source, 14).unwrap();
    for ts in &trajectory {
        assert!(ts.culture_volume_m3 <= geometry.volume + 1e-9);
        // 批次放料瞬时净损失约为体积的 11%（0.2·V_rem），补水随后回补
        assert!(ts.culture_volume_m3 > 0.85 * geometry.volume);
    }
}

// ============================================================================
// 气象源行为
// ============================================================================

#[test]
fn weather_days_wrap_when_run_is_longer() {
    let days = vec![
        synthetic_day(20.0, 700.0, 0.0),
        synthetic_day(25.0, 800.0, 0.0),
        synthetic_day(30.0, 900.0, 0.0),
    ];
    let source = WeatherSource::MultiDay { days: days.clone() };
    let trajectory = simulate(&SimulationConfig::default(), &source, 5).unwrap();
    assert_eq!(trajectory.len(), 5 * 24);

    // 第 3 天回绕到第 0 天的剖面，第 4 天回绕到第 1 天
    let day3_noon = &trajectory[3 * 24 + 12];
    let day0_noon = &trajectory[12];
    assert_eq!(
        day3_noon.weather.air_temperature,
        day0_noon.weather.air_temperature
    );
    let day4_noon = &trajectory[4 * 24 + 12];
    assert_eq!(
        day4_noon.weather.air_temperature,
        days[1].hour(12).air_temperature
    );
}

#[test]
fn empty_weather_source_is_rejected_before_stepping() {
    let source = WeatherSource::MultiDay { days: vec![] };
    let err = simulate(&SimulationConfig::default(), &source, 1).unwrap_err();
    assert!(matches!(
        err,
        ap_foundation::error::ApError::WeatherUnavailable { .. }
    ));
}

// ============================================================================
// 光学极限场景
// ============================================================================

#[test]
fn zero_biomass_clear_water_sees_full_surface_par() {
    let mut config = SimulationConfig::default();
    config.initial.density = 0.0;
    config.kinetics.mu_max = 0.5;
    config.kinetics.death_rate = 0.0;
    config.light.kb = 0.0;

    // 正午太阳在天顶
    let samples = (0..24)
        .map(|_| WeatherSample {
            air_temperature: 25.0,
            relative_humidity: 50.0,
            dew_point: 14.0,
            cloud_cover: 0.0,
            wind_speed_2m: 1.0,
            wind_speed_10m: 1.6,
            precipitation_mm: 0.0,
            direct_radiation: 650.0,
            diffuse_radiation: 150.0,
            shortwave_radiation: 800.0,
            soil_temperature: 22.0,
            solar_elevation: 90.0,
            solar_azimuth: 180.0,
        })
        .collect();
    let source = WeatherSource::SingleDay {
        day: WeatherDay::new(samples).unwrap(),
    };

    let trajectory = simulate(&config, &source, 1).unwrap();
    let first = &trajectory[0];
    let surface = first.light.par_direct_surface + first.light.par_diffuse_surface;
    // 无自遮光：深度平均 PAR 等于表面 PAR
    assert!((first.light.par_avg_culture - surface).abs() < 1e-9);
    // 正入射 Fresnel 透射接近最大
    assert!(first.light.fresnel_transmission > 0.97);
}
