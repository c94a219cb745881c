// crates/ap_engine/src/timestep.rs

//! 轨迹记录
//!
//! 每模拟小时一条记录，追加后不可变。完整轨迹是一次运行
//! 唯一的持久输出，重跑时整体替换。
//!
//! 平面导出（每小时一行）依赖稳定列序，列序由 [`COLUMNS`]
//! 与 [`Timestep::csv_row`] 共同保证，修改时必须同步。

use ap_physics::harvest::HarvestEvent;
use ap_physics::kinetics::GrowthFactors;
use ap_physics::light::LightField;
use ap_physics::thermal::HeatFluxes;
use ap_physics::water::WaterFlows;
use serde::{Deserialize, Serialize};

use crate::weather::WeatherSample;

/// 单小时轨迹记录（冻结快照）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timestep {
    /// 模拟日（从 0 开始）
    pub day: usize,
    /// 小时（0-23）
    pub hour: usize,
    /// 小时末生物质浓度 [g/L]
    pub biomass_concentration: f64,
    /// 小时末池温 [°C]
    pub pond_temperature: f64,
    /// 小时末培养液体积 [m³]
    pub culture_volume_m3: f64,
    /// 生长因子与净生长率
    pub growth: GrowthFactors,
    /// 光场
    pub light: LightField,
    /// 热通量
    pub fluxes: HeatFluxes,
    /// 水流量
    pub water: WaterFlows,
    /// 回显的当小时气象
    pub weather: WeatherSample,
    /// 体积生产率 [g/(L·day)]
    pub productivity_volumetric: f64,
    /// 面积生产率 [g/(m²·day)]
    pub productivity_areal: f64,
    /// 本小时是否发生收获
    pub harvest_occurred: bool,
    /// 收获干重 [kg]
    pub harvest_mass_kg: f64,
}

/// 平面导出的稳定列序
pub const COLUMNS: &[&str] = &[
    "day",
    "hour",
    "biomass_concentration",
    "pond_temperature",
    "culture_volume_m3",
    "net_growth_rate",
    "f_light",
    "f_temperature",
    "f_nutrient",
    "lighted_fraction",
    "par_direct_surface",
    "par_diffuse_surface",
    "par_avg_culture",
    "fresnel_transmission",
    "productivity_volumetric",
    "productivity_areal",
    "q_solar",
    "q_longwave_in",
    "q_longwave_out",
    "q_evap",
    "q_convection",
    "q_conduction",
    "q_biomass",
    "q_rain",
    "q_net",
    "air_temperature",
    "relative_humidity",
    "dew_point",
    "cloud_cover",
    "wind_speed_2m",
    "wind_speed_10m",
    "precipitation_mm",
    "direct_radiation",
    "diffuse_radiation",
    "shortwave_radiation",
    "soil_temperature",
    "solar_elevation",
    "solar_azimuth",
    "evaporation_l",
    "rainfall_l",
    "makeup_l",
    "harvest_removed_l",
    "harvest_returned_l",
    "harvest_occurred",
    "harvest_mass_kg",
];

impl Timestep {
    /// 导出表头行
    pub fn csv_header() -> String {
        COLUMNS.join(",")
    }

    /// 导出一行（与 [`COLUMNS`] 同序）
    pub fn csv_row(&self) -> String {
        let fields: Vec<String> = vec![
            self.day.to_string(),
            self.hour.to_string(),
            format_value(self.biomass_concentration),
            format_value(self.pond_temperature),
            format_value(self.culture_volume_m3),
            format_value(self.growth.net_rate),
            format_value(self.growth.f_light),
            format_value(self.growth.f_temperature),
            format_value(self.growth.f_nutrient),
            format_value(self.light.lighted_fraction),
            format_value(self.light.par_direct_surface),
            format_value(self.light.par_diffuse_surface),
            format_value(self.light.par_avg_culture),
            format_value(self.light.fresnel_transmission),
            format_value(self.productivity_volumetric),
            format_value(self.productivity_areal),
            format_value(self.fluxes.q_solar),
            format_value(self.fluxes.q_longwave_in),
            format_value(self.fluxes.q_longwave_out),
            format_value(self.fluxes.q_evap),
            format_value(self.fluxes.q_convection),
            format_value(self.fluxes.q_conduction),
            format_value(self.fluxes.q_biomass),
            format_value(self.fluxes.q_rain),
            format_value(self.fluxes.q_net),
            format_value(self.weather.air_temperature),
            format_value(self.weather.relative_humidity),
            format_value(self.weather.dew_point),
            format_value(self.weather.cloud_cover),
            format_value(self.weather.wind_speed_2m),
            format_value(self.weather.wind_speed_10m),
            format_value(self.weather.precipitation_mm),
            format_value(self.weather.direct_radiation),
            format_value(self.weather.diffuse_radiation),
            format_value(self.weather.shortwave_radiation),
            format_value(self.weather.soil_temperature),
            format_value(self.weather.solar_elevation),
            format_value(self.weather.solar_azimuth),
            format_value(self.water.evaporation_l),
            format_value(self.water.rainfall_l),
            format_value(self.water.makeup_l),
            format_value(self.water.harvest_removed_l),
            format_value(self.water.harvest_returned_l),
            (self.harvest_occurred as u8).to_string(),
            format_value(self.harvest_mass_kg),
        ];
        fields.join(",")
    }

    /// 由收获事件回填收获字段
    pub(crate) fn apply_harvest(&mut self, event: &HarvestEvent) {
        self.harvest_occurred = event.occurred;
        self.harvest_mass_kg = event.mass_kg;
        self.water.harvest_removed_l = event.water_removed_l;
        self.water.harvest_returned_l = event.water_returned_l;
    }
}

fn format_value(v: f64) -> String {
    format!("{v:.6}")
}
