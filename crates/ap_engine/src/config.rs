// crates/ap_engine/src/config.rs

//! 运行配置
//!
//! 每次运行不可变的完整配置（全 f64，便于 JSON 序列化）。
//! 模型选择以显式、参数齐全的变体写入配置；"当前选中的模型"
//! 属于 UI 层概念，引擎不做任何隐式默认解析。
//!
//! 校验在运行入口一次性完成：几何非正、动力学常数非正、
//! batch 模式目标浓度不低于阈值等均为配置错误，
//! 决不在步进途中出现。

use ap_foundation::error::{ApError, ApResult};
use ap_physics::geometry::PondGeometry;
use ap_physics::harvest::HarvestParams;
use ap_physics::kinetics::{LightResponse, NutrientResponse, TemperatureResponse};
use ap_physics::light::LightParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 池体设计尺寸
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PondConfig {
    /// 名义占地面积 [m²]
    #[serde(default = "default_area")]
    pub area: f64,
    /// 长宽比 [-]
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64,
    /// 水深 [m]（典型 0.1-0.3）
    #[serde(default = "default_depth")]
    pub depth: f64,
    /// 堤埂宽度 [m]
    #[serde(default)]
    pub berm_width: f64,
}

fn default_area() -> f64 {
    100.0
}
fn default_aspect_ratio() -> f64 {
    2.0
}
fn default_depth() -> f64 {
    0.2
}

impl Default for PondConfig {
    fn default() -> Self {
        Self {
            area: default_area(),
            aspect_ratio: default_aspect_ratio(),
            depth: default_depth(),
            berm_width: 0.0,
        }
    }
}

/// 生长动力学配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticsConfig {
    /// 最大比生长率 μ_max [1/day]（典型 0-4）
    #[serde(default = "default_mu_max")]
    pub mu_max: f64,
    /// 比死亡率 [1/day]
    #[serde(default = "default_death_rate")]
    pub death_rate: f64,
    /// 光响应模型
    #[serde(default = "default_light_response")]
    pub light_response: LightResponse,
    /// 温度响应模型
    #[serde(default = "default_temperature_response")]
    pub temperature_response: TemperatureResponse,
    /// 营养响应模型
    #[serde(default)]
    pub nutrient_response: NutrientResponse,
}

fn default_mu_max() -> f64 {
    1.5
}
fn default_death_rate() -> f64 {
    0.1
}
fn default_light_response() -> LightResponse {
    LightResponse::SingleOptimum { iopt: 300.0 }
}
fn default_temperature_response() -> TemperatureResponse {
    TemperatureResponse::GaussianSymmetric {
        t_opt: 30.0,
        alpha: 0.01,
    }
}

impl Default for KineticsConfig {
    fn default() -> Self {
        Self {
            mu_max: default_mu_max(),
            death_rate: default_death_rate(),
            light_response: default_light_response(),
            temperature_response: default_temperature_response(),
            nutrient_response: NutrientResponse::default(),
        }
    }
}

/// 初始状态
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialState {
    /// 初始生物质浓度 [g/L]
    #[serde(default = "default_density")]
    pub density: f64,
    /// 初始池温 [°C]
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_density() -> f64 {
    0.1
}
fn default_temperature() -> f64 {
    22.0
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            density: default_density(),
            temperature: default_temperature(),
        }
    }
}

/// 完整运行配置（每次运行不可变）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// 池体尺寸
    #[serde(default)]
    pub pond: PondConfig,
    /// 生长动力学
    #[serde(default)]
    pub kinetics: KineticsConfig,
    /// 光传输参数
    #[serde(default = "default_light_params")]
    pub light: LightParams,
    /// 初始状态
    #[serde(default)]
    pub initial: InitialState,
    /// 收获策略
    #[serde(default)]
    pub harvest: HarvestParams,
}

fn default_light_params() -> LightParams {
    LightParams {
        epsilon: 0.15,
        kb: 0.5,
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            pond: PondConfig::default(),
            kinetics: KineticsConfig::default(),
            light: default_light_params(),
            initial: InitialState::default(),
            harvest: HarvestParams::default(),
        }
    }
}

impl SimulationConfig {
    /// 入口一次性校验
    ///
    /// 聚合几何、动力学、光传输与收获参数的全部检查，
    /// 任何失败都发生在第一步推进之前。
    pub fn validate(&self) -> ApResult<()> {
        // 几何检查含在构造中
        self.geometry()?;

        if !(self.kinetics.mu_max > 0.0) {
            return Err(ApError::config("mu_max", self.kinetics.mu_max, "必须为正"));
        }
        if !(self.kinetics.death_rate >= 0.0) {
            return Err(ApError::config(
                "death_rate",
                self.kinetics.death_rate,
                "不得为负",
            ));
        }
        self.kinetics.light_response.validate()?;
        self.kinetics.temperature_response.validate()?;
        self.kinetics.nutrient_response.validate()?;
        self.light.validate()?;

        if !(self.initial.density >= 0.0) {
            return Err(ApError::config(
                "initial_density",
                self.initial.density,
                "不得为负",
            ));
        }
        self.harvest.validate()?;
        Ok(())
    }

    /// 推导池体几何（每次运行一次）
    pub fn geometry(&self) -> ApResult<PondGeometry> {
        PondGeometry::from_dimensions(
            self.pond.area,
            self.pond.aspect_ratio,
            self.pond.depth,
            self.pond.berm_width,
        )
    }

    /// 从 JSON 字符串解析（解析后立即校验）
    pub fn from_json_str(json: &str) -> ApResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ApError::parse(format!("配置 JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> ApResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ApError::io(format!("读取配置文件 {}", path.display()), e))?;
        Self::from_json_str(&text)
    }
}
