// crates/ap_physics/src/lib.rs

//! 物理模型层
//!
//! 提供藻类跑道池模拟的全部构成模型，包括：
//! - 池体几何 (geometry)
//! - 生长动力学 (kinetics) - 光响应、温度响应、营养响应
//! - 光传输 (light) - 表面 PAR、Fresnel 透射、Beer-Lambert 深度平均
//! - 热平衡 (thermal) - 逐项热通量与集总温度更新
//! - 水量平衡 (water) - 蒸发、降雨、补水、体积更新
//! - 收获控制 (harvest) - none / 半连续 / 批次 三种策略
//!
//! # 设计原则
//!
//! 1. **纯函数**: 所有模型无内部状态，相同输入必产生相同输出
//! 2. **封闭变体**: 可选方程族用带参数的枚举表示，按标签分发，
//!    新增变体时编译器强制穷举检查
//! 3. **建模性截断与数值错误分离**: 生长因子截断到 [0,1] 属于建模决定；
//!    NaN/Inf 属于数值错误，决不以截断掩盖

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod geometry;
pub mod harvest;
pub mod kinetics;
pub mod light;
pub mod thermal;
pub mod water;

pub use geometry::PondGeometry;
pub use harvest::{HarvestController, HarvestEvent, HarvestMode, HarvestParams};
pub use kinetics::{
    net_growth_rate, GrowthFactors, LightResponse, NutrientResponse, TemperatureResponse,
};
pub use light::{LightField, LightParams};
pub use thermal::{HeatFluxes, ThermalInput};
pub use water::WaterFlows;
