// crates/ap_engine/src/lib.rs

//! 模拟引擎层
//!
//! 将物理层各模型按固定顺序耦合为单一前向推进轨迹，包括：
//! - 气象源 (weather) - 单日循环或多日序列，按模取余回绕
//! - 运行配置 (config) - 不可变配置与入口一次性校验
//! - 轨迹记录 (timestep) - 逐小时冻结快照，列序稳定
//! - 步进器 (stepper) - 纯函数 (weather, config, days) → Timestep[]
//!
//! # 并发与资源模型
//!
//! 引擎是纯的、单线程、同步批计算：一次运行在单次调用内完成，
//! 无内部挂起点、无 IO、无全局可变状态。气象数据在运行前必须
//! 全部在内存中。独立运行之间可平凡并行；单次运行内小时间
//! 顺序依赖，不可并行。
//!
//! 下游展示层对相邻小时记录的插值动画是独立的模块，
//! 与引擎不共享任何可变状态。

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod stepper;
pub mod timestep;
pub mod weather;

pub use config::{InitialState, KineticsConfig, PondConfig, SimulationConfig};
pub use stepper::simulate;
pub use timestep::Timestep;
pub use weather::{WeatherDay, WeatherSample, WeatherSource};
