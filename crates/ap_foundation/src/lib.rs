// crates/ap_foundation/src/lib.rs

//! AlgaePond Foundation Layer
//!
//! 零依赖基础层，提供整个项目的基础抽象。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型（配置错误、数值错误、气象数据错误）
//! - [`constants`]: 物理常量（水体热物性、辐射、PAR 转换）
//! - [`float`]: 浮点安全工具（有限性检查）
//!
//! # 设计原则
//!
//! 1. **最小依赖**: 仅依赖 thiserror
//! 2. **快速失败**: 配置错误在模拟开始前抛出，数值错误立即中止运行
//! 3. **单位明确**: 所有常量带单位注释

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod error;
pub mod float;

pub use error::{ApError, ApResult};
pub use float::ensure_finite;
