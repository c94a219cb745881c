// crates/ap_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `ApError` 枚举和 `ApResult` 类型别名，用于整个项目的错误处理。
//!
//! # 错误分类
//!
//! 1. **Configuration**: 参数越界或互相矛盾，在模拟开始前一次性抛出
//! 2. **Numerical**: 计算量出现 NaN/Inf，对该次运行不可恢复，
//!    携带出错的日/小时和物理量名称
//! 3. **WeatherUnavailable**: 无可用气象数据源
//! 4. **Io / Parse**: 配置与气象文件加载错误
//!
//! # 示例
//!
//! ```
//! use ap_foundation::error::{ApError, ApResult};
//!
//! fn check_depth(depth: f64) -> ApResult<()> {
//!     if depth <= 0.0 {
//!         return Err(ApError::config("depth", depth, "必须为正"));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 统一结果类型
pub type ApResult<T> = Result<T, ApError>;

/// AlgaePond 错误类型
#[derive(Error, Debug)]
pub enum ApError {
    /// 配置错误（运行开始前抛出，决不在步进途中出现）
    #[error("配置错误 '{field}': {value} - {reason}")]
    Configuration {
        /// 配置字段名
        field: String,
        /// 非法值
        value: f64,
        /// 原因
        reason: String,
    },

    /// 数值错误（NaN/Inf），对该次运行致命
    #[error("数值错误: 第 {day} 天第 {hour} 小时，量 '{quantity}' = {value}")]
    Numerical {
        /// 出错的模拟日（从 0 开始）
        day: usize,
        /// 出错的小时（0-23）
        hour: usize,
        /// 物理量名称
        quantity: &'static str,
        /// 非有限值
        value: f64,
    },

    /// 无可用气象数据源
    #[error("气象数据不可用: {reason}")]
    WeatherUnavailable {
        /// 原因
        reason: String,
    },

    /// IO 错误
    #[error("IO错误: {message}")]
    Io {
        /// 描述性错误信息
        message: String,
        /// 可选的底层 IO 错误
        #[source]
        source: Option<std::io::Error>,
    },

    /// 解析错误
    #[error("解析错误: {message}")]
    Parse {
        /// 描述性错误信息
        message: String,
    },
}

impl ApError {
    /// 便捷构造：配置错误
    pub fn config(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        Self::Configuration {
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }

    /// 便捷构造：数值错误
    pub fn numerical(day: usize, hour: usize, quantity: &'static str, value: f64) -> Self {
        Self::Numerical {
            day,
            hour,
            quantity,
            value,
        }
    }

    /// 便捷构造：气象数据不可用
    pub fn weather(reason: impl Into<String>) -> Self {
        Self::WeatherUnavailable {
            reason: reason.into(),
        }
    }

    /// 便捷构造：IO 错误
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(source),
        }
    }

    /// 便捷构造：解析错误
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// 是否为配置错误
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// 是否为数值错误
    pub fn is_numerical(&self) -> bool {
        matches!(self, Self::Numerical { .. })
    }
}
