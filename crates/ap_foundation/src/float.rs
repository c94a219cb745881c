// crates/ap_foundation/src/float.rs

//! 浮点安全工具
//!
//! 提供有限性检查。检查失败返回
//! [`ApError::Numerical`](crate::error::ApError)，携带出错的
//! 日/小时与物理量名称。

use crate::error::{ApError, ApResult};

/// 有限性检查
///
/// 非有限值（NaN/Inf）返回带日/小时上下文的数值错误。
/// 对该次运行不可恢复：决不以截断代替真实的数值失败。
#[inline]
pub fn ensure_finite(value: f64, day: usize, hour: usize, quantity: &'static str) -> ApResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ApError::numerical(day, hour, quantity, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite_ok() {
        assert_eq!(ensure_finite(1.5, 0, 0, "x").unwrap(), 1.5);
    }

    #[test]
    fn test_ensure_finite_rejects_nan_and_inf() {
        let err = ensure_finite(f64::NAN, 2, 13, "pond_temperature").unwrap_err();
        assert!(err.is_numerical());
        assert!(err.to_string().contains("pond_temperature"));
        assert!(ensure_finite(f64::INFINITY, 0, 0, "x").is_err());
    }
}
