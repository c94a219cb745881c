// crates/ap_physics/src/geometry.rs

//! 池体几何
//!
//! 由名义占地面积、长宽比、水深和堤埂宽度推导有效水面面积、
//! 培养液体积与升数。每次运行只计算一次，之后不可变。
//!
//! # 几何约定
//!
//! 占地为矩形，长 L = √(A·r)，宽 W = √(A/r)。堤埂从四周各
//! 占去 `berm_width`，有效水面为内接矩形 (L-2b)×(W-2b)。

use ap_foundation::constants::LITERS_PER_CUBIC_METER;
use ap_foundation::error::{ApError, ApResult};
use serde::{Deserialize, Serialize};

/// 池体几何（运行期不可变）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PondGeometry {
    /// 有效水面面积 [m²]
    pub surface_area: f64,
    /// 水深 [m]
    pub depth: f64,
    /// 满水深体积 [m³]
    pub volume: f64,
    /// 满水深升数 [L]
    pub liters: f64,
}

impl PondGeometry {
    /// 由设计尺寸推导几何
    ///
    /// # 参数
    ///
    /// - `area`: 名义占地面积 [m²]，> 0
    /// - `aspect_ratio`: 长宽比 [-]，> 0
    /// - `depth`: 水深 [m]，> 0
    /// - `berm_width`: 堤埂宽度 [m]，≥ 0，且不得占满占地
    pub fn from_dimensions(
        area: f64,
        aspect_ratio: f64,
        depth: f64,
        berm_width: f64,
    ) -> ApResult<Self> {
        if !(area > 0.0) {
            return Err(ApError::config("area", area, "必须为正"));
        }
        if !(aspect_ratio > 0.0) {
            return Err(ApError::config("aspect_ratio", aspect_ratio, "必须为正"));
        }
        if !(depth > 0.0) {
            return Err(ApError::config("depth", depth, "必须为正"));
        }
        if !(berm_width >= 0.0) {
            return Err(ApError::config("berm_width", berm_width, "不得为负"));
        }

        let length = (area * aspect_ratio).sqrt();
        let width = (area / aspect_ratio).sqrt();
        let inner_length = length - 2.0 * berm_width;
        let inner_width = width - 2.0 * berm_width;
        if inner_length <= 0.0 || inner_width <= 0.0 {
            return Err(ApError::config(
                "berm_width",
                berm_width,
                "堤埂占满了占地，无剩余水面",
            ));
        }

        let surface_area = inner_length * inner_width;
        let volume = surface_area * depth;
        Ok(Self {
            surface_area,
            depth,
            volume,
            liters: volume * LITERS_PER_CUBIC_METER,
        })
    }
}
