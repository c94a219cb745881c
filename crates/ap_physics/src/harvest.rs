// crates/ap_physics/src/harvest.rs

//! 收获控制
//!
//! 小型状态机，决定本小时是否移出生物质与水量。
//! 在生长、热平衡、水量更新之后求值，作用于本小时的后生长状态。
//!
//! # 三种策略
//!
//! - **none**: 永不收获
//! - **semi_continuous**: 浓度超过阈值时每小时撇除超额部分，浓度回到阈值
//! - **batch**: 累积到阈值后单小时放料，稀释到目标浓度
//!
//! 两种收获策略均返还移出水量的固定比例（默认 80%），
//! 其余为净水量损失。
//!
//! # 移出体积
//!
//! 以返还后浓度恰为目标值求解移出体积：
//!
//! ```text
//! V_rem = V · (X − X_target) / (X − (1−r)·X_target)
//! ```
//!
//! 收获质量恒等于移出瞬间的浓度乘移出体积：m = X · V_rem。

use ap_foundation::error::{ApError, ApResult};
use serde::{Deserialize, Serialize};

/// 收获模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarvestMode {
    /// 永不收获
    #[default]
    None,
    /// 半连续撇除
    SemiContinuous,
    /// 批次放料
    Batch,
}

impl HarvestMode {
    /// 模式名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SemiContinuous => "semi_continuous",
            Self::Batch => "batch",
        }
    }
}

/// 收获参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarvestParams {
    /// 收获模式
    #[serde(default)]
    pub mode: HarvestMode,
    /// 触发阈值浓度 [g/L]
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// 批次稀释目标浓度 [g/L]（仅 batch 模式）
    #[serde(default = "default_target")]
    pub target: f64,
    /// 移出水量返还比例 [0,1]
    #[serde(default = "default_return_fraction")]
    pub return_fraction: f64,
}

fn default_threshold() -> f64 {
    1.0
}
fn default_target() -> f64 {
    0.5
}
fn default_return_fraction() -> f64 {
    0.8
}

impl Default for HarvestParams {
    fn default() -> Self {
        Self {
            mode: HarvestMode::None,
            threshold: default_threshold(),
            target: default_target(),
            return_fraction: default_return_fraction(),
        }
    }
}

impl HarvestParams {
    /// 参数合法性检查（配置阶段一次性调用）
    pub fn validate(&self) -> ApResult<()> {
        if self.mode == HarvestMode::None {
            return Ok(());
        }
        if !(self.threshold > 0.0) {
            return Err(ApError::config(
                "harvest_threshold",
                self.threshold,
                "必须为正",
            ));
        }
        if !(0.0..=1.0).contains(&self.return_fraction) {
            return Err(ApError::config(
                "harvest_return_fraction",
                self.return_fraction,
                "必须在 [0,1] 内",
            ));
        }
        if self.mode == HarvestMode::Batch {
            if !(self.target > 0.0) {
                return Err(ApError::config("harvest_target", self.target, "必须为正"));
            }
            if self.target >= self.threshold {
                return Err(ApError::config(
                    "harvest_target",
                    self.target,
                    "batch 模式要求目标浓度低于触发阈值",
                ));
            }
        }
        Ok(())
    }
}

/// 控制器状态
///
/// none 与 semi_continuous 模式恒为空闲；batch 模式在阈值以下
/// 累积，放料小时转为空闲，下一小时回到累积阶段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarvestState {
    /// 空闲（无待触发的放料）
    Idle,
    /// 累积中（batch 模式，等待浓度到达阈值）
    Accumulating,
}

/// 单小时收获结果
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HarvestEvent {
    /// 本小时是否发生收获
    pub occurred: bool,
    /// 收获干重 [kg]
    pub mass_kg: f64,
    /// 移出水量 [L]
    pub water_removed_l: f64,
    /// 返还水量 [L]
    pub water_returned_l: f64,
}

/// 收获控制器
#[derive(Debug, Clone)]
pub struct HarvestController {
    params: HarvestParams,
    state: HarvestState,
}

impl HarvestController {
    /// 创建控制器（参数应已通过 `validate`）
    pub fn new(params: HarvestParams) -> Self {
        let state = match params.mode {
            HarvestMode::Batch => HarvestState::Accumulating,
            _ => HarvestState::Idle,
        };
        Self { params, state }
    }

    /// 当前状态
    pub fn state(&self) -> HarvestState {
        self.state
    }

    /// 求解移出体积并执行收获
    ///
    /// 返回 (事件, 新浓度 [g/L], 新体积 [L])。
    fn remove_to_target(
        &self,
        concentration: f64,
        volume_l: f64,
        target: f64,
    ) -> (HarvestEvent, f64, f64) {
        let r = self.params.return_fraction;
        // 返还后浓度恰为 target 的移出体积
        let removed_l = volume_l * (concentration - target) / (concentration - (1.0 - r) * target);
        let returned_l = r * removed_l;
        let mass_g = concentration * removed_l;
        let new_volume_l = volume_l - (removed_l - returned_l);
        let new_concentration = concentration * (volume_l - removed_l) / new_volume_l;
        (
            HarvestEvent {
                occurred: true,
                mass_kg: mass_g / 1000.0,
                water_removed_l: removed_l,
                water_returned_l: returned_l,
            },
            new_concentration,
            new_volume_l,
        )
    }

    /// 单小时求值
    ///
    /// # 参数
    ///
    /// - `concentration`: 后生长浓度 [g/L]
    /// - `volume_l`: 当前体积 [L]
    ///
    /// 返回 (事件, 新浓度, 新体积 [L])。未触发时原样返回。
    pub fn step(&mut self, concentration: f64, volume_l: f64) -> (HarvestEvent, f64, f64) {
        match self.params.mode {
            HarvestMode::None => (HarvestEvent::default(), concentration, volume_l),
            HarvestMode::SemiContinuous => {
                if concentration > self.params.threshold {
                    self.remove_to_target(concentration, volume_l, self.params.threshold)
                } else {
                    (HarvestEvent::default(), concentration, volume_l)
                }
            }
            HarvestMode::Batch => {
                if concentration >= self.params.threshold {
                    let result = self.remove_to_target(concentration, volume_l, self.params.target);
                    // 放料小时为空闲，下一小时回到累积阶段
                    self.state = HarvestState::Idle;
                    result
                } else {
                    self.state = HarvestState::Accumulating;
                    (HarvestEvent::default(), concentration, volume_l)
                }
            }
        }
    }
}
