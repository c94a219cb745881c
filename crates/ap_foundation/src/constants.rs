// crates/ap_foundation/src/constants.rs

//! 物理常量
//!
//! 集中定义模拟中使用的全部物理常量，带单位注释。
//! 模型系数（如风速函数系数）定义在使用它们的模块中，这里只放
//! 不随模型选择变化的物性常量。

// ============================================================================
// 水体热物性
// ============================================================================

/// 水密度 [kg/m³]（淡水培养液，20°C 附近）
pub const WATER_DENSITY: f64 = 998.0;

/// 水比热容 [J/(kg·K)]
pub const WATER_SPECIFIC_HEAT: f64 = 4186.0;

/// 蒸发潜热 [J/kg]（常温开放水面）
pub const LATENT_HEAT_VAPORIZATION: f64 = 2.45e6;

/// 水面短波反照率 [-]
pub const WATER_ALBEDO: f64 = 0.08;

/// 水面长波发射率 [-]
pub const WATER_EMISSIVITY: f64 = 0.97;

/// 水的折射率 [-]（Fresnel 透射计算）
pub const WATER_REFRACTIVE_INDEX: f64 = 1.33;

// ============================================================================
// 辐射
// ============================================================================

/// Stefan-Boltzmann 常数 [W/(m²·K⁴)]
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

/// 短波辐射中 PAR 占比 [-]（400-700 nm 波段）
pub const PAR_FRACTION: f64 = 0.45;

/// PAR 波段能量通量到光量子通量的转换 [µmol/(m²·s) per W/m²]
pub const WATT_TO_UMOL_PAR: f64 = 4.57;

/// 补偿光强 [µmol/(m²·s)]
///
/// 低于该光强净光合为零，用于计算受光深度比例（仅诊断用）。
pub const COMPENSATION_PAR: f64 = 10.0;

// ============================================================================
// 单位换算
// ============================================================================

/// 摄氏度到开尔文的偏移
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// 每天小时数
pub const HOURS_PER_DAY: f64 = 24.0;

/// 每小时秒数
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// 每立方米升数
pub const LITERS_PER_CUBIC_METER: f64 = 1000.0;

// ============================================================================
// 生物质
// ============================================================================

/// 生物质焓 [J/kg]（干重燃烧热，光合固定能量按此计入热平衡）
pub const BIOMASS_ENTHALPY: f64 = 24.7e6;
