// crates/ap_engine/src/weather.rs

//! 气象源
//!
//! 气象是外部输入，引擎不生成天气。支持两种来源：
//! - 单个重复的 24 小时剖面
//! - 多日序列（每日 24 个小时样本）
//!
//! 请求天数超过数据天数时按模取余回绕，决不报错。
//! 空数据源在运行入口报 `WeatherUnavailable`。

use ap_foundation::error::{ApError, ApResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 每日小时数
pub const HOURS: usize = 24;

/// 单小时气象样本
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// 气温 [°C]
    pub air_temperature: f64,
    /// 相对湿度 [%]
    pub relative_humidity: f64,
    /// 露点温度 [°C]
    pub dew_point: f64,
    /// 云量 [0,1]
    pub cloud_cover: f64,
    /// 2 m 风速 [m/s]
    pub wind_speed_2m: f64,
    /// 10 m 风速 [m/s]
    pub wind_speed_10m: f64,
    /// 降水 [mm/h]
    pub precipitation_mm: f64,
    /// 直射辐射 [W/m²]
    pub direct_radiation: f64,
    /// 散射辐射 [W/m²]
    pub diffuse_radiation: f64,
    /// 总短波辐射 [W/m²]
    pub shortwave_radiation: f64,
    /// 土壤温度 [°C]
    pub soil_temperature: f64,
    /// 太阳高度角 [deg]
    pub solar_elevation: f64,
    /// 太阳方位角 [deg]
    pub solar_azimuth: f64,
}

/// 一日气象（恰好 24 个小时样本）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WeatherSample>", into = "Vec<WeatherSample>")]
pub struct WeatherDay {
    samples: Vec<WeatherSample>,
}

impl WeatherDay {
    /// 由 24 个小时样本构建
    pub fn new(samples: Vec<WeatherSample>) -> ApResult<Self> {
        if samples.len() != HOURS {
            return Err(ApError::weather(format!(
                "一日气象需要恰好 {} 个小时样本，得到 {}",
                HOURS,
                samples.len()
            )));
        }
        Ok(Self { samples })
    }

    /// 取指定小时样本（0-23）
    #[inline]
    pub fn hour(&self, hour: usize) -> &WeatherSample {
        &self.samples[hour % HOURS]
    }

    /// 小时样本切片
    pub fn samples(&self) -> &[WeatherSample] {
        &self.samples
    }
}

impl From<[WeatherSample; HOURS]> for WeatherDay {
    /// 长度由类型保证，构造不会失败
    fn from(samples: [WeatherSample; HOURS]) -> Self {
        Self {
            samples: samples.to_vec(),
        }
    }
}

impl TryFrom<Vec<WeatherSample>> for WeatherDay {
    type Error = String;

    fn try_from(samples: Vec<WeatherSample>) -> Result<Self, Self::Error> {
        Self::new(samples).map_err(|e| e.to_string())
    }
}

impl From<WeatherDay> for Vec<WeatherSample> {
    fn from(day: WeatherDay) -> Self {
        day.samples
    }
}

/// 气象源
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeatherSource {
    /// 单个重复的 24 小时剖面
    SingleDay {
        /// 重复使用的一日剖面
        day: WeatherDay,
    },
    /// 多日序列（短于请求天数时按模取余回绕）
    MultiDay {
        /// 日序列
        days: Vec<WeatherDay>,
    },
}

impl WeatherSource {
    /// 数据源合法性检查（运行入口一次性调用）
    pub fn validate(&self) -> ApResult<()> {
        match self {
            Self::SingleDay { .. } => Ok(()),
            Self::MultiDay { days } => {
                if days.is_empty() {
                    Err(ApError::weather("多日气象序列为空"))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// 数据覆盖的唯一天数
    pub fn day_count(&self) -> usize {
        match self {
            Self::SingleDay { .. } => 1,
            Self::MultiDay { days } => days.len(),
        }
    }

    /// 解析指定模拟日/小时的样本
    ///
    /// 日索引按数据天数取模回绕。调用前必须已通过 `validate`。
    #[inline]
    pub fn sample(&self, day: usize, hour: usize) -> &WeatherSample {
        match self {
            Self::SingleDay { day: d } => d.hour(hour),
            Self::MultiDay { days } => days[day % days.len()].hour(hour),
        }
    }

    /// 从 JSON 字符串解析
    pub fn from_json_str(json: &str) -> ApResult<Self> {
        let source: Self =
            serde_json::from_str(json).map_err(|e| ApError::parse(format!("气象 JSON: {e}")))?;
        source.validate()?;
        Ok(source)
    }

    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> ApResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ApError::io(format!("读取气象文件 {}", path.display()), e))?;
        Self::from_json_str(&text)
    }
}
