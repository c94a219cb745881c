// apps/ap_cli/src/demo.rs

//! 内置演示气象
//!
//! 未提供气象文件时使用的确定性晴天剖面（非随机生成，
//! 引擎本身不生成天气）。白昼 6-18 时，辐射与太阳高度角
//! 按正弦分布，气温跟随辐射小幅抬升。

use ap_engine::weather::{WeatherDay, WeatherSample, WeatherSource};

/// 构建单个重复晴天的演示气象源
pub fn clear_sky_source() -> WeatherSource {
    // 定长数组构造，24 小时由类型保证
    let samples: [WeatherSample; 24] = std::array::from_fn(|h| {
        let hour = h as f64;
        let daylight = (hour - 6.0) / 12.0;
        let (elevation, shortwave) = if (0.0..=1.0).contains(&daylight) {
            let s = (daylight * std::f64::consts::PI).sin();
            (s * 62.0, s * 820.0)
        } else {
            (-12.0, 0.0)
        };
        WeatherSample {
            air_temperature: 19.0 + 8.0 * (shortwave / 820.0),
            relative_humidity: 55.0,
            dew_point: 11.0,
            cloud_cover: 0.1,
            wind_speed_2m: 2.2,
            wind_speed_10m: 3.4,
            precipitation_mm: 0.0,
            direct_radiation: shortwave * 0.72,
            diffuse_radiation: shortwave * 0.28,
            shortwave_radiation: shortwave,
            soil_temperature: 19.0,
            solar_elevation: elevation,
            solar_azimuth: 90.0 + daylight.clamp(0.0, 1.0) * 180.0,
        }
    });
    WeatherSource::SingleDay {
        day: WeatherDay::from(samples),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profile_is_valid_and_deterministic() {
        let a = clear_sky_source();
        let b = clear_sky_source();
        assert!(a.validate().is_ok());
        assert_eq!(a, b);
    }

    #[test]
    fn test_demo_profile_dark_at_night() {
        let source = clear_sky_source();
        assert_eq!(source.sample(0, 0).shortwave_radiation, 0.0);
        assert!(source.sample(0, 12).shortwave_radiation > 700.0);
    }
}
