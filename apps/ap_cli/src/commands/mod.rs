// apps/ap_cli/src/commands/mod.rs

//! 命令实现

pub mod info;
pub mod run;
pub mod sweep;
pub mod validate;

use anyhow::{Context, Result};
use ap_engine::config::SimulationConfig;
use ap_engine::weather::WeatherSource;
use std::path::Path;

/// 加载配置文件，未提供时使用默认配置
pub fn load_config(path: Option<&Path>) -> Result<SimulationConfig> {
    match path {
        Some(p) => SimulationConfig::load(p)
            .with_context(|| format!("加载配置 {}", p.display())),
        None => Ok(SimulationConfig::default()),
    }
}

/// 加载气象文件，未提供时使用内置演示晴天
pub fn load_weather(path: Option<&Path>) -> Result<WeatherSource> {
    match path {
        Some(p) => {
            WeatherSource::load(p).with_context(|| format!("加载气象 {}", p.display()))
        }
        None => Ok(crate::demo::clear_sky_source()),
    }
}
