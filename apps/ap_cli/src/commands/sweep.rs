// apps/ap_cli/src/commands/sweep.rs

//! 收获阈值扫描命令
//!
//! 在阈值区间上执行多次独立模拟并汇报各自的产出。
//! 单次运行内小时间顺序依赖，不可并行；独立运行之间
//! 用 rayon 并行执行。

use anyhow::{bail, Context, Result};
use ap_engine::stepper::simulate;
use ap_physics::harvest::HarvestMode;
use clap::Args;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::info;

/// 阈值扫描参数
#[derive(Args)]
pub struct SweepArgs {
    /// 配置文件路径（JSON，省略时用默认配置）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 气象文件路径（JSON，省略时用内置演示晴天）
    #[arg(short, long)]
    pub weather: Option<PathBuf>,

    /// 模拟天数
    #[arg(short, long, default_value = "14")]
    pub days: usize,

    /// 阈值下界 [g/L]
    #[arg(long, default_value = "0.6")]
    pub from: f64,

    /// 阈值上界 [g/L]
    #[arg(long, default_value = "1.6")]
    pub to: f64,

    /// 扫描点数
    #[arg(long, default_value = "11")]
    pub steps: usize,
}

/// 执行扫描命令
pub fn execute(args: SweepArgs) -> Result<()> {
    if args.steps < 2 {
        bail!("扫描点数至少为 2");
    }
    if !(args.from > 0.0 && args.to > args.from) {
        bail!("要求 0 < from < to");
    }

    let mut config = super::load_config(args.config.as_deref())?;
    let weather = super::load_weather(args.weather.as_deref())?;

    // none 模式下扫描无意义，改用半连续撇除
    if config.harvest.mode == HarvestMode::None {
        config.harvest.mode = HarvestMode::SemiContinuous;
        info!("收获模式为 none，扫描改用 semi_continuous");
    }

    let thresholds: Vec<f64> = (0..args.steps)
        .map(|i| args.from + (args.to - args.from) * i as f64 / (args.steps - 1) as f64)
        .collect();

    info!("扫描 {} 个阈值, 每次 {} 天", thresholds.len(), args.days);

    // 独立运行并行执行
    let results: Result<Vec<(f64, f64, f64)>> = thresholds
        .par_iter()
        .map(|&threshold| {
            let mut run_config = config.clone();
            run_config.harvest.threshold = threshold;
            if run_config.harvest.mode == HarvestMode::Batch
                && run_config.harvest.target >= threshold
            {
                run_config.harvest.target = threshold / 2.0;
            }
            let trajectory = simulate(&run_config, &weather, args.days)
                .with_context(|| format!("阈值 {threshold:.2} 的运行失败"))?;
            let total_kg: f64 = trajectory.iter().map(|ts| ts.harvest_mass_kg).sum();
            let mean_areal = trajectory.iter().map(|ts| ts.productivity_areal).sum::<f64>()
                / trajectory.len() as f64;
            Ok((threshold, total_kg, mean_areal))
        })
        .collect();
    let results = results?;

    println!("阈值 [g/L]  累计收获 [kg]  平均面积生产率 [g/(m²·day)]");
    for (threshold, total_kg, mean_areal) in &results {
        println!("{threshold:>9.2}  {total_kg:>13.2}  {mean_areal:>27.2}");
    }
    if let Some((best, kg, _)) = results
        .iter()
        .copied()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    {
        info!("最优阈值 {:.2} g/L, 累计收获 {:.2} kg", best, kg);
    }
    Ok(())
}
