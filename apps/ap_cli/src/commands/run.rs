// apps/ap_cli/src/commands/run.rs

//! 运行模拟命令
//!
//! 执行一次完整模拟并导出逐小时轨迹（每小时一行，列序稳定）。

use anyhow::{Context, Result};
use ap_engine::stepper::simulate;
use ap_engine::timestep::Timestep;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// 运行模拟参数
#[derive(Args)]
pub struct RunArgs {
    /// 配置文件路径（JSON，省略时用默认配置）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 气象文件路径（JSON，省略时用内置演示晴天）
    #[arg(short, long)]
    pub weather: Option<PathBuf>,

    /// 模拟天数
    #[arg(short, long, default_value = "14")]
    pub days: usize,

    /// 轨迹导出路径（CSV，省略时不导出）
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// 执行运行命令
pub fn execute(args: RunArgs) -> Result<()> {
    info!("=== AlgaePond 模拟启动 ===");

    let config = super::load_config(args.config.as_deref())?;
    let weather = super::load_weather(args.weather.as_deref())?;

    let start = Instant::now();
    let trajectory = simulate(&config, &weather, args.days).context("模拟失败")?;
    let elapsed = start.elapsed();
    info!(
        "模拟完成: {} 条记录, 耗时 {:.1} ms",
        trajectory.len(),
        elapsed.as_secs_f64() * 1e3
    );

    if let Some(path) = &args.output {
        write_csv(path, &trajectory)
            .with_context(|| format!("写出轨迹 {}", path.display()))?;
        info!("轨迹已写出: {}", path.display());
    }

    print_summary(&config, &trajectory, args.days);
    Ok(())
}

/// 按稳定列序写出轨迹
fn write_csv(path: &std::path::Path, trajectory: &[Timestep]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    writeln!(writer, "{}", Timestep::csv_header())?;
    for ts in trajectory {
        writeln!(writer, "{}", ts.csv_row())?;
    }
    Ok(())
}

fn print_summary(
    config: &ap_engine::config::SimulationConfig,
    trajectory: &[Timestep],
    days: usize,
) {
    let total_harvest_kg: f64 = trajectory.iter().map(|ts| ts.harvest_mass_kg).sum();
    let mean_areal: f64 = if trajectory.is_empty() {
        0.0
    } else {
        trajectory.iter().map(|ts| ts.productivity_areal).sum::<f64>() / trajectory.len() as f64
    };
    let final_density = trajectory
        .last()
        .map(|ts| ts.biomass_concentration)
        .unwrap_or(config.initial.density);

    println!("运行摘要 ({})", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("  模拟天数:        {days}");
    println!("  收获模式:        {}", config.harvest.mode.name());
    println!("  终态浓度:        {final_density:.3} g/L");
    println!("  累计收获:        {total_harvest_kg:.2} kg");
    println!("  平均面积生产率:  {mean_areal:.2} g/(m²·day)");
}
