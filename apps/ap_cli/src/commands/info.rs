// apps/ap_cli/src/commands/info.rs

//! 显示配置信息命令

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// 信息显示参数
#[derive(Args)]
pub struct InfoArgs {
    /// 配置文件路径（JSON，省略时显示默认配置）
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// 执行信息命令
pub fn execute(args: InfoArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let geometry = config.geometry()?;

    println!("池体几何");
    println!("  占地面积:   {:.1} m²", config.pond.area);
    println!("  长宽比:     {:.2}", config.pond.aspect_ratio);
    println!("  水深:       {:.2} m", config.pond.depth);
    println!("  堤埂宽度:   {:.2} m", config.pond.berm_width);
    println!("  有效水面:   {:.1} m²", geometry.surface_area);
    println!("  满水体积:   {:.1} m³ ({:.0} L)", geometry.volume, geometry.liters);
    println!();
    println!("生长动力学");
    println!("  μ_max:      {:.2} /day", config.kinetics.mu_max);
    println!("  死亡率:     {:.2} /day", config.kinetics.death_rate);
    println!("  光响应:     {}", config.kinetics.light_response.name());
    println!("  温度响应:   {}", config.kinetics.temperature_response.name());
    println!("  营养响应:   {}", config.kinetics.nutrient_response.name());
    println!();
    println!("光传输");
    println!("  比消光系数: {:.3} m²/g", config.light.epsilon);
    println!("  背景衰减:   {:.3} /m", config.light.kb);
    println!();
    println!("收获策略");
    println!("  模式:       {}", config.harvest.mode.name());
    println!("  触发阈值:   {:.2} g/L", config.harvest.threshold);
    println!("  稀释目标:   {:.2} g/L", config.harvest.target);
    println!("  返还比例:   {:.0}%", config.harvest.return_fraction * 100.0);
    Ok(())
}
