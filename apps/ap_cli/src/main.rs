// apps/ap_cli/src/main.rs

//! AlgaePond 命令行界面
//!
//! 提供藻类跑道池逐小时模拟的命令行工具。
//!
//! # 架构层级
//!
//! 本模块属于应用层：只消费 `SimulationConfig`、`WeatherSource` 与
//! `Timestep` 轨迹，不触碰物理模型内部。

mod commands;
mod demo;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// AlgaePond 藻类跑道池模拟命令行工具
#[derive(Parser)]
#[command(name = "ap_cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AlgaePond raceway pond simulator", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 运行模拟并导出轨迹
    Run(commands::run::RunArgs),
    /// 验证配置
    Validate(commands::validate::ValidateArgs),
    /// 显示配置与几何信息
    Info(commands::info::InfoArgs),
    /// 扫描收获阈值（独立运行并行执行）
    Sweep(commands::sweep::SweepArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Info(args) => commands::info::execute(args),
        Commands::Sweep(args) => commands::sweep::execute(args),
    }
}
