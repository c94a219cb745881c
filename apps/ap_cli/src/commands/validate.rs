// apps/ap_cli/src/commands/validate.rs

//! 验证配置命令
//!
//! 加载并校验配置（与运行入口同一套检查），报告首个错误。

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::{error, info};

/// 验证配置参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 配置文件路径（JSON）
    #[arg(short, long)]
    pub config: PathBuf,
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    match ap_engine::config::SimulationConfig::load(&args.config) {
        Ok(config) => {
            let geometry = config.geometry()?;
            info!(
                "配置合法: 水面 {:.1} m², 体积 {:.1} m³, 收获模式 {}",
                geometry.surface_area,
                geometry.volume,
                config.harvest.mode.name()
            );
            Ok(())
        }
        Err(e) => {
            error!("配置不合法: {e}");
            Err(e.into())
        }
    }
}
