use anyhow::Result;
use study_planner::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置，第一个命令行参数可覆盖计划文件路径
    let mut config = Config::from_env();
    if let Some(plan_file) = std::env::args().nth(1) {
        config.plan_file = plan_file;
    }

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
