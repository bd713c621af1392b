use shopeasy::infrastructure::{
    config::{locate_config, load_config},
    logger::Logger,
};
use std::{env, path::PathBuf};
use tracing::info;

#[tokio::main]
async fn main() -> shopeasy::Result<()> {
    // 用法: shopeasy [配置文件路径]
    let explicit = env::args_os().nth(1).map(PathBuf::from);
    let source = locate_config(explicit.as_deref());
    let config = load_config(source.as_deref())?;

    Logger::init(&config.logging.level);
    match &source {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    shopeasy::server::run(config).await
}
