use anyhow::Result;
use simple_logger::SimpleLogger;

pub fn init(level: log::LevelFilter) -> Result<()> {
    SimpleLogger::new()
        .with_level(level)
        // reqwest/hyper internals are noisy at debug
        .with_module_level("hyper", log::LevelFilter::Warn)
        .with_module_level("hyper_util", log::LevelFilter::Warn)
        .with_module_level("reqwest", log::LevelFilter::Warn)
        .init()?;

    Ok(())
}
