use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::{Config, General};
use crate::errors::InitError;
use crate::manager_meteoswiss::MeteoSwiss;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {t} - {m}{n}";

/// Sets up logging and returns a MeteoSwiss struct ready for use
///
/// # Arguments
///
/// * 'config' - the loaded configuration
pub fn init(config: &Config) -> Result<MeteoSwiss, InitError> {
    setup_logger(&config.general)?;
    log::info!("meteoswiss version: {}", env!("CARGO_PKG_VERSION"));

    Ok(MeteoSwiss::new(&config.meteoswiss))
}

/// Configures log4rs with a console and/or a file appender
///
/// # Arguments
///
/// * 'general' - the general section of the configuration
pub fn setup_logger(general: &General) -> Result<(), InitError> {
    let mut builder = LogConfig::builder();
    let mut root = Root::builder();

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    if let Some(log_path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(log_path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let log_config = builder
        .build(root.build(general.log_level))
        .map_err(|e| InitError(e.to_string()))?;

    log4rs::init_config(log_config)?;

    Ok(())
}
