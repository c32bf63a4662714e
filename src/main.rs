use std::env;
use std::str::FromStr;
use std::thread;
use std::time::Duration;
use log::{info, warn};
use meteoswiss::config::load_config;
use meteoswiss::initialization::init;
use meteoswiss::{DataType, SampleValue, Sink};

/// Stand-in for the host value store, it just logs what it receives
struct LogSink;

impl Sink for LogSink {
    fn add_value(&mut self, data_type: DataType, timestamp: i64, value: SampleValue) {
        info!("{:<9} {} {}", data_type, timestamp, value);
    }
}

fn main() -> anyhow::Result<()> {
    let config_path = env::var("CONFIG_PATH").unwrap_or("config.toml".to_string());
    let run_once = bool::from_str(&env::var("RUN_ONCE").unwrap_or("false".to_string())).unwrap_or(false);

    let config = load_config(&config_path)?;
    let mut mgr = init(&config)?;

    let location = &config.location;
    if !mgr.is_enabled_for_location(location.timezone.as_deref(), location.lat, location.long) {
        warn!("MeteoSwiss is disabled or not available for time zone {:?}", location.timezone);
        return Ok(());
    }

    let interval = Duration::from_secs(config.meteoswiss.interval_hours.saturating_mul(3600));
    let mut sink = LogSink;

    loop {
        let outcome = mgr.perform(&mut sink);
        info!("cycle done: {}", outcome);

        if run_once {
            return Ok(());
        }
        thread::sleep(interval);
    }
}
