pub mod conditions;
pub mod config;
pub mod errors;
pub mod forecast_mapper;
pub mod initialization;
pub mod manager_meteoswiss;
pub mod models;

pub use conditions::Condition;
pub use manager_meteoswiss::{CycleOutcome, MeteoSwiss};
pub use manager_meteoswiss::errors::MeteoSwissError;
pub use models::samples::{CycleSummary, DataType, Sample, SampleValue, Sink};
