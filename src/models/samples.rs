use std::fmt;
use std::fmt::Formatter;
use crate::conditions::Condition;

/// Kind of value handed over to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Condition,
    MinTemperature,
    MaxTemperature,
    MeanTemperature,
    PrecipitationForecast,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DataType::Condition             => write!(f, "Condition"),
            DataType::MinTemperature        => write!(f, "MinTemp"),
            DataType::MaxTemperature        => write!(f, "MaxTemp"),
            DataType::MeanTemperature       => write!(f, "Temp"),
            DataType::PrecipitationForecast => write!(f, "QPF"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleValue {
    Condition(Condition),
    Number(f64),
}

impl fmt::Display for SampleValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SampleValue::Condition(c) => write!(f, "{}", c),
            SampleValue::Number(v) => write!(f, "{:.1}", v),
        }
    }
}

/// One timestamped value, timestamp in seconds since epoch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub data_type: DataType,
    pub timestamp: i64,
    pub value: SampleValue,
}

impl Sample {
    pub fn number(data_type: DataType, timestamp: i64, value: f64) -> Sample {
        Sample { data_type, timestamp, value: SampleValue::Number(value) }
    }

    pub fn condition(timestamp: i64, condition: Condition) -> Sample {
        Sample { data_type: DataType::Condition, timestamp, value: SampleValue::Condition(condition) }
    }
}

/// Counts of what a completed cycle handed over to the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleSummary {
    pub conditions: usize,
    pub hours: usize,
}

impl fmt::Display for CycleSummary {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} daily conditions, {} hourly samples", self.conditions, self.hours)
    }
}

/// Receiver of samples, i.e. the host's value store
pub trait Sink {
    fn add_value(&mut self, data_type: DataType, timestamp: i64, value: SampleValue);
}

impl Sink for Vec<Sample> {
    fn add_value(&mut self, data_type: DataType, timestamp: i64, value: SampleValue) {
        self.push(Sample { data_type, timestamp, value });
    }
}
