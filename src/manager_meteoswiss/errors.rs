use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeteoSwissError {
    #[error("MeteoSwissError::Transport: {0}")]
    Transport(String),
    #[error("MeteoSwissError::NoData: empty forecast response")]
    NoData,
    #[error("MeteoSwissError::Document: {0}")]
    Document(String),
    #[error("MeteoSwissError::LengthMismatch: {array} has {actual} entries, expected at least {expected}")]
    LengthMismatch { array: &'static str, expected: usize, actual: usize },
}

impl MeteoSwissError {
    /// True for problems on the fetch side, where the next cycle may well succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, MeteoSwissError::Transport(_) | MeteoSwissError::NoData)
    }
}

impl From<ureq::Error> for MeteoSwissError {
    fn from(e: ureq::Error) -> Self {
        MeteoSwissError::Transport(format!("http request error: {}", e))
    }
}
impl From<serde_json::Error> for MeteoSwissError {
    fn from(e: serde_json::Error) -> Self {
        MeteoSwissError::Document(format!("json document error: {}", e))
    }
}
