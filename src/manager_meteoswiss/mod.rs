pub mod errors;

use std::fmt;
use std::time::Duration;
use chrono::Local;
use log::{debug, error, info, warn};
use rand::Rng;
use ureq::Agent;
use crate::config::{MeteoSwissParameters, Rotation, DEFAULT_USER_AGENTS};
use crate::forecast_mapper::process_forecast;
use crate::manager_meteoswiss::errors::MeteoSwissError;
use crate::models::samples::{CycleSummary, Sink};

/// Result of one fetch and map cycle as seen by the host
#[derive(Debug)]
pub enum CycleOutcome {
    /// All samples for the cycle were handed over to the sink
    Completed(CycleSummary),
    /// Nothing could be fetched this time, nothing was emitted
    NoData(MeteoSwissError),
    /// A response was received but could not be used, nothing was emitted
    Failed(MeteoSwissError),
}

impl CycleOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, CycleOutcome::Completed(_))
    }
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CycleOutcome::Completed(s) => write!(f, "Completed: {}", s),
            CycleOutcome::NoData(e) => write!(f, "NoData: {}", e),
            CycleOutcome::Failed(e) => write!(f, "Failed: {}", e),
        }
    }
}

/// List of user agents to pick from for each request
pub struct UserAgentRotation {
    agents: Vec<String>,
    rotation: Rotation,
    next: usize,
}

impl UserAgentRotation {
    /// Returns a new rotation, an empty list of agents gives the default agents
    ///
    /// # Arguments
    ///
    /// * 'agents' - user agent strings to rotate between
    /// * 'rotation' - whether to pick at random or in turn
    pub fn new(agents: &[String], rotation: Rotation) -> UserAgentRotation {
        let agents = if agents.is_empty() {
            DEFAULT_USER_AGENTS.iter().map(|a| a.to_string()).collect()
        } else {
            agents.to_vec()
        };

        UserAgentRotation { agents, rotation, next: 0 }
    }

    /// Returns the user agent to use for the next request
    pub fn next_agent(&mut self) -> &str {
        let index = match self.rotation {
            Rotation::Random => rand::thread_rng().gen_range(0..self.agents.len()),
            Rotation::RoundRobin => {
                let index = self.next;
                self.next = (self.next + 1) % self.agents.len();
                index
            }
        };

        &self.agents[index]
    }
}

/// Struct for fetching forecasts from MeteoSwiss and handing them over to a host
pub struct MeteoSwiss {
    agent: Agent,
    url: String,
    plz: String,
    enabled: bool,
    user_agents: UserAgentRotation,
}

impl MeteoSwiss {
    /// Returns a MeteoSwiss struct ready for fetching forecasts for the configured postal code
    ///
    /// # Arguments
    ///
    /// * 'params' - the meteoswiss section of the configuration
    pub fn new(params: &MeteoSwissParameters) -> MeteoSwiss {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(params.timeout_secs)))
            .build();

        let agent = config.into();

        Self {
            agent,
            url: params.url.clone(),
            plz: params.plz.clone(),
            enabled: params.enabled,
            user_agents: UserAgentRotation::new(&params.user_agents, params.rotation),
        }
    }

    /// Returns true if the adapter is enabled and the location is somewhere in Europe.
    /// The time zone prefix is a rough gate only, coordinates are not looked at.
    ///
    /// # Arguments
    ///
    /// * 'timezone' - IANA time zone identifier of the location, if known
    /// * 'lat' - latitude of the location
    /// * 'long' - longitude of the location
    pub fn is_enabled_for_location(&self, timezone: Option<&str>, _lat: f64, _long: f64) -> bool {
        self.enabled && timezone.is_some_and(|tz| tz.starts_with("Europe"))
    }

    /// Fetches the raw forecast document for the configured postal code.
    /// There are no retries, a failed request is left for the next cycle.
    pub fn fetch(&mut self) -> Result<String, MeteoSwissError> {
        let user_agent = self.user_agents.next_agent().to_string();
        debug!("requesting forecast for plz {} as '{}'", self.plz, user_agent);

        let body = self.agent
            .get(&self.url)
            .query("plz", &self.plz)
            .header("User-Agent", &user_agent)
            .call()?
            .body_mut()
            .read_to_string()?;

        if body.trim().is_empty() {
            return Err(MeteoSwissError::NoData);
        }

        Ok(body)
    }

    /// Runs one cycle and returns any error instead of logging it
    ///
    /// # Arguments
    ///
    /// * 'sink' - receiver of the samples
    pub fn try_perform<S: Sink>(&mut self, sink: &mut S) -> Result<CycleSummary, MeteoSwissError> {
        let json = self.fetch()?;
        process_forecast(&json, &Local, sink)
    }

    /// Runs one cycle: fetch, map and hand over samples to the sink.
    /// Errors never reach the host, they are logged and reported in the outcome.
    ///
    /// # Arguments
    ///
    /// * 'sink' - receiver of the samples
    pub fn perform<S: Sink>(&mut self, sink: &mut S) -> CycleOutcome {
        match self.try_perform(sink) {
            Ok(summary) => {
                info!("MeteoSwiss forecast for plz {}: {}", self.plz, summary);
                CycleOutcome::Completed(summary)
            },
            Err(e) if e.is_transient() => {
                warn!("no MeteoSwiss forecast this cycle: {}", e);
                CycleOutcome::NoData(e)
            },
            Err(e) => {
                error!("error running MeteoSwiss parser: {}", e);
                CycleOutcome::Failed(e)
            },
        }
    }
}
