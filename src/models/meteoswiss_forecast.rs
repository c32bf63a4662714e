use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct RegionForecast {
    #[serde(rename = "dayDate")]
    pub day_date: String,
    #[serde(rename = "iconDay", default)]
    pub icon_day: Option<i64>,
}

/// Hourly series, all aligned by index and starting one hour after 'start'.
/// The mean temperature series sets the number of hours and must be present.
#[derive(Deserialize, Debug, Clone)]
pub struct Graph {
    pub start: i64,
    #[serde(rename = "temperatureMin1h", default)]
    pub temperature_min_1h: Vec<f64>,
    #[serde(rename = "temperatureMax1h", default)]
    pub temperature_max_1h: Vec<f64>,
    #[serde(rename = "temperatureMean1h")]
    pub temperature_mean_1h: Vec<f64>,
    #[serde(rename = "precipitationMean1h", default)]
    pub precipitation_mean_1h: Vec<f64>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ForecastDocument {
    #[serde(rename = "regionForecast")]
    pub region_forecast: Vec<RegionForecast>,
    pub graph: Graph,
}
