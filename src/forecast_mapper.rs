use chrono::{NaiveDate, NaiveTime, TimeZone};
use log::debug;
use crate::conditions;
use crate::manager_meteoswiss::errors::MeteoSwissError;
use crate::models::meteoswiss_forecast::{ForecastDocument, Graph};
use crate::models::samples::{CycleSummary, DataType, Sample, Sink};

const SECONDS_PER_HOUR: i64 = 60 * 60;

/// Parses a raw forecast response
///
/// # Arguments
///
/// * 'json' - the response body from the forecast endpoint
pub fn parse_forecast(json: &str) -> Result<ForecastDocument, MeteoSwissError> {
    Ok(serde_json::from_str(json)?)
}

/// Maps a forecast document to samples.
///
/// Daily conditions come first, one per region forecast entry and stamped with local
/// midnight of its date. Then follow four samples per hour (min, max and mean temperature,
/// and precipitation). The first hour is stamped one hour after the graph start, and
/// every following hour one hour later than the previous.
///
/// Nothing is returned unless the whole document maps, so a caller never sees part of a cycle.
///
/// # Arguments
///
/// * 'doc' - the parsed forecast document
/// * 'tz' - time zone in which day dates are interpreted
pub fn map_forecast<Tz: TimeZone>(doc: &ForecastDocument, tz: &Tz) -> Result<Vec<Sample>, MeteoSwissError> {
    let graph = &doc.graph;
    let hours = graph.temperature_mean_1h.len();
    check_aligned(graph)?;

    let mut samples: Vec<Sample> = Vec::with_capacity(doc.region_forecast.len() + hours * 4);

    for entry in &doc.region_forecast {
        let timestamp = local_midnight(&entry.day_date, tz)?;
        samples.push(Sample::condition(timestamp, conditions::convert(entry.icon_day)));
    }

    let mut entry_time = graph.start.div_euclid(1000);
    for i in 0..hours {
        entry_time += SECONDS_PER_HOUR;
        samples.push(Sample::number(DataType::MinTemperature, entry_time, graph.temperature_min_1h[i]));
        samples.push(Sample::number(DataType::MaxTemperature, entry_time, graph.temperature_max_1h[i]));
        samples.push(Sample::number(DataType::MeanTemperature, entry_time, graph.temperature_mean_1h[i]));
        samples.push(Sample::number(DataType::PrecipitationForecast, entry_time, graph.precipitation_mean_1h[i]));
    }

    Ok(samples)
}

/// Parses, maps and hands over a forecast response to the sink
///
/// # Arguments
///
/// * 'json' - the response body from the forecast endpoint
/// * 'tz' - time zone in which day dates are interpreted
/// * 'sink' - receiver of the samples
pub fn process_forecast<Tz: TimeZone, S: Sink>(json: &str, tz: &Tz, sink: &mut S) -> Result<CycleSummary, MeteoSwissError> {
    let doc = parse_forecast(json)?;
    let samples = map_forecast(&doc, tz)?;

    let summary = CycleSummary {
        conditions: doc.region_forecast.len(),
        hours: doc.graph.temperature_mean_1h.len(),
    };
    debug!("mapped {} samples ({})", samples.len(), summary);

    for s in samples {
        sink.add_value(s.data_type, s.timestamp, s.value);
    }

    Ok(summary)
}

/// The mean temperature series decides the number of hours, the others must keep up
fn check_aligned(graph: &Graph) -> Result<(), MeteoSwissError> {
    let expected = graph.temperature_mean_1h.len();
    let series = [
        ("temperatureMin1h", graph.temperature_min_1h.len()),
        ("temperatureMax1h", graph.temperature_max_1h.len()),
        ("precipitationMean1h", graph.precipitation_mean_1h.len()),
    ];

    for (array, actual) in series {
        if actual < expected {
            return Err(MeteoSwissError::LengthMismatch { array, expected, actual });
        }
    }

    Ok(())
}

/// Returns epoch seconds for midnight of the given 'YYYY-MM-DD' date in the given time zone
fn local_midnight<Tz: TimeZone>(day_date: &str, tz: &Tz) -> Result<i64, MeteoSwissError> {
    let date = NaiveDate::parse_from_str(day_date, "%Y-%m-%d")
        .map_err(|e| MeteoSwissError::Document(format!("bad dayDate '{}': {}", day_date, e)))?;

    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| MeteoSwissError::Document(format!("no local midnight for {}", day_date)))
}
