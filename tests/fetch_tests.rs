//! HTTP tests for the MeteoSwiss fetcher against a wiremock server.
//!
//! The client is blocking, so every cycle runs on the blocking pool of a
//! multi-threaded runtime while the mock server keeps serving.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use meteoswiss::config::{MeteoSwissParameters, Rotation};
use meteoswiss::{CycleOutcome, CycleSummary, DataType, MeteoSwiss, MeteoSwissError, Sample};

fn params(server: &MockServer) -> MeteoSwissParameters {
    MeteoSwissParameters {
        enabled: true,
        plz: "814200".to_string(),
        url: format!("{}/v1/forecast", server.uri()),
        timeout_secs: 5,
        ..Default::default()
    }
}

fn forecast_body() -> serde_json::Value {
    let hours: Vec<f64> = (0..24).map(|h| h as f64).collect();
    json!({
        "currentWeather": { "time": 1700000000000i64, "icon": 1, "temperature": 4.2 },
        "regionForecast": [
            { "dayDate": "2023-11-14", "iconDay": 1, "temperatureMax": 9, "temperatureMin": 2 },
            { "dayDate": "2023-11-15", "iconDay": 17, "temperatureMax": 8, "temperatureMin": 3 },
        ],
        "graph": {
            "start": 1700000000000i64,
            "temperatureMin1h": hours,
            "temperatureMax1h": hours,
            "temperatureMean1h": hours,
            "precipitationMean1h": hours,
        }
    })
}

async fn run_cycle(params: MeteoSwissParameters) -> (CycleOutcome, Vec<Sample>) {
    tokio::task::spawn_blocking(move || {
        let mut mgr = MeteoSwiss::new(&params);
        let mut samples: Vec<Sample> = Vec::new();
        let outcome = mgr.perform(&mut samples);
        (outcome, samples)
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn completed_cycle_emits_all_samples() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("plz", "814200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&server)
        .await;

    let (outcome, samples) = run_cycle(params(&server)).await;

    match outcome {
        CycleOutcome::Completed(summary) => assert_eq!(summary, CycleSummary { conditions: 2, hours: 24 }),
        other => panic!("unexpected outcome: {}", other),
    }
    assert_eq!(samples.len(), 2 + 24 * 4);

    let mean: Vec<i64> = samples
        .iter()
        .filter(|s| s.data_type == DataType::MeanTemperature)
        .map(|s| s.timestamp)
        .collect();
    assert_eq!(mean.len(), 24);
    assert_eq!(mean[0], 1_700_003_600);
    assert_eq!(mean[23], 1_700_086_400);
}

#[tokio::test(flavor = "multi_thread")]
async fn sends_configured_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(header("user-agent", "irrigation-test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = params(&server);
    params.user_agents = vec!["irrigation-test/1.0".to_string()];
    params.rotation = Rotation::RoundRobin;

    let (outcome, _) = run_cycle(params).await;
    assert!(outcome.is_completed(), "unexpected outcome: {}", outcome);
}

#[tokio::test(flavor = "multi_thread")]
async fn http_error_is_no_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (outcome, samples) = run_cycle(params(&server)).await;

    assert!(matches!(outcome, CycleOutcome::NoData(MeteoSwissError::Transport(_))), "unexpected outcome: {}", outcome);
    assert!(samples.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_body_is_no_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let (outcome, samples) = run_cycle(params(&server)).await;

    assert!(matches!(outcome, CycleOutcome::NoData(MeteoSwissError::NoData)), "unexpected outcome: {}", outcome);
    assert!(samples.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_document_fails_without_samples() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let (outcome, samples) = run_cycle(params(&server)).await;

    assert!(matches!(outcome, CycleOutcome::Failed(MeteoSwissError::Document(_))), "unexpected outcome: {}", outcome);
    assert!(samples.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn refused_connection_is_no_data() {
    // Bind and release a port so nothing listens on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let params = MeteoSwissParameters {
        enabled: true,
        plz: "814200".to_string(),
        url: format!("http://127.0.0.1:{}/v1/forecast", port),
        timeout_secs: 5,
        ..Default::default()
    };

    let (outcome, samples) = run_cycle(params).await;

    match outcome {
        CycleOutcome::NoData(MeteoSwissError::Transport(msg)) => {
            assert!(!msg.contains("http status"), "expected a connection error, got: {}", msg);
        },
        other => panic!("unexpected outcome: {}", other),
    }
    assert!(samples.is_empty());
}
