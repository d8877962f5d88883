//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{
    COMPOSITION_FAILED, ItineraryConfig,
    error::ApplicationError,
    ports::{BikeStationPort, GeocodingPort, PlaceSuggestion, RoutingPort},
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use axum_test::TestServer;
use domain::{BikeStation, GeoLocation, RouteDocument, TravelMode};
use infrastructure::{ExpiringCacheConfig, ProviderProxy};
use presentation_http::{AppState, cors_layer, routes::create_router};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Geocoder answering "Lyon" everywhere except the ocean at longitude < -20
struct FakeGeocoding;

#[async_trait]
impl GeocodingPort for FakeGeocoding {
    async fn reverse_geocode(&self, location: &GeoLocation) -> Result<String, ApplicationError> {
        if location.longitude() < -20.0 {
            Err(ApplicationError::NotFound(format!("No city at {location}")))
        } else {
            Ok("Lyon".to_string())
        }
    }

    async fn search(&self, query: &str) -> Result<Vec<PlaceSuggestion>, ApplicationError> {
        if query == "boom" {
            return Err(ApplicationError::UpstreamUnavailable("HTTP 503".to_string()));
        }
        Ok(vec![
            PlaceSuggestion::new("Lyon, Rhône, France", 45.7578, 4.8320),
            PlaceSuggestion::new("Lyon County, Kansas, United States", 38.4397, -96.15),
        ])
    }
}

struct FakeStations {
    stations: Vec<BikeStation>,
}

#[async_trait]
impl BikeStationPort for FakeStations {
    async fn list_stations(&self, city: &str) -> Result<Vec<BikeStation>, ApplicationError> {
        if city == "Lyon" {
            Ok(self.stations.clone())
        } else {
            Ok(Vec::new())
        }
    }
}

/// Router returning one step named after the mode and endpoints
struct FakeRouting;

#[async_trait]
impl RoutingPort for FakeRouting {
    async fn compute_route(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
        mode: TravelMode,
    ) -> Result<RouteDocument, ApplicationError> {
        let doc = json!({
            "routes": [{
                "summary": { "duration": 120.0 },
                "segments": [{ "steps": [{ "instruction": format!("{mode} {from} -> {to}") }] }]
            }]
        });
        Ok(RouteDocument::from_value(doc)?)
    }
}

fn lyon_stations() -> Vec<BikeStation> {
    vec![
        BikeStation::new("Bellecour", 4, 20, 45.7650, 4.8360),
        BikeStation::new("Brotteaux", 2, 15, 45.7785, 4.8515),
    ]
}

fn create_test_state(stations: Vec<BikeStation>) -> AppState {
    AppState::from_ports(
        Arc::new(FakeGeocoding),
        Arc::new(FakeStations { stations }),
        Arc::new(FakeRouting),
        ItineraryConfig::default(),
        ", France",
    )
}

fn create_test_server() -> TestServer {
    TestServer::new(create_router(create_test_state(lyon_stations())))
        .expect("Failed to create test server")
}

fn itinerary_params(mode: &str) -> [(&'static str, String); 5] {
    [
        ("originLat", "45.7640".to_string()),
        ("originLon", "4.8357".to_string()),
        ("destinationLat", "45.7790".to_string()),
        ("destinationLon", "4.8520".to_string()),
        ("mode", mode.to_string()),
    ]
}

fn with_params(
    mut request: axum_test::TestRequest,
    params: &[(&'static str, String)],
) -> axum_test::TestRequest {
    for (key, value) in params {
        request = request.add_query_param(key, value);
    }
    request
}

// ============================================================================
// Itinerary
// ============================================================================

#[tokio::test]
async fn cycling_itinerary_goes_through_stations() {
    let server = create_test_server();

    let response = with_params(server.get("/itinerary"), &itinerary_params("cycling")).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["useBike"], true);
    assert_eq!(body["closestOriginStation"]["name"], "Bellecour");
    assert_eq!(body["closestDestinationStation"]["name"], "Brotteaux");

    let itinerary = &body["itinerary"];
    for leg in ["originToStation", "stationToStation", "stationToDestination"] {
        assert!(itinerary[leg]["routes"][0].is_object(), "{leg}");
    }
    let ride = itinerary["stationToStation"]["routes"][0]["segments"][0]["steps"][0]["instruction"]
        .as_str()
        .unwrap();
    assert!(ride.starts_with("cycling"));
}

#[tokio::test]
async fn walking_itinerary_is_direct() {
    let server = create_test_server();

    let response = with_params(server.get("/itinerary"), &itinerary_params("walking")).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["useBike"], false);
    assert!(body["closestOriginStation"].is_null());
    let step = body["itinerary"]["routes"][0]["segments"][0]["steps"][0]["instruction"]
        .as_str()
        .unwrap();
    assert!(step.starts_with("walking"));
}

#[tokio::test]
async fn cycling_without_stations_is_direct_bike() {
    let server = TestServer::new(create_router(create_test_state(Vec::new()))).unwrap();

    let response = with_params(server.get("/itinerary"), &itinerary_params("cycling")).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["useBike"], true);
    assert!(body["itinerary"]["routes"][0].is_object());
}

#[tokio::test]
async fn missing_parameter_is_bad_request() {
    let server = create_test_server();

    let mut params = itinerary_params("cycling").to_vec();
    params.retain(|(key, _)| *key != "mode");

    let response = with_params(server.get("/itinerary"), &params).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing required query parameters.");
}

#[tokio::test]
async fn non_numeric_parameter_is_bad_request() {
    let server = create_test_server();

    let mut params = itinerary_params("cycling");
    params[1].1 = "east".to_string();

    let response = with_params(server.get("/itinerary"), &params).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Query parameters must be valid numbers.");
}

#[tokio::test]
async fn composition_failure_is_bad_gateway_document() {
    let server = create_test_server();

    let mut params = itinerary_params("cycling");
    params[1].1 = "-30.0".to_string();

    let response = with_params(server.get("/itinerary"), &params).await;
    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["error"], COMPOSITION_FAILED);
    assert!(body["details"].as_str().unwrap().contains("No city"));
}

// ============================================================================
// Instructions
// ============================================================================

#[tokio::test]
async fn instructions_follow_travel_order() {
    let server = create_test_server();

    let response = with_params(
        server.get("/itinerary/instructions"),
        &itinerary_params("cycling"),
    )
    .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let instructions = body["instructions"].as_array().unwrap();
    assert_eq!(instructions.len(), 3);
    assert!(instructions[0].as_str().unwrap().starts_with("walking"));
    assert!(instructions[1].as_str().unwrap().starts_with("cycling"));
    assert!(instructions[2].as_str().unwrap().starts_with("walking"));
    assert!((body["totalDurationSecs"].as_f64().unwrap() - 360.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn instructions_failure_is_bad_gateway_document() {
    let server = create_test_server();

    let mut params = itinerary_params("walking");
    params[3].1 = "-40.0".to_string();

    let response = with_params(server.get("/itinerary/instructions"), &params).await;
    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["error"], COMPOSITION_FAILED);
}

// ============================================================================
// Provider lookups
// ============================================================================

#[tokio::test]
async fn stations_of_city() {
    let server = create_test_server();

    let response = server.get("/jcdecaux/stations").add_query_param("city", "Lyon").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["bikesAvailable"], 4);
}

#[tokio::test]
async fn stations_without_city_is_bad_request() {
    let server = create_test_server();
    server
        .get("/jcdecaux/stations")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn geocode_is_unfiltered() {
    let server = create_test_server();

    let response = server
        .get("/openstreetmap/geocode")
        .add_query_param("query", "Lyon")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["displayName"], "Lyon, Rhône, France");
}

#[tokio::test]
async fn reverse_geocode_returns_city_string() {
    let server = create_test_server();

    let response = server
        .get("/openstreetmap/reverse")
        .add_query_param("lat", "45.764")
        .add_query_param("lon", "4.8357")
        .await;
    response.assert_status_ok();
    response.assert_json(&json!("Lyon"));
}

#[tokio::test]
async fn reverse_geocode_without_city_is_not_found() {
    let server = create_test_server();

    server
        .get("/openstreetmap/reverse")
        .add_query_param("lat", "0")
        .add_query_param("lon", "-30")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Suggestions
// ============================================================================

#[tokio::test]
async fn suggestions_keep_country_only() {
    let server = create_test_server();

    let response = server.get("/suggestions").add_query_param("query", "Lyon").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["displayName"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Lyon, Rhône, France"]);
}

#[tokio::test]
async fn suggestions_blank_query_is_bad_request() {
    let server = create_test_server();

    let response = server.get("/suggestions").add_query_param("query", "  ").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing required query parameter: query.");
}

#[tokio::test]
async fn suggestions_provider_failure_is_internal_error() {
    let server = create_test_server();

    let response = server.get("/suggestions").add_query_param("query", "boom").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "An unexpected error occurred while fetching suggestions."
    );
}

// ============================================================================
// Health, fallback, CORS
// ============================================================================

#[tokio::test]
async fn health_without_proxy() {
    let server = create_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body.get("cache").is_none());
}

#[tokio::test]
async fn health_reports_cache_stats() {
    let proxy = Arc::new(ProviderProxy::new(
        Arc::new(FakeGeocoding),
        Arc::new(FakeStations {
            stations: lyon_stations(),
        }),
        Arc::new(FakeRouting),
        ExpiringCacheConfig::default(),
    ));
    let state = AppState::from_proxy(Arc::clone(&proxy), &infrastructure::AppConfig::default());
    let server = TestServer::new(create_router(state)).unwrap();

    for _ in 0..2 {
        server
            .get("/jcdecaux/stations")
            .add_query_param("city", "Lyon")
            .await
            .assert_status_ok();
    }

    let body: Value = server.get("/health").await.json();
    assert_eq!(body["cache"]["stations"]["misses"], 1);
    assert_eq!(body["cache"]["stations"]["hits"], 1);
}

#[tokio::test]
async fn unknown_path_is_endpoint_invalid() {
    let server = create_test_server();

    let response = server.get("/does/not/exist").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Endpoint Invalid.");
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let app = create_router(create_test_state(lyon_stations())).layer(cors_layer(&[]));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:8080")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
