//! Shared fixtures for the OpenWeather mock-server tests.

#![allow(dead_code)]

use cityweather_core::Config;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Config pointing at the mock server with a short timeout.
pub fn test_config(server: &MockServer) -> Config {
    Config {
        api_key: Some("test_api_key".to_string()),
        base_url: server.uri(),
        timeout_secs: 1,
        ..Config::default()
    }
}

/// The `appid` the provider will actually send (the env var may override the file).
pub fn expected_api_key(config: &Config) -> String {
    config.resolve_api_key().expect("test config carries a key")
}

/// Sample `GET /weather` body, trimmed from a real OpenWeather reply.
pub fn current_weather_body(city: &str, temp: f64, main: &str, description: &str) -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 121.4581, "lat": 31.2222 },
        "weather": [
            { "id": 500, "main": main, "description": description, "icon": "10d" }
        ],
        "base": "stations",
        "main": {
            "temp": temp,
            "feels_like": temp - 1.0,
            "temp_min": temp - 2.0,
            "temp_max": temp + 2.0,
            "pressure": 1014,
            "humidity": 83
        },
        "visibility": 10000,
        "wind": { "speed": 4.0, "deg": 110 },
        "dt": 1_700_000_000,
        "name": city,
        "cod": 200
    })
}

pub fn not_found_body() -> serde_json::Value {
    serde_json::json!({ "cod": "404", "message": "city not found" })
}

/// Mount a mock answering `GET /weather?q=<city>` with the given response.
pub async fn mount_city(server: &MockServer, city: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", city))
        .respond_with(response)
        .mount(server)
        .await;
}
