//! Test fixtures for homepage integration tests

#![allow(dead_code)] // Test utilities may not all be used currently

use serde_json::{Value, json};
use shared::HomeConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Manifest with `count` projects whose titles are `<category>-<i>`
pub fn category_manifest(category: &str, count: usize) -> Value {
    let projects: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "title": format!("{category}-{i}"),
                "img": format!("{category}/{i}.png"),
                "desc": format!("Project {i} of {category}"),
                "url": format!("https://example.com/{category}/{i}"),
                "category": category,
            })
        })
        .collect();
    json!({ "projects": projects })
}

/// Config over three categories showing six cards
pub fn test_config() -> HomeConfig {
    HomeConfig::from_json(r#"{ "categories": ["Modelado", "Musica", "IA"], "home_count": 6, "site_title": "Studio" }"#)
        .unwrap()
}

/// Mock manifest host: two healthy categories with five projects each, one broken
pub async fn manifest_server() -> MockServer {
    let server = MockServer::start().await;

    for category in ["Modelado", "Musica"] {
        Mock::given(method("GET"))
            .and(path(format!("/{category}/manifest.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(category_manifest(category, 5)))
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/IA/manifest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    server
}
