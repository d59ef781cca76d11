//! End-to-end tests of the server surface with a mocked catalog API.
//!
//! Drives `McpServer` the way the HTTP transport does: tool calls by name
//! with JSON arguments, resource reads and prompt rendering.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use flipkart_mcp_server::core::config::{BackendConfig, Config};
use flipkart_mcp_server::core::McpServer;

fn server_for(mock: &MockServer) -> McpServer {
    let mut config = Config::default();
    config.backend = BackendConfig::new(mock.uri());
    McpServer::new(config).expect("failed to build McpServer")
}

#[cfg(feature = "http")]
#[tokio::test]
async fn search_tool_returns_structured_results() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/mobile%20phone"))
        .and(query_param("sort", "price_low_to_high"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{ "name": "Phone", "link": "https://flipkart.com/phone-x/p/itm42" }]
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let response = server_for(&mock)
        .call_tool(
            "search_products",
            json!({ "query": "mobile phone", "sort": "price_low_to_high" }),
        )
        .await
        .expect("tool call should dispatch");

    assert_eq!(response["isError"], false);
    assert_eq!(
        response["structuredContent"]["result"][0]["product_link_argument"],
        "phone-x/p/itm42"
    );
    assert_eq!(response["content"][0]["type"], "text");
}

#[cfg(feature = "http")]
#[tokio::test]
async fn price_range_tool_surfaces_backend_failure_as_tool_error() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock)
        .await;

    let response = server_for(&mock)
        .call_tool(
            "search_by_price_range",
            json!({ "query": "fridge", "min_price": 15000, "max_price": 30000 }),
        )
        .await
        .expect("tool call should dispatch");

    assert_eq!(response["isError"], true);
    assert_eq!(response["structuredContent"]["query"], "fridge");
    assert_eq!(
        response["structuredContent"]["error"],
        "HTTP 500: Network error occurred while connecting to API"
    );
}

#[cfg(feature = "http")]
#[tokio::test]
async fn details_tool_adds_canonical_url() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product/phone-x/p/itm42abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_price": 900,
            "original_price": 1200
        })))
        .mount(&mock)
        .await;

    let response = server_for(&mock)
        .call_tool(
            "get_product_details",
            json!({ "product_link_argument": "phone-x/p/itm42abc" }),
        )
        .await
        .expect("tool call should dispatch");

    let body = &response["structuredContent"];
    assert_eq!(body["flipkart_url"], "https://www.flipkart.com/phone-x/p/itm42abc");
    assert_eq!(body["calculated_discount_percent"], 25.0);
}

#[tokio::test]
async fn status_resource_probes_backend_root() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock)
        .await;

    let read = server_for(&mock)
        .read_resource("flipkart://api/status")
        .await
        .expect("status resource should be readable");

    let text = read["contents"][0]["text"].as_str().unwrap_or_default();
    assert_eq!(text, format!("✅ Flipkart API server is running at {}", mock.uri()));
}

#[tokio::test]
async fn gift_prompt_rejects_non_integer_budget() {
    let mock = MockServer::start().await;
    let server = server_for(&mock);

    let err = server
        .get_prompt(
            "gift_recommendations",
            Some(json!({ "occasion": "Diwali", "budget": "a lot", "recipient": "dad" })),
        )
        .await
        .expect_err("non-integer budget should be rejected");
    assert!(err.contains("budget"), "got: {err}");

    let ok = server
        .get_prompt(
            "gift_recommendations",
            Some(json!({ "occasion": "Diwali", "budget": 5000, "recipient": "dad" })),
        )
        .await
        .expect("integer budget should render");
    let text = ok["messages"][0]["content"]["text"].as_str().unwrap_or_default();
    assert!(text.starts_with("I need gift recommendations for Diwali with a budget of ₹5000 for dad."));
}
