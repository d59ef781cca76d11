//! Integration tests for `CatalogService` against a mocked catalog API.
//!
//! Each test starts its own `wiremock` server so no real network traffic is
//! made. Covers request shaping for the three operations, response
//! normalization and every failure category.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use flipkart_mcp_server::core::config::BackendConfig;
use flipkart_mcp_server::domains::catalog::{
    CatalogService, SearchQuery, SortOrder, TIMEOUT_MESSAGE,
};

fn service_for(server: &MockServer) -> CatalogService {
    CatalogService::new(BackendConfig::new(server.uri())).expect("failed to build CatalogService")
}

// ---------------------------------------------------------------------------
// search_products
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_encodes_query_and_sends_only_supplied_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/realme%20earbuds"))
        .and(query_param("sort", "popularity"))
        .and(query_param("max_price", "2000"))
        .and(query_param_is_missing("min_price"))
        .and(query_param_is_missing("page_number"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let search = SearchQuery {
        sort: Some(SortOrder::Popularity),
        min_price: Some(0),
        max_price: Some(2000),
        ..SearchQuery::new("realme earbuds")
    };
    let body = service_for(&server).search_products(&search).await;

    assert_eq!(body, Ok(json!({ "result": [] })));
}

#[tokio::test]
async fn search_adds_link_argument_to_storefront_listings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/buds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_result": 2,
            "result": [
                { "name": "Buds T110", "link": "https://flipkart.com/realme-buds-t110/p/itm123" },
                { "name": "Sponsored", "link": "https://ads.example.com/x" }
            ]
        })))
        .mount(&server)
        .await;

    let body = service_for(&server)
        .search_products(&SearchQuery::new("buds"))
        .await
        .expect("search should succeed");

    assert_eq!(body["total_result"], 2);
    assert_eq!(
        body["result"][0]["product_link_argument"],
        "realme-buds-t110/p/itm123"
    );
    assert!(body["result"][1].get("product_link_argument").is_none());
}

#[tokio::test]
async fn search_reports_status_code_and_echoes_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let failure = service_for(&server)
        .search_products(&SearchQuery::new("ghost"))
        .await
        .expect_err("404 should fail");

    let payload = failure.to_value();
    assert_eq!(
        payload["error"],
        "HTTP 404: Network error occurred while connecting to API"
    );
    assert_eq!(payload["query"], "ghost");
    assert_eq!(payload["status"], "failed");
}

#[tokio::test]
async fn search_reports_malformed_json_as_unexpected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let failure = service_for(&server)
        .search_products(&SearchQuery::new("tv"))
        .await
        .expect_err("HTML body should fail");

    assert!(
        failure.error.starts_with("Unexpected error: "),
        "got: {}",
        failure.error
    );
}

#[tokio::test]
async fn search_times_out_with_fixed_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "result": [] }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = BackendConfig::new(server.uri());
    config.timeout_secs = 1;
    let service = CatalogService::new(config).expect("failed to build CatalogService");

    let failure = service
        .search_products(&SearchQuery::new("slow"))
        .await
        .expect_err("delayed response should time out");

    assert_eq!(failure.error, "Request timed out while connecting to API");
    assert_eq!(failure.to_value()["query"], "slow");
}

#[tokio::test]
async fn search_against_closed_port_is_network_error() {
    let service = CatalogService::new(BackendConfig::new("http://127.0.0.1:9"))
        .expect("failed to build CatalogService");

    let failure = service
        .search_products(&SearchQuery::new("anything"))
        .await
        .expect_err("connection should be refused");

    assert!(failure
        .error
        .starts_with("Network error occurred while connecting to API: "));
}

// ---------------------------------------------------------------------------
// get_product_details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn details_cleans_link_and_computes_discount() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product/realme-buds-t110/p/itm123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "realme Buds T110",
            "current_price": 1499,
            "original_price": "2999"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = service_for(&server)
        .get_product_details(" 0.0.0.0:3000/realme-buds-t110/p/itm123/ ")
        .await
        .expect("details should succeed");

    assert_eq!(
        body["flipkart_url"],
        "https://www.flipkart.com/realme-buds-t110/p/itm123"
    );
    assert_eq!(body["calculated_discount_percent"], 50.02);
    assert_eq!(body["name"], "realme Buds T110");
}

#[tokio::test]
async fn details_keeps_backend_discount() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_price": 800,
            "original_price": 1000,
            "discount_percent": 20
        })))
        .mount(&server)
        .await;

    let body = service_for(&server)
        .get_product_details("some-phone/p/itm9876")
        .await
        .expect("details should succeed");

    assert_eq!(body["discount_percent"], 20);
    assert!(body.get("calculated_discount_percent").is_none());
    assert!(body["flipkart_url"].is_string());
}

#[tokio::test]
async fn details_rejects_short_link_without_calling_backend() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let failure = service_for(&server)
        .get_product_details("0.0.0.0:3000/abc")
        .await
        .expect_err("short link should be rejected");

    let payload = failure.to_value();
    assert_eq!(payload["error"], "Invalid product link argument provided");
    assert_eq!(payload["product_link_argument"], "0.0.0.0:3000/abc");
}

#[tokio::test]
async fn details_times_out_and_echoes_raw_link() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product/slow-phone/p/itm5555"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "current_price": 10 }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = BackendConfig::new(server.uri());
    config.timeout_secs = 1;
    let service = CatalogService::new(config).expect("failed to build CatalogService");

    let raw_link = "/slow-phone/p/itm5555 ";
    let failure = service
        .get_product_details(raw_link)
        .await
        .expect_err("delayed response should time out");

    let payload = failure.to_value();
    assert_eq!(payload["error"], TIMEOUT_MESSAGE);
    assert_eq!(payload["product_link_argument"], raw_link);
    assert_eq!(payload["status"], "failed");
}

// ---------------------------------------------------------------------------
// search_by_price_range
// ---------------------------------------------------------------------------

#[tokio::test]
async fn price_range_defaults_to_cheapest_first() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/laptop"))
        .and(query_param("sort", "price_low_to_high"))
        .and(query_param("min_price", "30000"))
        .and(query_param("max_price", "50000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let body = service_for(&server)
        .search_by_price_range("laptop", 30000, 50000, None, None)
        .await;

    assert!(body.is_ok(), "expected Ok, got: {body:?}");
}

#[tokio::test]
async fn price_range_sends_both_bounds_for_phone_budget() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/phone"))
        .and(query_param("min_price", "10000"))
        .and(query_param("max_price", "20000"))
        .and(query_param("sort", "price_low_to_high"))
        .and(query_param_is_missing("page_number"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{ "name": "budget phone", "link": "https://flipkart.com/budget-phone/p/itm0001" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = service_for(&server)
        .search_by_price_range("phone", 10000, 20000, None, None)
        .await
        .expect("price range search should succeed");

    assert_eq!(
        body["result"][0]["product_link_argument"],
        "budget-phone/p/itm0001"
    );
}

#[tokio::test]
async fn price_range_honours_explicit_sort_and_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/tv"))
        .and(query_param("sort", "newest_first"))
        .and(query_param("page_number", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let body = service_for(&server)
        .search_by_price_range("tv", 10000, 20000, Some(SortOrder::NewestFirst), Some(2))
        .await;

    assert!(body.is_ok(), "expected Ok, got: {body:?}");
}

// ---------------------------------------------------------------------------
// api_status
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_status_reports_running_and_other_statuses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let base = server.uri();

    assert_eq!(
        service.api_status().await.describe(&base),
        format!("✅ Flipkart API server is running at {base}")
    );
    assert_eq!(
        service.api_status().await.describe(&base),
        "⚠️ Flipkart API server responded with status 503"
    );
}
