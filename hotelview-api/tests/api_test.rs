use std::sync::Arc;
use std::time::Duration;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use hotelview_api::{app, AppState};
use hotelview_core::booking::SimulatedProcessor;
use hotelview_core::{HotelProperty, SearchParameters, SearchResult};
use hotelview_listing::ViewOptions;
use serde_json::{json, Value};
use tower::ServiceExt;

fn snapshot() -> SearchResult {
    let mut linked = HotelProperty::new("Casa Azul");
    linked.link = "https://example.com/casa-azul".to_string();
    linked.rate_per_night = Some(140.0);
    linked.overall_rating = Some(4.1);
    linked.amenities = Some(vec!["Free WiFi".to_string(), "Pool".to_string()]);

    let mut unlinked = HotelProperty::new("Bairro Hostel");
    unlinked.rate_per_night = Some(35.0);

    let mut top = HotelProperty::new("Alfama Suites");
    top.link = "https://example.com/alfama".to_string();
    top.rate_per_night = Some(90.0);
    top.overall_rating = Some(4.9);

    SearchResult {
        search_parameters: SearchParameters {
            query: "Lisbon".to_string(),
            check_in_date: "2024-12-20".to_string(),
            check_out_date: "2024-12-22".to_string(),
            adults: 2,
            currency: "USD".to_string(),
        },
        total_results: 2500,
        properties: vec![linked, unlinked, top],
    }
}

fn test_state(delay: Duration) -> AppState {
    AppState::new(
        snapshot(),
        Arc::new(SimulatedProcessor::new(delay)),
        ViewOptions::default(),
        "hotels",
    )
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn book(item_id: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/bookings")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "item_id": item_id }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_grid_sorted_by_price_by_default() {
    let (status, body) = send(app(test_state(Duration::ZERO)), get("/v1/hotels")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Hotels in Lisbon");
    assert_eq!(body["subtitle"], "2,500 properties found");
    assert_eq!(body["sort"], "price");
    let names: Vec<&str> = body["cards"].as_array().unwrap().iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Bairro Hostel", "Alfama Suites", "Casa Azul"]);
    assert_eq!(body["cards"][0]["item_id"], "Bairro Hostel-1");
    assert_eq!(body["cards"][0]["nights_label"], "2 nights");
}

#[tokio::test]
async fn test_grid_sort_by_rating_and_invalid_key() {
    let router = app(test_state(Duration::ZERO));

    let (status, body) = send(router.clone(), get("/v1/hotels?sort=rating")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["cards"].as_array().unwrap().iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Alfama Suites", "Casa Azul", "Bairro Hostel"]);

    let (status, body) = send(router, get("/v1/hotels?sort=distance")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown sort key: distance");
}

#[tokio::test]
async fn test_hotel_detail_and_not_found() {
    let router = app(test_state(Duration::ZERO));

    let (status, body) = send(router.clone(), get("/v1/hotels/https%3A%2F%2Fexample.com%2Fcasa-azul")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Casa Azul");
    assert_eq!(body["amenities"][0]["icon"], "wifi");
    assert_eq!(body["price_breakdown"], "$140 × 2 nights");
    assert_eq!(body["action"]["label"], "Book Hotel");

    let (status, _) = send(router, get("/v1/hotels/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_flow() {
    let state = test_state(Duration::from_millis(50));
    let router = app(state.clone());

    let (status, body) = send(router.clone(), book("Bairro Hostel-1")).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["status"], "PENDING");

    let (status, _) = send(router.clone(), book("Bairro Hostel-1")).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = send(router.clone(), get("/v1/bookings")).await;
    assert_eq!(body["pending"], json!(["Bairro Hostel-1"]));

    // Wait for the simulated delay to elapse
    let mut settled = false;
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        let (_, body) = send(router.clone(), get("/v1/bookings")).await;
        if body["booked"] == json!(["Bairro Hostel-1"]) && body["pending"] == json!([]) {
            settled = true;
            break;
        }
    }
    assert!(settled, "booking never settled");

    let (_, body) = send(router.clone(), get("/v1/hotels")).await;
    assert_eq!(body["cards"][0]["is_booked"], true);
    assert_eq!(body["cards"][0]["action"]["label"], "Booked");
    assert_eq!(body["cards"][0]["action"]["enabled"], false);

    let (status, _) = send(router, book("Bairro Hostel-1")).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_booking_emits_notification() {
    let state = test_state(Duration::ZERO);
    let mut rx = state.notifications.subscribe();

    let (status, _) = send(app(state), book("https://example.com/alfama")).await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let notification = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("no notification")
        .unwrap();
    assert_eq!(notification.title, "Hotel Booked Successfully! 🏨");
    assert_eq!(notification.description, "Alfama Suites has been reserved for your stay.");
}

#[tokio::test]
async fn test_booking_rejects_bad_ids() {
    let router = app(test_state(Duration::ZERO));

    let (status, _) = send(router.clone(), book("")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(router, book("https://example.com/missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let response = app(test_state(Duration::ZERO)).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
