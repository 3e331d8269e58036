//! Command-layer integration tests over a mock REST surface.

mod support;

use std::time::Duration;

use chrono::Duration as ChronoDuration;
use serde_json::json;
use vendora_domain::{VendoraError, VisitStatus};
use vendora_lib::commands;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn activate_calendar_view_syncs_immediately() {
    let server = MockServer::start().await;
    support::mount_visits(&server).await;
    let ctx = support::context_for(&server, false, 5);

    let outcome = commands::activate_calendar_view(&ctx).await.unwrap().unwrap();
    assert_eq!(outcome.applied, 2);
    assert_eq!(outcome.rejected, 0);

    let visits = commands::get_visits(&ctx).await.unwrap();
    assert_eq!(visits.len(), 2);
}

#[tokio::test]
async fn calendar_events_have_derived_one_hour_slots() {
    let server = MockServer::start().await;
    support::mount_visits(&server).await;
    let ctx = support::context_for(&server, false, 5);
    commands::activate_calendar_view(&ctx).await.unwrap();

    let events = commands::get_calendar_events(&ctx, None).await.unwrap();
    assert_eq!(events.len(), 2);
    for event in &events {
        assert_eq!(event.end - event.start, ChronoDuration::hours(1));
    }

    // Vendor pre-filter narrows the derived list.
    let filtered = commands::get_calendar_events(&ctx, Some("A".into())).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "v1");
    assert_eq!(filtered[0].title, "Mercado Central");
}

#[tokio::test]
async fn confirm_visit_edit_patches_then_resyncs() {
    let server = MockServer::start().await;
    support::mount_visits(&server).await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/visits"))
        .and(query_param("id", "eq.v1"))
        .and(body_json(json!({
            "status": "completed_purchase",
            "notes": "Fechou a venda"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "v1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = support::context_for(&server, false, 5);
    commands::activate_calendar_view(&ctx).await.unwrap();
    let gets_before = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| request.method.as_str() == "GET")
        .count();

    commands::confirm_visit_edit(&ctx, "v1", VisitStatus::CompletedPurchase, "Fechou a venda".into())
        .await
        .unwrap();

    // Exactly one out-of-band sync followed the single PATCH.
    let gets_after = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| request.method.as_str() == "GET")
        .count();
    assert_eq!(gets_after, gets_before + 1);
}

#[tokio::test]
async fn selecting_a_missing_visit_is_not_found() {
    let server = MockServer::start().await;
    support::mount_visits(&server).await;
    let ctx = support::context_for(&server, false, 5);
    commands::activate_calendar_view(&ctx).await.unwrap();

    let err = commands::select_visit(&ctx, "ghost").await.unwrap_err();
    assert!(matches!(err, VendoraError::NotFound(_)));
}

#[tokio::test]
async fn selection_seeds_the_edit_buffer_from_current_values() {
    let server = MockServer::start().await;
    support::mount_visits(&server).await;
    let ctx = support::context_for(&server, false, 5);
    commands::activate_calendar_view(&ctx).await.unwrap();

    let selection = commands::select_visit(&ctx, "v2").await.unwrap();
    assert_eq!(selection.status, VisitStatus::InNegotiation);
    assert_eq!(selection.notes, "volta amanhã");
}

#[tokio::test(flavor = "multi_thread")]
async fn deactivating_the_view_stops_polling() {
    let server = MockServer::start().await;
    support::mount_visits(&server).await;
    let ctx = support::context_for(&server, true, 1);

    commands::activate_calendar_view(&ctx).await.unwrap();
    tokio::time::sleep(Duration::from_millis(2500)).await;
    commands::deactivate_calendar_view(&ctx).await.unwrap();

    let served = server.received_requests().await.unwrap().len();
    assert!(served >= 2, "poller never fired: {served} requests");

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(server.received_requests().await.unwrap().len(), served);
}

#[tokio::test]
async fn map_view_reports_latest_vendor_locations() {
    let server = MockServer::start().await;
    support::mount_locations(&server).await;
    let ctx = support::context_for(&server, false, 5);

    let vendors = commands::activate_map_view(&ctx).await.unwrap();
    assert_eq!(vendors, Some(1));

    let locations = commands::get_vendor_locations(&ctx).await.unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].vendor_name, "Ana Souza");

    commands::deactivate_map_view(&ctx).await.unwrap();
}

#[tokio::test]
async fn report_reflects_the_synced_mirror() {
    let server = MockServer::start().await;
    support::mount_visits(&server).await;
    let ctx = support::context_for(&server, false, 5);
    commands::activate_calendar_view(&ctx).await.unwrap();

    let report = commands::get_visit_report(&ctx).await.unwrap();
    assert_eq!(report.total_visits, 2);
    assert_eq!(report.by_status["scheduled"], 1);
    assert_eq!(report.by_status["in_negotiation"], 1);
    assert_eq!(report.by_vendor["A"], 1);
    assert_eq!(report.conversion_rate, 0.0);
}

#[tokio::test]
async fn activation_with_remote_down_serves_stale_mirror() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/visits"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let ctx = support::context_for(&server, false, 5);

    // The view still mounts; the mirror just stays empty until a tick lands.
    let outcome = commands::activate_calendar_view(&ctx).await.unwrap();
    assert!(outcome.is_none());
    assert!(commands::get_visits(&ctx).await.unwrap().is_empty());
}

#[tokio::test]
async fn remote_health_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let ctx = support::context_for(&server, false, 5);
    assert!(commands::get_remote_health(&ctx).await.unwrap());
}
