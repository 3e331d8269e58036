//! End-to-end polling tests: scheduler -> visit store -> Supabase REST
//! surface.

mod support;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use vendora_core::VisitStore;
use vendora_domain::VisitStatus;
use vendora_infra::observability::PerformanceMetrics;
use vendora_infra::remote::{SupabaseClient, SupabaseClientConfig};
use vendora_infra::scheduling::{PollScheduler, PollSchedulerConfig, VisitSyncJob};
use vendora_infra::SupabaseVisitRepository;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn visit_body() -> serde_json::Value {
    json!([
        {
            "id": "v1",
            "vendor_id": "A",
            "client_name": "Mercado Central",
            "location": "Cuiabá",
            "scheduled_date": "2025-03-10T14:00:00Z",
            "status": "scheduled",
            "notes": ""
        }
    ])
}

async fn store_for(server: &MockServer) -> Arc<VisitStore> {
    let config = SupabaseClientConfig {
        base_url: server.uri(),
        api_key: "anon-key".to_string(),
        ..Default::default()
    };
    let client = Arc::new(SupabaseClient::with_config(config).unwrap());
    Arc::new(VisitStore::new(Arc::new(SupabaseVisitRepository::new(client))))
}

#[tokio::test(flavor = "multi_thread")]
async fn poller_keeps_the_mirror_fresh_while_active() {
    support::init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/visits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(visit_body()))
        .mount(&server)
        .await;

    let store = store_for(&server).await;

    // View-activate: one immediate sync, then the timer takes over.
    store.sync().await.unwrap();
    assert_eq!(store.visits().len(), 1);

    let metrics = Arc::new(PerformanceMetrics::new());
    let mut scheduler = PollScheduler::with_config(
        PollSchedulerConfig {
            interval: Duration::from_millis(30),
            job_timeout: Duration::from_secs(1),
            join_timeout: Duration::from_secs(1),
        },
        Arc::new(VisitSyncJob::new(Arc::clone(&store))),
        metrics,
    );

    scheduler.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;
    scheduler.stop().await.unwrap();

    let synced = store.last_sync().unwrap();
    assert_eq!(synced.applied, 1);
    assert_eq!(store.visits()[0].status, VisitStatus::Scheduled);

    // Requests stop once the view is deactivated.
    let served = server.received_requests().await.unwrap().len();
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(server.received_requests().await.unwrap().len(), served);
}

#[tokio::test(flavor = "multi_thread")]
async fn remote_outage_keeps_stale_mirror_and_loop_alive() {
    support::init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/visits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(visit_body()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    // Everything after the first fetch fails.
    Mock::given(method("GET"))
        .and(path("/rest/v1/visits"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = store_for(&server).await;
    store.sync().await.unwrap();
    assert_eq!(store.visits().len(), 1);

    let metrics = Arc::new(PerformanceMetrics::new());
    let mut scheduler = PollScheduler::with_config(
        PollSchedulerConfig {
            interval: Duration::from_millis(30),
            job_timeout: Duration::from_secs(2),
            join_timeout: Duration::from_secs(1),
        },
        Arc::new(VisitSyncJob::new(Arc::clone(&store))),
        Arc::clone(&metrics),
    );

    scheduler.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(scheduler.is_running());
    scheduler.stop().await.unwrap();

    // Log-and-keep-stale: failures recorded, mirror still serving data.
    assert!(metrics.fetch_errors() >= 1);
    assert_eq!(store.visits().len(), 1);
}
