//! Tests de integración del transporte contra un servidor GraphQL falso
//! levantado en el propio proceso.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use bag_tracking::{
    ApiConfig, GraphQlClient, GraphQlTransport, Operation, TrackingError, API_KEY_HEADER,
};

/// Último request recibido por el servidor falso
#[derive(Default)]
struct Received {
    api_key: Option<String>,
    body: Option<Value>,
}

async fn spawn_server(response: (StatusCode, Value)) -> (ApiConfig, Arc<Mutex<Received>>) {
    let received = Arc::new(Mutex::new(Received::default()));

    let handler = move |State(state): State<Arc<Mutex<Received>>>,
                        headers: HeaderMap,
                        Json(body): Json<Value>| {
        let (status, payload) = response.clone();
        async move {
            let mut received = state.lock().unwrap();
            received.api_key = headers
                .get(API_KEY_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            received.body = Some(body);
            (status, Json(payload))
        }
    };

    let app = Router::new()
        .route("/graphql", post(handler))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ApiConfig::new(format!("http://{addr}/graphql"), "secret-key");
    (config, received)
}

#[tokio::test]
async fn execute_posts_query_variables_and_api_key_header() {
    let (config, received) = spawn_server((
        StatusCode::OK,
        json!({"data": {"getTrackedBagsByDate": []}}),
    ))
    .await;

    let client = GraphQlClient::new().unwrap();
    let operation = Operation::GetTrackedBagsByDate {
        journey: "FLYCRUISE".to_string(),
        date: "2025-08-30".to_string(),
    };
    let envelope = client.execute(&config, &operation).await.unwrap();
    assert!(envelope.errors.is_empty());

    let received = received.lock().unwrap();
    assert_eq!(received.api_key.as_deref(), Some("secret-key"));

    let body = received.body.as_ref().unwrap();
    assert_eq!(body["query"], operation.document());
    assert_eq!(
        body["variables"],
        json!({"journey": "FLYCRUISE", "date": "2025-08-30"})
    );
}

#[tokio::test]
async fn operations_without_variables_omit_the_variables_field() {
    let (config, received) =
        spawn_server((StatusCode::OK, json!({"data": {"getTenBags": []}}))).await;

    let client = GraphQlClient::new().unwrap();
    client
        .execute(&config, &Operation::GetTenBags)
        .await
        .unwrap();

    let received = received.lock().unwrap();
    let body = received.body.as_ref().unwrap();
    assert!(body.get("variables").is_none());
}

#[tokio::test]
async fn non_success_status_maps_to_transport_error() {
    let (config, _received) =
        spawn_server((StatusCode::INTERNAL_SERVER_ERROR, json!({"oops": true}))).await;

    let client = GraphQlClient::new().unwrap();
    let err = client
        .execute(&config, &Operation::GetTenBags)
        .await
        .unwrap_err();
    match err {
        TrackingError::Transport { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("oops"));
        }
        other => panic!("expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_reported_errors_are_kept_in_the_envelope() {
    let (config, _received) = spawn_server((
        StatusCode::OK,
        json!({"data": null, "errors": [{"message": "bad journey"}]}),
    ))
    .await;

    let client = GraphQlClient::new().unwrap();
    let envelope = client
        .execute(&config, &Operation::GetTenBags)
        .await
        .unwrap();
    // The transport carries the raw envelope; the orchestrator's dispatch
    // turns a non-empty errors array into a typed failure.
    let err = envelope.into_checked("getTenBags").unwrap_err();
    match err {
        TrackingError::GraphQl { message, .. } => assert_eq!(message, "bad journey"),
        other => panic!("expected GraphQl error, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_maps_to_network_error() {
    // Puerto cerrado: nadie escucha.
    let config = ApiConfig::new("http://127.0.0.1:9/graphql", "secret-key");
    let client = GraphQlClient::new().unwrap();

    let err = client
        .execute(&config, &Operation::GetTenBags)
        .await
        .unwrap_err();
    assert!(matches!(err, TrackingError::Network(_)));
}
