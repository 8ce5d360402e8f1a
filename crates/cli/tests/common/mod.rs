//! Common test utilities for E2E testing against a mock order API.
//!
//! This module provides an in-process HTTP server exposing the three remote
//! endpoints the workflow talks to (`/orders`, `/update`, `/alerts`), with
//! recorded requests and per-route status overrides.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tokio::sync::RwLock;

/// Shared state behind the mock API routes.
pub struct MockApiState {
    /// JSON body served by GET /orders.
    orders_body: RwLock<Value>,
    /// Status served by GET /orders.
    orders_status: RwLock<u16>,
    /// Status served by POST /alerts.
    alerts_status: RwLock<u16>,
    /// Per-OrderId status overrides for POST /update (default 200).
    update_statuses: RwLock<HashMap<String, u16>>,
    /// Recorded POST /update bodies.
    updates: RwLock<Vec<Value>>,
    /// Recorded POST /alerts bodies.
    alerts: RwLock<Vec<Value>>,
}

/// In-process mock of the remote order system.
///
/// Listens on an ephemeral localhost port; use [`MockApi::base_url`] as the
/// workflow's configured base URL.
pub struct MockApi {
    pub addr: SocketAddr,
    state: Arc<MockApiState>,
}

impl MockApi {
    /// Start the mock API on an ephemeral port.
    pub async fn start() -> Self {
        let state = Arc::new(MockApiState {
            orders_body: RwLock::new(Value::Array(vec![])),
            orders_status: RwLock::new(200),
            alerts_status: RwLock::new(200),
            update_statuses: RwLock::new(HashMap::new()),
            updates: RwLock::new(Vec::new()),
            alerts: RwLock::new(Vec::new()),
        });

        let router = Router::new()
            .route("/orders", get(get_orders))
            .route("/update", post(post_update))
            .route("/alerts", post(post_alerts))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock API listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Mock API server error");
        });

        Self { addr, state }
    }

    /// Base URL for pointing the workflow at this mock.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Set the JSON array served by the orders endpoint.
    pub async fn set_orders(&self, orders: Value) {
        *self.state.orders_body.write().await = orders;
    }

    /// Make the orders endpoint respond with the given HTTP status.
    pub async fn set_orders_status(&self, status: u16) {
        *self.state.orders_status.write().await = status;
    }

    /// Make the alerts endpoint respond with the given HTTP status.
    pub async fn set_alerts_status(&self, status: u16) {
        *self.state.alerts_status.write().await = status;
    }

    /// Make update calls for the given order id respond with an HTTP status.
    pub async fn fail_update_for(&self, order_id: &str, status: u16) {
        self.state
            .update_statuses
            .write()
            .await
            .insert(order_id.to_string(), status);
    }

    /// Recorded bodies posted to the update endpoint.
    pub async fn recorded_updates(&self) -> Vec<Value> {
        self.state.updates.read().await.clone()
    }

    /// Recorded bodies posted to the alerts endpoint.
    pub async fn recorded_alerts(&self) -> Vec<Value> {
        self.state.alerts.read().await.clone()
    }
}

async fn get_orders(State(state): State<Arc<MockApiState>>) -> (StatusCode, Json<Value>) {
    let status = *state.orders_status.read().await;
    if status != 200 {
        return (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(Value::Null),
        );
    }
    (StatusCode::OK, Json(state.orders_body.read().await.clone()))
}

async fn post_update(
    State(state): State<Arc<MockApiState>>,
    Json(body): Json<Value>,
) -> StatusCode {
    state.updates.write().await.push(body.clone());

    let order_id = body["OrderId"].as_str().unwrap_or_default().to_string();
    let statuses = state.update_statuses.read().await;
    let status = statuses.get(&order_id).copied().unwrap_or(200);
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

async fn post_alerts(
    State(state): State<Arc<MockApiState>>,
    Json(body): Json<Value>,
) -> StatusCode {
    state.alerts.write().await.push(body);

    let status = *state.alerts_status.read().await;
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
