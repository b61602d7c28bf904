//! WebSocket handlers for real-time updates.
//!
//! `/ws` serves the admin dashboard: every new report and every status
//! change. `/ws/reporter/{reporter_id}` serves one reporter: only the
//! status changes for their own reports. Events are forwarded from the
//! notification bus; a client that falls behind lags on its own buffer
//! without slowing anyone else down.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::state::AppState;
use vigil_core::bus::BusEvent;

/// Dashboard WebSocket upgrade handler.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_dashboard_socket(socket, state))
}

/// Per-reporter WebSocket upgrade handler.
pub async fn reporter_ws_handler(
    ws: WebSocketUpgrade,
    Path(reporter_id): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_reporter_socket(socket, state, reporter_id))
}

/// Handle a dashboard connection: fan in both global topics.
async fn handle_dashboard_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let mut new_reports = state.bus.subscribe_new_reports();
    let mut status_changes = state.bus.subscribe_status_changes();

    let receiver_count = state.bus.dashboard_receiver_count();
    info!(receiver_count, "dashboard WebSocket client connected");

    let send_task = tokio::spawn(async move {
        loop {
            let event = tokio::select! {
                result = new_reports.recv() => match result {
                    Ok(report) => BusEvent::NewReport(report),
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "dashboard client lagged, events dropped");
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                },
                result = status_changes.recv() => match result {
                    Ok(report) => BusEvent::StatusUpdate(report),
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "dashboard client lagged, events dropped");
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                },
            };

            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    warn!(error = %e, "failed to serialize bus event");
                    continue;
                }
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                debug!("WebSocket send failed, client disconnected");
                break;
            }
        }
    });

    let recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    debug!("Received from WebSocket client: {}", text);
                }
                Message::Close(_) => {
                    debug!("WebSocket client sent close frame");
                    break;
                }
                _ => {}
            }
        }
    });

    // Either direction ending tears down the connection.
    tokio::select! {
        _ = send_task => {},
        _ = recv_task => {},
    }

    info!("dashboard WebSocket client disconnected");
}

/// Handle a reporter connection: only their own status updates.
async fn handle_reporter_socket(socket: WebSocket, state: AppState, reporter_id: String) {
    let (mut sender, mut receiver) = socket.split();
    let mut rx = state.bus.subscribe_reporter(&reporter_id);

    info!(reporter_id = %reporter_id, "reporter WebSocket client connected");

    let send_task = tokio::spawn(async move {
        loop {
            let report = match rx.recv().await {
                Ok(report) => report,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "reporter client lagged, events dropped");
                    continue;
                }
                Err(RecvError::Closed) => break,
            };

            let event = BusEvent::StatusUpdate(report);
            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    warn!(error = %e, "failed to serialize bus event");
                    continue;
                }
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                debug!("WebSocket send failed, client disconnected");
                break;
            }
        }
    });

    let recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Close(_) = msg {
                debug!("WebSocket client sent close frame");
                break;
            }
        }
    });

    tokio::select! {
        _ = send_task => {},
        _ = recv_task => {},
    }

    info!(reporter_id = %reporter_id, "reporter WebSocket client disconnected");
}
