//! JSON REST endpoint for orders

use axum::{
    body::Bytes,
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use cukur_core::{Order, OrderId, OrderInput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::server::error::ServerResult;
use crate::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/orders",
        get(list).post(create).put(update).delete(remove),
    )
}

#[derive(Deserialize, Default)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    fn order_id(&self) -> OrderId {
        OrderId::parse_lenient(self.id.as_deref())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn json(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Decode a JSON order body field by field.
///
/// A field with the wrong type falls back to its zero value without
/// affecting the others; a body that is not a JSON object yields an
/// all-default input.
fn decode_input(body: &[u8]) -> OrderInput {
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "malformed order body, using defaults");
            return OrderInput::default();
        }
    };
    let Some(fields) = value.as_object() else {
        tracing::warn!("order body is not a JSON object, using defaults");
        return OrderInput::default();
    };

    let text = |name: &str| {
        field(fields, name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    OrderInput {
        nama_pelanggan: text("nama_pelanggan"),
        jarak_km: field(fields, "jarak_km")
            .and_then(Value::as_f64)
            .unwrap_or_default(),
        model_rambut: text("model_rambut"),
        metode_pembayaran: text("metode_pembayaran"),
    }
}

/// Look up a key, preferring an exact match over a case-insensitive one
fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).or_else(|| {
        fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}

async fn list(State(state): State<AppState>) -> ServerResult<Json<Vec<Order>>> {
    let orders = state.orders().list().await?;
    Ok(Json(orders))
}

async fn create(State(state): State<AppState>, body: Bytes) -> ServerResult<Json<MessageResponse>> {
    let order = decode_input(&body).priced(state.prices());
    let id = state.orders().insert(&order).await?;

    tracing::info!(%id, harga = order.harga, "order created");
    Ok(MessageResponse::json("order created"))
}

async fn update(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    body: Bytes,
) -> ServerResult<Json<MessageResponse>> {
    let id = query.order_id();
    let order = decode_input(&body).priced(state.prices());

    let found = state.orders().update(id, &order).await?;
    if !found {
        tracing::debug!(%id, "update matched no order");
    }

    Ok(MessageResponse::json("order updated"))
}

async fn remove(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> ServerResult<Json<MessageResponse>> {
    let id = query.order_id();

    let found = state.orders().delete(id).await?;
    if !found {
        tracing::debug!(%id, "delete matched no order");
    }

    Ok(MessageResponse::json("order deleted"))
}
