//! HTML form flow: list orders and accept new ones

use axum::{
    body::Bytes,
    extract::State,
    response::{Html, Redirect},
    routing::get,
    Router,
};
use cukur_core::{parse_distance, OrderInput};

use crate::server::error::ServerResult;
use crate::server::page::render_orders;
use crate::server::AppState;

pub fn router() -> Router<AppState> {
    // Methods other than POST render the page like GET does
    Router::new().route("/", get(index).post(submit).fallback(index))
}

/// Raw form fields; the distance stays text until parsed leniently
#[derive(Debug, Default, PartialEq)]
pub struct OrderForm {
    pub nama_pelanggan: String,
    pub jarak_km: String,
    pub model_rambut: String,
    pub metode_pembayaran: String,
}

impl OrderForm {
    /// Read an urlencoded body whatever its content type.
    ///
    /// The first value of a repeated field wins; missing fields stay empty
    /// and unknown fields are ignored.
    pub fn parse(body: &[u8]) -> Self {
        let mut form = Self::default();
        let mut seen = [false; 4];

        for (key, value) in form_urlencoded::parse(body) {
            let (slot, field) = match key.as_ref() {
                "nama_pelanggan" => (0, &mut form.nama_pelanggan),
                "jarak_km" => (1, &mut form.jarak_km),
                "model_rambut" => (2, &mut form.model_rambut),
                "metode_pembayaran" => (3, &mut form.metode_pembayaran),
                _ => continue,
            };
            if !seen[slot] {
                seen[slot] = true;
                *field = value.into_owned();
            }
        }

        form
    }
}

impl From<OrderForm> for OrderInput {
    fn from(form: OrderForm) -> Self {
        Self {
            nama_pelanggan: form.nama_pelanggan,
            jarak_km: parse_distance(&form.jarak_km),
            model_rambut: form.model_rambut,
            metode_pembayaran: form.metode_pembayaran,
        }
    }
}

async fn index(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let orders = state.orders().list().await?;
    Ok(render_orders(&orders, state.prices())?)
}

async fn submit(State(state): State<AppState>, body: Bytes) -> ServerResult<Redirect> {
    let order = OrderInput::from(OrderForm::parse(&body)).priced(state.prices());
    let id = state.orders().insert(&order).await?;

    tracing::info!(%id, harga = order.harga, "order created from form");

    // 303 so a refresh does not resubmit the form
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form() {
        let form = OrderForm::parse(
            b"nama_pelanggan=Siti+Aminah&jarak_km=1.5&model_rambut=fade&metode_pembayaran=cash",
        );

        assert_eq!(
            form,
            OrderForm {
                nama_pelanggan: "Siti Aminah".to_string(),
                jarak_km: "1.5".to_string(),
                model_rambut: "fade".to_string(),
                metode_pembayaran: "cash".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_form_keeps_first_value() {
        let form = OrderForm::parse(b"jarak_km=2&jarak_km=3&model_rambut=gundul&model_rambut=fade");

        assert_eq!(form.jarak_km, "2");
        assert_eq!(form.model_rambut, "gundul");
    }

    #[test]
    fn test_parse_form_tolerates_garbage() {
        assert_eq!(OrderForm::parse(b""), OrderForm::default());
        assert_eq!(OrderForm::parse(b"%%%&=&foo=bar"), OrderForm::default());

        let input = OrderInput::from(OrderForm::parse(b"nama_pelanggan=Dewi&jarak_km=jauh"));
        assert_eq!(input.nama_pelanggan, "Dewi");
        assert_eq!(input.jarak_km, 0.0);
    }
}
