//! Server-rendered HTML for the order page

use askama::Template;
use axum::response::Html;
use cukur_core::{Order, PriceTable};

/// Option label for models without their own price
const DEFAULT_MODEL_LABEL: &str = "biasa";

const PAYMENT_METHODS: &[&str] = &["cash", "transfer", "qris"];

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    models: Vec<ModelOption<'a>>,
    payment_methods: &'a [&'a str],
    rows: Vec<OrderRow<'a>>,
}

struct ModelOption<'a> {
    value: &'a str,
    price: i64,
}

struct OrderRow<'a> {
    order: &'a Order,
    /// Link to the proof of payment under `/static`
    proof_href: Option<String>,
}

impl<'a> From<&'a Order> for OrderRow<'a> {
    fn from(order: &'a Order) -> Self {
        let proof = order.bukti_pembayaran.trim_start_matches('/');
        Self {
            order,
            proof_href: (!proof.is_empty()).then(|| format!("/static/{proof}")),
        }
    }
}

/// Render the order form followed by every stored order
pub fn render_orders(orders: &[Order], prices: &PriceTable) -> askama::Result<Html<String>> {
    let mut models: Vec<_> = prices
        .models()
        .map(|(value, price)| ModelOption { value, price })
        .collect();
    models.push(ModelOption {
        value: DEFAULT_MODEL_LABEL,
        price: prices.default_price(),
    });

    let template = IndexTemplate {
        models,
        payment_methods: PAYMENT_METHODS,
        rows: orders.iter().map(OrderRow::from).collect(),
    };

    template.render().map(Html)
}
