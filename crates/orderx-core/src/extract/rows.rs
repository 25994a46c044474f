//! Joining static fields, prices and delivery dates into output rows.

use chrono::NaiveDate;

use crate::models::order::{DeliveryEntry, OrderRow, PriceEntry, StaticFields};

/// One row per price entry, in price order.
///
/// Delivery entries are only a lookup source: the first entry with the
/// same country code supplies the date. A missing code matches a delivery
/// entry whose code is missing too.
pub fn join_rows(
    fields: &StaticFields,
    prices: &[PriceEntry],
    deliveries: &[DeliveryEntry],
) -> Vec<OrderRow> {
    prices
        .iter()
        .map(|price| OrderRow::new(fields, price, delivery_date(&price.code, deliveries)))
        .collect()
}

fn delivery_date(code: &Option<String>, deliveries: &[DeliveryEntry]) -> Option<NaiveDate> {
    deliveries
        .iter()
        .find(|d| &d.code == code)
        .and_then(|d| d.date)
}
