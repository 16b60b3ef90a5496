//! Record decoding: numeric policy, dates, labels and the cash flow drift.

use chrono::NaiveDate;
use restaurant_dashboard_sdk::export::to_rows;
use restaurant_dashboard_sdk::models::coerce::{date_from, number_from};
use restaurant_dashboard_sdk::models::{
    decode, decode_rows, CashFlowBreakdownByDay, CashFlowByDay, CustomerRetention, DeliveryLocation,
    PaymentsByType, RegionPerformance, SalesByChannelDescription, TopItem,
};
use restaurant_dashboard_sdk::DashboardError;
use serde_json::json;

// ---------------------------------------------------------------------------
// number_from / date_from
// ---------------------------------------------------------------------------

#[test]
fn number_from_parses_numeric_strings() {
    assert_eq!(number_from(&json!("12.50")), Some(12.5));
    assert_eq!(number_from(&json!(" 7 ")), Some(7.0));
    assert_eq!(number_from(&json!("-3.25")), Some(-3.25));
    assert_eq!(number_from(&json!("")), Some(0.0));
    assert_eq!(number_from(&json!(42)), Some(42.0));
    assert_eq!(number_from(&json!(true)), Some(1.0));
}

#[test]
fn number_from_reads_radix_prefixes() {
    assert_eq!(number_from(&json!("0x10")), Some(16.0));
    assert_eq!(number_from(&json!("0XfF")), Some(255.0));
    assert_eq!(number_from(&json!("0o17")), Some(15.0));
    assert_eq!(number_from(&json!("0b101")), Some(5.0));
    assert_eq!(number_from(&json!("0x")), None);
    assert_eq!(number_from(&json!("0xZZ")), None);
    assert_eq!(number_from(&json!("-0x10")), None);
}

#[test]
fn number_from_drops_infinity() {
    assert_eq!(number_from(&json!("Infinity")), None);
    assert_eq!(number_from(&json!("-Infinity")), None);
    let row: TopItem = decode(&json!({"times_added": "Infinity"})).unwrap();
    assert_eq!(row.times_added, 0.0);
}

#[test]
fn number_from_rejects_non_numbers() {
    assert_eq!(number_from(&json!("abc")), None);
    assert_eq!(number_from(&json!(null)), None);
    assert_eq!(number_from(&json!([1])), None);
    assert_eq!(number_from(&json!({"v": 1})), None);
    assert_eq!(number_from(&json!("NaN")), None);
    assert_eq!(number_from(&json!("inf")), None);
}

#[test]
fn date_from_accepts_common_formats() {
    let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1);
    assert_eq!(date_from(&json!("2024-01-01")), jan1);
    assert_eq!(date_from(&json!("2024-01-01T13:45:00Z")), jan1);
    assert_eq!(date_from(&json!("2024-01-01T13:45:00.123")), jan1);
    assert_eq!(date_from(&json!("2024-01-01 08:00:00")), jan1);
    assert_eq!(date_from(&json!("2024-01-01T23:30:00-03:00")), jan1);
}

#[test]
fn date_from_returns_none_for_invalid_input() {
    assert_eq!(date_from(&json!("2024-13-45")), None);
    assert_eq!(date_from(&json!("yesterday")), None);
    assert_eq!(date_from(&json!(null)), None);
    assert_eq!(date_from(&json!(true)), None);
    assert_eq!(date_from(&json!(i64::MAX)), None);
}

#[test]
fn date_from_accepts_slash_separated_dates() {
    assert_eq!(date_from(&json!("2024/01/01")), NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(date_from(&json!("2023/12/31")), NaiveDate::from_ymd_opt(2023, 12, 31));
}

#[test]
fn date_from_reads_numbers_as_epoch_millis() {
    assert_eq!(date_from(&json!(1704067200000i64)), NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(date_from(&json!(1704153599999i64)), NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(date_from(&json!(0)), NaiveDate::from_ymd_opt(1970, 1, 1));
    assert_eq!(date_from(&json!(1704067200000.5)), NaiveDate::from_ymd_opt(2024, 1, 1));
}

#[test]
fn epoch_millis_day_decodes_into_record() {
    let row: CashFlowByDay = decode(&json!({"day": 1704067200000i64, "total_sales": 10})).unwrap();
    assert_eq!(row.day, NaiveDate::from_ymd_opt(2024, 1, 1));
}

// ---------------------------------------------------------------------------
// Lenient records
// ---------------------------------------------------------------------------

#[test]
fn cash_flow_by_day_parses_numeric_strings() {
    let row: CashFlowByDay = decode(&json!({"day": "2024-01-01", "total_sales": "100.5"})).unwrap();
    assert_eq!(row.day, NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(row.total_sales, 100.5);
    assert_eq!(row.total_value_paid, 0.0);
    assert_eq!(row.average_ticket, 0.0);
}

#[test]
fn cash_flow_breakdown_does_not_read_total_sales() {
    let raw = json!({"day": "2024-01-01", "total_sales": "100.5"});
    let row: CashFlowBreakdownByDay = decode(&raw).unwrap();
    assert_eq!(row.day, NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(row.total_sales_amount, 0.0);
}

#[test]
fn cash_flow_breakdown_reads_its_own_keys() {
    let row: CashFlowBreakdownByDay = decode(&json!({
        "day": "2024-02-10",
        "total_sales_amount": "350.00",
        "total_value_paid": 340,
        "total_discount": "10",
        "total_increase": 0,
        "total_delivery_fee": "12.5",
        "total_service_tax_fee": "3.5",
        "average_ticket": "29.17"
    }))
    .unwrap();
    assert_eq!(row.total_sales_amount, 350.0);
    assert_eq!(row.total_value_paid, 340.0);
    assert_eq!(row.total_discount, 10.0);
    assert_eq!(row.total_delivery_fee, 12.5);
    assert_eq!(row.total_service_tax_fee, 3.5);
    assert_eq!(row.average_ticket, 29.17);
}

#[test]
fn invalid_day_is_none_not_an_error() {
    let row: CashFlowByDay = decode(&json!({"day": "garbage", "total_sales": 1})).unwrap();
    assert_eq!(row.day, None);
    let row: CashFlowByDay = decode(&json!({})).unwrap();
    assert_eq!(row.day, None);
}

#[test]
fn malformed_numbers_become_zero() {
    for bad in [json!(null), json!("abc"), json!([]), json!({}), json!("1,5")] {
        let row: TopItem = decode(&json!({"item": "Pastel", "times_added": bad.clone(), "revenue_generated": bad.clone()})).unwrap();
        assert_eq!(row.times_added, 0.0, "{bad}");
        assert_eq!(row.revenue_generated, 0.0, "{bad}");
    }
}

#[test]
fn missing_fields_become_zero_and_none() {
    let row: RegionPerformance = decode(&json!({})).unwrap();
    assert_eq!(row.neighborhood, None);
    assert_eq!(row.city, None);
    assert_eq!(row.deliveries, 0.0);
    assert_eq!(row.avg_delivery_minutes, 0.0);
    assert_eq!(row.p90_delivery_minutes, 0.0);

    let row: DeliveryLocation = decode(&json!({"lat": "-23.55"})).unwrap();
    assert_eq!(row.lat, -23.55);
    assert_eq!(row.lng, 0.0);

    let row: SalesByChannelDescription = decode(&json!({"description": "iFood"})).unwrap();
    assert_eq!(row.description.as_deref(), Some("iFood"));
    assert_eq!(row.total_sales, 0.0);
}

#[test]
fn region_performance_reads_durations() {
    let row: RegionPerformance = decode(&json!({
        "neighborhood": "Centro",
        "city": "Curitiba",
        "deliveries": "128",
        "avg_delivery_minutes": "31.4",
        "p90_delivery_minutes": 52
    }))
    .unwrap();
    assert_eq!(row.neighborhood.as_deref(), Some("Centro"));
    assert_eq!(row.deliveries, 128.0);
    assert_eq!(row.avg_delivery_minutes, 31.4);
    assert_eq!(row.p90_delivery_minutes, 52.0);
}

#[test]
fn non_string_labels_keep_their_text() {
    let row: TopItem = decode(&json!({"item": 1001})).unwrap();
    assert_eq!(row.item.as_deref(), Some("1001"));
    let row: TopItem = decode(&json!({"item": null})).unwrap();
    assert_eq!(row.item, None);
}

// ---------------------------------------------------------------------------
// Strict records
// ---------------------------------------------------------------------------

#[test]
fn strict_records_decode_valid_rows() {
    let row: PaymentsByType = decode(&json!({"tipo_pagamento": "PIX", "valor_total": "1520.75"})).unwrap();
    assert_eq!(row.tipo_pagamento.as_deref(), Some("PIX"));
    assert_eq!(row.valor_total, 1520.75);

    let row: CustomerRetention = decode(&json!({"status": "recorrente", "quantidade": 12})).unwrap();
    assert_eq!(row.status.as_deref(), Some("recorrente"));
    assert_eq!(row.quantidade, 12.0);
}

#[test]
fn strict_records_reject_malformed_numbers() {
    let err = decode::<PaymentsByType>(&json!({"tipo_pagamento": "PIX", "valor_total": "abc"})).unwrap_err();
    assert!(matches!(err, DashboardError::Json(_)));

    let err = decode::<CustomerRetention>(&json!({"status": "novo", "quantidade": null})).unwrap_err();
    assert!(matches!(err, DashboardError::Json(_)));
}

#[test]
fn strict_records_reject_missing_numbers() {
    let err = decode::<CustomerRetention>(&json!({"status": "novo"})).unwrap_err();
    assert!(err.to_string().contains("quantidade"));
}

#[test]
fn strict_records_allow_missing_labels() {
    let row: CustomerRetention = decode(&json!({"quantidade": "4"})).unwrap();
    assert_eq!(row.status, None);
    assert_eq!(row.quantidade, 4.0);
}

// ---------------------------------------------------------------------------
// decode / decode_rows
// ---------------------------------------------------------------------------

#[test]
fn non_object_rows_are_rejected() {
    assert!(decode::<DeliveryLocation>(&json!([1.0, 2.0])).is_err());
    assert!(decode::<DeliveryLocation>(&json!(null)).is_err());
    assert!(decode::<DeliveryLocation>(&json!("x")).is_err());
}

#[test]
fn decode_rows_stops_at_first_failure() {
    let rows = vec![
        json!({"tipo_pagamento": "Dinheiro", "valor_total": 10}),
        json!({"tipo_pagamento": "Cartão", "valor_total": "??"}),
    ];
    assert!(decode_rows::<PaymentsByType>(&rows).is_err());
    assert_eq!(decode_rows::<PaymentsByType>(&rows[..1]).unwrap().len(), 1);
}

#[test]
fn decoded_records_serialize_with_wire_keys() {
    let items: Vec<TopItem> = decode_rows(&[json!({"item": "Coxinha", "times_added": "3", "revenue_generated": "21"})]).unwrap();
    let rows = to_rows(&items).unwrap();
    assert_eq!(rows[0], json!({"item": "Coxinha", "times_added": 3.0, "revenue_generated": 21.0}));

    let days: Vec<CashFlowByDay> = decode_rows(&[json!({"day": "2024-03-05"})]).unwrap();
    let rows = to_rows(&days).unwrap();
    assert_eq!(rows[0]["day"], "2024-03-05");
}
