use booking_client::error::AppError;
use booking_client::model::envelope::{ResponseData, ResponseEnvelope};
use booking_client::model::http::{parse_typed, parse_untyped};
use booking_client::model::responses::BookingIdResponse;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::{Value, json};

#[test]
fn untyped_body_falls_back_to_text() {
    assert_eq!(parse_untyped("Created"), ResponseData::Text("Created".to_string()));
    assert_eq!(parse_untyped(""), ResponseData::Text(String::new()));
    assert_eq!(
        parse_untyped(r#"{"token":"abc"}"#),
        ResponseData::Json(json!({"token": "abc"}))
    );
}

#[test]
fn typed_sequence_is_validated_per_element() {
    let data = parse_typed::<Vec<BookingIdResponse>>(
        StatusCode::OK,
        r#"[{"bookingid": 1}, {"bookingid": 7}]"#,
    )
    .unwrap();
    assert_eq!(data.as_model().map(Vec::len), Some(2));

    let err = parse_typed::<Vec<BookingIdResponse>>(
        StatusCode::OK,
        r#"[{"bookingid": 1}, {"id": 7}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse(_)));
}

#[test]
fn typed_mismatch_on_error_status_keeps_json() {
    let data =
        parse_typed::<BookingIdResponse>(StatusCode::BAD_REQUEST, r#"{"error": "nope"}"#).unwrap();
    assert_eq!(data.as_json(), Some(&json!({"error": "nope"})));
}

#[test]
fn typed_non_json_is_text_for_any_status() {
    let data = parse_typed::<BookingIdResponse>(StatusCode::FORBIDDEN, "Forbidden").unwrap();
    assert_eq!(data.as_text(), Some("Forbidden"));
    let data = parse_typed::<BookingIdResponse>(StatusCode::CREATED, "Created").unwrap();
    assert_eq!(data.as_text(), Some("Created"));
}

#[test]
fn envelope_accessors() {
    let envelope: ResponseEnvelope<Value> = ResponseEnvelope::new(
        200,
        HeaderMap::new(),
        ResponseData::Json(json!({"bookingid": 3})),
        12,
    );
    assert!(envelope.is_success());
    assert_eq!(envelope.status(), 200);
    assert_eq!(envelope.response_time(), 12);
    assert_eq!(envelope.field("bookingid"), Some(&json!(3)));
    assert_eq!(envelope.header("content-type"), None);
}

#[test]
fn into_model_requires_a_model() {
    let envelope: ResponseEnvelope<BookingIdResponse> = ResponseEnvelope::new(
        404,
        HeaderMap::new(),
        ResponseData::Text("Not Found".to_string()),
        3,
    );
    assert!(!envelope.is_success());
    assert!(matches!(
        envelope.into_model(),
        Err(AppError::MalformedResponse(_))
    ));

    let envelope = ResponseEnvelope::new(
        200,
        HeaderMap::new(),
        ResponseData::Model(BookingIdResponse { bookingid: 5 }),
        3,
    );
    assert_eq!(envelope.into_model().unwrap().bookingid, 5);
}
