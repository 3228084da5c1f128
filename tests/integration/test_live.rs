//! End-to-end scenarios against a running booking API
//!
//! Run with `BASE_URL`, `USERNAME` and `PASSWORD` set:
//! `cargo test --test integration_tests -- --ignored`

use booking_client::prelude::*;

fn live_service() -> BookingServiceImpl {
    setup_logger();
    let config = Arc::new(Config::from_env().expect("BASE_URL must be set"));
    BookingServiceImpl::new(config).expect("Failed to create booking service")
}

#[ignore]
#[tokio::test]
async fn live_booking_lifecycle() {
    let service = live_service();
    service
        .authenticate(AuthMethod::UsernamePassword, None)
        .await
        .expect("Authentication failed");

    let firstname = unique_name("Damian");
    let booking = BookingModel::new()
        .with_firstname(&firstname)
        .with_lastname("Brown")
        .with_totalprice(111)
        .with_depositpaid(true)
        .with_bookingdates("2018-01-01", "2019-01-01")
        .with_additionalneeds("Breakfast");

    let created = service.add_booking(&booking, None).await.unwrap();
    assert_eq!(created.status(), 200);
    assert!(created.response_time() < 2000);
    let booking_id = created.model().unwrap().bookingid;

    let filter = BookingFilter::new().with_firstname(&firstname);
    let ids = service.get_booking_ids(Some(&filter), None).await.unwrap();
    assert!(
        ids.model()
            .unwrap()
            .contains(&BookingIdResponse { bookingid: booking_id })
    );

    let patched = service
        .partial_update_booking(booking_id, &BookingModel::new().with_lastname("Green"), None)
        .await
        .unwrap();
    assert_eq!(patched.status(), 200);
    assert_eq!(patched.model().unwrap().firstname, firstname);
    assert_eq!(patched.model().unwrap().lastname, "Green");

    let deleted = service.delete_booking(booking_id, None).await.unwrap();
    assert_eq!(deleted.status(), 201);

    let missing = service.get_booking(booking_id, None).await.unwrap();
    assert_eq!(missing.status(), 404);
}

#[ignore]
#[tokio::test]
async fn live_bad_credentials() {
    setup_logger();
    let config = Arc::new(Config::from_env().expect("BASE_URL must be set"));
    let auth = AuthServiceImpl::new(config).unwrap();
    let response = auth
        .sign_in(&CredentialsModel::new("nobody", &unique_name("wrong")))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.field("reason").and_then(|v| v.as_str()),
        Some("Bad credentials")
    );
}
