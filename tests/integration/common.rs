use booking_client::prelude::*;
use mockito::ServerGuard;
use serde_json::{Value, json};

/// Config pointing at the mock server
pub fn mock_config(server: &ServerGuard) -> Arc<Config> {
    setup_logger();
    Arc::new(Config::with_base_url(&server.url()).unwrap())
}

/// Client for `{server}/booking` with a private token cache
pub fn mock_client(server: &ServerGuard, store: Arc<MemoryTokenStore>) -> ServiceClient {
    ServiceClient::new(mock_config(server), "booking")
        .unwrap()
        .with_token_store(store)
}

/// Booking service with a private token cache
pub fn booking_service(server: &ServerGuard) -> BookingServiceImpl {
    BookingServiceImpl::from_client(mock_client(server, Arc::new(MemoryTokenStore::new())))
}

pub fn sample_booking() -> BookingModel {
    BookingModel::new()
        .with_firstname("Jim")
        .with_lastname("Brown")
        .with_totalprice(111)
        .with_depositpaid(true)
        .with_bookingdates("2018-01-01", "2019-01-01")
        .with_additionalneeds("Breakfast")
}

pub fn sample_details_json() -> Value {
    json!({
        "firstname": "Jim",
        "lastname": "Brown",
        "totalprice": 111,
        "depositpaid": true,
        "bookingdates": {"checkin": "2018-01-01", "checkout": "2019-01-01"},
        "additionalneeds": "Breakfast"
    })
}
