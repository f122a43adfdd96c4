#![cfg(test)]
use serde_json::json;
use vinscope_common::config::Config;
use vinscope_common::decoder::VinDecoder;
use vinscope_common::display::DisplayState;
use vinscope_common::vin::Vin;
use vinscope_core::lookup::{LookupController, LookupService};
use vinscope_core::nhtsa::NhtsaClient;

use crate::support::responder::{self, Responder};

const VIN: &str = "1HGCV1F34LA000001";
const TRANSPORT_PREFIX: &str = "Failed to decode VIN. Network or server error: ";

fn controller(cfg: &Config) -> LookupController {
    let client: NhtsaClient = NhtsaClient::new(cfg).unwrap();
    LookupController::new(LookupService::new(Box::new(client)))
}

fn vpic(results: serde_json::Value) -> serde_json::Value {
    json!({
        "Count": 1,
        "Message": "Results returned successfully. NOTE: Any missing decoded values should be interpreted as NHTSA does not have data on the specific variable.",
        "SearchCriteria": format!("VIN:{VIN}"),
        "Results": results
    })
}

fn honda() -> serde_json::Value {
    vpic(json!([{
        "ErrorCode": "0",
        "ErrorText": "0 - VIN decoded clean. Check Digit (9th position) is correct",
        "Make": "HONDA",
        "Model": "Civic",
        "Body Class": "Sedan",
        "Vehicle Type": "Passenger Car",
        "Plant Country": "UNITED STATES",
        "Model Year": "2020",
        "Trim": "",
        "Series": null
    }]))
}

#[tokio::test]
async fn decodes_a_clean_vin() {
    let server: Responder = Responder::json(honda()).await.unwrap();
    let mut controller: LookupController = controller(&server.config());

    let state: &DisplayState = controller.click(" 1hgcv1f34la000001 ").await;
    let summary = state.summary().expect("results should be shown");

    assert_eq!(summary.description, "HONDA Civic (Sedan, Passenger Car)");
    assert_eq!(summary.manufacturer, "HONDA");
    assert_eq!(summary.country, "UNITED STATES");
    assert_eq!(summary.model_year, "2020");
    assert!(!state.error_visible());

    assert_eq!(
        server.requests(),
        vec![format!("GET /api/vehicles/DecodeVinValues/{VIN}?format=json HTTP/1.1")]
    );
}

#[tokio::test]
async fn invalid_length_never_reaches_the_network() {
    let server: Responder = Responder::json(honda()).await.unwrap();
    let mut controller: LookupController = controller(&server.config());

    for input in ["", "   ", "1HGCV1F34LA00000", "1HGCV1F34LA0000012"] {
        let state: &DisplayState = controller.click(input).await;
        assert_eq!(state.error_message(), Some("Please enter a valid 17-character VIN."));
        assert!(!state.results_visible());
    }

    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn api_error_code_overrides_results() {
    let body = vpic(json!([{
        "ErrorCode": "6",
        "ErrorText": "Incomplete VIN",
        "Make": "HONDA",
        "Model": "Civic",
        "Model Year": "2020"
    }]));
    let server: Responder = Responder::json(body).await.unwrap();
    let mut controller: LookupController = controller(&server.config());

    let state: &DisplayState = controller.click(VIN).await;
    let message: &str = state.error_message().expect("error should be shown");

    assert!(message.contains("6"), "{message}");
    assert!(message.contains("Incomplete VIN"), "{message}");
    assert!(!state.results_visible());
}

#[tokio::test]
async fn empty_results_show_the_api_message() {
    let body = json!({ "Count": 0, "Message": "0 Results", "Results": [] });
    let server: Responder = Responder::json(body).await.unwrap();
    let mut controller: LookupController = controller(&server.config());

    assert_eq!(controller.click(VIN).await.error_message(), Some("0 Results"));
}

#[tokio::test]
async fn null_results_show_the_api_message() {
    let body = json!({ "Count": 0, "Message": "0 Results", "Results": null });
    let server: Responder = Responder::json(body).await.unwrap();
    let mut controller: LookupController = controller(&server.config());

    assert_eq!(controller.click(VIN).await.error_message(), Some("0 Results"));
}

#[tokio::test]
async fn missing_results_fall_back_to_fixed_message() {
    let server: Responder = Responder::json(json!({ "Count": 0 })).await.unwrap();
    let mut controller: LookupController = controller(&server.config());

    assert_eq!(
        controller.click(VIN).await.error_message(),
        Some("VIN not found or invalid response structure from API.")
    );
}

#[tokio::test]
async fn unknown_make_and_model_describe_as_not_available() {
    let body = vpic(json!([{ "ErrorCode": "0", "Make": "", "Model": "", "Body Class": "", "Vehicle Type": "" }]));
    let server: Responder = Responder::json(body).await.unwrap();
    let mut controller: LookupController = controller(&server.config());

    let state: &DisplayState = controller.click(VIN).await;
    let summary = state.summary().expect("results should be shown");

    assert_eq!(summary.description, "N/A");
    assert_eq!(summary.manufacturer, "N/A");
    assert_eq!(summary.country, "N/A");
    assert_eq!(summary.model_year, "N/A");
}

#[tokio::test]
async fn http_status_failure() {
    let server: Responder = Responder::start(404, "Not Found".to_string()).await.unwrap();
    let mut controller: LookupController = controller(&server.config());

    assert_eq!(
        controller.click(VIN).await.error_message(),
        Some("Failed to decode VIN. Network or server error: HTTP error! status: 404")
    );
}

#[tokio::test]
async fn unreadable_body_is_a_transport_failure() {
    let server: Responder = Responder::start(200, "<html>maintenance</html>".to_string()).await.unwrap();
    let client: NhtsaClient = NhtsaClient::new(&server.config()).unwrap();

    let err = client.decode(&Vin::parse(VIN).unwrap()).await.unwrap_err();

    assert!(err.to_string().starts_with(TRANSPORT_PREFIX), "{err}");
}

#[tokio::test]
async fn connection_refused_is_a_transport_failure() {
    let cfg: Config = responder::dead_endpoint().await.unwrap();
    let mut controller: LookupController = controller(&cfg);

    let state: &DisplayState = controller.click(VIN).await;
    let message: &str = state.error_message().expect("error should be shown");

    assert!(message.starts_with(TRANSPORT_PREFIX), "{message}");
}

#[tokio::test]
async fn regions_stay_mutually_exclusive_across_lookups() {
    let server: Responder = Responder::json(honda()).await.unwrap();
    let mut controller: LookupController = controller(&server.config());

    for input in [VIN, "nope", VIN, "", VIN] {
        let state: &DisplayState = controller.click(input).await;
        assert_ne!(state.results_visible(), state.error_visible(), "{state:?}");
    }

    assert_eq!(server.requests().len(), 3);
}
