use a4b_model::catalog::{enum_names, enum_tokens, lookup_token, render_shape, shape_names};
use a4b_model::{CatalogError, LookupError, Operation, PhoneNumber, PhoneNumberType, OPERATION_NAMES};

mod stubs;

use stubs::payloads;

#[test]
fn every_token_round_trips() {
    for name in enum_names() {
        let tokens = enum_tokens(name).unwrap();
        assert!(!tokens.is_empty(), "{name} has no tokens");
        for token in tokens {
            assert_eq!(lookup_token(name, token).unwrap(), token);
        }
    }
}

#[test]
fn empty_and_unrecognized_tokens_fail() {
    for name in enum_names() {
        assert!(matches!(
            lookup_token(name, ""),
            Err(CatalogError::Lookup(LookupError::Empty { .. }))
        ));
        assert!(matches!(
            lookup_token(name, "not-a-real-value"),
            Err(CatalogError::Lookup(LookupError::Unrecognized { .. }))
        ));
    }
}

#[test]
fn every_operation_has_request_and_result() {
    let shapes: Vec<_> = shape_names().collect();
    for operation in OPERATION_NAMES {
        assert!(shapes.contains(&format!("{operation}Request").as_str()));
        assert!(shapes.contains(&format!("{operation}Result").as_str()));
    }
}

#[test]
fn rendering_matches_display_of_built_value() {
    let built = PhoneNumber::builder()
        .number("+1-555-0100")
        .number_type(PhoneNumberType::Work)
        .build();
    assert_eq!(
        render_shape("PhoneNumber", payloads::PHONE_NUMBER).unwrap(),
        built.to_string()
    );
}

#[test]
fn renders_nested_results() {
    let rendered = render_shape("GetDeviceResult", payloads::GET_DEVICE_RESULT).unwrap();
    assert!(rendered.starts_with("{Device: {DeviceArn: arn:aws:a4b:"));
    assert!(rendered.contains("DeviceStatusDetails: [{Feature: NETWORK_PROFILE, Code: DHCP_FAILURE}]"));
    assert!(rendered.contains("ConnectionStatusUpdatedTime: 2023-11-14T22:13:20.500Z"));
}

#[test]
fn target_names_the_service() {
    assert_eq!(
        a4b_model::ListSkillsRequest::target(),
        "AlexaForBusiness.ListSkills"
    );
}
