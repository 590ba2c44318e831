use anyhow::Result;
use serde_json::{json, Value};

use a4b_model::{
    BusinessReportFailureCode, BusinessReportFormat, BusinessReportInterval, ConferenceProvider,
    ConnectionStatus, DeviceStatus, DeviceStatusDetailCode, GetDeviceResult,
    ListBusinessReportSchedulesResult, PhoneNumber, PhoneNumberType, RequirePin, Timestamp,
};

mod stubs;

use stubs::payloads;

#[test]
fn parse_get_device_result() -> Result<()> {
    let result: GetDeviceResult = serde_json::from_str(payloads::GET_DEVICE_RESULT)?;
    let device = result.device().unwrap();
    assert_eq!(device.device_name(), Some("Lobby Echo"));
    assert_eq!(device.device_status().unwrap(), &DeviceStatus::Ready);
    assert_eq!(device.software_version(), None);

    let info = device.device_status_info().unwrap();
    assert_eq!(info.connection_status().unwrap(), &ConnectionStatus::Online);
    assert_eq!(
        info.connection_status_updated_time(),
        Timestamp::from_epoch_millis(1_700_000_000_500)
    );
    let detail = &info.device_status_details().unwrap()[0];
    assert_eq!(detail.code().unwrap(), &DeviceStatusDetailCode::DhcpFailure);
    Ok(())
}

#[test]
fn parse_list_schedules_result() -> Result<()> {
    let result: ListBusinessReportSchedulesResult =
        serde_json::from_str(payloads::LIST_SCHEDULES_RESULT)?;
    assert_eq!(result.next_token(), Some("page-2"));

    let schedule = &result.business_report_schedules().unwrap()[0];
    assert_eq!(schedule.format().unwrap(), &BusinessReportFormat::CsvZip);
    assert_eq!(
        schedule.content_range().unwrap().interval().unwrap(),
        &BusinessReportInterval::OneWeek
    );
    let report = schedule.last_business_report().unwrap();
    assert_eq!(
        report.failure_code().unwrap(),
        &BusinessReportFailureCode::NoSuchBucket
    );
    Ok(())
}

#[test]
fn unknown_tokens_survive_a_round_trip() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let provider: ConferenceProvider = serde_json::from_str(payloads::FUTURE_PROVIDER)?;
    assert_eq!(provider.provider_type().unwrap().as_str(), "HOLOGRAM_MEET");
    assert_eq!(
        provider.meeting_setting().unwrap().require_pin().unwrap(),
        &RequirePin::Optional
    );

    let value = serde_json::to_value(&provider)?;
    assert_eq!(value["Type"], "HOLOGRAM_MEET");
    assert_eq!(serde_json::from_value::<ConferenceProvider>(value)?, provider);
    Ok(())
}

#[test]
fn serializes_wire_names_and_omits_absent_members() -> Result<()> {
    let number = PhoneNumber::builder()
        .number("+1-555-0100")
        .number_type(PhoneNumberType::Work)
        .build();
    assert_eq!(
        serde_json::to_value(&number)?,
        json!({"Number": "+1-555-0100", "Type": "WORK"})
    );
    assert_eq!(serde_json::to_value(PhoneNumber::default())?, json!({}));

    let parsed: PhoneNumber = serde_json::from_str(payloads::PHONE_NUMBER)?;
    assert_eq!(parsed, number);
    Ok(())
}

#[test]
fn timestamps_are_epoch_seconds() -> Result<()> {
    let result: GetDeviceResult = serde_json::from_str(payloads::GET_DEVICE_RESULT)?;
    let value: Value = serde_json::to_value(&result)?;
    assert_eq!(
        value["Device"]["DeviceStatusInfo"]["ConnectionStatusUpdatedTime"],
        json!(1700000000.5)
    );
    Ok(())
}
