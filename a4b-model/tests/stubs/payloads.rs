#![allow(dead_code)]
// Each test binary only uses some of these

pub const GET_DEVICE_RESULT: &str = r#"
{
    "Device": {
        "DeviceArn": "arn:aws:a4b:us-east-1:123456789012:device/lobby",
        "DeviceName": "Lobby Echo",
        "DeviceStatus": "READY",
        "DeviceStatusInfo": {
            "DeviceStatusDetails": [
                { "Feature": "NETWORK_PROFILE", "Code": "DHCP_FAILURE" }
            ],
            "ConnectionStatus": "ONLINE",
            "ConnectionStatusUpdatedTime": 1700000000.5
        }
    }
}
"#;

pub const LIST_SCHEDULES_RESULT: &str = r#"
{
    "BusinessReportSchedules": [
        {
            "ScheduleArn": "arn:aws:a4b:us-east-1:123456789012:schedule/weekly",
            "Format": "CSV_ZIP",
            "ContentRange": { "Interval": "ONE_WEEK" },
            "LastBusinessReport": {
                "Status": "FAILED",
                "FailureCode": "NO_SUCH_BUCKET"
            }
        }
    ],
    "NextToken": "page-2"
}
"#;

pub const FUTURE_PROVIDER: &str = r#"
{
    "Arn": "arn:aws:a4b:us-east-1:123456789012:conference-provider/x",
    "Name": "Hologram",
    "Type": "HOLOGRAM_MEET",
    "MeetingSetting": { "RequirePin": "OPTIONAL" }
}
"#;

pub const PHONE_NUMBER: &str = r#"{"Number":"+1-555-0100","Type":"WORK"}"#;
