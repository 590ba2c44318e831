use crate::enums::{
    ConnectionStatus, DeviceEventType, DeviceStatus, DeviceStatusDetailCode, DeviceUsageType,
    Feature,
};
use crate::Timestamp;

use super::{Filter, Sort, Tag};

shape! {
    /// A device with its attributes.
    Device {
        "DeviceArn" device_arn: text String,
        "DeviceSerialNumber" device_serial_number: text String,
        "DeviceType" device_type: text String,
        "DeviceName" device_name: text String,
        "SoftwareVersion" software_version: text String,
        "MacAddress" mac_address: text String,
        /// Room the device belongs to, if any.
        "RoomArn" room_arn: text String,
        "DeviceStatus" device_status: token DeviceStatus,
        "DeviceStatusInfo" device_status_info: shape DeviceStatusInfo,
        "NetworkProfileInfo" network_profile_info: shape DeviceNetworkProfileInfo,
    }
}

shape! {
    /// Device as returned by a search.
    DeviceData {
        "DeviceArn" device_arn: text String,
        "DeviceSerialNumber" device_serial_number: text String,
        "DeviceType" device_type: text String,
        "DeviceName" device_name: text String,
        "SoftwareVersion" software_version: text String,
        "MacAddress" mac_address: text String,
        "DeviceStatus" device_status: token DeviceStatus,
        "NetworkProfileArn" network_profile_arn: text String,
        "NetworkProfileName" network_profile_name: text String,
        "RoomArn" room_arn: text String,
        "RoomName" room_name: text String,
        "DeviceStatusInfo" device_status_info: shape DeviceStatusInfo,
        "CreatedTime" created_time: copy Timestamp,
    }
}

shape! {
    /// Event reported by a device.
    DeviceEvent {
        "Type" event_type: token DeviceEventType,
        "Value" value: text String,
        "Timestamp" timestamp: copy Timestamp,
    }
}

shape! {
    /// Network profile and certificate in use by a device.
    DeviceNetworkProfileInfo {
        "NetworkProfileArn" network_profile_arn: text String,
        "CertificateArn" certificate_arn: text String,
        "CertificateExpirationTime" certificate_expiration_time: copy Timestamp,
    }
}

shape! {
    /// A single status code, scoped to the feature it concerns.
    DeviceStatusDetail {
        "Feature" feature: token Feature,
        "Code" code: token DeviceStatusDetailCode,
    }
}

shape! {
    DeviceStatusInfo {
        "DeviceStatusDetails" device_status_details: list DeviceStatusDetail,
        "ConnectionStatus" connection_status: token ConnectionStatus,
        "ConnectionStatusUpdatedTime" connection_status_updated_time: copy Timestamp,
    }
}

shape! {
    AssociateDeviceWithNetworkProfileRequest {
        "DeviceArn" device_arn: text String,
        "NetworkProfileArn" network_profile_arn: text String,
    }
}

shape! {
    AssociateDeviceWithNetworkProfileResult {}
}

shape! {
    /// Associates a device with a room; a device already in another room is
    /// moved.
    AssociateDeviceWithRoomRequest {
        "DeviceArn" device_arn: text String,
        "RoomArn" room_arn: text String,
    }
}

shape! {
    AssociateDeviceWithRoomResult {}
}

shape! {
    DeleteDeviceRequest {
        "DeviceArn" device_arn: text String,
    }
}

shape! {
    DeleteDeviceResult {}
}

shape! {
    DeleteDeviceUsageDataRequest {
        "DeviceArn" device_arn: text String,
        "DeviceUsageType" device_usage_type: token DeviceUsageType,
    }
}

shape! {
    DeleteDeviceUsageDataResult {}
}

shape! {
    DisassociateDeviceFromRoomRequest {
        "DeviceArn" device_arn: text String,
    }
}

shape! {
    DisassociateDeviceFromRoomResult {}
}

shape! {
    GetDeviceRequest {
        "DeviceArn" device_arn: text String,
    }
}

shape! {
    GetDeviceResult {
        "Device" device: shape Device,
    }
}

shape! {
    /// Lists the events of a device, most recent first.
    ListDeviceEventsRequest {
        "DeviceArn" device_arn: text String,
        /// Restricts the listing to one event type.
        "EventType" event_type: token DeviceEventType,
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
    }
}

shape! {
    ListDeviceEventsResult {
        "DeviceEvents" device_events: list DeviceEvent,
        "NextToken" next_token: text String,
    }
}

shape! {
    /// Registers an Alexa-enabled device built by an AVS device maker.
    RegisterAVSDeviceRequest {
        "ClientId" client_id: text String,
        "UserCode" user_code: text String,
        "ProductId" product_id: text String,
        "DeviceSerialNumber" device_serial_number: text String,
        "AmazonId" amazon_id: text String,
        "RoomArn" room_arn: text String,
        "Tags" tags: list Tag,
    }
}

shape! {
    RegisterAVSDeviceResult {
        "DeviceArn" device_arn: text String,
    }
}

shape! {
    SearchDevicesRequest {
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
        "Filters" filters: list Filter,
        "SortCriteria" sort_criteria: list Sort,
    }
}

shape! {
    SearchDevicesResult {
        "Devices" devices: list DeviceData,
        "NextToken" next_token: text String,
        "TotalCount" total_count: copy i32,
    }
}

shape! {
    /// Resets a device and its account to the known default settings.
    StartDeviceSyncRequest {
        "RoomArn" room_arn: text String,
        "DeviceArn" device_arn: text String,
        "Features" features: list crate::Token<Feature>,
    }
}

shape! {
    StartDeviceSyncResult {}
}

shape! {
    UpdateDeviceRequest {
        "DeviceArn" device_arn: text String,
        "DeviceName" device_name: text String,
    }
}

shape! {
    UpdateDeviceResult {}
}
