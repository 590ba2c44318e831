//! Smart home appliances discovered in a room.

shape! {
    SmartHomeAppliance {
        "FriendlyName" friendly_name: text String,
        "Description" description: text String,
        "ManufacturerName" manufacturer_name: text String,
    }
}

shape! {
    /// Forgets every appliance discovered in a room.
    ForgetSmartHomeAppliancesRequest {
        "RoomArn" room_arn: text String,
    }
}

shape! {
    ForgetSmartHomeAppliancesResult {}
}

shape! {
    ListSmartHomeAppliancesRequest {
        "RoomArn" room_arn: text String,
        "MaxResults" max_results: copy i32,
        "NextToken" next_token: text String,
    }
}

shape! {
    ListSmartHomeAppliancesResult {
        "SmartHomeAppliances" smart_home_appliances: list SmartHomeAppliance,
        "NextToken" next_token: text String,
    }
}

shape! {
    StartSmartHomeApplianceDiscoveryRequest {
        "RoomArn" room_arn: text String,
    }
}

shape! {
    StartSmartHomeApplianceDiscoveryResult {}
}
