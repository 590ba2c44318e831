//! Room profiles: the settings shared by every room that uses them.

use crate::enums::{DistanceUnit, TemperatureUnit, WakeWord};

use super::{
    CreateMeetingRoomConfiguration, Filter, MeetingRoomConfiguration, Sort, Tag,
    UpdateMeetingRoomConfiguration,
};

shape! {
    Profile {
        "ProfileArn" profile_arn: text String,
        "ProfileName" profile_name: text String,
        /// Whether this is the account's default profile.
        "IsDefault" is_default: copy bool,
        "Address" address: text String,
        "Timezone" timezone: text String,
        "DistanceUnit" distance_unit: token DistanceUnit,
        "TemperatureUnit" temperature_unit: token TemperatureUnit,
        "WakeWord" wake_word: token WakeWord,
        /// Locale such as `en-US`.
        "Locale" locale: text String,
        "SetupModeDisabled" setup_mode_disabled: copy bool,
        "MaxVolumeLimit" max_volume_limit: copy i32,
        "PSTNEnabled" pstn_enabled: copy bool,
        "DataRetentionOptIn" data_retention_opt_in: copy bool,
        "AddressBookArn" address_book_arn: text String,
        "MeetingRoomConfiguration" meeting_room_configuration: shape MeetingRoomConfiguration,
    }
}

shape! {
    /// Profile as returned by a search.
    ProfileData {
        "ProfileArn" profile_arn: text String,
        "ProfileName" profile_name: text String,
        "IsDefault" is_default: copy bool,
        "Address" address: text String,
        "Timezone" timezone: text String,
        "DistanceUnit" distance_unit: token DistanceUnit,
        "TemperatureUnit" temperature_unit: token TemperatureUnit,
        "WakeWord" wake_word: token WakeWord,
        "Locale" locale: text String,
    }
}

shape! {
    CreateProfileRequest {
        "ProfileName" profile_name: text String,
        "Timezone" timezone: text String,
        "Address" address: text String,
        "DistanceUnit" distance_unit: token DistanceUnit,
        "TemperatureUnit" temperature_unit: token TemperatureUnit,
        "WakeWord" wake_word: token WakeWord,
        "Locale" locale: text String,
        "ClientRequestToken" client_request_token: text String,
        "SetupModeDisabled" setup_mode_disabled: copy bool,
        "MaxVolumeLimit" max_volume_limit: copy i32,
        "PSTNEnabled" pstn_enabled: copy bool,
        "DataRetentionOptIn" data_retention_opt_in: copy bool,
        "MeetingRoomConfiguration" meeting_room_configuration: shape CreateMeetingRoomConfiguration,
        "Tags" tags: list Tag,
    }
}

shape! {
    CreateProfileResult {
        "ProfileArn" profile_arn: text String,
    }
}

shape! {
    DeleteProfileRequest {
        "ProfileArn" profile_arn: text String,
    }
}

shape! {
    DeleteProfileResult {}
}

shape! {
    GetProfileRequest {
        "ProfileArn" profile_arn: text String,
    }
}

shape! {
    GetProfileResult {
        "Profile" profile: shape Profile,
    }
}

shape! {
    SearchProfilesRequest {
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
        "Filters" filters: list Filter,
        "SortCriteria" sort_criteria: list Sort,
    }
}

shape! {
    SearchProfilesResult {
        "Profiles" profiles: list ProfileData,
        "NextToken" next_token: text String,
        "TotalCount" total_count: copy i32,
    }
}

shape! {
    UpdateProfileRequest {
        "ProfileArn" profile_arn: text String,
        "ProfileName" profile_name: text String,
        "IsDefault" is_default: copy bool,
        "Timezone" timezone: text String,
        "Address" address: text String,
        "DistanceUnit" distance_unit: token DistanceUnit,
        "TemperatureUnit" temperature_unit: token TemperatureUnit,
        "WakeWord" wake_word: token WakeWord,
        "Locale" locale: text String,
        "SetupModeDisabled" setup_mode_disabled: copy bool,
        "MaxVolumeLimit" max_volume_limit: copy i32,
        "PSTNEnabled" pstn_enabled: copy bool,
        "DataRetentionOptIn" data_retention_opt_in: copy bool,
        "MeetingRoomConfiguration" meeting_room_configuration: shape UpdateMeetingRoomConfiguration,
    }
}

shape! {
    UpdateProfileResult {}
}
