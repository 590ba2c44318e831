//! Conference providers and how rooms dial into meetings.

use crate::enums::{CommsProtocol, ConferenceProviderType, RequirePin};

use super::Tag;

shape! {
    /// Default conference provider used for calls made from a room.
    ConferencePreference {
        "DefaultConferenceProviderArn" default_conference_provider_arn: text String,
    }
}

shape! {
    /// A conference provider with its dial-in details.
    ConferenceProvider {
        "Arn" arn: text String,
        "Name" name: text String,
        "Type" provider_type: token ConferenceProviderType,
        "IPDialIn" ip_dial_in: shape IPDialIn,
        "PSTNDialIn" pstn_dial_in: shape PSTNDialIn,
        "MeetingSetting" meeting_setting: shape MeetingSetting,
    }
}

shape! {
    /// IP endpoint and protocol for calling into a meeting.
    IPDialIn {
        "Endpoint" endpoint: text String,
        "CommsProtocol" comms_protocol: token CommsProtocol,
    }
}

shape! {
    /// Public switched telephone network details for calling into a meeting.
    PSTNDialIn {
        "CountryCode" country_code: text String,
        "PhoneNumber" phone_number: text String,
        /// Delay, in seconds, before the meeting ID is entered.
        "OneClickIdDelay" one_click_id_delay: text String,
        /// Delay, in seconds, before the meeting PIN is entered.
        "OneClickPinDelay" one_click_pin_delay: text String,
    }
}

shape! {
    MeetingSetting {
        "RequirePin" require_pin: token RequirePin,
    }
}

shape! {
    CreateConferenceProviderRequest {
        "ConferenceProviderName" conference_provider_name: text String,
        "ConferenceProviderType" conference_provider_type: token ConferenceProviderType,
        "IPDialIn" ip_dial_in: shape IPDialIn,
        "PSTNDialIn" pstn_dial_in: shape PSTNDialIn,
        "MeetingSetting" meeting_setting: shape MeetingSetting,
        "ClientRequestToken" client_request_token: text String,
        "Tags" tags: list Tag,
    }
}

shape! {
    CreateConferenceProviderResult {
        "ConferenceProviderArn" conference_provider_arn: text String,
    }
}

shape! {
    DeleteConferenceProviderRequest {
        "ConferenceProviderArn" conference_provider_arn: text String,
    }
}

shape! {
    DeleteConferenceProviderResult {}
}

shape! {
    GetConferencePreferenceRequest {}
}

shape! {
    GetConferencePreferenceResult {
        "Preference" preference: shape ConferencePreference,
    }
}

shape! {
    GetConferenceProviderRequest {
        "ConferenceProviderArn" conference_provider_arn: text String,
    }
}

shape! {
    GetConferenceProviderResult {
        "ConferenceProvider" conference_provider: shape ConferenceProvider,
    }
}

shape! {
    ListConferenceProvidersRequest {
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
    }
}

shape! {
    ListConferenceProvidersResult {
        "ConferenceProviders" conference_providers: list ConferenceProvider,
        "NextToken" next_token: text String,
    }
}

shape! {
    PutConferencePreferenceRequest {
        "ConferencePreference" conference_preference: shape ConferencePreference,
    }
}

shape! {
    PutConferencePreferenceResult {}
}

shape! {
    UpdateConferenceProviderRequest {
        "ConferenceProviderArn" conference_provider_arn: text String,
        "ConferenceProviderType" conference_provider_type: token ConferenceProviderType,
        "IPDialIn" ip_dial_in: shape IPDialIn,
        "PSTNDialIn" pstn_dial_in: shape PSTNDialIn,
        "MeetingSetting" meeting_setting: shape MeetingSetting,
    }
}

shape! {
    UpdateConferenceProviderResult {}
}
