//! Announcements broadcast to the devices of selected rooms.

use crate::enums::Locale;

use super::Filter;

shape! {
    /// Plain text spoken by the device.
    Text {
        "Locale" locale: token Locale,
        "Value" value: text String,
    }
}

shape! {
    Ssml {
        "Locale" locale: token Locale,
        "Value" value: text String,
    }
}

shape! {
    Audio {
        "Locale" locale: token Locale,
        /// Location of the audio file, an HTTPS URL.
        "Location" location: text String,
    }
}

shape! {
    /// Body of an announcement. Only one of the lists is expected to be set.
    Content {
        "TextList" text_list: list Text,
        "SsmlList" ssml_list: list Ssml,
        "AudioList" audio_list: list Audio,
    }
}

shape! {
    SendAnnouncementRequest {
        /// Rooms matching these filters receive the announcement.
        "RoomFilters" room_filters: list Filter,
        "Content" content: shape Content,
        "TimeToLiveInSeconds" time_to_live_in_seconds: copy i32,
        "ClientRequestToken" client_request_token: text String,
    }
}

shape! {
    SendAnnouncementResult {
        "AnnouncementArn" announcement_arn: text String,
    }
}
