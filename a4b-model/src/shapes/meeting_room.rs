//! Meeting room settings attached to a room profile.
//!
//! The service keeps separate shapes for the read, create and update paths
//! even where their members are identical.

use crate::enums::EndOfMeetingReminderType;

shape! {
    /// Reminders played before a meeting ends.
    EndOfMeetingReminder {
        /// Minutes before the end of the meeting at which reminders play.
        "ReminderAtMinutes" reminder_at_minutes: list i32,
        "ReminderType" reminder_type: token EndOfMeetingReminderType,
        "Enabled" enabled: copy bool,
    }
}

shape! {
    /// Booking of an unreserved room through Alexa.
    InstantBooking {
        "DurationInMinutes" duration_in_minutes: copy i32,
        "Enabled" enabled: copy bool,
    }
}

shape! {
    /// Releases a room that nobody checked into.
    RequireCheckIn {
        "ReleaseAfterMinutes" release_after_minutes: copy i32,
        "Enabled" enabled: copy bool,
    }
}

shape! {
    MeetingRoomConfiguration {
        "RoomUtilizationMetricsEnabled" room_utilization_metrics_enabled: copy bool,
        "EndOfMeetingReminder" end_of_meeting_reminder: shape EndOfMeetingReminder,
        "InstantBooking" instant_booking: shape InstantBooking,
        "RequireCheckIn" require_check_in: shape RequireCheckIn,
    }
}

shape! {
    CreateEndOfMeetingReminder {
        "ReminderAtMinutes" reminder_at_minutes: list i32,
        "ReminderType" reminder_type: token EndOfMeetingReminderType,
        "Enabled" enabled: copy bool,
    }
}

shape! {
    CreateInstantBooking {
        "DurationInMinutes" duration_in_minutes: copy i32,
        "Enabled" enabled: copy bool,
    }
}

shape! {
    CreateRequireCheckIn {
        "ReleaseAfterMinutes" release_after_minutes: copy i32,
        "Enabled" enabled: copy bool,
    }
}

shape! {
    CreateMeetingRoomConfiguration {
        "RoomUtilizationMetricsEnabled" room_utilization_metrics_enabled: copy bool,
        "EndOfMeetingReminder" end_of_meeting_reminder: shape CreateEndOfMeetingReminder,
        "InstantBooking" instant_booking: shape CreateInstantBooking,
        "RequireCheckIn" require_check_in: shape CreateRequireCheckIn,
    }
}

shape! {
    UpdateEndOfMeetingReminder {
        "ReminderAtMinutes" reminder_at_minutes: list i32,
        "ReminderType" reminder_type: token EndOfMeetingReminderType,
        "Enabled" enabled: copy bool,
    }
}

shape! {
    UpdateInstantBooking {
        "DurationInMinutes" duration_in_minutes: copy i32,
        "Enabled" enabled: copy bool,
    }
}

shape! {
    UpdateRequireCheckIn {
        "ReleaseAfterMinutes" release_after_minutes: copy i32,
        "Enabled" enabled: copy bool,
    }
}

shape! {
    UpdateMeetingRoomConfiguration {
        "RoomUtilizationMetricsEnabled" room_utilization_metrics_enabled: copy bool,
        "EndOfMeetingReminder" end_of_meeting_reminder: shape UpdateEndOfMeetingReminder,
        "InstantBooking" instant_booking: shape UpdateInstantBooking,
        "RequireCheckIn" require_check_in: shape UpdateRequireCheckIn,
    }
}
