//! Name-indexed access to every shape and enumeration of the model.
//!
//! Used by tools that only know a type by the name the service publishes,
//! e.g. to render a captured JSON payload.

use std::collections::BTreeMap;

use log::trace;
use once_cell::sync::Lazy;

use crate::enums::*;
use crate::error::{CatalogError, LookupError};
use crate::exceptions::{ServiceError, ServiceErrorCode};
use crate::operation;
use crate::shapes::*;
use crate::{Shape, StringEnum};

/// Parses a wire payload into a shape and returns its rendering.
pub(crate) type Renderer = fn(&str) -> Result<String, CatalogError>;

pub(crate) fn render_json<S: Shape>(json: &str) -> Result<String, CatalogError> {
    let shape: S = serde_json::from_str(json)?;
    Ok(shape.to_string())
}

struct EnumEntry {
    tokens: fn() -> Vec<&'static str>,
    lookup: fn(&str) -> Result<&'static str, LookupError>,
}

fn tokens_of<E: StringEnum>() -> Vec<&'static str> {
    E::values().iter().map(StringEnum::as_str).collect()
}

fn lookup_in<E: StringEnum>(value: &str) -> Result<&'static str, LookupError> {
    E::lookup(value).map(|variant| variant.as_str())
}

macro_rules! register {
    (shapes $table:ident: $($shape:ty),+ $(,)?) => {
        $( $table.insert(<$shape as Shape>::NAME, render_json::<$shape> as Renderer); )+
    };
    (enums $table:ident: $($enum:ty),+ $(,)?) => {
        $(
            $table.insert(
                <$enum as StringEnum>::NAME,
                EnumEntry {
                    tokens: tokens_of::<$enum>,
                    lookup: lookup_in::<$enum>,
                },
            );
        )+
    };
}

static SHAPES: Lazy<BTreeMap<&'static str, Renderer>> = Lazy::new(|| {
    let mut table = BTreeMap::new();
    operation::register_shapes(&mut table);
    register!(shapes table:
        AddressBook, AddressBookData, Audio, BusinessReport,
        BusinessReportContentRange, BusinessReportRecurrence,
        BusinessReportS3Location, BusinessReportSchedule, Category,
        ConferencePreference, ConferenceProvider, Contact, ContactData,
        Content, CreateEndOfMeetingReminder, CreateInstantBooking,
        CreateMeetingRoomConfiguration, CreateRequireCheckIn, DeveloperInfo,
        Device, DeviceData, DeviceEvent, DeviceNetworkProfileInfo,
        DeviceStatusDetail, DeviceStatusInfo, EndOfMeetingReminder, Filter,
        Gateway, GatewayGroup, GatewayGroupSummary, GatewaySummary, IPDialIn,
        InstantBooking, MeetingRoomConfiguration, MeetingSetting,
        NetworkProfile, NetworkProfileData, PSTNDialIn, PhoneNumber, Profile,
        ProfileData, RequireCheckIn, Room, RoomData, RoomSkillParameter,
        SipAddress, SkillDetails, SkillGroup, SkillGroupData, SkillSummary,
        SkillsStoreSkill, SmartHomeAppliance, Sort, Ssml, Tag, Text,
        UpdateEndOfMeetingReminder, UpdateInstantBooking,
        UpdateMeetingRoomConfiguration, UpdateRequireCheckIn, UserData,
        ServiceError,
    );
    trace!("Shape catalog built with {} entries", table.len());
    table
});

static ENUMS: Lazy<BTreeMap<&'static str, EnumEntry>> = Lazy::new(|| {
    let mut table = BTreeMap::new();
    register!(enums table:
        BusinessReportFailureCode, BusinessReportFormat, BusinessReportInterval,
        BusinessReportStatus, CommsProtocol, ConferenceProviderType,
        ConnectionStatus, DeviceEventType, DeviceStatus, DeviceStatusDetailCode,
        DeviceUsageType, DistanceUnit, EnablementType, EnablementTypeFilter,
        EndOfMeetingReminderType, EnrollmentStatus, Feature, Locale,
        NetworkEapMethod, NetworkSecurityType, PhoneNumberType, RequirePin,
        SipType, SkillType, SkillTypeFilter, SortValue, TemperatureUnit,
        WakeWord, ServiceErrorCode,
    );
    trace!("Enumeration catalog built with {} entries", table.len());
    table
});

/// Every shape name, sorted.
pub fn shape_names() -> impl Iterator<Item = &'static str> {
    SHAPES.keys().copied()
}

/// Every enumeration name, sorted.
pub fn enum_names() -> impl Iterator<Item = &'static str> {
    ENUMS.keys().copied()
}

fn enum_entry(name: &str) -> Result<&'static EnumEntry, CatalogError> {
    ENUMS
        .get(name)
        .ok_or_else(|| CatalogError::UnknownEnum(name.to_owned()))
}

/// Canonical tokens of an enumeration, in declaration order.
pub fn enum_tokens(name: &str) -> Result<Vec<&'static str>, CatalogError> {
    Ok((enum_entry(name)?.tokens)())
}

/// Strict lookup of `token` in the named enumeration.
pub fn lookup_token(name: &str, token: &str) -> Result<&'static str, CatalogError> {
    Ok((enum_entry(name)?.lookup)(token)?)
}

/// Deserializes a wire JSON payload as the named shape and renders it.
pub fn render_shape(name: &str, json: &str) -> Result<String, CatalogError> {
    let render = SHAPES
        .get(name)
        .ok_or_else(|| CatalogError::UnknownShape(name.to_owned()))?;
    render(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_requests_results_and_values() {
        let names: Vec<_> = shape_names().collect();
        assert_eq!(names.len(), 2 * operation::OPERATION_NAMES.len() + 62);
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(names.contains(&"GetDeviceResult"));
        assert!(names.contains(&"PSTNDialIn"));
    }

    #[test]
    fn lists_every_enumeration() {
        assert_eq!(enum_names().count(), 29);
        assert_eq!(
            enum_tokens("SortValue").unwrap(),
            vec!["ASC", "DESC"]
        );
    }

    #[test]
    fn unknown_names_are_reported() {
        assert!(matches!(
            enum_tokens("Colour"),
            Err(CatalogError::UnknownEnum(name)) if name == "Colour"
        ));
        assert!(matches!(
            render_shape("Widget", "{}"),
            Err(CatalogError::UnknownShape(name)) if name == "Widget"
        ));
    }

    #[test]
    fn lookup_token_is_strict() {
        assert_eq!(lookup_token("Locale", "en-US").unwrap(), "en-US");
        assert!(matches!(
            lookup_token("Locale", "en-us"),
            Err(CatalogError::Lookup(LookupError::Unrecognized { .. }))
        ));
    }

    #[test]
    fn renders_payload_by_name() {
        let rendered = render_shape("Tag", r#"{"Key":"floor","Value":"3"}"#).unwrap();
        assert_eq!(rendered, "{Key: floor, Value: 3}");
        assert!(matches!(
            render_shape("Tag", "not json"),
            Err(CatalogError::ParseJson(_))
        ));
    }
}
