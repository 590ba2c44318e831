//! Binding of each request to its operation name and result type.

use std::collections::BTreeMap;

use crate::catalog::{render_json, Renderer};
use crate::shapes::*;
use crate::Shape;

/// Service name, also the prefix of every operation target.
pub const SERVICE_NAME: &str = "AlexaForBusiness";
/// Prefix of the service endpoint host.
pub const ENDPOINT_PREFIX: &str = "a4b";
pub const DEFAULT_ENDPOINT: &str = "a4b.us-east-1.amazonaws.com";

/// A request of one of the service operations.
///
/// An executor sends the serialized request with [`Operation::target`] as
/// the JSON protocol target and decodes the reply into [`Operation::Output`].
pub trait Operation: Shape {
    /// Operation name, e.g. `GetDevice`.
    const OPERATION: &'static str;

    type Output: Shape;

    fn target() -> String {
        format!("{SERVICE_NAME}.{}", Self::OPERATION)
    }
}

macro_rules! operations {
    ($($op:ident),+ $(,)?) => {
        ::paste::paste! {
            $(
                impl Operation for [<$op Request>] {
                    const OPERATION: &'static str = stringify!($op);
                    type Output = [<$op Result>];
                }
            )+

            /// Every operation of the service, in declaration order.
            pub const OPERATION_NAMES: &[&str] = &[$(stringify!($op)),+];

            pub(crate) fn register_shapes(table: &mut BTreeMap<&'static str, Renderer>) {
                $(
                    table.insert(<[<$op Request>] as Shape>::NAME, render_json::<[<$op Request>]>);
                    table.insert(<[<$op Result>] as Shape>::NAME, render_json::<[<$op Result>]>);
                )+
            }
        }
    };
}

operations! {
    ApproveSkill,
    AssociateContactWithAddressBook,
    AssociateDeviceWithNetworkProfile,
    AssociateDeviceWithRoom,
    AssociateSkillGroupWithRoom,
    AssociateSkillWithSkillGroup,
    AssociateSkillWithUsers,
    CreateAddressBook,
    CreateBusinessReportSchedule,
    CreateConferenceProvider,
    CreateContact,
    CreateGatewayGroup,
    CreateNetworkProfile,
    CreateProfile,
    CreateRoom,
    CreateSkillGroup,
    CreateUser,
    DeleteAddressBook,
    DeleteBusinessReportSchedule,
    DeleteConferenceProvider,
    DeleteContact,
    DeleteDevice,
    DeleteDeviceUsageData,
    DeleteGatewayGroup,
    DeleteNetworkProfile,
    DeleteProfile,
    DeleteRoom,
    DeleteRoomSkillParameter,
    DeleteSkillAuthorization,
    DeleteSkillGroup,
    DeleteUser,
    DisassociateContactFromAddressBook,
    DisassociateDeviceFromRoom,
    DisassociateSkillFromSkillGroup,
    DisassociateSkillFromUsers,
    DisassociateSkillGroupFromRoom,
    ForgetSmartHomeAppliances,
    GetAddressBook,
    GetConferencePreference,
    GetConferenceProvider,
    GetContact,
    GetDevice,
    GetGateway,
    GetGatewayGroup,
    GetInvitationConfiguration,
    GetNetworkProfile,
    GetProfile,
    GetRoom,
    GetRoomSkillParameter,
    GetSkillGroup,
    ListBusinessReportSchedules,
    ListConferenceProviders,
    ListDeviceEvents,
    ListGatewayGroups,
    ListGateways,
    ListSkills,
    ListSkillsStoreCategories,
    ListSkillsStoreSkillsByCategory,
    ListSmartHomeAppliances,
    ListTags,
    PutConferencePreference,
    PutInvitationConfiguration,
    PutRoomSkillParameter,
    PutSkillAuthorization,
    RegisterAVSDevice,
    RejectSkill,
    ResolveRoom,
    RevokeInvitation,
    SearchAddressBooks,
    SearchContacts,
    SearchDevices,
    SearchNetworkProfiles,
    SearchProfiles,
    SearchRooms,
    SearchSkillGroups,
    SearchUsers,
    SendAnnouncement,
    SendInvitation,
    StartDeviceSync,
    StartSmartHomeApplianceDiscovery,
    TagResource,
    UntagResource,
    UpdateAddressBook,
    UpdateBusinessReportSchedule,
    UpdateConferenceProvider,
    UpdateContact,
    UpdateDevice,
    UpdateGateway,
    UpdateGatewayGroup,
    UpdateNetworkProfile,
    UpdateProfile,
    UpdateRoom,
    UpdateSkillGroup,
}
