//! Records of the service, grouped by the resource they describe.

mod address_book;
mod announcement;
mod business_report;
mod common;
mod conference;
mod contact;
mod device;
mod gateway;
mod meeting_room;
mod network_profile;
mod profile;
mod room;
mod skill;
mod skill_group;
mod smart_home;
mod tagging;
mod user;

pub use address_book::*;
pub use announcement::*;
pub use business_report::*;
pub use common::*;
pub use conference::*;
pub use contact::*;
pub use device::*;
pub use gateway::*;
pub use meeting_room::*;
pub use network_profile::*;
pub use profile::*;
pub use room::*;
pub use skill::*;
pub use skill_group::*;
pub use smart_home::*;
pub use tagging::*;
pub use user::*;
