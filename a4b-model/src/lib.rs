//! Data model of the Alexa for Business API
//!
//! Every type in this crate is a plain data holder:
//! - requests and results of the service operations (`GetDeviceRequest`, `GetDeviceResult`, ...)
//! - value shapes embedded in them (`Device`, `PhoneNumber`, ...)
//! - closed string sets (`WakeWord`, `BusinessReportInterval`, ...)
//!
//! Shapes are immutable once built. Each one has a builder with fluent
//! setters, derived structural equality and hashing, serde support using the
//! exact wire member names, and a `Display` rendering that lists the members
//! that are present.
//!
//! Executing requests is out of scope: an external executor takes a request
//! (see [`Operation`]) and hands back the matching result.

#[macro_use]
mod macros;

pub mod catalog;
pub mod enums;
mod error;
pub mod exceptions;
pub mod operation;
pub mod render;
pub mod shapes;
mod timestamp;
mod token;

use std::fmt;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use enums::*;
pub use error::{CatalogError, LookupError};
pub use exceptions::{ServiceError, ServiceErrorCode};
pub use operation::{Operation, OPERATION_NAMES};
pub use shapes::*;
pub use timestamp::Timestamp;
pub use token::{RawToken, StringEnum, Token};

/// A request, result or value shape of the service.
pub trait Shape:
    Clone + Default + fmt::Debug + fmt::Display + PartialEq + Eq + Hash + Serialize + DeserializeOwned
{
    /// Name of the shape as published by the service.
    const NAME: &'static str;
}
