//! Errors reported by the service in JSON error replies.

use std::error::Error;

use crate::LookupError;

string_enum! {
    /// Error codes the service answers with, as carried in `__type`.
    ServiceErrorCode {
        AlreadyExists = "AlreadyExistsException",
        ConcurrentModification = "ConcurrentModificationException",
        DeviceNotRegistered = "DeviceNotRegisteredException",
        InvalidCertificateAuthority = "InvalidCertificateAuthorityException",
        InvalidDevice = "InvalidDeviceException",
        InvalidSecretsManagerResource = "InvalidSecretsManagerResourceException",
        InvalidServiceLinkedRoleState = "InvalidServiceLinkedRoleStateException",
        InvalidUserStatus = "InvalidUserStatusException",
        LimitExceeded = "LimitExceededException",
        NameInUse = "NameInUseException",
        NotFound = "NotFoundException",
        ResourceAssociated = "ResourceAssociatedException",
        ResourceInUse = "ResourceInUseException",
        SkillNotLinked = "SkillNotLinkedException",
        Unauthorized = "UnauthorizedException",
    }
}

shape! {
    /// Body of a JSON error reply.
    ServiceError {
        /// Error type, optionally prefixed with a `namespace#`.
        "__type" error_type: text String,
        "Message" message: text String,
    }
}

impl ServiceError {
    /// Strict lookup of the error type with any namespace prefix removed.
    pub fn code(&self) -> Result<ServiceErrorCode, LookupError> {
        let raw = self.error_type().unwrap_or_default();
        let code = raw.rsplit_once('#').map_or(raw, |(_, code)| code);
        ServiceErrorCode::lookup(code)
    }
}

impl Error for ServiceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_strips_namespace_prefix() {
        let error: ServiceError = serde_json::from_str(
            r#"{"__type":"com.amazonaws.alexaforbusiness#NotFoundException","Message":"no such room"}"#,
        )
        .unwrap();
        assert_eq!(error.code(), Ok(ServiceErrorCode::NotFound));
        assert_eq!(error.message(), Some("no such room"));
    }

    #[test]
    fn code_without_namespace() {
        let error = ServiceError::builder()
            .error_type("LimitExceededException")
            .build();
        assert_eq!(error.code(), Ok(ServiceErrorCode::LimitExceeded));
    }

    #[test]
    fn missing_or_unknown_type_fails_lookup() {
        assert_eq!(
            ServiceError::default().code(),
            Err(LookupError::Empty {
                enumeration: "ServiceErrorCode"
            })
        );
        let error = ServiceError::builder().error_type("ThrottlingException").build();
        assert!(matches!(
            error.code(),
            Err(LookupError::Unrecognized { .. })
        ));
    }
}
