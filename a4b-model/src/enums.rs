//! Closed string sets of the service.

string_enum! {
    BusinessReportFailureCode {
        AccessDenied = "ACCESS_DENIED",
        NoSuchBucket = "NO_SUCH_BUCKET",
        InternalFailure = "INTERNAL_FAILURE",
    }
}

string_enum! {
    /// File format of a delivered business report.
    BusinessReportFormat {
        Csv = "CSV",
        CsvZip = "CSV_ZIP",
    }
}

string_enum! {
    /// Interval covered by the data of a business report.
    BusinessReportInterval {
        OneDay = "ONE_DAY",
        OneWeek = "ONE_WEEK",
        ThirtyDays = "THIRTY_DAYS",
    }
}

string_enum! {
    BusinessReportStatus {
        Running = "RUNNING",
        Succeeded = "SUCCEEDED",
        Failed = "FAILED",
    }
}

string_enum! {
    /// Protocol used to dial into a meeting over IP.
    CommsProtocol {
        Sip = "SIP",
        Sips = "SIPS",
        H323 = "H323",
    }
}

string_enum! {
    ConferenceProviderType {
        Chime = "CHIME",
        Bluejeans = "BLUEJEANS",
        Fuze = "FUZE",
        GoogleHangouts = "GOOGLE_HANGOUTS",
        Polycom = "POLYCOM",
        Ringcentral = "RINGCENTRAL",
        SkypeForBusiness = "SKYPE_FOR_BUSINESS",
        Webex = "WEBEX",
        Zoom = "ZOOM",
        Custom = "CUSTOM",
    }
}

string_enum! {
    ConnectionStatus {
        Online = "ONLINE",
        Offline = "OFFLINE",
    }
}

string_enum! {
    DeviceEventType {
        ConnectionStatus = "CONNECTION_STATUS",
        DeviceStatus = "DEVICE_STATUS",
    }
}

string_enum! {
    DeviceStatus {
        Ready = "READY",
        Pending = "PENDING",
        WasOffline = "WAS_OFFLINE",
        Deregistered = "DEREGISTERED",
        Failed = "FAILED",
    }
}

string_enum! {
    /// Reason a device reported its current status.
    DeviceStatusDetailCode {
        DeviceSoftwareUpdateNeeded = "DEVICE_SOFTWARE_UPDATE_NEEDED",
        DeviceWasOffline = "DEVICE_WAS_OFFLINE",
        CredentialsAccessFailure = "CREDENTIALS_ACCESS_FAILURE",
        TlsVersionMismatch = "TLS_VERSION_MISMATCH",
        AssociationRejection = "ASSOCIATION_REJECTION",
        AuthenticationFailure = "AUTHENTICATION_FAILURE",
        DhcpFailure = "DHCP_FAILURE",
        InternetUnavailable = "INTERNET_UNAVAILABLE",
        DnsFailure = "DNS_FAILURE",
        UnknownFailure = "UNKNOWN_FAILURE",
        CertificateIssuingLimitExceeded = "CERTIFICATE_ISSUING_LIMIT_EXCEEDED",
        InvalidCertificateAuthority = "INVALID_CERTIFICATE_AUTHORITY",
        NetworkProfileNotFound = "NETWORK_PROFILE_NOT_FOUND",
        InvalidPasswordState = "INVALID_PASSWORD_STATE",
        PasswordNotFound = "PASSWORD_NOT_FOUND",
        PasswordManagerAccessDenied = "PASSWORD_MANAGER_ACCESS_DENIED",
        CertificateAuthorityAccessDenied = "CERTIFICATE_AUTHORITY_ACCESS_DENIED",
    }
}

string_enum! {
    DeviceUsageType {
        Voice = "VOICE",
    }
}

string_enum! {
    DistanceUnit {
        Metric = "METRIC",
        Imperial = "IMPERIAL",
    }
}

string_enum! {
    EnablementType {
        Enabled = "ENABLED",
        Pending = "PENDING",
    }
}

string_enum! {
    EnablementTypeFilter {
        Enabled = "ENABLED",
        Pending = "PENDING",
    }
}

string_enum! {
    EndOfMeetingReminderType {
        AnnouncementTimeCheck = "ANNOUNCEMENT_TIME_CHECK",
        AnnouncementVariableTimeLeft = "ANNOUNCEMENT_VARIABLE_TIME_LEFT",
        Chime = "CHIME",
        Knock = "KNOCK",
    }
}

string_enum! {
    EnrollmentStatus {
        Initialized = "INITIALIZED",
        Pending = "PENDING",
        Registered = "REGISTERED",
        Disassociating = "DISASSOCIATING",
        Deregistering = "DEREGISTERING",
    }
}

string_enum! {
    /// Device feature that a status detail or a sync request refers to.
    Feature {
        Bluetooth = "BLUETOOTH",
        Volume = "VOLUME",
        Notifications = "NOTIFICATIONS",
        Lists = "LISTS",
        Skills = "SKILLS",
        NetworkProfile = "NETWORK_PROFILE",
        Settings = "SETTINGS",
        All = "ALL",
    }
}

string_enum! {
    Locale {
        EnUs = "en-US",
    }
}

string_enum! {
    NetworkEapMethod {
        EapTls = "EAP_TLS",
    }
}

string_enum! {
    /// Security type of a Wi-Fi network profile.
    NetworkSecurityType {
        Open = "OPEN",
        Wep = "WEP",
        WpaPsk = "WPA_PSK",
        Wpa2Psk = "WPA2_PSK",
        Wpa2Enterprise = "WPA2_ENTERPRISE",
    }
}

string_enum! {
    PhoneNumberType {
        Mobile = "MOBILE",
        Work = "WORK",
        Home = "HOME",
    }
}

string_enum! {
    /// Whether a meeting PIN is asked for when joining.
    RequirePin {
        Yes = "YES",
        No = "NO",
        Optional = "OPTIONAL",
    }
}

string_enum! {
    SipType {
        Work = "WORK",
    }
}

string_enum! {
    SkillType {
        Public = "PUBLIC",
        Private = "PRIVATE",
    }
}

string_enum! {
    SkillTypeFilter {
        Public = "PUBLIC",
        Private = "PRIVATE",
        All = "ALL",
    }
}

string_enum! {
    SortValue {
        Asc = "ASC",
        Desc = "DESC",
    }
}

string_enum! {
    TemperatureUnit {
        Fahrenheit = "FAHRENHEIT",
        Celsius = "CELSIUS",
    }
}

string_enum! {
    /// Word that wakes the device.
    WakeWord {
        Alexa = "ALEXA",
        Amazon = "AMAZON",
        Echo = "ECHO",
        Computer = "COMPUTER",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LookupError, StringEnum};

    #[test]
    fn lookup_returns_matching_variant() {
        assert_eq!(
            BusinessReportInterval::lookup("THIRTY_DAYS"),
            Ok(BusinessReportInterval::ThirtyDays)
        );
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::EnUs));
        assert_eq!(
            ConferenceProviderType::try_from("SKYPE_FOR_BUSINESS"),
            Ok(ConferenceProviderType::SkypeForBusiness)
        );
    }

    #[test]
    fn lookup_distinguishes_empty_from_unrecognized() {
        assert_eq!(
            BusinessReportFormat::lookup(""),
            Err(LookupError::Empty {
                enumeration: "BusinessReportFormat"
            })
        );
        assert_eq!(
            BusinessReportFormat::lookup("PDF"),
            Err(LookupError::Unrecognized {
                enumeration: "BusinessReportFormat",
                value: "PDF".to_string()
            })
        );
    }

    #[test]
    fn display_matches_canonical_string() {
        assert_eq!(DeviceStatusDetailCode::DhcpFailure.to_string(), "DHCP_FAILURE");
        assert_eq!(NetworkSecurityType::Wpa2Enterprise.as_str(), "WPA2_ENTERPRISE");
    }

    #[test]
    fn variants_serialize_as_tokens() {
        assert_eq!(
            serde_json::to_string(&SkillTypeFilter::All).unwrap(),
            "\"ALL\""
        );
        assert_eq!(
            serde_json::from_str::<TemperatureUnit>("\"CELSIUS\"").unwrap(),
            TemperatureUnit::Celsius
        );
        assert!(serde_json::from_str::<TemperatureUnit>("\"KELVIN\"").is_err());
    }

    #[test]
    fn table_is_a_bijection() {
        assert_eq!(
            DeviceStatusDetailCode::table().len(),
            DeviceStatusDetailCode::VALUES.len()
        );
        for value in DeviceStatusDetailCode::VALUES {
            assert_eq!(DeviceStatusDetailCode::lookup(value.as_str()), Ok(*value));
        }
    }
}
