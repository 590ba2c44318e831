//! Wi-Fi network profiles pushed to devices.

use crate::enums::{NetworkEapMethod, NetworkSecurityType};

use super::{Filter, Sort, Tag};

shape! {
    NetworkProfile {
        "NetworkProfileArn" network_profile_arn: text String,
        "NetworkProfileName" network_profile_name: text String,
        "Description" description: text String,
        "Ssid" ssid: text String,
        "SecurityType" security_type: token NetworkSecurityType,
        /// Only used with `WPA2_ENTERPRISE` security.
        "EapMethod" eap_method: token NetworkEapMethod,
        "CurrentPassword" current_password: text String,
        /// Password to switch to once the network rotates it.
        "NextPassword" next_password: text String,
        /// Private certificate authority that issues device certificates.
        "CertificateAuthorityArn" certificate_authority_arn: text String,
        /// Root certificates of the network's authentication server.
        "TrustAnchors" trust_anchors: list String,
    }
}

shape! {
    /// Network profile as returned by a search, without secrets.
    NetworkProfileData {
        "NetworkProfileArn" network_profile_arn: text String,
        "NetworkProfileName" network_profile_name: text String,
        "Description" description: text String,
        "Ssid" ssid: text String,
        "SecurityType" security_type: token NetworkSecurityType,
        "EapMethod" eap_method: token NetworkEapMethod,
        "CertificateAuthorityArn" certificate_authority_arn: text String,
    }
}

shape! {
    CreateNetworkProfileRequest {
        "NetworkProfileName" network_profile_name: text String,
        "Description" description: text String,
        "Ssid" ssid: text String,
        "SecurityType" security_type: token NetworkSecurityType,
        "EapMethod" eap_method: token NetworkEapMethod,
        "CurrentPassword" current_password: text String,
        "NextPassword" next_password: text String,
        "CertificateAuthorityArn" certificate_authority_arn: text String,
        "TrustAnchors" trust_anchors: list String,
        "ClientRequestToken" client_request_token: text String,
        "Tags" tags: list Tag,
    }
}

shape! {
    CreateNetworkProfileResult {
        "NetworkProfileArn" network_profile_arn: text String,
    }
}

shape! {
    DeleteNetworkProfileRequest {
        "NetworkProfileArn" network_profile_arn: text String,
    }
}

shape! {
    DeleteNetworkProfileResult {}
}

shape! {
    GetNetworkProfileRequest {
        "NetworkProfileArn" network_profile_arn: text String,
    }
}

shape! {
    GetNetworkProfileResult {
        "NetworkProfile" network_profile: shape NetworkProfile,
    }
}

shape! {
    SearchNetworkProfilesRequest {
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
        "Filters" filters: list Filter,
        "SortCriteria" sort_criteria: list Sort,
    }
}

shape! {
    SearchNetworkProfilesResult {
        "NetworkProfiles" network_profiles: list NetworkProfileData,
        "NextToken" next_token: text String,
        "TotalCount" total_count: copy i32,
    }
}

shape! {
    UpdateNetworkProfileRequest {
        "NetworkProfileArn" network_profile_arn: text String,
        "NetworkProfileName" network_profile_name: text String,
        "Description" description: text String,
        "CurrentPassword" current_password: text String,
        "NextPassword" next_password: text String,
        "CertificateAuthorityArn" certificate_authority_arn: text String,
        "TrustAnchors" trust_anchors: list String,
    }
}

shape! {
    UpdateNetworkProfileResult {}
}
