use crate::enums::{PhoneNumberType, SipType};

use super::{Filter, Sort, Tag};

shape! {
    /// Phone number of a contact.
    PhoneNumber {
        /// Raw value of the phone number.
        "Number" number: text String,
        "Type" number_type: token PhoneNumberType,
    }
}

shape! {
    /// SIP address of a contact.
    SipAddress {
        "Uri" uri: text String,
        "Type" sip_type: token SipType,
    }
}

shape! {
    /// A contact with its name and the ways it can be called.
    Contact {
        "ContactArn" contact_arn: text String,
        /// Name shown on screen when the contact is called.
        "DisplayName" display_name: text String,
        "FirstName" first_name: text String,
        "LastName" last_name: text String,
        /// Single phone number, superseded by `PhoneNumbers`.
        "PhoneNumber" phone_number: text String,
        "PhoneNumbers" phone_numbers: list PhoneNumber,
        "SipAddresses" sip_addresses: list SipAddress,
    }
}

shape! {
    /// Contact as returned by a search.
    ContactData {
        "ContactArn" contact_arn: text String,
        "DisplayName" display_name: text String,
        "FirstName" first_name: text String,
        "LastName" last_name: text String,
        "PhoneNumber" phone_number: text String,
        "PhoneNumbers" phone_numbers: list PhoneNumber,
        "SipAddresses" sip_addresses: list SipAddress,
    }
}

shape! {
    CreateContactRequest {
        "DisplayName" display_name: text String,
        "FirstName" first_name: text String,
        "LastName" last_name: text String,
        "PhoneNumber" phone_number: text String,
        "PhoneNumbers" phone_numbers: list PhoneNumber,
        "SipAddresses" sip_addresses: list SipAddress,
        /// Idempotency token for the creation.
        "ClientRequestToken" client_request_token: text String,
        "Tags" tags: list Tag,
    }
}

shape! {
    CreateContactResult {
        "ContactArn" contact_arn: text String,
    }
}

shape! {
    DeleteContactRequest {
        "ContactArn" contact_arn: text String,
    }
}

shape! {
    DeleteContactResult {}
}

shape! {
    GetContactRequest {
        "ContactArn" contact_arn: text String,
    }
}

shape! {
    GetContactResult {
        "Contact" contact: shape Contact,
    }
}

shape! {
    /// Searches contacts; filterable and sortable by `DisplayName`,
    /// `FirstName` and `LastName`.
    SearchContactsRequest {
        "Filters" filters: list Filter,
        "SortCriteria" sort_criteria: list Sort,
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
    }
}

shape! {
    SearchContactsResult {
        "Contacts" contacts: list ContactData,
        "NextToken" next_token: text String,
        "TotalCount" total_count: copy i32,
    }
}

shape! {
    UpdateContactRequest {
        "ContactArn" contact_arn: text String,
        "DisplayName" display_name: text String,
        "FirstName" first_name: text String,
        "LastName" last_name: text String,
        "PhoneNumber" phone_number: text String,
        "PhoneNumbers" phone_numbers: list PhoneNumber,
        "SipAddresses" sip_addresses: list SipAddress,
    }
}

shape! {
    UpdateContactResult {}
}
