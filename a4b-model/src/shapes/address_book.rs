use super::{Filter, Sort, Tag};

shape! {
    /// An address book with its attributes.
    AddressBook {
        "AddressBookArn" address_book_arn: text String,
        "Name" name: text String,
        "Description" description: text String,
    }
}

shape! {
    /// Address book as returned by a search.
    AddressBookData {
        "AddressBookArn" address_book_arn: text String,
        "Name" name: text String,
        "Description" description: text String,
    }
}

shape! {
    AssociateContactWithAddressBookRequest {
        "ContactArn" contact_arn: text String,
        "AddressBookArn" address_book_arn: text String,
    }
}

shape! {
    AssociateContactWithAddressBookResult {}
}

shape! {
    CreateAddressBookRequest {
        "Name" name: text String,
        "Description" description: text String,
        "ClientRequestToken" client_request_token: text String,
        "Tags" tags: list Tag,
    }
}

shape! {
    CreateAddressBookResult {
        "AddressBookArn" address_book_arn: text String,
    }
}

shape! {
    DeleteAddressBookRequest {
        "AddressBookArn" address_book_arn: text String,
    }
}

shape! {
    DeleteAddressBookResult {}
}

shape! {
    DisassociateContactFromAddressBookRequest {
        "ContactArn" contact_arn: text String,
        "AddressBookArn" address_book_arn: text String,
    }
}

shape! {
    DisassociateContactFromAddressBookResult {}
}

shape! {
    GetAddressBookRequest {
        "AddressBookArn" address_book_arn: text String,
    }
}

shape! {
    GetAddressBookResult {
        "AddressBook" address_book: shape AddressBook,
    }
}

shape! {
    SearchAddressBooksRequest {
        "Filters" filters: list Filter,
        "SortCriteria" sort_criteria: list Sort,
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
    }
}

shape! {
    SearchAddressBooksResult {
        "AddressBooks" address_books: list AddressBookData,
        "NextToken" next_token: text String,
        "TotalCount" total_count: copy i32,
    }
}

shape! {
    UpdateAddressBookRequest {
        "AddressBookArn" address_book_arn: text String,
        "Name" name: text String,
        "Description" description: text String,
    }
}

shape! {
    UpdateAddressBookResult {}
}
