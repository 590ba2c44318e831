//! Search criteria and tags shared by many operations.

use crate::enums::SortValue;

shape! {
    /// A search filter: a key and the values it may match.
    Filter {
        "Key" key: text String,
        "Values" values: list String,
    }
}

shape! {
    /// Sort criterion of a search.
    Sort {
        "Key" key: text String,
        "Value" value: token SortValue,
    }
}

shape! {
    Tag {
        "Key" key: text String,
        "Value" value: text String,
    }
}
