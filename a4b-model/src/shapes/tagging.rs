use super::Tag;

shape! {
    ListTagsRequest {
        "Arn" arn: text String,
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
    }
}

shape! {
    ListTagsResult {
        "Tags" tags: list Tag,
        "NextToken" next_token: text String,
    }
}

shape! {
    TagResourceRequest {
        "Arn" arn: text String,
        "Tags" tags: list Tag,
    }
}

shape! {
    TagResourceResult {}
}

shape! {
    UntagResourceRequest {
        "Arn" arn: text String,
        "TagKeys" tag_keys: list String,
    }
}

shape! {
    UntagResourceResult {}
}
