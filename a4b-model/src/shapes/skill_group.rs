use super::{Filter, Sort, Tag};

shape! {
    /// Named set of skills enabled together on the rooms it is attached to.
    SkillGroup {
        "SkillGroupArn" skill_group_arn: text String,
        "SkillGroupName" skill_group_name: text String,
        "Description" description: text String,
    }
}

shape! {
    SkillGroupData {
        "SkillGroupArn" skill_group_arn: text String,
        "SkillGroupName" skill_group_name: text String,
        "Description" description: text String,
    }
}

shape! {
    CreateSkillGroupRequest {
        "SkillGroupName" skill_group_name: text String,
        "Description" description: text String,
        "ClientRequestToken" client_request_token: text String,
        "Tags" tags: list Tag,
    }
}

shape! {
    CreateSkillGroupResult {
        "SkillGroupArn" skill_group_arn: text String,
    }
}

shape! {
    DeleteSkillGroupRequest {
        "SkillGroupArn" skill_group_arn: text String,
    }
}

shape! {
    DeleteSkillGroupResult {}
}

shape! {
    GetSkillGroupRequest {
        "SkillGroupArn" skill_group_arn: text String,
    }
}

shape! {
    GetSkillGroupResult {
        "SkillGroup" skill_group: shape SkillGroup,
    }
}

shape! {
    SearchSkillGroupsRequest {
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
        "Filters" filters: list Filter,
        "SortCriteria" sort_criteria: list Sort,
    }
}

shape! {
    SearchSkillGroupsResult {
        "SkillGroups" skill_groups: list SkillGroupData,
        "NextToken" next_token: text String,
        "TotalCount" total_count: copy i32,
    }
}

shape! {
    UpdateSkillGroupRequest {
        "SkillGroupArn" skill_group_arn: text String,
        "SkillGroupName" skill_group_name: text String,
        "Description" description: text String,
    }
}

shape! {
    UpdateSkillGroupResult {}
}

shape! {
    AssociateSkillGroupWithRoomRequest {
        "SkillGroupArn" skill_group_arn: text String,
        "RoomArn" room_arn: text String,
    }
}

shape! {
    AssociateSkillGroupWithRoomResult {}
}

shape! {
    DisassociateSkillGroupFromRoomRequest {
        "SkillGroupArn" skill_group_arn: text String,
        "RoomArn" room_arn: text String,
    }
}

shape! {
    DisassociateSkillGroupFromRoomResult {}
}

shape! {
    AssociateSkillWithSkillGroupRequest {
        "SkillGroupArn" skill_group_arn: text String,
        "SkillId" skill_id: text String,
    }
}

shape! {
    AssociateSkillWithSkillGroupResult {}
}

shape! {
    DisassociateSkillFromSkillGroupRequest {
        "SkillGroupArn" skill_group_arn: text String,
        "SkillId" skill_id: text String,
    }
}

shape! {
    DisassociateSkillFromSkillGroupResult {}
}
