use super::{Filter, Sort, Tag};

shape! {
    /// A room with its attributes.
    Room {
        "RoomArn" room_arn: text String,
        "RoomName" room_name: text String,
        "Description" description: text String,
        /// Calendar used to look up the room's meetings.
        "ProviderCalendarId" provider_calendar_id: text String,
        "ProfileArn" profile_arn: text String,
    }
}

shape! {
    /// Room as returned by a search.
    RoomData {
        "RoomArn" room_arn: text String,
        "RoomName" room_name: text String,
        "Description" description: text String,
        "ProviderCalendarId" provider_calendar_id: text String,
        "ProfileArn" profile_arn: text String,
        "ProfileName" profile_name: text String,
    }
}

shape! {
    /// Skill parameter scoped to a room.
    RoomSkillParameter {
        "ParameterKey" parameter_key: text String,
        "ParameterValue" parameter_value: text String,
    }
}

shape! {
    CreateRoomRequest {
        "RoomName" room_name: text String,
        "Description" description: text String,
        "ProfileArn" profile_arn: text String,
        "ProviderCalendarId" provider_calendar_id: text String,
        "ClientRequestToken" client_request_token: text String,
        "Tags" tags: list Tag,
    }
}

shape! {
    CreateRoomResult {
        "RoomArn" room_arn: text String,
    }
}

shape! {
    DeleteRoomRequest {
        "RoomArn" room_arn: text String,
    }
}

shape! {
    DeleteRoomResult {}
}

shape! {
    DeleteRoomSkillParameterRequest {
        "SkillId" skill_id: text String,
        "RoomArn" room_arn: text String,
        "ParameterKey" parameter_key: text String,
    }
}

shape! {
    DeleteRoomSkillParameterResult {}
}

shape! {
    GetRoomRequest {
        "RoomArn" room_arn: text String,
    }
}

shape! {
    GetRoomResult {
        "Room" room: shape Room,
    }
}

shape! {
    GetRoomSkillParameterRequest {
        "RoomArn" room_arn: text String,
        "SkillId" skill_id: text String,
        "ParameterKey" parameter_key: text String,
    }
}

shape! {
    GetRoomSkillParameterResult {
        "RoomSkillParameter" room_skill_parameter: shape RoomSkillParameter,
    }
}

shape! {
    /// Creates or updates a room skill parameter.
    PutRoomSkillParameterRequest {
        "RoomArn" room_arn: text String,
        "SkillId" skill_id: text String,
        "RoomSkillParameter" room_skill_parameter: shape RoomSkillParameter,
    }
}

shape! {
    PutRoomSkillParameterResult {}
}

shape! {
    /// Finds the room a user's request came from, given the skill that
    /// received it.
    ResolveRoomRequest {
        "UserId" user_id: text String,
        "SkillId" skill_id: text String,
    }
}

shape! {
    ResolveRoomResult {
        "RoomArn" room_arn: text String,
        "RoomName" room_name: text String,
        "RoomSkillParameters" room_skill_parameters: list RoomSkillParameter,
    }
}

shape! {
    SearchRoomsRequest {
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
        "Filters" filters: list Filter,
        "SortCriteria" sort_criteria: list Sort,
    }
}

shape! {
    SearchRoomsResult {
        "Rooms" rooms: list RoomData,
        "NextToken" next_token: text String,
        "TotalCount" total_count: copy i32,
    }
}

shape! {
    UpdateRoomRequest {
        "RoomArn" room_arn: text String,
        "RoomName" room_name: text String,
        "Description" description: text String,
        "ProviderCalendarId" provider_calendar_id: text String,
        "ProfileArn" profile_arn: text String,
    }
}

shape! {
    UpdateRoomResult {}
}
