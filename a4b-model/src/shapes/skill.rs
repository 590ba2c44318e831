//! Skills, both those enabled on the account and those listed in the
//! skills store.

use crate::enums::{EnablementType, EnablementTypeFilter, SkillType, SkillTypeFilter};

shape! {
    SkillSummary {
        "SkillId" skill_id: text String,
        "SkillName" skill_name: text String,
        /// Whether the skill supports account linking.
        "SupportsLinking" supports_linking: copy bool,
        "EnablementType" enablement_type: token EnablementType,
        "SkillType" skill_type: token SkillType,
    }
}

shape! {
    DeveloperInfo {
        "DeveloperName" developer_name: text String,
        "PrivacyPolicy" privacy_policy: text String,
        "Email" email: text String,
        "Url" url: text String,
    }
}

shape! {
    /// Store listing details of a skill.
    SkillDetails {
        "ProductDescription" product_description: text String,
        "InvocationPhrase" invocation_phrase: text String,
        "ReleaseDate" release_date: text String,
        "EndUserLicenseAgreement" end_user_license_agreement: text String,
        "GenericKeywords" generic_keywords: list String,
        "BulletPoints" bullet_points: list String,
        "NewInThisVersionBulletPoints" new_in_this_version_bullet_points: list String,
        /// Store categories the skill belongs to.
        "SkillTypes" skill_types: list String,
        /// Review counts keyed by star rating.
        "Reviews" reviews: map String,
        "DeveloperInfo" developer_info: shape DeveloperInfo,
    }
}

shape! {
    SkillsStoreSkill {
        "SkillId" skill_id: text String,
        "SkillName" skill_name: text String,
        "ShortDescription" short_description: text String,
        "IconUrl" icon_url: text String,
        "SampleUtterances" sample_utterances: list String,
        "SkillDetails" skill_details: shape SkillDetails,
        "SupportsLinking" supports_linking: copy bool,
    }
}

shape! {
    /// Skills store category.
    Category {
        "CategoryId" category_id: copy i64,
        "CategoryName" category_name: text String,
    }
}

shape! {
    /// Approves a private skill shared with the account.
    ApproveSkillRequest {
        "SkillId" skill_id: text String,
    }
}

shape! {
    ApproveSkillResult {}
}

shape! {
    RejectSkillRequest {
        "SkillId" skill_id: text String,
    }
}

shape! {
    RejectSkillResult {}
}

shape! {
    /// Makes a private skill available to enrolled users.
    AssociateSkillWithUsersRequest {
        "SkillId" skill_id: text String,
    }
}

shape! {
    AssociateSkillWithUsersResult {}
}

shape! {
    DisassociateSkillFromUsersRequest {
        "SkillId" skill_id: text String,
    }
}

shape! {
    DisassociateSkillFromUsersResult {}
}

shape! {
    DeleteSkillAuthorizationRequest {
        "SkillId" skill_id: text String,
        "RoomArn" room_arn: text String,
    }
}

shape! {
    DeleteSkillAuthorizationResult {}
}

shape! {
    /// Links a skill to an account on behalf of a room.
    PutSkillAuthorizationRequest {
        /// Authorization data returned by the skill's OAuth flow.
        "AuthorizationResult" authorization_result: map String,
        "SkillId" skill_id: text String,
        "RoomArn" room_arn: text String,
    }
}

shape! {
    PutSkillAuthorizationResult {}
}

shape! {
    ListSkillsRequest {
        "SkillGroupArn" skill_group_arn: text String,
        "EnablementType" enablement_type: token EnablementTypeFilter,
        "SkillType" skill_type: token SkillTypeFilter,
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
    }
}

shape! {
    ListSkillsResult {
        "SkillSummaries" skill_summaries: list SkillSummary,
        "NextToken" next_token: text String,
    }
}

shape! {
    ListSkillsStoreCategoriesRequest {
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
    }
}

shape! {
    ListSkillsStoreCategoriesResult {
        "CategoryList" category_list: list Category,
        "NextToken" next_token: text String,
    }
}

shape! {
    ListSkillsStoreSkillsByCategoryRequest {
        "CategoryId" category_id: copy i64,
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
    }
}

shape! {
    ListSkillsStoreSkillsByCategoryResult {
        "SkillsStoreSkills" skills_store_skills: list SkillsStoreSkill,
        "NextToken" next_token: text String,
    }
}
