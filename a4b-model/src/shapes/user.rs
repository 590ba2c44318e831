//! Enrolled users and the invitations sent to them.

use crate::enums::EnrollmentStatus;

use super::{Filter, Sort, Tag};

shape! {
    UserData {
        "UserArn" user_arn: text String,
        "FirstName" first_name: text String,
        "LastName" last_name: text String,
        "Email" email: text String,
        "EnrollmentStatus" enrollment_status: token EnrollmentStatus,
        "EnrollmentId" enrollment_id: text String,
    }
}

shape! {
    CreateUserRequest {
        "UserId" user_id: text String,
        "FirstName" first_name: text String,
        "LastName" last_name: text String,
        "Email" email: text String,
        "ClientRequestToken" client_request_token: text String,
        "Tags" tags: list Tag,
    }
}

shape! {
    CreateUserResult {
        "UserArn" user_arn: text String,
    }
}

shape! {
    DeleteUserRequest {
        "UserArn" user_arn: text String,
        "EnrollmentId" enrollment_id: text String,
    }
}

shape! {
    DeleteUserResult {}
}

shape! {
    SearchUsersRequest {
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
        "Filters" filters: list Filter,
        "SortCriteria" sort_criteria: list Sort,
    }
}

shape! {
    SearchUsersResult {
        "Users" users: list UserData,
        "NextToken" next_token: text String,
        "TotalCount" total_count: copy i32,
    }
}

shape! {
    /// Sends an enrollment invitation email to a user.
    SendInvitationRequest {
        "UserArn" user_arn: text String,
    }
}

shape! {
    SendInvitationResult {}
}

shape! {
    RevokeInvitationRequest {
        "UserArn" user_arn: text String,
        "EnrollmentId" enrollment_id: text String,
    }
}

shape! {
    RevokeInvitationResult {}
}

shape! {
    GetInvitationConfigurationRequest {}
}

shape! {
    GetInvitationConfigurationResult {
        "OrganizationName" organization_name: text String,
        "ContactEmail" contact_email: text String,
        /// Private skills made available to users on enrollment.
        "PrivateSkillIds" private_skill_ids: list String,
    }
}

shape! {
    /// Configures the email template of user invitations.
    PutInvitationConfigurationRequest {
        "OrganizationName" organization_name: text String,
        "ContactEmail" contact_email: text String,
        "PrivateSkillIds" private_skill_ids: list String,
    }
}

shape! {
    PutInvitationConfigurationResult {}
}
