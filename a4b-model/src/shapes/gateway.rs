//! Gateways and the groups they are organized in.

use super::Tag;

shape! {
    Gateway {
        "Arn" arn: text String,
        "Name" name: text String,
        "Description" description: text String,
        "GatewayGroupArn" gateway_group_arn: text String,
        /// Software version currently running on the gateway.
        "SoftwareVersion" software_version: text String,
    }
}

shape! {
    GatewayGroup {
        "Arn" arn: text String,
        "Name" name: text String,
        "Description" description: text String,
    }
}

shape! {
    GatewayGroupSummary {
        "Arn" arn: text String,
        "Name" name: text String,
        "Description" description: text String,
    }
}

shape! {
    GatewaySummary {
        "Arn" arn: text String,
        "Name" name: text String,
        "Description" description: text String,
        "GatewayGroupArn" gateway_group_arn: text String,
        "SoftwareVersion" software_version: text String,
    }
}

shape! {
    CreateGatewayGroupRequest {
        "Name" name: text String,
        "Description" description: text String,
        "ClientRequestToken" client_request_token: text String,
        "Tags" tags: list Tag,
    }
}

shape! {
    CreateGatewayGroupResult {
        "GatewayGroupArn" gateway_group_arn: text String,
    }
}

shape! {
    DeleteGatewayGroupRequest {
        "GatewayGroupArn" gateway_group_arn: text String,
    }
}

shape! {
    DeleteGatewayGroupResult {}
}

shape! {
    GetGatewayRequest {
        "GatewayArn" gateway_arn: text String,
    }
}

shape! {
    GetGatewayResult {
        "Gateway" gateway: shape Gateway,
    }
}

shape! {
    GetGatewayGroupRequest {
        "GatewayGroupArn" gateway_group_arn: text String,
    }
}

shape! {
    GetGatewayGroupResult {
        "GatewayGroup" gateway_group: shape GatewayGroup,
    }
}

shape! {
    ListGatewayGroupsRequest {
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
    }
}

shape! {
    ListGatewayGroupsResult {
        "GatewayGroups" gateway_groups: list GatewayGroupSummary,
        "NextToken" next_token: text String,
    }
}

shape! {
    /// Lists gateways, optionally restricted to a single group.
    ListGatewaysRequest {
        "GatewayGroupArn" gateway_group_arn: text String,
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
    }
}

shape! {
    ListGatewaysResult {
        "Gateways" gateways: list GatewaySummary,
        "NextToken" next_token: text String,
    }
}

shape! {
    /// Updates a gateway. Unset members are left unchanged.
    UpdateGatewayRequest {
        "GatewayArn" gateway_arn: text String,
        "Name" name: text String,
        "Description" description: text String,
        /// Software version to update the gateway to.
        "SoftwareVersion" software_version: text String,
    }
}

shape! {
    UpdateGatewayResult {}
}

shape! {
    UpdateGatewayGroupRequest {
        "GatewayGroupArn" gateway_group_arn: text String,
        "Name" name: text String,
        "Description" description: text String,
    }
}

shape! {
    UpdateGatewayGroupResult {}
}
