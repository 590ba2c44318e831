//! Scheduled delivery of usage reports to an S3 bucket.

use crate::enums::{
    BusinessReportFailureCode, BusinessReportFormat, BusinessReportInterval,
    BusinessReportStatus,
};
use crate::Timestamp;

use super::Tag;

shape! {
    /// Usage report delivered by a schedule.
    BusinessReport {
        "Status" status: token BusinessReportStatus,
        /// Set when the delivery failed.
        "FailureCode" failure_code: token BusinessReportFailureCode,
        "S3Location" s3_location: shape BusinessReportS3Location,
        "DeliveryTime" delivery_time: copy Timestamp,
        /// Pre-signed URL the report can be downloaded from.
        "DownloadUrl" download_url: text String,
    }
}

shape! {
    /// Time range covered by a report.
    BusinessReportContentRange {
        "Interval" interval: token BusinessReportInterval,
    }
}

shape! {
    /// Recurrence of report deliveries.
    BusinessReportRecurrence {
        /// First delivery date, as `YYYY-MM-DD`.
        "StartDate" start_date: text String,
    }
}

shape! {
    BusinessReportS3Location {
        "Path" path: text String,
        "BucketName" bucket_name: text String,
    }
}

shape! {
    BusinessReportSchedule {
        "ScheduleArn" schedule_arn: text String,
        "ScheduleName" schedule_name: text String,
        "S3BucketName" s3_bucket_name: text String,
        "S3KeyPrefix" s3_key_prefix: text String,
        "Format" format: token BusinessReportFormat,
        "ContentRange" content_range: shape BusinessReportContentRange,
        "Recurrence" recurrence: shape BusinessReportRecurrence,
        /// Details of the most recent delivery.
        "LastBusinessReport" last_business_report: shape BusinessReport,
    }
}

shape! {
    CreateBusinessReportScheduleRequest {
        "ScheduleName" schedule_name: text String,
        "S3BucketName" s3_bucket_name: text String,
        "S3KeyPrefix" s3_key_prefix: text String,
        "Format" format: token BusinessReportFormat,
        "ContentRange" content_range: shape BusinessReportContentRange,
        /// Left unset for an on-demand report.
        "Recurrence" recurrence: shape BusinessReportRecurrence,
        "ClientRequestToken" client_request_token: text String,
        "Tags" tags: list Tag,
    }
}

shape! {
    CreateBusinessReportScheduleResult {
        "ScheduleArn" schedule_arn: text String,
    }
}

shape! {
    DeleteBusinessReportScheduleRequest {
        "ScheduleArn" schedule_arn: text String,
    }
}

shape! {
    DeleteBusinessReportScheduleResult {}
}

shape! {
    ListBusinessReportSchedulesRequest {
        "NextToken" next_token: text String,
        "MaxResults" max_results: copy i32,
    }
}

shape! {
    ListBusinessReportSchedulesResult {
        "BusinessReportSchedules" business_report_schedules: list BusinessReportSchedule,
        "NextToken" next_token: text String,
    }
}

shape! {
    UpdateBusinessReportScheduleRequest {
        "ScheduleArn" schedule_arn: text String,
        "S3BucketName" s3_bucket_name: text String,
        "S3KeyPrefix" s3_key_prefix: text String,
        "Format" format: token BusinessReportFormat,
        "ScheduleName" schedule_name: text String,
        "Recurrence" recurrence: shape BusinessReportRecurrence,
    }
}

shape! {
    UpdateBusinessReportScheduleResult {}
}
