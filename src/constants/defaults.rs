// Output is meant to be piped, so keep stderr quiet unless asked
pub const LOG_LEVEL: &str = "warn";
