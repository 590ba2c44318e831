pub const LOG_LEVEL: &str = "LOG_LEVEL";
/// Extra dotenv file loaded after `./.env`.
pub const ENV_FILE: &str = "A4B_ENV_FILE";
