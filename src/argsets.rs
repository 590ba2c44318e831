use std::path::PathBuf;

pub struct OperationsArgs {
    pub targets: bool,
}

pub struct EnumValuesArgs {
    pub enumeration: String,
}

pub struct LookupArgs {
    pub enumeration: String,
    pub token: String,
}

pub struct RenderArgs {
    pub shape: String,
    /// Read from stdin when absent.
    pub path: Option<PathBuf>,
}
