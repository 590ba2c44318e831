mod argsets;
mod command;
mod constants;
mod helpers;

use anyhow::{anyhow, Result};
use env_logger::Env;

use constants::{defaults, envvars};

const CMD_SHAPES: &str = "shapes";
const CMD_ENUMS: &str = "enums";
const CMD_OPERATIONS: &str = "operations";
const CMD_ENUM_VALUES: &str = "enum-values";
const CMD_LOOKUP: &str = "lookup";
const CMD_RENDER: &str = "render";

fn main() -> Result<()> {
    let loaded = helpers::load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    for path in loaded {
        log::info!("Loaded {}", path.display());
    }

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_SHAPES) => command::shapes(),
        Some(CMD_ENUMS) => command::enums(),
        Some(CMD_OPERATIONS) => command::operations(argsets::OperationsArgs {
            targets: args.contains("--targets"),
        }),
        Some(CMD_ENUM_VALUES) => command::enum_values(argsets::EnumValuesArgs {
            enumeration: args.free_from_str()?,
        }),
        Some(CMD_LOOKUP) => command::lookup(argsets::LookupArgs {
            enumeration: args.free_from_str()?,
            token: args.free_from_str()?,
        }),
        Some(CMD_RENDER) => command::render(argsets::RenderArgs {
            shape: args.free_from_str()?,
            path: args.opt_free_from_str()?,
        }),
        _ => Err(anyhow!(
            "Subcommand must be one of 'shapes', 'enums', 'operations', 'enum-values', 'lookup', 'render'"
        )),
    }
}
