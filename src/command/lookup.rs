use a4b_model::catalog;
use anyhow::Result;

use crate::argsets::{EnumValuesArgs, LookupArgs};

pub fn enum_values(args: EnumValuesArgs) -> Result<()> {
    for token in catalog::enum_tokens(&args.enumeration)? {
        println!("{token}");
    }
    Ok(())
}

pub fn lookup(args: LookupArgs) -> Result<()> {
    let token = catalog::lookup_token(&args.enumeration, &args.token)?;
    log::debug!("Resolved '{}' in {}", args.token, args.enumeration);
    println!("{token}");
    Ok(())
}
