use a4b_model::catalog;
use a4b_model::operation::SERVICE_NAME;
use a4b_model::OPERATION_NAMES;
use anyhow::Result;

use crate::argsets::OperationsArgs;

pub fn shapes() -> Result<()> {
    for name in catalog::shape_names() {
        println!("{name}");
    }
    Ok(())
}

pub fn enums() -> Result<()> {
    for name in catalog::enum_names() {
        println!("{name}");
    }
    Ok(())
}

pub fn operations(args: OperationsArgs) -> Result<()> {
    for name in OPERATION_NAMES {
        if args.targets {
            println!("{name}\t{SERVICE_NAME}.{name}");
        } else {
            println!("{name}");
        }
    }
    Ok(())
}
