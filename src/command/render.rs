use std::{fs, io};

use a4b_model::catalog;
use anyhow::{Context, Result};

use crate::argsets::RenderArgs;

pub fn render(args: RenderArgs) -> Result<()> {
    let json = match &args.path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Could not read '{}'", path.display()))?,
        None => io::read_to_string(io::stdin()).context("Could not read stdin")?,
    };
    log::debug!("Rendering {} bytes as {}", json.len(), args.shape);
    println!("{}", catalog::render_shape(&args.shape, &json)?);
    Ok(())
}
