use crate::commands::Args;
use crate::services::{disc_builder, makemkvcon};
use crate::standard_error::StandardError;
use crate::templates;
use log::info;
use std::io::Read;
use std::path::Path;

fn read_info_file(path: &Path) -> Result<String, StandardError> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).to_string())
}

pub fn disc_output(args: &Args) -> Result<String, StandardError> {
    match &args.info_file {
        Some(path) => read_info_file(path),
        None => makemkvcon::title_info(&args.makemkvcon, args.drive()?),
    }
}

pub fn list(args: &Args) -> Result<(), StandardError> {
    let disc = disc_builder::load_disc(&disc_output(args)?);
    let titles = disc.filter_titles(&args.min_size);
    info!(
        "Listing {} of {} titles on {:?}",
        titles.len(),
        disc.titles.len(),
        disc.name()
    );
    let output = templates::render(args.format, &disc, &titles)?;
    println!("{}", output.trim_end());
    Ok(())
}
