use crate::commands::Args;
use crate::services::makemkvcon::{self, RipOptions};
use crate::services::{rip_output, size};
use crate::standard_error::StandardError;
use log::info;

pub fn rip_options(args: &Args) -> Result<RipOptions, StandardError> {
    let min_length = match args.min_length.as_deref() {
        Some(text) => Some(size::parse_min_length(text).ok_or_else(|| {
            StandardError::new("Arguments", format!("Invalid minimum length: {text}"))
        })?),
        None => None,
    };
    Ok(RipOptions {
        drive: args.drive()?.to_string(),
        titles: args.tracks.clone(),
        audio: args.audio.clone(),
        subtitles: args.subtitles.clone(),
        min_length,
    })
}

pub fn rip(args: &Args) -> Result<(), StandardError> {
    let options = rip_options(args)?;
    let tmp_dir = tempfile::tempdir()?;
    info!("Ripping into {}", tmp_dir.path().display());
    makemkvcon::rip_titles(&args.makemkvcon, &options, tmp_dir.path())?;

    let files = rip_output::collect_mkvs(tmp_dir.path())?;
    if files.is_empty() {
        println!("No MKVs produced. Nothing to do.");
        return Ok(());
    }

    let written = rip_output::deliver(&files, &args.out_dir, &args.name, &args.mkvpropedit)?;
    println!(
        "✓ Done. Wrote {} file(s) to: {}",
        written.len(),
        args.out_dir.display()
    );
    Ok(())
}
