use crate::standard_error::StandardError;
use log::{debug, warn};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const MKVPROPEDIT: &str = "mkvpropedit";

lazy_static::lazy_static! {
    static ref TITLE_SUFFIX: Regex = Regex::new(r"^.*?(\d+)\.mkv$")
        .expect("title suffix regex is valid");
}

/// All `*.mkv` files makemkvcon wrote into `dir`, sorted by path.
pub fn collect_mkvs(dir: &Path) -> Result<Vec<PathBuf>, StandardError> {
    let pattern = dir.join("*.mkv");
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .collect();
    files.sort();
    Ok(files)
}

/// `<name>_<id>.mkv` where `<id>` is the trailing number of the makemkvcon
/// file name ("title_t03.mkv" -> "03"). Without a name the original file
/// name is kept.
pub fn destination_name(file_name: &str, name: &str) -> String {
    if name.is_empty() {
        return file_name.to_string();
    }
    match TITLE_SUFFIX.captures(file_name) {
        Some(captures) => format!("{name}_{}.mkv", &captures[1]),
        None => format!("{name}.mkv"),
    }
}

/// Sets the segment title. Failure is only logged.
pub fn set_segment_title(mkvpropedit: &str, file: &Path, title: &str) {
    let args = [
        file.to_string_lossy().to_string(),
        "--edit".to_string(),
        "info".to_string(),
        "--set".to_string(),
        format!("title={title}"),
    ];
    debug!("Executing command: {mkvpropedit} {args:?}");
    match Command::new(mkvpropedit).args(&args).output() {
        Ok(output) if output.status.success() => {}
        Ok(output) => warn!("{mkvpropedit} failed for {}: {}", file.display(), output.status),
        Err(e) => warn!("{mkvpropedit} failed for {}: {e}", file.display()),
    }
}

/// Copies each ripped file into `out_dir`, returning the destinations that
/// were written. A failed copy is logged and skipped.
pub fn deliver(
    files: &[PathBuf],
    out_dir: &Path,
    name: &str,
    mkvpropedit: &str,
) -> Result<Vec<PathBuf>, StandardError> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    for file in files {
        if !name.is_empty() {
            set_segment_title(mkvpropedit, file, name);
        }

        let file_name = file
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_default();
        let dest = out_dir.join(destination_name(&file_name, name));
        println!(
            "→ {file_name}  ==>  {}",
            dest.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_default()
        );
        match fs::copy(file, &dest) {
            Ok(_) => written.push(dest),
            Err(e) => warn!("Error copying {} to {}: {e}", file.display(), dest.display()),
        }
    }
    Ok(written)
}
