use crate::standard_error::StandardError;
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

#[cfg(all(target_os = "windows", target_pointer_width = "64"))]
pub const MAKEMKVCON: &str = "makemkvcon64";

#[cfg(not(all(target_os = "windows", target_pointer_width = "64")))]
pub const MAKEMKVCON: &str = "makemkvcon";

// makemkvcon [options] Command Parameters
// https://www.makemkv.com/developers/usage.txt
//
// -r , --robot
// Enables automation mode. All output is line-based, all strings are quoted,
// control characters and quotes are backslash-escaped.
//
// CINFO:id,code,value
// TINFO:id,code,value
// SINFO:id,code,value
// id - attribute id, see AP_ItemAttributeId in apdefs.h
// code - message code if attribute value is a constant string
// value - attribute value

/// What to pass to `makemkvcon mkv`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RipOptions {
    pub drive: String,
    pub titles: Vec<u32>,
    pub audio: Vec<String>,
    pub subtitles: Vec<String>,
    pub min_length: Option<u64>,
}

fn disc_arg(drive: &str) -> String {
    format!("dev:{drive}")
}

pub fn info_args(drive: &str) -> Vec<String> {
    vec!["-r".to_string(), "info".to_string(), disc_arg(drive)]
}

pub fn rip_args(options: &RipOptions, out_dir: &Path) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "mkv".to_string(),
        "--progress".to_string(),
        "--noscan".to_string(),
        "--directio=true".to_string(),
    ];
    if let Some(min_length) = options.min_length.filter(|seconds| *seconds > 0) {
        args.push(format!("--minlength={min_length}"));
    }
    if !options.audio.is_empty() {
        args.push(format!("--audio={}", options.audio.join(",")));
    }
    if !options.subtitles.is_empty() {
        args.push(format!("--subtitle={}", options.subtitles.join(",")));
    }
    args.push(disc_arg(&options.drive));
    if options.titles.is_empty() {
        args.push("all".to_string());
    } else {
        args.extend(options.titles.iter().map(|id| id.to_string()));
    }
    args.push(out_dir.to_string_lossy().to_string());
    args
}

/// Runs `makemkvcon -r info` and returns its stdout.
pub fn title_info(makemkvcon: &str, drive: &str) -> Result<String, StandardError> {
    let args = info_args(drive);
    debug!("Executing command: {makemkvcon} {args:?}");
    let output = Command::new(makemkvcon)
        .args(&args)
        .output()
        .map_err(|e| StandardError::new(makemkvcon, format!("failed to start: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(StandardError::new(
            makemkvcon,
            format!("{}: {}", output.status, stderr.trim()),
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Runs `makemkvcon mkv` writing into `out_dir`. Progress goes straight to
/// our stdout.
pub fn rip_titles(
    makemkvcon: &str,
    options: &RipOptions,
    out_dir: &Path,
) -> Result<(), StandardError> {
    let args = rip_args(options, out_dir);
    debug!("Executing command: {makemkvcon} {args:?}");
    let output = Command::new(makemkvcon)
        .args(&args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| StandardError::new(makemkvcon, format!("failed to start: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(StandardError::new(
            makemkvcon,
            format!("{}: {}", output.status, stderr.trim()),
        ));
    }
    Ok(())
}
