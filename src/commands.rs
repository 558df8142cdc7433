use crate::services::makemkvcon::MAKEMKVCON;
use crate::services::rip_output::MKVPROPEDIT;
use crate::standard_error::StandardError;
use crate::templates::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

pub mod list;
pub mod rip;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "ripmkv",
    about = "List and rip disc titles with makemkvcon",
    after_help = "Example: ripmkv -d /dev/sr0 -n Title -o /path/to/output -t 0 1 2 -a eng jpn -s eng",
    disable_version_flag = true
)]
pub struct Args {
    /// List available tracks
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Only list tracks of at least this size, e.g. 100M, 2G
    #[arg(long = "minsize", default_value = "")]
    pub min_size: String,

    /// Minimum title length when ripping, in seconds or e.g. "45m"
    #[arg(long = "minlength")]
    pub min_length: Option<String>,

    /// Drive path, e.g. /dev/sr0
    #[arg(short = 'd', long, env = "RIPMKV_DRIVE")]
    pub drive: Option<String>,

    /// Tracks to rip, e.g. 0 1 2. All tracks when omitted
    #[arg(short = 't', long = "track", num_args = 1..)]
    pub tracks: Vec<u32>,

    /// Audio languages to keep, e.g. eng jpn
    #[arg(short = 'a', long, num_args = 1..)]
    pub audio: Vec<String>,

    /// Subtitle languages to keep, e.g. eng jpn
    #[arg(short = 's', long = "subtitle", num_args = 1..)]
    pub subtitles: Vec<String>,

    /// Output file name prefix, also used as segment title
    #[arg(short = 'n', long, default_value = "")]
    pub name: String,

    /// Output directory
    #[arg(short = 'o', long = "outdir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Listing format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Read saved `makemkvcon -r info` output instead of scanning a drive ("-" for stdin)
    #[arg(long = "info-file")]
    pub info_file: Option<PathBuf>,

    /// makemkvcon binary
    #[arg(long, env = "MAKEMKVCON", default_value = MAKEMKVCON)]
    pub makemkvcon: String,

    /// mkvpropedit binary
    #[arg(long, env = "MKVPROPEDIT", default_value = MKVPROPEDIT)]
    pub mkvpropedit: String,

    /// Debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Show version information
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Args {
    pub fn drive(&self) -> Result<&str, StandardError> {
        match self.drive.as_deref().map(str::trim) {
            Some(drive) if !drive.is_empty() => Ok(drive),
            _ => Err(StandardError::new(
                "Arguments",
                "Drive not specified. Use -d or --drive to specify the drive.",
            )),
        }
    }
}

pub fn execute(args: &Args) -> Result<(), StandardError> {
    if args.version {
        println!("Version: {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    if args.list {
        return list::list(args);
    }
    rip::rip(args)
}
