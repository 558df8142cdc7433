use serde::Serialize;
use std::fmt;

/// Disc level attribute. `CINFO:<field>,<code>,"<value>"`
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CINFO {
    pub field: u32,
    pub code: u32,
    pub value: String,
}

/// Title level attribute. `TINFO:<title>,<field>,<code>,"<value>"`
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TINFO {
    pub title_id: u32,
    pub field: u32,
    pub code: u32,
    pub value: String,
}

/// Stream level attribute. `SINFO:<title>,<stream>,<field>,<code>,"<value>"`
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SINFO {
    pub title_id: u32,
    pub stream_id: u32,
    pub field: u32,
    pub code: u32,
    pub value: String,
}

/// An enum to unify the parsed results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MkvData {
    CINFO(CINFO),
    TINFO(TINFO),
    SINFO(SINFO),
}

impl fmt::Display for CINFO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CINFO:{},{},\"{}\"", self.field, self.code, self.value)
    }
}

impl fmt::Display for TINFO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TINFO:{},{},{},\"{}\"",
            self.title_id, self.field, self.code, self.value
        )
    }
}

impl fmt::Display for SINFO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SINFO:{},{},{},{},\"{}\"",
            self.title_id, self.stream_id, self.field, self.code, self.value
        )
    }
}

impl fmt::Display for MkvData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MkvData::CINFO(cinfo) => write!(f, "{cinfo}"),
            MkvData::TINFO(tinfo) => write!(f, "{tinfo}"),
            MkvData::SINFO(sinfo) => write!(f, "{sinfo}"),
        }
    }
}

// Field codes are AP_ItemAttributeId values observed in `makemkvcon -r info`
// output. Anything not listed here ends up in the residual `raw` map.

pub mod cinfo_code {
    pub const DISC_TYPE: u32 = 1; // "Blu-ray disc", "DVD disc"
    pub const DISC_NAME: u32 = 2;
    pub const LANG_CODE: u32 = 28;
    pub const LANG_NAME: u32 = 29;
    pub const TITLE: u32 = 30;
    pub const UI_HEADER: u32 = 31;
    pub const VOLUME_LABEL: u32 = 32;
    pub const LAYER_INFO: u32 = 33;
}

pub mod tinfo_code {
    pub const NAME: u32 = 2;
    pub const CHAPTERS: u32 = 8;
    pub const DURATION: u32 = 9; // "H:MM:SS"
    pub const SIZE: u32 = 10; // "920.1 MB"
    pub const BYTES: u32 = 11;
    pub const PLAYLIST: u32 = 16; // "00038.mpls"
    pub const VIDEO_COUNT: u32 = 25;
    pub const AUDIO_COUNT: u32 = 26;
    pub const OUTPUT_NAME: u32 = 27; // "title_t00.mkv"
    pub const LANG_CODE: u32 = 28;
    pub const LANG_NAME: u32 = 29;
    pub const DESCRIPTION: u32 = 30;
    pub const UI_HEADER: u32 = 31;
}

pub mod sinfo_code {
    pub const TYPE_NAME: u32 = 1; // "Video" | "Audio" | "Subtitles"
    pub const ATTRIBUTE: u32 = 2; // "Surround 5.1", "Stereo"
    pub const LANG_CODE: u32 = 3;
    pub const LANG_NAME: u32 = 4;
    pub const CODEC_ID: u32 = 5; // "A_AC3", "V_MPEG4/ISO/AVC"
    pub const CODEC_SHORT: u32 = 6; // "DD", "DTS", "PGS"
    pub const CODEC_LONG: u32 = 7;
    pub const BITRATE: u32 = 13;
    pub const CHANNELS: u32 = 14;
    pub const SAMPLE_RATE: u32 = 17;
    pub const BITS_PER_SAMPLE: u32 = 18;
    pub const RESOLUTION: u32 = 19; // "1920x1080"
    pub const ASPECT_RATIO: u32 = 20;
    pub const FRAME_RATE: u32 = 21; // "23.976 (24000/1001)"
    pub const DESCRIPTION: u32 = 30; // "DD Surround 5.1 English"
    pub const UI_HEADER: u32 = 31;
    pub const ORDER: u32 = 33;
    pub const DEFAULT_FLAG: u32 = 39; // "Default"
    pub const CHANNEL_LAYOUT: u32 = 40; // "5.1(side)"
    pub const NOTES: u32 = 42; // "( Lossless conversion )"
}
