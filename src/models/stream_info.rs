use crate::models::mkv::sinfo_code;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Video,
    Audio,
    Subtitles,
}

impl StreamKind {
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        match type_name {
            "Video" => Some(StreamKind::Video),
            "Audio" => Some(StreamKind::Audio),
            "Subtitles" => Some(StreamKind::Subtitles),
            _ => None,
        }
    }
}

/// Every SINFO attribute seen for one `(title_id, stream_id)` pair, before it
/// is projected into a [`Video`], [`Audio`] or [`Subtitle`].
#[derive(Debug, Default, Serialize, Clone, PartialEq, Eq)]
pub struct StreamInfo {
    pub title_id: u32,
    pub stream_id: u32,
    pub type_name: String,
    pub attribute: String,
    pub lang_code: String,
    pub lang_name: String,
    pub codec_id: String,
    pub codec_short: String,
    pub codec_long: String,
    pub bitrate: String,
    pub channels: u32,
    pub sample_rate: u32,
    pub bits_per_sample: u32,
    pub resolution: String,
    pub aspect_ratio: String,
    pub frame_rate: String,
    pub description: String,
    pub ui_header: String,
    pub order: String,
    pub default: bool,
    pub channel_layout: String,
    pub notes: String,
    pub raw: BTreeMap<u32, String>,
}

impl StreamInfo {
    pub fn new(title_id: u32, stream_id: u32) -> Self {
        Self {
            title_id,
            stream_id,
            ..Default::default()
        }
    }

    pub fn kind(&self) -> Option<StreamKind> {
        StreamKind::from_type_name(&self.type_name)
    }

    pub fn set_field(&mut self, field: u32, value: String) {
        match field {
            sinfo_code::TYPE_NAME => self.type_name = value,
            sinfo_code::ATTRIBUTE => self.attribute = value,
            sinfo_code::LANG_CODE => self.lang_code = value,
            sinfo_code::LANG_NAME => self.lang_name = value,
            sinfo_code::CODEC_ID => self.codec_id = value,
            sinfo_code::CODEC_SHORT => self.codec_short = value,
            sinfo_code::CODEC_LONG => self.codec_long = value,
            sinfo_code::BITRATE => self.bitrate = value,
            sinfo_code::CHANNELS => self.channels = value.parse().unwrap_or_default(),
            sinfo_code::SAMPLE_RATE => self.sample_rate = value.parse().unwrap_or_default(),
            sinfo_code::BITS_PER_SAMPLE => {
                self.bits_per_sample = value.parse().unwrap_or_default()
            }
            sinfo_code::RESOLUTION => self.resolution = value,
            sinfo_code::ASPECT_RATIO => self.aspect_ratio = value,
            sinfo_code::FRAME_RATE => self.frame_rate = value,
            sinfo_code::DESCRIPTION => self.description = value,
            sinfo_code::UI_HEADER => self.ui_header = value,
            sinfo_code::ORDER => self.order = value,
            sinfo_code::DEFAULT_FLAG => self.default = value == "Default",
            sinfo_code::CHANNEL_LAYOUT => self.channel_layout = value,
            sinfo_code::NOTES => self.notes = value,
            _ => {
                self.raw.insert(field, value);
            }
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Video {
    pub stream_id: u32,
    pub codec_id: String,
    pub codec_short: String,
    pub codec_long: String,
    pub bitrate: String,
    pub resolution: String,
    pub aspect_ratio: String,
    pub frame_rate: String,
    pub raw: BTreeMap<u32, String>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Audio {
    pub stream_id: u32,
    pub codec_id: String,
    pub codec_short: String,
    pub codec_long: String,
    pub lang_code: String,
    pub lang_name: String,
    pub description: String,
    pub channels: u32,
    pub channel_layout: String,
    pub sample_rate: u32,
    pub bits_per_sample: u32,
    pub default: bool,
    pub raw: BTreeMap<u32, String>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Subtitle {
    pub stream_id: u32,
    pub codec_id: String,
    pub codec_short: String,
    pub codec_long: String,
    pub lang_code: String,
    pub lang_name: String,
    pub description: String,
    pub default: bool,
    pub raw: BTreeMap<u32, String>,
}

impl From<&StreamInfo> for Video {
    fn from(stream: &StreamInfo) -> Self {
        Self {
            stream_id: stream.stream_id,
            codec_id: stream.codec_id.clone(),
            codec_short: stream.codec_short.clone(),
            codec_long: stream.codec_long.clone(),
            bitrate: stream.bitrate.clone(),
            resolution: stream.resolution.clone(),
            aspect_ratio: stream.aspect_ratio.clone(),
            frame_rate: stream.frame_rate.clone(),
            raw: stream.raw.clone(),
        }
    }
}

// The audio description is the short attribute ("Surround 5.1"), not the
// long SINFO description.
impl From<&StreamInfo> for Audio {
    fn from(stream: &StreamInfo) -> Self {
        Self {
            stream_id: stream.stream_id,
            codec_id: stream.codec_id.clone(),
            codec_short: stream.codec_short.clone(),
            codec_long: stream.codec_long.clone(),
            lang_code: stream.lang_code.clone(),
            lang_name: stream.lang_name.clone(),
            description: stream.attribute.clone(),
            channels: stream.channels,
            channel_layout: stream.channel_layout.clone(),
            sample_rate: stream.sample_rate,
            bits_per_sample: stream.bits_per_sample,
            default: stream.default,
            raw: stream.raw.clone(),
        }
    }
}

impl From<&StreamInfo> for Subtitle {
    fn from(stream: &StreamInfo) -> Self {
        Self {
            stream_id: stream.stream_id,
            codec_id: stream.codec_id.clone(),
            codec_short: stream.codec_short.clone(),
            codec_long: stream.codec_long.clone(),
            lang_code: stream.lang_code.clone(),
            lang_name: stream.lang_name.clone(),
            description: stream.description.clone(),
            default: stream.default,
            raw: stream.raw.clone(),
        }
    }
}
