use crate::models::mkv::tinfo_code;
use crate::models::stream_info::{Audio, Subtitle, Video};
use serde::Serialize;
use std::collections::BTreeMap;

/// A playable title (track) on the disc, keyed by the id makemkvcon assigns.
#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct TitleInfo {
    pub id: u32,
    pub name: String,
    pub chapter_count: u32,
    pub duration: String,
    pub size: String,
    pub bytes: u64,
    pub playlist: String,
    pub video_count: u32,
    pub audio_count: u32,
    pub filename: String,
    pub lang_code: String,
    pub lang_name: String,
    pub description: String,
    pub ui_header: String,
    pub raw: BTreeMap<u32, String>,
    pub video: Vec<Video>,
    pub audio: Vec<Audio>,
    pub subtitles: Vec<Subtitle>,
}

impl TitleInfo {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Numeric fields that fail to parse are stored as zero.
    pub fn set_field(&mut self, field: u32, value: String) {
        match field {
            tinfo_code::NAME => self.name = value,
            tinfo_code::CHAPTERS => self.chapter_count = value.parse().unwrap_or_default(),
            tinfo_code::DURATION => self.duration = value,
            tinfo_code::SIZE => self.size = value,
            tinfo_code::BYTES => self.bytes = value.parse().unwrap_or_default(),
            tinfo_code::PLAYLIST => self.playlist = value,
            tinfo_code::VIDEO_COUNT => self.video_count = value.parse().unwrap_or_default(),
            tinfo_code::AUDIO_COUNT => self.audio_count = value.parse().unwrap_or_default(),
            tinfo_code::OUTPUT_NAME => self.filename = value,
            tinfo_code::LANG_CODE => self.lang_code = value,
            tinfo_code::LANG_NAME => self.lang_name = value,
            tinfo_code::DESCRIPTION => self.description = value,
            tinfo_code::UI_HEADER => self.ui_header = value,
            _ => {
                self.raw.insert(field, value);
            }
        }
    }
}
