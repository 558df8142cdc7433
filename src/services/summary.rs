//! Compact one-line summaries of a title's streams for the listing table.
//!
//! None of these functions fail. Missing data renders as `?`, [`NONE`] or
//! the raw text.

use crate::models::stream_info::{Audio, Subtitle, Video};
use std::collections::BTreeMap;

/// Rendered when a title has no stream of a kind.
pub const NONE: &str = "—";
pub const UNKNOWN: &str = "?";
pub const UNDETERMINED_LANG: &str = "und";
pub const DEFAULT_MARKER: &str = "*";
pub const FORCED_MARKER: &str = "⚑";
pub const HEARING_IMPAIRED_MARKER: &str = "ⓢ";

pub fn first_non_blank<'a>(values: &[&'a str]) -> &'a str {
    values
        .iter()
        .find(|value| !value.trim().is_empty())
        .copied()
        .unwrap_or(UNKNOWN)
}

/// Short codec name, falling back to the long name and then the codec id.
pub fn codec_label<'a>(short: &'a str, long: &'a str, id: &'a str) -> &'a str {
    first_non_blank(&[short, long, id])
}

pub fn language_key(code: &str, name: &str) -> String {
    if !code.trim().is_empty() {
        code.to_lowercase()
    } else if !name.trim().is_empty() {
        name.to_lowercase()
    } else {
        UNDETERMINED_LANG.to_string()
    }
}

pub fn format_channels(channels: u32) -> String {
    match channels {
        1 => "1.0".to_string(),
        2 => "2.0".to_string(),
        6 => "5.1".to_string(),
        8 => "7.1".to_string(),
        other => other.to_string(),
    }
}

/// Higher sorts first.
pub fn channel_weight(channels: &str) -> u8 {
    match channels {
        "7.1" => 3,
        "5.1" => 2,
        "2.0" => 1,
        _ => 0,
    }
}

pub fn normalize_resolution(resolution: &str) -> &str {
    match resolution {
        "1920x1080" => "1080p",
        "3840x2160" => "2160p",
        "1280x720" => "720p",
        other => other,
    }
}

/// "23.976 (24000/1001)" -> "23.976"
pub fn short_frame_rate(frame_rate: &str) -> &str {
    match frame_rate.find(' ') {
        Some(position) if position > 0 => &frame_rate[..position],
        _ => frame_rate,
    }
}

pub fn subtitle_flags(description: &str) -> String {
    let description = description.to_lowercase();
    let mut flags = String::new();
    if description.contains("forced") {
        flags.push_str(FORCED_MARKER);
    }
    if description.contains("sdh") || description.contains("hoh") {
        flags.push_str(HEARING_IMPAIRED_MARKER);
    }
    flags
}

/// Lower sorts first: plain, forced, hearing impaired, both.
pub fn subtitle_flag_priority(flags: &str) -> u8 {
    let forced = flags.contains(FORCED_MARKER);
    let hearing_impaired = flags.contains(HEARING_IMPAIRED_MARKER);
    match (forced, hearing_impaired) {
        (false, false) => 0,
        (true, false) => 1,
        (false, true) => 2,
        (true, true) => 3,
    }
}

fn with_default_marker(mut entry: String, default: bool) -> String {
    if default {
        entry.push_str(DEFAULT_MARKER);
    }
    entry
}

/// `"<codec> • <resolution> • <fps>"` for the first video stream.
pub fn video_summary(video: &[Video]) -> String {
    match video.first() {
        Some(video) => format!(
            "{} • {} • {}",
            codec_label(&video.codec_short, &video.codec_long, &video.codec_id),
            normalize_resolution(&video.resolution),
            short_frame_rate(&video.frame_rate),
        ),
        None => NONE.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct AudioKey {
    channels: String,
    codec: String,
    layout: String,
}

impl AudioKey {
    fn new(audio: &Audio) -> Self {
        Self {
            channels: format_channels(audio.channels),
            codec: codec_label(&audio.codec_short, &audio.codec_long, &audio.codec_id).to_string(),
            layout: audio.channel_layout.trim().to_string(),
        }
    }
}

/// Groups audio by language, collapsing streams with the same channels,
/// codec and layout. e.g. `"eng: 5.1 DTS-HD MA* • 2.0 DD / fra: 5.1 DD"`
pub fn audio_summary(audio: &[Audio]) -> String {
    if audio.is_empty() {
        return NONE.to_string();
    }

    let mut languages: BTreeMap<String, BTreeMap<AudioKey, bool>> = BTreeMap::new();
    for stream in audio {
        let default = languages
            .entry(language_key(&stream.lang_code, &stream.lang_name))
            .or_default()
            .entry(AudioKey::new(stream))
            .or_insert(false);
        *default |= stream.default;
    }

    languages
        .into_iter()
        .map(|(language, entries)| {
            let mut entries: Vec<(AudioKey, bool)> = entries.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| {
                channel_weight(&b.channels)
                    .cmp(&channel_weight(&a.channels))
                    .then_with(|| a.codec.cmp(&b.codec))
                    .then_with(|| a.layout.cmp(&b.layout))
            });
            let parts: Vec<String> = entries
                .into_iter()
                .map(|(key, default)| {
                    with_default_marker(format!("{} {}", key.channels, key.codec), default)
                })
                .collect();
            format!("{language}: {}", parts.join(" • "))
        })
        .collect::<Vec<String>>()
        .join(" / ")
}

/// One entry per language and flag combination, e.g. `"eng*, eng⚑, fra"`
pub fn subtitle_summary(subtitles: &[Subtitle]) -> String {
    if subtitles.is_empty() {
        return NONE.to_string();
    }

    let mut entries: BTreeMap<(String, String), bool> = BTreeMap::new();
    for stream in subtitles {
        let key = (
            language_key(&stream.lang_code, &stream.lang_name),
            subtitle_flags(&stream.description),
        );
        *entries.entry(key).or_insert(false) |= stream.default;
    }

    let mut entries: Vec<((String, String), bool)> = entries.into_iter().collect();
    entries.sort_by(|((lang_a, flags_a), _), ((lang_b, flags_b), _)| {
        lang_a
            .cmp(lang_b)
            .then_with(|| subtitle_flag_priority(flags_a).cmp(&subtitle_flag_priority(flags_b)))
    });

    entries
        .into_iter()
        .map(|((language, flags), default)| with_default_marker(language + &flags, default))
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn audio(lang: &str, codec: &str, channels: u32, default: bool) -> Audio {
        Audio {
            stream_id: 0,
            codec_id: String::new(),
            codec_short: codec.to_string(),
            codec_long: String::new(),
            lang_code: lang.to_string(),
            lang_name: String::new(),
            description: String::new(),
            channels,
            channel_layout: String::new(),
            sample_rate: 48000,
            bits_per_sample: 0,
            default,
            raw: BTreeMap::new(),
        }
    }

    fn subtitle(lang: &str, description: &str, default: bool) -> Subtitle {
        Subtitle {
            stream_id: 0,
            codec_id: "S_HDMV/PGS".to_string(),
            codec_short: "PGS".to_string(),
            codec_long: String::new(),
            lang_code: lang.to_string(),
            lang_name: String::new(),
            description: description.to_string(),
            default,
            raw: BTreeMap::new(),
        }
    }

    fn video(resolution: &str, frame_rate: &str) -> Video {
        Video {
            stream_id: 0,
            codec_id: "V_MPEG4/ISO/AVC".to_string(),
            codec_short: "Mpeg4".to_string(),
            codec_long: "Mpeg4 AVC High@L4.1".to_string(),
            bitrate: String::new(),
            resolution: resolution.to_string(),
            aspect_ratio: "16:9".to_string(),
            frame_rate: frame_rate.to_string(),
            raw: BTreeMap::new(),
        }
    }

    #[test]
    fn test_format_channels() {
        assert_eq!(format_channels(1), "1.0");
        assert_eq!(format_channels(2), "2.0");
        assert_eq!(format_channels(6), "5.1");
        assert_eq!(format_channels(8), "7.1");
        assert_eq!(format_channels(3), "3");
        assert_eq!(format_channels(0), "0");
    }

    #[test]
    fn test_first_non_blank() {
        assert_eq!(first_non_blank(&["", "  ", "A_AC3"]), "A_AC3");
        assert_eq!(first_non_blank(&["DD", "Dolby Digital"]), "DD");
        assert_eq!(first_non_blank(&["", " "]), "?");
    }

    #[test]
    fn test_language_key() {
        assert_eq!(language_key("ENG", "English"), "eng");
        assert_eq!(language_key("", "English"), "english");
        assert_eq!(language_key(" ", ""), "und");
    }

    #[test]
    fn test_audio_duplicates_collapse_with_default() {
        let list = vec![audio("eng", "DD", 6, false), audio("eng", "DD", 6, true)];
        assert_eq!(audio_summary(&list), "eng: 5.1 DD*");
    }

    #[test]
    fn test_audio_order_within_language() {
        let list = vec![
            audio("eng", "DD", 2, false),
            audio("eng", "AAC", 1, false),
            audio("eng", "TrueHD", 8, true),
            audio("eng", "DTS", 6, false),
            audio("eng", "DD", 6, false),
        ];
        assert_eq!(
            audio_summary(&list),
            "eng: 7.1 TrueHD* • 5.1 DD • 5.1 DTS • 2.0 DD • 1.0 AAC"
        );
    }

    #[test]
    fn test_audio_languages_sorted() {
        let mut unnamed = audio("", "DD", 2, false);
        unnamed.lang_name = String::new();
        let list = vec![
            audio("jpn", "DD", 2, false),
            audio("eng", "DTS", 6, false),
            unnamed,
            audio("FRA", "DD", 6, false),
        ];
        assert_eq!(
            audio_summary(&list),
            "eng: 5.1 DTS / fra: 5.1 DD / jpn: 2.0 DD / und: 2.0 DD"
        );
    }

    #[test]
    fn test_audio_codec_fallback() {
        let mut stream = audio("eng", "", 2, false);
        stream.codec_id = "A_AC3".to_string();
        assert_eq!(audio_summary(&[stream.clone()]), "eng: 2.0 A_AC3");
        stream.codec_id = String::new();
        assert_eq!(audio_summary(&[stream]), "eng: 2.0 ?");
    }

    #[test]
    fn test_audio_layout_keeps_entries_apart() {
        let mut side = audio("eng", "DD", 6, false);
        side.channel_layout = "5.1(side)".to_string();
        let back = audio("eng", "DD", 6, true);
        assert_eq!(audio_summary(&[side, back]), "eng: 5.1 DD* • 5.1 DD");
    }

    #[test]
    fn test_empty_audio() {
        assert_eq!(audio_summary(&[]), "—");
    }

    #[test]
    fn test_subtitle_flags() {
        assert_eq!(subtitle_flags("English"), "");
        assert_eq!(subtitle_flags("English (Forced)"), "⚑");
        assert_eq!(subtitle_flags("English (SDH)"), "ⓢ");
        assert_eq!(subtitle_flags("HoH"), "ⓢ");
        assert_eq!(subtitle_flags("SDH forced"), "⚑ⓢ");
    }

    #[test]
    fn test_subtitle_flag_priority() {
        assert!(subtitle_flag_priority("") < subtitle_flag_priority("⚑"));
        assert!(subtitle_flag_priority("⚑") < subtitle_flag_priority("ⓢ"));
        assert!(subtitle_flag_priority("ⓢ") < subtitle_flag_priority("⚑ⓢ"));
    }

    #[test]
    fn test_subtitle_sdh() {
        let list = vec![subtitle("eng", "English (SDH)", false)];
        assert_eq!(subtitle_summary(&list), "engⓢ");
    }

    #[test]
    fn test_subtitle_dedup_and_order() {
        let list = vec![
            subtitle("fra", "", false),
            subtitle("eng", "SDH Forced", false),
            subtitle("eng", "English (SDH)", false),
            subtitle("eng", "Forced", false),
            subtitle("eng", "", false),
            subtitle("eng", "English", true),
        ];
        assert_eq!(subtitle_summary(&list), "eng*, eng⚑, engⓢ, eng⚑ⓢ, fra");
    }

    #[test]
    fn test_empty_subtitles() {
        assert_eq!(subtitle_summary(&[]), "—");
    }

    #[test]
    fn test_video_summary() {
        let list = vec![
            video("1920x1080", "23.976 (24000/1001)"),
            video("3840x2160", "24"),
        ];
        assert_eq!(video_summary(&list), "Mpeg4 • 1080p • 23.976");
    }

    #[test]
    fn test_video_summary_without_codec() {
        let mut stream = video("", "");
        stream.codec_short = String::new();
        stream.codec_long = String::new();
        stream.codec_id = String::new();
        assert_eq!(video_summary(&[stream]), "? •  • ");
    }

    #[test]
    fn test_empty_video() {
        assert_eq!(video_summary(&[]), "—");
    }

    #[test]
    fn test_normalize_resolution() {
        assert_eq!(normalize_resolution("1920x1080"), "1080p");
        assert_eq!(normalize_resolution("3840x2160"), "2160p");
        assert_eq!(normalize_resolution("1280x720"), "720p");
        assert_eq!(normalize_resolution("1918x1078"), "1918x1078");
        assert_eq!(normalize_resolution("720x480"), "720x480");
    }

    #[test]
    fn test_short_frame_rate() {
        assert_eq!(short_frame_rate("23.976 (24000/1001)"), "23.976");
        assert_eq!(short_frame_rate("25"), "25");
        assert_eq!(short_frame_rate(" 25"), " 25");
        assert_eq!(short_frame_rate(""), "");
    }
}
