use crate::models::container_info::ContainerInfo;
use crate::models::disc_info::DiscInfo;
use crate::models::title_info::TitleInfo;
use crate::services::summary;
use crate::standard_error::StandardError;
use serde::Serialize;
use std::fmt::Write;

/// One listing row, summaries already rendered.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TitleRow {
    pub id: u32,
    pub name: String,
    pub duration: String,
    pub chapters: u32,
    pub size: String,
    pub bytes: u64,
    pub video: String,
    pub audio: String,
    pub subtitles: String,
}

impl From<&TitleInfo> for TitleRow {
    fn from(title: &TitleInfo) -> Self {
        Self {
            id: title.id,
            name: title.name.clone(),
            duration: title.duration.clone(),
            chapters: title.chapter_count,
            size: title.size.clone(),
            bytes: title.bytes,
            video: summary::video_summary(&title.video),
            audio: summary::audio_summary(&title.audio),
            subtitles: summary::subtitle_summary(&title.subtitles),
        }
    }
}

#[derive(Serialize)]
struct DiscListing<'a> {
    container: &'a ContainerInfo,
    titles: &'a [&'a TitleInfo],
}

pub fn render_table(disc: &DiscInfo, titles: &[&TitleInfo]) -> String {
    let mut out = String::new();
    // Writing into a String never fails.
    let _ = writeln!(out, "Name:   {}", disc.name());
    let _ = writeln!(out, "Type:   {}", disc.disc_type());
    let _ = writeln!(out, "Volume: {}", disc.volume());
    let _ = writeln!(out, "Titles: {}", disc.titles.len());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<7}  {:<30} {:<8} {:<2} {:<8}  {:<28} {:<40} {:<24}",
        "TrackID", "Name", "Duration", "Ch", "Size", "Video", "Audio", "Subtitles"
    );
    let _ = writeln!(
        out,
        "{:<7}  {:<30} {:<8} {:<2} {:<8}  {:<28} {:<40} {:<24}",
        "-".repeat(7),
        "-".repeat(30),
        "-".repeat(8),
        "-".repeat(2),
        "-".repeat(8),
        "-".repeat(28),
        "-".repeat(40),
        "-".repeat(24)
    );
    for title in titles {
        let row = TitleRow::from(*title);
        let _ = writeln!(
            out,
            "{:<7}  {:<30.30} {:<8.8} {:02} {:>8}  {:<28.28} {:<40.40} {:<24.24}",
            format!("{:02}", row.id),
            row.name,
            row.duration,
            row.chapters,
            row.size,
            row.video,
            row.audio,
            row.subtitles,
        );
    }
    out
}

pub fn render_json(disc: &DiscInfo, titles: &[&TitleInfo]) -> Result<String, StandardError> {
    let listing = DiscListing {
        container: &disc.container,
        titles,
    };
    Ok(serde_json::to_string_pretty(&listing)?)
}

pub fn render_csv(titles: &[&TitleInfo]) -> Result<String, StandardError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for title in titles {
        writer.serialize(TitleRow::from(*title))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| StandardError::new("CSV", e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).to_string())
}
