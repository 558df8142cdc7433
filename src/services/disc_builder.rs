use crate::models::container_info::ContainerInfo;
use crate::models::disc_info::DiscInfo;
use crate::models::mkv::{CINFO, SINFO, TINFO};
use crate::models::stream_info::{StreamInfo, StreamKind};
use crate::models::title_info::TitleInfo;
use crate::services::makemkvcon_parser;
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Streams folded from SINFO records, kept in the order each
/// `(title_id, stream_id)` pair was first seen.
#[derive(Debug, Default)]
pub struct Streams {
    streams: Vec<StreamInfo>,
    index: HashMap<(u32, u32), usize>,
}

impl Streams {
    fn entry(&mut self, title_id: u32, stream_id: u32) -> &mut StreamInfo {
        let position = match self.index.get(&(title_id, stream_id)) {
            Some(&position) => position,
            None => {
                self.streams.push(StreamInfo::new(title_id, stream_id));
                let position = self.streams.len() - 1;
                self.index.insert((title_id, stream_id), position);
                position
            }
        };
        &mut self.streams[position]
    }

    pub fn get(&self, title_id: u32, stream_id: u32) -> Option<&StreamInfo> {
        self.index
            .get(&(title_id, stream_id))
            .map(|&position| &self.streams[position])
    }

    pub fn for_title(&self, title_id: u32) -> impl Iterator<Item = &StreamInfo> {
        self.streams
            .iter()
            .filter(move |stream| stream.title_id == title_id)
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}

pub fn parse_container(cinfo: &[CINFO]) -> ContainerInfo {
    let mut container = ContainerInfo::default();
    for info in cinfo {
        container.set_field(info.field, info.value.clone());
    }
    container
}

pub fn parse_titles(tinfo: &[TINFO]) -> BTreeMap<u32, TitleInfo> {
    let mut titles: BTreeMap<u32, TitleInfo> = BTreeMap::new();
    for info in tinfo {
        titles
            .entry(info.title_id)
            .or_insert_with(|| TitleInfo::new(info.title_id))
            .set_field(info.field, info.value.clone());
    }
    titles
}

pub fn parse_streams(sinfo: &[SINFO]) -> Streams {
    let mut streams = Streams::default();
    for info in sinfo {
        streams
            .entry(info.title_id, info.stream_id)
            .set_field(info.field, info.value.clone());
    }
    streams
}

/// Attaches each title's streams, split by kind. Streams of an unknown kind
/// are left out. Streams whose title never had a TINFO record are dropped.
pub fn build_titles(titles: BTreeMap<u32, TitleInfo>, streams: &Streams) -> Vec<TitleInfo> {
    titles
        .into_values()
        .map(|mut title| {
            for stream in streams.for_title(title.id) {
                match stream.kind() {
                    Some(StreamKind::Video) => title.video.push(stream.into()),
                    Some(StreamKind::Audio) => title.audio.push(stream.into()),
                    Some(StreamKind::Subtitles) => title.subtitles.push(stream.into()),
                    None => debug!(
                        "Skipping stream {}:{} of type {:?}",
                        stream.title_id, stream.stream_id, stream.type_name
                    ),
                }
            }
            title
        })
        .collect()
}

pub fn build_disc(records: &makemkvcon_parser::Records) -> DiscInfo {
    let container = parse_container(&records.cinfo);
    let titles = parse_titles(&records.tinfo);
    let streams = parse_streams(&records.sinfo);
    DiscInfo {
        container,
        titles: build_titles(titles, &streams),
    }
}

/// Parses the full stdout of `makemkvcon -r info` into a disc model.
pub fn load_disc(stdout_str: &str) -> DiscInfo {
    build_disc(&makemkvcon_parser::tokenize(stdout_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_last_write_wins() {
        let disc = load_disc("CINFO:2,0,\"A\"\nCINFO:2,0,\"B\"\n");
        assert_eq!(disc.name(), "B");
    }

    #[test]
    fn test_container_fields() {
        let input = r#"CINFO:1,6209,"Blu-ray disc"
CINFO:2,0,"Up (Disc 1)"
CINFO:28,0,"eng"
CINFO:29,0,"English"
CINFO:30,0,"Up (Disc 1)"
CINFO:31,6119,"<b>Source information</b><br>"
CINFO:32,0,"UP_USA"
CINFO:33,0,"0"
CINFO:50,0,"future""#;
        let disc = load_disc(input);
        assert_eq!(disc.disc_type(), "Blu-ray disc");
        assert_eq!(disc.volume(), "UP_USA");
        assert_eq!(disc.container.lang_name, "English");
        assert_eq!(disc.container.layer_info, "0");
        assert_eq!(disc.container.raw.get(&50), Some(&"future".to_string()));
    }

    #[test]
    fn test_titles_are_sorted_and_sparse() {
        let input = r#"TINFO:7,2,0,"Seven"
TINFO:0,2,0,"Zero"
TINFO:3,2,0,"Three"
TINFO:7,8,0,"12""#;
        let disc = load_disc(input);
        let ids: Vec<u32> = disc.titles.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 3, 7]);
        assert_eq!(disc.titles[2].name, "Seven");
        assert_eq!(disc.titles[2].chapter_count, 12);
    }

    #[test]
    fn test_streams_belong_to_their_title() {
        let input = r#"TINFO:0,2,0,"A"
TINFO:1,2,0,"B"
SINFO:0,0,1,6201,"Video"
SINFO:1,0,1,6201,"Video"
SINFO:1,1,1,6202,"Audio"
SINFO:1,2,1,6202,"Audio"
SINFO:1,3,1,6203,"Subtitles""#;
        let disc = load_disc(input);
        let first = disc.find_title(0).expect("title 0");
        let second = disc.find_title(1).expect("title 1");
        assert_eq!(first.video.len(), 1);
        assert!(first.audio.is_empty());
        assert_eq!(second.video.len(), 1);
        assert_eq!(second.audio.len(), 2);
        assert_eq!(second.subtitles.len(), 1);
    }

    #[test]
    fn test_streams_keep_first_seen_order() {
        let input = r#"TINFO:0,2,0,"A"
SINFO:0,5,1,6202,"Audio"
SINFO:0,2,1,6202,"Audio"
SINFO:0,5,3,0,"jpn"
SINFO:0,9,1,6202,"Audio"
SINFO:0,2,3,0,"eng""#;
        let disc = load_disc(input);
        let ids: Vec<u32> = disc.titles[0].audio.iter().map(|a| a.stream_id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
        assert_eq!(disc.titles[0].audio[0].lang_code, "jpn");
        assert_eq!(disc.titles[0].audio[1].lang_code, "eng");
    }

    #[test]
    fn test_unknown_stream_kind_is_dropped() {
        let input = r#"TINFO:0,2,0,"A"
SINFO:0,0,1,6201,"Video"
SINFO:0,1,1,0,"Data"
SINFO:0,2,3,0,"eng""#;
        let records = makemkvcon_parser::tokenize(input);
        let streams = parse_streams(&records.sinfo);
        assert_eq!(streams.len(), 3);
        assert_eq!(
            streams.get(0, 1).map(|s| s.type_name.as_str()),
            Some("Data")
        );

        let disc = build_disc(&records);
        let title = &disc.titles[0];
        assert_eq!(title.video.len(), 1);
        assert!(title.audio.is_empty());
        assert!(title.subtitles.is_empty());
    }

    #[test]
    fn test_stream_fields_last_write_wins() {
        let input = r#"TINFO:0,2,0,"A"
SINFO:0,1,1,6202,"Audio"
SINFO:0,1,14,0,"2"
SINFO:0,1,14,0,"6"
SINFO:0,1,39,0,"Default""#;
        let disc = load_disc(input);
        let audio = &disc.titles[0].audio[0];
        assert_eq!(audio.channels, 6);
        assert!(audio.default);
    }

    #[test]
    fn test_empty_input() {
        let disc = load_disc("");
        assert_eq!(disc.name(), "");
        assert!(disc.titles.is_empty());
    }
}
