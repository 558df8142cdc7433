use crate::models::mkv::{MkvData, CINFO, SINFO, TINFO};
use log::debug;
use regex::{Captures, Regex};

lazy_static::lazy_static! {
    // KIND:ID[,ID2][,ID3],CODE,"VALUE"
    // The last number before the value is the message code makemkvcon uses
    // for constant strings, the field code is the last of the ids.
    static ref RECORD_LINE: Regex =
        Regex::new(r#"^([A-Z]+):(\d+)(?:,(\d+))?(?:,(\d+))?,(\d+),"(.*)"$"#)
            .expect("record line regex is valid");
}

/// The three record streams of an `info` run, each in input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Records {
    pub cinfo: Vec<CINFO>,
    pub tinfo: Vec<TINFO>,
    pub sinfo: Vec<SINFO>,
}

fn number(captures: &Captures, index: usize) -> Option<u32> {
    captures.get(index)?.as_str().parse().ok()
}

/// Parses a single line. Anything that doesn't fit the record grammar for
/// its kind returns `None`.
pub fn parse_line(line: &str) -> Option<MkvData> {
    let captures = RECORD_LINE.captures(line)?;
    let kind = captures.get(1)?.as_str();
    let first = number(&captures, 2)?;
    let second = captures.get(3).map(|_| number(&captures, 3));
    let third = captures.get(4).map(|_| number(&captures, 4));
    let code = number(&captures, 5)?;
    let value = captures.get(6)?.as_str().to_string();

    match (kind, second, third) {
        ("CINFO", None, None) => Some(MkvData::CINFO(CINFO {
            field: first,
            code,
            value,
        })),
        ("TINFO", Some(field), None) => Some(MkvData::TINFO(TINFO {
            title_id: first,
            field: field?,
            code,
            value,
        })),
        ("SINFO", Some(stream_id), Some(field)) => Some(MkvData::SINFO(SINFO {
            title_id: first,
            stream_id: stream_id?,
            field: field?,
            code,
            value,
        })),
        ("CINFO" | "TINFO" | "SINFO", _, _) => None,
        (other, _, _) => {
            debug!("Ignoring record kind {other}: {line}");
            None
        }
    }
}

pub fn parse_mkv_string(stdout_str: &str) -> Vec<MkvData> {
    stdout_str.lines().filter_map(parse_line).collect()
}

pub fn tokenize(stdout_str: &str) -> Records {
    let mut records = Records::default();
    for data in parse_mkv_string(stdout_str) {
        match data {
            MkvData::CINFO(cinfo) => records.cinfo.push(cinfo),
            MkvData::TINFO(tinfo) => records.tinfo.push(tinfo),
            MkvData::SINFO(sinfo) => records.sinfo.push(sinfo),
        }
    }
    records
}
