use crate::models::mkv::cinfo_code;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Default, Serialize, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    pub disc_type: String,
    pub disc_name: String,
    pub lang_code: String,
    pub lang_name: String,
    pub title: String,
    pub ui_header: String,
    pub volume_label: String,
    pub layer_info: String,
    pub raw: BTreeMap<u32, String>,
}

impl ContainerInfo {
    pub fn set_field(&mut self, field: u32, value: String) {
        match field {
            cinfo_code::DISC_TYPE => self.disc_type = value,
            cinfo_code::DISC_NAME => self.disc_name = value,
            cinfo_code::LANG_CODE => self.lang_code = value,
            cinfo_code::LANG_NAME => self.lang_name = value,
            cinfo_code::TITLE => self.title = value,
            cinfo_code::UI_HEADER => self.ui_header = value,
            cinfo_code::VOLUME_LABEL => self.volume_label = value,
            cinfo_code::LAYER_INFO => self.layer_info = value,
            _ => {
                self.raw.insert(field, value);
            }
        }
    }
}
