use crate::models::container_info::ContainerInfo;
use crate::models::title_info::TitleInfo;
use crate::services::size;
use serde::Serialize;

#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct DiscInfo {
    pub container: ContainerInfo,
    /// Sorted by title id.
    pub titles: Vec<TitleInfo>,
}

impl DiscInfo {
    pub fn name(&self) -> &str {
        &self.container.disc_name
    }

    pub fn disc_type(&self) -> &str {
        &self.container.disc_type
    }

    pub fn volume(&self) -> &str {
        &self.container.volume_label
    }

    pub fn find_title(&self, id: u32) -> Option<&TitleInfo> {
        self.titles.iter().find(|title| title.id == id)
    }

    /// Titles of at least `min_size` (e.g. "100M"), ordered by id. An empty or
    /// "0" size keeps everything.
    pub fn filter_titles(&self, min_size: &str) -> Vec<&TitleInfo> {
        let min_size = min_size.trim();
        let mut titles: Vec<&TitleInfo> = if min_size.is_empty() || min_size == "0" {
            self.titles.iter().collect()
        } else {
            let min_bytes = size::size_to_bytes(min_size);
            self.titles
                .iter()
                .filter(|title| title.bytes >= min_bytes)
                .collect()
        };
        titles.sort_by_key(|title| title.id);
        titles
    }
}
