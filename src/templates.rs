use crate::models::disc_info::DiscInfo;
use crate::models::title_info::TitleInfo;
use crate::standard_error::StandardError;
use clap::ValueEnum;

pub mod disk_titles;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

pub fn render(
    format: OutputFormat,
    disc: &DiscInfo,
    titles: &[&TitleInfo],
) -> Result<String, StandardError> {
    match format {
        OutputFormat::Table => Ok(disk_titles::render_table(disc, titles)),
        OutputFormat::Json => disk_titles::render_json(disc, titles),
        OutputFormat::Csv => disk_titles::render_csv(titles),
    }
}
