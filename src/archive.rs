use crate::errors::ArchiveDateError;
use crate::page::ArchivePanel;
use chrono::{Datelike, NaiveDate};

/// Prefix that resolves archive paths from the page location.
pub const ARCHIVE_BASE: &str = "../../images/ROBUST/";

/// Paths of the daily archive files, relative to `ARCHIVE_BASE`.
///
/// The zip name packs the date without separators while the text log uses
/// underscores; the files on disk are already named this way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveLinks {
    pub zip: String,
    pub txt: String,
}

impl ArchiveLinks {
    pub fn for_date(date: NaiveDate) -> Self {
        let year = date.year();
        let month = date.month();
        let day = date.day();
        let dir = format!("{year}/{month:02}/{day:02}");

        Self {
            zip: format!("{dir}/ROBUST_archive_{year}{month:02}{day:02}.zip"),
            txt: format!("{dir}/ROBUST_Graz_{year}_{month:02}_{day:02}.txt"),
        }
    }

    pub fn zip_href(&self) -> String {
        format!("{ARCHIVE_BASE}{}", self.zip)
    }

    pub fn txt_href(&self) -> String {
        format!("{ARCHIVE_BASE}{}", self.txt)
    }
}

pub fn parse_picker_value(value: &str) -> Result<NaiveDate, ArchiveDateError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ArchiveDateError::Empty);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| ArchiveDateError::Invalid {
        value: value.to_string(),
        source,
    })
}

/// Reacts to a new picker value. Invalid values leave the links and buttons
/// as they were.
pub fn update_download_links(
    panel: &mut ArchivePanel,
    value: &str,
) -> Result<ArchiveLinks, ArchiveDateError> {
    let date = parse_picker_value(value)?;

    let links = ArchiveLinks::for_date(date);
    panel.picker.value = date.format("%Y-%m-%d").to_string();

    panel.zip.link.href = links.zip_href();
    panel.zip.visible = true;

    panel.txt.link.href = links.txt_href();
    panel.txt.visible = true;

    Ok(links)
}
