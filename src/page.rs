//! Handles for the elements of the ROBUST page.
//!
//! Components write into these structs instead of looking elements up by
//! identifier, and `ui::render_page` turns the finished `Page` into markup.

use serde::Serialize;

pub const DEFAULT_IMAGE: &str = "default-image.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageElement {
    pub id: &'static str,
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContainer {
    pub id: &'static str,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub id: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadButton {
    pub id: &'static str,
    pub link: Link,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePicker {
    pub id: &'static str,
    pub max: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BurstPanel {
    pub latest_update: TextContainer,
    pub newest_file: TextContainer,
    pub download: Link,
    pub bursts: TextContainer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchivePanel {
    pub picker: DatePicker,
    pub zip: DownloadButton,
    pub txt: DownloadButton,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub current_date: TextContainer,
    pub image: ImageElement,
    pub bursts: BurstPanel,
    pub archive: ArchivePanel,
}

impl TextContainer {
    fn empty(id: &'static str) -> Self {
        Self {
            id,
            html: String::new(),
        }
    }
}

impl Link {
    fn unset(id: &'static str) -> Self {
        Self {
            id,
            href: "#".to_string(),
        }
    }
}

impl DownloadButton {
    fn hidden(id: &'static str, link_id: &'static str) -> Self {
        Self {
            id,
            link: Link::unset(link_id),
            visible: false,
        }
    }
}

impl Default for ImageElement {
    fn default() -> Self {
        Self {
            id: "myImage",
            src: DEFAULT_IMAGE.to_string(),
        }
    }
}

impl Default for BurstPanel {
    fn default() -> Self {
        Self {
            latest_update: TextContainer::empty("robust_latest_update"),
            newest_file: TextContainer::empty("robust_newestfile"),
            download: Link::unset("robustdownload"),
            bursts: TextContainer::empty("bursts"),
        }
    }
}

impl Default for ArchivePanel {
    fn default() -> Self {
        Self {
            picker: DatePicker {
                id: "datepicker_archive",
                max: String::new(),
                value: String::new(),
            },
            zip: DownloadButton::hidden("download_archive_button_zip", "download_archive_zip"),
            txt: DownloadButton::hidden("download_archive_button_txt", "download_archive_txt"),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            current_date: TextContainer::empty("currentDate"),
            image: ImageElement::default(),
            bursts: BurstPanel::default(),
            archive: ArchivePanel::default(),
        }
    }
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes `value` for use inside a single-quoted JavaScript string. The
/// result still needs `escape_html` when it lands in an attribute.
pub fn escape_js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}
