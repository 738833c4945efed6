use crate::models::{Burst, BurstList};
use crate::page::{escape_html, escape_js_string, BurstPanel};
use crate::source::BurstListSource;
use tracing::{debug, error};

pub const NO_BURSTS: &str = "No Bursts yet";
pub const STATION_SEPARATOR: &str = ", ";
const GAP: &str = "&nbsp;&nbsp;&nbsp;";

/// The image element that station links preview on hover, and the root the
/// station image paths are built under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverTarget {
    pub image_id: String,
    pub image_root: String,
}

impl Default for HoverTarget {
    fn default() -> Self {
        Self {
            image_id: "myImage".to_string(),
            image_root: "/images/ROBUST/current".to_string(),
        }
    }
}

impl HoverTarget {
    pub fn station_path(&self, burst: &str, file: &str) -> String {
        format!("{}/{burst}/{file}", self.image_root)
    }
}

/// Fetches the burst list and renders it. A failed fetch is logged and the
/// panel keeps whatever it showed before.
pub async fn load_bursts(source: &BurstListSource, panel: &mut BurstPanel, hover: &HoverTarget) {
    match source.fetch().await {
        Ok(list) => {
            debug!(bursts = list.bursts.len(), "burst list loaded");
            render_burst_list(&list, panel, hover);
        }
        Err(err) => error!(source = %source.describe(), "error fetching burst list: {err}"),
    }
}

pub fn render_burst_list(list: &BurstList, panel: &mut BurstPanel, hover: &HoverTarget) {
    panel.latest_update.html = format!("Last Update:&nbsp;{}", escape_html(&list.last_update));
    panel.download.href = list.txt_filename.clone();
    panel.newest_file.html = format!("Newest Data:&nbsp;{}", escape_html(&list.newest_file));

    if list.bursts.is_empty() {
        panel.bursts.html = NO_BURSTS.to_string();
        return;
    }

    let mut output = String::from("Burstliste:<br>");
    for burst in &list.bursts {
        output.push_str(&render_burst_line(burst, hover));
    }
    panel.bursts.html = output;
}

fn render_burst_line(burst: &Burst, hover: &HoverTarget) -> String {
    let anchors = burst
        .stations
        .iter()
        .map(|station| {
            let path = hover.station_path(&burst.name, &station.file);
            // The hover call is JavaScript inside an attribute: string
            // escaping first, then markup escaping.
            let on_hover = format!(
                "changeImageSource('{}','{}')",
                escape_js_string(&hover.image_id),
                escape_js_string(&path)
            );
            format!(
                "<a href=\"{}\" onmouseover=\"{}\">{}</a>",
                escape_html(&path),
                escape_html(&on_hover),
                escape_html(&station.name)
            )
        })
        .collect::<Vec<_>>()
        .join(STATION_SEPARATOR);

    format!(
        "{}{GAP}{}{GAP}{anchors}<br>",
        escape_html(&burst.time),
        escape_html(&burst.kind)
    )
}
