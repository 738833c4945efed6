use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Burst {
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub stations: Vec<Station>,
}

/// Document published at `/ecallisto-plugins/burstlist.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurstList {
    pub last_update: String,
    pub newest_file: String,
    pub txt_filename: String,
    pub bursts: Vec<Burst>,
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub date: Option<String>,
    pub image: Option<String>,
    pub offset: Option<i32>,
}

/// Viewer's UTC offset in minutes east, as sent by the page script.
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub offset: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ArchiveQuery {
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArchiveLinksResponse {
    pub date: String,
    pub zip: String,
    pub txt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DateBannerResponse {
    pub today_long: String,
    pub today: String,
    pub yesterday: String,
}
