use crate::archive::{parse_picker_value, update_download_links, ArchiveLinks};
use crate::banner::DateBanner;
use crate::bursts::{load_bursts, render_burst_list};
use crate::errors::AppError;
use crate::image::{change_image_source, reset_image_source};
use crate::models::{ArchiveLinksResponse, ArchiveQuery, DateBannerResponse, DateQuery, IndexQuery};
use crate::page::{BurstPanel, Page};
use crate::state::AppState;
use crate::static_files;
use crate::ui::render_page;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Response},
    Json,
};
use tracing::warn;

pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    let mut page = Page::default();

    DateBanner::for_viewer(query.offset).apply(&mut page);

    match query.image.as_deref() {
        Some(src) => change_image_source(&mut page.image, src),
        None => reset_image_source(&mut page.image),
    }

    if let Some(date) = query.date.as_deref() {
        if let Err(err) = update_download_links(&mut page.archive, date) {
            warn!("archive links not updated: {err}");
        }
    }

    load_bursts(&state.source, &mut page.bursts, &state.hover).await;

    Html(render_page(&page))
}

pub async fn get_bursts(State(state): State<AppState>) -> Result<Json<BurstPanel>, AppError> {
    let list = state.source.fetch().await?;
    let mut panel = BurstPanel::default();
    render_burst_list(&list, &mut panel, &state.hover);
    Ok(Json(panel))
}

pub async fn get_archive(
    Query(query): Query<ArchiveQuery>,
) -> Result<Json<ArchiveLinksResponse>, AppError> {
    let date = parse_picker_value(&query.date)?;
    let links = ArchiveLinks::for_date(date);
    Ok(Json(ArchiveLinksResponse {
        date: date.format("%Y-%m-%d").to_string(),
        zip: links.zip_href(),
        txt: links.txt_href(),
    }))
}

pub async fn get_date(Query(query): Query<DateQuery>) -> Json<DateBannerResponse> {
    Json(DateBanner::for_viewer(query.offset).to_response())
}

pub async fn web_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    static_files::serve(&state.web_root, &path).await
}
