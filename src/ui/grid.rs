//! Three-column photo grid
use iced::widget::image::Handle;
use iced::widget::{container, image, keyed_column, row, scrollable, text, tooltip};
use iced::{ContentFit, Element, Length};

use crate::state::data::Asset;

pub const GRID_COLUMNS: usize = 3;
/// Space around each photo
pub const CELL_MARGIN: f32 = 2.0;

/// Side length of a square cell. With its margin on both sides, the columns
/// add up to exactly the viewport width.
pub fn cell_size(viewport_width: f32) -> f32 {
    (viewport_width / GRID_COLUMNS as f32 - 2.0 * CELL_MARGIN).max(0.0)
}

/// Scrollable grid of `assets`, rows keyed by the id of their first photo
pub fn photo_grid<'a, Message: 'a>(
    assets: &'a [Asset],
    viewport_width: f32,
) -> Element<'a, Message> {
    let size = cell_size(viewport_width);

    let rows = assets.chunks(GRID_COLUMNS).map(|chunk| {
        let cells = chunk.iter().map(|asset| photo_cell(asset, size));
        (chunk[0].id, Element::from(row(cells)))
    });

    scrollable(keyed_column(rows))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn photo_cell<'a, Message: 'a>(asset: &'a Asset, size: f32) -> Element<'a, Message> {
    let photo = image(Handle::from_path(&asset.uri))
        .width(size)
        .height(size)
        .content_fit(ContentFit::Cover);

    tooltip(
        container(photo).padding(CELL_MARGIN),
        text(caption(asset)).size(12),
        tooltip::Position::Bottom,
    )
    .style(container::rounded_box)
    .into()
}

/// Hover caption: name, pixel size when known, modification date
fn caption(asset: &Asset) -> String {
    let date = asset.modification_time.format("%Y-%m-%d");
    match (asset.width, asset.height) {
        (Some(w), Some(h)) => format!("{} · {}×{} · {}", asset.filename, w, h, date),
        _ => format!("{} · {}", asset.filename, date),
    }
}
