//! Text rendering of the three screen regions: status, main content, search box.

use chrono::Local;
use cityweather_core::{BackgroundSelector, ViewState};

pub const LOADING_TEXT: &str = "Hava durumu yükleniyor...";
pub const SEARCH_PLACEHOLDER: &str = "Search any city";

/// Render one frame of the screen.
pub fn render_view(view: &ViewState, backgrounds: &BackgroundSelector, query: &str) -> String {
    if view.is_loading() {
        // The loading screen has no search box.
        return format!("{LOADING_TEXT}\n");
    }

    let mut out = match view {
        ViewState::Ready(snapshot) => format!(
            "[{}]\n\n  {}\n  {}\n  {}°\n  nem %{}  ·  {}\n",
            backgrounds.select(Some(snapshot.as_ref())),
            snapshot.city,
            snapshot.description,
            snapshot.temperature,
            snapshot.humidity_pct,
            snapshot.fetched_at.with_timezone(&Local).format("%H:%M"),
        ),
        ViewState::Error(message) => format!("! {message}\n"),
        ViewState::Idle | ViewState::Loading => String::new(),
    };

    let shown = if query.is_empty() { SEARCH_PLACEHOLDER } else { query };
    out.push_str(&format!("\n> {shown}\n"));
    out
}
