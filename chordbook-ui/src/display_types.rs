//! Display types for UI components
//!
//! Flattened from the core songbook so views stay free of generics and
//! storage types.

/// One line in the song list
#[derive(Clone, Debug, PartialEq)]
pub struct SongRow {
    pub id: String,
    pub title: String,
    /// Favorite category, `None` when not a favorite
    pub category: Option<String>,
    pub is_selected: bool,
}

impl SongRow {
    pub fn is_favorite(&self) -> bool {
        self.category.is_some()
    }
}

/// The chart currently shown in the viewer
#[derive(Clone, Debug, PartialEq)]
pub struct ChartView {
    pub title: String,
    pub image_url: String,
}
