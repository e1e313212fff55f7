//! Song catalog, loaded once and never mutated

use serde::Deserialize;

/// A chord chart entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Song {
    pub id: String,
    pub title: String,
    /// Image path relative to the chord page folder
    pub img: String,
}

impl Song {
    pub fn new(id: impl Into<String>, title: impl Into<String>, img: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            img: img.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog json: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("song at index {index} has an id that is neither a string nor a number")]
    InvalidId { index: usize },
}

/// Catalog record as it appears in `songs.json`
#[derive(Deserialize)]
struct SongRecord {
    id: serde_json::Value,
    title: String,
    img: String,
}

/// Strip exactly one leading separator.
fn normalize_img(img: &str) -> &str {
    img.strip_prefix('/').unwrap_or(img)
}

/// Ordered, immutable list of songs
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Build a catalog from raw songs, normalizing each image path once.
    pub fn new(songs: Vec<Song>) -> Self {
        let songs = songs
            .into_iter()
            .map(|song| Song {
                img: normalize_img(&song.img).to_string(),
                ..song
            })
            .collect();
        Self { songs }
    }

    /// Parse a JSON array of `{id, title, img}` records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<SongRecord> = serde_json::from_str(json)?;

        let mut songs = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let id = match record.id {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                _ => return Err(CatalogError::InvalidId { index }),
            };
            songs.push(Song {
                id,
                title: record.title,
                img: normalize_img(&record.img).to_string(),
            });
        }

        Ok(Self { songs })
    }

    pub fn list(&self) -> &[Song] {
        &self.songs
    }

    pub fn find(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
