use chordbook_core::{Catalog, CatalogError};

const SONGS_JSON: &str = include_str!("../assets/songs.json");

/// The song list shipped with the app.
pub fn bundled() -> Result<Catalog, CatalogError> {
    Catalog::from_json(SONGS_JSON)
}
