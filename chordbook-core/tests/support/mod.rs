use chordbook_core::{Catalog, Config, Location, MemoryStorage, Song, Songbook};

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

pub fn test_catalog() -> Catalog {
    Catalog::new(vec![
        Song::new("1", "Wonderwall", "/wonderwall.jpg"),
        Song::new("3", "Wish You Were Here", "wish-you-were-here.jpg"),
        Song::new("7", "Wild World", "/wild-world.png"),
        Song::new("12", "Hotel California", "hotel-california.jpg"),
        Song::new("folk-1", "Scarborough Fair", "scarborough.jpg"),
    ])
}

#[allow(dead_code)]
pub fn storage_with(raw: &str) -> MemoryStorage {
    MemoryStorage::with_item(&Config::default().storage_key, raw)
}

#[allow(dead_code)]
pub fn songbook_at(storage: MemoryStorage, href: &str) -> Songbook<MemoryStorage> {
    Songbook::new(
        test_catalog(),
        storage,
        Config::default(),
        &Location::parse(href),
    )
}

#[allow(dead_code)]
pub fn ids<'a>(songs: impl IntoIterator<Item = &'a Song>) -> Vec<&'a str> {
    songs.into_iter().map(|s| s.id.as_str()).collect()
}
