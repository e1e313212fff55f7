mod songbook;

pub use songbook::{SongChart, SongbookLayout, Songs};
