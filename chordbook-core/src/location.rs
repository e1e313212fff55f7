//! Navigable location <-> selected song
//!
//! Two read forms are accepted: a `song/<digits>` path pair anywhere in the
//! path, and an `id` query parameter. The path form wins when both are
//! present. Writes use the path form for numeric ids and the query form for
//! everything else, so [`song_location`] and [`Location::song_id`] always
//! round-trip.

use std::fmt;

const SONG_SEGMENT: &str = "song";
const ID_PARAM: &str = "id";
/// Folder older catalogs put in front of image references
const LEGACY_IMAGE_FOLDER: &str = "songs";

/// Path and query of the current address, without origin or fragment
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    /// Query string without the leading `?`
    pub query: String,
}

impl Location {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            path: path.into(),
            query: query.strip_prefix('?').unwrap_or(&query).to_string(),
        }
    }

    /// Split a `path?query#fragment` string. The fragment is dropped.
    pub fn parse(href: &str) -> Self {
        let href = href.split_once('#').map_or(href, |(before, _)| before);
        match href.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(href, ""),
        }
    }

    /// Song id encoded in this location, if any.
    pub fn song_id(&self) -> Option<String> {
        self.path_song_id().or_else(|| self.query_song_id())
    }

    fn path_song_id(&self) -> Option<String> {
        let segments: Vec<&str> = self.path.split('/').filter(|s| !s.is_empty()).collect();
        segments
            .windows(2)
            .rev()
            .find(|pair| pair[0] == SONG_SEGMENT && is_numeric_id(pair[1]))
            .map(|pair| pair[1].to_string())
    }

    fn query_song_id(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        let params: Vec<(String, String)> = serde_urlencoded::from_str(&self.query).ok()?;
        params
            .into_iter()
            .find(|(name, value)| name == ID_PARAM && !value.is_empty())
            .map(|(_, value)| value)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query)
        }
    }
}

fn is_numeric_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

/// Location that selects `id`.
pub fn song_location(route_base: &str, id: &str) -> Location {
    let base = with_trailing_slash(route_base);
    if is_numeric_id(id) {
        return Location::new(format!("{base}{SONG_SEGMENT}/{id}"), "");
    }
    let query = serde_urlencoded::to_string(&[(ID_PARAM, id)]).unwrap_or_default();
    Location::new(base, query)
}

/// Location with nothing selected.
pub fn home_location(route_base: &str) -> Location {
    Location::new(with_trailing_slash(route_base), "")
}

/// Address of a chord chart image.
///
/// `img` is expected to be normalized by the catalog already; no leading
/// separator is stripped here. A single leading `songs/` or `<folder>/`
/// segment is dropped so references that already name the folder do not
/// repeat it.
pub fn image_url(asset_base: &str, folder: &str, img: &str) -> String {
    let base = asset_base.trim_end_matches('/');
    let folder = folder.trim_matches('/');
    let img = strip_folder_prefix(img, folder);
    if folder.is_empty() {
        format!("{base}/{img}")
    } else {
        format!("{base}/{folder}/{img}")
    }
}

fn strip_folder_prefix<'a>(img: &'a str, folder: &str) -> &'a str {
    [LEGACY_IMAGE_FOLDER, folder]
        .into_iter()
        .filter(|prefix| !prefix.is_empty())
        .find_map(|prefix| img.strip_prefix(prefix)?.strip_prefix('/'))
        .unwrap_or(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_path_form() {
        assert_eq!(Location::parse("/song/42").song_id(), Some("42".to_string()));
        assert_eq!(
            Location::parse("/book/song/7/").song_id(),
            Some("7".to_string())
        );
    }

    #[test]
    fn path_form_requires_digits() {
        assert_eq!(Location::parse("/song/abc").song_id(), None);
        assert_eq!(Location::parse("/song/").song_id(), None);
        assert_eq!(Location::parse("/songs/12").song_id(), None);
    }

    #[test]
    fn reads_query_form() {
        assert_eq!(Location::parse("/?id=12").song_id(), Some("12".to_string()));
        assert_eq!(
            Location::parse("/?q=x&id=a%20b").song_id(),
            Some("a b".to_string())
        );
    }

    #[test]
    fn empty_query_id_is_ignored() {
        assert_eq!(Location::parse("/?id=").song_id(), None);
    }

    #[test]
    fn path_wins_over_query() {
        assert_eq!(
            Location::parse("/song/3?id=9").song_id(),
            Some("3".to_string())
        );
    }

    #[test]
    fn fragment_is_dropped() {
        let location = Location::parse("/?id=5#chart");
        assert_eq!(location.query, "id=5");
        assert_eq!(location.song_id(), Some("5".to_string()));
    }

    #[test]
    fn numeric_ids_write_path_form() {
        let location = song_location("/", "17");
        assert_eq!(location.to_string(), "/song/17");
        assert_eq!(location.song_id(), Some("17".to_string()));
    }

    #[test]
    fn other_ids_write_query_form() {
        let location = song_location("/book", "blue moon");
        assert_eq!(location.to_string(), "/book/?id=blue+moon");
        assert_eq!(location.song_id(), Some("blue moon".to_string()));
    }

    #[test]
    fn home_has_no_song() {
        assert_eq!(home_location("/book").to_string(), "/book/");
        assert_eq!(home_location("/").song_id(), None);
    }

    #[test]
    fn image_url_joins_with_single_separators() {
        assert_eq!(
            image_url("/", "chord-pages", "wonderwall.jpg"),
            "/chord-pages/wonderwall.jpg"
        );
        assert_eq!(
            image_url("https://chords.example.org/", "chord-pages", "a/b.png"),
            "https://chords.example.org/chord-pages/a/b.png"
        );
        assert_eq!(image_url("", "", "x.jpg"), "/x.jpg");
    }

    #[test]
    fn image_url_drops_one_folder_prefix() {
        assert_eq!(
            image_url("/", "chord-pages", "chord-pages/a.jpg"),
            "/chord-pages/a.jpg"
        );
        assert_eq!(
            image_url("/", "chord-pages", "songs/b.jpg"),
            "/chord-pages/b.jpg"
        );
        assert_eq!(
            image_url("/", "chord-pages", "chord-pages/chord-pages/c.jpg"),
            "/chord-pages/chord-pages/c.jpg"
        );
        assert_eq!(image_url("/", "", "songs/d.jpg"), "/d.jpg");
    }

    #[test]
    fn image_url_keeps_lookalike_folders() {
        assert_eq!(
            image_url("/", "chord-pages", "songsheets/e.jpg"),
            "/chord-pages/songsheets/e.jpg"
        );
        assert_eq!(
            image_url("/", "chord-pages", "chord-pages-old/f.jpg"),
            "/chord-pages/chord-pages-old/f.jpg"
        );
    }

    #[test]
    fn image_url_does_not_strip_again() {
        assert_eq!(
            image_url("/", "chord-pages", "/odd.jpg"),
            "/chord-pages//odd.jpg"
        );
    }
}
