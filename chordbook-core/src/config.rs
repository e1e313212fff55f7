use serde::Deserialize;

fn default_asset_base() -> String {
    "/".to_string()
}

fn default_image_folder() -> String {
    "chord-pages".to_string()
}

fn default_storage_key() -> String {
    "songFavorites".to_string()
}

fn default_category() -> String {
    "favorites".to_string()
}

fn default_route_base() -> String {
    "/".to_string()
}

/// Deployment settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Prefix for image addresses (site root or an absolute origin)
    #[serde(default = "default_asset_base")]
    pub asset_base: String,
    /// Folder holding the chord chart images
    #[serde(default = "default_image_folder")]
    pub image_folder: String,
    /// localStorage key for the favorites mapping
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Category used when the user accepts the prompt default
    #[serde(default = "default_category")]
    pub default_category: String,
    /// Path prefix that song locations are written under
    #[serde(default = "default_route_base")]
    pub route_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_base: default_asset_base(),
            image_folder: default_image_folder(),
            storage_key: default_storage_key(),
            default_category: default_category(),
            route_base: default_route_base(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Override the bases with non-empty values, keeping defaults otherwise.
    pub fn with_bases(mut self, asset_base: Option<&str>, route_base: Option<&str>) -> Self {
        if let Some(base) = asset_base.filter(|s| !s.trim().is_empty()) {
            self.asset_base = base.to_string();
        }
        if let Some(base) = route_base.filter(|s| !s.trim().is_empty()) {
            self.route_base = base.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_override() {
        let config =
            Config::from_json(r#"{"asset_base": "https://chords.example.org/", "extra": 1}"#)
                .unwrap();
        assert_eq!(config.asset_base, "https://chords.example.org/");
        assert_eq!(config.storage_key, "songFavorites");
        assert_eq!(config.image_folder, "chord-pages");
    }

    #[test]
    fn blank_bases_are_ignored() {
        let config = Config::default().with_bases(Some(""), Some("/book/"));
        assert_eq!(config.asset_base, "/");
        assert_eq!(config.route_base, "/book/");
    }
}
