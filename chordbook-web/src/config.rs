use chordbook_core::Config;

/// Deployment config, with the image host overridable at build time:
///
/// ```sh
/// CHORDBOOK_ASSET_BASE=https://chords.example.org/ dx build --release
/// ```
///
/// The router resolves paths under `base_path` in Dioxus.toml, so
/// `route_base` stays at its default.
pub fn load() -> Config {
    Config::default().with_bases(option_env!("CHORDBOOK_ASSET_BASE"), None)
}
