use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/vivace/config.toml` or `~/.config/vivace/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `VIVACE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub search: SearchSettings,
    pub artwork: ArtworkSettings,
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CatalogSettings::default(),
            search: SearchSettings::default(),
            artwork: ArtworkSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Where the song catalog is persisted.
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: "songs.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Base URL of the Invidious-compatible API instance used for search
    /// and stream resolution.
    pub instance: String,
    /// Request timeout for API calls (seconds).
    pub timeout_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            instance: "https://inv.nadeko.net".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArtworkSettings {
    /// Whether the now-playing screen renders album art at all.
    pub enabled: bool,
    /// Width of the rendered art in terminal columns.
    pub columns: u32,
    /// Horizontal stretch applied to compensate for terminal cells being
    /// taller than they are wide.
    pub width_ratio: f32,
}

impl Default for ArtworkSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            columns: 60,
            width_ratio: 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered as the interactive prompt.
    pub prompt: String,
    /// How often the now-playing screen redraws (milliseconds).
    pub refresh_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            prompt: "(vivace) ".to_string(),
            refresh_ms: 1000,
        }
    }
}
