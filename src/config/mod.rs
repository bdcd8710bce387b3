use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::render::RenderStyle;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "eventmark";
const APP_CONFIG_FILE: &str = "config.json";

/// Optional render-style overrides from `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SurfaceConfig {
    #[serde(default)]
    pub(crate) highlight_color: Option<String>,
    #[serde(default)]
    pub(crate) default_region_color: Option<String>,
    #[serde(default)]
    pub(crate) region_fill_opacity: Option<f64>,
}

impl SurfaceConfig {
    /// Applies the overrides on top of the built-in style. Malformed color
    /// strings keep the default and warn.
    pub(crate) fn resolve_style(&self) -> RenderStyle {
        let mut style = RenderStyle::default();
        if let Some(value) = self.highlight_color.as_deref() {
            match theme::parse_hex_color(value) {
                Ok(color) => style.highlight_color = color,
                Err(err) => tracing::warn!(?err, "ignoring highlight_color override"),
            }
        }
        if let Some(value) = self.default_region_color.as_deref() {
            match theme::parse_hex_color(value) {
                Ok(color) => style.default_region_color = color,
                Err(err) => tracing::warn!(?err, "ignoring default_region_color override"),
            }
        }
        if let Some(opacity) = self.region_fill_opacity {
            style.fill_opacity = opacity.clamp(0.0, 1.0);
        }
        style
    }
}

pub(crate) fn load_surface_config() -> SurfaceConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_surface_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_surface_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> SurfaceConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return SurfaceConfig::default(),
    };
    if !path.exists() {
        return SurfaceConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            SurfaceConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            SurfaceConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            "eventmark",
            "config.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/config-root/eventmark/config.json"));
    }

    #[test]
    fn app_config_path_falls_back_to_home_dot_config() {
        let path = app_config_path("eventmark", "config.json", None, Some(Path::new("/tmp/home")))
            .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/eventmark/config.json"));
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path("eventmark", "config.json", None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn missing_config_file_resolves_to_defaults() {
        let config = load_surface_config_with(Some(Path::new("/nonexistent-root")), None);
        assert!(config.highlight_color.is_none());
        assert!(config.region_fill_opacity.is_none());
    }

    #[test]
    fn style_overrides_apply_and_malformed_colors_are_ignored() {
        let config = SurfaceConfig {
            highlight_color: Some("#112233".to_string()),
            default_region_color: Some("not-a-color".to_string()),
            region_fill_opacity: Some(3.0),
        };
        let style = config.resolve_style();
        assert_eq!(style.highlight_color, crate::geometry::Color::new(17, 34, 51));
        assert_eq!(style.default_region_color, theme::DEFAULT_REGION_COLOR);
        assert_eq!(style.fill_opacity, 1.0);
    }
}
