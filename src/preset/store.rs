use std::fs;
use std::path::{Path, PathBuf};

use crate::preset::error::PresetError;
use crate::preset::models::Preset;
use crate::units::LinearUnit;

pub const PRESET_DIR_NAME: &str = "QuaderGenerator";
pub const PRESET_FILE_NAME: &str = "QuaderPresets.json";

/// JSON file holding the list of named presets.
///
/// Reading never fails: a missing, empty or unreadable file yields the built-in
/// defaults. Every write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store at the per-user location, see [`PresetStore::default_path`]
    pub fn at_default_location() -> Self {
        Self::new(Self::default_path())
    }

    /// `<config dir>/QuaderGenerator/QuaderPresets.json`, where the config dir is
    /// `%APPDATA%`, `$XDG_CONFIG_HOME` or `$HOME/.config`, in that order.
    pub fn default_path() -> PathBuf {
        let base = std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from))
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(PRESET_DIR_NAME).join(PRESET_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All presets, falling back to the defaults when there is nothing usable on disk
    pub fn load(&self) -> Vec<Preset> {
        match self.read() {
            Ok(Some(presets)) if !presets.is_empty() => presets,
            Ok(_) => default_presets(),
            Err(e) => {
                log::warn!(
                    "Failed to load presets from {}: {}",
                    self.path.display(),
                    e
                );
                default_presets()
            }
        }
    }

    fn read(&self) -> Result<Option<Vec<Preset>>, PresetError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let presets: Vec<Preset> = serde_json::from_str(&content)?;
        Ok(Some(presets))
    }

    pub fn save(&self, presets: &[Preset]) -> Result<(), PresetError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let json = serde_json::to_string_pretty(presets)?;
        fs::write(&self.path, json)?;

        log::info!("Presets saved to: {}", self.path.display());
        Ok(())
    }

    /// Add a preset, replacing any existing one with the same name (ignoring case).
    /// The new record goes to the end of the list.
    pub fn add(&self, preset: Preset) -> Result<(), PresetError> {
        let name = preset.name.trim().to_string();
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }

        let mut presets = self.load();
        let before = presets.len();
        presets.retain(|p| !p.matches_name(&name));
        if presets.len() != before {
            log::debug!("Overwriting preset '{}'", name);
        }

        presets.push(Preset { name, ..preset });
        self.save(&presets)
    }

    /// Remove a preset by name (ignoring case). Returns false when nothing matched.
    pub fn delete(&self, name: &str) -> Result<bool, PresetError> {
        let mut presets = self.load();
        let index = match presets.iter().position(|p| p.matches_name(name)) {
            Some(index) => index,
            None => return Ok(false),
        };

        let removed = presets.remove(index);
        self.save(&presets)?;
        log::info!("Preset deleted: {}", removed.name);
        Ok(true)
    }

    pub fn find(&self, name: &str) -> Option<Preset> {
        self.load().into_iter().find(|p| p.matches_name(name))
    }

    /// Like [`PresetStore::find`] but reports a missing preset as an error
    pub fn get(&self, name: &str) -> Result<Preset, PresetError> {
        self.find(name)
            .ok_or_else(|| PresetError::NotFound(name.trim().to_string()))
    }

    pub fn names(&self) -> Vec<String> {
        self.load().into_iter().map(|p| p.name).collect()
    }
}

/// Built-in presets, values in meters
pub fn default_presets() -> Vec<Preset> {
    let m = LinearUnit::Meter;
    vec![
        Preset::from_volume("Cube 1m³", m, 1.0, 1.0, 1.0),
        // side = ³√7 ≈ 1.9129
        Preset::from_volume("Cube 7m³", m, 7.0, 1.9129, 1.9129),
        Preset::dimensions("Box 1×1×1m", m, 1.0, 1.0, 1.0),
        Preset::dimensions("Box 2×1.5×0.5m", m, 2.0, 1.5, 0.5),
        Preset::from_surface("Surface 100m²", m, 100.0, 5.0, 5.0),
    ]
}
