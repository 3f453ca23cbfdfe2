//! Drag-and-drop settings.
//!
//! Settings are plain serde data with per-field defaults, so a partial JSON
//! document only overrides what it names. They are handed to the registrars
//! through [`ActiveDragRegistry::with_settings`](crate::dnd::ActiveDragRegistry::with_settings).

use crate::constants::{DEFAULT_ALLOWED_EDGES, DRAG_MIME, SLOW_DISPATCH_MS};
use crate::error::{DndError, DndResult};
use crate::host::EffectAllowed;
use crate::types::Edge;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables shared by every registrar bound to one registry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DndSettings {
    /// MIME type under which the opaque marker is written to the transfer
    pub transfer_mime: String,
    /// Effect advertised to the platform when a drag starts
    pub effect_allowed: EffectAllowed,
    /// Edges used by `attach_closest_edge` when the caller passes none
    pub default_allowed_edges: Vec<Edge>,
    /// Surface dispatches slower than this are logged as slow operations
    pub slow_dispatch_ms: f64,
}

impl Default for DndSettings {
    fn default() -> Self {
        Self {
            transfer_mime: DRAG_MIME.to_string(),
            effect_allowed: EffectAllowed::Move,
            default_allowed_edges: DEFAULT_ALLOWED_EDGES.to_vec(),
            slow_dispatch_ms: SLOW_DISPATCH_MS,
        }
    }
}

impl DndSettings {
    /// Parse settings from a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> DndResult<Self> {
        serde_json::from_str(json).map_err(DndError::Settings)
    }

    /// Load settings from a JSON file.
    pub fn load_from(path: impl AsRef<Path>) -> DndResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), "Loaded drag-and-drop settings");
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from(path.as_ref()) {
            Ok(settings) => settings,
            Err(DndError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("Failed to load drag-and-drop settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Serialize settings as pretty JSON.
    pub fn to_json(&self) -> DndResult<String> {
        serde_json::to_string_pretty(self).map_err(DndError::Settings)
    }
}
