//! The platform drag-transfer channel.
//!
//! Only the drag source writes to it, and only an opaque marker: platforms
//! refuse to start a deliverable drag session without some transfer data.
//! Payloads travel through the in-memory registry instead.

use crate::error::{DndError, DndResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Effects a drag source allows, using the platform's names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectAllowed {
    None,
    Copy,
    CopyLink,
    CopyMove,
    Link,
    LinkMove,
    Move,
    All,
    #[default]
    Uninitialized,
}

/// Effect chosen for the current drop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Link,
    Move,
}

impl DropEffect {
    /// Effect a `dragover` starts with, given what the source allows. Move is
    /// preferred whenever it is allowed.
    pub fn initial_for(allowed: EffectAllowed) -> Self {
        match allowed {
            EffectAllowed::None => DropEffect::None,
            EffectAllowed::Copy | EffectAllowed::CopyLink => DropEffect::Copy,
            EffectAllowed::Link => DropEffect::Link,
            EffectAllowed::Move
            | EffectAllowed::CopyMove
            | EffectAllowed::LinkMove
            | EffectAllowed::All
            | EffectAllowed::Uninitialized => DropEffect::Move,
        }
    }
}

/// String data keyed by format, plus effect hints.
///
/// A read-only transfer models the platform's protected mode: outside
/// `dragstart`, writes are rejected.
#[derive(Clone, Debug, Default)]
pub struct DataTransfer {
    data: BTreeMap<String, String>,
    effect_allowed: EffectAllowed,
    drop_effect: DropEffect,
    read_only: bool,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transfer that rejects every write.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Copy of this transfer in protected mode, as handed to events after
    /// `dragstart`.
    pub fn protected(&self) -> Self {
        Self {
            read_only: true,
            ..self.clone()
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Serialize `value` as JSON and store it under `format`.
    pub fn set_data<T: Serialize + ?Sized>(&mut self, format: &str, value: &T) -> DndResult<()> {
        if self.read_only {
            return Err(DndError::TransferReadOnly);
        }
        let encoded = serde_json::to_string(value).map_err(DndError::TransferSerialization)?;
        self.data.insert(format.to_string(), encoded);
        Ok(())
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.data.get(format).map(String::as_str)
    }

    pub fn types(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).collect()
    }

    pub fn effect_allowed(&self) -> EffectAllowed {
        self.effect_allowed
    }

    /// Ignored in protected mode, like the platform does.
    pub fn set_effect_allowed(&mut self, effect: EffectAllowed) {
        if !self.read_only {
            self.effect_allowed = effect;
        }
    }

    pub fn drop_effect(&self) -> DropEffect {
        self.drop_effect
    }

    /// Writable in every mode; listeners may adjust it during `dragover`.
    pub fn set_drop_effect(&mut self, effect: DropEffect) {
        self.drop_effect = effect;
    }

    /// Copy of this transfer carrying `effect`.
    pub fn with_drop_effect(&self, effect: DropEffect) -> Self {
        Self {
            drop_effect: effect,
            ..self.clone()
        }
    }
}
