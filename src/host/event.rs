//! Drag events as delivered by the host.

use super::element::Element;
use super::transfer::DataTransfer;
use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named drag event kinds, matching the platform's event names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    DragStart,
    DragEnter,
    DragOver,
    DragLeave,
    Drop,
    DragEnd,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        EventKind::DragStart,
        EventKind::DragEnter,
        EventKind::DragOver,
        EventKind::DragLeave,
        EventKind::Drop,
        EventKind::DragEnd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::DragStart => "dragstart",
            EventKind::DragEnter => "dragenter",
            EventKind::DragOver => "dragover",
            EventKind::DragLeave => "dragleave",
            EventKind::Drop => "drop",
            EventKind::DragEnd => "dragend",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single host-delivered drag event.
#[derive(Debug)]
pub struct DragEvent {
    kind: EventKind,
    client: Point,
    target: Option<Element>,
    data_transfer: Option<DataTransfer>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DragEvent {
    pub fn new(kind: EventKind, client: Point) -> Self {
        Self {
            kind,
            client,
            target: None,
            data_transfer: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Set the element the gesture originated on (or is over).
    pub fn with_target(mut self, target: Element) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_transfer(mut self, transfer: DataTransfer) -> Self {
        self.data_transfer = Some(transfer);
        self
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Pointer position in client coordinates.
    pub fn client(&self) -> Point {
        self.client
    }

    pub fn target(&self) -> Option<&Element> {
        self.target.as_ref()
    }

    pub fn data_transfer(&self) -> Option<&DataTransfer> {
        self.data_transfer.as_ref()
    }

    pub fn data_transfer_mut(&mut self) -> Option<&mut DataTransfer> {
        self.data_transfer.as_mut()
    }

    pub fn take_transfer(&mut self) -> Option<DataTransfer> {
        self.data_transfer.take()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
