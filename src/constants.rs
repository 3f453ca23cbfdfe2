//! Library-wide constants.
//!
//! Centralizes transfer-channel identifiers and timing thresholds so the
//! registrars and the reference surface agree on them.

use crate::types::Edge;

// ============================================================================
// Transfer Channel
// ============================================================================

/// MIME type of the opaque marker written to the platform transfer channel
pub const DRAG_MIME: &str = "application/x-palacms-dnd";

/// Key of the marker object written under [`DRAG_MIME`]
pub const TRANSFER_MARKER_KEY: &str = "hasData";

// ============================================================================
// Edge Resolution
// ============================================================================

/// Key under which `attach_closest_edge` stores its result
pub const CLOSEST_EDGE_KEY: &str = "closestEdge";

/// Edges considered when the caller does not supply a set
pub const DEFAULT_ALLOWED_EDGES: [Edge; 2] = [Edge::Top, Edge::Bottom];

// ============================================================================
// Timing
// ============================================================================

/// Dispatches slower than this are reported as slow operations
pub const SLOW_DISPATCH_MS: f64 = 4.0;

/// Number of samples kept per event kind for dispatch statistics
pub const DISPATCH_SAMPLE_COUNT: usize = 100;

// ============================================================================
// Logging
// ============================================================================

/// Environment variable read by `init_logging` before falling back to `RUST_LOG`
pub const LOG_ENV_VAR: &str = "PAGEDROP_LOG";
