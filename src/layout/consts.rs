//! Shared numeric and style constants for the layout core.

// ── Geometry ────────────────────────────────────────────────────

/// Distance a room is shifted per overlap-resolution step, in plan units.
pub const NUDGE_STEP: f64 = 1.0;

/// Plan-units-to-scene multiplier applied at scene-build time. The demo plan
/// is authored in display units, so the factor is currently 1.
pub const DISPLAY_SCALE: f64 = 1.0;

// ── Editing ─────────────────────────────────────────────────────

/// Offset applied to a pasted clone relative to its source, in plan units.
pub const PASTE_OFFSET: f64 = 10.0;

/// Default size for rooms created via the add action.
pub const DEFAULT_ROOM_WIDTH: f64 = 200.0;
pub const DEFAULT_ROOM_HEIGHT: f64 = 150.0;

/// Per-room stagger for the add action, so new rooms do not stack exactly.
pub const ADD_STAGGER: f64 = 20.0;

// ── Scene styling ───────────────────────────────────────────────

/// Canvas background color.
pub const BACKGROUND_FILL: &str = "#f8f8f8";

/// Room rectangle fill and stroke.
pub const ROOM_FILL: &str = "lightblue";
pub const ROOM_STROKE: &str = "black";
pub const ROOM_STROKE_WIDTH: f64 = 2.0;

/// Door and window segment strokes.
pub const DOOR_STROKE: &str = "brown";
pub const WINDOW_STROKE: &str = "blue";
pub const OPENING_STROKE_WIDTH: f64 = 4.0;

/// Dimension label placement inside the room group, and its font size.
pub const LABEL_INSET: f64 = 10.0;
pub const LABEL_FONT_SIZE: f64 = 14.0;
