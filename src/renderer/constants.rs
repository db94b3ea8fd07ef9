//! Shared constants for the fretboard renderer (all in SVG user units).

// ── Grid ────────────────────────────────────────────────────────────
pub(super) const CELL_SIZE: f64 = 60.0; // side of one (string, fret) cell
pub(super) const GRID_LINE_WIDTH: f64 = 1.0;
pub(super) const CAPTION_HEIGHT: f64 = 30.0; // strip below the grid for rank/score

// ── Text sizes ──────────────────────────────────────────────────────
pub(super) const HEADER_FONT_SIZE: f64 = 26.0; // string and fret numbers
pub(super) const ORDINAL_FONT_SIZE: f64 = 26.0; // 1-based note order in the fingering
pub(super) const PITCH_FONT_SIZE: f64 = 15.0; // [C#3] cell labels
pub(super) const TITLE_FONT_SIZE: f64 = 15.0;
pub(super) const CAPTION_FONT_SIZE: f64 = 14.0;

// ── Vertical placement inside a cell, as a fraction of CELL_SIZE ─────
pub(super) const ORDINAL_OFFSET: f64 = 0.25;
pub(super) const PITCH_OFFSET: f64 = 0.75;

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const BACKGROUND_COLOR: &str = "#ffffff";
pub(super) const GRID_COLOR: &str = "#000000";
pub(super) const HEADER_CELL_COLOR: &str = "#808080";
pub(super) const MARKER_CELL_COLOR: &str = "#e6e699";
pub(super) const TEXT_COLOR: &str = "#000000";
pub(super) const IDLE_PITCH_COLOR: &str = "#bfbfbf";
pub(super) const CAPTION_COLOR: &str = "#4a4a4a";

pub(super) const FONT_FAMILY: &str = "'IBM Plex Mono', 'DejaVu Sans Mono', monospace";
