//! fretscale — scale fingering enumerator and fretboard diagram renderer.
//!
//! Enumerates every way to play a scale on a fretted instrument, keeps the
//! fingerings that move across strings in one direction, ranks them by how
//! compact they are, and renders the best ones as SVG diagrams.
//!
//! # Example
//! ```no_run
//! use fretscale::{fingerings_for_scale, Fretboard, GeneratorOptions, NoteName, Pitch, ScaleKind};
//!
//! let board = Fretboard::standard_guitar();
//! let result = fingerings_for_scale(
//!     &board,
//!     Pitch::new(NoteName::A, 3),
//!     ScaleKind::Major,
//!     &GeneratorOptions::default(),
//! );
//! for f in &result.fingerings {
//!     println!("{:.2}: {:?}", f.score, f.positions);
//! }
//! ```

pub mod enumerate;
pub mod fretboard;
pub mod generator;
pub mod instrument;
pub mod model;
pub mod output;
pub mod renderer;
pub mod scale;
pub mod scoring;

pub use enumerate::{candidate_count, enumerate_fingerings, FingeringPath};
pub use fretboard::Fretboard;
pub use generator::{
    check_octave, fingerings_for_octave, fingerings_for_scale, GeneratorOptions, ScaleFingerings,
};
pub use instrument::{Instrument, MAX_OCTAVE, MIN_OCTAVE};
pub use model::*;
pub use output::{results_to_json, write_all_diagrams, write_json, write_scale_diagrams};
pub use renderer::{render_fingering_svg, render_scale_svgs};
pub use scale::{build_scale, ScaleKind, MAJOR_STEPS, MINOR_STEPS};
pub use scoring::{cluster_distance, is_consistent, rank_fingerings, DistanceMetric, SCALE_CUTOFF};

/// Rank the fingerings of one scale on the standard guitar and return them
/// as JSON. Inputs are validated here; the core assumes valid ones.
pub fn scale_json(root: &str, octave: i32, kind: &str) -> Result<String, String> {
    let name: NoteName = root.parse()?;
    let kind: ScaleKind = kind.parse()?;
    let octave = check_octave(octave)?;
    let board = Fretboard::standard_guitar();
    let result = fingerings_for_scale(
        &board,
        Pitch::new(name, octave),
        kind,
        &GeneratorOptions::default(),
    );
    serde_json::to_string_pretty(&result).map_err(|e| format!("JSON serialization error: {e}"))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Rank the fingerings of one scale and return them as a JSON C string.
/// The caller must free the returned string with `fretscale_free_string`.
///
/// Returns null if an argument is null or invalid (unknown note name or
/// scale type, octave outside [2, 6]).
///
/// # Safety
/// `root` and `kind` must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn fretscale_scale_json(
    root: *const c_char,
    octave: i32,
    kind: *const c_char,
) -> *mut c_char {
    if root.is_null() || kind.is_null() {
        return std::ptr::null_mut();
    }
    let (root, kind) = match (
        unsafe { CStr::from_ptr(root) }.to_str(),
        unsafe { CStr::from_ptr(kind) }.to_str(),
    ) {
        (Ok(r), Ok(k)) => (r, k),
        _ => return std::ptr::null_mut(),
    };

    match scale_json(root, octave, kind) {
        Ok(json) => CString::new(json).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by fretscale functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a fretscale function, or null.
#[no_mangle]
pub unsafe extern "C" fn fretscale_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
