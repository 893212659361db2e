//! Shared literal constants for the poster crate.

// ── Binding ─────────────────────────────────────────────────────

/// Prefix stripped from a placeholder when it stands in for an empty value.
pub const PLACEHOLDER_PREFIX: &str = "e.g., ";

// ── Templates ───────────────────────────────────────────────────

/// DOM id prefix joined with a template's selector value.
pub const TEMPLATE_ID_PREFIX: &str = "poster-";

// ── Photo ───────────────────────────────────────────────────────

/// Versioned asset location handed to the background-removal library.
pub const REMOVAL_PUBLIC_PATH: &str = "https://unpkg.com/@imgly/background-removal@1.4.3/dist/";

pub const STATUS_NO_FILE: &str = "No file chosen";
pub const STATUS_PROCESSING: &str = "Removing background... please wait";
pub const STATUS_SUFFIX_REMOVED: &str = " (BG Removed)";
pub const STATUS_SUFFIX_FALLBACK: &str = " (Fallback)";

// ── Export ──────────────────────────────────────────────────────

pub const EXPORT_LABEL: &str = "Download Poster";
pub const EXPORT_BUSY_LABEL: &str = "Generating...";
pub const EXPORT_BUSY_OPACITY: f32 = 0.8;

/// Device-pixel multiplier for the captured image.
pub const EXPORT_SCALE: f64 = 2.0;

pub const EXPORT_SUBJECT_FALLBACK: &str = "Class";
pub const EXPORT_YEAR_FALLBACK: &str = "Poster";
pub const EXPORT_FILE_SUFFIX: &str = "-Poster.png";

pub const EXPORT_FAILED_MESSAGE: &str = "Oops! Something went wrong while generating the poster.";
