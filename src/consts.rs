//! Shared constants: page anchors, thresholds, and timing.
//!
//! Numeric values here are the defaults behind [`crate::config::Config`];
//! element ids and class names are the fixed contract with the page markup.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` carrying the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query for the operating-system dark preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub const THEME_TOGGLE_ID: &str = "theme-toggle";

// ── Navigation ──────────────────────────────────────────────────

pub const NAVBAR_ID: &str = "navbar";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";

/// Vertical offset at which the navbar switches to its scrolled look.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Look-ahead added to the scroll offset when picking the active section.
pub const ACTIVE_LOOKAHEAD_PX: f64 = 150.0;

// ── Shared class names ──────────────────────────────────────────

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_REVEAL: &str = "reveal";
pub const CLASS_ERROR: &str = "error";
pub const CLASS_SHOW: &str = "show";

// ── Reveal ──────────────────────────────────────────────────────

/// Content selectors tagged for reveal, in tagging order.
pub const REVEAL_SELECTORS: [&str; 9] = [
    ".section-title",
    ".section-subtitle",
    ".about-image-wrapper",
    ".about-text",
    ".skill-category",
    ".project-card",
    ".timeline-item",
    ".contact-info",
    ".contact-form",
];

/// Transition delay added per element within one selector group.
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

// ── Contact form ────────────────────────────────────────────────

pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_FIELD_SELECTOR: &str = ".form-input, .form-textarea";
pub const FORM_SUCCESS_ID: &str = "form-success";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".btn-submit";

/// Suffix appended to a field name to find its error container id.
pub const ERROR_ID_SUFFIX: &str = "-error";

/// How long the "Sent!" state stays up before the form resets.
pub const FORM_RESET_MS: u32 = 5_000;

/// Minimum length, in characters, of the message field.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Submit button background while the confirmation is shown.
pub const SENT_BACKGROUND: &str = "#10b981";

/// Submit button markup while the confirmation is shown.
pub const SENT_BUTTON_HTML: &str = concat!(
    r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
    r#"<polyline points="20,6 9,17 4,12"/></svg> Sent!"#,
);

// ── Smooth scroll ───────────────────────────────────────────────

pub const FRAGMENT_LINK_SELECTOR: &str = r##"a[href^="#"]"##;

// ── Type-writer ─────────────────────────────────────────────────

pub const TYPEWRITER_PHRASES: [&str; 4] = [
    "Full Stack Developer",
    "UI/UX Designer",
    "Problem Solver",
    "Tech Enthusiast",
];

pub const TYPE_MS: u32 = 100;
pub const DELETE_MS: u32 = 50;
pub const FULL_PAUSE_MS: u32 = 2_000;
pub const EMPTY_PAUSE_MS: u32 = 500;

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

pub const DEFAULT_LOG_LEVEL: &str = "info";
