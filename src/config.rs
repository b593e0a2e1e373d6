//! Timing knobs for the whole experience.

/// How long the confetti celebration runs after acceptance.
pub const CELEBRATION_MS: f64 = 5_000.0;

/// Cadence of confetti emissions during the celebration window.
pub const BURST_INTERVAL_MS: u32 = 250;

/// Lifetime of the heart burst pulse behind the advance button.
pub const HEART_BURST_MS: u32 = 1_000;

/// Screen cross-fade duration, in seconds.
pub const SCREEN_FADE_SECS: f64 = 0.5;

/// Vertical slide distance of the screen cross-fade, in px.
pub const SCREEN_FADE_SLIDE_PX: f64 = 20.0;
