use log::Level;

/// Fraction of a section that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.2;
/// The about section waits for a bit more of itself before counting up.
pub const ABOUT_REVEAL_THRESHOLD: f64 = 0.3;
/// Any sliver of the hero counts as on screen.
pub const HERO_VISIBLE_THRESHOLD: f64 = 0.0;

pub const TESTIMONIAL_ROTATE_MS: u32 = 5000;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEPS: u32 = 60;

pub const NEWSLETTER_CONFIRM_MS: u32 = 3000;

/// Navbar switches to its solid style past this many pixels.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Per-character stagger for the hero title.
pub const HERO_CHAR_DELAY_MS: u32 = 30;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
