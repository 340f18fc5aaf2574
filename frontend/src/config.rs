use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Scroll offset past which the nav switches to its opaque style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Height of the fixed nav, subtracted when jumping to a section.
pub const NAV_OFFSET: f64 = 80.0;

pub const THEME_STORAGE_KEY: &str = "mcp-site-theme";

pub const REVEAL_SELECTOR: &str = ".feature-card, .service-category, .pricing-card, .highlight-card";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 100;

pub const COUNT_SELECTOR: &str = ".amount";
pub const COUNT_DURATION_MS: f64 = 1500.0;
pub const COUNT_TICK_MS: u32 = 16;

pub const CARD_PRESS_MS: u32 = 150;
pub const PHONE_POP_MS: u32 = 300;
pub const HERO_DELAYS_MS: [u32; 3] = [200, 400, 600];
pub const MESSAGE_FIRST_DELAY_MS: u32 = 1000;
pub const MESSAGE_STAGGER_MS: u32 = 800;
