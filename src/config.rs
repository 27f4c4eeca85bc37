use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose gallery tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Page images that feed the lightbox.
pub const GALLERY_SELECTOR: &str = ".arch-img, .gallery-image";

/// How long the main image stays dimmed while it is swapped.
pub const GALLERY_FADE_MS: u32 = 150;

pub const TYPING_SPEED_MS: u32 = 50;
pub const TYPING_DELAY_MS: u32 = 1000;

/// One counter frame, roughly 60fps.
pub const COUNTER_FRAME_MS: u32 = 16;
pub const COUNTER_FRAMES: u32 = 60;

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;
pub const SCROLL_TARGET_OFFSET: f64 = 70.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
