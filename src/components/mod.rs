pub mod gallery_overlay;
pub mod lightbox;
