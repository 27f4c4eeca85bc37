//! Image lightbox: a cursor over the page's images, an overlay that mirrors
//! it, and the listeners that drive it.

pub mod dom;
pub mod input;
pub mod navigator;
pub mod state;
pub mod view;

pub use dom::{DocumentHost, ImageScan};
pub use input::{intent_for_key, GalleryIntent, IntentSink};
pub use navigator::{GalleryNavigator, OverlayHost, Outcome};
pub use state::{Direction, GalleryError, GalleryState, ImageEntry};
pub use view::{OverlayView, ThumbnailView};
