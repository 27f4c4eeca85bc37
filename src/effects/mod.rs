//! Decorative page effects. None of them share state with each other or
//! with the gallery.

pub mod counter;
pub mod reveal;
pub mod scroll;
pub mod typing;
