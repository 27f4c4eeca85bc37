use std::rc::Rc;

use super::state::Direction;

/// A discrete request coming from a click, a key press or a page image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryIntent {
    Open(usize),
    Close,
    Navigate(Direction),
    GoTo(usize),
}

/// Where input handlers post their intents.
pub type IntentSink = Rc<dyn Fn(GalleryIntent)>;

pub fn intent_for_key(key: &str) -> Option<GalleryIntent> {
    match key {
        "Escape" => Some(GalleryIntent::Close),
        "ArrowLeft" => Some(GalleryIntent::Navigate(Direction::Backward)),
        "ArrowRight" => Some(GalleryIntent::Navigate(Direction::Forward)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_only_gallery_keys() {
        assert_eq!(intent_for_key("Escape"), Some(GalleryIntent::Close));
        assert_eq!(
            intent_for_key("ArrowLeft"),
            Some(GalleryIntent::Navigate(Direction::Backward))
        );
        assert_eq!(
            intent_for_key("ArrowRight"),
            Some(GalleryIntent::Navigate(Direction::Forward))
        );
        assert_eq!(intent_for_key("ArrowUp"), None);
        assert_eq!(intent_for_key("Enter"), None);
        assert_eq!(intent_for_key("escape"), None);
    }
}
