use thiserror::Error;

/// One image collected from the page at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageEntry {
    pub src: String,
    pub alt: String,
    pub title: String,
}

impl ImageEntry {
    /// Builds an entry, using the alt text as title when none is given.
    pub fn new(src: impl Into<String>, alt: impl Into<String>, title: Option<String>) -> Self {
        let alt = alt.into();
        let title = title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| alt.clone());
        Self {
            src: src.into(),
            alt,
            title,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("gallery has no images")]
    Empty,
    #[error("gallery is closed")]
    Closed,
    #[error("index {index} out of range for {len} images")]
    OutOfRange { index: usize, len: usize },
    #[error("already at the {0:?} edge")]
    AtEdge(Direction),
}

/// Cursor and open flag over an immutable list of images.
///
/// `cursor < items.len()` holds whenever `is_open` is true.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    items: Vec<ImageEntry>,
    cursor: usize,
    is_open: bool,
    generation: u64,
    fading: bool,
}

impl GalleryState {
    pub fn new(items: Vec<ImageEntry>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[ImageEntry] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current(&self) -> Option<&ImageEntry> {
        if self.is_open {
            self.items.get(self.cursor)
        } else {
            None
        }
    }

    pub fn has_previous(&self) -> bool {
        self.is_open && self.cursor > 0
    }

    pub fn has_next(&self) -> bool {
        self.is_open && self.cursor + 1 < self.items.len()
    }

    /// Bumped by every successful `go_to`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    /// Opens at `start`. Reopening while open just moves the cursor; the
    /// caller owns replacing the rendered surface.
    pub fn open(&mut self, start: usize) -> Result<(), GalleryError> {
        self.check_index(start)?;
        self.cursor = start;
        self.is_open = true;
        self.fading = false;
        Ok(())
    }

    pub fn navigate(&mut self, direction: Direction) -> Result<u64, GalleryError> {
        if !self.is_open {
            return Err(GalleryError::Closed);
        }
        let target = self
            .cursor
            .checked_add_signed(direction.step())
            .filter(|index| *index < self.items.len())
            .ok_or(GalleryError::AtEdge(direction))?;
        self.go_to(target)
    }

    /// Moves the cursor and starts a fade. Returns the new generation.
    pub fn go_to(&mut self, index: usize) -> Result<u64, GalleryError> {
        if !self.is_open {
            return Err(GalleryError::Closed);
        }
        self.check_index(index)?;
        self.cursor = index;
        self.generation += 1;
        self.fading = true;
        Ok(self.generation)
    }

    /// Ends the fade started by `generation`. Stale generations are ignored.
    pub fn settle(&mut self, generation: u64) -> bool {
        if self.fading && generation == self.generation {
            self.fading = false;
            true
        } else {
            false
        }
    }

    /// Returns whether the gallery was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open;
        self.is_open = false;
        self.fading = false;
        was_open
    }

    fn check_index(&self, index: usize) -> Result<(), GalleryError> {
        if self.items.is_empty() {
            return Err(GalleryError::Empty);
        }
        if index >= self.items.len() {
            return Err(GalleryError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_items(count: usize) -> Vec<ImageEntry> {
    (0..count)
        .map(|i| {
            ImageEntry::new(
                format!("img/slide-{i}.png"),
                format!("Slide {i}"),
                Some(format!("Title {i}")),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_falls_back_to_alt() {
        let entry = ImageEntry::new("a.png", "Deployment", None);
        assert_eq!(entry.title, "Deployment");
        let entry = ImageEntry::new("a.png", "Deployment", Some("  ".into()));
        assert_eq!(entry.title, "Deployment");
        let entry = ImageEntry::new("a.png", "Deployment", Some("Pipeline".into()));
        assert_eq!(entry.title, "Pipeline");
    }

    #[test]
    fn open_sets_cursor_for_every_valid_start() {
        for start in 0..5 {
            let mut state = GalleryState::new(sample_items(5));
            state.open(start).unwrap();
            assert!(state.is_open());
            assert_eq!(state.cursor(), start);
        }
    }

    #[test]
    fn open_rejects_empty_and_out_of_range() {
        let mut empty = GalleryState::new(Vec::new());
        assert_eq!(empty.open(0), Err(GalleryError::Empty));
        assert!(!empty.is_open());

        let mut state = GalleryState::new(sample_items(3));
        assert_eq!(
            state.open(3),
            Err(GalleryError::OutOfRange { index: 3, len: 3 })
        );
        assert!(!state.is_open());
    }

    #[test]
    fn navigate_stops_at_both_edges() {
        let mut state = GalleryState::new(sample_items(3));
        state.open(0).unwrap();
        assert_eq!(
            state.navigate(Direction::Backward),
            Err(GalleryError::AtEdge(Direction::Backward))
        );
        assert_eq!(state.cursor(), 0);

        state.go_to(2).unwrap();
        assert_eq!(
            state.navigate(Direction::Forward),
            Err(GalleryError::AtEdge(Direction::Forward))
        );
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn transitions_are_ignored_while_closed() {
        let mut state = GalleryState::new(sample_items(3));
        assert_eq!(state.go_to(1), Err(GalleryError::Closed));
        assert_eq!(state.navigate(Direction::Forward), Err(GalleryError::Closed));
        assert_eq!(state.cursor(), 0);
        assert!(!state.close());
    }

    #[test]
    fn go_to_out_of_range_keeps_cursor() {
        let mut state = GalleryState::new(sample_items(3));
        state.open(1).unwrap();
        assert!(state.go_to(7).is_err());
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn stale_settle_does_not_end_newer_fade() {
        let mut state = GalleryState::new(sample_items(4));
        state.open(0).unwrap();
        let first = state.go_to(1).unwrap();
        let second = state.go_to(3).unwrap();
        assert!(!state.settle(first));
        assert!(state.is_fading());
        assert!(state.settle(second));
        assert!(!state.is_fading());
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn single_image_has_no_neighbours() {
        let mut state = GalleryState::new(sample_items(1));
        state.open(0).unwrap();
        assert!(!state.has_previous());
        assert!(!state.has_next());
    }
}
