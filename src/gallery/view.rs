use super::state::GalleryState;

#[derive(Clone, Debug, PartialEq)]
pub struct ThumbnailView {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub active: bool,
}

/// Everything the overlay needs to draw, derived from a `GalleryState`.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayView {
    pub src: String,
    pub alt: String,
    pub title: String,
    pub counter: String,
    pub previous_disabled: bool,
    pub next_disabled: bool,
    pub fading: bool,
    pub thumbnails: Vec<ThumbnailView>,
}

impl OverlayView {
    /// `None` while the gallery is closed.
    pub fn project(state: &GalleryState) -> Option<Self> {
        let current = state.current()?;
        let cursor = state.cursor();
        let thumbnails = state
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| ThumbnailView {
                index,
                src: item.src.clone(),
                alt: item.alt.clone(),
                active: index == cursor,
            })
            .collect();

        Some(Self {
            src: current.src.clone(),
            alt: current.alt.clone(),
            title: current.title.clone(),
            counter: counter_text(cursor, state.len()),
            previous_disabled: !state.has_previous(),
            next_disabled: !state.has_next(),
            fading: state.is_fading(),
            thumbnails,
        })
    }

    pub fn active_thumbnail(&self) -> Option<usize> {
        self.thumbnails
            .iter()
            .find(|thumb| thumb.active)
            .map(|thumb| thumb.index)
    }
}

pub fn counter_text(cursor: usize, total: usize) -> String {
    format!("{} / {}", cursor + 1, total)
}
