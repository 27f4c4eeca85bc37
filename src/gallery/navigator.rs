use log::{debug, info, warn};

use super::input::{GalleryIntent, IntentSink};
use super::state::{Direction, GalleryError, GalleryState, ImageEntry};
use super::view::OverlayView;

/// Side effects an open overlay needs from its environment.
///
/// Every acquisition returns a handle that undoes it when dropped. `None`
/// means the target was missing; the navigator carries on without it.
pub trait OverlayHost {
    type Handle;

    /// Forwards Escape/ArrowLeft/ArrowRight to `sink` until the handle drops.
    fn bind_keys(&self, sink: IntentSink) -> Option<Self::Handle>;

    /// Stops the page behind the overlay from scrolling until the handle drops.
    fn lock_scroll(&self) -> Option<Self::Handle>;
}

/// Handles acquired by one `open`, released together.
pub struct OverlaySession<T> {
    handles: Vec<T>,
}

impl<T> OverlaySession<T> {
    fn acquire<H>(host: &H, sink: &IntentSink) -> Self
    where
        H: OverlayHost<Handle = T>,
    {
        let mut handles = Vec::with_capacity(2);
        match host.bind_keys(sink.clone()) {
            Some(handle) => handles.push(handle),
            None => warn!("gallery: keyboard listener unavailable, keys disabled"),
        }
        match host.lock_scroll() {
            Some(handle) => handles.push(handle),
            None => warn!("gallery: page body missing, scroll left unlocked"),
        }
        Self { handles }
    }
}

impl<T> Drop for OverlaySession<T> {
    fn drop(&mut self) {
        debug!("gallery: releasing {} overlay handles", self.handles.len());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Opened,
    /// The cursor moved; the fade for `generation` is pending.
    Moved { generation: u64 },
    Closed,
}

pub struct GalleryNavigator<H: OverlayHost> {
    state: GalleryState,
    host: H,
    sink: IntentSink,
    session: Option<OverlaySession<H::Handle>>,
}

impl<H: OverlayHost> GalleryNavigator<H> {
    pub fn new(items: Vec<ImageEntry>, host: H, sink: IntentSink) -> Self {
        info!("gallery: {} images collected", items.len());
        Self {
            state: GalleryState::new(items),
            host,
            sink,
            session: None,
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn session(&self) -> Option<&OverlaySession<H::Handle>> {
        self.session.as_ref()
    }

    pub fn view(&self) -> Option<OverlayView> {
        OverlayView::project(&self.state)
    }

    pub fn apply(&mut self, intent: GalleryIntent) -> Outcome {
        match intent {
            GalleryIntent::Open(start) => self.open(start),
            GalleryIntent::Close => self.close(),
            GalleryIntent::Navigate(direction) => self.navigate(direction),
            GalleryIntent::GoTo(index) => self.go_to(index),
        }
    }

    /// Opens at `start`, replacing any session that is already live.
    pub fn open(&mut self, start: usize) -> Outcome {
        if let Err(err) = self.state.open(start) {
            debug!("gallery: open({start}) ignored: {err}");
            return Outcome::Unchanged;
        }
        // Old handles go first so at most one keyboard listener is ever bound.
        self.session = None;
        self.session = Some(OverlaySession::acquire(&self.host, &self.sink));
        info!("gallery: opened at {} of {}", start + 1, self.state.len());
        Outcome::Opened
    }

    pub fn navigate(&mut self, direction: Direction) -> Outcome {
        Self::moved(self.state.navigate(direction), "navigate")
    }

    pub fn go_to(&mut self, index: usize) -> Outcome {
        Self::moved(self.state.go_to(index), "go_to")
    }

    /// Finishes the fade of `generation` unless a newer move replaced it.
    pub fn settle(&mut self, generation: u64) -> bool {
        self.state.settle(generation)
    }

    pub fn close(&mut self) -> Outcome {
        if !self.state.close() {
            return Outcome::Unchanged;
        }
        self.session = None;
        info!("gallery: closed");
        Outcome::Closed
    }

    fn moved(result: Result<u64, GalleryError>, op: &str) -> Outcome {
        match result {
            Ok(generation) => Outcome::Moved { generation },
            Err(err) => {
                debug!("gallery: {op} ignored: {err}");
                Outcome::Unchanged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::input::intent_for_key;
    use crate::gallery::state::sample_items;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type KeyBinding = (u32, IntentSink);

    /// In-memory host: key bindings live in a shared list until their handle drops.
    #[derive(Clone, Default)]
    struct FakeHost {
        keys: Rc<RefCell<Vec<KeyBinding>>>,
        next_id: Rc<Cell<u32>>,
        scroll_locks: Rc<Cell<u32>>,
        without_body: bool,
    }

    enum FakeHandle {
        Keys { id: u32, keys: Rc<RefCell<Vec<KeyBinding>>> },
        Scroll(Rc<Cell<u32>>),
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            match self {
                FakeHandle::Keys { id, keys } => {
                    keys.borrow_mut().retain(|(bound, _)| *bound != *id)
                }
                FakeHandle::Scroll(locks) => locks.set(locks.get() - 1),
            }
        }
    }

    impl OverlayHost for FakeHost {
        type Handle = FakeHandle;

        fn bind_keys(&self, sink: IntentSink) -> Option<FakeHandle> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.keys.borrow_mut().push((id, sink));
            Some(FakeHandle::Keys {
                id,
                keys: self.keys.clone(),
            })
        }

        fn lock_scroll(&self) -> Option<FakeHandle> {
            if self.without_body {
                return None;
            }
            self.scroll_locks.set(self.scroll_locks.get() + 1);
            Some(FakeHandle::Scroll(self.scroll_locks.clone()))
        }
    }

    impl FakeHost {
        fn press(&self, key: &str) {
            let sinks: Vec<IntentSink> =
                self.keys.borrow().iter().map(|(_, s)| s.clone()).collect();
            if let Some(intent) = intent_for_key(key) {
                for sink in sinks {
                    sink(intent);
                }
            }
        }

        fn bound_keys(&self) -> usize {
            self.keys.borrow().len()
        }
    }

    type Queue = Rc<RefCell<Vec<GalleryIntent>>>;

    fn navigator(count: usize) -> (GalleryNavigator<FakeHost>, FakeHost, Queue) {
        let host = FakeHost::default();
        let queue = Rc::new(RefCell::new(Vec::new()));
        let sink: IntentSink = {
            let queue = queue.clone();
            Rc::new(move |intent| queue.borrow_mut().push(intent))
        };
        (GalleryNavigator::new(sample_items(count), host.clone(), sink), host, queue)
    }

    fn drain(nav: &mut GalleryNavigator<FakeHost>, queue: &Queue) -> Vec<Outcome> {
        let pending: Vec<_> = queue.borrow_mut().drain(..).collect();
        pending.into_iter().map(|intent| nav.apply(intent)).collect()
    }

    #[test]
    fn escape_closes_once_after_repeated_cycles() {
        let (mut nav, host, queue) = navigator(3);
        for start in [0, 2] {
            assert_eq!(nav.open(start), Outcome::Opened);
            assert_eq!(nav.close(), Outcome::Closed);
        }
        assert_eq!(host.bound_keys(), 0);

        nav.open(1);
        host.press("Escape");
        assert_eq!(queue.borrow().as_slice(), &[GalleryIntent::Close]);

        let outcomes = drain(&mut nav, &queue);
        assert_eq!(outcomes, vec![Outcome::Closed]);
        assert!(!nav.state().is_open());
        assert_eq!(host.bound_keys(), 0);
    }

    #[test]
    fn reopening_replaces_the_session() {
        let (mut nav, host, _queue) = navigator(3);
        nav.open(0);
        nav.open(2);
        assert_eq!(host.bound_keys(), 1);
        assert_eq!(host.scroll_locks.get(), 1);
        assert_eq!(nav.state().cursor(), 2);

        nav.close();
        assert_eq!(host.bound_keys(), 0);
        assert_eq!(host.scroll_locks.get(), 0);
        assert!(nav.session().is_none());
    }

    #[test]
    fn empty_gallery_never_binds() {
        let (mut nav, host, _queue) = navigator(0);
        assert_eq!(nav.open(0), Outcome::Unchanged);
        assert!(nav.view().is_none());
        assert_eq!(host.bound_keys(), 0);
        assert_eq!(host.scroll_locks.get(), 0);
    }

    #[test]
    fn arrow_keys_move_within_bounds() {
        let (mut nav, host, queue) = navigator(3);
        nav.open(0);

        host.press("ArrowLeft");
        host.press("ArrowRight");
        host.press("ArrowRight");
        host.press("ArrowRight");
        host.press("Tab");
        let outcomes = drain(&mut nav, &queue);

        assert_eq!(
            outcomes,
            vec![
                Outcome::Unchanged,
                Outcome::Moved { generation: 1 },
                Outcome::Moved { generation: 2 },
                Outcome::Unchanged,
            ]
        );
        assert_eq!(nav.state().cursor(), 2);
        assert!(nav.view().unwrap().next_disabled);
    }

    #[test]
    fn rapid_moves_render_last_target() {
        let (mut nav, _host, _queue) = navigator(5);
        nav.open(0);
        let mut generations = Vec::new();
        for index in [4, 1, 3] {
            if let Outcome::Moved { generation } = nav.go_to(index) {
                generations.push(generation);
            }
        }
        for generation in &generations[..2] {
            assert!(!nav.settle(*generation));
        }
        assert!(nav.settle(generations[2]));

        let view = nav.view().unwrap();
        assert!(!view.fading);
        assert_eq!(view.counter, "4 / 5");
        assert_eq!(view.active_thumbnail(), Some(3));
    }

    #[test]
    fn missing_body_is_not_fatal() {
        let host = FakeHost {
            without_body: true,
            ..FakeHost::default()
        };
        let sink: IntentSink = Rc::new(|_| {});
        let mut nav = GalleryNavigator::new(sample_items(2), host.clone(), sink);
        assert_eq!(nav.open(1), Outcome::Opened);
        assert!(nav.session().is_some());
        assert_eq!(host.bound_keys(), 1);
        assert_eq!(host.scroll_locks.get(), 0);
    }

    #[test]
    fn intents_are_ignored_while_closed() {
        let (mut nav, _host, _queue) = navigator(3);
        assert_eq!(nav.apply(GalleryIntent::Navigate(Direction::Forward)), Outcome::Unchanged);
        assert_eq!(nav.apply(GalleryIntent::GoTo(1)), Outcome::Unchanged);
        assert_eq!(nav.apply(GalleryIntent::Close), Outcome::Unchanged);
        assert_eq!(nav.apply(GalleryIntent::Open(9)), Outcome::Unchanged);
        assert_eq!(nav.apply(GalleryIntent::Open(1)), Outcome::Opened);
    }
}
