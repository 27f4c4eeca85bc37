use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::gallery_overlay::GalleryOverlay;
use crate::config;
use crate::gallery::{
    DocumentHost, GalleryIntent, GalleryNavigator, ImageScan, IntentSink, Outcome,
};

type SharedNavigator = RefCell<Option<GalleryNavigator<DocumentHost>>>;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    #[prop_or(AttrValue::Static(config::GALLERY_SELECTOR))]
    pub selector: AttrValue,
}

/// Scans the page for gallery images once mounted and renders the overlay
/// while the gallery is open. Mount it after the images it should pick up.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let navigator = use_mut_ref(|| None::<GalleryNavigator<DocumentHost>>);
    let fade = use_mut_ref(|| None::<Timeout>);
    let trigger = use_force_update();

    {
        let navigator = navigator.clone();
        let fade = fade.clone();
        let trigger = trigger.clone();
        use_effect_with_deps(
            move |selector: &AttrValue| {
                let clicks = match DocumentHost::current() {
                    Some(host) => {
                        let scan = ImageScan::collect(host.document(), selector);
                        let sink = intent_sink(Rc::downgrade(&navigator), fade.clone(), trigger);
                        let clicks = scan.bind_clicks(&sink);
                        *navigator.borrow_mut() =
                            Some(GalleryNavigator::new(scan.entries, host, sink));
                        clicks
                    }
                    None => {
                        warn!("gallery: no document, lightbox disabled");
                        Vec::new()
                    }
                };

                move || {
                    drop(clicks);
                    fade.borrow_mut().take();
                    if let Some(mut navigator) = navigator.borrow_mut().take() {
                        navigator.close();
                    }
                }
            },
            props.selector.clone(),
        );
    }

    let view = navigator.borrow().as_ref().and_then(|navigator| navigator.view());
    match view {
        Some(view) => {
            let sink = intent_sink(Rc::downgrade(&navigator), fade, trigger);
            let on_intent = Callback::from(move |intent: GalleryIntent| sink(intent));
            html! { <GalleryOverlay view={view} on_intent={on_intent} /> }
        }
        None => html! {},
    }
}

/// Intents are applied on the next microtask, never inside the listener
/// that produced them, so closing can drop that listener safely.
fn intent_sink(
    navigator: Weak<SharedNavigator>,
    fade: Rc<RefCell<Option<Timeout>>>,
    trigger: UseForceUpdateHandle,
) -> IntentSink {
    Rc::new(move |intent| {
        let navigator = navigator.clone();
        let fade = fade.clone();
        let trigger = trigger.clone();
        spawn_local(async move {
            let Some(shared) = navigator.upgrade() else {
                return;
            };
            let outcome = match shared.borrow_mut().as_mut() {
                Some(navigator) => navigator.apply(intent),
                None => return,
            };

            match outcome {
                Outcome::Unchanged => return,
                Outcome::Moved { generation } => {
                    let navigator = navigator.clone();
                    let trigger = trigger.clone();
                    // Replacing the timer cancels the previous fade.
                    *fade.borrow_mut() = Some(Timeout::new(config::GALLERY_FADE_MS, move || {
                        let Some(shared) = navigator.upgrade() else {
                            return;
                        };
                        let settled = match shared.borrow_mut().as_mut() {
                            Some(navigator) => navigator.settle(generation),
                            None => false,
                        };
                        if settled {
                            trigger.force_update();
                        }
                    }));
                }
                Outcome::Opened => {}
                Outcome::Closed => {
                    fade.borrow_mut().take();
                }
            }
            trigger.force_update();
        });
    })
}
