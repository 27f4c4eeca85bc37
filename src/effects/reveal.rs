use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Becomes true the first time `node` scrolls into view and stays true.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let element = node.cast::<web_sys::Element>();
                let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if entry.is_intersecting() {
                                visible.set(true);
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                );

                let init = IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
                init.set_root_margin(config::REVEAL_ROOT_MARGIN);

                let observer = match (element, IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &init,
                )) {
                    (Some(element), Ok(observer)) => {
                        observer.observe(&element);
                        Some(observer)
                    }
                    (None, _) => None,
                    (Some(_), Err(_)) => {
                        log::warn!("reveal: IntersectionObserver unavailable");
                        None
                    }
                };

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            node,
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Position among siblings; delays the entrance by `index * 0.1s`.
    #[prop_or_default]
    pub stagger: Option<usize>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps content that fades up once it enters the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    let style = props
        .stagger
        .map(|index| format!("animation-delay: {:.1}s;", index as f64 * 0.1));
    let class = classes!(
        props.class.clone(),
        "reveal",
        visible.then(|| "active"),
        (visible && props.stagger.is_some()).then(|| "animate-fade-in-up")
    );

    html! {
        <div ref={node} id={props.id.clone()} class={class} style={style}>
            { for props.children.iter() }
        </div>
    }
}
