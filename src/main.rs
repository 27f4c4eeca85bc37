use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use siem_central::config;
use siem_central::effects::scroll::{
    active_section, is_scrolled, measure_sections, scroll_to_section,
};
use siem_central::pages::landing::Landing;

const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("technologies", "Technologies"),
    ("architecture", "Architecture"),
    ("team", "Team"),
];

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to SIEM Central"}</Link<Route>>
                </div>
            }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled_state = use_state(|| false);
    let active = use_state(|| None::<String>);

    {
        let is_scrolled_state = is_scrolled_state.clone();
        let active = active.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    is_scrolled_state.set(is_scrolled(scroll_y));
                    if let Some(document) = window.document() {
                        let sections = measure_sections(&document);
                        active.set(active_section(&sections, scroll_y).map(str::to_string));
                    }
                });

                if window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .is_err()
                {
                    log::warn!("nav: could not attach scroll listener");
                }

                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                })
            } else {
                Box::new(|| ())
            };
            move || destructor()
        }, ());
    }

    {
        // Collapse the mobile menu when the viewport grows past the breakpoint.
        let menu_open = menu_open.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                gloo_events::EventListener::new(&window, "resize", move |_| {
                    let wide = web_sys::window()
                        .and_then(|w| w.inner_width().ok())
                        .and_then(|width| width.as_f64())
                        .map_or(false, |width| width > 768.0);
                    if wide {
                        menu_open.set(false);
                    }
                })
            });
            move || drop(listener)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-menu active"
    } else {
        "nav-menu"
    };

    html! {
        <nav id="navbar" class={classes!("top-nav", (*is_scrolled_state).then(|| "scrolled"))}>
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"SIEM Central"}
                </Link<Route>>

                <button
                    id="nav-toggle"
                    class={classes!("burger-menu", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div id="nav-menu" class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(id, label)| {
                            let menu_open = menu_open.clone();
                            let target = id.to_string();
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                menu_open.set(false);
                                scroll_to_section(&target);
                            });
                            let is_active = active.as_deref() == Some(*id);
                            html! {
                                <a
                                    href={format!("#{}", id)}
                                    class={classes!("nav-link", is_active.then(|| "active"))}
                                    onclick={onclick}
                                >
                                    {*label}
                                </a>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </nav>
    }
}

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 1000;
        background: rgba(255, 255, 255, 0.95);
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(255, 255, 255, 0.98);
        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);
    }
    .nav-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem 2rem;
    }
    .nav-menu {
        display: flex;
        gap: 1.5rem;
    }
    .nav-link.active {
        color: #018abe;
        font-weight: bold;
    }
    .burger-menu {
        display: none;
    }
    @media (max-width: 768px) {
        .burger-menu {
            display: block;
        }
        .nav-menu {
            display: none;
            flex-direction: column;
        }
        .nav-menu.active {
            display: flex;
        }
    }
"#;


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting SIEM Central");
    yew::Renderer::<App>::new().render();
}
