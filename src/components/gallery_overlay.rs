use yew::prelude::*;

use crate::gallery::{Direction, GalleryIntent, OverlayView};

#[derive(Properties, PartialEq)]
pub struct GalleryOverlayProps {
    pub view: OverlayView,
    pub on_intent: Callback<GalleryIntent>,
}

#[function_component(GalleryOverlay)]
pub fn gallery_overlay(props: &GalleryOverlayProps) -> Html {
    let GalleryOverlayProps { view, on_intent } = props;

    let emit = |intent: GalleryIntent| {
        let on_intent = on_intent.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_intent.emit(intent);
        })
    };

    let container_class = classes!(
        "gallery-image-container",
        view.fading.then(|| "fading")
    );

    html! {
        <div id="galleryModal" class="gallery-modal">
            <style>{GALLERY_CSS}</style>
            <div class="gallery-overlay" onclick={emit(GalleryIntent::Close)}></div>
            <div class="gallery-content">
                <button
                    class="gallery-close"
                    aria-label="Close"
                    onclick={emit(GalleryIntent::Close)}
                >
                    {"×"}
                </button>
                <div class="gallery-main">
                    <button
                        class="gallery-nav gallery-prev"
                        aria-label="Previous image"
                        disabled={view.previous_disabled}
                        onclick={emit(GalleryIntent::Navigate(Direction::Backward))}
                    >
                        <i class="fas fa-chevron-left"></i>
                    </button>
                    <div class={container_class}>
                        <img
                            src={view.src.clone()}
                            alt={view.alt.clone()}
                            class="gallery-current-image"
                        />
                        <div class="gallery-info">
                            <h3>{view.title.clone()}</h3>
                            <p>{view.counter.clone()}</p>
                        </div>
                    </div>
                    <button
                        class="gallery-nav gallery-next"
                        aria-label="Next image"
                        disabled={view.next_disabled}
                        onclick={emit(GalleryIntent::Navigate(Direction::Forward))}
                    >
                        <i class="fas fa-chevron-right"></i>
                    </button>
                </div>
                <div class="gallery-thumbnails">
                    {
                        view.thumbnails.iter().map(|thumb| {
                            let class = classes!("gallery-thumb", thumb.active.then(|| "active"));
                            html! {
                                <img
                                    key={thumb.index}
                                    src={thumb.src.clone()}
                                    alt={thumb.alt.clone()}
                                    class={class}
                                    onclick={emit(GalleryIntent::GoTo(thumb.index))}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}

const GALLERY_CSS: &str = r#"
    @keyframes galleryFadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    .gallery-modal {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 3000;
        animation: galleryFadeIn 0.3s ease;
    }
    .gallery-overlay {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.95);
    }
    .gallery-content {
        width: 95%;
        max-width: 1200px;
        height: 90%;
        display: flex;
        flex-direction: column;
        position: relative;
    }
    .gallery-close {
        position: absolute;
        top: -50px;
        right: 0;
        background: none;
        border: none;
        color: white;
        font-size: 2rem;
        cursor: pointer;
        z-index: 10;
        padding: 10px;
        transition: opacity 0.3s ease;
    }
    .gallery-close:hover {
        opacity: 0.7;
    }
    .gallery-main {
        flex: 1;
        display: flex;
        align-items: center;
        gap: 20px;
    }
    .gallery-nav {
        background: rgba(255, 255, 255, 0.1);
        border: none;
        color: white;
        padding: 15px;
        border-radius: 50%;
        cursor: pointer;
        transition: all 0.3s ease;
        backdrop-filter: blur(10px);
    }
    .gallery-nav:hover:not(:disabled) {
        background: rgba(255, 255, 255, 0.2);
        transform: scale(1.1);
    }
    .gallery-nav:disabled {
        opacity: 0.3;
        cursor: not-allowed;
    }
    .gallery-image-container {
        flex: 1;
        display: flex;
        flex-direction: column;
        align-items: center;
        transition: opacity 0.15s ease;
    }
    .gallery-image-container.fading {
        opacity: 0.5;
    }
    .gallery-current-image {
        max-width: 100%;
        max-height: 70vh;
        object-fit: contain;
        border-radius: 8px;
        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.5);
    }
    .gallery-info {
        text-align: center;
        color: white;
        margin-top: 20px;
    }
    .gallery-info h3 {
        margin: 0 0 5px 0;
        font-size: 1.2rem;
    }
    .gallery-info p {
        margin: 0;
        opacity: 0.7;
    }
    .gallery-thumbnails {
        display: flex;
        gap: 10px;
        justify-content: center;
        margin-top: 20px;
        overflow-x: auto;
        padding: 10px 0;
    }
    .gallery-thumb {
        width: 60px;
        height: 40px;
        object-fit: cover;
        border-radius: 4px;
        cursor: pointer;
        opacity: 0.6;
        transition: all 0.3s ease;
        border: 2px solid transparent;
    }
    .gallery-thumb:hover {
        opacity: 0.8;
        transform: scale(1.1);
    }
    .gallery-thumb.active {
        opacity: 1;
        border-color: #4A90E2;
        transform: scale(1.1);
    }
    @media (max-width: 768px) {
        .gallery-content {
            width: 100%;
            height: 100%;
            padding: 20px;
        }
        .gallery-main {
            flex-direction: column;
            gap: 10px;
        }
        .gallery-nav {
            padding: 10px;
        }
        .gallery-thumbnails {
            gap: 5px;
        }
        .gallery-thumb {
            width: 40px;
            height: 30px;
        }
    }
"#;
