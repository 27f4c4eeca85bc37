use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config;

/// Character-by-character reveal of a fixed string.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    chars: Vec<char>,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// First `typed` characters; counts past the end show the whole text.
    pub fn visible(&self, typed: usize) -> String {
        self.chars.iter().take(typed).collect()
    }

    pub fn is_done(&self, typed: usize) -> bool {
        typed >= self.chars.len()
    }
}

#[derive(Properties, PartialEq)]
pub struct TypingTitleProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypingTitle)]
pub fn typing_title(props: &TypingTitleProps) -> Html {
    let writer = Typewriter::new(&props.text);
    let typed = use_state(|| 0usize);
    let started = use_state(|| false);

    {
        let started = started.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TYPING_DELAY_MS, move || started.set(true));
                move || drop(timeout)
            },
            props.text.clone(),
        );
    }

    let done = writer.is_done(*typed);
    {
        let typed = typed.clone();
        let millis = if *started && !done { config::TYPING_SPEED_MS } else { 0 };
        use_interval(move || typed.set(*typed + 1), millis);
    }

    html! {
        <h1 class={classes!(props.class.clone(), "hero-title", (!done).then(|| "typing-text"))}>
            {writer.visible(*typed)}
        </h1>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_prefix_by_character() {
        let writer = Typewriter::new("Détection");
        assert_eq!(writer.visible(0), "");
        assert_eq!(writer.visible(2), "Dé");
        assert!(!writer.is_done(8));
        assert!(writer.is_done(9));
        assert_eq!(writer.visible(40), "Détection");
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let writer = Typewriter::new("");
        assert!(writer.is_done(0));
        assert_eq!(writer.visible(3), "");
    }
}
