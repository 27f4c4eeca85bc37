use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config;
use crate::effects::reveal::use_reveal;

/// Counts a stat such as `500+`, `24/7` or `99.9%` up from zero.
///
/// The first number in the text is animated; everything around it is kept.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    original: String,
    prefix: String,
    suffix: String,
    decimals: usize,
    /// `10^decimals`, checked at parse time.
    scale: u64,
    /// Target in units of `10^-decimals`.
    target: u64,
    increment: u64,
    current: u64,
}

impl CountUp {
    pub fn parse(text: &str, frames: u32) -> Option<Self> {
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let mut end = start;
        let mut seen_dot = false;
        for (offset, c) in text[start..].char_indices() {
            if c.is_ascii_digit() {
                end = start + offset + 1;
            } else if c == '.' && !seen_dot {
                seen_dot = true;
            } else {
                break;
            }
        }

        let number = &text[start..end];
        let decimals = number.split_once('.').map_or(0, |(_, frac)| frac.len());
        let scale = 10u64.checked_pow(u32::try_from(decimals).ok()?)?;
        let target: u64 = number.replace('.', "").parse().ok()?;
        let increment = target.div_ceil(u64::from(frames.max(1))).max(1);

        Some(Self {
            original: text.to_string(),
            prefix: text[..start].to_string(),
            suffix: text[end..].to_string(),
            decimals,
            scale,
            target,
            increment,
            current: 0,
        })
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }

    /// Advances one frame. Returns false once the target is reached.
    pub fn step(&mut self) -> bool {
        self.current = self.current.saturating_add(self.increment).min(self.target);
        !self.is_done()
    }

    pub fn text(&self) -> String {
        if self.is_done() {
            return self.original.clone();
        }
        let value = if self.decimals == 0 {
            self.current.to_string()
        } else {
            format!(
                "{}.{:0width$}",
                self.current / self.scale,
                self.current % self.scale,
                width = self.decimals
            )
        };
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());
    let counter = {
        let value = props.value.clone();
        use_state(move || CountUp::parse(&value, config::COUNTER_FRAMES))
    };

    {
        let counter = counter.clone();
        let running = (*counter).as_ref().map_or(false, |c| !c.is_done());
        let millis = if visible && running { config::COUNTER_FRAME_MS } else { 0 };
        use_interval(
            move || {
                if let Some(mut next) = (*counter).clone() {
                    next.step();
                    counter.set(Some(next));
                }
            },
            millis,
        );
    }

    let shown = match (*counter).as_ref() {
        Some(counter) if visible => counter.text(),
        Some(counter) => counter.prefix.clone() + "0" + &counter.suffix,
        None => props.value.to_string(),
    };

    html! {
        <div class="stat" ref={node}>
            <span class="stat-number">{shown}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<String> {
        let mut counter = CountUp::parse(text, 60).unwrap();
        let mut frames = Vec::new();
        loop {
            let more = counter.step();
            frames.push(counter.text());
            if !more {
                break;
            }
        }
        frames
    }

    #[test]
    fn counts_integers_with_suffix() {
        let frames = run("500+");
        assert_eq!(frames.first().unwrap(), "9+");
        assert_eq!(frames.last().unwrap(), "500+");
        assert_eq!(frames.len(), 56);
    }

    #[test]
    fn keeps_text_after_the_first_number() {
        let frames = run("24/7");
        assert_eq!(frames.first().unwrap(), "1/7");
        assert_eq!(frames.last().unwrap(), "24/7");
        assert!(frames.iter().all(|f| f.ends_with("/7")));
    }

    #[test]
    fn counts_decimals_in_their_own_units() {
        let frames = run("99.9%");
        assert_eq!(frames.first().unwrap(), "1.7%");
        assert_eq!(frames.last().unwrap(), "99.9%");
    }

    #[test]
    fn keeps_prefix() {
        let mut counter = CountUp::parse("$1200", 60).unwrap();
        counter.step();
        assert_eq!(counter.text(), "$20");
    }

    #[test]
    fn text_without_digits_is_not_animated() {
        assert!(CountUp::parse("Always on", 60).is_none());
    }

    #[test]
    fn zero_target_finishes_on_first_frame() {
        let mut counter = CountUp::parse("0 incidents", 60).unwrap();
        assert!(!counter.step());
        assert_eq!(counter.text(), "0 incidents");
    }

    #[test]
    fn too_many_decimals_are_not_animated() {
        assert!(CountUp::parse("0.00000000000000000001%", 60).is_none());
        let mut counter = CountUp::parse("0.0000000000000000001%", 60).unwrap();
        counter.step();
        assert_eq!(counter.text(), "0.0000000000000000001%");
    }

    #[test]
    fn target_near_u64_max_reaches_the_end() {
        let frames = run("18446744073709551615");
        assert_eq!(frames.last().unwrap(), "18446744073709551615");
        assert!(frames.len() <= 60);
    }
}
