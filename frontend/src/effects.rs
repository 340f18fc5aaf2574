//! Page-wide scroll effects: reveal-on-scroll, count-up figures and
//! smooth jumps to in-page sections.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Date};
use web_sys::{
    window, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};
use yew::prelude::*;

use crate::config;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` watching every element matching a selector.
/// Disconnects when dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityObserver {
    /// `prepare` runs once per matched element, in document order, before
    /// observation starts. `on_visible` runs each time an element enters
    /// the viewport.
    pub fn observe_all<P, V>(
        selector: &str,
        options: &IntersectionObserverInit,
        mut prepare: P,
        mut on_visible: V,
    ) -> Option<Self>
    where
        P: FnMut(usize, &HtmlElement),
        V: FnMut(HtmlElement, &IntersectionObserver) + 'static,
    {
        let document = window()?.document()?;
        let elements = document.query_selector_all(selector).ok()?;

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Ok(element) = entry.target().dyn_into::<HtmlElement>() {
                        on_visible(element, &observer);
                    }
                }
            },
        );

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
                .ok()?;

        for index in 0..elements.length() {
            let Some(element) = elements
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            prepare(index as usize, &element);
            observer.observe(&element);
        }
        debug!("observing {} elements for {}", elements.length(), selector);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn reveal_transition(index: usize) -> String {
    let delay = index as u32 * config::REVEAL_STAGGER_MS;
    format!("opacity 0.6s ease {delay}ms, transform 0.6s ease {delay}ms")
}

/// Fades and slides in the page's cards as they scroll into view.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        |_| {
            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
            options.set_root_margin(config::REVEAL_ROOT_MARGIN);

            let observer = VisibilityObserver::observe_all(
                config::REVEAL_SELECTOR,
                &options,
                |index, element| {
                    let style = element.style();
                    let _ = style.set_property("opacity", "0");
                    let _ = style.set_property("transform", "translateY(30px)");
                    let _ = style.set_property("transition", &reveal_transition(index));
                },
                |element, _| {
                    let style = element.style();
                    let _ = style.set_property("opacity", "1");
                    let _ = style.set_property("transform", "translateY(0)");
                },
            );
            move || drop(observer)
        },
        (),
    );
}

/// Parses the integer a figure starts with, e.g. 29 from "29元/月".
pub fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

pub fn count_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

pub fn count_at(start: i64, end: i64, progress: f64) -> i64 {
    (progress * (end - start) as f64 + start as f64).floor() as i64
}

fn animate_count(element: HtmlElement, end: i64) {
    let original = element.text_content().unwrap_or_default();
    let started = Date::now();
    let slot: Rc<RefCell<Option<Interval>>> = Rc::default();

    let interval = {
        let slot = slot.clone();
        Interval::new(config::COUNT_TICK_MS, move || {
            let progress = count_progress(Date::now() - started, config::COUNT_DURATION_MS);
            if progress < 1.0 {
                element.set_text_content(Some(&count_at(0, end, progress).to_string()));
                return;
            }
            element.set_text_content(Some(&original));
            // The interval cannot drop itself from inside its own tick.
            let slot = slot.clone();
            Timeout::new(0, move || {
                slot.borrow_mut().take();
            })
            .forget();
        })
    };
    *slot.borrow_mut() = Some(interval);
}

/// Counts `.amount` figures up from zero the first time they are seen.
#[hook]
pub fn use_count_up() {
    use_effect_with_deps(
        |_| {
            let observer = VisibilityObserver::observe_all(
                config::COUNT_SELECTOR,
                &IntersectionObserverInit::new(),
                |_, _| {},
                |element, observer| {
                    observer.unobserve(&element);
                    let text = element.text_content().unwrap_or_default();
                    if let Some(end) = leading_integer(&text) {
                        animate_count(element, end);
                    }
                },
            );
            move || drop(observer)
        },
        (),
    );
}

pub fn section_scroll_top(offset_top: f64) -> f64 {
    offset_top - config::NAV_OFFSET
}

/// Smoothly scrolls to the element with `id`, leaving room for the nav.
/// Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(window) = window() else {
        return;
    };
    let target = window
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    match target {
        Some(element) => {
            let options = ScrollToOptions::new();
            options.set_top(section_scroll_top(element.offset_top() as f64));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        None => debug!("no section #{} to scroll to", id),
    }
}

/// Click handler for `href="#section"` links.
pub fn anchor_callback(section: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(section);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_transition_staggers_by_index() {
        assert_eq!(
            reveal_transition(0),
            "opacity 0.6s ease 0ms, transform 0.6s ease 0ms"
        );
        assert_eq!(
            reveal_transition(3),
            "opacity 0.6s ease 300ms, transform 0.6s ease 300ms"
        );
    }

    #[test]
    fn leading_integer_reads_like_parse_int() {
        assert_eq!(leading_integer("99"), Some(99));
        assert_eq!(leading_integer("  29元/月"), Some(29));
        assert_eq!(leading_integer("-5"), Some(-5));
        assert_eq!(leading_integer("免费"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn count_progress_is_clamped() {
        assert_eq!(count_progress(-10.0, 1500.0), 0.0);
        assert_eq!(count_progress(750.0, 1500.0), 0.5);
        assert_eq!(count_progress(3000.0, 1500.0), 1.0);
        assert_eq!(count_progress(10.0, 0.0), 1.0);
    }

    #[test]
    fn count_at_floors_between_endpoints() {
        assert_eq!(count_at(0, 99, 0.0), 0);
        assert_eq!(count_at(0, 99, 0.5), 49);
        assert_eq!(count_at(0, 99, 1.0), 99);
    }

    #[test]
    fn section_scroll_top_leaves_room_for_nav() {
        assert_eq!(section_scroll_top(500.0), 420.0);
        assert_eq!(section_scroll_top(40.0), -40.0);
    }
}
