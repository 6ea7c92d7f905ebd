//! Animation helpers shared by the landing sections.
//!
//! The keyframes themselves live in each component's `<style>` block; this
//! module only covers the parts driven from Rust: scroll-linked offsets,
//! particle placement and reveal-on-enter.

use log::warn;
use rand::Rng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Shrinks the viewport by this much before a section counts as visible.
pub const REVEAL_MARGIN: &str = "-50px";

/// Gap between consecutive feature cards sliding in.
pub const STAGGER_SECS: f64 = 0.2;

pub const PARTICLE_COUNT: usize = 10;

/// Maps `value` linearly from `input` onto `output`, clamping at both ends.
pub fn scroll_transform(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return out_start;
    }
    let progress = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * progress
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    /// Left offset in percent of the hero width.
    pub x: f64,
    /// Top offset in percent of the hero height.
    pub y: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x, self.y, self.duration, self.delay
        )
    }
}

pub fn scatter_particles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|id| Particle {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            duration: rng.gen_range(5.0..10.0),
            delay: rng.gen_range(0.0..2.0),
        })
        .collect()
}

/// Current `window.scrollY`, updated on every scroll event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| 0.0);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    let win = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        scroll_y.set(win.scroll_y().unwrap_or(0.0));
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *scroll_y
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Flips to `true` the first time `node` enters the viewport and stays there.
///
/// Without IntersectionObserver support the node counts as visible right
/// away so nothing is left hidden.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = match node.cast::<Element>() {
                    Some(element) => {
                        let setter = in_view.clone();
                        observe_once(&element, move || setter.set(true))
                    }
                    None => None,
                };
                if observer.is_none() {
                    in_view.set(true);
                }

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *in_view
}

fn observe_once(
    element: &Element,
    on_enter: impl Fn() + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let entered = entries
            .iter()
            .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
        if entered {
            on_enter();
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.root_margin(REVEAL_MARGIN);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    observer.observe(element);
    Some((observer, callback))
}
