// src/hooks.rs
use std::cell::Cell;
use std::rc::Rc;

use chrono::NaiveDate;
use gloo::console::log;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};
use yew::prelude::*;

use crate::avatar::avatars;
use crate::config::{RevealPolicy, HASH_SCROLL_DELAY_MS};
use crate::scroll::{scroll_target, NavTracker, ScrollFrame, Section};

/// (scrollY, innerHeight) in CSS pixels.
fn viewport_metrics(window: &Window) -> (f64, f64) {
    let offset = window.scroll_y().unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (offset, height)
}

pub fn today() -> NaiveDate {
    let d = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(d.get_full_year() as i32, d.get_month() + 1, d.get_date())
        .unwrap_or_default()
}

/// Smooth-scroll the landing page to where `section` is fully revealed.
pub fn scroll_to_section(section: Section) {
    let Some(window) = web_sys::window() else { return };
    let (_, height) = viewport_metrics(&window);
    let opts = ScrollToOptions::new();
    opts.set_top(scroll_target(section, height, &RevealPolicy::default()));
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Tracks window scroll and resize, recomputing the reveal frame each event.
#[hook]
pub fn use_scroll_frame() -> ScrollFrame {
    let frame = use_state_eq(ScrollFrame::default);
    {
        let frame = frame.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            if let Some(window) = web_sys::window() {
                let tracker = Cell::new(NavTracker::default());
                let last = Rc::new(Cell::new(ScrollFrame::default()));
                let policy = RevealPolicy::default();

                let on_scroll = {
                    let window = window.clone();
                    let last = last.clone();
                    let frame = frame.clone();
                    move || {
                        let (offset, height) = viewport_metrics(&window);
                        let mut t = tracker.get();
                        let next = ScrollFrame::observe(&mut t, offset, height, &policy);
                        tracker.set(t);
                        last.set(next);
                        frame.set(next);
                    }
                };
                // Resize never moves the tracker; only scrolling decides the nav.
                let on_resize = {
                    let window = window.clone();
                    move || {
                        let (offset, height) = viewport_metrics(&window);
                        let next = last.get().reflow(offset, height, &policy);
                        last.set(next);
                        frame.set(next);
                    }
                };

                on_scroll();
                listeners.push(EventListener::new(&window, "scroll", move |_| on_scroll()));
                listeners.push(EventListener::new(&window, "resize", move |_| on_resize()));
            }
            move || drop(listeners)
        });
    }
    *frame
}

/// Honour `/#classes`, `/#schedule`, `/#pricing` once the page has mounted.
#[hook]
pub fn use_hash_navigation() {
    use_effect_with((), move |_| {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        let timeout = Section::from_anchor(&hash).map(|section| {
            log!(format!("hash navigation to #{}", section.id()));
            Timeout::new(HASH_SCROLL_DELAY_MS, move || scroll_to_section(section))
        });
        move || drop(timeout)
    });
}

/// Current profile picture, kept in sync with same-tab writes and other tabs.
#[hook]
pub fn use_profile_picture() -> Option<String> {
    let picture = use_state_eq(|| avatars().current());
    {
        let picture = picture.clone();
        use_effect_with((), move |_| {
            let store = avatars();
            let subscription = store.subscribe(Callback::from(move |v| picture.set(v)));
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "storage", move |event| {
                    let Some(event) = event.dyn_ref::<web_sys::StorageEvent>() else {
                        return;
                    };
                    store.apply_storage_event(event.key().as_deref(), event.new_value());
                })
            });
            move || {
                drop(listener);
                drop(subscription);
            }
        });
    }
    (*picture).clone()
}
