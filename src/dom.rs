//! Binds the reveal and panel state machines to real elements through
//! `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    NodeList,
};

use crate::config;
use crate::error::WireError;
use crate::reveal::{Panel, PanelGroup, RevealSet, Stage};
use crate::schedule::Scheduler;

impl Stage for Element {
    fn toggle_class(&self, class: &'static str, on: bool) {
        let classes = self.class_list();
        let result = if on {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        if result.is_err() {
            debug!("could not toggle .{}", class);
        }
    }
}

/// Keeps an observer and its callback alive. Dropping it does not stop
/// observation; call [`ObserverHandle::disconnect`] for that.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ObserverHandle {
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }

    fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

/// Calls `on_hit` for each target that starts intersecting, then stops
/// watching that target.
fn one_shot_observer<F>(threshold: f64, mut on_hit: F) -> Result<ObserverHandle, WireError>
where
    F: FnMut(&Element) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                on_hit(&target);
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    Ok(ObserverHandle {
        observer,
        _callback: callback,
    })
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn by_id(document: &Document, id: &'static str) -> Result<Element, WireError> {
    document
        .get_element_by_id(id)
        .ok_or(WireError::MissingElement(id))
}

pub fn register_reveal_targets(targets: Vec<Element>) -> Result<ObserverHandle, WireError> {
    let set = Rc::new(RefCell::new(RevealSet::new()));
    let handle = {
        let set = set.clone();
        one_shot_observer(config::REVEAL_THRESHOLD, move |target| {
            set.borrow_mut().on_intersect(target, true);
        })?
    };
    for target in targets {
        handle.observe(&target);
        set.borrow_mut().register(target);
    }
    Ok(handle)
}

/// Every `.reveal` element currently in the document.
pub fn wire_reveals(document: &Document) -> Result<ObserverHandle, WireError> {
    let targets = elements(document.query_selector_all(".reveal")?);
    debug!("watching {} reveal targets", targets.len());
    register_reveal_targets(targets)
}

fn panel_from(element: &Element, delays: &[u32]) -> Result<Panel<Element>, WireError> {
    let messages = elements(element.query_selector_all(".msg")?);
    let waiting = element.query_selector(".waiting")?;
    Ok(Panel::new(messages, waiting, delays))
}

/// Animates `panels` once `trigger` is in view.
pub fn register_animation_group<S>(
    trigger: &Element,
    panels: &[(&Element, &[u32])],
    scheduler: S,
) -> Result<ObserverHandle, WireError>
where
    S: Scheduler + 'static,
{
    let panels = panels
        .iter()
        .map(|(element, delays)| panel_from(element, delays))
        .collect::<Result<Vec<_>, _>>()?;
    let mut group = PanelGroup::new(panels);

    let handle = one_shot_observer(config::PANEL_THRESHOLD, move |_| {
        if group.on_intersect(true, &scheduler) {
            debug!("chat animation started");
        }
    })?;
    handle.observe(trigger);
    Ok(handle)
}

// Single-panel form; the page itself only wires the chat pair as a group.
#[allow(dead_code)]
pub fn register_animation_panel<S>(
    panel: &Element,
    delays: &[u32],
    scheduler: S,
) -> Result<ObserverHandle, WireError>
where
    S: Scheduler + 'static,
{
    register_animation_group(panel, &[(panel, delays)], scheduler)
}

/// Both chat panels play when the "wrong" one scrolls into view; without
/// both of them nothing is scheduled.
pub fn wire_chat<S>(document: &Document, scheduler: S) -> Result<ObserverHandle, WireError>
where
    S: Scheduler + 'static,
{
    let wrong = by_id(document, "chat-wrong")?;
    let right = by_id(document, "chat-right")?;
    register_animation_group(
        &wrong,
        &[
            (&wrong, &config::WRONG_PANEL_DELAYS[..]),
            (&right, &config::RIGHT_PANEL_DELAYS[..]),
        ],
        scheduler,
    )
}
