use js_sys::Array;
use thiserror::Error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, EventTarget, FormData, HtmlElement, HtmlFormElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, NodeList,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::{contact::ContactSubmission, navigation::SectionBand, reveal::RevealPolicy};

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("missing required element `{0}`")]
    MissingElement(&'static str),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}

pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());

        Self {
            target: target.clone(),
            event,
            callback,
        }
    }

    /// Keeps the listener registered for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new<F>(policy: &RevealPolicy, mut on_enter: F) -> Result<Self, SetupError>
    where
        F: FnMut(&Element, &IntersectionObserver) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_enter(&entry.target(), &observer);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(policy.threshold));
        options.set_root_margin(&policy.root_margin());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Clone, PartialEq)]
pub struct PageElements {
    pub navbar: HtmlElement,
    pub hamburger: HtmlElement,
    pub nav_menu: HtmlElement,
    pub nav_links: Vec<HtmlElement>,
    pub anchors: Vec<HtmlElement>,
    pub sections: Vec<HtmlElement>,
    pub skills: Option<HtmlElement>,
    pub project_cards: Vec<HtmlElement>,
    pub contact_form: Option<HtmlFormElement>,
    pub hero_title: Option<HtmlElement>,
}

impl PageElements {
    pub fn resolve(document: &Document) -> Result<Self, SetupError> {
        Ok(Self {
            navbar: required(document, ".navbar")?,
            hamburger: required(document, ".hamburger")?,
            nav_menu: required(document, ".nav-menu")?,
            nav_links: query_all(document, ".nav-link"),
            anchors: query_all(document, "a[href^=\"#\"]"),
            sections: query_all(document, "section[id]"),
            skills: query(document, ".skills"),
            project_cards: query_all(document, ".project-card"),
            contact_form: query(document, ".contact-form"),
            hero_title: query(document, ".hero-title"),
        })
    }
}

fn required<T: JsCast>(document: &Document, selector: &'static str) -> Result<T, SetupError> {
    query(document, selector).ok_or(SetupError::MissingElement(selector))
}

fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    document
        .query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

pub fn query_all_within(root: &Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn style_value(element: &HtmlElement, property: &str) -> String {
    element.style().get_property_value(property).unwrap_or_default()
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn href(element: &Element) -> String {
    element.get_attribute("href").unwrap_or_default()
}

pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0).max(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn measure_sections(sections: &[HtmlElement]) -> Vec<SectionBand> {
    sections
        .iter()
        .map(|section| SectionBand {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.client_height()),
        })
        .collect()
}

pub fn read_submission(form: &HtmlFormElement) -> ContactSubmission {
    let Ok(data) = FormData::new_with_form(form) else {
        return ContactSubmission::default();
    };
    let field = |name: &str| data.get(name).as_string();

    ContactSubmission::from_fields(field("name"), field("email"), field("message"))
}
