//! Browser surface for the date bar and click wiring

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::bar::{ActiveStateMatcher, DateBar};
use super::config::DateBarConfig;
use super::render::{BarLayout, BarRenderer, BarSurface};
use crate::logging;

fn js_err(context: &str, e: JsValue) -> String {
    format!("{}: {:?}", context, e)
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, String> {
    document
        .create_element(tag)
        .map_err(|e| js_err("create element", e))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("<{}> is not an HtmlElement", tag))
}

fn apply_style(element: &HtmlElement, style: &[(&'static str, String)]) -> Result<(), String> {
    let css = element.style();
    for (property, value) in style {
        css.set_property(property, value)
            .map_err(|e| js_err(property, e))?;
    }
    Ok(())
}

pub struct WebBarSurface {
    document: Document,
    active_class: String,
    buttons: Vec<HtmlElement>,
}

impl WebBarSurface {
    pub fn new(document: Document, active_class: &str) -> Self {
        Self {
            document,
            active_class: active_class.to_string(),
            buttons: Vec::new(),
        }
    }
}

impl BarSurface for WebBarSurface {
    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn inject_style(&mut self, css: &str) -> Result<(), String> {
        let head = self.document.head().ok_or("document has no head")?;
        let style = self
            .document
            .create_element("style")
            .map_err(|e| js_err("create style", e))?;
        style.set_text_content(Some(css));
        head.append_child(&style)
            .map_err(|e| js_err("append style", e))?;
        Ok(())
    }

    fn mount_bar(&mut self, layout: &BarLayout) -> Result<(), String> {
        let body = self.document.body().ok_or("document has no body")?;
        let bar = create_html(&self.document, "div")?;
        bar.set_id(&layout.id);
        apply_style(&bar, &layout.bar_style)?;

        for label in &layout.labels {
            let button = create_html(&self.document, "button")?;
            button.set_text_content(Some(label));
            apply_style(&button, &layout.button_style)?;
            bar.append_child(&button)
                .map_err(|e| js_err("append button", e))?;
            self.buttons.push(button);
        }

        body.append_child(&bar)
            .map_err(|e| js_err("append bar", e))?;
        body.style()
            .set_property("margin-top", &format!("{}px", layout.height_px))
            .map_err(|e| js_err("margin-top", e))?;
        Ok(())
    }

    fn set_control_active(&mut self, index: usize, active: bool) -> Result<(), String> {
        let button = self
            .buttons
            .get(index)
            .ok_or_else(|| format!("no control {}", index))?;
        let classes = button.class_list();
        if active {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        }
        .map_err(|e| js_err("toggle active class", e))
    }
}

struct BarState {
    config: DateBarConfig,
    bar: DateBar,
    surface: WebBarSurface,
}

/// Mount the bar on the current page, mark the control matching the URL,
/// and wire the click handlers. No-op when a bar is already present.
pub fn install(config: DateBarConfig) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let href = window
        .location()
        .href()
        .map_err(|e| js_err("read location", e))?;

    let mut bar = DateBar::new(config.rules.clone());
    let mut surface = WebBarSurface::new(document, &config.active_class);
    let renderer = BarRenderer::new(&config);
    if !renderer.render(&mut surface, &bar)? {
        return Ok(());
    }

    if let Some(index) = ActiveStateMatcher::apply(&mut bar, &href, today()) {
        logging::info(&format!("[DateBar] Active range: {}", bar.controls()[index].rule.label));
    }
    renderer.sync(&mut surface, &bar)?;

    let buttons = surface.buttons.clone();
    let state = Rc::new(RefCell::new(BarState { config, bar, surface }));

    for (index, button) in buttons.iter().enumerate() {
        let state = Rc::clone(&state);
        let onclick = Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = on_click(&state, index) {
                logging::error(&format!("[DateBar] Click failed: {}", e));
            }
        });
        button.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        // Handlers live as long as the page
        onclick.forget();
    }

    Ok(())
}

fn on_click(state: &Rc<RefCell<BarState>>, index: usize) -> Result<(), String> {
    let location = web_sys::window().ok_or("no window")?.location();
    let href = location.href().map_err(|e| js_err("read location", e))?;

    let mut state = state.borrow_mut();
    let BarState { config, bar, surface } = &mut *state;
    let Some(target) = bar.click(index, &href, today()) else {
        return Ok(());
    };
    BarRenderer::new(config).sync(surface, bar)?;

    location
        .set_href(&target)
        .map_err(|e| js_err("navigate", e))
}
