use gloo::console;

use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{Document, HtmlElement, HtmlInputElement, Window};
use yew::virtual_dom::VNode;
use yew::{html, Html};

use crate::constants::{CSS_ALERT_DANGER, CSS_PAGE_HEADER};

/// Gets the equivalent of `window()` in javascript
pub fn window() -> Window {
    web_sys::window().expect_throw("Unable to retrieve window")
}

/// Gets the equivalent of `window().document()` in javascript
pub fn document() -> Document {
    window()
        .document()
        .expect_throw("Unable to retrieve document")
}

/// Gets the equivalent of `document().body()` in javascript
pub fn body() -> HtmlElement {
    document().body().expect_throw("Unable to retrieve body")
}

/// If an element with an id attribute matching 'target' exists, focus it.
pub fn autofocus(target: &str) {
    let doc = document();
    if let Some(element) = doc.get_element_by_id(target) {
        if let Ok(htmlelement) = element.dyn_into::<web_sys::HtmlElement>() {
            if htmlelement.focus().is_err() {
                console::warn!(format!("failed to focus element with id '{}'", target).as_str());
            }
        }
    }
}

pub fn get_inputelement_by_id(id: &str) -> Option<HtmlInputElement> {
    document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok())
}

pub fn get_value_from_element_id(id: &str) -> Option<String> {
    get_inputelement_by_id(id).map(|element| element.value())
}

/// Returns the footer node for the UI
pub fn do_footer() -> VNode {
    html! {
        <footer class="footer mt-auto py-3 bg-light text-end">
            <div class="container">
                <span class="text-muted">{ "Powered by " }<a href="https://smeltproject.org">{ "Smelt" }</a></span>
            </div>
        </footer>
    }
}

pub fn do_alert_error(alert_title: &str, alert_message: Option<&str>, dismissable: bool) -> Html {
    html! {
    <div class="container">
        <div class="row justify-content-md-center">
            <div class={CSS_ALERT_DANGER} role="alert">
                <p><strong>{ alert_title }</strong></p>
                if let Some(value) = alert_message {
                    <p>{ value }</p>
                }
                if dismissable {
                    <button type="button" class="btn btn-close" data-dismiss="alert" aria-label="Close"></button>
                }
            </div>
        </div>
    </div>
    }
}

pub fn do_page_header(page_title: &str) -> Html {
    html! {
        <div class={CSS_PAGE_HEADER}>
            <h2>{ page_title }</h2>
        </div>
    }
}

/// The accessible loading state: a spinner with `role="status"` so screen
/// readers announce it instead of an empty table.
pub fn loading_spinner(label: &str) -> Html {
    html! {
      <div class="vert-center">
        <div class="spinner-border text-dark" role="status">
          <span class="visually-hidden">{ label }</span>
        </div>
      </div>
    }
}
