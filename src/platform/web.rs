//! Browser Platform Implementation
//!
//! Provides platform support for the lab page via web-sys:
//! - DOM lines in `#terminal-output` for output
//! - `#terminal-prompt` kept in sync with the working directory
//! - `keydown` on `#terminal-input` for input
//! - `script[data-lab]` attributes for the session config

use super::{OutputSink, PlatformError, PlatformResult};
use crate::config::{ConfigError, SessionConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent};

const OUTPUT_ID: &str = "terminal-output";
const PROMPT_ID: &str = "terminal-prompt";
const INPUT_ID: &str = "terminal-input";
const LINE_CLASS: &str = "terminal-line";
const PROMPT_CLASS: &str = "terminal-prompt";

fn dom_err(e: JsValue) -> PlatformError {
    PlatformError::Dom(format!("{:?}", e))
}

/// Output sink that appends `<pre>` lines to the page
pub struct DomSink {
    document: Document,
    output: Element,
    prompt_el: Option<Element>,
    prompt: String,
}

impl DomSink {
    /// Find the output element. The prompt element is optional.
    pub fn attach(document: &Document) -> PlatformResult<Self> {
        let output = document.get_element_by_id(OUTPUT_ID).ok_or_else(|| {
            PlatformError::InitFailed(format!("missing #{}", OUTPUT_ID))
        })?;
        Ok(Self {
            document: document.clone(),
            output,
            prompt_el: document.get_element_by_id(PROMPT_ID),
            prompt: String::new(),
        })
    }

    fn append_line(&self, text: &str, styled: bool) -> PlatformResult<()> {
        let pre = self.document.create_element("pre").map_err(dom_err)?;
        pre.class_list().add_1(LINE_CLASS).map_err(dom_err)?;

        if styled {
            // Text nodes only: typed input is never parsed as HTML
            let span = self.document.create_element("span").map_err(dom_err)?;
            span.class_list().add_1(PROMPT_CLASS).map_err(dom_err)?;
            span.set_text_content(Some(self.prompt.as_str()));
            pre.append_child(&span).map_err(dom_err)?;
            let rest = self.document.create_text_node(&format!(" {}", text));
            pre.append_child(&rest).map_err(dom_err)?;
        } else {
            pre.set_text_content(Some(text));
        }

        self.output.append_child(&pre).map_err(dom_err)?;
        // Scroll to the bottom
        self.output.set_scroll_top(self.output.scroll_height());
        Ok(())
    }
}

impl OutputSink for DomSink {
    fn emit_line(&mut self, text: &str, styled: bool) {
        if let Err(e) = self.append_line(text, styled) {
            crate::console_log!("[dom] Failed to append line: {}", e);
        }
    }

    fn clear(&mut self) {
        self.output.set_inner_html("");
    }

    fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
        if let Some(el) = &self.prompt_el {
            el.set_text_content(Some(prompt));
        }
    }
}

/// Read the session config from the page's `script[data-lab]` element.
///
/// `data-lab` carries the capability token; an optional `data-filesystem`
/// carries a JSON tree for the home directory.
pub fn read_config(document: &Document) -> Result<SessionConfig, ConfigError> {
    let script = document.query_selector("script[data-lab]").ok().flatten();
    let lab = script.as_ref().and_then(|s| s.get_attribute("data-lab"));
    let config = SessionConfig::from_lab(lab.as_deref());

    match script.and_then(|s| s.get_attribute("data-filesystem")) {
        Some(json) => config.with_tree_json(&json),
        None => Ok(config),
    }
}

/// Call `on_submit` with the input field's text whenever Enter is pressed.
/// The field is emptied after each submission.
pub fn bind_input<F>(document: &Document, mut on_submit: F) -> PlatformResult<()>
where
    F: FnMut(String) + 'static,
{
    let input: HtmlInputElement = document
        .get_element_by_id(INPUT_ID)
        .ok_or_else(|| PlatformError::InitFailed(format!("missing #{}", INPUT_ID)))?
        .dyn_into()
        .map_err(|_| PlatformError::InitFailed(format!("#{} is not an input", INPUT_ID)))?;

    let field = input.clone();
    let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if event.key() != "Enter" {
            return;
        }
        event.prevent_default();
        let line = field.value();
        field.set_value("");
        on_submit(line);
    }) as Box<dyn FnMut(_)>);

    input
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    closure.forget(); // Leak intentionally - lives for page lifetime

    Ok(())
}
