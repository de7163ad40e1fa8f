use markwave_core::{Markup, MarkupConfig, PresentationUnit};
use markwave_render::{to_html, to_plain_text};
use wasm_bindgen::prelude::*;

/// Converts any `Display`-implementing error into `JsError`.
///
/// We cannot use `impl From<E> for JsError` due to the orphan rule (both
/// traits are from external crates).
fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

/// Renders markup with the default delimiters into presentation units.
#[wasm_bindgen(js_name = renderMarkup)]
pub fn render_markup(input: &str) -> Result<JsValue, JsError> {
    let units = markwave_core::render_markup(input);
    serde_wasm_bindgen::to_value(&units).map_err(to_js_error)
}

#[wasm_bindgen]
pub struct MarkupRenderer {
    markup: Markup,
}

#[wasm_bindgen]
impl MarkupRenderer {
    /// Creates a renderer, optionally from a JSON (or JSONC) config string.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<MarkupRenderer, JsError> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => MarkupConfig::from_json(&json).map_err(to_js_error)?,
            None => MarkupConfig::new(),
        };
        let markup = Markup::new(&config).map_err(to_js_error)?;

        Ok(Self { markup })
    }

    fn units(&self, input: &str) -> Vec<PresentationUnit> {
        self.markup.render(input)
    }

    /// Renders markup into presentation units as JavaScript objects.
    #[wasm_bindgen]
    pub fn render(&self, input: &str) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.units(input)).map_err(to_js_error)
    }

    /// Renders markup into presentation units as a JSON string.
    #[wasm_bindgen(js_name = renderJson)]
    pub fn render_json(&self, input: &str) -> Result<String, JsError> {
        serde_json::to_string(&self.units(input)).map_err(to_js_error)
    }

    /// Renders markup into an HTML fragment.
    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self, input: &str) -> String {
        to_html(&self.units(input))
    }

    /// Renders markup into plain text with styling removed.
    #[wasm_bindgen(js_name = toPlainText)]
    pub fn to_plain_text(&self, input: &str) -> String {
        to_plain_text(&self.units(input))
    }
}

impl Default for MarkupRenderer {
    fn default() -> Self {
        Self {
            markup: Markup::default(),
        }
    }
}
