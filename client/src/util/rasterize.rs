//! Template capture through the global `html2canvas`.

use async_trait::async_trait;
use js_sys::{Object, Promise, Reflect};
use poster::error::CapabilityError;
use poster::export::{CaptureOverrides, CaptureRequest, Rasterizer, RenderOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

use crate::state::templates::TemplateRefs;
use crate::util::browser::describe_js_error;
use crate::util::view::parse_px;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = html2canvas, catch)]
    fn html2canvas(element: &HtmlElement, options: &JsValue) -> Result<Promise, JsValue>;
}

fn render_error(e: JsValue) -> CapabilityError {
    CapabilityError::Render(describe_js_error(&e))
}

/// Captures mounted templates with `html2canvas`.
pub struct Html2Canvas {
    refs: TemplateRefs,
}

impl Html2Canvas {
    pub fn new(refs: TemplateRefs) -> Self {
        Self { refs }
    }
}

#[async_trait(?Send)]
impl Rasterizer for Html2Canvas {
    async fn render(&self, request: &CaptureRequest) -> Result<String, CapabilityError> {
        let live = self
            .refs
            .element(request.template_value)
            .ok_or_else(|| CapabilityError::Render(format!("{} is not mounted", request.dom_id)))?;
        let overrides = live_size(&live)?;

        // Runs on html2canvas' cloned document only; the live poster keeps its preview styling.
        let dom_id = request.dom_id.clone();
        let onclone = Closure::<dyn FnMut(Document)>::new(move |cloned: Document| {
            apply_overrides(&cloned, &dom_id, &overrides);
        });

        let options = build_options(&request.options, &onclone).map_err(render_error)?;
        let promise = html2canvas(&live, &options).map_err(render_error)?;
        let canvas = JsFuture::from(promise)
            .await
            .map_err(render_error)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| CapabilityError::Render("html2canvas did not return a canvas".to_owned()))?;
        drop(onclone);

        canvas.to_data_url_with_type("image/png").map_err(render_error)
    }
}

/// Computed layout size of the live template, ignoring preview transforms.
fn live_size(live: &HtmlElement) -> Result<CaptureOverrides, CapabilityError> {
    let window = web_sys::window().ok_or_else(|| CapabilityError::Unavailable("window".to_owned()))?;
    let computed = window.get_computed_style(live).map_err(render_error)?;
    let read = |prop: &str| computed.as_ref().and_then(|style| style.get_property_value(prop).ok());
    let width = read("width").as_deref().and_then(parse_px).unwrap_or_else(|| f64::from(live.offset_width()));
    let height = read("height").as_deref().and_then(parse_px).unwrap_or_else(|| f64::from(live.offset_height()));
    Ok(CaptureOverrides::for_size(width, height))
}

fn apply_overrides(cloned: &Document, dom_id: &str, overrides: &CaptureOverrides) {
    let Some(poster) = cloned.get_element_by_id(dom_id).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        log::warn!("cloned document has no #{dom_id}");
        return;
    };
    let style = poster.style();
    for (prop, value) in overrides.style_properties() {
        if let Err(e) = style.set_property(prop, &value) {
            log::warn!("could not set {prop} on cloned poster: {}", describe_js_error(&e));
        }
    }
}

fn build_options(options: &RenderOptions, onclone: &Closure<dyn FnMut(Document)>) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    let background = options.background.as_deref().map_or(JsValue::NULL, JsValue::from_str);
    Reflect::set(&obj, &JsValue::from_str("scale"), &JsValue::from_f64(options.scale))?;
    Reflect::set(&obj, &JsValue::from_str("useCORS"), &JsValue::from_bool(options.use_cors))?;
    Reflect::set(&obj, &JsValue::from_str("backgroundColor"), &background)?;
    Reflect::set(&obj, &JsValue::from_str("logging"), &JsValue::from_bool(options.logging))?;
    Reflect::set(&obj, &JsValue::from_str("onclone"), onclone.as_ref())?;
    Ok(obj.into())
}
