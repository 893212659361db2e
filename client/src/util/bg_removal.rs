//! Background removal through `@imgly/background-removal`.
//!
//! The library is an ES module; `js/bg_removal.js` re-exports it with the
//! config shape it expects so only a blob and a path cross the boundary.

use async_trait::async_trait;
use js_sys::{Promise, Uint8Array};
use poster::error::CapabilityError;
use poster::photo::{BackgroundRemover, PhotoFile, RemovalConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, Url};

use crate::util::browser::describe_js_error;

#[wasm_bindgen(module = "/js/bg_removal.js")]
extern "C" {
    #[wasm_bindgen(js_name = removeBackground, catch)]
    fn remove_background_js(image: &Blob, public_path: &str) -> Result<Promise, JsValue>;
}

/// A file chosen in the upload control.
pub struct BrowserFile(pub File);

#[async_trait(?Send)]
impl PhotoFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, CapabilityError> {
        let buffer = JsFuture::from(self.0.array_buffer())
            .await
            .map_err(|e| CapabilityError::FileRead(describe_js_error(&e)))?;
        Ok(Uint8Array::new(&buffer).to_vec())
    }
}

/// Removes backgrounds in-browser and hands back object URLs.
pub struct ImglyRemover;

#[async_trait(?Send)]
impl BackgroundRemover<BrowserFile> for ImglyRemover {
    async fn remove_background(&self, file: &BrowserFile, config: &RemovalConfig) -> Result<String, CapabilityError> {
        let removal_error = |e: JsValue| CapabilityError::BackgroundRemoval(describe_js_error(&e));
        let promise = remove_background_js(&file.0, &config.public_path).map_err(removal_error)?;
        let blob = JsFuture::from(promise)
            .await
            .map_err(removal_error)?
            .dyn_into::<Blob>()
            .map_err(|_| CapabilityError::BackgroundRemoval("result is not a Blob".to_owned()))?;
        Url::create_object_url_with_blob(&blob).map_err(removal_error)
    }

    fn revoke_object_url(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("could not revoke {url}: {}", describe_js_error(&e));
        }
    }
}
