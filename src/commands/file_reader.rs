//! File Reader
//!
//! Reads a picked image file into a data URL. The `FileReader` callbacks are
//! wrapped in a promise so callers can simply `.await` the result.

use js_sys::{Function, Promise};
use timeline_core::EncodedImage;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

/// Read `file` as a `data:image/...` URL
pub async fn read_image_as_data_url(file: File) -> Result<EncodedImage, String> {
    let reader = FileReader::new().map_err(|e| format!("Failed to create FileReader: {:?}", e))?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let loaded = reader.clone();
        let on_load = Closure::once_into_js(move |_: JsValue| {
            let result = loaded.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let on_error = Closure::once_into_js(move |_: JsValue| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("read failed"));
        });
        reader.set_onload(Some(on_load.unchecked_ref()));
        reader.set_onerror(Some(on_error.unchecked_ref()));
    });

    reader
        .read_as_data_url(&file)
        .map_err(|e| format!("Failed to start reading {}: {:?}", file.name(), e))?;

    let result = JsFuture::from(promise)
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;

    let image = result
        .as_string()
        .map(EncodedImage::new)
        .ok_or_else(|| format!("No data read from {}", file.name()))?;

    if !image.is_image() {
        return Err(format!("{} is not an image", file.name()));
    }
    Ok(image)
}
