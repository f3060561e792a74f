//! WebAssembly bindings for borbot
//!
//! This module provides JavaScript-friendly bindings for the core library,
//! for use by the web converter front end.

use crate::convert::convert as rust_convert;
use crate::save::{detect_scheme as rust_detect, Save as RustSave, Scheme};
use wasm_bindgen::prelude::*;

/// Detect the compression scheme of an encoded save.
///
/// Returns "deflate" or "zlib".
#[wasm_bindgen(js_name = detectScheme)]
pub fn detect_scheme(blob: &str) -> Result<String, JsValue> {
    rust_detect(blob)
        .map(|scheme| scheme.name().to_string())
        .map_err(|e| JsValue::from_str(&format!("Detection failed: {}", e)))
}

/// JavaScript-friendly Save wrapper
#[wasm_bindgen]
pub struct Save {
    inner: RustSave,
}

#[wasm_bindgen]
impl Save {
    /// Decode an encoded save blob
    #[wasm_bindgen(constructor)]
    pub fn new(blob: &str) -> Result<Save, JsValue> {
        let inner = RustSave::decode(blob)
            .map_err(|e| JsValue::from_str(&format!("Decode failed: {}", e)))?;
        Ok(Save { inner })
    }

    /// Re-encode under the scheme the save was decoded with
    #[wasm_bindgen(js_name = encode)]
    pub fn encode(&self) -> Result<String, JsValue> {
        self.inner
            .encode()
            .map_err(|e| JsValue::from_str(&format!("Encode failed: {}", e)))
    }

    /// Re-encode under a different scheme ("deflate" or "zlib")
    #[wasm_bindgen(js_name = encodeAs)]
    pub fn encode_as(&self, scheme: &str) -> Result<String, JsValue> {
        let scheme = match scheme {
            "deflate" => Scheme::RawDeflate,
            "zlib" => Scheme::ZlibDeflate,
            other => {
                return Err(JsValue::from_str(&format!("Unknown scheme: {}", other)));
            }
        };
        self.inner
            .encode_as(scheme)
            .map_err(|e| JsValue::from_str(&format!("Encode failed: {}", e)))
    }

    /// Convert the save to the opposite platform, rescaling rubies
    #[wasm_bindgen(js_name = convert)]
    pub fn convert(&self) -> Save {
        Save {
            inner: RustSave {
                data: rust_convert(&self.inner.data),
                scheme: self.inner.scheme,
            },
        }
    }

    // Field accessors

    #[wasm_bindgen(getter)]
    pub fn rubies(&self) -> u64 {
        self.inner.data.rubies
    }

    #[wasm_bindgen(getter)]
    pub fn platform(&self) -> String {
        self.inner.data.platform.clone()
    }

    #[wasm_bindgen(getter, js_name = saveOrigin)]
    pub fn save_origin(&self) -> String {
        self.inner.data.save_origin.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn scheme(&self) -> String {
        self.inner.scheme.name().to_string()
    }
}
