//! Avatar image encoding.
//!
//! A selected file is read into memory and turned into a `data:` URL, which
//! serves both as the local preview source and as the `profilePic` payload.
//!
//! TRADE-OFFS
//! ==========
//! Inline data URLs inflate the payload by a third, so the size cap applies
//! to the raw file before encoding.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::EncodeError;

/// Encode raw image bytes as a `data:<mime>;base64,...` URL.
///
/// # Errors
///
/// Rejects non-image MIME types, empty input, and input over `limit` bytes.
pub fn encode_data_url(mime: &str, bytes: &[u8], limit: usize) -> Result<String, EncodeError> {
    let mime = mime.trim().to_ascii_lowercase();
    if !mime.starts_with("image/") || mime.len() == "image/".len() {
        return Err(EncodeError::NotAnImage { mime });
    }
    if bytes.is_empty() {
        return Err(EncodeError::Empty);
    }
    if bytes.len() > limit {
        return Err(EncodeError::TooLarge { size: bytes.len(), limit });
    }
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Read a browser `File` and encode it.
///
/// # Errors
///
/// Fails when the browser cannot read the file or when encoding rejects it.
#[cfg(feature = "hydrate")]
pub async fn encode_file(file: &web_sys::File, limit: usize) -> Result<String, EncodeError> {
    use wasm_bindgen::JsCast as _;

    let size = browser_file_size(file);
    if size > limit {
        return Err(EncodeError::TooLarge { size, limit });
    }
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| EncodeError::Read(format!("{e:?}")))?;
    let buffer = buffer
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|_| EncodeError::Read("file did not yield an ArrayBuffer".to_owned()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    encode_data_url(&file.type_(), &bytes, limit)
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn browser_file_size(file: &web_sys::File) -> usize {
    file.size().max(0.0) as usize
}
