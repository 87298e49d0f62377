//! Commonly used media types.
//!
//! Each constant is validated at compile time and built on first use.

use once_cell::sync::Lazy;

use crate::media_type::MediaType;

pub static APPLICATION_JSON: Lazy<MediaType> = Lazy::new(|| crate::media_type!("application/json"));
pub static APPLICATION_OCTET_STREAM: Lazy<MediaType> =
    Lazy::new(|| crate::media_type!("application/octet-stream"));
pub static APPLICATION_PDF: Lazy<MediaType> = Lazy::new(|| crate::media_type!("application/pdf"));
pub static APPLICATION_WASM: Lazy<MediaType> = Lazy::new(|| crate::media_type!("application/wasm"));
pub static APPLICATION_XML: Lazy<MediaType> = Lazy::new(|| crate::media_type!("application/xml"));
pub static APPLICATION_WWW_FORM_URLENCODED: Lazy<MediaType> =
    Lazy::new(|| crate::media_type!("application/x-www-form-urlencoded"));
pub static APPLICATION_PROBLEM_JSON: Lazy<MediaType> =
    Lazy::new(|| crate::media_type!("application/problem+json"));
pub static APPLICATION_VND_API_JSON: Lazy<MediaType> =
    Lazy::new(|| crate::media_type!("application/vnd.api+json"));
pub static MULTIPART_FORM_DATA: Lazy<MediaType> = Lazy::new(|| crate::media_type!("multipart/form-data"));
pub static TEXT_CSS: Lazy<MediaType> = Lazy::new(|| crate::media_type!("text/css"));
pub static TEXT_HTML: Lazy<MediaType> = Lazy::new(|| crate::media_type!("text/html"));
pub static TEXT_JAVASCRIPT: Lazy<MediaType> = Lazy::new(|| crate::media_type!("text/javascript"));
pub static TEXT_PLAIN: Lazy<MediaType> = Lazy::new(|| crate::media_type!("text/plain"));
pub static IMAGE_GIF: Lazy<MediaType> = Lazy::new(|| crate::media_type!("image/gif"));
pub static IMAGE_JPEG: Lazy<MediaType> = Lazy::new(|| crate::media_type!("image/jpeg"));
pub static IMAGE_PNG: Lazy<MediaType> = Lazy::new(|| crate::media_type!("image/png"));
pub static IMAGE_SVG_XML: Lazy<MediaType> = Lazy::new(|| crate::media_type!("image/svg+xml"));
pub static IMAGE_WEBP: Lazy<MediaType> = Lazy::new(|| crate::media_type!("image/webp"));
