use js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag, Url};

use super::dom;
use crate::error::Result;
use crate::report_flow::ObjectUrls;

/// Object URLs backed by in-memory `Blob`s.
#[derive(Debug, Default)]
pub struct BrowserObjectUrls;

impl ObjectUrls for BrowserObjectUrls {
    fn create(&mut self, bytes: &[u8], mime_type: &str) -> Result<String> {
        let parts = Array::new();
        parts.push(&Uint8Array::from(bytes));

        let options = BlobPropertyBag::new();
        options.set_type(mime_type);

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(dom::js_error)?;
        Url::create_object_url_with_blob(&blob).map_err(dom::js_error)
    }

    fn revoke(&mut self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("Failed to revoke {}: {:?}", url, e);
        }
    }
}
