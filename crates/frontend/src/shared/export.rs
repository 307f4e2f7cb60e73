//! Saving server-produced files through the browser

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Hands a file to the user.
pub trait FileSaver {
    fn save(&self, bytes: &[u8], mime_type: &str, filename: &str) -> Result<(), String>;
}

/// Triggers a browser download through a temporary `<a download>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFileSaver;

impl FileSaver for BrowserFileSaver {
    fn save(&self, bytes: &[u8], mime_type: &str, filename: &str) -> Result<(), String> {
        let blob = create_blob(bytes, mime_type)?;
        download_blob(&blob, filename)
    }
}

/// Wrap response bytes into a Blob of the given type
fn create_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Start a browser download of the Blob
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
pub mod testing {
    use super::FileSaver;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SavedFile {
        pub bytes: Vec<u8>,
        pub mime_type: String,
        pub filename: String,
    }

    /// Keeps saved files in memory.
    #[derive(Default)]
    pub struct RecordingSaver {
        pub saved: RefCell<Vec<SavedFile>>,
    }

    impl FileSaver for RecordingSaver {
        fn save(&self, bytes: &[u8], mime_type: &str, filename: &str) -> Result<(), String> {
            self.saved.borrow_mut().push(SavedFile {
                bytes: bytes.to_vec(),
                mime_type: mime_type.to_string(),
                filename: filename.to_string(),
            });
            Ok(())
        }
    }
}
