/// Writes `text` into the document title.
///
/// Outside the browser there is no document, so the write is only logged.
/// The previous title is never read back or restored.
pub fn set_document_title(text: &str) {
    log::debug!("document title: {text}");

    #[cfg(all(target_arch = "wasm32", any(feature = "csr", feature = "hydrate")))]
    {
        let document: web_sys::Document = leptos::document();
        document.set_title(text);
    }
}
