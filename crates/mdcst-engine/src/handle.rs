//! The editor-embedding surface: a handle bundling source text, its parsed
//! tree, and a lazily (re)computed HTML cache.
//!
//! Grounded in `markdown-neuraxis-engine`'s `editing::document::Document`,
//! which likewise bundles a buffer with its derived view and exposes a
//! snapshot cache invalidated on mutation and recomputed on next read. Here
//! `cached_html` plays that role: `update` always clears it; `to_html`
//! repopulates it only when absent.

use crate::cst::Document;
use crate::incremental::{parse_incremental, EditInfo};
use crate::serialize::serialize;

pub struct DocumentHandle {
    source: String,
    document: Document,
    cached_html: Option<String>,
}

impl DocumentHandle {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let document = crate::block_parser::parse(&source);
        DocumentHandle { source, document, cached_html: None }
    }

    pub fn ast(&self) -> &Document {
        &self.document
    }

    pub fn to_html(&mut self) -> &str {
        if self.cached_html.is_none() {
            self.cached_html = Some(crate::html::render_html(&self.document, &self.source));
        }
        self.cached_html.as_deref().unwrap()
    }

    pub fn to_markdown(&self) -> String {
        serialize(&self.document, &self.source)
    }

    /// Applies `edit`, producing a new handle over `new_source`. The HTML
    /// cache is dropped, not carried forward.
    pub fn update(&self, new_source: impl Into<String>, edit: EditInfo) -> DocumentHandle {
        let new_source = new_source.into();
        let document = parse_incremental(&self.document, &self.source, &new_source, edit);
        DocumentHandle { source: new_source, document, cached_html: None }
    }

    /// No owned external resources (file descriptors, FFI handles) exist in
    /// the core to release; this exists to keep the handle's lifecycle
    /// explicit for editor embeddings that expect a disposal hook.
    pub fn dispose(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incremental::edit_insert;

    #[test]
    fn round_trips_through_markdown() {
        let handle = DocumentHandle::new("# Hello\n");
        assert_eq!(handle.to_markdown(), "# Hello\n");
    }

    #[test]
    fn renders_html_and_caches_it() {
        let mut handle = DocumentHandle::new("# Hello\n");
        assert_eq!(handle.to_html(), "<h1>Hello</h1>\n");
        assert!(handle.cached_html.is_some());
    }

    #[test]
    fn update_invalidates_cache_and_reparses() {
        let mut handle = DocumentHandle::new("# Hello");
        handle.to_html();
        let updated = handle.update("# Hello World", edit_insert(7, 6));
        assert!(updated.cached_html.is_none());
        assert_eq!(updated.ast().blocks.len(), 1);
    }
}
