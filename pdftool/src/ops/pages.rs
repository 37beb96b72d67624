//! Page tree manipulation.
//!
//! This module handles page-level operations including:
//! - Appending one document's pages after another's
//! - Extracting a contiguous page range into a new document

use lopdf::{Document, Object, ObjectId, dictionary};
use std::ops::RangeInclusive;

use crate::error::{PdfToolError, Result};

/// Page attributes a `/Pages` node passes down to the pages below it.
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Page tree operations on lopdf documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageExtractor;

impl PageExtractor {
    /// Create a new page extractor.
    pub fn new() -> Self {
        Self
    }

    /// Get the number of pages in a document.
    pub fn page_count(&self, doc: &Document) -> usize {
        doc.get_pages().len()
    }

    /// Copy `pages` (1-based, inclusive) of `doc` into a new document.
    ///
    /// An empty range yields a document with an empty page tree. Page
    /// numbers past the end of the document are ignored.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdftool::ops::pages::PageExtractor;
    /// # use lopdf::Document;
    /// # fn example(doc: Document) {
    /// let extractor = PageExtractor::new();
    /// let first_five = extractor.extract_range(&doc, 1..=5);
    /// assert!(extractor.page_count(&first_five) <= 5);
    /// # }
    /// ```
    pub fn extract_range(&self, doc: &Document, pages: RangeInclusive<u32>) -> Document {
        let mut extracted = doc.clone();

        let dropped: Vec<u32> = doc
            .get_pages()
            .into_keys()
            .filter(|page_num| !pages.contains(page_num))
            .collect();

        if !dropped.is_empty() {
            extracted.delete_pages(&dropped);
        }

        extracted
    }

    /// Append every page of `other` after the pages of `target`.
    ///
    /// The objects of `other` are renumbered past `target.max_id` and moved
    /// in. The page tree root of `other` becomes the last kid of a root that
    /// sets no inheritable page attributes, so pages on either side keep the
    /// `Rotate`, `MediaBox`, `CropBox` and `Resources` they had before.
    ///
    /// # Errors
    ///
    /// Returns an error if either document lacks a well-formed page tree root.
    pub fn append_document(&self, target: &mut Document, mut other: Document) -> Result<usize> {
        let added = self.page_count(&other);
        let target_root = self.neutral_root(target)?;

        other.renumber_objects_with(target.max_id + 1);
        target.max_id = other.max_id;

        let source_root = pages_root(&other)?;

        target.objects.extend(other.objects);

        match target.get_object_mut(source_root) {
            Ok(Object::Dictionary(dict)) => dict.set("Parent", Object::Reference(target_root)),
            _ => {
                return Err(PdfToolError::other(
                    "Appended pages object is not a dictionary",
                ));
            }
        }

        self.add_kid(target, target_root, source_root, added)?;

        Ok(added)
    }

    /// Page tree root of `doc` that sets no inheritable page attributes.
    ///
    /// A root carrying any of them is wrapped in a bare `/Pages` node, which
    /// the catalog then points at. A root built here is reused by later
    /// appends, so the tree gains at most one level.
    fn neutral_root(&self, doc: &mut Document) -> Result<ObjectId> {
        let root = pages_root(doc)?;

        let inherits = doc
            .get_dictionary(root)
            .map(|dict| INHERITABLE_KEYS.iter().any(|key| dict.has(key)))
            .map_err(|e| PdfToolError::other(format!("Failed to get pages object: {e}")))?;
        if !inherits {
            return Ok(root);
        }

        let count = self.page_count(doc) as i64;
        let top = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(root)],
            "Count" => count,
        });

        doc.get_dictionary_mut(root)
            .map_err(|e| PdfToolError::other(format!("Failed to get pages object: {e}")))?
            .set("Parent", Object::Reference(top));

        let catalog_id = doc
            .trailer
            .get(b"Root")
            .and_then(Object::as_reference)
            .map_err(|e| PdfToolError::other(format!("Failed to get catalog reference: {e}")))?;
        doc.get_dictionary_mut(catalog_id)
            .map_err(|e| PdfToolError::other(format!("Failed to get catalog: {e}")))?
            .set("Pages", Object::Reference(top));

        Ok(top)
    }

    /// Push `kid` onto the Kids array of `parent` and grow its Count.
    fn add_kid(
        &self,
        doc: &mut Document,
        parent: ObjectId,
        kid: ObjectId,
        page_count: usize,
    ) -> Result<()> {
        let pages_obj = doc
            .get_object_mut(parent)
            .map_err(|e| PdfToolError::other(format!("Failed to get pages object: {e}")))?;

        let Object::Dictionary(dict) = pages_obj else {
            return Err(PdfToolError::other("Pages object is not a dictionary"));
        };

        match dict.get_mut(b"Kids") {
            Ok(Object::Array(kids)) => kids.push(Object::Reference(kid)),
            _ => return Err(PdfToolError::other("Pages dictionary missing Kids array")),
        }

        let current_count = dict.get(b"Count").and_then(|c| c.as_i64()).unwrap_or(0);
        dict.set("Count", Object::Integer(current_count + page_count as i64));

        Ok(())
    }
}

/// Object id of the root of the document's page tree.
fn pages_root(doc: &Document) -> Result<ObjectId> {
    doc.catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(|pages| pages.as_reference())
        .map_err(|e| PdfToolError::other(format!("Failed to get pages reference: {e}")))
}
