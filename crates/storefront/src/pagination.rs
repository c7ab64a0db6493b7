//! Relay-style cursor pagination.
//!
//! A cursor is the base64 encoding of an entity's stable key (see
//! [`mockfront_core::CursorKeyed`]) - opaque to clients, byte-preserving
//! and reversible here. [`paginate`] turns an ordered collection plus
//! `first`/`afterCursor` arguments into a connection; collection order is
//! canonical and never re-sorted.

use async_graphql::{OutputType, SimpleObject};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use thiserror::Error;

use mockfront_core::CursorKeyed;

use crate::types::{Image, LineItem, Product, Variant};

/// Page size used when `first` is absent.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// A pagination token that could not be decoded.
///
/// Never fatal: the pager treats it as "no match found" and restarts from
/// the beginning of the collection.
#[derive(Debug, Error)]
#[error("invalid cursor: {0}")]
pub struct InvalidCursor(String);

/// Encode an entity key as an opaque cursor.
#[must_use]
pub fn encode_cursor(key: &str) -> String {
    BASE64.encode(key.as_bytes())
}

/// Recover the entity key from a cursor.
///
/// # Errors
///
/// Returns [`InvalidCursor`] if the token is not base64 or does not decode
/// to UTF-8.
pub fn decode_cursor(cursor: &str) -> Result<String, InvalidCursor> {
    let bytes = BASE64
        .decode(cursor.as_bytes())
        .map_err(|err| InvalidCursor(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| InvalidCursor(err.to_string()))
}

/// Forward pagination arguments.
#[derive(Debug, Clone, Default)]
pub struct PageArgs {
    /// Requested page size. Absent means [`DEFAULT_PAGE_SIZE`]; negative
    /// values yield an empty page.
    pub first: Option<i32>,
    /// Cursor of the entity to resume after.
    pub after_cursor: Option<String>,
}

/// Relay page info.
#[derive(Debug, Clone, SimpleObject)]
pub struct PageInfo {
    /// Cursor of the first edge, absent on an empty page.
    pub start_cursor: Option<String>,
    /// Cursor of the last edge, absent on an empty page.
    pub end_cursor: Option<String>,
    /// Whether entities exist beyond this page.
    pub has_next_page: bool,
    /// Whether entities exist before this page.
    pub has_previous_page: bool,
}

impl PageInfo {
    /// Page info for an unsliced embedded collection.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            start_cursor: None,
            end_cursor: None,
            has_next_page: false,
            has_previous_page: false,
        }
    }
}

/// One entity plus its cursor.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(concrete(name = "ProductEdge", params(Product)))]
#[graphql(concrete(name = "ImageEdge", params(Image)))]
#[graphql(concrete(name = "VariantEdge", params(Variant)))]
#[graphql(concrete(name = "LineItemEdge", params(LineItem)))]
pub struct Edge<T: OutputType> {
    /// Cursor addressing this entity.
    pub cursor: String,
    /// The entity itself.
    pub node: T,
}

/// A paginated view over an ordered collection.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(concrete(name = "ProductConnection", params(Product)))]
#[graphql(concrete(name = "ImageConnection", params(Image)))]
#[graphql(concrete(name = "VariantConnection", params(Variant)))]
#[graphql(concrete(name = "LineItemConnection", params(LineItem)))]
pub struct Connection<T: OutputType> {
    /// The page of edges.
    pub edges: Vec<Edge<T>>,
    /// Relay page info for the slice.
    pub page_info: PageInfo,
    /// Size of the full collection, independent of slicing.
    pub total_count: u64,
}

impl<T: CursorKeyed + OutputType> Connection<T> {
    /// Connection over a full embedded collection (product images and
    /// variants, checkout line items): every item becomes an edge, page
    /// info reports no further pages and carries no boundary cursors.
    #[must_use]
    pub fn embedded(items: Vec<T>) -> Self {
        let total_count = items.len() as u64;
        let edges = items
            .into_iter()
            .map(|node| Edge {
                cursor: encode_cursor(node.cursor_key()),
                node,
            })
            .collect();
        Self {
            edges,
            page_info: PageInfo::empty(),
            total_count,
        }
    }
}

/// Slice an ordered collection into a Relay connection.
///
/// The page starts right after the entity the cursor addresses. An invalid
/// or unmatched cursor silently restarts pagination from the beginning of
/// the collection.
pub fn paginate<T>(collection: &[T], args: &PageArgs) -> Connection<T>
where
    T: CursorKeyed + OutputType + Clone,
{
    let first = args.first.map_or(DEFAULT_PAGE_SIZE, |first| {
        usize::try_from(first).unwrap_or(0)
    });

    let start = args.after_cursor.as_deref().map_or(0, |cursor| {
        match decode_cursor(cursor) {
            Ok(key) => collection
                .iter()
                .position(|item| item.cursor_key() == key)
                .map_or(0, |index| index + 1),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring unparseable cursor");
                0
            }
        }
    });

    let end = start.saturating_add(first).min(collection.len());
    let edges: Vec<Edge<T>> = collection
        .get(start..end)
        .unwrap_or_default()
        .iter()
        .map(|node| Edge {
            cursor: encode_cursor(node.cursor_key()),
            node: node.clone(),
        })
        .collect();

    let page_info = PageInfo {
        start_cursor: edges.first().map(|edge| edge.cursor.clone()),
        end_cursor: edges.last().map(|edge| edge.cursor.clone()),
        has_next_page: collection.len() > start.saturating_add(first),
        has_previous_page: start > 0,
    };

    Connection {
        edges,
        page_info,
        total_count: collection.len() as u64,
    }
}
