//! Entity capability traits.
//!
//! [`Identifiable`] marks entities that carry a globally unique id and can
//! therefore be found by the generic `node` lookup. [`CursorKeyed`] is the
//! weaker capability needed by cursor pagination: a stable string key that
//! a cursor can encode. Identifiable entities are keyed by their id;
//! entities without an id of their own (images, keyed by source URL)
//! implement [`CursorKeyed`] alone.

/// An entity with a globally unique id.
pub trait Identifiable {
    /// The entity's unique id.
    fn node_id(&self) -> &str;
}

/// An entity addressable by an opaque pagination cursor.
pub trait CursorKeyed {
    /// The stable key a cursor encodes for this entity.
    fn cursor_key(&self) -> &str;
}
