//! Index-name resolution for the per-sort-order virtual replicas.
//!
//! One base index holds the content corpus; three virtual replicas apply
//! the recognized sort orders. Queries and replica settings both route
//! through `resolve`.

/// Sort-order token for the newest-first replica.
pub const NEWEST: &str = "newest";
/// Sort-order token for the recently-active replica.
pub const ACTIVE: &str = "active";
/// Sort-order token for the score-ranked replica.
pub const SCORE: &str = "score";

/// Map a base index and sort-order token to a concrete index name.
///
/// Exactly the three recognized tokens get a `_<token>` suffix; an empty
/// or unrecognized token resolves to the base index unchanged.
pub fn resolve(base: &str, order: &str) -> String {
    match order {
        NEWEST | ACTIVE | SCORE => format!("{base}_{order}"),
        _ => base.to_string(),
    }
}
