//! View controllers for Vitrine.
//!
//! Two independent controllers share a common derivation pattern: owned
//! state is mutated only by discrete user intents, and everything shown to
//! a renderer is recomputed from that state, never cached beside it.
//!
//! - [`Listing`] owns the product source list, the active category filter
//!   set, and the sort mode, and derives the filtered+sorted view through
//!   the pure [`derive_view`] function.
//! - [`DetailFlow`] owns one loaded product and its transient selections
//!   (image, color, size, quantity), guarded against stale asynchronous
//!   resolutions by a generation counter.

pub mod detail;
pub mod listing;
pub mod sort;

pub use detail::{DetailFlow, LoadPhase, LoadTicket, Selection};
pub use listing::{derive_view, Listing};
pub use sort::SortMode;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::detail::{DetailFlow, LoadPhase, LoadTicket, Selection};
    pub use crate::listing::{derive_view, Listing};
    pub use crate::sort::SortMode;
}
