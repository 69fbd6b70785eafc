//! Error taxonomy for displacement computation.
//!
//! Both variants indicate a caller-side contract violation. Silently
//! producing offsets for such inputs would misplace items in ways that are
//! hard to notice on screen, so the calculator fails fast instead of
//! guessing.

use super::item::ItemId;
use thiserror::Error;

/// Failures the displacement calculator refuses to paper over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplaceError {
    /// A non-empty selection was dragged against an empty window.
    ///
    /// Resolving the drop would require the first or last in-range item,
    /// neither of which exists.
    #[error("cannot displace a selection within an empty window")]
    EmptyWindow,

    /// A selected id has no counterpart among the in-range items.
    ///
    /// Accepting it would corrupt the working-index bookkeeping, since the
    /// selected item could never be registered back into the window.
    #[error("selected item '{id}' is not in the window")]
    UnknownSelection {
        /// The id that could not be resolved.
        id: ItemId,
    },
}
