//! Domain layer: catalog types, the filter builder and random selection.
//!
//! Nothing in here touches HTTP or the database.

pub mod filter;
pub mod game;
pub mod selection;

#[cfg(test)]
pub(crate) mod test_gens;
#[cfg(test)]
mod tests_props_filter;
#[cfg(test)]
mod tests_props_selection;

pub use filter::{DurationClause, GameFilter, PlayerClause};
pub use game::Game;
pub use selection::{pick_offset, CatalogPick, OffsetPicker};
