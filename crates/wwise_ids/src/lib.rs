//! # wwise_ids
//!
//! Typed soundbank identifiers for the game's Wwise sound project.
//!
//! The authoring tool regenerates `Wwise_IDs.h` on every soundbank
//! build, binding each event, state, game parameter, bank, bus, and
//! audio device to a 32-bit hash of its name. This crate carries that
//! table as Rust constants and everything needed to keep it honest:
//!
//! - **Generated constants**: the full table as `const` items, grouped
//!   by category the way the header groups them
//! - **Registry**: case-insensitive name resolution, reverse ID lookup,
//!   duplicate detection
//! - **Name hashing**: the FNV-1 algorithm the authoring tool derives
//!   IDs with
//! - **Header tooling**: parse a generated header, write it back
//!   byte-identically, or emit it as a Rust module
//! - **Volume model**: the game's master/music/effects channels and the
//!   RTPC values they drive
//!
//! ## Quick Start
//!
//! ```rust
//! use wwise_ids::{ids, Category, IdRegistry};
//!
//! let registry = IdRegistry::global();
//!
//! let explosion = registry.resolve("Play_Explosion").unwrap();
//! assert_eq!(explosion.id, ids::events::PLAY_EXPLOSION);
//! assert_eq!(explosion.category, Category::Event);
//!
//! let bank = registry.lookup(ids::banks::INIT).unwrap();
//! assert_eq!(bank.symbol, "INIT");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod hash;
pub mod header;
pub mod ids;
pub mod levels;
pub mod registry;
pub mod table;

mod id;

pub use id::{Category, UniqueId};
pub use registry::{Binding, IdRegistry};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        hash::id_from_name,
        ids,
        levels::{VolumeChannel, VolumeSettings},
        table::{IdEntry, IdTable, StateGroupEntry},
        Binding, Category, IdRegistry, UniqueId,
    };
}
