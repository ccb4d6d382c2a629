//! Agent configuration model.
//!
//! Configuration is assembled from any number of JSON sources, merged in
//! the order they are given:
//! 1. **Files** - read as a single source, whatever their name
//! 2. **Directories** - every immediate `*.json` entry, in lexical order
//!
//! ## Merge Strategy
//! - Scalars (`node_name`, `bind_addr`, ...): later sources win when they set a value
//! - Lists (`event_handlers`, `start_join`): concatenated in source order
//!
//! Two fields are interpreted only on request: `bind_addr` through
//! [`parse_address`] and `event_handlers` through [`parse_event_handlers`].

mod address;
mod decode;
mod events;
mod loader;
mod merge;
mod types;

pub use address::{AddressParts, parse_address};
pub use decode::{decode, decode_str};
pub use events::{EventKind, EventScript, WILDCARD_FILTER, parse_event_handlers, select};
pub use loader::{ConfigLoader, load};
pub use merge::{merge, merge_all};
pub use types::*;
