//! Shared fixtures for the unit tests of this crate.
//!
//! Each factory returns the registry together with the types it built. The registry owns
//! the types, base types and declaring types are only weakly referenced, so callers have
//! to keep it alive for as long as they use the types.


pub use factories::*;
