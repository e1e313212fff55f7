//! chordbook-ui - View components for the chord book
//!
//! Components render from plain props and report user intent through event
//! handlers. They never touch storage or the address bar; the web app owns
//! state and wires these views to it.

pub mod components;
pub mod display_types;

pub use components::*;
pub use display_types::*;
