#![warn(clippy::all)]
#![allow(clippy::missing_errors_doc, clippy::use_self, clippy::doc_markdown)]

//! Centered column layouts for tiling window hosts.
//!
//! This crate computes a frame for every window on a screen, with one or two
//! primary windows in the centre and the rest split into equal columns on
//! either side, and evolves the small layout state the host persists between
//! passes. Everything here is pure and synchronous; moving windows and storing
//! state are left to the host.

pub mod arrangement;
pub mod command;
pub mod default_layout;
pub mod frame_map;
pub mod layout;
pub mod layout_change;
pub mod lenient;
pub mod rect;
pub mod sizing;
pub mod slot_policy;
pub mod state;
pub mod window;


pub use arrangement::*;
pub use command::*;
pub use default_layout::*;
pub use frame_map::*;
pub use layout::*;
pub use layout_change::*;
pub use rect::*;
pub use sizing::*;
pub use slot_policy::*;
pub use state::*;
pub use window::*;
