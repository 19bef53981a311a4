//! Platform-agnostic core for a wrist-worn bus departure board.
//!
//! Decodes a `;`-delimited arrival feed into fixed-capacity tables, keeps
//! the focused row stable across refreshes, estimates connectivity from
//! refresh timing, and projects a paginated view for a host renderer.
//! No allocation and no platform calls: hosts supply button events and a
//! message port through the traits in [`input`] and [`transport`].

#![no_std]
#![deny(unsafe_code)]

pub mod app;
pub mod eta;
pub mod feed;
pub mod focus;
pub mod input;
pub mod link;
pub mod pager;
pub mod render;
pub mod stops;
pub mod transport;
pub mod wire;
