//! Terminal rendering for the runner binary.
//!
//! A [`GameView`] draws a [`GameSnapshot`](blockfall_core::GameSnapshot) into a
//! [`FrameBuffer`] without any I/O; [`TerminalRenderer`] flushes framebuffers
//! to the real terminal, redrawing only rows that changed.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
