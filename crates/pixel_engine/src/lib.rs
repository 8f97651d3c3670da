#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]
mod error;
pub use error::*;

mod grid;
pub use grid::*;

mod color;
pub use color::*;

pub mod formats;
pub mod text_codec;
