#![forbid(unsafe_code)]
#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod canvas;
pub mod config;
pub mod dial;
pub mod drag;
pub mod hands;
pub mod mask;
pub mod ticker;

pub use app::{ClockWindow, PointerAction, PointerInput};
