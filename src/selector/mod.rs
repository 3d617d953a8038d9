//! ICO frame size selection

pub mod ladder;

pub use ladder::{select_sizes, Dimension, SizeLadder, DEFAULT_LADDER, MAX_ICO_SIDE};
