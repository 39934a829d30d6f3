#[macro_use]
extern crate bitflags;

#[macro_use]
extern crate slog;

extern crate nalgebra as na;

pub mod common;
pub mod mixer;

pub use common::importer::{load, load_file, LoadError};
pub use mixer::{AdaptFlags, Mixer, MixerError, Swatch, SwatchTarget, Swatches};
