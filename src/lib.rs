//! Rust library for converting Bayesian network `.net` files between the OLCA and
//! Hugin (Genie) dialects.
//!
//! The main entry point is [`convert`], a total function that rewrites the input text line by
//! line. [`ConversionRequest`] and [`ConversionResponse`] bundle the text with the direction
//! and the suggested output file name, and the [`io`] module contains file adapters.

pub mod io;
pub mod request;
pub mod transducer;

mod enums;

pub use enums::{ConversionDirection, Dialect, InvalidConversionDirection};
pub use request::{ConversionRequest, ConversionResponse, suggested_filename};
pub use transducer::{convert, convert_lines};
