#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod reader;
pub mod uleb128;

pub use config::{DecodeConfig, OverflowPolicy};
pub use error::LebError;
pub use reader::{Uleb128Field, Uleb128Reader, decode_all};
pub use uleb128::{decode_one, decode_one_with, unpack_one, unpack_one_with};
