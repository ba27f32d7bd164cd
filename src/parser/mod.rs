pub mod core;

pub use self::core::{GoParser, ParserError, Result};
