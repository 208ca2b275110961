//! Building blocks for ASCII-hex serial wire protocols: fixed-width
//! integer codecs plus composable `nom` parsers for pulling hex fields
//! out of a command buffer.

mod digit;
pub use digit::*;

mod wire;
pub use wire::*;

mod parse;
pub use parse::*;
