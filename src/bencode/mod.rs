pub mod cursor;
pub mod decode;
pub mod encode;
pub mod error;
pub mod value;

pub use cursor::ByteCursor;   // re-export
pub use decode::{decode, decode_value};   // re-export
pub use encode::encode;   // re-export
pub use error::DecodeError;   // re-export
pub use value::{Dict, Value};   // re-export
