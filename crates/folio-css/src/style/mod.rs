//! Style keys, values, and the maps that hold them.

mod declaration;
mod key;
mod resolved;
mod value;

pub use declaration::DeclarationBlock;
pub use key::{Side, StyleKey, kebab_to_camel};
pub use resolved::ResolvedStyle;
pub use value::{StyleValue, TransformKind, TransformOperation};
