pub mod web_ext;
pub use web_ext::*;
