pub mod use_escape_key;
pub mod use_current_path;

pub use use_current_path::use_current_path;
pub use use_escape_key::use_escape_key;
