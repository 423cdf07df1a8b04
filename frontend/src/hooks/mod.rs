pub mod use_escape_key;
pub mod use_scroll_lock;

pub use use_escape_key::use_escape_key;
pub use use_scroll_lock::use_scroll_lock;
