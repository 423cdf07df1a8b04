//! Modal dialog component for Yew applications.
//!
//! The caller owns the open state and hands the modal a `toggle_modal`
//! callback; the modal renders the overlay and dialog, locks page scrolling
//! while open and asks for a toggle on Escape, overlay click, the close icon
//! or the optional secondary button.
//!
//! ```ignore
//! let is_open = use_state(|| false);
//! let toggle_modal = {
//!     let is_open = is_open.clone();
//!     Callback::from(move |_| is_open.set(!*is_open))
//! };
//! html! {
//!     <Modal is_open={*is_open} {toggle_modal} title="Saved" btn_text="OK">
//!         <p>{"Your changes are stored."}</p>
//!     </Modal>
//! }
//! ```

pub mod components;
pub mod hooks;
pub mod services;

pub use components::close_icon::CloseIcon;
pub use components::modal::{Modal, ModalProps};
pub use hooks::{use_escape_key, use_scroll_lock};
pub use shared::{
    ModalOptions, ModalVisibility, PropWarning, BASE_CLASS, DEFAULT_FADE_DURATION_MS,
    DEFAULT_THEME,
};

/// Default styles for every class the modal renders
pub const STYLESHEET: &str = include_str!("../assets/sg-modal-lib.css");
