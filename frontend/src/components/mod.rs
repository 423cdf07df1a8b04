pub mod close_icon;
pub mod modal;
