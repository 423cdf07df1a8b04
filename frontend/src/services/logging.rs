/// Console logger tagging every line with the component that wrote it.
///
/// Debug lines only exist in debug builds; the other levels are always on
/// because they report problems the host application should see.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        if cfg!(debug_assertions) {
            gloo::console::debug!(Self::format(component, message));
        }
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(Self::format(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(Self::format(component, message));
    }

    fn format(component: &str, message: &str) -> String {
        format!("[sg-modal-lib::{}] {}", component, message)
    }
}
