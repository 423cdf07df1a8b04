use js_sys::Object;
use shared::{ModalOptions, ModalVisibility, DEFAULT_FADE_DURATION_MS, DEFAULT_THEME};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::close_icon::CloseIcon;
use crate::hooks::{use_escape_key, use_scroll_lock};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Owned by the caller; the modal only reflects it
    pub is_open: bool,
    /// Called whenever the modal wants its open state flipped
    pub toggle_modal: Callback<()>,
    /// Heading, rendered only when non-empty
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Label of the secondary button, rendered only when non-empty
    #[prop_or_default]
    pub btn_text: Option<AttrValue>,
    /// Theme class suffix
    #[prop_or(AttrValue::Static(DEFAULT_THEME))]
    pub style_theme: AttrValue,
    #[prop_or(true)]
    pub escape_close: bool,
    #[prop_or(true)]
    pub overlay_click_close: bool,
    #[prop_or(true)]
    pub show_close: bool,
    /// Fade transition length in milliseconds
    #[prop_or(DEFAULT_FADE_DURATION_MS)]
    pub fade_duration: u32,
    pub children: Children,
}

impl ModalProps {
    pub fn options(&self) -> ModalOptions {
        ModalOptions {
            title: self.title.as_ref().map(|t| t.to_string()),
            btn_text: self.btn_text.as_ref().map(|t| t.to_string()),
            style_theme: self.style_theme.to_string(),
            escape_close: self.escape_close,
            overlay_click_close: self.overlay_click_close,
            show_close: self.show_close,
            fade_duration: self.fade_duration,
        }
    }
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let options = props.options();
    let visibility = ModalVisibility::from(props.is_open);
    let overlay_ref = use_node_ref();

    use_effect_with(options.clone(), |options| {
        if cfg!(debug_assertions) {
            for warning in options.validate() {
                Logger::warn_with_component("modal", &warning.to_string());
            }
        }
    });

    use_scroll_lock(visibility.is_open());
    use_escape_key(
        options.listens_for_escape(visibility),
        props.toggle_modal.clone(),
    );

    let request_toggle = {
        let toggle_modal = props.toggle_modal.clone();
        Callback::from(move |_: MouseEvent| {
            toggle_modal.emit(());
        })
    };

    // Only a click that lands on the overlay itself counts, not one that
    // bubbled up from the dialog.
    let on_overlay_click = {
        let toggle_modal = props.toggle_modal.clone();
        let overlay_ref = overlay_ref.clone();
        let enabled = options.overlay_click_close;
        Callback::from(move |e: MouseEvent| {
            if !enabled {
                return;
            }
            let on_overlay = match (e.target(), overlay_ref.get()) {
                (Some(target), Some(overlay)) => Object::is(&target, &overlay),
                _ => false,
            };
            if on_overlay {
                toggle_modal.emit(());
            }
        })
    };

    html! {
        <div
            ref={overlay_ref}
            class={options.root_class(visibility)}
            style={options.overlay_style(visibility)}
            role="dialog"
            aria-modal="true"
            aria-hidden={visibility.aria_hidden()}
            aria-describedby={options.described_by().to_string()}
            data-testid="modal-parent"
            onclick={on_overlay_click}
        >
            <div class="sg-modal-lib__body" role="document" style={options.dialog_style()}>
                <section class="sg-modal-lib__body-content">
                    if options.show_close {
                        <button
                            type="button"
                            class="sg-modal-lib__body-close"
                            aria-label="Close modal"
                            autofocus={true}
                            data-testid="modal-close"
                            onclick={request_toggle.clone()}
                        >
                            <CloseIcon />
                        </button>
                    }
                    if let Some(title) = options.title_text() {
                        <h2 class="sg-modal-lib__body-title" id="modalTitle" data-testid="modal-title">
                            {title.to_string()}
                        </h2>
                    }
                    <div class="sg-modal-lib__body-children-container">
                        { for props.children.iter() }
                    </div>
                </section>
                if let Some(btn_text) = options.button_text() {
                    <button
                        type="button"
                        class="sg-modal-lib__btn"
                        data-testid="modal-additional-button"
                        onclick={request_toggle}
                    >
                        {btn_text.to_string()}
                    </button>
                }
            </div>
        </div>
    }
}
