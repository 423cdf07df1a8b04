use sg_modal_lib::{Modal, STYLESHEET};
use yew::prelude::*;

#[function_component(Demo)]
fn demo() -> Html {
    let is_open = use_state(|| false);
    let dark = use_state(|| false);

    let toggle_modal = {
        let is_open = is_open.clone();
        Callback::from(move |_: ()| is_open.set(!*is_open))
    };

    let on_open_click = {
        let toggle_modal = toggle_modal.clone();
        Callback::from(move |_: MouseEvent| toggle_modal.emit(()))
    };

    let on_theme_click = {
        let dark = dark.clone();
        Callback::from(move |_: MouseEvent| dark.set(!*dark))
    };

    let theme = if *dark { "dark" } else { "light" };

    html! {
        <>
            <style>{STYLESHEET}</style>
            <main>
                <h1>{"sg-modal-lib"}</h1>
                <button onclick={on_open_click}>{"Open modal"}</button>
                <button onclick={on_theme_click}>{format!("Theme: {}", theme)}</button>
            </main>
            <Modal
                is_open={*is_open}
                {toggle_modal}
                title="Welcome"
                btn_text="Got it"
                style_theme={theme}
                fade_duration={300}
            >
                <p>{"Press Escape, click outside or use a button to close this dialog."}</p>
            </Modal>
        </>
    }
}

fn main() {
    yew::Renderer::<Demo>::new().render();
}
