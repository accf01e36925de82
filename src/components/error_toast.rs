use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 6_000;

#[derive(Properties, PartialEq)]
pub struct ErrorToastProps {
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

/// Non-blocking error notification. Renders nothing without a message;
/// auto-dismisses after a few seconds or on click.
#[function_component(ErrorToast)]
pub fn error_toast(props: &ErrorToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.message.clone(), move |message| {
            let timeout = message
                .as_ref()
                .map(|_| Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(())));
            // Dropping the timeout cancels it when the message changes or
            // the view unmounts.
            move || drop(timeout)
        });
    }

    let Some(message) = props.message.clone() else {
        return Html::default();
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast toast-error" role="alert">
            <span class="toast-message">{ message }</span>
            <button class="toast-dismiss" {onclick}>{"✕"}</button>
        </div>
    }
}
