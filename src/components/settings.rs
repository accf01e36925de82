use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::AuthStore;

/// Settings page. Login lives outside this app, so the API bearer token is
/// managed here: paste one to store it, clear it to go back to anonymous
/// requests. Every request picks the stored token up on its next send.
#[function_component(Settings)]
pub fn settings() -> Html {
    let auth = use_memo((), |_| AuthStore::new());
    let has_token = use_state(|| auth.token().is_some());
    let notice = use_state(|| None::<String>);
    let input_ref = use_node_ref();

    let on_save = {
        let auth = auth.clone();
        let has_token = has_token.clone();
        let notice = notice.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let token = input.value();
            if token.trim().is_empty() {
                return;
            }
            match auth.set_token(token.trim()) {
                Ok(()) => {
                    input.set_value("");
                    has_token.set(true);
                    notice.set(Some("Token saved.".to_string()));
                }
                Err(e) => {
                    log::error!("❌ Failed to store token: {}", e);
                    notice.set(Some(format!("Failed to store token: {}", e)));
                }
            }
        })
    };

    let on_clear = {
        let auth = auth.clone();
        let has_token = has_token.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| match auth.clear() {
            Ok(()) => {
                has_token.set(false);
                notice.set(Some("Token cleared.".to_string()));
            }
            Err(e) => {
                log::error!("❌ Failed to clear token: {}", e);
                notice.set(Some(format!("Failed to clear token: {}", e)));
            }
        })
    };

    html! {
        <div class="settings-page">
            <h1>{"Settings"}</h1>

            <div class="detail-section">
                <h2>{"API Token"}</h2>
                <p class="muted">
                    { if *has_token {
                        "A token is stored; requests are sent with it."
                    } else {
                        "No token stored; requests are sent anonymously."
                    } }
                </p>
                <form class="form-field" onsubmit={on_save}>
                    <label>{"Bearer token"}</label>
                    <input type="password" ref={input_ref} placeholder="Paste a token" />
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary">{"Save Token"}</button>
                        {" "}
                        <button type="button" class="btn" onclick={on_clear} disabled={!*has_token}>
                            {"Clear Token"}
                        </button>
                    </div>
                </form>
                if let Some(notice) = notice.as_ref() {
                    <p class="muted">{ notice.clone() }</p>
                }
            </div>
        </div>
    }
}
