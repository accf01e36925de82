use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::Load;
use crate::services::{ApiClient, ApiError, AuthStore};

/// Detail-view fetch states: loading, loaded, or failed (including
/// not-found).
#[derive(Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Box<Load>),
    Failed(String),
}

/// Fetch one load by id, once per id change.
#[hook]
pub fn use_load(id: String) -> UseStateHandle<LoadState> {
    let state = use_state(|| LoadState::Loading);

    {
        let state = state.clone();
        use_effect_with(id, move |id| {
            let id = id.clone();
            state.set(LoadState::Loading);
            spawn_local(async move {
                let client = ApiClient::new(AuthStore::new());
                match client.get_load_by_id(&id).await {
                    Ok(load) => state.set(LoadState::Loaded(Box::new(load))),
                    Err(ApiError::NotFound) => {
                        log::warn!("Load {} not found", id);
                        state.set(LoadState::Failed("Load not found".to_string()));
                    }
                    Err(e) => {
                        log::error!("❌ Failed to fetch load {}: {}", id, e);
                        state.set(LoadState::Failed(format!("Failed to fetch load: {}", e)));
                    }
                }
            });

            || ()
        });
    }

    state
}
