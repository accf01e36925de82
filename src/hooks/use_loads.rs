use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::Load;
use crate::services::{ApiClient, AuthStore};

use super::FetchSeq;

/// List-view lifecycle state.
#[derive(Clone, PartialEq)]
pub struct UseLoadsHandle {
    pub loads: UseStateHandle<Vec<Load>>,
    pub total: UseStateHandle<u64>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
}

/// Fetch exactly one page per (page, size) change. Pagination is server
/// driven: every change issues a fresh request instead of slicing a local
/// cache. Overlapping requests resolve last-write-wins via [`FetchSeq`].
#[hook]
pub fn use_loads(page: u32, size: u32) -> UseLoadsHandle {
    let loads = use_state(Vec::<Load>::new);
    let total = use_state(|| 0u64);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let seq = use_memo((), |_| FetchSeq::new());

    {
        let loads = loads.clone();
        let total = total.clone();
        let loading = loading.clone();
        let error = error.clone();
        let seq = (*seq).clone();

        use_effect_with((page, size), move |(page, size)| {
            let page = *page;
            let size = *size;
            let ticket = seq.begin();

            loading.set(true);
            spawn_local(async move {
                let client = ApiClient::new(AuthStore::new());
                match client.list_loads(page, size).await {
                    Ok(response) => {
                        if seq.is_current(ticket) {
                            log::info!(
                                "📦 Page {} loaded: {} of {} loads",
                                page,
                                response.loads.len(),
                                response.total
                            );
                            loads.set(response.loads);
                            total.set(response.total);
                            error.set(None);
                            loading.set(false);
                        } else {
                            log::debug!("Discarding stale loads response for page {}", page);
                        }
                    }
                    Err(e) => {
                        if seq.is_current(ticket) {
                            log::error!("❌ Failed to fetch loads: {}", e);
                            error.set(Some(format!("Failed to fetch loads: {}", e)));
                            loading.set(false);
                        }
                    }
                }
            });

            || ()
        });
    }

    UseLoadsHandle {
        loads,
        total,
        loading,
        error,
    }
}
