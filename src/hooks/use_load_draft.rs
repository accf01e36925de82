use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::app::Route;
use crate::models::{FieldChange, Load, LoadData};
use crate::services::{ApiClient, ApiError, AuthStore};

/// Create-view state: editing -> submitting -> navigated on success,
/// back to editing (draft preserved, error surfaced) on failure.
///
/// Transitions are plain value-to-value functions, kept out of the async
/// plumbing so the flow can be tested off the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftFormState {
    pub draft: LoadData,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for DraftFormState {
    fn default() -> Self {
        Self {
            draft: LoadData::default(),
            submitting: false,
            error: None,
        }
    }
}

impl DraftFormState {
    /// One field edit; draft siblings and flags carry over.
    pub fn with_change(&self, change: FieldChange) -> Self {
        Self {
            draft: self.draft.with_change(change),
            submitting: self.submitting,
            error: self.error.clone(),
        }
    }

    /// Entering flight: flag up, stale error cleared, draft untouched.
    pub fn begin_submit(&self) -> Self {
        Self {
            draft: self.draft.clone(),
            submitting: true,
            error: None,
        }
    }

    /// Leaving flight. `draft` is the exact payload that was submitted:
    /// on failure the form returns to editing with it intact and a
    /// message to surface; on success the view navigates away.
    pub fn after_submit(draft: LoadData, result: &Result<Load, ApiError>) -> Self {
        let error = match result {
            Ok(_) => None,
            Err(e) => Some(format!("Failed to create load: {}", e)),
        };
        Self {
            draft,
            submitting: false,
            error,
        }
    }

    pub fn without_error(&self) -> Self {
        Self {
            draft: self.draft.clone(),
            submitting: self.submitting,
            error: None,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseLoadDraftHandle {
    pub form: UseStateHandle<DraftFormState>,
    pub update: Callback<FieldChange>,
    pub submit: Callback<()>,
    pub dismiss_error: Callback<()>,
}

#[hook]
pub fn use_load_draft() -> UseLoadDraftHandle {
    let form = use_state(DraftFormState::default);
    let navigator = use_navigator();

    let update = {
        let form = form.clone();
        Callback::from(move |change: FieldChange| {
            // Clone-apply-swap: the previous draft value is never mutated,
            // so anything still holding it sees it unchanged.
            form.set(form.with_change(change));
        })
    };

    let submit = {
        let form = form.clone();
        let navigator = navigator.clone();

        Callback::from(move |_: ()| {
            if form.submitting {
                return;
            }
            let payload = form.draft.clone();
            let form = form.clone();
            let navigator = navigator.clone();

            form.set(form.begin_submit());
            spawn_local(async move {
                let client = ApiClient::new(AuthStore::new());
                let result = client.create_load(&payload).await;
                if let Err(e) = &result {
                    log::error!("❌ Failed to create load: {}", e);
                }
                let created_id = result.as_ref().ok().map(|load| load.id.clone());

                form.set(DraftFormState::after_submit(payload, &result));
                if let Some(id) = created_id {
                    if let Some(navigator) = navigator.as_ref() {
                        navigator.push(&Route::LoadDetail { id });
                    }
                }
            });
        })
    };

    let dismiss_error = {
        let form = form.clone();
        Callback::from(move |_: ()| form.set(form.without_error()))
    };

    UseLoadDraftHandle {
        form,
        update,
        submit,
        dismiss_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartyField;

    fn edited_state() -> DraftFormState {
        DraftFormState::default()
            .with_change(FieldChange::FreightLoadId("FL-9".into()))
            .with_change(FieldChange::Customer(PartyField::City("Chicago".into())))
    }

    #[test]
    fn failed_submit_returns_to_editing_with_the_draft_intact() {
        let edited = edited_state();
        let in_flight = edited.begin_submit();
        assert!(in_flight.submitting);

        let failed = Err(ApiError::Server {
            status: 500,
            message: "internal".into(),
        });
        let after = DraftFormState::after_submit(in_flight.draft.clone(), &failed);

        assert!(!after.submitting);
        assert_eq!(
            after.error.as_deref(),
            Some("Failed to create load: server error (HTTP 500): internal")
        );
        // the draft comes back exactly as it was submitted, not cleared
        assert_eq!(after.draft, edited.draft);
        assert_eq!(after.draft.freight_load_id, "FL-9");
        assert_eq!(after.draft.customer.address.city, "Chicago");
    }

    #[test]
    fn successful_submit_clears_the_flag_without_an_error() {
        let in_flight = edited_state().begin_submit();
        let created = Ok(Load {
            id: "ld_01".into(),
            data: in_flight.draft.clone(),
            created_at: "2024-03-01T00:00:00Z".into(),
            updated_at: "2024-03-01T00:00:00Z".into(),
        });
        let after = DraftFormState::after_submit(in_flight.draft.clone(), &created);
        assert!(!after.submitting);
        assert_eq!(after.error, None);
    }

    #[test]
    fn begin_submit_drops_a_stale_error_but_keeps_the_draft() {
        let failed = DraftFormState::after_submit(
            edited_state().draft,
            &Err(ApiError::Transport("offline".into())),
        );
        assert!(failed.error.is_some());

        let retried = failed.begin_submit();
        assert!(retried.submitting);
        assert_eq!(retried.error, None);
        assert_eq!(retried.draft, failed.draft);
    }

    #[test]
    fn dismissing_the_error_leaves_everything_else_alone() {
        let failed = DraftFormState::after_submit(
            edited_state().draft,
            &Err(ApiError::Transport("offline".into())),
        );
        let dismissed = failed.without_error();
        assert_eq!(dismissed.error, None);
        assert_eq!(dismissed.draft, failed.draft);
        assert_eq!(dismissed.submitting, failed.submitting);
    }
}
