use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::app::Route;
use super::ErrorToast;
use crate::hooks::use_loads;
use crate::utils::{format_currency, format_timestamp};

const PAGE_SIZE_OPTIONS: [u32; 4] = [5, 10, 25, 50];

/// Rows visible on a page given the server-reported total.
fn rows_on_page(page: u32, size: u32, total: u64) -> u64 {
    let offset = u64::from(page.saturating_sub(1)) * u64::from(size);
    total.saturating_sub(offset).min(u64::from(size))
}

fn total_pages(size: u32, total: u64) -> u64 {
    (total.div_ceil(u64::from(size))).max(1)
}

/// Paginated loads grid. Pagination is server driven: every page or
/// page-size change triggers a fresh fetch in [`use_loads`].
#[function_component(LoadsTable)]
pub fn loads_table() -> Html {
    let navigator = use_navigator();
    let page = use_state(|| 1u32);
    let size = use_state(|| 10u32);
    let handle = use_loads(*page, *size);

    let pages = total_pages(*size, *handle.total);

    let on_create = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::CreateLoad);
            }
        })
    };

    let on_prev = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            if *page > 1 {
                page.set(*page - 1);
            }
        })
    };

    let on_next = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            page.set(*page + 1);
        })
    };

    let on_size_change = {
        let page = page.clone();
        let size = size.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(new_size) = select.value().parse::<u32>() {
                    size.set(new_size);
                    page.set(1);
                }
            }
        })
    };

    let on_dismiss_error = {
        let error = handle.error.clone();
        Callback::from(move |_: ()| error.set(None))
    };

    let rows = handle
        .loads
        .iter()
        .map(|load| {
            let onclick = {
                let navigator = navigator.clone();
                let id = load.id.clone();
                Callback::from(move |_: MouseEvent| {
                    if let Some(navigator) = navigator.as_ref() {
                        navigator.push(&Route::LoadDetail { id: id.clone() });
                    }
                })
            };
            html! {
                <tr key={load.id.clone()} class="load-row" {onclick}>
                    <td>{ load.data.freight_load_id.clone() }</td>
                    <td>{ load.data.customer.name.clone() }</td>
                    <td>{ load.data.status.code.value.clone() }</td>
                    <td>{ load.data.pickup.address.city.clone() }</td>
                    <td>{ load.data.consignee.address.city.clone() }</td>
                    <td class="numeric">{ format_currency(load.data.rate_data.total_rate) }</td>
                    <td>{ format_timestamp(&load.created_at) }</td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="loads-page">
            <div class="page-header">
                <h1>{"Loads"}</h1>
                <button class="btn btn-primary" onclick={on_create}>{"+ Create Load"}</button>
            </div>

            <div class="table-wrapper">
                <table class="loads-table">
                    <thead>
                        <tr>
                            <th>{"Freight ID"}</th>
                            <th>{"Customer"}</th>
                            <th>{"Status"}</th>
                            <th>{"Pickup Location"}</th>
                            <th>{"Delivery Location"}</th>
                            <th class="numeric">{"Total Rate"}</th>
                            <th>{"Created"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if *handle.loading {
                            <tr class="table-status"><td colspan="7">{"Loading..."}</td></tr>
                        } else if handle.loads.is_empty() {
                            <tr class="table-status"><td colspan="7">{"No loads found"}</td></tr>
                        } else {
                            { rows }
                        }
                    </tbody>
                </table>
            </div>

            <div class="table-footer">
                <span class="row-count">
                    { format!("Showing {} of {} loads", rows_on_page(*page, *size, *handle.total), *handle.total) }
                </span>
                <div class="pagination">
                    <label>
                        {"Rows per page: "}
                        <select onchange={on_size_change}>
                            {
                                PAGE_SIZE_OPTIONS.iter().map(|option| html! {
                                    <option value={option.to_string()} selected={*option == *size}>
                                        { option.to_string() }
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </label>
                    <button class="btn" onclick={on_prev} disabled={*page <= 1}>{"‹ Prev"}</button>
                    <span>{ format!("Page {} of {}", *page, pages) }</span>
                    <button class="btn" onclick={on_next} disabled={u64::from(*page) >= pages}>{"Next ›"}</button>
                </div>
            </div>

            <ErrorToast message={(*handle.error).clone()} on_dismiss={on_dismiss_error} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_count_is_min_of_size_and_remainder() {
        // 41 loads, 10 per page
        assert_eq!(rows_on_page(1, 10, 41), 10);
        assert_eq!(rows_on_page(4, 10, 41), 10);
        assert_eq!(rows_on_page(5, 10, 41), 1);
        assert_eq!(rows_on_page(6, 10, 41), 0);
        // empty result set
        assert_eq!(rows_on_page(1, 25, 0), 0);
    }

    #[test]
    fn page_count_rounds_up_and_never_hits_zero() {
        assert_eq!(total_pages(10, 41), 5);
        assert_eq!(total_pages(10, 40), 4);
        assert_eq!(total_pages(25, 3), 1);
        assert_eq!(total_pages(10, 0), 1);
    }
}
