use yew::prelude::*;
use yew_router::prelude::*;

use super::app::Route;
use crate::hooks::{use_load, LoadState};
use crate::models::{Party, Stop};
use crate::utils::{format_currency, format_timestamp, or_na};

#[derive(Properties, PartialEq)]
pub struct LoadDetailProps {
    pub id: String,
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    title: AttrValue,
    children: Children,
}

#[function_component(DetailSection)]
fn detail_section(props: &SectionProps) -> Html {
    html! {
        <section class="detail-section">
            <h2>{ props.title.clone() }</h2>
            <div class="detail-grid">
                { props.children.clone() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct InfoRowProps {
    label: AttrValue,
    value: AttrValue,
}

#[function_component(InfoRow)]
fn info_row(props: &InfoRowProps) -> Html {
    html! {
        <div class="info-row">
            <span class="info-label">{ props.label.clone() }{":"}</span>
            <span class="info-value">{ or_na(&props.value) }</span>
        </div>
    }
}

fn party_rows(party: &Party) -> Html {
    html! {
        <>
            <InfoRow label="Name" value={party.name.clone()} />
            <InfoRow label="Account Number" value={party.account_number.clone()} />
            <InfoRow label="Contact Name" value={party.contact.name.clone()} />
            <InfoRow label="Contact Phone" value={party.contact.phone.clone()} />
            <InfoRow label="Contact Email" value={party.contact.email.clone().unwrap_or_default()} />
            <InfoRow label="Address" value={party.address.street.clone()} />
            <InfoRow label="City" value={party.address.city.clone()} />
            <InfoRow label="State" value={party.address.state.clone()} />
            <InfoRow label="Zip Code" value={party.address.zip_code.clone()} />
        </>
    }
}

fn stop_rows(stop: &Stop) -> Html {
    html! {
        <>
            <InfoRow label="Facility Name" value={stop.facility_name.clone()} />
            <InfoRow label="Scheduled Time" value={format_timestamp(&stop.scheduled_time)} />
            <InfoRow label="Contact Name" value={stop.contact.name.clone()} />
            <InfoRow label="Contact Phone" value={stop.contact.phone.clone()} />
            <InfoRow label="Address" value={stop.address.street.clone()} />
            <InfoRow label="City" value={stop.address.city.clone()} />
            <InfoRow label="State" value={stop.address.state.clone()} />
            <InfoRow label="Zip Code" value={stop.address.zip_code.clone()} />
        </>
    }
}

/// Read-only view of one load, grouped into the same sections the create
/// form uses. Empty fields render "N/A" instead of disappearing.
#[function_component(LoadDetail)]
pub fn load_detail(props: &LoadDetailProps) -> Html {
    let navigator = use_navigator();
    let state = use_load(props.id.clone());

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Home);
            }
        })
    };

    let header = html! {
        <div class="page-header">
            <button class="btn" onclick={on_back.clone()}>{"‹ Back to Loads"}</button>
            <h1>{"Load Details"}</h1>
        </div>
    };

    match &*state {
        LoadState::Loading => html! {
            <div class="detail-page">
                { header }
                <div class="spinner">{"Loading..."}</div>
            </div>
        },
        LoadState::Failed(message) => html! {
            <div class="detail-page">
                { header }
                <div class="error-panel" role="alert">{ message.clone() }</div>
            </div>
        },
        LoadState::Loaded(load) => {
            let data = &load.data;
            let temperature = &data.specifications.temperature;
            html! {
                <div class="detail-page">
                    { header }

                    <DetailSection title="Basic Information">
                        <InfoRow label="Freight Load ID" value={data.freight_load_id.clone()} />
                        <InfoRow label="External TMS ID" value={data.external_tms_load_id.clone()} />
                        <InfoRow label="Status" value={data.status.code.value.clone()} />
                        <InfoRow label="Status Notes" value={data.status.notes.clone()} />
                        <InfoRow label="Status Description" value={data.status.description.clone()} />
                        <InfoRow label="Operator" value={data.operator.clone()} />
                        <InfoRow label="PO Numbers" value={data.po_nums.clone()} />
                        <InfoRow label="Created At" value={format_timestamp(&load.created_at)} />
                        <InfoRow label="Updated At" value={format_timestamp(&load.updated_at)} />
                    </DetailSection>

                    <DetailSection title="Quantities">
                        <InfoRow label="Route Miles" value={format!("{} miles", data.route_miles)} />
                        <InfoRow label="Total Weight" value={format!("{} lbs", data.total_weight)} />
                        <InfoRow label="Billable Weight" value={format!("{} lbs", data.billable_weight)} />
                        <InfoRow label="In Pallet Count" value={data.in_pallet_count.to_string()} />
                        <InfoRow label="Out Pallet Count" value={data.out_pallet_count.to_string()} />
                        <InfoRow label="Commodities" value={data.num_commodities.to_string()} />
                    </DetailSection>

                    <DetailSection title="Customer Information">
                        { party_rows(&data.customer) }
                    </DetailSection>

                    <DetailSection title="Bill To Information">
                        { party_rows(&data.bill_to) }
                    </DetailSection>

                    <DetailSection title="Pickup Information">
                        { stop_rows(&data.pickup) }
                    </DetailSection>

                    <DetailSection title="Delivery Information">
                        { stop_rows(&data.consignee) }
                    </DetailSection>

                    <DetailSection title="Carrier & Equipment">
                        <InfoRow label="Carrier Name" value={data.carrier.name.clone()} />
                        <InfoRow label="SCAC" value={data.carrier.scac.clone()} />
                        <InfoRow label="Contact Name" value={data.carrier.contact.name.clone()} />
                        <InfoRow label="Contact Phone" value={data.carrier.contact.phone.clone()} />
                        <InfoRow label="Equipment Type" value={data.carrier.equipment.kind.clone()} />
                        <InfoRow label="Equipment Length" value={data.carrier.equipment.length.clone()} />
                    </DetailSection>

                    <DetailSection title="Rate Information">
                        <InfoRow label="Base Rate" value={format_currency(data.rate_data.base_rate)} />
                        <InfoRow label="Fuel Surcharge" value={format_currency(data.rate_data.fuel_surcharge)} />
                        <InfoRow label="Total Rate" value={format_currency(data.rate_data.total_rate)} />
                        <InfoRow label="Currency" value={data.rate_data.currency.clone()} />
                    </DetailSection>

                    <DetailSection title="Specifications">
                        <InfoRow label="Temperature Min" value={format!("{} °{}", temperature.min, temperature.unit)} />
                        <InfoRow label="Temperature Max" value={format!("{} °{}", temperature.max, temperature.unit)} />
                        <InfoRow label="Service Level" value={data.specifications.service_level.clone()} />
                        <InfoRow label="Special Instructions" value={data.specifications.special_instructions.clone()} />
                    </DetailSection>
                </div>
            }
        }
    }
}
