use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use super::app::Route;
use super::ErrorToast;
use crate::hooks::use_load_draft;
use crate::models::{
    CarrierField, FieldChange, Party, PartyField, RateField, SpecField, StatusField, Stop,
    StopField,
};

#[derive(Properties, PartialEq)]
struct FormSectionProps {
    title: AttrValue,
    #[prop_or_default]
    open: bool,
    children: Children,
}

/// Collapsible form group.
#[function_component(FormSection)]
fn form_section(props: &FormSectionProps) -> Html {
    html! {
        <details class="form-section" open={props.open}>
            <summary>{ props.title.clone() }</summary>
            <div class="form-grid">
                { props.children.clone() }
            </div>
        </details>
    }
}

fn text_field(label: &str, value: &str, required: bool, onchange: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            onchange.emit(input.value());
        }
    });
    html! {
        <div class="form-field">
            <label>{ label.to_string() }{ if required { " *" } else { "" } }</label>
            <input type="text" value={value.to_string()} {required} {oninput} />
        </div>
    }
}

fn number_field(label: &str, value: f64, onchange: Callback<f64>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            onchange.emit(input.value().parse().unwrap_or(0.0));
        }
    });
    html! {
        <div class="form-field">
            <label>{ label.to_string() }{" *"}</label>
            <input type="number" step="any" value={value.to_string()} required=true {oninput} />
        </div>
    }
}

fn count_field(label: &str, value: u32, onchange: Callback<u32>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            onchange.emit(input.value().parse().unwrap_or(0));
        }
    });
    html! {
        <div class="form-field">
            <label>{ label.to_string() }{" *"}</label>
            <input type="number" min="0" step="1" value={value.to_string()} required=true {oninput} />
        </div>
    }
}

/// datetime-local input bound to a 'Z'-suffixed ISO string in the draft.
fn datetime_field(label: &str, value: &str, onchange: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            let value = input.value();
            if value.is_empty() {
                onchange.emit(String::new());
            } else {
                onchange.emit(format!("{}Z", value));
            }
        }
    });
    let local = value.strip_suffix('Z').unwrap_or(value).to_string();
    html! {
        <div class="form-field">
            <label>{ label.to_string() }{" *"}</label>
            <input type="datetime-local" value={local} required=true {oninput} />
        </div>
    }
}

fn textarea_field(label: &str, value: &str, onchange: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
            onchange.emit(input.value());
        }
    });
    html! {
        <div class="form-field form-field-wide">
            <label>{ label.to_string() }</label>
            <textarea rows="3" value={value.to_string()} {oninput} />
        </div>
    }
}

fn party_section(
    title: &str,
    party: &Party,
    wrap: fn(PartyField) -> FieldChange,
    update: &Callback<FieldChange>,
) -> Html {
    let field = |leaf: fn(String) -> PartyField| {
        let update = update.clone();
        Callback::from(move |v: String| update.emit(wrap(leaf(v))))
    };
    html! {
        <FormSection title={title.to_string()}>
            { text_field("Name", &party.name, true, field(PartyField::Name)) }
            { text_field("Account Number", &party.account_number, true, field(PartyField::AccountNumber)) }
            { text_field("Contact Name", &party.contact.name, true, field(PartyField::ContactName)) }
            { text_field("Contact Email", party.contact.email.as_deref().unwrap_or(""), false, field(PartyField::ContactEmail)) }
            { text_field("Contact Phone", &party.contact.phone, true, field(PartyField::ContactPhone)) }
            { text_field("Street Address", &party.address.street, true, field(PartyField::Street)) }
            { text_field("City", &party.address.city, true, field(PartyField::City)) }
            { text_field("State", &party.address.state, true, field(PartyField::State)) }
            { text_field("Zip Code", &party.address.zip_code, true, field(PartyField::ZipCode)) }
        </FormSection>
    }
}

fn stop_section(
    title: &str,
    stop: &Stop,
    wrap: fn(StopField) -> FieldChange,
    update: &Callback<FieldChange>,
) -> Html {
    let field = |leaf: fn(String) -> StopField| {
        let update = update.clone();
        Callback::from(move |v: String| update.emit(wrap(leaf(v))))
    };
    html! {
        <FormSection title={title.to_string()}>
            { text_field("Facility Name", &stop.facility_name, true, field(StopField::FacilityName)) }
            { datetime_field("Scheduled Time", &stop.scheduled_time, field(StopField::ScheduledTime)) }
            { text_field("Contact Name", &stop.contact.name, true, field(StopField::ContactName)) }
            { text_field("Contact Phone", &stop.contact.phone, true, field(StopField::ContactPhone)) }
            { text_field("Street Address", &stop.address.street, true, field(StopField::Street)) }
            { text_field("City", &stop.address.city, true, field(StopField::City)) }
            { text_field("State", &stop.address.state, true, field(StopField::State)) }
            { text_field("Zip Code", &stop.address.zip_code, true, field(StopField::ZipCode)) }
        </FormSection>
    }
}

/// Create-load form. Holds a local draft seeded with the documented
/// defaults; every input dispatches a [`FieldChange`] through the draft
/// hook, and submit posts the draft as-is.
#[function_component(CreateLoad)]
pub fn create_load() -> Html {
    let navigator = use_navigator();
    let handle = use_load_draft();
    let form = &*handle.form;
    let draft = &form.draft;
    let update = &handle.update;

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Home);
            }
        })
    };

    let onsubmit = {
        let submit = handle.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_dismiss_error = handle.dismiss_error.clone();

    let text = |wrap: fn(String) -> FieldChange| {
        let update = update.clone();
        Callback::from(move |v: String| update.emit(wrap(v)))
    };
    let status = |leaf: fn(String) -> StatusField| {
        let update = update.clone();
        Callback::from(move |v: String| update.emit(FieldChange::Status(leaf(v))))
    };
    let carrier = |leaf: fn(String) -> CarrierField| {
        let update = update.clone();
        Callback::from(move |v: String| update.emit(FieldChange::Carrier(leaf(v))))
    };
    let rate = |leaf: fn(f64) -> RateField| {
        let update = update.clone();
        Callback::from(move |v: f64| update.emit(FieldChange::Rate(leaf(v))))
    };
    let rate_text = |leaf: fn(String) -> RateField| {
        let update = update.clone();
        Callback::from(move |v: String| update.emit(FieldChange::Rate(leaf(v))))
    };
    let spec_text = |leaf: fn(String) -> SpecField| {
        let update = update.clone();
        Callback::from(move |v: String| update.emit(FieldChange::Specs(leaf(v))))
    };
    let spec_number = |leaf: fn(f64) -> SpecField| {
        let update = update.clone();
        Callback::from(move |v: f64| update.emit(FieldChange::Specs(leaf(v))))
    };
    let number = |wrap: fn(f64) -> FieldChange| {
        let update = update.clone();
        Callback::from(move |v: f64| update.emit(wrap(v)))
    };
    let count = |wrap: fn(u32) -> FieldChange| {
        let update = update.clone();
        Callback::from(move |v: u32| update.emit(wrap(v)))
    };

    html! {
        <form class="create-page" {onsubmit}>
            <div class="page-header">
                <button type="button" class="btn" onclick={on_back}>{"‹ Back to Loads"}</button>
                <h1>{"Create New Load"}</h1>
            </div>

            <FormSection title="Basic Information" open=true>
                { text_field("External TMS Load ID", &draft.external_tms_load_id, true, text(FieldChange::ExternalTmsLoadId)) }
                { text_field("Freight Load ID", &draft.freight_load_id, true, text(FieldChange::FreightLoadId)) }
                { text_field("Status Code Key", &draft.status.code.key, true, status(StatusField::CodeKey)) }
                { text_field("Status Code Value", &draft.status.code.value, true, status(StatusField::CodeValue)) }
                { text_field("Status Notes", &draft.status.notes, false, status(StatusField::Notes)) }
                { text_field("Status Description", &draft.status.description, false, status(StatusField::Description)) }
                { text_field("PO Numbers", &draft.po_nums, false, text(FieldChange::PoNums)) }
                { text_field("Operator", &draft.operator, false, text(FieldChange::Operator)) }
            </FormSection>

            { party_section("Customer Information", &draft.customer, FieldChange::Customer, update) }
            { party_section("Bill To Information", &draft.bill_to, FieldChange::BillTo, update) }
            { stop_section("Pickup Information", &draft.pickup, FieldChange::Pickup, update) }
            { stop_section("Delivery Information", &draft.consignee, FieldChange::Consignee, update) }

            <FormSection title="Carrier Information">
                { text_field("Carrier Name", &draft.carrier.name, true, carrier(CarrierField::Name)) }
                { text_field("SCAC", &draft.carrier.scac, true, carrier(CarrierField::Scac)) }
                { text_field("Contact Name", &draft.carrier.contact.name, true, carrier(CarrierField::ContactName)) }
                { text_field("Contact Phone", &draft.carrier.contact.phone, true, carrier(CarrierField::ContactPhone)) }
                { text_field("Equipment Type", &draft.carrier.equipment.kind, true, carrier(CarrierField::EquipmentType)) }
                { text_field("Equipment Length", &draft.carrier.equipment.length, true, carrier(CarrierField::EquipmentLength)) }
            </FormSection>

            <FormSection title="Rate Information">
                { number_field("Base Rate", draft.rate_data.base_rate, rate(RateField::BaseRate)) }
                { number_field("Fuel Surcharge", draft.rate_data.fuel_surcharge, rate(RateField::FuelSurcharge)) }
                { number_field("Total Rate", draft.rate_data.total_rate, rate(RateField::TotalRate)) }
                { text_field("Currency", &draft.rate_data.currency, true, rate_text(RateField::Currency)) }
            </FormSection>

            <FormSection title="Specifications">
                { number_field("Temperature Min", draft.specifications.temperature.min, spec_number(SpecField::TemperatureMin)) }
                { number_field("Temperature Max", draft.specifications.temperature.max, spec_number(SpecField::TemperatureMax)) }
                { text_field("Temperature Unit", &draft.specifications.temperature.unit, true, spec_text(SpecField::TemperatureUnit)) }
                { text_field("Service Level", &draft.specifications.service_level, true, spec_text(SpecField::ServiceLevel)) }
                { textarea_field("Special Instructions", &draft.specifications.special_instructions, spec_text(SpecField::SpecialInstructions)) }
            </FormSection>

            <FormSection title="Load Details">
                { count_field("In Pallet Count", draft.in_pallet_count, count(FieldChange::InPalletCount)) }
                { count_field("Out Pallet Count", draft.out_pallet_count, count(FieldChange::OutPalletCount)) }
                { count_field("Number of Commodities", draft.num_commodities, count(FieldChange::NumCommodities)) }
                { number_field("Total Weight", draft.total_weight, number(FieldChange::TotalWeight)) }
                { number_field("Billable Weight", draft.billable_weight, number(FieldChange::BillableWeight)) }
                { number_field("Route Miles", draft.route_miles, number(FieldChange::RouteMiles)) }
            </FormSection>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled={form.submitting}>
                    { if form.submitting { "Creating..." } else { "Create Load" } }
                </button>
            </div>

            <ErrorToast message={form.error.clone()} on_dismiss={on_dismiss_error} />
        </form>
    }
}
