use serde::{Deserialize, Serialize};

/// Postal address embedded in several places of a load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Contact person. Email is optional and omitted from the wire when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Paired status enumeration, e.g. key "2102" <-> value "Covered".
/// Key/value agreement is the caller's responsibility; no mapping table
/// exists on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCode {
    pub key: String,
    pub value: String,
}

impl Default for StatusCode {
    fn default() -> Self {
        Self {
            key: "2102".to_string(),
            value: "Covered".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub code: StatusCode,
    pub notes: String,
    pub description: String,
}

/// Billing/ordering party. Shared shape of `customer` and `billTo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    pub account_number: String,
    pub address: Address,
    pub contact: Contact,
}

/// Pickup or delivery stop. `scheduled_time` is an ISO-8601 UTC string
/// ('Z'-suffixed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub facility_name: String,
    pub scheduled_time: String,
    pub contact: Contact,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    #[serde(rename = "type")]
    pub kind: String,
    pub length: String,
}

impl Default for Equipment {
    fn default() -> Self {
        Self {
            kind: "DryVan".to_string(),
            length: "53".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    pub name: String,
    pub scac: String,
    pub contact: Contact,
    pub equipment: Equipment,
}

/// Rate breakdown. Nothing reconciles `total_rate` against
/// `base_rate + fuel_surcharge`; the caller supplies consistent values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateData {
    pub base_rate: f64,
    pub fuel_surcharge: f64,
    pub total_rate: f64,
    pub currency: String,
}

impl Default for RateData {
    fn default() -> Self {
        Self {
            base_rate: 0.0,
            fuel_surcharge: 0.0,
            total_rate: 0.0,
            currency: "USD".to_string(),
        }
    }
}

/// Temperature range. `min <= max` is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Temperature {
    pub min: f64,
    pub max: f64,
    pub unit: String,
}

impl Default for Temperature {
    fn default() -> Self {
        Self {
            min: 35.0,
            max: 75.0,
            unit: "F".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specifications {
    pub temperature: Temperature,
    pub service_level: String,
    pub special_instructions: String,
}

impl Default for Specifications {
    fn default() -> Self {
        Self {
            temperature: Temperature::default(),
            service_level: "Standard".to_string(),
            special_instructions: String::new(),
        }
    }
}

/// Client-owned portion of a load: everything except the server-assigned
/// `id`/`createdAt`/`updatedAt`. This is exactly the create request body,
/// and `Default` yields the documented draft seed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadData {
    #[serde(rename = "externalTMSLoadID")]
    pub external_tms_load_id: String,
    #[serde(rename = "freightLoadID")]
    pub freight_load_id: String,
    pub status: Status,
    pub customer: Party,
    pub bill_to: Party,
    pub pickup: Stop,
    pub consignee: Stop,
    pub carrier: Carrier,
    pub rate_data: RateData,
    pub specifications: Specifications,
    pub in_pallet_count: u32,
    pub out_pallet_count: u32,
    pub num_commodities: u32,
    pub total_weight: f64,
    pub billable_weight: f64,
    /// Comma-separated purchase order numbers, not a structured list.
    pub po_nums: String,
    pub operator: String,
    pub route_miles: f64,
}

impl Default for LoadData {
    fn default() -> Self {
        Self {
            external_tms_load_id: String::new(),
            freight_load_id: String::new(),
            status: Status::default(),
            customer: Party::default(),
            bill_to: Party::default(),
            pickup: Stop::default(),
            consignee: Stop::default(),
            carrier: Carrier::default(),
            rate_data: RateData::default(),
            specifications: Specifications::default(),
            in_pallet_count: 0,
            out_pallet_count: 0,
            num_commodities: 0,
            total_weight: 0.0,
            billable_weight: 0.0,
            po_nums: String::new(),
            operator: "SYSTEM".to_string(),
            route_miles: 0.0,
        }
    }
}

/// A full load record as returned by the backend. The server is the sole
/// owner of `id`, `created_at` and `updated_at`; this client never edits a
/// load after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    pub id: String,
    #[serde(flatten)]
    pub data: LoadData,
    pub created_at: String,
    pub updated_at: String,
}

/// One page of loads. Ordering is server-determined; the client never
/// sorts or filters on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadsResponse {
    pub loads: Vec<Load>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
}

// ---------------------------------------------------------------------------
// Tagged field updates
//
// The create form edits one leaf of the draft at a time. Instead of a
// stringly "a.b.c" path, each editable leaf is a variant of a small sum
// type, dispatched by pattern match, so the compiler checks field coverage.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum StatusField {
    CodeKey(String),
    CodeValue(String),
    Notes(String),
    Description(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartyField {
    Name(String),
    AccountNumber(String),
    ContactName(String),
    ContactEmail(String),
    ContactPhone(String),
    Street(String),
    City(String),
    State(String),
    ZipCode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum StopField {
    FacilityName(String),
    ScheduledTime(String),
    ContactName(String),
    ContactPhone(String),
    Street(String),
    City(String),
    State(String),
    ZipCode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CarrierField {
    Name(String),
    Scac(String),
    ContactName(String),
    ContactPhone(String),
    EquipmentType(String),
    EquipmentLength(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RateField {
    BaseRate(f64),
    FuelSurcharge(f64),
    TotalRate(f64),
    Currency(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpecField {
    TemperatureMin(f64),
    TemperatureMax(f64),
    TemperatureUnit(String),
    ServiceLevel(String),
    SpecialInstructions(String),
}

/// A single edit to a load draft.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    ExternalTmsLoadId(String),
    FreightLoadId(String),
    PoNums(String),
    Operator(String),
    Status(StatusField),
    Customer(PartyField),
    BillTo(PartyField),
    Pickup(StopField),
    Consignee(StopField),
    Carrier(CarrierField),
    Rate(RateField),
    Specs(SpecField),
    InPalletCount(u32),
    OutPalletCount(u32),
    NumCommodities(u32),
    TotalWeight(f64),
    BillableWeight(f64),
    RouteMiles(f64),
}

impl Status {
    fn apply(&mut self, field: StatusField) {
        match field {
            StatusField::CodeKey(v) => self.code.key = v,
            StatusField::CodeValue(v) => self.code.value = v,
            StatusField::Notes(v) => self.notes = v,
            StatusField::Description(v) => self.description = v,
        }
    }
}

impl Party {
    fn apply(&mut self, field: PartyField) {
        match field {
            PartyField::Name(v) => self.name = v,
            PartyField::AccountNumber(v) => self.account_number = v,
            PartyField::ContactName(v) => self.contact.name = v,
            PartyField::ContactEmail(v) => {
                self.contact.email = if v.is_empty() { None } else { Some(v) };
            }
            PartyField::ContactPhone(v) => self.contact.phone = v,
            PartyField::Street(v) => self.address.street = v,
            PartyField::City(v) => self.address.city = v,
            PartyField::State(v) => self.address.state = v,
            PartyField::ZipCode(v) => self.address.zip_code = v,
        }
    }
}

impl Stop {
    fn apply(&mut self, field: StopField) {
        match field {
            StopField::FacilityName(v) => self.facility_name = v,
            StopField::ScheduledTime(v) => self.scheduled_time = v,
            StopField::ContactName(v) => self.contact.name = v,
            StopField::ContactPhone(v) => self.contact.phone = v,
            StopField::Street(v) => self.address.street = v,
            StopField::City(v) => self.address.city = v,
            StopField::State(v) => self.address.state = v,
            StopField::ZipCode(v) => self.address.zip_code = v,
        }
    }
}

impl Carrier {
    fn apply(&mut self, field: CarrierField) {
        match field {
            CarrierField::Name(v) => self.name = v,
            CarrierField::Scac(v) => self.scac = v,
            CarrierField::ContactName(v) => self.contact.name = v,
            CarrierField::ContactPhone(v) => self.contact.phone = v,
            CarrierField::EquipmentType(v) => self.equipment.kind = v,
            CarrierField::EquipmentLength(v) => self.equipment.length = v,
        }
    }
}

impl RateData {
    fn apply(&mut self, field: RateField) {
        match field {
            RateField::BaseRate(v) => self.base_rate = v,
            RateField::FuelSurcharge(v) => self.fuel_surcharge = v,
            RateField::TotalRate(v) => self.total_rate = v,
            RateField::Currency(v) => self.currency = v,
        }
    }
}

impl Specifications {
    fn apply(&mut self, field: SpecField) {
        match field {
            SpecField::TemperatureMin(v) => self.temperature.min = v,
            SpecField::TemperatureMax(v) => self.temperature.max = v,
            SpecField::TemperatureUnit(v) => self.temperature.unit = v,
            SpecField::ServiceLevel(v) => self.service_level = v,
            SpecField::SpecialInstructions(v) => self.special_instructions = v,
        }
    }
}

impl LoadData {
    /// Apply a single field edit in place. The create view clones the
    /// current draft, applies the change to the clone and swaps it in, so
    /// earlier draft values are never mutated.
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::ExternalTmsLoadId(v) => self.external_tms_load_id = v,
            FieldChange::FreightLoadId(v) => self.freight_load_id = v,
            FieldChange::PoNums(v) => self.po_nums = v,
            FieldChange::Operator(v) => self.operator = v,
            FieldChange::Status(f) => self.status.apply(f),
            FieldChange::Customer(f) => self.customer.apply(f),
            FieldChange::BillTo(f) => self.bill_to.apply(f),
            FieldChange::Pickup(f) => self.pickup.apply(f),
            FieldChange::Consignee(f) => self.consignee.apply(f),
            FieldChange::Carrier(f) => self.carrier.apply(f),
            FieldChange::Rate(f) => self.rate_data.apply(f),
            FieldChange::Specs(f) => self.specifications.apply(f),
            FieldChange::InPalletCount(v) => self.in_pallet_count = v,
            FieldChange::OutPalletCount(v) => self.out_pallet_count = v,
            FieldChange::NumCommodities(v) => self.num_commodities = v,
            FieldChange::TotalWeight(v) => self.total_weight = v,
            FieldChange::BillableWeight(v) => self.billable_weight = v,
            FieldChange::RouteMiles(v) => self.route_miles = v,
        }
    }

    /// Same as [`apply`], but returns an updated copy and leaves `self`
    /// untouched.
    pub fn with_change(&self, change: FieldChange) -> Self {
        let mut next = self.clone();
        next.apply(change);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn draft_defaults_match_seed_values() {
        let draft = LoadData::default();
        assert_eq!(draft.status.code.key, "2102");
        assert_eq!(draft.status.code.value, "Covered");
        assert_eq!(draft.carrier.equipment.kind, "DryVan");
        assert_eq!(draft.carrier.equipment.length, "53");
        assert_eq!(draft.rate_data.currency, "USD");
        assert_eq!(draft.specifications.temperature.min, 35.0);
        assert_eq!(draft.specifications.temperature.max, 75.0);
        assert_eq!(draft.specifications.temperature.unit, "F");
        assert_eq!(draft.specifications.service_level, "Standard");
        assert_eq!(draft.operator, "SYSTEM");
        assert_eq!(draft.in_pallet_count, 0);
        assert_eq!(draft.total_weight, 0.0);
        assert!(draft.freight_load_id.is_empty());
    }

    #[test]
    fn draft_serializes_without_server_owned_fields() {
        let value = serde_json::to_value(LoadData::default()).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("createdAt"));
        assert!(!object.contains_key("updatedAt"));
        // exact wire casing for the awkward identifiers
        assert!(object.contains_key("externalTMSLoadID"));
        assert!(object.contains_key("freightLoadID"));
        assert!(object.contains_key("poNums"));
        assert_eq!(value["status"]["code"]["key"], "2102");
        assert_eq!(value["carrier"]["equipment"]["type"], "DryVan");
        assert_eq!(value["rateData"]["currency"], "USD");
        assert_eq!(value["specifications"]["temperature"]["unit"], "F");
        // empty optional email stays off the wire
        assert!(value["customer"]["contact"].get("email").is_none());
    }

    #[test]
    fn field_change_touches_only_the_targeted_leaf() {
        let mut draft = LoadData::default();
        draft.customer.name = "Acme Foods".to_string();
        draft.customer.address.street = "1 Main St".to_string();
        draft.freight_load_id = "FL-100".to_string();
        let before = draft.clone();

        let after = draft.with_change(FieldChange::Customer(PartyField::City(
            "Chicago".to_string(),
        )));

        // the edit landed
        assert_eq!(after.customer.address.city, "Chicago");
        // siblings at every level survive
        assert_eq!(after.customer.address.street, "1 Main St");
        assert_eq!(after.customer.name, "Acme Foods");
        assert_eq!(after.freight_load_id, "FL-100");
        assert_eq!(after.bill_to, before.bill_to);
        assert_eq!(after.pickup, before.pickup);
        assert_eq!(after.rate_data, before.rate_data);
        // the prior draft is untouched
        assert_eq!(draft, before);
        assert!(draft.customer.address.city.is_empty());
    }

    #[test]
    fn empty_contact_email_clears_the_option() {
        let draft = LoadData::default()
            .with_change(FieldChange::Customer(PartyField::ContactEmail(
                "ops@acme.example".to_string(),
            )));
        assert_eq!(
            draft.customer.contact.email.as_deref(),
            Some("ops@acme.example")
        );

        let cleared = draft.with_change(FieldChange::Customer(PartyField::ContactEmail(
            String::new(),
        )));
        assert_eq!(cleared.customer.contact.email, None);
    }

    #[test]
    fn every_leaf_is_reachable_through_field_changes() {
        let mut draft = LoadData::default();
        let edits = vec![
            FieldChange::ExternalTmsLoadId("TMS-1".into()),
            FieldChange::FreightLoadId("FL-1".into()),
            FieldChange::PoNums("PO1,PO2".into()),
            FieldChange::Operator("jdoe".into()),
            FieldChange::Status(StatusField::CodeKey("2104".into())),
            FieldChange::Status(StatusField::CodeValue("Dispatched".into())),
            FieldChange::Status(StatusField::Notes("call ahead".into())),
            FieldChange::Status(StatusField::Description("night dock".into())),
            FieldChange::Customer(PartyField::Name("Acme".into())),
            FieldChange::Customer(PartyField::AccountNumber("A-9".into())),
            FieldChange::Customer(PartyField::ContactName("Pat".into())),
            FieldChange::Customer(PartyField::ContactEmail("p@acme.example".into())),
            FieldChange::Customer(PartyField::ContactPhone("555-0100".into())),
            FieldChange::Customer(PartyField::Street("1 Main".into())),
            FieldChange::Customer(PartyField::City("Chicago".into())),
            FieldChange::Customer(PartyField::State("IL".into())),
            FieldChange::Customer(PartyField::ZipCode("60601".into())),
            FieldChange::BillTo(PartyField::Name("Acme Billing".into())),
            FieldChange::Pickup(StopField::FacilityName("Dock 4".into())),
            FieldChange::Pickup(StopField::ScheduledTime("2024-03-01T08:00Z".into())),
            FieldChange::Pickup(StopField::ContactName("Lee".into())),
            FieldChange::Pickup(StopField::ContactPhone("555-0101".into())),
            FieldChange::Pickup(StopField::Street("2 Dock Rd".into())),
            FieldChange::Pickup(StopField::City("Gary".into())),
            FieldChange::Pickup(StopField::State("IN".into())),
            FieldChange::Pickup(StopField::ZipCode("46402".into())),
            FieldChange::Consignee(StopField::City("Denver".into())),
            FieldChange::Carrier(CarrierField::Name("Fast Freight".into())),
            FieldChange::Carrier(CarrierField::Scac("FSTF".into())),
            FieldChange::Carrier(CarrierField::ContactName("Sam".into())),
            FieldChange::Carrier(CarrierField::ContactPhone("555-0102".into())),
            FieldChange::Carrier(CarrierField::EquipmentType("Reefer".into())),
            FieldChange::Carrier(CarrierField::EquipmentLength("48".into())),
            FieldChange::Rate(RateField::BaseRate(1000.0)),
            FieldChange::Rate(RateField::FuelSurcharge(150.0)),
            FieldChange::Rate(RateField::TotalRate(1150.0)),
            FieldChange::Rate(RateField::Currency("USD".into())),
            FieldChange::Specs(SpecField::TemperatureMin(-10.0)),
            FieldChange::Specs(SpecField::TemperatureMax(0.0)),
            FieldChange::Specs(SpecField::TemperatureUnit("C".into())),
            FieldChange::Specs(SpecField::ServiceLevel("Expedited".into())),
            FieldChange::Specs(SpecField::SpecialInstructions("fragile".into())),
            FieldChange::InPalletCount(10),
            FieldChange::OutPalletCount(10),
            FieldChange::NumCommodities(3),
            FieldChange::TotalWeight(24000.0),
            FieldChange::BillableWeight(25000.0),
            FieldChange::RouteMiles(1024.0),
        ];
        for edit in edits {
            draft.apply(edit);
        }

        assert_eq!(draft.external_tms_load_id, "TMS-1");
        assert_eq!(draft.status.code.value, "Dispatched");
        assert_eq!(draft.customer.address.zip_code, "60601");
        assert_eq!(draft.consignee.address.city, "Denver");
        assert_eq!(draft.carrier.equipment.kind, "Reefer");
        assert_eq!(draft.rate_data.total_rate, 1150.0);
        assert_eq!(draft.specifications.temperature.min, -10.0);
        assert_eq!(draft.route_miles, 1024.0);
    }

    #[test]
    fn load_round_trips_through_wire_json() {
        let wire = json!({
            "id": "ld_01",
            "externalTMSLoadID": "TMS-77",
            "freightLoadID": "FL-77",
            "status": {
                "code": { "key": "2102", "value": "Covered" },
                "notes": "",
                "description": ""
            },
            "customer": {
                "name": "Acme",
                "accountNumber": "A-1",
                "address": { "street": "1 Main", "city": "Chicago", "state": "IL", "zipCode": "60601" },
                "contact": { "name": "Pat", "phone": "555-0100", "email": "p@acme.example" }
            },
            "billTo": {
                "name": "Acme Billing",
                "accountNumber": "A-1B",
                "address": { "street": "2 Main", "city": "Chicago", "state": "IL", "zipCode": "60601" },
                "contact": { "name": "Ana", "phone": "555-0103" }
            },
            "pickup": {
                "facilityName": "Dock 4",
                "scheduledTime": "2024-03-01T08:00:00Z",
                "contact": { "name": "Lee", "phone": "555-0101" },
                "address": { "street": "2 Dock Rd", "city": "Gary", "state": "IN", "zipCode": "46402" }
            },
            "consignee": {
                "facilityName": "DC West",
                "scheduledTime": "2024-03-03T16:00:00Z",
                "contact": { "name": "Kim", "phone": "555-0104" },
                "address": { "street": "9 Depot Way", "city": "Denver", "state": "CO", "zipCode": "80014" }
            },
            "carrier": {
                "name": "Fast Freight",
                "scac": "FSTF",
                "contact": { "name": "Sam", "phone": "555-0102" },
                "equipment": { "type": "Reefer", "length": "48" }
            },
            "rateData": { "baseRate": 1000.0, "fuelSurcharge": 150.0, "totalRate": 1150.0, "currency": "USD" },
            "specifications": {
                "temperature": { "min": -10.0, "max": 0.0, "unit": "C" },
                "serviceLevel": "Expedited",
                "specialInstructions": "fragile"
            },
            "inPalletCount": 10,
            "outPalletCount": 10,
            "numCommodities": 3,
            "totalWeight": 24000.0,
            "billableWeight": 25000.0,
            "poNums": "PO1,PO2",
            "operator": "jdoe",
            "routeMiles": 1024.0,
            "createdAt": "2024-03-01T00:00:00Z",
            "updatedAt": "2024-03-01T00:00:00Z"
        });

        let load: Load = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(load.id, "ld_01");
        assert_eq!(load.data.freight_load_id, "FL-77");
        assert_eq!(load.data.bill_to.contact.email, None);
        assert_eq!(load.data.consignee.address.city, "Denver");

        let back: Value = serde_json::to_value(&load).unwrap();
        assert_eq!(back, wire);
    }

    #[test]
    fn loads_response_parses_a_page() {
        let load: Load = serde_json::from_value(serde_json::json!({
            "id": "ld_02",
            "externalTMSLoadID": "", "freightLoadID": "",
            "status": { "code": { "key": "2102", "value": "Covered" }, "notes": "", "description": "" },
            "customer": Party::default(), "billTo": Party::default(),
            "pickup": Stop::default(), "consignee": Stop::default(),
            "carrier": Carrier::default(),
            "rateData": RateData::default(),
            "specifications": Specifications::default(),
            "inPalletCount": 0, "outPalletCount": 0, "numCommodities": 0,
            "totalWeight": 0.0, "billableWeight": 0.0,
            "poNums": "", "operator": "SYSTEM", "routeMiles": 0.0,
            "createdAt": "2024-03-01T00:00:00Z", "updatedAt": "2024-03-01T00:00:00Z"
        }))
        .unwrap();

        let page = LoadsResponse {
            loads: vec![load],
            total: 41,
            page: 1,
            size: 10,
        };
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["total"], 41);
        assert_eq!(value["loads"].as_array().unwrap().len(), 1);
    }
}
