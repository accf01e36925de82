pub mod load;

pub use load::{
    CarrierField, FieldChange, Load, LoadData, LoadsResponse, Party, PartyField, RateField,
    SpecField, StatusField, Stop, StopField,
};
