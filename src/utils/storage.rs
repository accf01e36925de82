use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage unavailable")?;
    storage
        .set_item(key, value)
        .map_err(|_| format!("failed to write '{}' to localStorage", key))
}

pub fn remove_item(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage unavailable")?;
    storage
        .remove_item(key)
        .map_err(|_| format!("failed to remove '{}' from localStorage", key))
}
