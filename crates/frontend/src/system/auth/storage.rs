use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read a raw localStorage value
pub fn read_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Bearer token issued by the sign-in service
pub fn get_access_token() -> Option<String> {
    read_item(ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
}

/// Drop a token the API no longer accepts
pub fn clear_access_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
