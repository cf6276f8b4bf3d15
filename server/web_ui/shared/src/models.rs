//! State that lives in the browser's storage rather than in any one
//! component: the bearer token, the one-shot auth session id, and the
//! cross-bundle notices the login flow leaves behind for the console.

#[cfg(debug_assertions)]
use gloo::console;
use gloo::storage::{LocalStorage, SessionStorage as TemporaryStorage, Storage};
use wasm_bindgen::UnwrapThrowExt;

const BEARER_TOKEN: &str = "bearer_token";
const AUTH_SESSION_ID: &str = "auth_session_id";
const RETURN_LOCATION: &str = "return_location";
const LOGIN_SUCCESS: &str = "login_success";

pub fn set_bearer_token(r: String) {
    LocalStorage::set(BEARER_TOKEN, r).expect_throw(&format!("failed to set {}", BEARER_TOKEN));
}

pub fn get_bearer_token() -> Option<String> {
    let l: Result<String, _> = LocalStorage::get(BEARER_TOKEN);
    l.ok()
}

pub fn clear_bearer_token() {
    LocalStorage::delete(BEARER_TOKEN);
}

pub fn push_auth_session_id(r: String) {
    TemporaryStorage::set(AUTH_SESSION_ID, r).expect_throw(&format!(
        "failed to set {} in temporary storage",
        AUTH_SESSION_ID
    ));
}

pub fn pop_auth_session_id() -> Option<String> {
    let l: Result<String, _> = TemporaryStorage::get(AUTH_SESSION_ID);
    #[cfg(debug_assertions)]
    console::debug!(format!("{} -> {:?}", AUTH_SESSION_ID, l).as_str());
    TemporaryStorage::delete(AUTH_SESSION_ID);
    l.ok()
}

pub fn push_return_location(l: &str) {
    TemporaryStorage::set(RETURN_LOCATION, l).expect_throw(&format!(
        "failed to set {} in temporary storage",
        RETURN_LOCATION
    ));
}

pub fn pop_return_location() -> Option<String> {
    let l: Result<String, _> = TemporaryStorage::get(RETURN_LOCATION);
    #[cfg(debug_assertions)]
    console::debug!(format!("{} -> {:?}", RETURN_LOCATION, l).as_str());
    TemporaryStorage::delete(RETURN_LOCATION);
    l.ok()
}

/// Left behind by the login callback exactly once per successful login; the
/// admin console pops it and shows the success banner.
pub fn push_login_success() {
    TemporaryStorage::set(LOGIN_SUCCESS, true).expect_throw(&format!(
        "failed to set {} in temporary storage",
        LOGIN_SUCCESS
    ));
}

pub fn pop_login_success() -> bool {
    let l: Result<bool, _> = TemporaryStorage::get(LOGIN_SUCCESS);
    TemporaryStorage::delete(LOGIN_SUCCESS);
    l.unwrap_or(false)
}
