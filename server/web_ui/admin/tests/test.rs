//! Test harnesses for WASM things.
//!
//! Run with:
//!
//! ```shell
//! wasm-pack test --headless --firefox
//! ```
#![cfg(target_arch = "wasm32")]

use smelt_web_ui_shared::models::{
    clear_bearer_token, get_bearer_token, pop_login_success, push_login_success, set_bearer_token,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_login_success_notice_is_one_shot() {
    push_login_success();
    assert!(pop_login_success());
    // the first pop consumed it
    assert!(!pop_login_success());
}

#[wasm_bindgen_test]
fn test_bearer_token_round_trip() {
    clear_bearer_token();
    assert!(get_bearer_token().is_none());

    set_bearer_token("Bearer abc123".to_string());
    assert_eq!(get_bearer_token().as_deref(), Some("Bearer abc123"));

    clear_bearer_token();
    assert!(get_bearer_token().is_none());
}
