use constants::IMG_LOGO_SQUARE;
use error::FetchError;
use gloo::console;

use smelt_proto::constants::{APPLICATION_JSON, SOPID, SSESSIONID};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, RequestMode, Response};
use yew::{html, Html};

pub mod constants;
pub mod error;
#[macro_use]
pub mod macros;
pub mod models;
pub mod ui;
pub mod utils;

const CONTENT_TYPE: &str = "content-type";

/// Build and send a request to the backend, with some standard headers and
/// pull back (opid, status, json, headers)
pub async fn do_request(
    uri: &str,
    method: RequestMethod,
    body: Option<JsValue>,
) -> Result<(Option<String>, u16, JsValue, Headers), FetchError> {
    let opts = RequestInit::new();
    opts.set_method(&method.to_string());
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_credentials(RequestCredentials::SameOrigin);

    if let Some(body) = body {
        #[cfg(debug_assertions)]
        if method == RequestMethod::GET {
            gloo::console::debug!("This seems odd, you've supplied a body with a GET request?")
        }
        opts.set_body(&body);
    }

    let request = Request::new_with_str_and_init(uri, &opts)?;
    request
        .headers()
        .set(CONTENT_TYPE, APPLICATION_JSON)
        .expect_throw("failed to set content-type header");

    if let Some(sessionid) = models::pop_auth_session_id() {
        request
            .headers()
            .set(SSESSIONID, &sessionid)
            .expect_throw("failed to set auth session id header");
    }

    if let Some(bearer_token) = models::get_bearer_token() {
        request
            .headers()
            .set("authorization", &bearer_token)
            .expect_throw("failed to set authorisation header");
    }

    let window = utils::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into().expect_throw("Invalid response type");
    let status = resp.status();
    let headers: Headers = resp.headers();

    if let Some(sessionid) = headers.get(SSESSIONID).ok().flatten() {
        models::push_auth_session_id(sessionid);
    }

    let opid = headers.get(SOPID).ok().flatten();

    let body = match resp.json() {
        Ok(json_future) => match JsFuture::from(json_future).await {
            Ok(body) => body,
            Err(e) => {
                let e_msg = format!("future json error -> {:?}", e);
                console::error!(e_msg.as_str());
                JsValue::NULL
            }
        },
        Err(e) => {
            let e_msg = format!("response json error -> {:?}", e);
            console::error!(e_msg.as_str());
            JsValue::NULL
        }
    };

    Ok((opid, status, body, headers))
}

#[derive(Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RequestMethod {
    GET,
    POST,
    PUT,
}

impl std::fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestMethod::PUT => write!(f, "PUT"),
            RequestMethod::POST => write!(f, "POST"),
            RequestMethod::GET => write!(f, "GET"),
        }
    }
}

/// Serialize a request payload into the JSON string body that `do_request`
/// expects.
pub fn request_body<T: Serialize>(value: &T) -> Result<JsValue, FetchError> {
    let jsvalue = value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| FetchError::from(JsValue::from(e)))?;
    js_sys::JSON::stringify(&jsvalue)
        .map(JsValue::from)
        .map_err(FetchError::from)
}

/// Returns the smelt logo as an img node
pub fn logo_img() -> Html {
    html! {
        <img src={IMG_LOGO_SQUARE} alt="Smelt" class="smelt_logo" />
    }
}
