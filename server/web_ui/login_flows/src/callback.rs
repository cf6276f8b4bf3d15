//! The login callback screen. The identity provider sends the user back here
//! with `code` and `state` in the query string; we exchange them with the
//! backend, create the console session exactly once, and move on.

use gloo::console;
use serde::Deserialize;
use smelt_proto::constants::uri::{V1_AUTH_CALLBACK, V1_AUTH_SESSION};
use smelt_proto::v1::{AuthCallbackRequest, SessionCreateRequest, SessionCreateResponse};
use smelt_web_ui_shared::constants::{CSS_ALERT_DANGER, CSS_ALERT_INFO, URL_MACHINES};
use smelt_web_ui_shared::error::FetchError;
use smelt_web_ui_shared::models::{push_login_success, set_bearer_token};
use smelt_web_ui_shared::utils::{self, do_footer, loading_spinner};
use smelt_web_ui_shared::{
    add_body_form_classes, do_request, logo_img, remove_body_form_classes, request_body,
    RequestMethod,
};
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

/// Raw query parameters on the callback URL. The provider sends both; either
/// can be absent when someone lands here by hand or from a stale bookmark.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CallbackQuery {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl CallbackQuery {
    /// The exchange request, if both parameters are usable. Empty strings
    /// count as missing.
    pub(crate) fn into_request(self) -> Option<AuthCallbackRequest> {
        match (self.code, self.state) {
            (Some(code), Some(state)) if !code.is_empty() && !state.is_empty() => {
                Some(AuthCallbackRequest { code, state })
            }
            _ => None,
        }
    }
}

enum State {
    // The code/state exchange with the backend is in flight.
    Verifying,
    // Exchange accepted, session creation is in flight.
    EstablishingSession,
    // The callback URL never had usable parameters. Terminal.
    MissingParams,
    // The backend rejected the exchange, or session creation failed. Terminal.
    Failed,
}

pub struct LoginCallbackApp {
    state: State,
    // One-shot latch: armed synchronously before the session call is
    // spawned and never reset, so a re-delivered success can't start a
    // second session exchange while the first is still in flight.
    session_requested: bool,
}

#[derive(Debug)]
pub enum LoginCallbackMsg {
    VerifyOk,
    SessionCreated { token: String },
    Failed { emsg: String, opid: Option<String> },
}

impl From<FetchError> for LoginCallbackMsg {
    fn from(fe: FetchError) -> Self {
        LoginCallbackMsg::Failed {
            emsg: fe.as_string(),
            opid: None,
        }
    }
}

impl LoginCallbackApp {
    async fn fetch_callback(req: AuthCallbackRequest) -> Result<LoginCallbackMsg, FetchError> {
        let body = request_body(&req)?;
        let (opid, status, value, _) =
            do_request(V1_AUTH_CALLBACK, RequestMethod::POST, Some(body)).await?;

        #[cfg(debug_assertions)]
        console::debug!(&format!("fetch_callback result {}", status));

        if status == 200 {
            Ok(LoginCallbackMsg::VerifyOk)
        } else {
            let emsg = value.as_string().unwrap_or_default();
            Ok(LoginCallbackMsg::Failed { emsg, opid })
        }
    }

    async fn fetch_session() -> Result<LoginCallbackMsg, FetchError> {
        let body = request_body(&SessionCreateRequest::default())?;
        let (opid, status, value, _) =
            do_request(V1_AUTH_SESSION, RequestMethod::POST, Some(body)).await?;

        if status == 200 {
            let response: SessionCreateResponse = serde_wasm_bindgen::from_value(value)
                .map_err(|e| FetchError::from(JsValue::from(e)))?;
            Ok(LoginCallbackMsg::SessionCreated {
                token: response.token,
            })
        } else {
            let emsg = value.as_string().unwrap_or_default();
            Ok(LoginCallbackMsg::Failed { emsg, opid })
        }
    }

    /// Arms the one-shot latch. True on the first call only; callers must
    /// not start the session exchange when this returns false.
    fn begin_session_exchange(&mut self) -> bool {
        if self.session_requested {
            return false;
        }
        self.session_requested = true;
        self.state = State::EstablishingSession;
        true
    }
}

impl Component for LoginCallbackApp {
    type Message = LoginCallbackMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("callback::create");

        add_body_form_classes!();

        let query: CallbackQuery = ctx
            .link()
            .location()
            .and_then(|location| location.query::<CallbackQuery>().ok())
            .unwrap_or_default();

        match query.into_request() {
            Some(req) => {
                ctx.link().send_future(async {
                    match Self::fetch_callback(req).await {
                        Ok(v) => v,
                        Err(v) => v.into(),
                    }
                });
                LoginCallbackApp {
                    state: State::Verifying,
                    session_requested: false,
                }
            }
            // No request goes out, so there is no pending phase to wait on
            // before showing the notice.
            None => LoginCallbackApp {
                state: State::MissingParams,
                session_requested: false,
            },
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _props: &Self::Properties) -> bool {
        #[cfg(debug_assertions)]
        console::debug!("callback::change");
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        #[cfg(debug_assertions)]
        console::debug!(&format!("callback::update {:?}", msg));

        match msg {
            LoginCallbackMsg::VerifyOk => {
                if !self.begin_session_exchange() {
                    // Already handled; nothing to redraw.
                    return false;
                }
                ctx.link().send_future(async {
                    match Self::fetch_session().await {
                        Ok(v) => v,
                        Err(v) => v.into(),
                    }
                });
                true
            }
            LoginCallbackMsg::SessionCreated { token } => {
                set_bearer_token(format!("Bearer {}", token));
                // The one place per login this notice is pushed.
                push_login_success();

                // Replace the history entry so back-navigation can't land on
                // the callback URL again.
                let location = utils::window().location();
                match location.replace(URL_MACHINES) {
                    // No need to redraw, we are leaving.
                    Ok(_) => false,
                    Err(e) => {
                        console::error!(format!("{:?}", e).as_str());
                        self.state = State::Failed;
                        true
                    }
                }
            }
            LoginCallbackMsg::Failed { emsg, opid } => {
                console::error!(format!("opid - {:?}, msg - {}", opid, emsg).as_str());
                self.state = State::Failed;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body_content = match &self.state {
            State::Verifying | State::EstablishingSession => loading_spinner("Loading..."),
            State::MissingParams => html! {
                <div class={CSS_ALERT_INFO} role="alert">
                    { "Missing code or state in the callback URL." }
                </div>
            },
            State::Failed => html! {
                <div class={CSS_ALERT_DANGER} role="alert">
                    { "An error occurred during authentication. Please try logging in again." }
                </div>
            },
        };
        html! {
        <>
            <main class="form-signin">
            <center>
                {logo_img()}
            </center>
            <div class="container">
            { body_content }
            </div>
            </main>
            { do_footer() }
        </>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        #[cfg(debug_assertions)]
        console::debug!("callback::destroy");
        remove_body_form_classes!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(code: Option<&str>, state: Option<&str>) -> CallbackQuery {
        CallbackQuery {
            code: code.map(String::from),
            state: state.map(String::from),
        }
    }

    #[test]
    fn test_callback_query_complete() {
        let req = query(Some("abc"), Some("xyz")).into_request();
        assert_eq!(
            req,
            Some(AuthCallbackRequest {
                code: "abc".to_string(),
                state: "xyz".to_string(),
            })
        );
    }

    #[test]
    fn test_callback_query_missing_code() {
        assert_eq!(query(None, Some("xyz")).into_request(), None);
    }

    #[test]
    fn test_callback_query_missing_state() {
        assert_eq!(query(Some("abc"), None).into_request(), None);
    }

    #[test]
    fn test_callback_query_empty_values_count_as_missing() {
        assert_eq!(query(Some(""), Some("xyz")).into_request(), None);
        assert_eq!(query(Some("abc"), Some("")).into_request(), None);
    }

    #[test]
    fn test_session_exchange_latch_fires_once() {
        let mut app = LoginCallbackApp {
            state: State::Verifying,
            session_requested: false,
        };
        // Re-delivered verification successes must not re-arm the exchange.
        assert!(app.begin_session_exchange());
        assert!(!app.begin_session_exchange());
        assert!(!app.begin_session_exchange());
        assert!(matches!(app.state, State::EstablishingSession));
    }
}
