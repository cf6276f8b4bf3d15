//! The sign-in screen. Smelt delegates credentials to the realm's identity
//! provider, so all this page does is remember where the user was headed and
//! hand the browser to the backend's authorization endpoint. The backend
//! sends the user back to /ui/login/callback when the provider is done.

use gloo::console;
use smelt_proto::constants::uri::V1_AUTH_LOGIN;
use smelt_web_ui_shared::constants::URL_LOGIN;
use smelt_web_ui_shared::models::push_return_location;
use smelt_web_ui_shared::utils::{do_footer, window};
use smelt_web_ui_shared::{add_body_form_classes, logo_img, remove_body_form_classes};
use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;

pub struct LoginApp {}

pub enum LoginAppMsg {
    Begin,
}

impl Component for LoginApp {
    type Message = LoginAppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("login::create");
        add_body_form_classes!();
        LoginApp {}
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginAppMsg::Begin => {
                let current_loc = window()
                    .location()
                    .href()
                    .unwrap_or(URL_LOGIN.to_string());
                push_return_location(&current_loc);

                window()
                    .location()
                    .set_href(V1_AUTH_LOGIN)
                    .expect_throw("Failed to hand off to the authorization endpoint!");
                // Don't need to redraw as we are yolo-ing out.
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
        <>
            <main class="form-signin">
            <center>
                {logo_img()}
            </center>
            <div class="container">
              <form
                onsubmit={ ctx.link().callback(|e: SubmitEvent| {
                    e.prevent_default();
                    LoginAppMsg::Begin
                } ) }
                action="javascript:void(0);"
              >
                <h1 class="h3 mb-3 fw-normal">{ "Sign in to Smelt" }</h1>
                <button autofocus=true class="w-100 btn btn-lg btn-primary" type="submit">
                  { "Sign in" }
                </button>
              </form>
            </div>
            </main>
            { do_footer() }
        </>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        #[cfg(debug_assertions)]
        console::debug!("login::destroy");
        remove_body_form_classes!();
    }
}
