//! The admin console bundle: machines, subnets, and the DHCP snippet views
//! that hang off them.

pub mod components;
pub mod router;

use gloo::console;
use smelt_web_ui_shared::constants::{
    CSS_NAVBAR_BRAND, CSS_NAVBAR_LINKS_UL, CSS_NAVBAR_NAV, CSS_NAV_LINK, ID_NAVBAR_COLLAPSE,
    URL_LOGIN,
};
use smelt_web_ui_shared::logo_img;
use smelt_web_ui_shared::models::pop_login_success;
use smelt_web_ui_shared::ui::{signout_link, signout_modal, ui_logout};
use smelt_web_ui_shared::utils::do_footer;
#[allow(unused_imports)] // because it's needed to compile wasm things
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsValue, UnwrapThrowExt};
use yew::prelude::*;
use yew_router::prelude::Link;
use yew_router::{BrowserRouter, Switch};

use crate::router::AdminRoute;

pub struct AdminApp {
    /// true when the login flow just handed the user over
    fresh_login: bool,
}

#[derive(Clone)]
pub enum AdminAppMsg {
    Logout,
    LogoutComplete,
    DismissLoginNotice,
}

async fn fetch_logout() -> AdminAppMsg {
    if let Err((emsg, opid)) = ui_logout().await {
        console::error!(format!("logout failed, opid - {:?}, msg - {}", opid, emsg).as_str());
    }
    AdminAppMsg::LogoutComplete
}

impl Component for AdminApp {
    type Message = AdminAppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("admin::create");
        AdminApp {
            fresh_login: pop_login_success(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AdminAppMsg::Logout => {
                ctx.link().send_future(fetch_logout());
                false
            }
            AdminAppMsg::LogoutComplete => {
                gloo_utils::window()
                    .location()
                    .set_href(URL_LOGIN)
                    .expect_throw("Failed to redirect to the login page!");
                false
            }
            AdminAppMsg::DismissLoginNotice => {
                self.fresh_login = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let login_notice = self.fresh_login.then(|| {
            html! {
                <div class="alert alert-success alert-dismissible" role="alert">
                  { "Signed in successfully." }
                  <button
                    type="button"
                    class="btn-close"
                    aria-label="Close"
                    onclick={ ctx.link().callback(|_| AdminAppMsg::DismissLoginNotice) }
                  ></button>
                </div>
            }
        });

        html! {
            <BrowserRouter>
                <nav class={CSS_NAVBAR_NAV}>
                    <div class="container-fluid header">
                    <Link<AdminRoute> classes={CSS_NAVBAR_BRAND} to={AdminRoute::Home}>
                        { logo_img() }
                        { "Smelt Administration" }
                    </Link<AdminRoute>>
                    <button class="navbar-toggler bg-light" type="button" data-bs-toggle="collapse"
                        data-bs-target={["#", ID_NAVBAR_COLLAPSE].concat()}
                        aria-controls={ID_NAVBAR_COLLAPSE}
                        aria-expanded="false" aria-label="Toggle navigation">
                        <img src="/pkg/img/favicon.png" alt="Menu" />
                    </button>
                    <div class="collapse navbar-collapse" id={ID_NAVBAR_COLLAPSE}>
                        <ul class={CSS_NAVBAR_LINKS_UL}>
                        <li class="nav-item">
                            <Link<AdminRoute> classes={CSS_NAV_LINK} to={AdminRoute::Machines}>
                            { "Machines" }
                            </Link<AdminRoute>>
                        </li>
                        <li class="nav-item">
                            <Link<AdminRoute> classes={CSS_NAV_LINK} to={AdminRoute::Subnets}>
                            { "Subnets" }
                            </Link<AdminRoute>>
                        </li>
                        <li class="nav-item">
                            { signout_link() }
                        </li>
                        </ul>
                    </div>
                    </div>
                </nav>
                { signout_modal(ctx, AdminAppMsg::Logout) }
                <main class="container content-body">
                    { for login_notice }
                    <Switch<AdminRoute> render={router::switch} />
                </main>
                { do_footer() }
            </BrowserRouter>
        }
    }
}

/// Entry point for the admin console bundle.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_app() -> Result<(), JsValue> {
    yew::Renderer::<AdminApp>::new().render();
    Ok(())
}
