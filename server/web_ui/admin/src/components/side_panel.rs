//! The side panel the detail pages host, and the snippet edit form that
//! rides in it. Pages own whether the panel is open; the table's Actions
//! column only emits the request.

use gloo::console;
use smelt_proto::constants::uri::V1_DHCP_SNIPPET;
use smelt_proto::v1::{DhcpSnippet, DhcpSnippetUpdate};
use smelt_web_ui_shared::error::FetchError;
use smelt_web_ui_shared::utils::{autofocus, get_inputelement_by_id, get_value_from_element_id};
use smelt_web_ui_shared::{constants::CSS_ALERT_SUCCESS, request_body};
use wasm_bindgen::JsValue;
use yew::prelude::*;

use super::prelude::*;

const ID_EDIT_NAME: &str = "dhcp-edit-name";
const ID_EDIT_ENABLED: &str = "dhcp-edit-enabled";
const ID_EDIT_DESCRIPTION: &str = "dhcp-edit-description";

/// A request to open the side panel over the current page.
#[derive(Clone, Debug, PartialEq)]
pub struct SidePanelRequest {
    pub id: u32,
    pub title: AttrValue,
}

#[derive(PartialEq, Properties)]
pub struct SidePanelProps {
    pub request: SidePanelRequest,
    pub on_close: Callback<()>,
}

pub struct SidePanel {}

impl Component for SidePanel {
    type Message = ();
    type Properties = SidePanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SidePanel {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.clone();
        html! {
            <aside class="offcanvas offcanvas-end show" tabindex="-1" aria-labelledby="sidePanelTitle">
              <div class="offcanvas-header">
                <h5 id="sidePanelTitle">{ props.request.title.clone() }</h5>
                <button
                  type="button"
                  class="btn-close"
                  aria-label="Close"
                  onclick={ Callback::from(move |_| on_close.emit(())) }
                ></button>
              </div>
              <div class="offcanvas-body">
                <DhcpEdit id={props.request.id} />
              </div>
            </aside>
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct DhcpEditProps {
    pub id: u32,
}

/// Edit form for a single snippet: pulls the current row, lets the user
/// change the writable fields, PUTs the update back.
pub struct DhcpEdit {
    state: EditState,
}

enum EditState {
    Loading,
    Editing { snippet: DhcpSnippet },
    Saving,
    Saved,
    Failed { emsg: String, opid: Option<String> },
}

pub enum DhcpEditMsg {
    Responded { snippet: DhcpSnippet },
    Submit,
    Saved,
    Failed { emsg: String, opid: Option<String> },
}

impl From<FetchError> for DhcpEditMsg {
    fn from(fe: FetchError) -> Self {
        DhcpEditMsg::Failed {
            emsg: fe.as_string(),
            opid: None,
        }
    }
}

impl DhcpEdit {
    async fn fetch_snippet(id: u32) -> Result<DhcpEditMsg, FetchError> {
        let uri = format!("{}/{}", V1_DHCP_SNIPPET, id);
        let (opid, status, value, _) = do_request(&uri, RequestMethod::GET, None::<JsValue>).await?;

        if status == 200 {
            let snippet: DhcpSnippet = serde_wasm_bindgen::from_value(value)
                .map_err(|e| FetchError::from(JsValue::from(e)))?;
            Ok(DhcpEditMsg::Responded { snippet })
        } else {
            let emsg = value.as_string().unwrap_or_default();
            Ok(DhcpEditMsg::Failed { emsg, opid })
        }
    }

    async fn put_snippet(id: u32, update: DhcpSnippetUpdate) -> Result<DhcpEditMsg, FetchError> {
        let uri = format!("{}/{}", V1_DHCP_SNIPPET, id);
        let body = request_body(&update)?;
        let (opid, status, value, _) = do_request(&uri, RequestMethod::PUT, Some(body)).await?;

        if status == 200 {
            Ok(DhcpEditMsg::Saved)
        } else {
            let emsg = value.as_string().unwrap_or_default();
            Ok(DhcpEditMsg::Failed { emsg, opid })
        }
    }

    /// Reads the form back out of the DOM, falling back to what the server
    /// sent for anything we can't reach.
    fn read_form(snippet: &DhcpSnippet) -> DhcpSnippetUpdate {
        DhcpSnippetUpdate {
            name: get_value_from_element_id(ID_EDIT_NAME).unwrap_or_else(|| snippet.name.clone()),
            description: get_value_from_element_id(ID_EDIT_DESCRIPTION)
                .unwrap_or_else(|| snippet.description.clone()),
            enabled: get_inputelement_by_id(ID_EDIT_ENABLED)
                .map(|element| element.checked())
                .unwrap_or(snippet.enabled),
        }
    }
}

impl Component for DhcpEdit {
    type Message = DhcpEditMsg;
    type Properties = DhcpEditProps;

    fn create(ctx: &Context<Self>) -> Self {
        let id = ctx.props().id;
        ctx.link().send_future(async move {
            match Self::fetch_snippet(id).await {
                Ok(v) => v,
                Err(v) => v.into(),
            }
        });
        DhcpEdit {
            state: EditState::Loading,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DhcpEditMsg::Responded { snippet } => {
                self.state = EditState::Editing { snippet };
            }
            DhcpEditMsg::Submit => {
                let snippet = match &self.state {
                    EditState::Editing { snippet } => snippet,
                    _ => return false,
                };
                let id = ctx.props().id;
                let update = Self::read_form(snippet);
                ctx.link().send_future(async move {
                    match Self::put_snippet(id, update).await {
                        Ok(v) => v,
                        Err(v) => v.into(),
                    }
                });
                self.state = EditState::Saving;
            }
            DhcpEditMsg::Saved => {
                self.state = EditState::Saved;
            }
            DhcpEditMsg::Failed { emsg, opid } => {
                console::error!(format!("opid - {:?}, msg - {}", opid, emsg).as_str());
                self.state = EditState::Failed { emsg, opid };
            }
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            autofocus(ID_EDIT_NAME);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.state {
            EditState::Loading | EditState::Saving => loading_spinner("Loading..."),
            EditState::Saved => html! {
                <div class={CSS_ALERT_SUCCESS} role="alert">
                    { "Snippet updated." }
                </div>
            },
            EditState::Failed { emsg, .. } => {
                do_alert_error("Failed to update the snippet", Some(emsg), false)
            }
            EditState::Editing { snippet } => {
                html! {
                    <form
                      onsubmit={ ctx.link().callback(|e: SubmitEvent| {
                          e.prevent_default();
                          DhcpEditMsg::Submit
                      }) }
                      action="javascript:void(0);"
                    >
                      <div class="mb-3">
                        <label for={ID_EDIT_NAME} class="form-label">{ "Name" }</label>
                        <input
                          type="text"
                          class="form-control"
                          id={ID_EDIT_NAME}
                          value={snippet.name.clone()}
                        />
                      </div>
                      <div class="mb-3 form-check">
                        <input
                          type="checkbox"
                          class="form-check-input"
                          id={ID_EDIT_ENABLED}
                          checked={snippet.enabled}
                        />
                        <label for={ID_EDIT_ENABLED} class="form-check-label">{ "Enabled" }</label>
                      </div>
                      <div class="mb-3">
                        <label for={ID_EDIT_DESCRIPTION} class="form-label">{ "Description" }</label>
                        <input
                          type="text"
                          class="form-control"
                          id={ID_EDIT_DESCRIPTION}
                          value={snippet.description.clone()}
                        />
                      </div>
                      <button class="btn btn-primary" type="submit">{ "Save" }</button>
                    </form>
                }
            }
        }
    }
}
