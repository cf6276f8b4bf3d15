//! Machine list and detail pages.

use gloo::console;
use smelt_proto::constants::uri::V1_MACHINE;
use smelt_proto::v1::Node;
use smelt_web_ui_shared::constants::{CSS_CELL, CSS_TABLE};
use smelt_web_ui_shared::error::FetchError;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::Link;

use super::dhcp_table::{DhcpScope, DhcpTable};
use super::prelude::*;
use super::side_panel::{SidePanel, SidePanelRequest};
use crate::router::AdminRoute;

pub struct MachinesList {
    state: ListState,
}

enum ListState {
    Loading,
    Responded { machines: Vec<Node> },
    Failed { emsg: String, opid: Option<String> },
}

pub enum MachinesListMsg {
    Responded { machines: Vec<Node> },
    Failed { emsg: String, opid: Option<String> },
}

impl From<FetchError> for MachinesListMsg {
    fn from(fe: FetchError) -> Self {
        MachinesListMsg::Failed {
            emsg: fe.as_string(),
            opid: None,
        }
    }
}

async fn get_machines() -> Result<MachinesListMsg, FetchError> {
    let (opid, status, value, _) =
        do_request(V1_MACHINE, RequestMethod::GET, None::<JsValue>).await?;

    if status == 200 {
        let machines: Vec<Node> = serde_wasm_bindgen::from_value(value)
            .map_err(|e| FetchError::from(JsValue::from(e)))?;
        Ok(MachinesListMsg::Responded { machines })
    } else {
        let emsg = value.as_string().unwrap_or_default();
        Ok(MachinesListMsg::Failed { emsg, opid })
    }
}

impl Component for MachinesList {
    type Message = MachinesListMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            match get_machines().await {
                Ok(v) => v,
                Err(v) => v.into(),
            }
        });
        MachinesList {
            state: ListState::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MachinesListMsg::Responded { machines } => {
                self.state = ListState::Responded { machines };
            }
            MachinesListMsg::Failed { emsg, opid } => {
                console::error!(format!("opid - {:?}, msg - {}", opid, emsg).as_str());
                self.state = ListState::Failed { emsg, opid };
            }
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = match &self.state {
            ListState::Loading => loading_spinner("Loading machines"),
            ListState::Failed { emsg, .. } => {
                do_alert_error("Failed to query machines", Some(emsg), false)
            }
            ListState::Responded { machines } => {
                if machines.is_empty() {
                    html! { <p>{ "No machines have been enlisted yet." }</p> }
                } else {
                    html! {
                        <table class={CSS_TABLE}>
                          <thead>
                            <tr>
                              <th scope="col">{ "FQDN" }</th>
                              <th scope="col">{ "System ID" }</th>
                            </tr>
                          </thead>
                          <tbody>
                          {
                            machines.iter().map(|machine| html! {
                                <tr key={machine.system_id.clone()}>
                                  <td class={CSS_CELL}>
                                    <Link<AdminRoute> to={AdminRoute::ViewMachine { system_id: machine.system_id.clone() }}>
                                      { machine.fqdn.clone() }
                                    </Link<AdminRoute>>
                                  </td>
                                  <td class={CSS_CELL}>{ machine.system_id.clone() }</td>
                                </tr>
                            }).collect::<Html>()
                          }
                          </tbody>
                        </table>
                    }
                }
            }
        };

        html! {
            <>
              { do_page_header("Machines") }
              { body }
            </>
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct MachineViewProps {
    pub system_id: AttrValue,
}

/// Detail page for one machine: the machine header plus its snippet table,
/// and host for the edit side panel.
pub struct MachineView {
    state: MachineState,
    side_panel: Option<SidePanelRequest>,
}

enum MachineState {
    Loading,
    Responded { machine: Node },
    Failed { emsg: String, opid: Option<String> },
}

pub enum MachineViewMsg {
    Responded { machine: Node },
    Failed { emsg: String, opid: Option<String> },
    OpenSidePanel(SidePanelRequest),
    CloseSidePanel,
}

impl From<FetchError> for MachineViewMsg {
    fn from(fe: FetchError) -> Self {
        MachineViewMsg::Failed {
            emsg: fe.as_string(),
            opid: None,
        }
    }
}

async fn get_machine(system_id: String) -> Result<MachineViewMsg, FetchError> {
    let uri = format!("{}/{}", V1_MACHINE, system_id);
    let (opid, status, value, _) = do_request(&uri, RequestMethod::GET, None::<JsValue>).await?;

    if status == 200 {
        let machine: Node = serde_wasm_bindgen::from_value(value)
            .map_err(|e| FetchError::from(JsValue::from(e)))?;
        Ok(MachineViewMsg::Responded { machine })
    } else {
        let emsg = value.as_string().unwrap_or_default();
        Ok(MachineViewMsg::Failed { emsg, opid })
    }
}

impl Component for MachineView {
    type Message = MachineViewMsg;
    type Properties = MachineViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        let system_id = ctx.props().system_id.to_string();
        ctx.link().send_future(async move {
            match get_machine(system_id).await {
                Ok(v) => v,
                Err(v) => v.into(),
            }
        });
        MachineView {
            state: MachineState::Loading,
            side_panel: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MachineViewMsg::Responded { machine } => {
                self.state = MachineState::Responded { machine };
            }
            MachineViewMsg::Failed { emsg, opid } => {
                console::error!(format!("opid - {:?}, msg - {}", opid, emsg).as_str());
                self.state = MachineState::Failed { emsg, opid };
            }
            MachineViewMsg::OpenSidePanel(request) => {
                self.side_panel = Some(request);
            }
            MachineViewMsg::CloseSidePanel => {
                self.side_panel = None;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.state {
            MachineState::Loading => loading_spinner("Loading machine"),
            MachineState::Failed { emsg, .. } => {
                do_alert_error("Failed to query the machine", Some(emsg), false)
            }
            MachineState::Responded { machine } => {
                let open_side_panel = ctx.link().callback(MachineViewMsg::OpenSidePanel);
                let panel = self.side_panel.as_ref().map(|request| {
                    let on_close = ctx.link().callback(|_| MachineViewMsg::CloseSidePanel);
                    html! { <SidePanel request={request.clone()} on_close={on_close} /> }
                });
                html! {
                    <>
                      { do_page_header(&machine.fqdn) }
                      <DhcpTable
                        model_name="machine"
                        scope={DhcpScope::Node(machine.clone())}
                        open_side_panel={open_side_panel}
                      />
                      { for panel }
                    </>
                }
            }
        }
    }
}
