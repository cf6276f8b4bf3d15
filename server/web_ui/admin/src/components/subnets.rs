//! Subnet list and detail pages.

use gloo::console;
use smelt_proto::constants::uri::{V1_IPRANGE, V1_SUBNET};
use smelt_proto::v1::{IpRange, Subnet};
use smelt_web_ui_shared::constants::{CSS_CELL, CSS_TABLE};
use smelt_web_ui_shared::error::FetchError;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::Link;

use super::dhcp_table::{DhcpScope, DhcpTable};
use super::prelude::*;
use super::side_panel::{SidePanel, SidePanelRequest};
use crate::router::AdminRoute;

/// The ranges carved out of one subnet.
pub(crate) fn ipranges_for_subnet(all: &[IpRange], subnet_id: u32) -> Vec<IpRange> {
    all.iter()
        .filter(|range| range.subnet == subnet_id)
        .cloned()
        .collect()
}

pub struct SubnetsList {
    state: ListState,
}

enum ListState {
    Loading,
    Responded { subnets: Vec<Subnet> },
    Failed { emsg: String, opid: Option<String> },
}

pub enum SubnetsListMsg {
    Responded { subnets: Vec<Subnet> },
    Failed { emsg: String, opid: Option<String> },
}

impl From<FetchError> for SubnetsListMsg {
    fn from(fe: FetchError) -> Self {
        SubnetsListMsg::Failed {
            emsg: fe.as_string(),
            opid: None,
        }
    }
}

async fn get_subnets() -> Result<SubnetsListMsg, FetchError> {
    let (opid, status, value, _) =
        do_request(V1_SUBNET, RequestMethod::GET, None::<JsValue>).await?;

    if status == 200 {
        let subnets: Vec<Subnet> = serde_wasm_bindgen::from_value(value)
            .map_err(|e| FetchError::from(JsValue::from(e)))?;
        Ok(SubnetsListMsg::Responded { subnets })
    } else {
        let emsg = value.as_string().unwrap_or_default();
        Ok(SubnetsListMsg::Failed { emsg, opid })
    }
}

impl Component for SubnetsList {
    type Message = SubnetsListMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            match get_subnets().await {
                Ok(v) => v,
                Err(v) => v.into(),
            }
        });
        SubnetsList {
            state: ListState::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SubnetsListMsg::Responded { subnets } => {
                self.state = ListState::Responded { subnets };
            }
            SubnetsListMsg::Failed { emsg, opid } => {
                console::error!(format!("opid - {:?}, msg - {}", opid, emsg).as_str());
                self.state = ListState::Failed { emsg, opid };
            }
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = match &self.state {
            ListState::Loading => loading_spinner("Loading subnets"),
            ListState::Failed { emsg, .. } => {
                do_alert_error("Failed to query subnets", Some(emsg), false)
            }
            ListState::Responded { subnets } => {
                if subnets.is_empty() {
                    html! { <p>{ "No subnets have been defined yet." }</p> }
                } else {
                    html! {
                        <table class={CSS_TABLE}>
                          <thead>
                            <tr>
                              <th scope="col">{ "Name" }</th>
                              <th scope="col">{ "CIDR" }</th>
                            </tr>
                          </thead>
                          <tbody>
                          {
                            subnets.iter().map(|subnet| html! {
                                <tr key={subnet.id.to_string()}>
                                  <td class={CSS_CELL}>
                                    <Link<AdminRoute> to={AdminRoute::ViewSubnet { id: subnet.id }}>
                                      { subnet.name.clone() }
                                    </Link<AdminRoute>>
                                  </td>
                                  <td class={CSS_CELL}>{ subnet.cidr.clone() }</td>
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
              { do_page_header("Subnets") }
              { body }
            </>
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct SubnetViewProps {
    pub id: u32,
}

/// Detail page for one subnet. The snippet table needs the subnet's ranges
/// to name range-scoped rows, so both fetches run up front and the page
/// waits for whichever lands last.
pub struct SubnetView {
    subnet: Option<Subnet>,
    ip_ranges: Option<Vec<IpRange>>,
    error: Option<String>,
    side_panel: Option<SidePanelRequest>,
}

pub enum SubnetViewMsg {
    SubnetResponded { subnet: Subnet },
    RangesResponded { ip_ranges: Vec<IpRange> },
    Failed { emsg: String, opid: Option<String> },
    OpenSidePanel(SidePanelRequest),
    CloseSidePanel,
}

impl From<FetchError> for SubnetViewMsg {
    fn from(fe: FetchError) -> Self {
        SubnetViewMsg::Failed {
            emsg: fe.as_string(),
            opid: None,
        }
    }
}

async fn get_subnet(id: u32) -> Result<SubnetViewMsg, FetchError> {
    let uri = format!("{}/{}", V1_SUBNET, id);
    let (opid, status, value, _) = do_request(&uri, RequestMethod::GET, None::<JsValue>).await?;

    if status == 200 {
        let subnet: Subnet = serde_wasm_bindgen::from_value(value)
            .map_err(|e| FetchError::from(JsValue::from(e)))?;
        Ok(SubnetViewMsg::SubnetResponded { subnet })
    } else {
        let emsg = value.as_string().unwrap_or_default();
        Ok(SubnetViewMsg::Failed { emsg, opid })
    }
}

async fn get_ipranges() -> Result<SubnetViewMsg, FetchError> {
    let (opid, status, value, _) =
        do_request(V1_IPRANGE, RequestMethod::GET, None::<JsValue>).await?;

    if status == 200 {
        let ip_ranges: Vec<IpRange> = serde_wasm_bindgen::from_value(value)
            .map_err(|e| FetchError::from(JsValue::from(e)))?;
        Ok(SubnetViewMsg::RangesResponded { ip_ranges })
    } else {
        let emsg = value.as_string().unwrap_or_default();
        Ok(SubnetViewMsg::Failed { emsg, opid })
    }
}

impl Component for SubnetView {
    type Message = SubnetViewMsg;
    type Properties = SubnetViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        let id = ctx.props().id;
        ctx.link().send_future(async move {
            match get_subnet(id).await {
                Ok(v) => v,
                Err(v) => v.into(),
            }
        });
        ctx.link().send_future(async {
            match get_ipranges().await {
                Ok(v) => v,
                Err(v) => v.into(),
            }
        });
        SubnetView {
            subnet: None,
            ip_ranges: None,
            error: None,
            side_panel: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SubnetViewMsg::SubnetResponded { subnet } => {
                self.subnet = Some(subnet);
            }
            SubnetViewMsg::RangesResponded { ip_ranges } => {
                self.ip_ranges = Some(ip_ranges);
            }
            SubnetViewMsg::Failed { emsg, opid } => {
                console::error!(format!("opid - {:?}, msg - {}", opid, emsg).as_str());
                self.error = Some(emsg);
            }
            SubnetViewMsg::OpenSidePanel(request) => {
                self.side_panel = Some(request);
            }
            SubnetViewMsg::CloseSidePanel => {
                self.side_panel = None;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if let Some(emsg) = &self.error {
            return do_alert_error("Failed to query the subnet", Some(emsg), false);
        }
        let (subnet, ip_ranges) = match (&self.subnet, &self.ip_ranges) {
            (Some(subnet), Some(ip_ranges)) => (subnet, ip_ranges),
            _ => return loading_spinner("Loading subnet"),
        };

        let open_side_panel = ctx.link().callback(SubnetViewMsg::OpenSidePanel);
        let panel = self.side_panel.as_ref().map(|request| {
            let on_close = ctx.link().callback(|_| SubnetViewMsg::CloseSidePanel);
            html! { <SidePanel request={request.clone()} on_close={on_close} /> }
        });

        html! {
            <>
              { do_page_header(&subnet.name) }
              <p>{ subnet.cidr.clone() }</p>
              <DhcpTable
                model_name="subnet"
                scope={DhcpScope::Subnets(vec![subnet.clone()])}
                ip_ranges={ipranges_for_subnet(ip_ranges, subnet.id)}
                open_side_panel={open_side_panel}
              />
              { for panel }
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(id: u32, subnet: u32) -> IpRange {
        IpRange {
            id,
            start_ip: format!("10.0.{}.10", subnet),
            end_ip: format!("10.0.{}.99", subnet),
            subnet,
        }
    }

    #[test]
    fn test_ipranges_for_subnet_filters_by_parent() {
        let all = vec![range(1, 7), range(2, 8), range(3, 7)];
        let matched = ipranges_for_subnet(&all, 7);
        let ids: Vec<_> = matched.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(ipranges_for_subnet(&all, 9).is_empty());
    }
}
