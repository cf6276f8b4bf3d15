//! The DHCP snippet table that machine and subnet pages embed. The page
//! supplies the scope; the table fetches the snippet list, filters it to the
//! scope, and renders the shared column set.

use gloo::console;
use smelt_proto::constants::uri::V1_DHCP_SNIPPET;
use smelt_proto::v1::{DhcpSnippet, IpRange, Node, Subnet};
use smelt_web_ui_shared::constants::{CSS_CELL, CSS_TABLE, URL_DOCS_DHCP, URL_SETTINGS_DHCP};
use smelt_web_ui_shared::error::FetchError;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use super::dhcp_columns::{ColumnCache, ColumnContext};
use super::prelude::*;
use super::side_panel::SidePanelRequest;

/// The scope a snippet table is rendered for. A page either owns a node or
/// a set of subnets, never both, so the two shapes are separate variants
/// rather than two optional props.
#[derive(Clone, PartialEq)]
pub enum DhcpScope {
    Node(Node),
    Subnets(Vec<Subnet>),
}

impl DhcpScope {
    /// A subnet scope with nothing in it isn't a scope at all: the table
    /// renders nothing for it, not even the section title.
    pub(crate) fn is_renderable(&self) -> bool {
        match self {
            DhcpScope::Node(_) => true,
            DhcpScope::Subnets(subnets) => !subnets.is_empty(),
        }
    }
}

/// Snippets that apply within a scope: owned by the node, or attached to
/// any of the scoped subnets.
pub(crate) fn snippets_in_scope(all: &[DhcpSnippet], scope: &DhcpScope) -> Vec<DhcpSnippet> {
    match scope {
        DhcpScope::Node(node) => all
            .iter()
            .filter(|snippet| snippet.node_id() == Some(node.system_id.as_str()))
            .cloned()
            .collect(),
        DhcpScope::Subnets(subnets) => all
            .iter()
            .filter(|snippet| {
                snippet
                    .subnet
                    .is_some_and(|id| subnets.iter().any(|subnet| subnet.id == id))
            })
            .cloned()
            .collect(),
    }
}

#[derive(PartialEq, Properties)]
pub struct DhcpTableProps {
    /// Names the owning model in the empty-state copy.
    pub model_name: AttrValue,
    pub scope: DhcpScope,
    #[prop_or_default]
    pub ip_ranges: Vec<IpRange>,
    pub open_side_panel: Callback<SidePanelRequest>,
}

pub struct DhcpTable {
    state: ViewState,
    columns: ColumnCache,
}

enum ViewState {
    /// the snippet fetch is still outstanding
    Loading,
    /// server has responded
    Responded { snippets: Vec<DhcpSnippet> },
    /// failed to pull the snippet list
    Failed { emsg: String, opid: Option<String> },
}

pub enum DhcpTableMsg {
    Responded { snippets: Vec<DhcpSnippet> },
    Failed { emsg: String, opid: Option<String> },
}

impl From<FetchError> for DhcpTableMsg {
    fn from(fe: FetchError) -> Self {
        DhcpTableMsg::Failed {
            emsg: fe.as_string(),
            opid: None,
        }
    }
}

/// Pulls every snippet; scoping happens client side so the one response
/// serves whichever pages are mounted. De-duplicating concurrent fetches is
/// the server's concern, not ours.
async fn get_dhcp_snippets() -> Result<DhcpTableMsg, FetchError> {
    let (opid, status, value, _) =
        do_request(V1_DHCP_SNIPPET, RequestMethod::GET, None::<JsValue>).await?;

    if status == 200 {
        let snippets: Vec<DhcpSnippet> = serde_wasm_bindgen::from_value(value)
            .map_err(|e| FetchError::from(JsValue::from(e)))?;
        Ok(DhcpTableMsg::Responded { snippets })
    } else {
        let emsg = value.as_string().unwrap_or_default();
        Ok(DhcpTableMsg::Failed { emsg, opid })
    }
}

/// What the table renders for a given scope and fetch state. Pulled out of
/// `view` so the choice is testable without a DOM.
#[derive(Debug, PartialEq)]
enum RenderPlan<'a> {
    /// no section at all, not even the title
    Nothing,
    Loading,
    Failed { emsg: &'a str },
    Empty,
    Rows(Vec<DhcpSnippet>),
}

fn render_plan<'a>(scope: &DhcpScope, state: &'a ViewState) -> RenderPlan<'a> {
    if !scope.is_renderable() {
        return RenderPlan::Nothing;
    }
    match state {
        // An outstanding fetch never shows the empty-data message.
        ViewState::Loading => RenderPlan::Loading,
        ViewState::Failed { emsg, .. } => RenderPlan::Failed { emsg },
        ViewState::Responded { snippets } => {
            let matched = snippets_in_scope(snippets, scope);
            if matched.is_empty() {
                RenderPlan::Empty
            } else {
                RenderPlan::Rows(matched)
            }
        }
    }
}

fn column_context(props: &DhcpTableProps) -> ColumnContext {
    let (original_node, subnets) = match &props.scope {
        DhcpScope::Node(node) => (Some(node.clone()), Vec::new()),
        DhcpScope::Subnets(subnets) => (None, subnets.clone()),
    };
    ColumnContext {
        original_node,
        subnets,
        ipranges: props.ip_ranges.clone(),
        open_side_panel: props.open_side_panel.clone(),
    }
}

impl Component for DhcpTable {
    type Message = DhcpTableMsg;
    type Properties = DhcpTableProps;

    fn create(ctx: &Context<Self>) -> Self {
        // start pulling the snippet list on mount
        ctx.link().send_future(async {
            match get_dhcp_snippets().await {
                Ok(v) => v,
                Err(v) => v.into(),
            }
        });

        let mut columns = ColumnCache::default();
        columns.get(&column_context(ctx.props()));

        DhcpTable {
            state: ViewState::Loading,
            columns,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.columns.get(&column_context(ctx.props()));
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DhcpTableMsg::Responded { snippets } => {
                self.state = ViewState::Responded { snippets };
            }
            DhcpTableMsg::Failed { emsg, opid } => {
                console::error!(format!("opid - {:?}, msg - {}", opid, emsg).as_str());
                self.state = ViewState::Failed { emsg, opid };
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let body = match render_plan(&props.scope, &self.state) {
            RenderPlan::Nothing => return html! {},
            RenderPlan::Loading => loading_spinner("Loading DHCP snippets"),
            RenderPlan::Failed { emsg } => {
                do_alert_error("Failed to query DHCP snippets", Some(emsg), false)
            }
            RenderPlan::Empty => html! {
                <p>{ format!("No DHCP snippets applied to this {}.", props.model_name) }</p>
            },
            RenderPlan::Rows(matched) => {
                let columns = self.columns.current();
                html! {
                        <table class={CSS_TABLE}>
                          <thead>
                            <tr>
                              {
                                columns.iter().map(|column| html! {
                                    <th scope="col">{ column.header }</th>
                                }).collect::<Html>()
                              }
                            </tr>
                          </thead>
                          <tbody>
                          {
                            matched.iter().map(|snippet| html! {
                                <tr key={snippet.id.to_string()}>
                                {
                                    columns.iter().map(|column| html! {
                                        <td class={CSS_CELL}>{ (column.cell)(snippet) }</td>
                                    }).collect::<Html>()
                                }
                                </tr>
                            }).collect::<Html>()
                          }
                          </tbody>
                        </table>
                }
            }
        };

        html! {
            <section class="dhcp-snippets">
              <h3>{ "DHCP snippets" }</h3>
              { body }
              <ul class="list-inline">
                <li class="list-inline-item">
                  <a href={URL_SETTINGS_DHCP}>{ "All snippets: Settings > DHCP snippets" }</a>
                </li>
                <li class="list-inline-item">
                  <a href={URL_DOCS_DHCP} target="_blank" rel="noopener noreferrer">
                    { "About DHCP snippets" }
                  </a>
                </li>
              </ul>
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(system_id: &str) -> Node {
        Node {
            system_id: system_id.to_string(),
            fqdn: format!("{}.smelt.example", system_id),
        }
    }

    fn subnet(id: u32) -> Subnet {
        Subnet {
            id,
            name: format!("subnet-{}", id),
            cidr: format!("10.0.{}.0/24", id),
        }
    }

    fn snippet(id: u32, node: Option<&str>, subnet: Option<u32>) -> DhcpSnippet {
        DhcpSnippet {
            id,
            name: format!("snippet-{}", id),
            description: String::new(),
            enabled: true,
            node: node.map(String::from),
            iprange: None,
            subnet,
        }
    }

    #[test]
    fn test_node_scope_is_always_renderable() {
        assert!(DhcpScope::Node(node("abc")).is_renderable());
    }

    #[test]
    fn test_empty_subnet_scope_is_not_renderable() {
        assert!(!DhcpScope::Subnets(Vec::new()).is_renderable());
        assert!(DhcpScope::Subnets(vec![subnet(1)]).is_renderable());
    }

    #[test]
    fn test_snippets_in_node_scope() {
        let all = vec![
            snippet(1, Some("abc"), None),
            snippet(2, Some("def"), None),
            snippet(3, None, Some(1)),
            // empty node ids never match a node scope
            snippet(4, Some(""), None),
        ];
        let matched = snippets_in_scope(&all, &DhcpScope::Node(node("abc")));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
    }

    #[test]
    fn test_loading_shows_spinner_not_empty_message() {
        // An outstanding fetch must never be presented as "no snippets".
        let plan = render_plan(&DhcpScope::Node(node("abc")), &ViewState::Loading);
        assert_eq!(plan, RenderPlan::Loading);
    }

    #[test]
    fn test_empty_subnet_scope_renders_no_section_content() {
        let scope = DhcpScope::Subnets(Vec::new());
        // Regardless of fetch state, an empty subnet scope yields nothing.
        assert_eq!(render_plan(&scope, &ViewState::Loading), RenderPlan::Nothing);
        let responded = ViewState::Responded {
            snippets: vec![snippet(1, None, Some(1))],
        };
        assert_eq!(render_plan(&scope, &responded), RenderPlan::Nothing);
    }

    #[test]
    fn test_empty_message_only_after_response() {
        let responded = ViewState::Responded {
            snippets: Vec::new(),
        };
        assert_eq!(
            render_plan(&DhcpScope::Node(node("abc")), &responded),
            RenderPlan::Empty
        );
    }

    #[test]
    fn test_matching_response_renders_rows() {
        let responded = ViewState::Responded {
            snippets: vec![snippet(1, Some("abc"), None), snippet(2, Some("def"), None)],
        };
        let plan = render_plan(&DhcpScope::Node(node("abc")), &responded);
        match plan {
            RenderPlan::Rows(rows) => assert_eq!(rows.len(), 1),
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn test_snippets_in_subnet_scope() {
        let all = vec![
            snippet(1, Some("abc"), None),
            snippet(2, None, Some(1)),
            snippet(3, None, Some(2)),
            snippet(4, None, Some(9)),
            snippet(5, None, None),
        ];
        let matched =
            snippets_in_scope(&all, &DhcpScope::Subnets(vec![subnet(1), subnet(2)]));
        let ids: Vec<_> = matched.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
