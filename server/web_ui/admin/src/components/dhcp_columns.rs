//! The column set for the DHCP snippet table. Columns are declarative: a
//! stable key, a header, and a cell closure over the snippet row, so the
//! table itself stays generic about what it renders.

use std::rc::Rc;

use smelt_proto::v1::{DhcpSnippet, IpRange, Node, Subnet};
use yew::{html, Callback, Html};

use super::side_panel::SidePanelRequest;

pub const EDIT_SNIPPET_TITLE: &str = "Edit DHCP snippet";

/// Which association a snippet hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetType {
    Node,
    IpRange,
    Subnet,
    Global,
}

impl SnippetType {
    /// Classification uses the same precedence as `applies_to`, so the Type
    /// and Applies To columns can never disagree about which association won
    /// on a row where several are set.
    pub fn classify(snippet: &DhcpSnippet) -> Self {
        if snippet.node_id().is_some() {
            SnippetType::Node
        } else if snippet.iprange.is_some() {
            SnippetType::IpRange
        } else if snippet.subnet.is_some() {
            SnippetType::Subnet
        } else {
            SnippetType::Global
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SnippetType::Node => "Node",
            SnippetType::IpRange => "IP range",
            SnippetType::Subnet => "Subnet",
            SnippetType::Global => "Global",
        }
    }
}

pub(crate) fn enabled_label(enabled: bool) -> &'static str {
    if enabled {
        "Yes"
    } else {
        "No"
    }
}

/// The human readable target of a snippet, given whatever context the page
/// had on hand. First match wins: node, then iprange, then subnet. An id
/// with no match in the supplied context degrades to the empty string - the
/// data model permits rows where several (or none) of the associations line
/// up, and nothing here rejects them.
pub fn applies_to(
    snippet: &DhcpSnippet,
    original_node: Option<&Node>,
    subnets: &[Subnet],
    ipranges: &[IpRange],
) -> String {
    if snippet.node_id().is_some() {
        if let Some(node) = original_node {
            return node.fqdn.clone();
        }
    }
    if let Some(iprange_id) = snippet.iprange {
        if !ipranges.is_empty() {
            return ipranges
                .iter()
                .find(|range| range.id == iprange_id)
                .map(|range| range.display_name())
                .unwrap_or_default();
        }
    }
    if let Some(subnet_id) = snippet.subnet {
        if !subnets.is_empty() {
            return subnets
                .iter()
                .find(|subnet| subnet.id == subnet_id)
                .map(|subnet| subnet.name.clone())
                .unwrap_or_default();
        }
    }
    String::new()
}

/// A declarative column descriptor.
pub struct ColumnDef {
    pub key: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    pub cell: Rc<dyn Fn(&DhcpSnippet) -> Html>,
}

/// Everything the column closures capture. This is the full memoization
/// key: drop a field from it and a cached column set keeps rendering with a
/// stale capture after that dependency moves.
#[derive(Clone, PartialEq)]
pub struct ColumnContext {
    pub original_node: Option<Node>,
    pub subnets: Vec<Subnet>,
    pub ipranges: Vec<IpRange>,
    pub open_side_panel: Callback<SidePanelRequest>,
}

/// Builds the six snippet columns in display order.
pub fn dhcp_table_columns(context: &ColumnContext) -> Vec<ColumnDef> {
    let applies_cell = {
        let original_node = context.original_node.clone();
        let subnets = context.subnets.clone();
        let ipranges = context.ipranges.clone();
        Rc::new(move |snippet: &DhcpSnippet| {
            html! { { applies_to(snippet, original_node.as_ref(), &subnets, &ipranges) } }
        })
    };
    let actions_cell = {
        let open_side_panel = context.open_side_panel.clone();
        Rc::new(move |snippet: &DhcpSnippet| {
            let request = SidePanelRequest {
                id: snippet.id,
                title: EDIT_SNIPPET_TITLE.into(),
            };
            let open_side_panel = open_side_panel.clone();
            html! {
                <button
                  class="btn btn-outline-secondary btn-sm"
                  type="button"
                  onclick={ Callback::from(move |_| open_side_panel.emit(request.clone())) }
                >
                  { "Edit" }
                </button>
            }
        })
    };

    vec![
        ColumnDef {
            key: "name",
            header: "Name",
            sortable: true,
            cell: Rc::new(|snippet: &DhcpSnippet| html! { { snippet.name.clone() } }),
        },
        ColumnDef {
            key: "type",
            header: "Type",
            sortable: true,
            cell: Rc::new(|snippet: &DhcpSnippet| {
                html! { { SnippetType::classify(snippet).label() } }
            }),
        },
        ColumnDef {
            key: "applies_to",
            header: "Applies To",
            sortable: true,
            cell: applies_cell,
        },
        ColumnDef {
            key: "enabled",
            header: "Enabled",
            sortable: true,
            cell: Rc::new(|snippet: &DhcpSnippet| html! { { enabled_label(snippet.enabled) } }),
        },
        ColumnDef {
            key: "description",
            header: "Description",
            sortable: true,
            cell: Rc::new(|snippet: &DhcpSnippet| html! { { snippet.description.clone() } }),
        },
        ColumnDef {
            key: "actions",
            header: "Actions",
            sortable: false,
            cell: actions_cell,
        },
    ]
}

/// Hands out the same column set while the dependency set compares equal,
/// and rebuilds it when any dependency (context data or the side panel
/// opener's identity) changes.
#[derive(Default)]
pub struct ColumnCache {
    cached: Option<(ColumnContext, Rc<[ColumnDef]>)>,
}

impl ColumnCache {
    pub fn get(&mut self, context: &ColumnContext) -> Rc<[ColumnDef]> {
        if let Some((deps, columns)) = &self.cached {
            if deps == context {
                return Rc::clone(columns);
            }
        }
        let columns: Rc<[ColumnDef]> = dhcp_table_columns(context).into();
        self.cached = Some((context.clone(), Rc::clone(&columns)));
        columns
    }

    /// The last built column set; empty if `get` has never been called.
    pub fn current(&self) -> Rc<[ColumnDef]> {
        match &self.cached {
            Some((_, columns)) => Rc::clone(columns),
            None => Vec::new().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(
        node: Option<&str>,
        iprange: Option<u32>,
        subnet: Option<u32>,
    ) -> DhcpSnippet {
        DhcpSnippet {
            id: 1,
            name: "snippet".to_string(),
            description: "a snippet".to_string(),
            enabled: true,
            node: node.map(String::from),
            iprange,
            subnet,
        }
    }

    fn node() -> Node {
        Node {
            system_id: "abc123".to_string(),
            fqdn: "metal-01.smelt.example".to_string(),
        }
    }

    fn subnets() -> Vec<Subnet> {
        vec![
            Subnet {
                id: 1,
                name: "dmz".to_string(),
                cidr: "10.0.1.0/24".to_string(),
            },
            Subnet {
                id: 2,
                name: "lab".to_string(),
                cidr: "10.0.2.0/24".to_string(),
            },
        ]
    }

    fn ipranges() -> Vec<IpRange> {
        vec![IpRange {
            id: 5,
            start_ip: "10.0.1.10".to_string(),
            end_ip: "10.0.1.99".to_string(),
            subnet: 1,
        }]
    }

    fn context() -> ColumnContext {
        ColumnContext {
            original_node: Some(node()),
            subnets: subnets(),
            ipranges: ipranges(),
            open_side_panel: Callback::from(|_| {}),
        }
    }

    #[test]
    fn test_applies_to_node_wins() {
        let s = snippet(Some("abc123"), None, None);
        assert_eq!(
            applies_to(&s, Some(&node()), &[], &[]),
            "metal-01.smelt.example"
        );
    }

    #[test]
    fn test_applies_to_node_wins_over_subnet() {
        // Both associations set, context supplied for both: the node branch
        // resolves, never the subnet branch.
        let s = snippet(Some("abc123"), None, Some(1));
        assert_eq!(
            applies_to(&s, Some(&node()), &subnets(), &ipranges()),
            "metal-01.smelt.example"
        );
    }

    #[test]
    fn test_applies_to_node_without_context_falls_through() {
        let s = snippet(Some("abc123"), Some(5), None);
        assert_eq!(
            applies_to(&s, None, &subnets(), &ipranges()),
            "10.0.1.10 - 10.0.1.99"
        );
    }

    #[test]
    fn test_applies_to_iprange_not_found_is_empty_not_subnet() {
        // The iprange branch was taken, so an unmatched id yields "" rather
        // than falling through to the subnet branch.
        let s = snippet(None, Some(99), Some(1));
        assert_eq!(applies_to(&s, None, &subnets(), &ipranges()), "");
    }

    #[test]
    fn test_applies_to_iprange_without_context_falls_through_to_subnet() {
        let s = snippet(None, Some(5), Some(2));
        assert_eq!(applies_to(&s, None, &subnets(), &[]), "lab");
    }

    #[test]
    fn test_applies_to_subnet_not_found_is_empty() {
        let s = snippet(None, None, Some(42));
        assert_eq!(applies_to(&s, None, &subnets(), &[]), "");
    }

    #[test]
    fn test_applies_to_nothing_set_is_empty() {
        let s = snippet(None, None, None);
        assert_eq!(applies_to(&s, Some(&node()), &subnets(), &ipranges()), "");
    }

    #[test]
    fn test_applies_to_empty_node_id_is_not_a_node() {
        let s = snippet(Some(""), None, Some(1));
        assert_eq!(applies_to(&s, Some(&node()), &subnets(), &[]), "dmz");
    }

    #[test]
    fn test_snippet_type_precedence() {
        assert_eq!(
            SnippetType::classify(&snippet(Some("abc123"), Some(5), Some(1))),
            SnippetType::Node
        );
        assert_eq!(
            SnippetType::classify(&snippet(None, Some(5), Some(1))),
            SnippetType::IpRange
        );
        assert_eq!(
            SnippetType::classify(&snippet(None, None, Some(1))),
            SnippetType::Subnet
        );
        assert_eq!(
            SnippetType::classify(&snippet(None, None, None)),
            SnippetType::Global
        );
    }

    #[test]
    fn test_enabled_label() {
        assert_eq!(enabled_label(true), "Yes");
        assert_eq!(enabled_label(false), "No");
    }

    #[test]
    fn test_column_order_and_flags() {
        let columns = dhcp_table_columns(&context());
        let keys: Vec<_> = columns.iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec!["name", "type", "applies_to", "enabled", "description", "actions"]
        );
        let headers: Vec<_> = columns.iter().map(|c| c.header).collect();
        assert_eq!(
            headers,
            vec!["Name", "Type", "Applies To", "Enabled", "Description", "Actions"]
        );
        // Actions is the only column that never sorts.
        assert!(columns
            .iter()
            .all(|c| c.sortable != (c.key == "actions")));
    }

    #[test]
    fn test_column_cache_is_stable_for_equal_deps() {
        let mut cache = ColumnCache::default();
        let ctx = context();
        let first = cache.get(&ctx);
        let second = cache.get(&ctx.clone());
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_column_cache_rebuilds_when_any_dep_changes() {
        let mut cache = ColumnCache::default();
        let ctx = context();
        let base = cache.get(&ctx);

        let mut changed_subnets = ctx.clone();
        changed_subnets.subnets.pop();
        let rebuilt = cache.get(&changed_subnets);
        assert!(!Rc::ptr_eq(&base, &rebuilt));

        let mut changed_node = changed_subnets.clone();
        changed_node.original_node = None;
        let rebuilt_again = cache.get(&changed_node);
        assert!(!Rc::ptr_eq(&rebuilt, &rebuilt_again));

        // A new callback instance is a dependency change even if it does
        // the same thing.
        let mut changed_opener = changed_node.clone();
        changed_opener.open_side_panel = Callback::from(|_| {});
        let rebuilt_opener = cache.get(&changed_opener);
        assert!(!Rc::ptr_eq(&rebuilt_again, &rebuilt_opener));

        // Clones of the same callback share identity and do not invalidate.
        let same_opener = changed_opener.clone();
        let cached = cache.get(&same_opener);
        assert!(Rc::ptr_eq(&rebuilt_opener, &cached));
    }
}
