use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A machine under smelt's management. `system_id` is the stable identity,
/// `fqdn` is what humans get shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Node {
    pub system_id: String,
    pub fqdn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Subnet {
    pub id: u32,
    pub name: String,
    pub cidr: String,
}

/// A reserved or dynamic range of addresses inside a subnet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IpRange {
    pub id: u32,
    pub start_ip: String,
    pub end_ip: String,
    pub subnet: u32,
}

impl IpRange {
    /// Human facing name for a range, e.g. "10.0.0.10 - 10.0.0.254".
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.start_ip, self.end_ip)
    }
}

/// A DHCP configuration snippet.
///
/// At most one of `node`, `iprange` and `subnet` is expected to be set; a
/// snippet with none of them applies globally. The server does not reject
/// rows where several are set, so consumers resolve the target with the
/// fixed precedence node > iprange > subnet rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DhcpSnippet {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub node: Option<String>,
    pub iprange: Option<u32>,
    pub subnet: Option<u32>,
}

impl DhcpSnippet {
    /// The owning node's system id. Pre-3.0 servers send the empty string
    /// instead of null here, which counts as unset.
    pub fn node_id(&self) -> Option<&str> {
        self.node.as_deref().filter(|id| !id.is_empty())
    }
}

/// Fields a client may change on a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DhcpSnippetUpdate {
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

/// The authorization code exchange the login callback page performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthCallbackRequest {
    pub code: String,
    pub state: String,
}

/// Payload for session creation. Empty today - a struct so the endpoint can
/// grow fields without a wire break.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionCreateRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionCreateResponse {
    pub token: String,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_dhcp_snippet_decodes_null_associations() {
        let raw = r#"{
            "id": 7,
            "name": "lease-time",
            "description": "Shorter leases for the lab",
            "enabled": true,
            "node": null,
            "iprange": null,
            "subnet": 2
        }"#;
        let snippet: DhcpSnippet = serde_json::from_str(raw).expect("failed to decode snippet");
        assert_eq!(snippet.node_id(), None);
        assert_eq!(snippet.iprange, None);
        assert_eq!(snippet.subnet, Some(2));
    }

    #[test]
    fn test_dhcp_snippet_empty_node_id_counts_as_unset() {
        let raw = r#"{
            "id": 8,
            "name": "pxe",
            "description": "",
            "enabled": false,
            "node": "",
            "iprange": null,
            "subnet": null
        }"#;
        let snippet: DhcpSnippet = serde_json::from_str(raw).expect("failed to decode snippet");
        assert!(snippet.node.is_some());
        assert_eq!(snippet.node_id(), None);
    }

    #[test]
    fn test_iprange_display_name() {
        let range = IpRange {
            id: 1,
            start_ip: "10.0.0.10".to_string(),
            end_ip: "10.0.0.254".to_string(),
            subnet: 2,
        };
        assert_eq!(range.display_name(), "10.0.0.10 - 10.0.0.254");
    }
}
