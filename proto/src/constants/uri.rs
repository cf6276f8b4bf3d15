//! Shared URIs
//!
//! The auth endpoints are registered with the identity provider as part of
//! the OIDC client configuration - changing them breaks every deployed
//! realm, so don't.

pub const V1_AUTH_LOGIN: &str = "/v1/auth/login";
pub const V1_AUTH_CALLBACK: &str = "/v1/auth/callback";
pub const V1_AUTH_SESSION: &str = "/v1/auth/session";
pub const V1_LOGOUT: &str = "/v1/logout";

pub const V1_MACHINE: &str = "/v1/machine";
pub const V1_SUBNET: &str = "/v1/subnet";
pub const V1_IPRANGE: &str = "/v1/iprange";
pub const V1_DHCP_SNIPPET: &str = "/v1/dhcp_snippet";
