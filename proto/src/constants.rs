//! Because consistency is great!

pub mod uri;

pub const APPLICATION_JSON: &str = "application/json";

/// Response header carrying the server operation id, shown to users so they
/// can quote it in support requests.
pub const SOPID: &str = "x-smelt-opid";
/// Header carrying the short lived auth session id while a login flow is in
/// progress.
pub const SSESSIONID: &str = "x-smelt-auth-session-id";
