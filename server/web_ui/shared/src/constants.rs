//! Constants used across the web UI bundles.

// CSS classes that get applied to full-page forms
pub const CSS_CLASSES_BODY_FORM: &[&str] = &["flex-column", "d-flex", "h-100"];

pub const CSS_ALERT_DANGER: &str = "alert alert-danger";
pub const CSS_ALERT_INFO: &str = "alert alert-info";
pub const CSS_ALERT_SUCCESS: &str = "alert alert-success";

pub const CSS_PAGE_HEADER: &str =
    "d-flex justify-content-between flex-wrap flex-md-nowrap align-items-center pt-3 pb-2 mb-3 border-bottom";

pub const CSS_TABLE: &str = "table table-striped table-hover";
pub const CSS_CELL: &str = "py-1";

pub const CSS_BREADCRUMB_ITEM: &str = "breadcrumb-item";
pub const CSS_BREADCRUMB_ITEM_ACTIVE: &str = "breadcrumb-item active";

pub const CSS_NAVBAR_NAV: &str = "navbar navbar-expand-md navbar-dark bg-dark mb-4";
pub const CSS_NAVBAR_BRAND: &str = "navbar-brand navbar-dark";
pub const CSS_NAVBAR_LINKS_UL: &str = "navbar-nav me-auto mb-2 mb-md-0";
pub const CSS_NAV_LINK: &str = "nav-link";

// the HTML element ID that the navbar collapse toggle targets
pub const ID_NAVBAR_COLLAPSE: &str = "navbarCollapse";
// the HTML element ID that the signout modal dialogue box has
pub const ID_SIGNOUTMODAL: &str = "signoutModal";

pub const IMG_LOGO_SQUARE: &str = "/pkg/img/logo-square.svg";

pub const URL_ADMIN_HOME: &str = "/ui/admin";
/// The default landing page after login.
pub const URL_MACHINES: &str = "/ui/admin/machines";
pub const URL_LOGIN: &str = "/ui/login";
pub const URL_LOGIN_CALLBACK: &str = "/ui/login/callback";
/// The full snippet management view, served by the settings bundle.
pub const URL_SETTINGS_DHCP: &str = "/ui/settings/dhcp";
pub const URL_DOCS_DHCP: &str = "https://docs.smeltproject.org/networking/dhcp-snippets";
