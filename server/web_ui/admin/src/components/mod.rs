pub mod dhcp_columns;
pub mod dhcp_table;
pub mod machines;
pub mod side_panel;
pub mod subnets;

mod prelude {

    pub use smelt_web_ui_shared::utils::{do_alert_error, do_page_header, loading_spinner};
    pub use smelt_web_ui_shared::{do_request, RequestMethod};
}
