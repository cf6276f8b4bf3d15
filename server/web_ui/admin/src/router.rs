#![allow(clippy::disallowed_types)] // because `Routable` uses a hashmap

use serde::{Deserialize, Serialize};
use yew::{html, Html};
use yew_router::prelude::Redirect;
use yew_router::Routable;

use crate::components;

#[derive(Routable, PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub enum AdminRoute {
    #[at("/ui/admin")]
    Home,
    #[at("/ui/admin/machines")]
    Machines,
    #[at("/ui/admin/subnets")]
    Subnets,

    #[at("/ui/admin/machine/:system_id")]
    ViewMachine { system_id: String },
    #[at("/ui/admin/subnet/:id")]
    ViewSubnet { id: u32 },

    #[not_found]
    #[at("/ui/admin/404")]
    NotFound,
}

pub(crate) fn switch(route: AdminRoute) -> Html {
    match route {
        AdminRoute::Home => html! {
          <Redirect<AdminRoute> to={AdminRoute::Machines}/>
        },
        AdminRoute::Machines => html!(
          <components::machines::MachinesList />
        ),
        AdminRoute::Subnets => html!(
          <components::subnets::SubnetsList />
        ),
        AdminRoute::ViewMachine { system_id } => html!(
            <components::machines::MachineView system_id={system_id} />
        ),
        AdminRoute::ViewSubnet { id } => html!(
            <components::subnets::SubnetView id={id} />
        ),
        AdminRoute::NotFound => html! (
          <Redirect<AdminRoute> to={AdminRoute::Machines}/>
        ),
    }
}
