use serde::{Deserialize, Serialize};
use yew_router::Routable;

#[derive(Routable, PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub enum LoginRoute {
    #[at("/ui/login")]
    Login,

    #[at("/ui/login/callback")]
    Callback,

    #[not_found]
    #[at("/ui/login/404")]
    NotFound,
}
