use crate::bootstrap::AppServices;
use crate::pages::{
    Login, ProfileSettings, PropertyPage, PropertySelector, PublicHelp, RoomInventory,
    UnifiedLayout,
};
use crate::routes::{Navigation, Route, decide};
use crate::session::{SessionProvider, use_session};
use pg_manager_http::TokenStorage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub services: AppServices,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <SessionProvider services={props.services.clone()}>
            <BrowserRouter>
                <AppRoutes />
            </BrowserRouter>
        </SessionProvider>
    }
}

/// Re-renders on every session change so the guard sees logins and logouts
#[function_component(AppRoutes)]
fn app_routes() -> Html {
    let storage = use_session().storage();

    html! {
        <Switch<Route> render={move |route: Route| switch(route, storage.as_ref())} />
    }
}

/// Run the guard, then render the page or the redirect
fn switch(route: Route, storage: &dyn TokenStorage) -> Html {
    match decide(route, storage) {
        Navigation::Redirect(to) => html! { <Redirect<Route> to={to} /> },
        Navigation::Proceed(route) if route.uses_layout() => html! {
            <UnifiedLayout>
                { page(route) }
            </UnifiedLayout>
        },
        Navigation::Proceed(route) => page(route),
    }
}

fn page(route: Route) -> Html {
    match route {
        Route::Login => html! { <Login /> },
        Route::Home | Route::NotFound => html! {},
        Route::PropertySelector => html! { <PropertySelector /> },
        Route::Inventory { id } => html! { <RoomInventory {id} /> },
        Route::ProfileSettings => html! { <ProfileSettings /> },
        Route::PublicHelp { id } => html! { <PublicHelp {id} /> },
        route => html! { <PropertyPage {route} /> },
    }
}
