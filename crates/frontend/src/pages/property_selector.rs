//! Property picker shown after login

use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::session::use_session;
use pg_manager_http::Property;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Loaded(Vec<Property>),
    Failed(String),
}

#[function_component(PropertySelector)]
pub fn property_selector() -> Html {
    let session = use_session();
    let state = use_state(|| LoadState::Loading);

    {
        let client = session.client();
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match client.list_properties().await {
                    Ok(properties) => state.set(LoadState::Loaded(properties)),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to load properties");
                        state.set(LoadState::Failed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let body = match &*state {
        LoadState::Loading => html! { <LoadingSpinner text={Some("Loading properties...".to_string())} /> },
        LoadState::Failed(message) => html! {
            <div class="p-4 rounded bg-red-50 text-red-700">{message}</div>
        },
        LoadState::Loaded(properties) if properties.is_empty() => html! {
            <p class="text-gray-500">{"No properties yet."}</p>
        },
        LoadState::Loaded(properties) => properties
            .iter()
            .map(|property| html! {
                <Link<Route> to={Route::Dashboard { id: property.id.to_string() }} classes="block p-4 bg-white rounded-lg shadow hover:shadow-md">
                    <h3 class="font-semibold text-gray-900">{&property.name}</h3>
                    <p class="text-sm text-gray-500">{&property.address}</p>
                </Link<Route>>
            })
            .collect::<Html>(),
    };

    html! {
        <div class="space-y-4">
            <h2 class="text-2xl font-bold text-gray-900">{"Select a property"}</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">{body}</div>
        </div>
    }
}
