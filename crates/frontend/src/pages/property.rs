//! Per-property pages

use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::session::use_session;
use pg_manager_http::Room;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PropertyPageProps {
    pub route: Route,
}

/// Heading and content area for a property section
#[function_component(PropertyPage)]
pub fn property_page(props: &PropertyPageProps) -> Html {
    let property_id = props.route.property_id().unwrap_or_default();

    html! {
        <div class="space-y-4">
            <p class="text-sm text-gray-500">{format!("Property #{property_id}")}</p>
            <h2 class="text-2xl font-bold text-gray-900">{props.route.title()}</h2>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RoomInventoryProps {
    pub id: AttrValue,
}

/// Property ids in paths are free text; the backend only knows numbers
fn parse_property_id(id: &str) -> Result<u64, String> {
    id.parse().map_err(|_| format!("No property with id \"{id}\""))
}

#[derive(Clone, PartialEq)]
enum RoomsState {
    Loading,
    Loaded(Vec<Room>),
    Failed(String),
}

/// Room list for one property
#[function_component(RoomInventory)]
pub fn room_inventory(props: &RoomInventoryProps) -> Html {
    let session = use_session();
    let state = use_state(|| RoomsState::Loading);

    {
        let client = session.client();
        let state = state.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = match parse_property_id(id) {
                Ok(id) => id,
                Err(message) => {
                    tracing::warn!(property_id = %id, "Invalid property id in path");
                    state.set(RoomsState::Failed(message));
                    return;
                }
            };
            state.set(RoomsState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match client.property_rooms(id).await {
                    Ok(rooms) => state.set(RoomsState::Loaded(rooms)),
                    Err(e) => {
                        tracing::error!(property_id = id, error = %e, "Failed to load rooms");
                        state.set(RoomsState::Failed(e.to_string()));
                    }
                }
            });
        });
    }

    let title = Route::Inventory {
        id: props.id.to_string(),
    }
    .title();
    let body = match &*state {
        RoomsState::Loading => html! {
            <LoadingSpinner text={Some("Loading rooms...".to_string())} />
        },
        RoomsState::Failed(message) => html! {
            <div class="p-4 rounded bg-red-50 text-red-700">{message}</div>
        },
        RoomsState::Loaded(rooms) => html! {
            <table class="w-full bg-white rounded-lg shadow text-left">
                <thead class="text-sm text-gray-500">
                    <tr>
                        <th class="p-3">{"Room"}</th>
                        <th class="p-3">{"Beds"}</th>
                        <th class="p-3">{"Vacant"}</th>
                        <th class="p-3">{"Rent / bed"}</th>
                        <th class="p-3">{"Deposit"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for rooms.iter().map(|room| html! {
                        <tr class="border-t border-gray-100">
                            <td class="p-3 font-medium">{&room.room_number}</td>
                            <td class="p-3">{room.capacity}</td>
                            <td class="p-3">{room.vacancies()}</td>
                            <td class="p-3">{format!("₹{:.2}", room.price)}</td>
                            <td class="p-3">{format!("₹{:.2}", room.deposit)}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <div class="space-y-4">
            <p class="text-sm text-gray-500">{format!("Property #{}", props.id)}</p>
            <h2 class="text-2xl font-bold text-gray-900">{title}</h2>
            {body}
        </div>
    }
}
