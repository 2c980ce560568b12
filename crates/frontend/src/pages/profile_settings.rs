use crate::session::use_session;
use yew::prelude::*;

#[function_component(ProfileSettings)]
pub fn profile_settings() -> Html {
    let session = use_session();
    let role = session
        .session
        .user
        .as_ref()
        .and_then(|user| user.role.clone())
        .unwrap_or_else(|| "owner".to_string());

    html! {
        <div class="space-y-4">
            <h2 class="text-2xl font-bold text-gray-900">{"Profile Settings"}</h2>
            <div class="bg-white rounded-lg shadow p-6">
                <p class="text-sm text-gray-500">{"Signed in as"}</p>
                <p class="font-medium text-gray-900 capitalize">{role}</p>
            </div>
        </div>
    }
}
