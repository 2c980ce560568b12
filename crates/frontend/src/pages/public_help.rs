//! Public complaint page, reachable without a login

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PublicHelpProps {
    pub id: AttrValue,
}

#[function_component(PublicHelp)]
pub fn public_help(props: &PublicHelpProps) -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow p-8 space-y-2">
                <h1 class="text-2xl font-bold text-gray-900">{"Need help?"}</h1>
                <p class="text-gray-600">
                    {format!("Raise a complaint for property {} and the owner will be notified.", props.id)}
                </p>
            </div>
        </div>
    }
}
