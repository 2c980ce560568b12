//! Owner login page

use crate::routes::Route;
use crate::session::{SessionAction, use_session};
use pg_manager_http::LoginRequest;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let credentials = LoginRequest::new((*email).trim(), (*password).clone());
            let store = session.store();
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();

            is_submitting.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let logged_in = store.login(&credentials).await;
                session.dispatch(SessionAction::Refresh);
                is_submitting.set(false);

                if logged_in {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::PropertySelector);
                    }
                } else {
                    error.set(Some("Invalid email or password".to_string()));
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <form class="max-w-sm w-full bg-white rounded-lg shadow p-8 space-y-4" onsubmit={on_submit}>
                <h1 class="text-2xl font-bold text-gray-900 text-center">{"PG Manager"}</h1>
                <p class="text-sm text-gray-500 text-center">{"Sign in to manage your properties"}</p>

                if let Some(message) = &*error {
                    <div class="p-3 rounded bg-red-50 text-red-700 text-sm">{message}</div>
                }

                <input
                    type="email"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                    required=true
                />
                <input
                    type="password"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={on_password_input}
                    required=true
                />
                <button
                    type="submit"
                    class="w-full py-2 rounded-md text-white bg-emerald-600 hover:bg-emerald-700 disabled:opacity-50"
                    disabled={*is_submitting}
                >
                    {if *is_submitting { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </div>
    }
}
