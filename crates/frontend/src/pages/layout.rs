//! Shell shared by every signed-in page

use crate::routes::Route;
use crate::session::{SessionAction, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UnifiedLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(UnifiedLayout)]
pub fn unified_layout(props: &UnifiedLayoutProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let current = use_route::<Route>();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.dispatch(SessionAction::Logout);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let property_links = current
        .as_ref()
        .and_then(Route::property_id)
        .map(|id| {
            Route::property_pages(id)
                .into_iter()
                .map(|route| {
                    let active = current.as_ref() == Some(&route);
                    let class = if active {
                        "block px-3 py-2 rounded bg-emerald-100 text-emerald-800"
                    } else {
                        "block px-3 py-2 rounded text-gray-700 hover:bg-gray-100"
                    };
                    html! {
                        <Link<Route> to={route.clone()} classes={classes!(class)}>
                            {route.title()}
                        </Link<Route>>
                    }
                })
                .collect::<Html>()
        });

    html! {
        <div class="min-h-screen flex bg-gray-50">
            <aside class="w-60 bg-white border-r border-gray-200 p-4 space-y-1">
                <h1 class="text-xl font-bold text-emerald-700 mb-4">{"PG Manager"}</h1>
                <Link<Route> to={Route::PropertySelector} classes="block px-3 py-2 rounded text-gray-700 hover:bg-gray-100">
                    {Route::PropertySelector.title()}
                </Link<Route>>
                if let Some(links) = property_links {
                    <div class="pt-2 mt-2 border-t border-gray-100">{links}</div>
                }
                <div class="pt-2 mt-2 border-t border-gray-100">
                    <Link<Route> to={Route::ProfileSettings} classes="block px-3 py-2 rounded text-gray-700 hover:bg-gray-100">
                        {Route::ProfileSettings.title()}
                    </Link<Route>>
                    <button onclick={on_logout} class="w-full text-left px-3 py-2 rounded text-red-600 hover:bg-red-50">
                        {"Sign Out"}
                    </button>
                </div>
            </aside>
            <main class="flex-1 p-8">
                {props.children.clone()}
            </main>
        </div>
    }
}
