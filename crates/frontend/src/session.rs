//! Session context and provider

use crate::bootstrap::AppServices;
use pg_manager_http::{ApiClient, Session, SessionStore, TokenStorage};
use std::rc::Rc;
use yew::prelude::*;

/// Snapshot of the session store plus the services behind it
#[derive(Clone)]
pub struct SessionState {
    services: AppServices,
    pub session: Session,
}

/// Session actions
pub enum SessionAction {
    /// Re-read the store after a login attempt
    Refresh,
    /// Clear the token from memory and storage
    Logout,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionState>;

impl SessionState {
    pub fn new(services: AppServices) -> Self {
        let session = services.store.session();
        Self { services, session }
    }

    pub fn store(&self) -> Rc<SessionStore> {
        self.services.store.clone()
    }

    pub fn client(&self) -> ApiClient {
        self.services.client().clone()
    }

    pub fn storage(&self) -> Rc<dyn TokenStorage> {
        self.services.storage.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

impl PartialEq for SessionState {
    fn eq(&self, other: &Self) -> bool {
        self.services == other.services && self.session == other.session
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if let SessionAction::Logout = action {
            self.services.store.logout();
        }

        Rc::new(Self {
            services: self.services.clone(),
            session: self.services.store.session(),
        })
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub services: AppServices,
    pub children: Children,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let services = props.services.clone();
    let session = use_reducer(move || SessionState::new(services));

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_manager_http::MemoryStorage;

    fn state_with(storage: MemoryStorage) -> Rc<SessionState> {
        let services = AppServices::new("http://localhost:8080/api", Rc::new(storage)).unwrap();
        Rc::new(SessionState::new(services))
    }

    #[test]
    fn starts_from_persisted_token() {
        let state = state_with(MemoryStorage::with_token("abc"));
        assert!(state.is_authenticated());
        assert_eq!(state.session.token.as_deref(), Some("abc"));
    }

    #[test]
    fn logout_action_clears_store_and_storage() {
        let state = state_with(MemoryStorage::with_token("abc"));
        let storage = state.storage();

        let next = state.reduce(SessionAction::Logout);

        assert!(!next.is_authenticated());
        assert!(!next.store().is_authenticated());
        assert_eq!(storage.token().unwrap(), None);
    }

    #[test]
    fn refresh_picks_up_store_changes() {
        let state = state_with(MemoryStorage::with_token("abc"));
        state.store().logout();
        assert!(state.is_authenticated());

        let next = state.reduce(SessionAction::Refresh);
        assert!(!next.is_authenticated());
    }
}
