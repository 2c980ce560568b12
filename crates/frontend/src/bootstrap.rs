//! Application wiring
//!
//! The storage, client and session store are built once here and handed to
//! the component tree, rather than living in globals.

use crate::config::api_base_url;
use crate::storage::BrowserStorage;
use pg_manager_http::{ApiClient, ClientError, SessionStore, TokenStorage};
use std::rc::Rc;

/// Process-wide services shared by the router guard and the pages
#[derive(Clone)]
pub struct AppServices {
    pub storage: Rc<dyn TokenStorage>,
    pub store: Rc<SessionStore>,
}

impl AppServices {
    /// Wire services over an arbitrary storage and base URL
    pub fn new(
        base_url: impl Into<String>,
        storage: Rc<dyn TokenStorage>,
    ) -> Result<Self, ClientError> {
        let client = ApiClient::new(base_url, storage.clone())?;
        let store = Rc::new(SessionStore::new(client));
        Ok(Self { storage, store })
    }

    /// Wire services for the browser
    pub fn bootstrap() -> Result<Self, ClientError> {
        let base_url = api_base_url();
        tracing::info!(%base_url, "Using API");
        Self::new(base_url, Rc::new(BrowserStorage::new()))
    }

    pub fn client(&self) -> &ApiClient {
        self.store.client()
    }
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && Rc::ptr_eq(&self.storage, &other.storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_manager_http::MemoryStorage;

    #[test]
    fn services_share_one_storage() {
        let services =
            AppServices::new("http://localhost:8080/api", Rc::new(MemoryStorage::new())).unwrap();
        services.storage.set_token("abc").unwrap();

        assert_eq!(
            services.client().storage().token().unwrap().as_deref(),
            Some("abc")
        );
        assert!(services.clone() == services);
    }
}
