use crate::app::views::{buyer_routes, View};
use crate::core::actions::BuyerClient;
use crate::core::router::Router;
use crate::domain::ports::Transport;
use std::sync::Arc;

/// 導覽結果：解析出的頁面，加上注入給頁面的 client
pub struct Page<'a, V, T: Transport> {
    pub path: String,
    pub view: &'a V,
    pub client: Arc<BuyerClient<T>>,
}

pub struct App<V, T: Transport> {
    router: Router<V>,
    client: Arc<BuyerClient<T>>,
}

impl<T: Transport + 'static> App<View, T> {
    pub fn buyer_portal(client: BuyerClient<T>) -> Self {
        Self::new(buyer_routes(), client)
    }
}

impl<V, T: Transport + 'static> App<V, T> {
    pub fn new(router: Router<V>, client: BuyerClient<T>) -> Self {
        Self {
            router,
            client: Arc::new(client),
        }
    }

    pub fn navigate(&self, path: &str) -> Option<Page<'_, V, T>> {
        let view = self.router.resolve(path)?;
        Some(Page {
            path: path.to_string(),
            view,
            client: Arc::clone(&self.client),
        })
    }

    pub fn router(&self) -> &Router<V> {
        &self.router
    }

    pub fn client(&self) -> Arc<BuyerClient<T>> {
        Arc::clone(&self.client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::HttpTransport;
    use crate::core::ConfigProvider;

    struct LocalConfig;

    impl ConfigProvider for LocalConfig {
        fn api_base_url(&self) -> &str {
            "http://localhost:8080"
        }
    }

    #[test]
    fn test_navigate_injects_shared_client() {
        let app = App::buyer_portal(BuyerClient::new(HttpTransport::new(), &LocalConfig));

        let page = app.navigate("/buyer-sign-up").unwrap();
        assert_eq!(*page.view, View::BuyerSignUp);
        assert_eq!(page.path, "/buyer-sign-up");
        assert!(Arc::ptr_eq(&page.client, &app.client()));
        assert_eq!(page.client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_navigate_unknown_path() {
        let app = App::buyer_portal(BuyerClient::new(HttpTransport::new(), &LocalConfig));
        assert!(app.navigate("/vendor").is_none());
        assert!(!app.router().is_loaded("/about"));
    }
}
