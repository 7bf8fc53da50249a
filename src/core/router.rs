use std::fmt;
use std::sync::OnceLock;

type Loader<V> = Box<dyn Fn() -> V + Send + Sync>;

enum RouteView<V> {
    Eager(V),
    Lazy { loader: Loader<V>, cell: OnceLock<V> },
}

pub struct Route<V> {
    path: String,
    name: String,
    view: RouteView<V>,
}

impl<V> Route<V> {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self.view, RouteView::Lazy { .. })
    }

    pub fn is_loaded(&self) -> bool {
        match &self.view {
            RouteView::Eager(_) => true,
            RouteView::Lazy { cell, .. } => cell.get().is_some(),
        }
    }

    fn view(&self) -> &V {
        match &self.view {
            RouteView::Eager(view) => view,
            RouteView::Lazy { loader, cell } => cell.get_or_init(|| {
                tracing::debug!("Loading view for route '{}'", self.name);
                loader()
            }),
        }
    }
}

impl<V> fmt::Debug for Route<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("lazy", &self.is_lazy())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

/// 靜態路由表：路徑完全比對，沒有萬用字元、參數或守衛。
///
/// lazy 路由在第一次導覽時才呼叫 loader，之後沿用同一個 view。
#[derive(Debug)]
pub struct Router<V> {
    routes: Vec<Route<V>>,
}

impl<V> Default for Router<V> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<V> Router<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, path: &str, name: &str, view: V) -> Self {
        self.push(path, name, RouteView::Eager(view))
    }

    pub fn lazy_route<F>(self, path: &str, name: &str, loader: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        self.push(
            path,
            name,
            RouteView::Lazy {
                loader: Box::new(loader),
                cell: OnceLock::new(),
            },
        )
    }

    fn push(mut self, path: &str, name: &str, view: RouteView<V>) -> Self {
        if self.find(path).is_some() {
            tracing::warn!("⚠️ Route '{}' already declared, ignoring '{}'", path, name);
            return self;
        }
        self.routes.push(Route {
            path: path.to_string(),
            name: name.to_string(),
            view,
        });
        self
    }

    fn find(&self, path: &str) -> Option<&Route<V>> {
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn resolve(&self, path: &str) -> Option<&V> {
        match self.find(path) {
            Some(route) => {
                tracing::debug!("Navigating to '{}' ({})", path, route.name);
                Some(route.view())
            }
            None => {
                tracing::debug!("No route declared for '{}'", path);
                None
            }
        }
    }

    pub fn resolve_name(&self, name: &str) -> Option<&V> {
        self.routes
            .iter()
            .find(|r| r.name == name)
            .map(|route| route.view())
    }

    pub fn is_loaded(&self, path: &str) -> bool {
        self.find(path).is_some_and(Route::is_loaded)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.path.as_str())
    }

    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }
}
