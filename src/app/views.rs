use crate::core::router::Router;
use std::fmt;

/// 前端頁面。實際的畫面由宿主框架負責，這裡只需要辨識是哪一頁。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    BuyerSignUp,
    BuyerLogin,
    About,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::BuyerSignUp => "buyer-sign-up",
            View::BuyerLogin => "buyer-login",
            View::About => "about",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::BuyerSignUp => "Buyer Sign Up",
            View::BuyerLogin => "Buyer Login",
            View::About => "About",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

fn load_about() -> View {
    tracing::debug!("about view loaded on first visit");
    View::About
}

pub fn buyer_routes() -> Router<View> {
    Router::new()
        .route("/", View::Home.name(), View::Home)
        .route("/buyer-sign-up", View::BuyerSignUp.name(), View::BuyerSignUp)
        .route("/buyer-login", View::BuyerLogin.name(), View::BuyerLogin)
        .lazy_route("/about", View::About.name(), load_about)
}
