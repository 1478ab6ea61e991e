mod forgot_password;
mod home;
mod login;
mod not_found;
mod register;
mod register_confirmation;
mod reset_password;

pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;
pub(crate) use register_confirmation::RegisterConfirmationPage;
pub(crate) use reset_password::ResetPasswordPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths referenced by links and programmatic navigation.
pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/auth";
    pub const REGISTER: &str = "/auth/register";
    pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
    pub const REGISTER_CONFIRMATION: &str = "/auth/register-confirmation";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/auth") view=LoginPage />
            <Route path=path!("/auth/register") view=RegisterPage />
            <Route path=path!("/auth/forgot-password") view=ForgotPasswordPage />
            <Route path=path!("/auth/update-password/:token") view=ResetPasswordPage />
            <Route path=path!("/auth/register-confirmation") view=RegisterConfirmationPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
