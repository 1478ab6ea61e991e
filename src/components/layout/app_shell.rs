//! Shared layout wrapper with the navigation chrome and content container.
//! Routes wrap their content in this shell so the navbar and footer stay
//! consistent. Navigation is client-side only; the backend enforces the real
//! access rules.

use crate::components::layout::{Footer, Navbar};
use leptos::prelude::*;

/// Wraps a route with the navbar, a main content container, and the footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-100 text-gray-900 dark:bg-gray-900 dark:text-gray-100">
            <Navbar />
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <Footer />
        </div>
    }
}
