//! Alert banners for the per-screen success and error feedback. Success and
//! error are mutually exclusive by construction: screens reset both before
//! every submission attempt. Messages must be safe to render and should never
//! include secrets or tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
}

/// Renders a styled alert banner with a short title line.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let (class, title) = match kind {
        AlertKind::Error => (
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200",
            "Error",
        ),
        AlertKind::Success => (
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200",
            "Success",
        ),
    };

    view! {
        <div class=class role="alert">
            <p class="font-semibold">{title}</p>
            <p>{message}</p>
        </div>
    }
}
