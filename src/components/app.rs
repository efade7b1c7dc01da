use super::ContactForm;
use leptos::prelude::*;

/// Page root.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="page">
            <ContactForm />
        </main>
    }
}
