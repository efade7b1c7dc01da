//! Leptos components for the contact page.
mod app;
mod contact_form;

pub use app::App;
pub use contact_form::ContactForm;
