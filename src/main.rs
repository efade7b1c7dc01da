use anyhow::{Context, Result};
use contact_form::App;
use leptos::logging::log;
use leptos::prelude::*;

fn setup() -> Result<()> {
    let body = document().body().context("document has no <body>")?;
    leptos::mount::mount_to(body, App).forget();

    log!("contact form mounted");

    Ok(())
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(x) = setup() {
        panic!("error: {x}")
    }
}
