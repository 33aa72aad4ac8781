use leptos::prelude::*;
use sheet_form::app::{App, document_locale};
use sheet_form::config::FormConfig;

fn main() {
    console_error_panic_hook::set_once();
    let config = FormConfig::default().with_locale(document_locale());
    mount_to_body(move || view! { <App config=config /> });
}
