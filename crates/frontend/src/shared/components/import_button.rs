use contracts::shared::ImportResult;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::{http, notify};

/// Hidden file input behind a button; posts the picked file as the
/// multipart field `file` to the given import endpoint.
#[component]
pub fn ImportButton(
    #[prop(into)] endpoint: String,
    #[prop(optional)] on_done: Option<Callback<ImportResult>>,
) -> impl IntoView {
    let input_ref: NodeRef<leptos::html::Input> = NodeRef::new();
    let (uploading, set_uploading) = signal(false);

    let pick_file = move |_| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_change = move |_| {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        // allow re-picking the same file later
        input.set_value("");

        let endpoint = endpoint.clone();
        set_uploading.set(true);
        spawn_local(async move {
            match http::post_file::<ImportResult>(&endpoint, &file).await {
                Ok(result) => {
                    notify::success(&format!(
                        "Imported {} of {} rows ({} failed, {} skipped)",
                        result.success, result.total, result.failed, result.skipped
                    ));
                    if let Some(on_done) = on_done {
                        on_done.run(result);
                    }
                }
                Err(_) => {
                    // already surfaced by the http layer
                }
            }
            set_uploading.set(false);
        });
    };

    view! {
        <input
            type="file"
            accept=".xlsx,.xls"
            style="display: none;"
            node_ref=input_ref
            on:change=on_change
        />
        <Button
            appearance=ButtonAppearance::Secondary
            on_click=pick_file
            disabled=Signal::derive(move || uploading.get())
        >
            {move || if uploading.get() { "Uploading..." } else { "Import" }}
        </Button>
    }
}
