use leptos::prelude::*;
use thaw::*;

/// Minimal centered dialog. Clicking the overlay or the close button
/// hides it; content keeps its state while hidden.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    open: RwSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal__header">
                        <h3 class="modal__title">{move || title.get()}</h3>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            size=ButtonSize::Small
                            on_click=move |_| open.set(false)
                        >
                            "✕"
                        </Button>
                    </div>
                    <div class="modal__body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
