use leptos::prelude::*;

/// Native select over `(id, label)` pairs with an explicit "none" row.
/// Used for store/role/owner pickers in the edit forms.
#[component]
pub fn OptionSelect(
    value: RwSignal<Option<i64>>,
    #[prop(into)] options: Signal<Vec<(i64, String)>>,
    #[prop(optional, into)] none_label: Option<&'static str>,
) -> impl IntoView {
    let none_label = none_label.unwrap_or("—");

    view! {
        <select
            class="form__select"
            on:change=move |ev| {
                value.set(event_target_value(&ev).parse::<i64>().ok());
            }
        >
            <option value="" selected=move || value.get().is_none()>{none_label}</option>
            <For
                each=move || options.get()
                key=|(id, _)| *id
                children=move |(id, label)| {
                    view! {
                        <option value=id.to_string() selected=move || value.get() == Some(id)>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}
