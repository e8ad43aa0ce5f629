use leptos::prelude::*;

/// Headline figure on the dashboard. `None` renders a placeholder while
/// the summary is loading.
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">
                {move || value.get().unwrap_or_else(|| "—".to_string())}
            </div>
        </div>
    }
}
