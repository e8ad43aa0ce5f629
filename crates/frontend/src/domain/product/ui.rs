use contracts::domain::product::{Product, ProductListQuery, ProductPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::product::api;
use crate::shared::components::import_button::ImportButton;
use crate::shared::components::modal::Modal;
use crate::shared::format::{datetime, status_label};
use crate::shared::notify;
use crate::system::auth::context::use_auth;

/// Validates and assembles the edit form. `status` carries the record's
/// current status; editing never flips a disabled product back on.
fn form_payload(name: &str, code: &str, status: i32) -> Option<ProductPayload> {
    let product_name = name.trim().to_string();
    if product_name.is_empty() {
        return None;
    }
    Some(ProductPayload {
        product_name,
        product_code: Some(code.to_string()).filter(|c| !c.trim().is_empty()),
        status,
    })
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let can = move |id: &'static str| auth.get().has_permission(id);

    let items: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let name_filter = RwSignal::new(String::new());

    let show_form = RwSignal::new(false);
    let editing_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let f_name = RwSignal::new(String::new());
    let f_code = RwSignal::new(String::new());
    let f_status = RwSignal::new(1);

    let load_data = move || {
        let query = ProductListQuery {
            name: Some(name_filter.get_untracked()).filter(|n| !n.trim().is_empty()),
        };
        set_loading.set(true);
        spawn_local(async move {
            if let Ok(products) = api::fetch_products(&query).await {
                items.set(products);
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let open_create = move |_| {
        editing_id.set(None);
        f_name.set(String::new());
        f_code.set(String::new());
        f_status.set(1);
        show_form.set(true);
    };

    let open_edit = move |product: Product| {
        editing_id.set(Some(product.id));
        f_name.set(product.product_name);
        f_code.set(product.product_code.unwrap_or_default());
        f_status.set(product.status);
        show_form.set(true);
    };

    let submit_form = move |_| {
        let Some(payload) = form_payload(
            &f_name.get_untracked(),
            &f_code.get_untracked(),
            f_status.get_untracked(),
        ) else {
            notify::error("Product name is required");
            return;
        };
        spawn_local(async move {
            let result = match editing_id.get_untracked() {
                None => api::create_product(&payload).await,
                Some(id) => api::update_product(id, &payload).await,
            };
            if result.is_ok() {
                notify::success("Product saved");
                show_form.set(false);
                load_data();
            }
        });
    };

    let toggle_status = move |product: &Product| {
        let id = product.id;
        let next = if product.status == 1 { 0 } else { 1 };
        spawn_local(async move {
            if api::update_product_status(id, next).await.is_ok() {
                load_data();
            }
        });
    };

    let remove = move |id: i64| {
        spawn_local(async move {
            if api::delete_product(id).await.is_ok() {
                notify::success("Product deleted");
                load_data();
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
                    <Badge>{move || items.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || can("product:add")>
                        <Button appearance=ButtonAppearance::Primary on_click=open_create>
                            "New"
                        </Button>
                        <ImportButton
                            endpoint="/products/import"
                            on_done=Callback::new(move |_| load_data())
                        />
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="filter-panel">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="max-width: 280px;">
                        <Input value=name_filter placeholder="Product name..." />
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| load_data()>
                        "Search"
                    </Button>
                </Flex>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Code"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|product| product.id
                            children=move |product| {
                                let row = product.clone();
                                let status_row = product.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>{product.product_name.clone()}</TableCell>
                                        <TableCell>{product.product_code.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                        <TableCell>{status_label(product.status)}</TableCell>
                                        <TableCell>{datetime(&product.create_time)}</TableCell>
                                        <TableCell>
                                            <Show when=move || can("product:edit")>
                                                {
                                                    let row = row.clone();
                                                    view! {
                                                        <Button size=ButtonSize::Small on_click=move |_| open_edit(row.clone())>
                                                            "Edit"
                                                        </Button>
                                                    }
                                                }
                                            </Show>
                                            <Show when=move || can("product:status")>
                                                {
                                                    let status_row = status_row.clone();
                                                    let label = if status_row.status == 1 { "Disable" } else { "Enable" };
                                                    view! {
                                                        <Button size=ButtonSize::Small on_click=move |_| toggle_status(&status_row)>
                                                            {label}
                                                        </Button>
                                                    }
                                                }
                                            </Show>
                                            <Show when=move || can("product:delete")>
                                                <Button size=ButtonSize::Small on_click=move |_| remove(product.id)>
                                                    "Delete"
                                                </Button>
                                            </Show>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            <Modal
                title=Signal::derive(move || {
                    if editing_id.get().is_some() { "Edit product".to_string() } else { "New product".to_string() }
                })
                open=show_form
            >
                <div class="form">
                    <div class="form-group">
                        <label>"Product name"</label>
                        <Input value=f_name />
                    </div>
                    <div class="form-group">
                        <label>"Product code"</label>
                        <Input value=f_code />
                    </div>
                    <Flex gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Primary on_click=submit_form>
                            "Save"
                        </Button>
                        <Button on_click=move |_| show_form.set(false)>"Cancel"</Button>
                    </Flex>
                </div>
            </Modal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saving_an_edit_keeps_a_disabled_product_disabled() {
        let payload = form_payload("Sofa set A", "SKU-77", 0).unwrap();
        assert_eq!(payload.status, 0);
        assert_eq!(payload.product_code.as_deref(), Some("SKU-77"));
    }

    #[test]
    fn blank_fields_are_normalized() {
        assert!(form_payload("", "SKU-1", 1).is_none());
        let payload = form_payload("Sofa", "  ", 1).unwrap();
        assert_eq!(payload.product_code, None);
    }
}
