mod detail;

use std::collections::HashSet;

use contracts::domain::customer::{
    Customer, CustomerListQuery, CustomerPayload, CustomerTransfer,
};
use contracts::domain::dept::DeptListQuery;
use contracts::domain::product::ProductListQuery;
use contracts::system::users::UserListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::customer::api;
use crate::domain::dept::api as dept_api;
use crate::domain::product::api as product_api;
use crate::shared::components::import_button::ImportButton;
use crate::shared::components::modal::Modal;
use crate::shared::components::select::OptionSelect;
use crate::shared::format::{datetime, datetime_opt};
use crate::shared::notify;
use crate::system::auth::context::use_auth;
use crate::system::users::api as users_api;

use detail::CustomerDetail;

fn opt(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

#[component]
pub fn CustomerPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let can = move |id: &'static str| auth.get().has_permission(id);

    let items: RwSignal<Vec<Customer>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let selected: RwSignal<HashSet<i64>> = RwSignal::new(HashSet::new());

    let name_filter = RwSignal::new(String::new());
    let phone_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());

    let depts: RwSignal<Vec<(i64, String)>> = RwSignal::new(Vec::new());
    let owners: RwSignal<Vec<(i64, String)>> = RwSignal::new(Vec::new());
    let products: RwSignal<Vec<(i64, String)>> = RwSignal::new(Vec::new());

    let show_form = RwSignal::new(false);
    let editing_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let f_name = RwSignal::new(String::new());
    let f_phone = RwSignal::new(String::new());
    let f_source = RwSignal::new(String::new());
    let f_wechat = RwSignal::new(String::new());
    let f_address = RwSignal::new(String::new());
    let f_community = RwSignal::new(String::new());
    let f_dept: RwSignal<Option<i64>> = RwSignal::new(None);
    let f_owner: RwSignal<Option<i64>> = RwSignal::new(None);
    let f_product: RwSignal<Option<i64>> = RwSignal::new(None);

    let show_transfer = RwSignal::new(false);
    let t_owner: RwSignal<Option<i64>> = RwSignal::new(None);
    let t_dept: RwSignal<Option<i64>> = RwSignal::new(None);

    let detail_customer: RwSignal<Option<Customer>> = RwSignal::new(None);
    let show_detail = RwSignal::new(false);

    let load_data = move || {
        let query = CustomerListQuery {
            name: opt(name_filter.get_untracked()),
            phone: opt(phone_filter.get_untracked()),
            status: opt(status_filter.get_untracked()),
        };
        set_loading.set(true);
        spawn_local(async move {
            if let Ok(customers) = api::fetch_customers(&query).await {
                items.set(customers);
                selected.set(HashSet::new());
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_data();
        spawn_local(async move {
            if let Ok(list) = dept_api::fetch_depts(&DeptListQuery::default()).await {
                depts.set(list.into_iter().map(|d| (d.id, d.dept_name)).collect());
            }
            if let Ok(list) = users_api::fetch_users(&UserListQuery::default()).await {
                owners.set(list.into_iter().map(|u| (u.id, u.username)).collect());
            }
            if let Ok(list) = product_api::fetch_products(&ProductListQuery::default()).await {
                products.set(list.into_iter().map(|p| (p.id, p.product_name)).collect());
            }
        });
    });

    let open_create = move |_| {
        editing_id.set(None);
        f_name.set(String::new());
        f_phone.set(String::new());
        f_source.set(String::new());
        f_wechat.set(String::new());
        f_address.set(String::new());
        f_community.set(String::new());
        f_dept.set(None);
        f_owner.set(None);
        f_product.set(None);
        show_form.set(true);
    };

    let open_edit = move |customer: Customer| {
        editing_id.set(Some(customer.id));
        f_name.set(customer.customer_name);
        f_phone.set(customer.phone);
        f_source.set(customer.source.unwrap_or_default());
        f_wechat.set(customer.wechat.unwrap_or_default());
        f_address.set(customer.address.unwrap_or_default());
        f_community.set(customer.community.unwrap_or_default());
        f_dept.set(customer.dept_id);
        f_owner.set(customer.owner_id);
        f_product.set(customer.intent_product_id);
        show_form.set(true);
    };

    let submit_form = move |_| {
        let customer_name = f_name.get_untracked().trim().to_string();
        let phone = f_phone.get_untracked().trim().to_string();
        if customer_name.is_empty() || phone.is_empty() {
            notify::error("Name and phone are required");
            return;
        }
        let payload = CustomerPayload {
            customer_name,
            phone,
            source: opt(f_source.get_untracked()),
            address: opt(f_address.get_untracked()),
            dept_id: f_dept.get_untracked(),
            owner_id: f_owner.get_untracked(),
            wechat: opt(f_wechat.get_untracked()),
            community: opt(f_community.get_untracked()),
            intent_product_id: f_product.get_untracked(),
            ..Default::default()
        };
        spawn_local(async move {
            let result = match editing_id.get_untracked() {
                None => api::create_customer(&payload).await.map(|_| ()),
                Some(id) => {
                    let update = contracts::domain::customer::CustomerUpdate {
                        customer_name: Some(payload.customer_name.clone()),
                        phone: Some(payload.phone.clone()),
                        source: payload.source.clone(),
                        address: payload.address.clone(),
                        dept_id: payload.dept_id,
                        owner_id: payload.owner_id,
                        wechat: payload.wechat.clone(),
                        community: payload.community.clone(),
                        intent_product_id: payload.intent_product_id,
                        ..Default::default()
                    };
                    api::update_customer(id, &update).await.map(|_| ())
                }
            };
            if result.is_ok() {
                notify::success("Customer saved");
                show_form.set(false);
                load_data();
            }
        });
    };

    let open_transfer = move |_| {
        if selected.get_untracked().is_empty() {
            notify::error("Select at least one customer first");
            return;
        }
        t_owner.set(None);
        t_dept.set(None);
        show_transfer.set(true);
    };

    let submit_transfer = move |_| {
        let Some(new_owner_id) = t_owner.get_untracked() else {
            notify::error("A new owner is required");
            return;
        };
        let payload = CustomerTransfer {
            customer_ids: selected.get_untracked().into_iter().collect(),
            new_owner_id,
            new_dept_id: t_dept.get_untracked(),
        };
        spawn_local(async move {
            if api::transfer_customers(&payload).await.is_ok() {
                notify::success("Customers transferred");
                show_transfer.set(false);
                load_data();
            }
        });
    };

    let open_detail = move |customer: Customer| {
        detail_customer.set(Some(customer));
        show_detail.set(true);
    };

    let toggle_selected = move |id: i64| {
        selected.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Customers"</h1>
                    <Badge>{move || items.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || can("customer:add")>
                        <Button appearance=ButtonAppearance::Primary on_click=open_create>
                            "New"
                        </Button>
                    </Show>
                    <Show when=move || can("customer:transfer")>
                        <Button appearance=ButtonAppearance::Secondary on_click=open_transfer>
                            {move || format!("Transfer ({})", selected.get().len())}
                        </Button>
                    </Show>
                    <Show when=move || can("customer:import")>
                        <ImportButton
                            endpoint="/customers/import"
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
                    <div style="max-width: 200px;">
                        <Input value=name_filter placeholder="Name..." />
                    </div>
                    <div style="max-width: 200px;">
                        <Input value=phone_filter placeholder="Phone..." />
                    </div>
                    <div style="max-width: 200px;">
                        <Input value=status_filter placeholder="Follow status..." />
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
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Phone"</TableHeaderCell>
                            <TableHeaderCell>"Source"</TableHeaderCell>
                            <TableHeaderCell>"Store"</TableHeaderCell>
                            <TableHeaderCell>"Owner"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Follows"</TableHeaderCell>
                            <TableHeaderCell>"Last follow"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|customer| customer.id
                            children=move |customer| {
                                let edit_row = customer.clone();
                                let detail_row = customer.clone();
                                let deal = customer.is_deal == 1;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || selected.get().contains(&customer.id)
                                                on:change=move |_| toggle_selected(customer.id)
                                            />
                                        </TableCell>
                                        <TableCell>{customer.customer_name.clone()}</TableCell>
                                        <TableCell>{customer.phone.clone()}</TableCell>
                                        <TableCell>{customer.source.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                        <TableCell>{customer.dept_name.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                        <TableCell>{customer.owner_name.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                        <TableCell>
                                            {if deal {
                                                "Dealt".to_string()
                                            } else {
                                                customer.follow_status.clone().unwrap_or_else(|| "New".into())
                                            }}
                                        </TableCell>
                                        <TableCell>{customer.follow_count.to_string()}</TableCell>
                                        <TableCell>{datetime_opt(&customer.last_follow_time)}</TableCell>
                                        <TableCell>{datetime(&customer.create_time)}</TableCell>
                                        <TableCell>
                                            <Button size=ButtonSize::Small on_click=move |_| open_detail(detail_row.clone())>
                                                "Detail"
                                            </Button>
                                            <Show when=move || can("customer:edit")>
                                                {
                                                    let edit_row = edit_row.clone();
                                                    view! {
                                                        <Button size=ButtonSize::Small on_click=move |_| open_edit(edit_row.clone())>
                                                            "Edit"
                                                        </Button>
                                                    }
                                                }
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
                    if editing_id.get().is_some() { "Edit customer".to_string() } else { "New customer".to_string() }
                })
                open=show_form
            >
                <div class="form">
                    <div class="form-group">
                        <label>"Name"</label>
                        <Input value=f_name />
                    </div>
                    <div class="form-group">
                        <label>"Phone"</label>
                        <Input value=f_phone />
                    </div>
                    <div class="form-group">
                        <label>"Source"</label>
                        <Input value=f_source placeholder="tmall / douyin / walk-in..." />
                    </div>
                    <div class="form-group">
                        <label>"WeChat"</label>
                        <Input value=f_wechat />
                    </div>
                    <div class="form-group">
                        <label>"Address"</label>
                        <Input value=f_address />
                    </div>
                    <div class="form-group">
                        <label>"Community"</label>
                        <Input value=f_community />
                    </div>
                    <div class="form-group">
                        <label>"Store"</label>
                        <OptionSelect value=f_dept options=depts none_label="No store" />
                    </div>
                    <div class="form-group">
                        <label>"Owner"</label>
                        <OptionSelect value=f_owner options=owners none_label="Unassigned" />
                    </div>
                    <div class="form-group">
                        <label>"Intent product"</label>
                        <OptionSelect value=f_product options=products none_label="Undecided" />
                    </div>
                    <Flex gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Primary on_click=submit_form>
                            "Save"
                        </Button>
                        <Button on_click=move |_| show_form.set(false)>"Cancel"</Button>
                    </Flex>
                </div>
            </Modal>

            <Modal title=Signal::derive(|| "Transfer selected customers".to_string()) open=show_transfer>
                <div class="form">
                    <div class="form-group">
                        <label>"New owner"</label>
                        <OptionSelect value=t_owner options=owners none_label="Pick an owner" />
                    </div>
                    <div class="form-group">
                        <label>"New store (optional)"</label>
                        <OptionSelect value=t_dept options=depts none_label="Keep current" />
                    </div>
                    <Flex gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Primary on_click=submit_transfer>
                            "Apply"
                        </Button>
                        <Button on_click=move |_| show_transfer.set(false)>"Cancel"</Button>
                    </Flex>
                </div>
            </Modal>

            <Show when=move || show_detail.get() && detail_customer.get().is_some()>
                {move || {
                    detail_customer
                        .get()
                        .map(|customer| {
                            view! {
                                <CustomerDetail
                                    customer=customer
                                    open=show_detail
                                    products=products
                                    on_changed=Callback::new(move |_| load_data())
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}
