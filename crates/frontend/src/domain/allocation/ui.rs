use std::collections::HashSet;

use contracts::domain::allocation::{
    AllocationBatchUpdate, AllocationListQuery, AllocationPayload, AllocationRule,
};
use contracts::domain::dept::DeptListQuery;
use contracts::system::users::UserListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::allocation::api;
use crate::domain::dept::api as dept_api;
use crate::shared::components::import_button::ImportButton;
use crate::shared::components::modal::Modal;
use crate::shared::components::select::OptionSelect;
use crate::shared::format::datetime;
use crate::shared::notify;
use crate::system::auth::context::use_auth;
use crate::system::users::api as users_api;

fn opt(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

#[component]
pub fn AllocationPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let can = move |id: &'static str| auth.get().has_permission(id);

    let items: RwSignal<Vec<AllocationRule>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let selected: RwSignal<HashSet<i64>> = RwSignal::new(HashSet::new());

    let dept_filter: RwSignal<Option<i64>> = RwSignal::new(None);
    let province_filter = RwSignal::new(String::new());

    let depts: RwSignal<Vec<(i64, String)>> = RwSignal::new(Vec::new());
    let leaders: RwSignal<Vec<(i64, String)>> = RwSignal::new(Vec::new());

    let show_form = RwSignal::new(false);
    let editing_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let f_tiantao_province = RwSignal::new(String::new());
    let f_tiantao_city = RwSignal::new(String::new());
    let f_douyin_province = RwSignal::new(String::new());
    let f_douyin_city = RwSignal::new(String::new());
    let f_douyin_province_city = RwSignal::new(String::new());
    let f_dept: RwSignal<Option<i64>> = RwSignal::new(None);
    let f_leader: RwSignal<Option<i64>> = RwSignal::new(None);

    let show_batch = RwSignal::new(false);
    let b_dept: RwSignal<Option<i64>> = RwSignal::new(None);
    let b_leader: RwSignal<Option<i64>> = RwSignal::new(None);

    let load_data = move || {
        let query = AllocationListQuery {
            dept_id: dept_filter.get_untracked(),
            province: opt(province_filter.get_untracked()),
        };
        set_loading.set(true);
        spawn_local(async move {
            if let Ok(rules) = api::fetch_allocations(&query).await {
                items.set(rules);
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
                leaders.set(list.into_iter().map(|u| (u.id, u.username)).collect());
            }
        });
    });

    let open_create = move |_| {
        editing_id.set(None);
        f_tiantao_province.set(String::new());
        f_tiantao_city.set(String::new());
        f_douyin_province.set(String::new());
        f_douyin_city.set(String::new());
        f_douyin_province_city.set(String::new());
        f_dept.set(None);
        f_leader.set(None);
        show_form.set(true);
    };

    let open_edit = move |rule: AllocationRule| {
        editing_id.set(Some(rule.id));
        f_tiantao_province.set(rule.tiantao_province.unwrap_or_default());
        f_tiantao_city.set(rule.tiantao_city.unwrap_or_default());
        f_douyin_province.set(rule.douyin_province.unwrap_or_default());
        f_douyin_city.set(rule.douyin_city.unwrap_or_default());
        f_douyin_province_city.set(rule.douyin_province_city.unwrap_or_default());
        f_dept.set(Some(rule.target_dept_id));
        f_leader.set(rule.target_leader_id);
        show_form.set(true);
    };

    let submit_form = move |_| {
        let Some(target_dept_id) = f_dept.get_untracked() else {
            notify::error("A target store is required");
            return;
        };
        let payload = AllocationPayload {
            tiantao_province: opt(f_tiantao_province.get_untracked()),
            tiantao_city: opt(f_tiantao_city.get_untracked()),
            douyin_province: opt(f_douyin_province.get_untracked()),
            douyin_city: opt(f_douyin_city.get_untracked()),
            douyin_province_city: opt(f_douyin_province_city.get_untracked()),
            target_dept_id,
            target_leader_id: f_leader.get_untracked(),
        };
        spawn_local(async move {
            let result = match editing_id.get_untracked() {
                None => api::create_allocation(&payload).await,
                Some(id) => api::update_allocation(id, &payload).await,
            };
            if result.is_ok() {
                notify::success("Rule saved");
                show_form.set(false);
                load_data();
            }
        });
    };

    let open_batch = move |_| {
        if selected.get_untracked().is_empty() {
            notify::error("Select at least one rule first");
            return;
        }
        b_dept.set(None);
        b_leader.set(None);
        show_batch.set(true);
    };

    let submit_batch = move |_| {
        let ids: Vec<i64> = selected.get_untracked().into_iter().collect();
        let payload = AllocationBatchUpdate {
            ids,
            target_dept_id: b_dept.get_untracked(),
            target_leader_id: b_leader.get_untracked(),
        };
        if payload.target_dept_id.is_none() && payload.target_leader_id.is_none() {
            notify::error("Pick a new store or a new leader");
            return;
        }
        spawn_local(async move {
            if api::batch_update_allocations(&payload).await.is_ok() {
                notify::success("Rules updated");
                show_batch.set(false);
                load_data();
            }
        });
    };

    let remove = move |id: i64| {
        spawn_local(async move {
            if api::delete_allocation(id).await.is_ok() {
                notify::success("Rule deleted");
                load_data();
            }
        });
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
                    <h1 class="page__title">"Allocation rules"</h1>
                    <Badge>{move || items.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || can("allocation:add")>
                        <Button appearance=ButtonAppearance::Primary on_click=open_create>
                            "New"
                        </Button>
                        <ImportButton
                            endpoint="/allocations/import"
                            on_done=Callback::new(move |_| load_data())
                        />
                    </Show>
                    <Show when=move || can("allocation:edit")>
                        <Button appearance=ButtonAppearance::Secondary on_click=open_batch>
                            {move || format!("Re-target ({})", selected.get().len())}
                        </Button>
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
                    <OptionSelect value=dept_filter options=depts none_label="All stores" />
                    <div style="max-width: 220px;">
                        <Input value=province_filter placeholder="Province..." />
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
                            <TableHeaderCell>"Tmall region"</TableHeaderCell>
                            <TableHeaderCell>"Douyin region"</TableHeaderCell>
                            <TableHeaderCell>"Store"</TableHeaderCell>
                            <TableHeaderCell>"Leader"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|rule| rule.id
                            children=move |rule| {
                                let row = rule.clone();
                                let tmall = [rule.tiantao_province.clone(), rule.tiantao_city.clone()]
                                    .into_iter()
                                    .flatten()
                                    .collect::<Vec<_>>()
                                    .join(" / ");
                                let douyin = [
                                    rule.douyin_province.clone(),
                                    rule.douyin_city.clone(),
                                    rule.douyin_province_city.clone(),
                                ]
                                    .into_iter()
                                    .flatten()
                                    .collect::<Vec<_>>()
                                    .join(" / ");
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || selected.get().contains(&rule.id)
                                                on:change=move |_| toggle_selected(rule.id)
                                            />
                                        </TableCell>
                                        <TableCell>{if tmall.is_empty() { "-".to_string() } else { tmall }}</TableCell>
                                        <TableCell>{if douyin.is_empty() { "-".to_string() } else { douyin }}</TableCell>
                                        <TableCell>{rule.dept_name.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                        <TableCell>{rule.leader_name.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                        <TableCell>{datetime(&rule.create_time)}</TableCell>
                                        <TableCell>
                                            <Show when=move || can("allocation:edit")>
                                                {
                                                    let row = row.clone();
                                                    view! {
                                                        <Button size=ButtonSize::Small on_click=move |_| open_edit(row.clone())>
                                                            "Edit"
                                                        </Button>
                                                    }
                                                }
                                            </Show>
                                            <Show when=move || can("allocation:delete")>
                                                <Button size=ButtonSize::Small on_click=move |_| remove(rule.id)>
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
                    if editing_id.get().is_some() { "Edit rule".to_string() } else { "New rule".to_string() }
                })
                open=show_form
            >
                <div class="form">
                    <div class="form-group">
                        <label>"Tmall province"</label>
                        <Input value=f_tiantao_province />
                    </div>
                    <div class="form-group">
                        <label>"Tmall city"</label>
                        <Input value=f_tiantao_city />
                    </div>
                    <div class="form-group">
                        <label>"Douyin province"</label>
                        <Input value=f_douyin_province />
                    </div>
                    <div class="form-group">
                        <label>"Douyin city"</label>
                        <Input value=f_douyin_city />
                    </div>
                    <div class="form-group">
                        <label>"Douyin province+city"</label>
                        <Input value=f_douyin_province_city />
                    </div>
                    <div class="form-group">
                        <label>"Target store"</label>
                        <OptionSelect value=f_dept options=depts none_label="Pick a store" />
                    </div>
                    <div class="form-group">
                        <label>"Target leader"</label>
                        <OptionSelect value=f_leader options=leaders none_label="No leader" />
                    </div>
                    <Flex gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Primary on_click=submit_form>
                            "Save"
                        </Button>
                        <Button on_click=move |_| show_form.set(false)>"Cancel"</Button>
                    </Flex>
                </div>
            </Modal>

            <Modal title=Signal::derive(|| "Re-target selected rules".to_string()) open=show_batch>
                <div class="form">
                    <div class="form-group">
                        <label>"New store (optional)"</label>
                        <OptionSelect value=b_dept options=depts none_label="Keep current" />
                    </div>
                    <div class="form-group">
                        <label>"New leader (optional)"</label>
                        <OptionSelect value=b_leader options=leaders none_label="Keep current" />
                    </div>
                    <Flex gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Primary on_click=submit_batch>
                            "Apply"
                        </Button>
                        <Button on_click=move |_| show_batch.set(false)>"Cancel"</Button>
                    </Flex>
                </div>
            </Modal>
        </div>
    }
}
