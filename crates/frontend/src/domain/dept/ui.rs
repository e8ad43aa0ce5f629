use contracts::domain::dept::{Dept, DeptListQuery, DeptPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::dept::api;
use crate::shared::components::import_button::ImportButton;
use crate::shared::components::modal::Modal;
use crate::shared::components::select::OptionSelect;
use crate::shared::format::{datetime, status_label};
use crate::shared::notify;
use crate::system::auth::context::use_auth;
use crate::system::users;

/// Validates and assembles the edit form. `status` is the record's
/// current status so saving an edit never re-enables a disabled store.
fn form_payload(name: &str, leader_id: Option<i64>, status: i32) -> Option<DeptPayload> {
    let dept_name = name.trim().to_string();
    if dept_name.is_empty() {
        return None;
    }
    Some(DeptPayload {
        dept_name,
        leader_id,
        status,
    })
}

#[component]
pub fn DeptPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let can = move |id: &'static str| auth.get().has_permission(id);

    let items: RwSignal<Vec<Dept>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let name_filter = RwSignal::new(String::new());

    // store managers for the leader picker
    let leaders: RwSignal<Vec<(i64, String)>> = RwSignal::new(Vec::new());

    let show_form = RwSignal::new(false);
    let editing_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let f_name = RwSignal::new(String::new());
    let f_leader: RwSignal<Option<i64>> = RwSignal::new(None);
    let f_status = RwSignal::new(1);

    let load_data = move || {
        let query = DeptListQuery {
            name: Some(name_filter.get_untracked()).filter(|n| !n.trim().is_empty()),
        };
        set_loading.set(true);
        spawn_local(async move {
            if let Ok(depts) = api::fetch_depts(&query).await {
                items.set(depts);
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_data();
        spawn_local(async move {
            if let Ok(list) = users::api::fetch_users(&Default::default()).await {
                leaders.set(list.into_iter().map(|u| (u.id, u.username)).collect());
            }
        });
    });

    let open_create = move |_| {
        editing_id.set(None);
        f_name.set(String::new());
        f_leader.set(None);
        f_status.set(1);
        show_form.set(true);
    };

    let open_edit = move |dept: Dept| {
        editing_id.set(Some(dept.id));
        f_name.set(dept.dept_name);
        f_leader.set(dept.leader_id);
        f_status.set(dept.status);
        show_form.set(true);
    };

    let submit_form = move |_| {
        let Some(payload) = form_payload(
            &f_name.get_untracked(),
            f_leader.get_untracked(),
            f_status.get_untracked(),
        ) else {
            notify::error("Store name is required");
            return;
        };
        spawn_local(async move {
            let result = match editing_id.get_untracked() {
                None => api::create_dept(&payload).await,
                Some(id) => api::update_dept(id, &payload).await,
            };
            if result.is_ok() {
                notify::success("Store saved");
                show_form.set(false);
                load_data();
            }
        });
    };

    let toggle_status = move |dept: &Dept| {
        let id = dept.id;
        let next = if dept.status == 1 { 0 } else { 1 };
        spawn_local(async move {
            if api::update_dept_status(id, next).await.is_ok() {
                load_data();
            }
        });
    };

    let remove = move |id: i64| {
        spawn_local(async move {
            if api::delete_dept(id).await.is_ok() {
                notify::success("Store deleted");
                load_data();
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Stores"</h1>
                    <Badge>{move || items.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || can("dept:add")>
                        <Button appearance=ButtonAppearance::Primary on_click=open_create>
                            "New"
                        </Button>
                        <ImportButton
                            endpoint="/depts/import"
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
                        <Input value=name_filter placeholder="Store name..." />
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
                            <TableHeaderCell>"Code"</TableHeaderCell>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Manager"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|dept| dept.id
                            children=move |dept| {
                                let row = dept.clone();
                                let status_row = dept.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>{dept.dept_code.clone()}</TableCell>
                                        <TableCell>{dept.dept_name.clone()}</TableCell>
                                        <TableCell>{dept.leader_name.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                        <TableCell>{status_label(dept.status)}</TableCell>
                                        <TableCell>{datetime(&dept.create_time)}</TableCell>
                                        <TableCell>
                                            <Show when=move || can("dept:edit")>
                                                {
                                                    let row = row.clone();
                                                    view! {
                                                        <Button size=ButtonSize::Small on_click=move |_| open_edit(row.clone())>
                                                            "Edit"
                                                        </Button>
                                                    }
                                                }
                                            </Show>
                                            <Show when=move || can("dept:status")>
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
                                            <Show when=move || can("dept:delete")>
                                                <Button size=ButtonSize::Small on_click=move |_| remove(dept.id)>
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
                    if editing_id.get().is_some() { "Edit store".to_string() } else { "New store".to_string() }
                })
                open=show_form
            >
                <div class="form">
                    <div class="form-group">
                        <label>"Store name"</label>
                        <Input value=f_name />
                    </div>
                    <div class="form-group">
                        <label>"Manager"</label>
                        <OptionSelect value=f_leader options=Signal::derive(move || leaders.get()) />
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
    fn saving_an_edit_keeps_a_disabled_store_disabled() {
        let payload = form_payload("Downtown store", Some(3), 0).unwrap();
        assert_eq!(payload.status, 0);
        assert_eq!(payload.leader_id, Some(3));
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(form_payload("   ", None, 1).is_none());
        let payload = form_payload("  Riverside  ", None, 1).unwrap();
        assert_eq!(payload.dept_name, "Riverside");
    }
}
