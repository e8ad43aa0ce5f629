use std::collections::HashSet;

use contracts::domain::role::{Role, RoleListQuery, RolePayload};
use contracts::system::permissions::{self, PermissionNode, PERMISSION_TREE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::role::api;
use crate::shared::components::modal::Modal;
use crate::shared::format::{datetime, status_label};
use crate::shared::notify;
use crate::system::auth::context::use_auth;

/// Validates and assembles the edit form. Ids not present in the
/// permission tree (left over from an older tree revision) are dropped;
/// `status` carries the record's current status so saving an edit never
/// re-enables a disabled role.
fn form_payload(name: &str, selected: &HashSet<String>, status: i32) -> Option<RolePayload> {
    let role_name = name.trim().to_string();
    if role_name.is_empty() {
        return None;
    }
    let mut permissions: Vec<String> = selected
        .iter()
        .filter(|id| permissions::find(id.as_str()).is_some())
        .cloned()
        .collect();
    permissions.sort();
    Some(RolePayload {
        role_name,
        permissions,
        status,
    })
}

fn node_view(node: &'static PermissionNode, selected: RwSignal<HashSet<String>>) -> AnyView {
    let id = node.id;
    let toggle = move |_| {
        selected.update(|set| {
            if !set.remove(id) {
                set.insert(id.to_string());
            }
        });
    };

    view! {
        <div class="permission-node">
            <label class="permission-node__label">
                <input
                    type="checkbox"
                    prop:checked=move || selected.get().contains(id)
                    on:change=toggle
                />
                {node.label}
            </label>
            <div class="permission-node__children">
                {node
                    .children
                    .iter()
                    .map(|child| node_view(child, selected))
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

/// Checkbox editor over the static permission tree.
#[component]
fn PermissionTreeEditor(selected: RwSignal<HashSet<String>>) -> impl IntoView {
    let select_all = move |_| {
        selected.set(
            permissions::flatten_ids()
                .into_iter()
                .map(str::to_string)
                .collect(),
        );
    };
    let clear = move |_| selected.set(HashSet::new());

    view! {
        <div class="permission-tree">
            <Flex gap=FlexGap::Small>
                <Button size=ButtonSize::Small on_click=select_all>
                    "Select all"
                </Button>
                <Button size=ButtonSize::Small on_click=clear>
                    "Clear"
                </Button>
            </Flex>
            {PERMISSION_TREE
                .iter()
                .map(|node| node_view(node, selected))
                .collect_view()}
        </div>
    }
}

#[component]
pub fn RolePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let can = move |id: &'static str| auth.get().has_permission(id);

    let items: RwSignal<Vec<Role>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);

    let show_form = RwSignal::new(false);
    let editing_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let f_name = RwSignal::new(String::new());
    let f_permissions: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let f_status = RwSignal::new(1);

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            if let Ok(roles) = api::fetch_roles(&RoleListQuery::default()).await {
                items.set(roles);
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let open_create = move |_| {
        editing_id.set(None);
        f_name.set(String::new());
        f_permissions.set(HashSet::new());
        f_status.set(1);
        show_form.set(true);
    };

    let open_edit = move |role: Role| {
        editing_id.set(Some(role.id));
        f_name.set(role.role_name);
        f_permissions.set(role.permissions.into_iter().collect());
        f_status.set(role.status);
        show_form.set(true);
    };

    let submit_form = move |_| {
        let Some(payload) = form_payload(
            &f_name.get_untracked(),
            &f_permissions.get_untracked(),
            f_status.get_untracked(),
        ) else {
            notify::error("Role name is required");
            return;
        };
        spawn_local(async move {
            let result = match editing_id.get_untracked() {
                None => api::create_role(&payload).await,
                Some(id) => api::update_role(id, &payload).await,
            };
            if result.is_ok() {
                notify::success("Role saved");
                show_form.set(false);
                load_data();
            }
        });
    };

    let toggle_status = move |role: &Role| {
        let id = role.id;
        let next = if role.status == 1 { 0 } else { 1 };
        spawn_local(async move {
            if api::update_role_status(id, next).await.is_ok() {
                load_data();
            }
        });
    };

    let remove = move |id: i64| {
        spawn_local(async move {
            if api::delete_role(id).await.is_ok() {
                notify::success("Role deleted");
                load_data();
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Roles"</h1>
                    <Badge>{move || items.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || can("role:add")>
                        <Button appearance=ButtonAppearance::Primary on_click=open_create>
                            "New"
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

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Code"</TableHeaderCell>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Permissions"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|role| role.id
                            children=move |role| {
                                let row = role.clone();
                                let status_row = role.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>{role.role_code.clone()}</TableCell>
                                        <TableCell>{role.role_name.clone()}</TableCell>
                                        <TableCell>{role.permissions.len().to_string()}</TableCell>
                                        <TableCell>{status_label(role.status)}</TableCell>
                                        <TableCell>{datetime(&role.create_time)}</TableCell>
                                        <TableCell>
                                            <Show when=move || can("role:edit")>
                                                {
                                                    let row = row.clone();
                                                    view! {
                                                        <Button size=ButtonSize::Small on_click=move |_| open_edit(row.clone())>
                                                            "Edit"
                                                        </Button>
                                                    }
                                                }
                                            </Show>
                                            <Show when=move || can("role:edit")>
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
                                            <Show when=move || can("role:delete")>
                                                <Button size=ButtonSize::Small on_click=move |_| remove(role.id)>
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
                    if editing_id.get().is_some() { "Edit role".to_string() } else { "New role".to_string() }
                })
                open=show_form
            >
                <div class="form">
                    <div class="form-group">
                        <label>"Role name"</label>
                        <Input value=f_name />
                    </div>
                    <div class="form-group">
                        <label>"Permissions"</label>
                        <PermissionTreeEditor selected=f_permissions />
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

    fn selection(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn saving_an_edit_keeps_a_disabled_role_disabled() {
        let payload =
            form_payload("Sales", &selection(&["customer:list", "customer:follow"]), 0).unwrap();
        assert_eq!(payload.status, 0);
        assert_eq!(payload.permissions, ["customer:follow", "customer:list"]);
    }

    #[test]
    fn ids_unknown_to_the_tree_are_dropped() {
        let payload = form_payload(
            "Sales",
            &selection(&["customer:list", "legacy:export"]),
            1,
        )
        .unwrap();
        assert_eq!(payload.permissions, ["customer:list"]);
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(form_payload("  ", &selection(&["customer:list"]), 1).is_none());
    }
}
