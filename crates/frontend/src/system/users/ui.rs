use contracts::system::users::{User, UserCreate, UserListQuery, UserUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::{dept, role};
use crate::shared::components::modal::Modal;
use crate::shared::components::select::OptionSelect;
use crate::shared::format::{datetime, status_label};
use crate::shared::notify;
use crate::system::auth::context::use_auth;
use crate::system::users::api;

/// Assembles the update body. `status` carries the record's current
/// status; editing a disabled account must not re-enable it.
fn build_update(
    username: &str,
    password: Option<String>,
    phone: Option<String>,
    post: Option<String>,
    role_id: Option<i64>,
    dept_id: Option<i64>,
    status: i32,
) -> Option<UserUpdate> {
    let username = username.trim().to_string();
    if username.is_empty() {
        return None;
    }
    Some(UserUpdate {
        username,
        password,
        phone,
        role_id,
        dept_id,
        post,
        status,
    })
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let can = move |id: &'static str| auth.get().has_permission(id);

    let items: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let username_filter = RwSignal::new(String::new());

    let depts: RwSignal<Vec<(i64, String)>> = RwSignal::new(Vec::new());
    let roles: RwSignal<Vec<(i64, String)>> = RwSignal::new(Vec::new());

    let show_form = RwSignal::new(false);
    let editing_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let f_username = RwSignal::new(String::new());
    let f_password = RwSignal::new(String::new());
    let f_phone = RwSignal::new(String::new());
    let f_post = RwSignal::new(String::new());
    let f_dept: RwSignal<Option<i64>> = RwSignal::new(None);
    let f_role: RwSignal<Option<i64>> = RwSignal::new(None);
    let f_status = RwSignal::new(1);

    let show_reset = RwSignal::new(false);
    let reset_target: RwSignal<Option<i64>> = RwSignal::new(None);
    let f_new_password = RwSignal::new(String::new());

    let load_data = move || {
        let query = UserListQuery {
            username: Some(username_filter.get_untracked())
                .filter(|name| !name.trim().is_empty()),
            ..Default::default()
        };
        set_loading.set(true);
        spawn_local(async move {
            if let Ok(users) = api::fetch_users(&query).await {
                items.set(users);
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_data();
        spawn_local(async move {
            if let Ok(list) = dept::api::fetch_depts(&Default::default()).await {
                depts.set(list.into_iter().map(|d| (d.id, d.dept_name)).collect());
            }
            if let Ok(list) = role::api::fetch_roles(&Default::default()).await {
                roles.set(list.into_iter().map(|r| (r.id, r.role_name)).collect());
            }
        });
    });

    let open_create = move |_| {
        editing_id.set(None);
        f_username.set(String::new());
        f_password.set(String::new());
        f_phone.set(String::new());
        f_post.set(String::new());
        f_dept.set(None);
        f_role.set(None);
        f_status.set(1);
        show_form.set(true);
    };

    let open_edit = move |user: User| {
        editing_id.set(Some(user.id));
        f_username.set(user.username);
        f_password.set(String::new());
        f_phone.set(user.phone.unwrap_or_default());
        f_post.set(user.post.unwrap_or_default());
        f_dept.set(user.dept_id);
        f_role.set(user.role_id);
        f_status.set(user.status);
        show_form.set(true);
    };

    let submit_form = move |_| {
        let username = f_username.get_untracked().trim().to_string();
        if username.is_empty() {
            notify::error("Username is required");
            return;
        }
        let phone = Some(f_phone.get_untracked()).filter(|p| !p.trim().is_empty());
        let post = Some(f_post.get_untracked()).filter(|p| !p.trim().is_empty());
        let password = Some(f_password.get_untracked()).filter(|p| !p.is_empty());

        spawn_local(async move {
            let result = match editing_id.get_untracked() {
                None => {
                    let Some(password) = password else {
                        notify::error("Password is required for a new user");
                        return;
                    };
                    api::create_user(&UserCreate {
                        username,
                        password,
                        phone,
                        role_id: f_role.get_untracked(),
                        dept_id: f_dept.get_untracked(),
                        post,
                        status: 1,
                    })
                    .await
                    .map(|_| ())
                }
                Some(id) => {
                    let Some(update) = build_update(
                        &username,
                        password,
                        phone,
                        post,
                        f_role.get_untracked(),
                        f_dept.get_untracked(),
                        f_status.get_untracked(),
                    ) else {
                        return;
                    };
                    api::update_user(id, &update).await.map(|_| ())
                }
            };
            if result.is_ok() {
                notify::success("User saved");
                show_form.set(false);
                load_data();
            }
        });
    };

    let toggle_status = move |user: &User| {
        let id = user.id;
        let next = if user.status == 1 { 0 } else { 1 };
        spawn_local(async move {
            if api::update_user_status(id, next).await.is_ok() {
                load_data();
            }
        });
    };

    let remove = move |id: i64| {
        spawn_local(async move {
            if api::delete_user(id).await.is_ok() {
                notify::success("User deleted");
                load_data();
            }
        });
    };

    let submit_reset = move |_| {
        let Some(id) = reset_target.get_untracked() else {
            return;
        };
        let new_password = f_new_password.get_untracked();
        if new_password.len() < 6 {
            notify::error("Password must be at least 6 characters");
            return;
        }
        spawn_local(async move {
            if api::reset_password(id, new_password).await.is_ok() {
                notify::success("Password reset");
                show_reset.set(false);
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>{move || items.get().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || can("user:add")>
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

            <div class="filter-panel">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="max-width: 280px;">
                        <Input value=username_filter placeholder="Username..." />
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
                            <TableHeaderCell>"Username"</TableHeaderCell>
                            <TableHeaderCell>"Phone"</TableHeaderCell>
                            <TableHeaderCell>"Store"</TableHeaderCell>
                            <TableHeaderCell>"Role"</TableHeaderCell>
                            <TableHeaderCell>"Post"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|user| user.id
                            children=move |user| {
                                let row = user.clone();
                                let status_row = user.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>{user.username.clone()}</TableCell>
                                        <TableCell>{user.phone.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                        <TableCell>{user.dept_name.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                        <TableCell>{user.role_name.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                        <TableCell>{user.post.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                        <TableCell>{status_label(user.status)}</TableCell>
                                        <TableCell>{datetime(&user.create_time)}</TableCell>
                                        <TableCell>
                                            <Show when=move || can("user:edit")>
                                                {
                                                    let row = row.clone();
                                                    view! {
                                                        <Button
                                                            size=ButtonSize::Small
                                                            on_click=move |_| open_edit(row.clone())
                                                        >
                                                            "Edit"
                                                        </Button>
                                                    }
                                                }
                                            </Show>
                                            <Show when=move || can("user:status")>
                                                {
                                                    let status_row = status_row.clone();
                                                    let label = if status_row.status == 1 { "Disable" } else { "Enable" };
                                                    view! {
                                                        <Button
                                                            size=ButtonSize::Small
                                                            on_click=move |_| toggle_status(&status_row)
                                                        >
                                                            {label}
                                                        </Button>
                                                    }
                                                }
                                            </Show>
                                            <Show when=move || can("user:edit")>
                                                <Button
                                                    size=ButtonSize::Small
                                                    on_click=move |_| {
                                                        reset_target.set(Some(user.id));
                                                        f_new_password.set(String::new());
                                                        show_reset.set(true);
                                                    }
                                                >
                                                    "Reset password"
                                                </Button>
                                            </Show>
                                            <Show when=move || can("user:delete")>
                                                <Button
                                                    size=ButtonSize::Small
                                                    on_click=move |_| remove(user.id)
                                                >
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
                    if editing_id.get().is_some() { "Edit user".to_string() } else { "New user".to_string() }
                })
                open=show_form
            >
                <div class="form">
                    <div class="form-group">
                        <label>"Username"</label>
                        <Input value=f_username />
                    </div>
                    <div class="form-group">
                        <label>
                            {move || if editing_id.get().is_some() {
                                "Password (leave empty to keep)"
                            } else {
                                "Password"
                            }}
                        </label>
                        <Input value=f_password input_type=InputType::Password />
                    </div>
                    <div class="form-group">
                        <label>"Phone"</label>
                        <Input value=f_phone />
                    </div>
                    <div class="form-group">
                        <label>"Post"</label>
                        <Input value=f_post />
                    </div>
                    <div class="form-group">
                        <label>"Store"</label>
                        <OptionSelect value=f_dept options=Signal::derive(move || depts.get()) />
                    </div>
                    <div class="form-group">
                        <label>"Role"</label>
                        <OptionSelect value=f_role options=Signal::derive(move || roles.get()) />
                    </div>
                    <Flex gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Primary on_click=submit_form>
                            "Save"
                        </Button>
                        <Button on_click=move |_| show_form.set(false)>"Cancel"</Button>
                    </Flex>
                </div>
            </Modal>

            <Modal title=Signal::derive(|| "Reset password".to_string()) open=show_reset>
                <div class="form">
                    <div class="form-group">
                        <label>"New password"</label>
                        <Input value=f_new_password input_type=InputType::Password />
                    </div>
                    <Flex gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Primary on_click=submit_reset>
                            "Reset"
                        </Button>
                        <Button on_click=move |_| show_reset.set(false)>"Cancel"</Button>
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
    fn saving_an_edit_keeps_a_disabled_account_disabled() {
        let update = build_update("sales01", None, None, None, Some(2), Some(1), 0).unwrap();
        assert_eq!(update.status, 0);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["status"], 0);
        assert!(json.get("password").is_none());
    }

    #[test]
    fn blank_usernames_are_rejected() {
        assert!(build_update("   ", None, None, None, None, None, 1).is_none());
    }
}
