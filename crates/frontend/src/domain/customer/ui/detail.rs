use contracts::domain::customer::{Customer, FollowPayload, FollowRecord, OperationLog};
use contracts::domain::order::{Order, OrderPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::ai::api as ai_api;
use crate::domain::customer::api;
use crate::domain::order::api as order_api;
use crate::shared::components::modal::Modal;
use crate::shared::components::select::OptionSelect;
use crate::shared::format::{amount, date_opt, datetime};
use crate::shared::notify;
use crate::system::auth::context::use_auth;

/// Lead detail: the customer card with its follow-up thread, recorded
/// orders and the audit log, plus the talk-track helper.
#[component]
pub fn CustomerDetail(
    customer: Customer,
    open: RwSignal<bool>,
    #[prop(into)] products: Signal<Vec<(i64, String)>>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let can = move |id: &'static str| auth.get().has_permission(id);

    let customer_id = customer.id;
    let customer_name = StoredValue::new(customer.customer_name.clone());
    let title = format!("{} · {}", customer.customer_name, customer.phone);

    let follows: RwSignal<Vec<FollowRecord>> = RwSignal::new(Vec::new());
    let orders: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
    let logs: RwSignal<Vec<OperationLog>> = RwSignal::new(Vec::new());

    let f_detail = RwSignal::new(String::new());
    let f_tag = RwSignal::new(String::new());

    let o_product: RwSignal<Option<i64>> = RwSignal::new(None);
    let o_no = RwSignal::new(String::new());
    let o_amount = RwSignal::new(String::new());

    let ai_result = RwSignal::new(String::new());
    let (ai_busy, set_ai_busy) = signal(false);

    let load_follows = move || {
        spawn_local(async move {
            if let Ok(list) = api::fetch_follows(customer_id).await {
                follows.set(list);
            }
        });
    };
    let load_orders = move || {
        spawn_local(async move {
            if let Ok(list) = order_api::fetch_orders(customer_id).await {
                orders.set(list);
            }
        });
    };
    let load_logs = move || {
        spawn_local(async move {
            if let Ok(list) = api::fetch_logs(customer_id).await {
                logs.set(list);
            }
        });
    };

    Effect::new(move |_| {
        load_follows();
        load_orders();
        load_logs();
    });

    let submit_follow = move |_| {
        let follow_detail = f_detail.get_untracked().trim().to_string();
        if follow_detail.is_empty() {
            notify::error("Write the follow-up note first");
            return;
        }
        let payload = FollowPayload {
            customer_id,
            follow_detail,
            follow_tag: Some(f_tag.get_untracked()).filter(|t| !t.trim().is_empty()),
            next_follow_time: None,
        };
        spawn_local(async move {
            if api::create_follow(&payload).await.is_ok() {
                notify::success("Follow-up recorded");
                f_detail.set(String::new());
                f_tag.set(String::new());
                load_follows();
                on_changed.run(());
            }
        });
    };

    let submit_order = move |_| {
        let Some(product_id) = o_product.get_untracked() else {
            notify::error("Pick a product first");
            return;
        };
        let order_no = o_no.get_untracked().trim().to_string();
        if order_no.is_empty() {
            notify::error("An order number is required");
            return;
        }
        let Ok(order_amount) = o_amount.get_untracked().trim().parse::<f64>() else {
            notify::error("The amount must be a number");
            return;
        };
        let payload = OrderPayload {
            customer_id,
            product_id,
            order_no,
            amount: order_amount,
            ..Default::default()
        };
        spawn_local(async move {
            if order_api::create_order(&payload).await.is_ok() {
                notify::success("Order recorded");
                o_product.set(None);
                o_no.set(String::new());
                o_amount.set(String::new());
                load_orders();
                on_changed.run(());
            }
        });
    };

    let remove_order = move |id: i64| {
        spawn_local(async move {
            if order_api::delete_order(id).await.is_ok() {
                notify::success("Order removed");
                load_orders();
                on_changed.run(());
            }
        });
    };

    let suggest_talk_track = move |_| {
        let latest = follows
            .get_untracked()
            .first()
            .map(|f| f.follow_detail.clone())
            .unwrap_or_default();
        let prompt = format!(
            "Customer {}: latest follow-up note: {}. Suggest the next talk track for a \
             furniture sales call, in three short bullet points.",
            customer_name.get_value(),
            latest
        );
        set_ai_busy.set(true);
        spawn_local(async move {
            if let Ok(response) = ai_api::generate(prompt).await {
                ai_result.set(response.result);
            }
            set_ai_busy.set(false);
        });
    };

    view! {
        <Modal title=Signal::derive(move || title.clone()) open=open>
            <div class="detail">
                <div class="detail__card">
                    <p>
                        {format!(
                            "Source: {} | Store: {} | Owner: {}",
                            customer.source.clone().unwrap_or_else(|| "-".into()),
                            customer.dept_name.clone().unwrap_or_else(|| "-".into()),
                            customer.owner_name.clone().unwrap_or_else(|| "-".into()),
                        )}
                    </p>
                    <p>
                        {format!(
                            "Community: {} | Intent: {} | Created: {}",
                            customer.community.clone().unwrap_or_else(|| "-".into()),
                            customer.intent_product_name.clone().unwrap_or_else(|| "-".into()),
                            datetime(&customer.create_time),
                        )}
                    </p>
                </div>

                <Show when=move || can("customer:follow")>
                    <div class="detail__section">
                        <h3>"New follow-up"</h3>
                        <div class="form-group">
                            <Input value=f_detail placeholder="What was discussed..." />
                        </div>
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="max-width: 180px;">
                                <Input value=f_tag placeholder="Tag (optional)" />
                            </div>
                            <Button appearance=ButtonAppearance::Primary on_click=submit_follow>
                                "Record"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=suggest_talk_track
                                disabled=Signal::derive(move || ai_busy.get())
                            >
                                {move || if ai_busy.get() { "Thinking..." } else { "Suggest talk track" }}
                            </Button>
                        </Flex>
                        <Show when=move || !ai_result.get().is_empty()>
                            <pre class="detail__ai-result">{move || ai_result.get()}</pre>
                        </Show>
                    </div>
                </Show>

                <div class="detail__section">
                    <h3>"Follow-ups"</h3>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"When"</TableHeaderCell>
                                <TableHeaderCell>"By"</TableHeaderCell>
                                <TableHeaderCell>"Tag"</TableHeaderCell>
                                <TableHeaderCell>"Note"</TableHeaderCell>
                                <TableHeaderCell>"Next"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || follows.get()
                                key=|record| record.id
                                children=move |record| {
                                    view! {
                                        <TableRow>
                                            <TableCell>{datetime(&record.create_time)}</TableCell>
                                            <TableCell>{record.follower_name.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                            <TableCell>{record.follow_tag.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                            <TableCell>{record.follow_detail.clone()}</TableCell>
                                            <TableCell>{date_opt(&record.next_follow_time)}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <div class="detail__section">
                    <h3>"Orders"</h3>
                    <Show when=move || can("customer:order")>
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <OptionSelect value=o_product options=products none_label="Product" />
                            <div style="max-width: 180px;">
                                <Input value=o_no placeholder="Order no." />
                            </div>
                            <div style="max-width: 120px;">
                                <Input value=o_amount placeholder="Amount" />
                            </div>
                            <Button appearance=ButtonAppearance::Primary on_click=submit_order>
                                "Record order"
                            </Button>
                        </Flex>
                    </Show>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Order no."</TableHeaderCell>
                                <TableHeaderCell>"Product"</TableHeaderCell>
                                <TableHeaderCell>"Amount"</TableHeaderCell>
                                <TableHeaderCell>"By"</TableHeaderCell>
                                <TableHeaderCell>"When"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || orders.get()
                                key=|order| order.id
                                children=move |order| {
                                    view! {
                                        <TableRow>
                                            <TableCell>{order.order_no.clone()}</TableCell>
                                            <TableCell>{order.product_name.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                            <TableCell>{amount(order.amount)}</TableCell>
                                            <TableCell>{order.maker_name.clone().unwrap_or_else(|| "-".into())}</TableCell>
                                            <TableCell>{datetime(&order.create_time)}</TableCell>
                                            <TableCell>
                                                <Show when=move || can("customer:order")>
                                                    <Button size=ButtonSize::Small on_click=move |_| remove_order(order.id)>
                                                        "Remove"
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

                <div class="detail__section">
                    <h3>"Activity log"</h3>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"When"</TableHeaderCell>
                                <TableHeaderCell>"Operator"</TableHeaderCell>
                                <TableHeaderCell>"Action"</TableHeaderCell>
                                <TableHeaderCell>"Detail"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || logs.get()
                                key=|log| log.id
                                children=move |log| {
                                    view! {
                                        <TableRow>
                                            <TableCell>{datetime(&log.create_time)}</TableCell>
                                            <TableCell>{log.operator_name.clone()}</TableCell>
                                            <TableCell>{log.action_type.clone()}</TableCell>
                                            <TableCell>{log.content.clone()}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </Modal>
    }
}
