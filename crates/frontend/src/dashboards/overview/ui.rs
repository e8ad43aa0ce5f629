use contracts::reports::{EfficiencyRow, ReportSummary, SourceStat};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::overview::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::{datetime, datetime_opt};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let summary: RwSignal<Option<ReportSummary>> = RwSignal::new(None);
    let source_stats: RwSignal<Vec<SourceStat>> = RwSignal::new(Vec::new());
    let efficiency: RwSignal<Vec<EfficiencyRow>> = RwSignal::new(Vec::new());

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(data) = api::fetch_summary().await {
                summary.set(Some(data));
            }
        });
        spawn_local(async move {
            if let Ok(data) = api::fetch_source_stats().await {
                source_stats.set(data);
            }
        });
        spawn_local(async move {
            if let Ok(data) = api::fetch_efficiency().await {
                efficiency.set(data);
            }
        });
    });

    let efficiency_rows = move || efficiency.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total leads"
                    value=Signal::derive(move || {
                        summary.get().map(|s| s.total_customer.to_string())
                    })
                />
                <StatCard
                    label="Deals closed"
                    value=Signal::derive(move || summary.get().map(|s| s.total_deal.to_string()))
                />
                <StatCard
                    label="New today"
                    value=Signal::derive(move || summary.get().map(|s| s.today_new.to_string()))
                />
                <StatCard
                    label="Conversion"
                    value=Signal::derive(move || {
                        summary.get().map(|s| format!("{:.1}%", s.conversion_rate))
                    })
                />
            </div>

            <div class="dashboard__section">
                <h2>"Conversion by source"</h2>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Source"</TableHeaderCell>
                            <TableHeaderCell>"Leads"</TableHeaderCell>
                            <TableHeaderCell>"Deals"</TableHeaderCell>
                            <TableHeaderCell>"Rate"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || source_stats.get()
                            key=|stat| stat.name.clone()
                            children=move |stat| {
                                view! {
                                    <TableRow>
                                        <TableCell>{stat.name.clone()}</TableCell>
                                        <TableCell>{stat.total.to_string()}</TableCell>
                                        <TableCell>{stat.deal_count.to_string()}</TableCell>
                                        <TableCell>{format!("{:.1}%", stat.rate)}</TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            <div class="dashboard__section">
                <h2>"Follow-up efficiency (last 50 leads)"</h2>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Customer"</TableHeaderCell>
                            <TableHeaderCell>"Owner"</TableHeaderCell>
                            <TableHeaderCell>"Entered"</TableHeaderCell>
                            <TableHeaderCell>"Assigned"</TableHeaderCell>
                            <TableHeaderCell>"First follow"</TableHeaderCell>
                            <TableHeaderCell>"Dealt"</TableHeaderCell>
                            <TableHeaderCell>"Response (h)"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=efficiency_rows
                            key=|(i, _)| *i
                            children=move |(_, row)| {
                                view! {
                                    <TableRow>
                                        <TableCell>{row.customer_name.clone()}</TableCell>
                                        <TableCell>{row.owner_name.clone()}</TableCell>
                                        <TableCell>{datetime(&row.time_enter)}</TableCell>
                                        <TableCell>{datetime(&row.time_assign)}</TableCell>
                                        <TableCell>{datetime_opt(&row.time_first_follow)}</TableCell>
                                        <TableCell>{datetime_opt(&row.time_deal)}</TableCell>
                                        <TableCell>{format!("{:.1}", row.response_hours)}</TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
