use dioxus::prelude::*;
use shared_types::{HcsStats, LoadState, TestUsage};
use shared_ui::{
    BarChart, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableCell, DataTableRow,
    PageHeader, SkeletonRows, StatCard, StatGrid,
};

use super::reviews::ReviewModeration;
use crate::components::LoadError;
use crate::format_helpers::{format_currency, format_percent, trend_bars};
use crate::hooks::use_load;

#[component]
pub fn HcsOverview() -> Element {
    let stats = use_load(server::api::get_hcs_dashboard);

    rsx! {
        PageHeader { title: "Centre overview", subtitle: "Bookings and revenue for your centre." }
        match &*stats.read() {
            LoadState::Idle | LoadState::Loading => rsx! { SkeletonRows { rows: 6 } },
            LoadState::Failed(message) => rsx! { LoadError { message: message.clone() } },
            LoadState::Loaded(stats) => rsx! { HcsStatsView { stats: stats.clone() } },
        }
    }
}

#[component]
fn HcsStatsView(stats: HcsStats) -> Element {
    let counts = &stats.counts;

    rsx! {
        StatGrid {
            StatCard { label: "Total bookings", value: counts.total_bookings.to_string() }
            StatCard { label: "Pending", value: counts.pending_bookings.to_string() }
            StatCard { label: "Completed", value: counts.completed_bookings.to_string() }
            StatCard { label: "Completion rate", value: format_percent(stats.completion_rate) }
            StatCard { label: "Revenue", value: format_currency(counts.revenue), hint: "Completed bookings" }
            StatCard {
                label: "Avg. per completed",
                value: format_currency(stats.average_revenue_per_completed),
            }
            StatCard { label: "Tests offered", value: stats.total_tests.to_string() }
        }
        div { class: "chart-row",
            Card {
                CardContent {
                    BarChart { title: "Bookings per month", bars: trend_bars(&stats.booking_trend) }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Most booked tests" }
                }
                CardContent {
                    TestUsageTable { tests: stats.top_tests.clone() }
                }
            }
        }
    }
}

#[component]
fn TestUsageTable(tests: Vec<TestUsage>) -> Element {
    rsx! {
        DataTable {
            columns: vec!["Test", "Price", "Bookings"],
            empty: "No tests listed yet.",
            is_empty: tests.is_empty(),
            for test in tests.iter() {
                DataTableRow { key: "{test.test_id}",
                    DataTableCell { "{test.name}" }
                    DataTableCell { "{format_currency(test.price)}" }
                    DataTableCell { "{test.bookings}" }
                }
            }
        }
    }
}

#[component]
pub fn HcsTests() -> Element {
    let tests = use_load(server::api::list_centre_tests);

    rsx! {
        PageHeader { title: "Tests", subtitle: "Tests your centre offers and how often each is booked." }
        Card {
            CardContent {
                match &*tests.read() {
                    LoadState::Idle | LoadState::Loading => rsx! { SkeletonRows {} },
                    LoadState::Failed(message) => rsx! { LoadError { message: message.clone() } },
                    LoadState::Loaded(list) => rsx! { TestUsageTable { tests: list.clone() } },
                }
            }
        }
    }
}

#[component]
pub fn HcsReviews() -> Element {
    rsx! {
        ReviewModeration {
            title: "Reviews",
            subtitle: "Approve or reject what customers wrote about your centre.",
        }
    }
}
