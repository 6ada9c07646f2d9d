use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdDollarSign, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{LoadState, SuperadminStats};
use shared_ui::{BarChart, Card, CardContent, PageHeader, SkeletonRows, StatCard, StatGrid};

use crate::components::LoadError;
use crate::format_helpers::{format_currency, format_percent, trend_bars};
use crate::hooks::use_load;

#[component]
pub fn SuperadminOverview() -> Element {
    let stats = use_load(server::api::get_superadmin_dashboard);

    rsx! {
        PageHeader { title: "Platform overview", subtitle: "Users, centres and bookings across CareBook." }
        match &*stats.read() {
            LoadState::Idle | LoadState::Loading => rsx! { SkeletonRows { rows: 8 } },
            LoadState::Failed(message) => rsx! { LoadError { message: message.clone() } },
            LoadState::Loaded(stats) => rsx! { PlatformStats { stats: stats.clone() } },
        }
    }
}

#[component]
fn PlatformStats(stats: SuperadminStats) -> Element {
    let counts = &stats.counts;

    rsx! {
        StatGrid {
            StatCard {
                label: "Users",
                value: stats.total_users.to_string(),
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 } },
                hint: format!("{} customers, {} centre admins", stats.customers, stats.hcs_admins),
            }
            StatCard { label: "Centres", value: stats.total_centers.to_string() }
            StatCard { label: "Tests", value: stats.total_tests.to_string() }
            StatCard {
                label: "Bookings",
                value: counts.total_bookings.to_string(),
                icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 } },
            }
            StatCard { label: "Completion rate", value: format_percent(stats.completion_rate) }
            StatCard {
                label: "Revenue",
                value: format_currency(counts.revenue),
                icon: rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: 16, height: 16 } },
            }
            StatCard {
                label: "Avg. per completed",
                value: format_currency(stats.average_revenue_per_completed),
            }
        }
        div { class: "chart-row",
            Card {
                CardContent {
                    BarChart { title: "Bookings per month", bars: trend_bars(&stats.booking_trend) }
                }
            }
            Card {
                CardContent {
                    BarChart { title: "New users per month", bars: trend_bars(&stats.user_trend) }
                }
            }
        }
    }
}
