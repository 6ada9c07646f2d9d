use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdDollarSign};
use dioxus_free_icons::Icon;
use shared_types::{Booking, CustomerStats, LoadState};
use shared_ui::{
    Badge, BarChart, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableCell,
    DataTableRow, PageHeader, SkeletonRows, StatCard, StatGrid,
};

use crate::auth::use_auth;
use crate::components::LoadError;
use crate::format_helpers::{
    booking_status_variant, format_currency, format_date, format_percent, trend_bars,
};
use crate::hooks::use_load;

#[component]
pub fn CustomerOverview() -> Element {
    let auth = use_auth();
    let name = auth.user().map(|u| u.name).unwrap_or_default();
    let stats = use_load(server::api::get_customer_dashboard);

    rsx! {
        PageHeader { title: "Welcome back, {name}", subtitle: "Your bookings at a glance." }
        match &*stats.read() {
            LoadState::Idle | LoadState::Loading => rsx! { SkeletonRows { rows: 6 } },
            LoadState::Failed(message) => rsx! { LoadError { message: message.clone() } },
            LoadState::Loaded(stats) => rsx! { CustomerStatsView { stats: stats.clone() } },
        }
    }
}

#[component]
fn CustomerStatsView(stats: CustomerStats) -> Element {
    let counts = &stats.counts;

    rsx! {
        StatGrid {
            StatCard {
                label: "Total bookings",
                value: counts.total_bookings.to_string(),
                icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 } },
            }
            StatCard { label: "Upcoming", value: stats.upcoming_bookings.to_string(), hint: "Pending or confirmed" }
            StatCard { label: "Completed", value: counts.completed_bookings.to_string() }
            StatCard { label: "Completion rate", value: format_percent(stats.completion_rate) }
            StatCard {
                label: "Total spent",
                value: format_currency(counts.revenue),
                icon: rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: 16, height: 16 } },
            }
        }
        Card {
            CardContent {
                BarChart { title: "Bookings per month", bars: trend_bars(&stats.booking_trend) }
            }
        }
        Card { class: "dashboard-section",
            CardHeader {
                CardTitle { "Recent bookings" }
            }
            CardContent {
                BookingTable { bookings: stats.recent_bookings.clone(), show_centre: true }
            }
        }
    }
}

/// Bookings with status badges; also used by the bookings page.
#[component]
pub fn BookingTable(bookings: Vec<Booking>, #[props(default)] show_centre: bool) -> Element {
    let columns = if show_centre {
        vec!["Test", "Centre", "Price", "Status", "Booked"]
    } else {
        vec!["Test", "Price", "Status", "Booked"]
    };

    rsx! {
        DataTable {
            columns,
            empty: "No bookings yet.",
            is_empty: bookings.is_empty(),
            for booking in bookings.iter() {
                DataTableRow { key: "{booking.id}",
                    DataTableCell { "{booking.test_name()}" }
                    if show_centre {
                        DataTableCell { "{booking.centre_name()}" }
                    }
                    DataTableCell { "{format_currency(booking.price())}" }
                    DataTableCell {
                        Badge { variant: booking_status_variant(booking.status), "{booking.status}" }
                    }
                    DataTableCell { "{format_date(&booking.created_at)}" }
                }
            }
        }
    }
}
