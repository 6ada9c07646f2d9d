use dioxus::prelude::*;
use shared_types::{CentreSummary, LoadState};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, DataTable, DataTableCell, DataTableRow, PageHeader,
    SkeletonRows,
};

use crate::components::LoadError;
use crate::format_helpers::{format_currency, format_date, format_percent};
use crate::hooks::use_load;

#[component]
pub fn Centres() -> Element {
    let centres = use_load(server::api::list_centres);

    rsx! {
        PageHeader { title: "Healthcare centres", subtitle: "Registered centres and their booking activity." }
        Card {
            CardContent {
                match &*centres.read() {
                    LoadState::Idle | LoadState::Loading => rsx! { SkeletonRows {} },
                    LoadState::Failed(message) => rsx! { LoadError { message: message.clone() } },
                    LoadState::Loaded(list) => rsx! { CentreTable { centres: list.clone() } },
                }
            }
        }
    }
}

#[component]
fn CentreTable(centres: Vec<CentreSummary>) -> Element {
    rsx! {
        DataTable {
            columns: vec!["Centre", "Status", "Bookings", "Completion", "Revenue", "Joined"],
            empty: "No centres registered.",
            is_empty: centres.is_empty(),
            for summary in centres.iter() {
                DataTableRow { key: "{summary.centre.id}",
                    DataTableCell {
                        div { "{summary.centre.name}" }
                        if let Some(address) = &summary.centre.address {
                            div { class: "muted-line", "{address}" }
                        }
                    }
                    DataTableCell {
                        Badge { variant: status_variant(summary.centre.status_label()), "{summary.centre.status_label()}" }
                    }
                    DataTableCell { "{summary.counts.total_bookings}" }
                    DataTableCell { "{format_percent(summary.counts.completion_rate())}" }
                    DataTableCell { "{format_currency(summary.counts.revenue)}" }
                    DataTableCell { "{format_date(&summary.centre.created_at)}" }
                }
            }
        }
    }
}

fn status_variant(label: &str) -> BadgeVariant {
    match label.to_lowercase().as_str() {
        "active" | "approved" => BadgeVariant::Success,
        "pending" => BadgeVariant::Warning,
        "suspended" | "rejected" | "inactive" => BadgeVariant::Danger,
        _ => BadgeVariant::Neutral,
    }
}
