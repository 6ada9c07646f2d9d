use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{
    ActivityLog, ActivityLogFilters, ActivityLogPatch, ActivityLogStats, AppError, FeatureFlags,
    LoadState, LogSort, Paginated, Severity, SortOrder, ACTIVITY_LOG_EXPORT_FILE, SEVERITIES,
};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, Button, ButtonVariant, Card,
    CardContent, DataTable, DataTableCell, DataTableRow, FormSelect, Input, PageHeader, Pagination,
    SearchBar, SkeletonRows, StatCard, StatGrid, ToastOptions,
};
use std::future::Future;

use crate::components::LoadError;
use crate::format_helpers::{format_datetime, severity_variant};
use crate::hooks::{use_list_controller, ListSource};

struct ActivityLogList;

impl ListSource for ActivityLogList {
    type Criteria = ActivityLogFilters;
    type Item = ActivityLog;
    type Stats = ActivityLogStats;

    fn fetch(
        criteria: ActivityLogFilters,
    ) -> impl Future<Output = Result<Paginated<ActivityLog, ActivityLogStats>, ServerFnError>>
    {
        server::api::list_activity_logs(criteria)
    }

    fn clear_all() -> impl Future<Output = Result<(), ServerFnError>> {
        server::api::clear_activity_logs()
    }
}

const SORT_OPTIONS: &[(&str, &str)] = &[
    ("createdAt:desc", "Newest first"),
    ("createdAt:asc", "Oldest first"),
    ("severity:desc", "Severity"),
    ("action:asc", "Action A-Z"),
];

fn parse_sort(value: &str) -> (LogSort, SortOrder) {
    let (by, order) = value.split_once(':').unwrap_or((value, "desc"));
    (LogSort::parse(by), SortOrder::parse(order))
}

/// `<input type="date">` value; blank or malformed means no bound.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Script that hands `csv` to the browser as a file download.
fn download_script(file_name: &str, csv: &str) -> String {
    let payload = serde_json::to_string(csv).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"
        (function() {{
            var blob = new Blob([{payload}], {{ type: 'text/csv;charset=utf-8' }});
            var url = URL.createObjectURL(blob);
            var link = document.createElement('a');
            link.href = url;
            link.download = '{file_name}';
            document.body.appendChild(link);
            link.click();
            link.remove();
            URL.revokeObjectURL(url);
        }})();
        "#
    )
}

#[component]
pub fn ActivityLogs() -> Element {
    let handle = use_list_controller::<ActivityLogList>();
    let flags = use_context::<FeatureFlags>();
    let toasts = use_toast();
    let mut exporting = use_signal(|| false);

    let (criteria, page, confirm_open, clearing) = {
        let controller = handle.state.read();
        (
            controller.criteria().clone(),
            controller.page().clone(),
            controller.is_confirm_open(),
            controller.is_clearing(),
        )
    };
    let severity_value = criteria.severity.map(|s| s.as_str()).unwrap_or_default();
    let sort_value = format!("{}:{}", criteria.sort_by.as_str(), criteria.sort_order.as_str());
    let (start_date, end_date) = (criteria.start_date, criteria.end_date);

    let export = move |_: MouseEvent| {
        let criteria = handle.state.read().criteria().clone();
        exporting.set(true);
        spawn(async move {
            match server::api::export_activity_logs(criteria).await {
                Ok(csv) => {
                    document::eval(&download_script(ACTIVITY_LOG_EXPORT_FILE, &csv));
                }
                Err(e) => {
                    let err = AppError::recover(&e);
                    tracing::error!(error = %err, "Activity log export failed");
                    toasts.error(err.user_message(), ToastOptions::new());
                }
            }
            exporting.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("../lists.css") }

        PageHeader {
            title: "Activity logs",
            subtitle: "Who did what on the platform, and when.",
            if flags.csv_export {
                Button {
                    variant: ButtonVariant::Outline,
                    busy: exporting(),
                    onclick: export,
                    "Export CSV"
                }
            }
            Button {
                variant: ButtonVariant::Destructive,
                busy: clearing,
                onclick: move |_| handle.open_clear_dialog(),
                "Clear all"
            }
        }

        if let Some(stats) = page.value().and_then(|p| p.stats.clone()) {
            StatGrid {
                StatCard { label: "Total entries", value: stats.total_logs.to_string() }
                StatCard { label: "Critical", value: stats.critical_logs.to_string() }
                StatCard { label: "High", value: stats.high_logs.to_string() }
                StatCard { label: "Today", value: stats.today_logs.to_string() }
            }
        }

        SearchBar {
            Input {
                label: "Search",
                placeholder: "Description or user",
                value: criteria.search.clone(),
                on_input: move |e: FormEvent| handle.apply(ActivityLogPatch::Search(e.value())),
            }
            Input {
                label: "Action",
                placeholder: "e.g. LOGIN",
                value: criteria.action.clone(),
                on_input: move |e: FormEvent| handle.apply(ActivityLogPatch::Action(e.value())),
            }
            FormSelect {
                label: "Severity",
                value: severity_value,
                onchange: move |e: Event<FormData>| {
                    handle.apply(ActivityLogPatch::Severity(Severity::parse(&e.value())))
                },
                option { value: "", "All severities" }
                for severity in SEVERITIES.iter() {
                    option { value: severity.as_str(), "{severity.label()}" }
                }
            }
            div { class: "date-range",
                Input {
                    label: "From",
                    input_type: "date",
                    value: date_value(start_date),
                    on_input: move |e: FormEvent| {
                        handle.apply(ActivityLogPatch::DateRange(parse_date(&e.value()), end_date))
                    },
                }
                Input {
                    label: "To",
                    input_type: "date",
                    value: date_value(end_date),
                    on_input: move |e: FormEvent| {
                        handle.apply(ActivityLogPatch::DateRange(start_date, parse_date(&e.value())))
                    },
                }
            }
            FormSelect {
                label: "Sort",
                value: sort_value,
                onchange: move |e: Event<FormData>| {
                    let (by, order) = parse_sort(&e.value());
                    handle.apply(ActivityLogPatch::Sort(by, order))
                },
                for (value, label) in SORT_OPTIONS.iter() {
                    option { value: *value, "{label}" }
                }
            }
            Button { variant: ButtonVariant::Ghost, onclick: move |_| handle.reset(), "Reset" }
        }

        Card {
            CardContent {
                {match &page {
                    LoadState::Idle | LoadState::Loading => rsx! { SkeletonRows {} },
                    LoadState::Failed(message) => rsx! {
                        LoadError { message: message.clone(), on_retry: move |_| handle.refresh() }
                    },
                    LoadState::Loaded(page) => rsx! {
                        LogTable { logs: page.items.clone() }
                        Pagination {
                            current_page: page.pagination.current_page,
                            total_pages: page.pagination.total_pages,
                            total_items: page.pagination.total_items,
                            has_prev: page.pagination.has_prev,
                            has_next: page.pagination.has_next,
                            on_page: move |p: i64| handle.apply(ActivityLogPatch::Page(p)),
                        }
                    },
                }}
            }
        }

        AlertDialogRoot {
            open: confirm_open,
            on_open_change: move |open: bool| {
                if !open {
                    handle.cancel_clear();
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Clear all activity logs?" }
                AlertDialogDescription {
                    "Every log entry will be deleted permanently. This cannot be undone."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction { on_click: move |_| handle.confirm_clear(), "Delete everything" }
                }
            }
        }
    }
}

#[component]
fn LogTable(logs: Vec<ActivityLog>) -> Element {
    rsx! {
        DataTable {
            columns: vec!["When", "User", "Action", "Severity", "IP"],
            empty: "No activity matches these filters.",
            is_empty: logs.is_empty(),
            for log in logs.iter() {
                DataTableRow { key: "{log.id}",
                    DataTableCell { "{format_datetime(&log.created_at)}" }
                    DataTableCell {
                        div { "{log.actor()}" }
                        if let Some(role) = &log.user_role {
                            div { class: "muted-line", "{role}" }
                        }
                    }
                    DataTableCell {
                        div { "{log.action}" }
                        if !log.description.is_empty() {
                            div { class: "muted-line", "{log.description}" }
                        }
                    }
                    DataTableCell {
                        Badge { variant: severity_variant(log.severity), "{log.severity}" }
                    }
                    DataTableCell { {log.ip_address.clone().unwrap_or_else(|| "-".to_string())} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn date_inputs_parse_iso_days_only() {
        assert_eq!(parse_date("2026-10-05"), NaiveDate::from_ymd_opt(2026, 10, 5));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("10/05/2026"), None);
    }

    #[test]
    fn empty_date_renders_blank_input() {
        assert_eq!(date_value(None), "");
        assert_eq!(date_value(NaiveDate::from_ymd_opt(2026, 1, 9)), "2026-01-09");
    }

    #[test]
    fn sort_select_defaults_to_descending() {
        assert_eq!(parse_sort("severity"), (LogSort::Severity, SortOrder::Desc));
        assert_eq!(parse_sort("action:asc"), (LogSort::Action, SortOrder::Asc));
    }

    #[test]
    fn download_script_escapes_csv_payload() {
        let script = download_script("activity_logs.csv", "action\n\"LOGIN\"");
        assert!(script.contains(r#"["action\n\"LOGIN\""]"#));
        assert!(script.contains("link.download = 'activity_logs.csv'"));
    }
}
