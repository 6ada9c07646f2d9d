//! Review moderation shared by the centre and operator dashboards.

use dioxus::prelude::*;
use shared_types::{
    AppError, DecisionDraft, LoadState, Paginated, Review, ReviewFilters, ReviewPatch, ReviewSort,
    ReviewStats, ReviewStatus, SortOrder, REVIEW_STATUSES,
};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, Button, ButtonVariant, Card,
    CardContent, DataTable, DataTableCell, DataTableRow, FormSelect, Input, PageHeader, Pagination,
    SearchBar, SkeletonRows, StatCard, StatGrid, ToastOptions,
};
use std::future::Future;

use crate::components::LoadError;
use crate::format_helpers::{format_date, rating_stars, review_status_variant};
use crate::hooks::{use_list_controller, ListSource};

struct ReviewList;

impl ListSource for ReviewList {
    type Criteria = ReviewFilters;
    type Item = Review;
    type Stats = ReviewStats;

    fn fetch(
        criteria: ReviewFilters,
    ) -> impl Future<Output = Result<Paginated<Review, ReviewStats>, ServerFnError>> {
        server::api::list_reviews(criteria)
    }
}

const SORT_OPTIONS: &[(&str, &str)] = &[
    ("createdAt:desc", "Newest first"),
    ("createdAt:asc", "Oldest first"),
    ("rating:desc", "Highest rating"),
    ("rating:asc", "Lowest rating"),
];

fn parse_sort(value: &str) -> (ReviewSort, SortOrder) {
    let (by, order) = value.split_once(':').unwrap_or((value, "desc"));
    (ReviewSort::parse(by), SortOrder::parse(order))
}

/// Filterable review list with approve / reject actions.
///
/// The backend scopes the list: centre admins only see their own centre.
#[component]
pub fn ReviewModeration(title: String, subtitle: String) -> Element {
    let handle = use_list_controller::<ReviewList>();
    let toasts = use_toast();
    let mut pending = use_signal(|| Option::<DecisionDraft>::None);

    let (criteria, page) = {
        let controller = handle.state.read();
        (controller.criteria().clone(), controller.page().clone())
    };
    let status_value = criteria.status.map(|s| s.as_str()).unwrap_or_default();
    let rating_value = criteria.rating.map(|r| r.to_string()).unwrap_or_default();
    let sort_value = format!("{}:{}", criteria.sort_by.as_str(), criteria.sort_order.as_str());

    let confirm = move |_: MouseEvent| {
        let Some(draft) = pending() else {
            return;
        };
        pending.set(None);
        let decision = draft.decision();
        let review = draft.review;
        spawn(async move {
            match server::api::decide_review(review.id.clone(), review.status, decision).await {
                Ok(updated) => {
                    toasts.success(
                        format!("Review {}", updated.status.label().to_lowercase()),
                        ToastOptions::new(),
                    );
                    handle.refresh();
                }
                Err(e) => {
                    let err = AppError::recover(&e);
                    tracing::error!(error = %err, review = %review.id, "Review decision failed");
                    toasts.error(err.user_message(), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./lists.css") }

        PageHeader { title: "{title}", subtitle: "{subtitle}" }

        if let Some(stats) = page.value().and_then(|p| p.stats.clone()) {
            StatGrid {
                StatCard { label: "Total reviews", value: stats.total_reviews.to_string() }
                StatCard { label: "Pending", value: stats.pending_reviews.to_string() }
                StatCard { label: "Approved", value: stats.approved_reviews.to_string() }
                StatCard { label: "Rejected", value: stats.rejected_reviews.to_string() }
                StatCard { label: "Average rating", value: format!("{:.1}", stats.average_rating) }
            }
        }

        SearchBar {
            Input {
                label: "Search",
                placeholder: "Comment or reviewer",
                value: criteria.search.clone(),
                on_input: move |e: FormEvent| handle.apply(ReviewPatch::Search(e.value())),
            }
            FormSelect {
                label: "Status",
                value: status_value,
                onchange: move |e: Event<FormData>| {
                    handle.apply(ReviewPatch::Status(ReviewStatus::parse(&e.value())))
                },
                option { value: "", "All statuses" }
                for status in REVIEW_STATUSES.iter() {
                    option { value: status.as_str(), "{status.label()}" }
                }
            }
            FormSelect {
                label: "Rating",
                value: rating_value,
                onchange: move |e: Event<FormData>| {
                    handle.apply(ReviewPatch::Rating(e.value().parse::<u8>().ok()))
                },
                option { value: "", "Any rating" }
                for stars in (1..=5u8).rev() {
                    option { value: "{stars}", "{stars} stars" }
                }
            }
            FormSelect {
                label: "Sort",
                value: sort_value,
                onchange: move |e: Event<FormData>| {
                    let (by, order) = parse_sort(&e.value());
                    handle.apply(ReviewPatch::Sort(by, order))
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
                        ReviewTable { reviews: page.items.clone(), pending }
                        Pagination {
                            current_page: page.pagination.current_page,
                            total_pages: page.pagination.total_pages,
                            total_items: page.pagination.total_items,
                            has_prev: page.pagination.has_prev,
                            has_next: page.pagination.has_next,
                            on_page: move |p: i64| handle.apply(ReviewPatch::Page(p)),
                        }
                    },
                }}
            }
        }

        AlertDialogRoot {
            open: pending.read().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    pending.set(None);
                }
            },
            AlertDialogContent {
                if let Some(draft) = pending() {
                    AlertDialogTitle { "{draft.next.label()} review?" }
                    AlertDialogDescription {
                        "{draft.review.author()} rated {draft.review.centre_name()} {draft.review.rating}/5. "
                        "The reviewer will see your response."
                    }
                    Input {
                        label: "Response (optional)",
                        value: draft.response.clone(),
                        on_input: move |e: FormEvent| {
                            if let Some(draft) = pending.write().as_mut() {
                                draft.response = e.value();
                            }
                        },
                    }
                    AlertDialogActions {
                        AlertDialogCancel { "Cancel" }
                        AlertDialogAction { on_click: confirm, "{draft.next.label()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewTable(
    reviews: Vec<Review>,
    pending: Signal<Option<DecisionDraft>>,
) -> Element {
    rsx! {
        DataTable {
            columns: vec!["Reviewer", "Centre", "Rating", "Comment", "Status", "Date", ""],
            empty: "No reviews match these filters.",
            is_empty: reviews.is_empty(),
            for review in reviews.iter() {
                ReviewRow { key: "{review.id}", review: review.clone(), pending }
            }
        }
    }
}

#[component]
fn ReviewRow(review: Review, mut pending: Signal<Option<DecisionDraft>>) -> Element {
    let transitions = review.status.available_transitions();

    rsx! {
        DataTableRow {
            DataTableCell { "{review.author()}" }
            DataTableCell { "{review.centre_name()}" }
            DataTableCell { span { class: "stars", "{rating_stars(review.rating)}" } }
            DataTableCell {
                p { class: "review-comment", "{review.comment}" }
                if let Some(reply) = &review.admin_response {
                    p { class: "review-reply", "Response: {reply}" }
                }
            }
            DataTableCell {
                Badge { variant: review_status_variant(review.status), "{review.status}" }
            }
            DataTableCell { "{format_date(&review.created_at)}" }
            DataTableCell {
                div { class: "row-actions",
                    for next in transitions {
                        Button {
                            variant: if next == ReviewStatus::Rejected { ButtonVariant::Destructive } else { ButtonVariant::Secondary },
                            onclick: {
                                let review = review.clone();
                                move |_| pending.set(Some(DecisionDraft::open(review.clone(), next)))
                            },
                            "{next.label()}"
                        }
                    }
                }
            }
        }
    }
}
