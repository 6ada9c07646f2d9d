mod activity_logs;
mod centres;
mod overview;

use dioxus::prelude::*;

use super::reviews::ReviewModeration;

pub use activity_logs::ActivityLogs;
pub use centres::Centres;
pub use overview::SuperadminOverview;

#[component]
pub fn SuperadminReviews() -> Element {
    rsx! {
        ReviewModeration {
            title: "Reviews",
            subtitle: "Moderate reviews across every centre.",
        }
    }
}
