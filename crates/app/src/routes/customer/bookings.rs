use dioxus::prelude::*;
use shared_types::LoadState;
use shared_ui::{Card, CardContent, PageHeader, SkeletonRows};

use super::overview::BookingTable;
use crate::components::LoadError;
use crate::hooks::use_load;

#[component]
pub fn CustomerBookings() -> Element {
    let bookings = use_load(server::api::list_my_bookings);

    rsx! {
        PageHeader { title: "My bookings", subtitle: "Every test you have booked, newest first." }
        Card {
            CardContent {
                match &*bookings.read() {
                    LoadState::Idle | LoadState::Loading => rsx! { SkeletonRows {} },
                    LoadState::Failed(message) => rsx! { LoadError { message: message.clone() } },
                    LoadState::Loaded(list) => rsx! { BookingTable { bookings: list.clone(), show_centre: true } },
                }
            }
        }
    }
}
