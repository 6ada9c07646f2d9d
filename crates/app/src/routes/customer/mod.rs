mod bookings;
mod overview;

pub use bookings::CustomerBookings;
pub use overview::CustomerOverview;
