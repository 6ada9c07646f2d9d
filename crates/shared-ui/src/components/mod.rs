// Standalone components
pub mod badge;
pub mod bar_chart;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod navbar;
pub mod page_header;
pub mod pagination;
pub mod search_bar;
pub mod skeleton;
pub mod stat_card;

// Primitive wrappers
pub mod alert_dialog;
pub mod toast;

pub use alert_dialog::*;
pub use badge::*;
pub use bar_chart::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form_select::*;
pub use input::*;
pub use navbar::*;
pub use page_header::*;
pub use pagination::*;
pub use search_bar::*;
pub use skeleton::*;
pub use stat_card::*;
pub use toast::*;
