mod info;
mod login;

pub use info::{About, Contact, Home, Services};
pub use login::{AdminLogin, CustomerLogin, SuperadminLogin};
