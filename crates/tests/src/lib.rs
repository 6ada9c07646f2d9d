#[cfg(test)]
mod common;

#[cfg(test)]
mod dashboard_tests;

#[cfg(test)]
mod activity_log_tests;

#[cfg(test)]
mod review_tests;

#[cfg(test)]
mod backend_error_tests;

#[cfg(test)]
mod health_tests;
