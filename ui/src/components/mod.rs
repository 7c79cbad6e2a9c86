pub mod app;
pub mod auth;
pub mod booking_form;
pub mod login_view;
pub mod notifications;
pub mod order_api;
pub mod schedule_page;
