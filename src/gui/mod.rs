pub mod app;
pub mod auth_panel;
pub mod dashboard;
pub mod error_modal;
pub mod expandable;
pub mod message_overlay;
pub mod question_card;
pub mod theme;
pub mod toast;
pub mod top_bar;
