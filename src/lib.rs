pub mod catalog;
pub mod http_client;
pub mod provider;
pub mod report_view;
pub mod scouting_fetch;
pub mod state;
