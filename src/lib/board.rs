pub mod activity_api;
pub mod activity_board;
pub mod banner;
pub mod board_view;
pub mod commands;
pub mod document;
pub mod error;
pub mod helpers;
pub mod models;
pub mod run_tool;
