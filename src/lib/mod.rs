//! Client for the activity signup service: fetches activities, renders them
//! into a [`board::document::Document`] and mediates signup and unregister.
pub mod board;
