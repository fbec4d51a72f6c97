//! HTTP request handlers.
//!
//! One module per resource, each exposing list, create, update and delete. Handlers
//! extract the JSON body and path id as `Result`s so extractor rejections become
//! structural validation errors instead of axum's default plain-text 4xx responses.

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod room;

#[cfg(test)]
mod test;
