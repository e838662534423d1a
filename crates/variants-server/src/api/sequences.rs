//! Sequence routes
//!
//! Placeholders for a future sequence collection; nothing is stored.

use rocket::serde::json::Json;
use rocket::{delete, get, patch, post, put, routes, Route};

use super::models::SequenceAck;

/// Routes mounted under `/sequences`
pub fn routes() -> Vec<Route> {
    routes![
        list_sequences,
        get_sequence,
        create_sequence,
        replace_sequence,
        patch_sequence,
        delete_sequence
    ]
}

#[get("/")]
pub fn list_sequences() -> &'static str {
    "Got all sequences"
}

#[get("/<id>")]
pub fn get_sequence(id: &str) -> String {
    format!("Got the sequence with the id: {id}")
}

#[post("/<_id>")]
pub fn create_sequence(_id: &str) -> Json<SequenceAck> {
    Json(SequenceAck::for_method("post"))
}

#[put("/<_id>")]
pub fn replace_sequence(_id: &str) -> Json<SequenceAck> {
    Json(SequenceAck::for_method("put"))
}

#[patch("/<_id>")]
pub fn patch_sequence(_id: &str) -> Json<SequenceAck> {
    Json(SequenceAck::for_method("patch"))
}

#[delete("/<_id>")]
pub fn delete_sequence(_id: &str) -> Json<SequenceAck> {
    Json(SequenceAck::for_method("delete"))
}
