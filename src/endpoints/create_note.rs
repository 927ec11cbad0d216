use axum_envelope::HttpExchange;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Default, Deserialize)]
pub struct CreateNoteBody {
    title: String,
    #[serde(default)]
    body: String,
}

#[derive(Serialize)]
pub struct Note {
    id: Uuid,
    title: String,
    body: String,
}

pub async fn create_note(mut exchange: HttpExchange) -> HttpExchange {
    let mut responder = exchange.responder();
    let mut note = CreateNoteBody::default();

    if !responder.should_bind(&mut note, Some("Expected a JSON object with a title")) {
        return exchange;
    }

    if note.title.trim().is_empty() {
        responder.unprocessable_entity(Some("Title must not be empty"));
        return exchange;
    }

    let note = Note {
        id: Uuid::new_v4(),
        title: note.title,
        body: note.body,
    };

    tracing::info!(note_id = %note.id, "note created");
    responder.created(note, None);

    exchange
}
