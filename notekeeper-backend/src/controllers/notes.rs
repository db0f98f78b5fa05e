//! Notes REST API — CRUD endpoints over the shared note store.
//!
//! Handlers only parse the request and map store results to responses;
//! trimming and presence checks happen in the store.

use actix_web::{
    dev::Payload, error::InternalError, web, FromRequest, HttpMessage, HttpRequest, HttpResponse,
    Responder, ResponseError,
};
use futures_util::future::{FutureExt, LocalBoxFuture};
use notekeeper_types::{DeleteNoteResponse, ErrorResponse, NoteId, NoteInput};

use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::get().to(get_note))
            .route("/{id}", web::put().to(update_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}

/// Request body for create/update.
///
/// A body that is empty or not declared as JSON is read as `{}`, so it fails
/// the presence checks instead of the parser. Malformed JSON gets the same
/// `{error}` shape as every other failure.
struct NoteBody(NoteInput);

fn is_json(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(mime)) => {
            mime.subtype().as_str() == "json"
                || mime.suffix().map(|s| s.as_str()) == Some("json")
        }
        _ => false,
    }
}

impl FromRequest for NoteBody {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = is_json(req);
        let bytes = web::Bytes::from_request(req, payload);

        async move {
            let bytes = bytes.await?;
            if !json || bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(NoteBody(NoteInput::default()));
            }

            serde_json::from_slice(&bytes).map(NoteBody).map_err(|err| {
                let resp = HttpResponse::BadRequest()
                    .json(ErrorResponse::new(format!("Invalid JSON body: {}", err)));
                actix_web::Error::from(InternalError::from_response(err, resp))
            })
        }
        .boxed_local()
    }
}

/// Ids that are not integers cannot name a note
fn parse_id(raw: &str) -> Result<NoteId, HttpResponse> {
    raw.parse()
        .map_err(|_| HttpResponse::NotFound().json(ErrorResponse::new("Note not found")))
}

async fn list_notes(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.store.list())
}

async fn get_note(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.store.get(id) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => e.error_response(),
    }
}

async fn create_note(state: web::Data<AppState>, NoteBody(input): NoteBody) -> impl Responder {
    match state.store.create(input) {
        Ok(note) => HttpResponse::Created().json(note),
        Err(e) => {
            log::debug!("Rejected note creation: {}", e);
            e.error_response()
        }
    }
}

async fn update_note(
    state: web::Data<AppState>,
    path: web::Path<String>,
    NoteBody(input): NoteBody,
) -> impl Responder {
    let id = match parse_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.store.update(id, input) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => {
            log::debug!("Rejected update of note {}: {}", id, e);
            e.error_response()
        }
    }
}

async fn delete_note(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.store.delete(id) {
        Ok(id) => HttpResponse::Ok().json(DeleteNoteResponse::deleted(id)),
        Err(e) => e.error_response(),
    }
}
