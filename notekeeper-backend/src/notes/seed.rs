//! Welcome notes present when the service starts

use notekeeper_types::{timestamp, Note};

const WELCOME_NOTES: [(&str, &str); 3] = [
    (
        "Welcome to NoteKeeper",
        "This is your first note! Start organizing your thoughts and ideas here. You can create, edit, and delete notes easily.",
    ),
    (
        "Docker Benefits",
        "Docker helps in:\n- Consistent environments\n- Easy deployment\n- Scalability\n- Isolation",
    ),
    (
        "Learning Goals",
        "Master containerization and microservices architecture to build production-ready applications.",
    ),
];

/// The seed notes, ids 1..=3, all stamped with the current time
pub fn welcome_notes() -> Vec<Note> {
    let now = timestamp::now();
    WELCOME_NOTES
        .iter()
        .zip(1..)
        .map(|((title, content), id)| Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        })
        .collect()
}
