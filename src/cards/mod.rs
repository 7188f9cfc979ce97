mod card;
pub mod labels;
mod photo;

pub use card::{resolve_preview, Card, CardRenderer};
pub use photo::{Photo, PhotoState};
