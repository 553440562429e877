pub mod coordinates;
pub mod track;

pub use coordinates::Coordinates;
pub use track::{Difficulty, Scenery, Surface, Track, TrackRequest, TrackResponse};
