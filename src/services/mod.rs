pub mod geocoding;
pub mod track_service;
pub mod track_synthesizer;
