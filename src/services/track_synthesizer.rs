use crate::constants::*;
use crate::models::{Coordinates, Difficulty, Scenery, Surface, Track};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Synthesizes circular running-track candidates around a resolved start
/// coordinate. Waypoints are a closed-form geometric approximation: the
/// target distance is treated as the circumference of an idealized circle,
/// and offsets follow an alternating parity pattern that deforms the circle
/// into an irregular, non-convex loop.
pub struct TrackSynthesizer;

impl TrackSynthesizer {
    pub fn new() -> Self {
        TrackSynthesizer
    }

    /// Synthesize the full set of track options with the thread RNG.
    /// Results intentionally vary per call; there is no seeding.
    pub fn synthesize(&self, start: Coordinates, distance_km: f64) -> Vec<Track> {
        self.synthesize_with_rng(start, distance_km, &mut rand::rng())
    }

    /// Synthesize with an injected random source, for deterministic tests.
    pub fn synthesize_with_rng<R: Rng + ?Sized>(
        &self,
        start: Coordinates,
        distance_km: f64,
        rng: &mut R,
    ) -> Vec<Track> {
        let mut tracks = Vec::with_capacity(TRACK_OPTIONS_PER_REQUEST);
        for id in 1..=TRACK_OPTIONS_PER_REQUEST as u32 {
            tracks.push(self.synthesize_track(id, start, distance_km, &mut *rng));
        }
        tracks
    }

    fn synthesize_track<R: Rng + ?Sized>(
        &self,
        id: u32,
        start: Coordinates,
        distance_km: f64,
        rng: &mut R,
    ) -> Track {
        let bearing: f64 = rng.random_range(0.0..360.0);
        let num_waypoints = rng.random_range(MIN_WAYPOINTS..=MAX_WAYPOINTS);

        // Treat the requested distance as the circumference of an ideal circle
        let radius_km = distance_km / std::f64::consts::TAU;

        let lat_offset_deg = radius_km / KM_PER_DEGREE_LAT * WAYPOINT_OFFSET_DAMPING;
        // The |lat| divisor is floored so equatorial starts stay finite
        let lat_scale = start.lat.abs().max(MIN_LNG_SCALE_LAT_DEG);
        let lng_offset_deg = radius_km / (KM_PER_DEGREE_LAT * lat_scale) * WAYPOINT_OFFSET_DAMPING;

        let mut waypoints = Vec::with_capacity(num_waypoints);
        for j in 0..num_waypoints {
            let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
            let lat_step = (j % 3) as f64 - 1.0;
            let lng_step = ((j + 1) % 3) as f64 - 1.0;

            let waypoint = Coordinates::clamped(
                start.lat + lat_offset_deg * sign * lat_step,
                start.lng + lng_offset_deg * sign * lng_step,
            );
            waypoints.push(waypoint.to_string());
        }

        tracing::debug!(
            id,
            bearing = %format!("{:.0}", bearing),
            waypoints = num_waypoints,
            radius_km = %format!("{:.2}", radius_km),
            "Synthesized track {} loop: bearing {:.0}°, {} waypoints",
            id, bearing, num_waypoints
        );

        let start_str = start.to_string();
        let (google_maps_url, share_url) = build_navigation_urls(&start_str, &waypoints);

        Track {
            id,
            name: format!("Running Track {}", id),
            distance_km: (distance_km * 10.0).round() / 10.0,
            starting_point: start_str,
            waypoints,
            estimated_time_minutes: (distance_km * PACE_MINUTES_PER_KM).round() as u32,
            difficulty: Difficulty::ALL
                .choose(rng)
                .copied()
                .unwrap_or(Difficulty::Moderate),
            surface: Surface::ALL.choose(rng).copied().unwrap_or(Surface::Mixed),
            scenery: Scenery::ALL.choose(rng).copied().unwrap_or(Scenery::Mixed),
            google_maps_url,
            share_url,
        }
    }
}

impl Default for TrackSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the two shareable navigation links for a track. The multi-stop
/// directions URL embeds the closed loop start -> waypoints -> start; the
/// simplified share URL carries the waypoints as a query parameter.
fn build_navigation_urls(start: &str, waypoints: &[String]) -> (String, String) {
    let mut loop_points = Vec::with_capacity(waypoints.len() + 2);
    loop_points.push(start.to_string());
    loop_points.extend(waypoints.iter().cloned());
    loop_points.push(start.to_string());

    let google_maps_url = format!("https://www.google.com/maps/dir/{}", loop_points.join("/"));
    let share_url = format!(
        "https://maps.google.com/?saddr={}&daddr={}&waypoints={}",
        start,
        start,
        waypoints.join(";")
    );

    (google_maps_url, share_url)
}
