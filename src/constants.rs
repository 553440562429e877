//! Stable application-wide constants.
//!
//! Values here are structural invariants, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Track synthesis structural parameters ---

/// Number of alternative track options synthesized per request.
pub const TRACK_OPTIONS_PER_REQUEST: usize = 3;
/// Minimum waypoints per synthesized track loop.
pub const MIN_WAYPOINTS: usize = 4;
/// Maximum waypoints per synthesized track loop.
pub const MAX_WAYPOINTS: usize = 6;

// --- Geometric approximation coefficients ---

/// Kilometers per degree of latitude, used for the km-to-degrees conversion.
pub const KM_PER_DEGREE_LAT: f64 = 111.32;
/// Damping applied to waypoint offsets so loops stay compact around the start.
pub const WAYPOINT_OFFSET_DAMPING: f64 = 0.5;
/// Floor on the |latitude| divisor in the longitude scale factor.
/// Keeps the offset finite for starting points on or near the equator.
pub const MIN_LNG_SCALE_LAT_DEG: f64 = 1.0;

// --- Request defaults and pacing ---

/// Track distance (km) assumed when the request omits one.
pub const DEFAULT_DISTANCE_KM: f64 = 5.0;
/// Assumed running pace for the duration estimate.
pub const PACE_MINUTES_PER_KM: f64 = 6.0;
