use crate::{table::Table, timestamp::format_timestamp, vehicles::VehicleRecord};
use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use uuid::Uuid;

/// Center of the area vehicles start in (Bandung).
pub const REFERENCE_LATITUDE: f64 = -6.9175;
pub const REFERENCE_LONGITUDE: f64 = 107.6191;

/// Maximum distance, in degrees per axis, of a starting point from the reference.
pub const START_OFFSET: f64 = 0.1;
/// Maximum movement, in degrees per axis, between two samples.
pub const WALK_STEP: f64 = 0.0005;

const HISTORY_HOURS: i64 = 24;

/// One position/status reading of a vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySample {
    pub latitude: f64,
    pub longitude: f64,
    pub speed: u8,
    pub rpm: Option<u32>,
    pub fuel_level: Option<f64>,
    pub ignition_status: Option<bool>,
    pub battery_level: f64,
    pub satellites_used: u8,
    pub timestamp: NaiveDateTime,
    /// Owning vehicle's `gps_id`, not its `vehicle_id`.
    pub gps_id: Uuid,
    pub distance_from_last: Option<f64>,
}

fn optional<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl Table for TelemetrySample {
    const HEADER: &'static [&'static str] = &[
        "latitude",
        "longitude",
        "speed",
        "rpm",
        "fuel_level",
        "ignition_status",
        "battery_level",
        "satellites_used",
        "timestamp",
        "gps_id",
        "distance_from_last",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            format!("{:.5}", self.latitude),
            format!("{:.5}", self.longitude),
            self.speed.to_string(),
            optional(&self.rpm),
            optional(&self.fuel_level),
            optional(&self.ignition_status),
            format!("{:.1}", self.battery_level),
            self.satellites_used.to_string(),
            format_timestamp(self.timestamp),
            self.gps_id.to_string(),
            optional(&self.distance_from_last),
        ]
    }
}

/// Simulates `samples` readings for the vehicle identified by `gps_id`.
///
/// The position random-walks from a point near the reference coordinate and
/// the clock starts 24 hours before `now`, moving 5 to 15 seconds per sample.
pub fn generate_series<R: Rng + ?Sized>(
    gps_id: Uuid,
    samples: usize,
    now: NaiveDateTime,
    rng: &mut R,
) -> Vec<TelemetrySample> {
    let mut latitude = REFERENCE_LATITUDE + rng.random_range(-START_OFFSET..=START_OFFSET);
    let mut longitude = REFERENCE_LONGITUDE + rng.random_range(-START_OFFSET..=START_OFFSET);
    let mut cursor = now - Duration::hours(HISTORY_HOURS);

    let mut series = Vec::with_capacity(samples);
    for _ in 0..samples {
        latitude += rng.random_range(-WALK_STEP..=WALK_STEP);
        longitude += rng.random_range(-WALK_STEP..=WALK_STEP);
        cursor += Duration::seconds(rng.random_range(5..=15));

        series.push(TelemetrySample {
            latitude,
            longitude,
            speed: rng.random_range(0..=100),
            rpm: None,
            fuel_level: None,
            ignition_status: None,
            battery_level: rng.random_range(12.1..=13.5),
            satellites_used: rng.random_range(5..=12),
            timestamp: cursor,
            gps_id,
            distance_from_last: None,
        });
    }
    series
}

/// Series for every vehicle of `roster`, concatenated in roster order.
pub fn generate_telemetry<R: Rng + ?Sized>(
    roster: &[VehicleRecord],
    samples_per_vehicle: usize,
    now: NaiveDateTime,
    rng: &mut R,
) -> Vec<TelemetrySample> {
    let mut all = Vec::with_capacity(roster.len() * samples_per_vehicle);
    for vehicle in roster {
        all.extend(generate_series(vehicle.gps_id, samples_per_vehicle, now, rng));
    }
    all
}
