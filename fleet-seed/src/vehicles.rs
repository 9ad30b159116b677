use crate::{config::SeedConfig, error::SeedError, table::Table, timestamp::format_timestamp};
use chrono::NaiveDateTime;
use rand::Rng;
use uuid::Uuid;

pub const RELAY_STATUS: &str = "ON";
pub const RELAY_COMMAND_STATUS: &str = "success";

const PLATE_PREFIX: &str = "D";
const SIM_PREFIX: &str = "08";

/// One row of the vehicle roster.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub vehicle_id: i64,
    pub user_id: String,
    /// Key telemetry samples refer back to.
    pub gps_id: Uuid,
    pub license_plate: String,
    pub name: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub sim_card_number: String,
    pub relay_status: &'static str,
    pub update_at: NaiveDateTime,
    pub geofence_id: Option<u16>,
    pub relay_command_status: &'static str,
}

impl Table for VehicleRecord {
    const HEADER: &'static [&'static str] = &[
        "vehicle_id",
        "user_id",
        "gps_id",
        "license_plate",
        "name",
        "make",
        "model",
        "year",
        "sim_card_number",
        "relay_status",
        "update_at",
        "geofence_id",
        "relay_command_status",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.vehicle_id.to_string(),
            self.user_id.clone(),
            self.gps_id.to_string(),
            self.license_plate.clone(),
            self.name.clone(),
            self.make.clone(),
            self.model.clone(),
            self.year.to_string(),
            self.sim_card_number.clone(),
            self.relay_status.to_string(),
            format_timestamp(self.update_at),
            self.geofence_id.map(|id| id.to_string()).unwrap_or_default(),
            self.relay_command_status.to_string(),
        ]
    }
}

/// Random v4 uuid drawn from `rng`, so seeded runs stay reproducible.
pub(crate) fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}

fn license_plate<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number = rng.random_range(1000..=9999);
    let letters: String = (0..2)
        .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
        .collect();
    format!("{PLATE_PREFIX} {number} {letters}")
}

fn sim_card_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let subscriber: u64 = rng.random_range(1_000_000_000..=9_999_999_999);
    format!("{SIM_PREFIX}{subscriber}")
}

/// Builds `config.vehicle_count` vehicles with ids `start_id, start_id + 1, ...`.
///
/// Every record is stamped with the same generation time `now`.
pub fn generate_roster<R: Rng + ?Sized>(
    config: &SeedConfig,
    start_id: i64,
    now: NaiveDateTime,
    rng: &mut R,
) -> Result<Vec<VehicleRecord>, SeedError> {
    let count = config.vehicle_count;
    if count == 0 {
        return Ok(Vec::new());
    }
    let last_offset = i64::try_from(count - 1)
        .map_err(|_| SeedError::IdRange { start_id, count })?;
    if start_id.checked_add(last_offset).is_none() {
        return Err(SeedError::IdRange { start_id, count });
    }

    let mut roster = Vec::with_capacity(count);
    for offset in 0..=last_offset {
        let vehicle_id = start_id + offset;
        let (make, model) = config
            .catalog
            .pick(rng)
            .ok_or_else(|| SeedError::InvalidConfig("catalog has no models".to_string()))?;

        roster.push(VehicleRecord {
            vehicle_id,
            user_id: config.user_id.clone(),
            gps_id: random_uuid(rng),
            license_plate: license_plate(rng),
            name: format!("Mobil {vehicle_id}"),
            make: make.to_string(),
            model: model.to_string(),
            year: rng.random_range(2018..=2024),
            sim_card_number: sim_card_number(rng),
            relay_status: RELAY_STATUS,
            update_at: now,
            geofence_id: config
                .assign_random_geofence
                .then(|| rng.random_range(100..=200)),
            relay_command_status: RELAY_COMMAND_STATUS,
        });
    }

    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_micro_opt(9, 30, 0, 123456)
            .unwrap()
    }

    #[test]
    fn test_ids_are_contiguous_from_start() {
        let config = SeedConfig::default().with_vehicle_count(3);
        let mut rng = StdRng::seed_from_u64(1);

        let roster = generate_roster(&config, 5, now(), &mut rng).unwrap();
        let ids: Vec<i64> = roster.iter().map(|v| v.vehicle_id).collect();

        assert_eq!(ids, vec![5, 6, 7]);
        assert_eq!(roster[0].name, "Mobil 5");
        assert_eq!(roster[2].name, "Mobil 7");
    }

    #[test]
    fn test_default_roster_shape() {
        let config = SeedConfig::default();
        let mut rng = StdRng::seed_from_u64(2);

        let roster = generate_roster(&config, 1, now(), &mut rng).unwrap();

        assert_eq!(roster.len(), 100);
        assert_eq!(roster.first().unwrap().vehicle_id, 1);
        assert_eq!(roster.last().unwrap().vehicle_id, 100);

        let gps_ids: HashSet<Uuid> = roster.iter().map(|v| v.gps_id).collect();
        assert_eq!(gps_ids.len(), roster.len());

        for vehicle in &roster {
            assert_eq!(vehicle.user_id, crate::config::DEFAULT_USER_ID);
            assert!(config.catalog.contains(&vehicle.make, &vehicle.model));
            assert!((2018..=2024).contains(&vehicle.year));
            assert_eq!(vehicle.gps_id.get_version_num(), 4);
            assert_eq!(vehicle.geofence_id, None);
            assert_eq!(vehicle.update_at, now());
            assert_eq!(vehicle.relay_status, "ON");
            assert_eq!(vehicle.relay_command_status, "success");
        }
    }

    #[test]
    fn test_plate_and_sim_format() {
        let config = SeedConfig::default().with_vehicle_count(50);
        let mut rng = StdRng::seed_from_u64(3);

        for vehicle in generate_roster(&config, 1, now(), &mut rng).unwrap() {
            let parts: Vec<&str> = vehicle.license_plate.split(' ').collect();
            assert_eq!(parts.len(), 3, "{}", vehicle.license_plate);
            assert_eq!(parts[0], "D");
            let number: u16 = parts[1].parse().unwrap();
            assert!((1000..=9999).contains(&number));
            assert_eq!(parts[2].len(), 2);
            assert!(parts[2].chars().all(|c| c.is_ascii_uppercase()));

            assert_eq!(vehicle.sim_card_number.len(), 12);
            assert!(vehicle.sim_card_number.starts_with("08"));
            assert!(vehicle.sim_card_number.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_geofence_assignment() {
        let config = SeedConfig {
            assign_random_geofence: true,
            ..SeedConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(4);

        for vehicle in generate_roster(&config, 1, now(), &mut rng).unwrap() {
            let geofence = vehicle.geofence_id.unwrap();
            assert!((100..=200).contains(&geofence));
        }
    }

    #[test]
    fn test_id_overflow_is_rejected() {
        let config = SeedConfig::default().with_vehicle_count(3);
        let mut rng = StdRng::seed_from_u64(5);

        let err = generate_roster(&config, i64::MAX - 1, now(), &mut rng).unwrap_err();
        assert!(matches!(err, SeedError::IdRange { count: 3, .. }));

        let roster = generate_roster(&config, i64::MAX - 2, now(), &mut rng).unwrap();
        assert_eq!(roster.last().unwrap().vehicle_id, i64::MAX);
    }

    #[test]
    fn test_fields_follow_header() {
        let config = SeedConfig::default().with_vehicle_count(1);
        let mut rng = StdRng::seed_from_u64(6);
        let vehicle = generate_roster(&config, 9, now(), &mut rng).unwrap().remove(0);

        let fields = vehicle.fields();
        assert_eq!(fields.len(), VehicleRecord::HEADER.len());
        assert_eq!(fields[0], "9");
        assert_eq!(fields[2], vehicle.gps_id.to_string());
        assert_eq!(fields[10], "2025-03-14T09:30:00.123456Z");
        assert_eq!(fields[11], "");
        assert_eq!(fields[12], "success");
    }
}
