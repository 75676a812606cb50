//! Unit tests for hr-data.

use hr_core::{HeroId, HrError, ObjectId};

use crate::{Catalog, DistanceTable, Hero, Object};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Three objects; depot distances 300/500/1500.
///
/// ```text
///        1    2    3
///   1    0  120  340
///   2  120    0   90
///   3  340   90    0
/// ```
fn three_object_table() -> DistanceTable {
    DistanceTable::new(
        [(ObjectId(1), 300), (ObjectId(2), 500), (ObjectId(3), 1500)],
        3,
        vec![0, 120, 340, 120, 0, 90, 340, 90, 0],
    )
    .unwrap()
}

// ── Catalog ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(
            [
                Hero { id: HeroId(2), move_points: 1500 },
                Hero { id: HeroId(1), move_points: 2000 },
            ],
            [
                Object { id: ObjectId(1), day_open: 1, reward: 500 },
                Object { id: ObjectId(2), day_open: 3, reward: 300 },
            ],
        )
    }

    #[test]
    fn lookups() {
        let c = sample();
        assert_eq!(c.hero(HeroId(1)).unwrap().move_points, 2000);
        assert_eq!(c.object(ObjectId(2)).unwrap().day_open, 3);
        assert!(c.hero(HeroId(9)).is_none());
        assert!(c.object(ObjectId(9)).is_none());
        assert_eq!(c.hero_count(), 2);
        assert_eq!(c.object_count(), 2);
    }

    #[test]
    fn unknown_hero_has_zero_budget() {
        let c = sample();
        assert_eq!(c.max_move_points(HeroId(2)), 1500);
        assert_eq!(c.max_move_points(HeroId(42)), 0);
    }

    #[test]
    fn require_reports_missing_ids() {
        let c = sample();
        assert!(c.require_hero(HeroId(1)).is_ok());
        assert!(matches!(c.require_hero(HeroId(3)), Err(HrError::HeroNotFound(HeroId(3)))));
    }

    #[test]
    fn total_reward_sums_every_object() {
        assert_eq!(sample().total_reward(), 800);
        assert_eq!(Catalog::default().total_reward(), 0);
    }

    #[test]
    fn duplicate_ids_last_row_wins() {
        let c = Catalog::new(
            [
                Hero { id: HeroId(1), move_points: 100 },
                Hero { id: HeroId(1), move_points: 900 },
            ],
            [],
        );
        assert_eq!(c.max_move_points(HeroId(1)), 900);
    }
}

// ── DistanceTable ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod distance {
    use super::*;
    use crate::DataError;

    #[test]
    fn depot_lookups_in_both_directions() {
        let t = three_object_table();
        assert_eq!(t.distance(ObjectId::DEPOT, ObjectId(1)), 300);
        assert_eq!(t.distance(ObjectId(3), ObjectId::DEPOT), 1500);
    }

    #[test]
    fn pair_lookups() {
        let t = three_object_table();
        assert_eq!(t.distance(ObjectId(1), ObjectId(3)), 340);
        assert_eq!(t.distance(ObjectId(3), ObjectId(2)), 90);
    }

    #[test]
    fn self_distance_is_zero() {
        let t = three_object_table();
        assert_eq!(t.distance(ObjectId(2), ObjectId(2)), 0);
        assert_eq!(t.distance(ObjectId::DEPOT, ObjectId::DEPOT), 0);
    }

    #[test]
    fn missing_depot_entry_costs_zero() {
        let t = DistanceTable::new([(ObjectId(1), 10)], 2, vec![0, 5, 5, 0]).unwrap();
        assert_eq!(t.depot_distance(ObjectId(2)), 0);
        assert_eq!(t.depot_distance(ObjectId(600)), 0);
    }

    #[test]
    fn huge_depot_id_is_stored_sparsely() {
        let t = DistanceTable::new([(ObjectId(u32::MAX), 10)], 1, vec![0]).unwrap();
        assert_eq!(t.depot_distance(ObjectId(u32::MAX)), 10);
        assert_eq!(t.distance(ObjectId::DEPOT, ObjectId(u32::MAX)), 10);
        assert_eq!(t.depot_distance(ObjectId(1)), 0);
    }

    #[test]
    fn huge_depot_id_loads_from_csv() {
        let rows = crate::load_depot_distances_reader(std::io::Cursor::new(
            "object_id,dist_start\n4294967295,10\n1,300\n",
        ))
        .unwrap();
        let t = DistanceTable::new(rows, 1, vec![0]).unwrap();
        assert_eq!(t.depot_distance(ObjectId(1)), 300);
        assert_eq!(t.depot_distance(ObjectId(u32::MAX)), 10);
    }

    #[test]
    fn asymmetric_matrix_is_averaged() {
        let t = DistanceTable::new([], 2, vec![7, 100, 51, 0]).unwrap();
        assert!(t.is_symmetric());
        assert_eq!(t.distance(ObjectId(1), ObjectId(2)), 75);
        assert_eq!(t.distance(ObjectId(2), ObjectId(1)), 75);
    }

    #[test]
    fn wrong_cell_count_rejected() {
        let err = DistanceTable::new([], 3, vec![0; 8]).unwrap_err();
        assert!(matches!(err, DataError::MatrixSizeMismatch { expected: 9, got: 8 }));
    }

    #[test]
    fn negative_cost_rejected() {
        let err = DistanceTable::new([], 2, vec![0, -1, -1, 0]).unwrap_err();
        assert!(matches!(err, DataError::NegativeDistance { value: -1, .. }));
        let err = DistanceTable::new([(ObjectId(1), -5)], 1, vec![0]).unwrap_err();
        assert!(matches!(err, DataError::NegativeDistance { value: -5, .. }));
    }

    #[test]
    fn empty_table() {
        let t = DistanceTable::new([], 0, vec![]).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.distance(ObjectId(1), ObjectId(2)), 0);
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::loader::*;
    use crate::{load_instance_dir, DataError};

    const HEROES_CSV: &str = "hero_id,move_points\n1,2000\n2,1000\n";
    const OBJECTS_CSV: &str = "object_id,day_open,reward\n1,1,500\n2,3,300\n";
    const DEPOT_CSV: &str = "object_id,dist_start\n1,300\n2,1500\n";
    const MATRIX_CSV: &str = "object_1,object_2\n0,400\n400,0\n";

    #[test]
    fn heroes() {
        let heroes = load_heroes_reader(Cursor::new(HEROES_CSV)).unwrap();
        assert_eq!(heroes, vec![
            Hero { id: HeroId(1), move_points: 2000 },
            Hero { id: HeroId(2), move_points: 1000 },
        ]);
    }

    #[test]
    fn objects() {
        let objects = load_objects_reader(Cursor::new(OBJECTS_CSV)).unwrap();
        assert_eq!(objects[1], Object { id: ObjectId(2), day_open: 3, reward: 300 });
    }

    #[test]
    fn objects_reject_day_zero() {
        let err = load_objects_reader(Cursor::new("object_id,day_open,reward\n1,0,5\n")).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn depot_distances() {
        let rows = load_depot_distances_reader(Cursor::new(DEPOT_CSV)).unwrap();
        assert_eq!(rows, vec![(ObjectId(1), 300), (ObjectId(2), 1500)]);
    }

    #[test]
    fn matrix() {
        let (size, cells) = load_distance_matrix_reader(Cursor::new(MATRIX_CSV)).unwrap();
        assert_eq!(size, 2);
        assert_eq!(cells, vec![0, 400, 400, 0]);
    }

    #[test]
    fn matrix_accepts_whole_floats() {
        let (_, cells) = load_distance_matrix_reader(Cursor::new("a,b\n0,12.0\n12,0\n")).unwrap();
        assert_eq!(cells, vec![0, 12, 12, 0]);
    }

    #[test]
    fn matrix_ragged_row_rejected() {
        let err = load_distance_matrix_reader(Cursor::new("a,b\n0,1\n1\n")).unwrap_err();
        assert!(matches!(err, DataError::MatrixShape { row: 1, expected: 2, got: 1 }));
    }

    #[test]
    fn matrix_bad_cell_rejected() {
        let err = load_distance_matrix_reader(Cursor::new("a,b\n0,x\n1,0\n")).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn missing_column_is_parse_error() {
        let err = load_heroes_reader(Cursor::new("hero_id\n1\n")).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn instance_dir_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join(HEROES_FILE), HEROES_CSV).unwrap();
        std::fs::write(dir.path().join(OBJECTS_FILE), OBJECTS_CSV).unwrap();
        std::fs::write(dir.path().join(DEPOT_DISTANCE_FILE), DEPOT_CSV).unwrap();
        std::fs::write(dir.path().join(DISTANCE_FILE), MATRIX_CSV).unwrap();

        let inst = load_instance_dir(dir.path()).unwrap();
        assert_eq!(inst.catalog.hero_count(), 2);
        assert_eq!(inst.catalog.object_count(), 2);
        assert_eq!(inst.distances.distance(ObjectId::DEPOT, ObjectId(2)), 1500);
        assert_eq!(inst.distances.distance(ObjectId(1), ObjectId(2)), 400);
    }

    #[test]
    fn instance_dir_missing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_instance_dir(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, DataError::Core(_)));
    }

    #[test]
    fn instance_dir_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_instance_dir(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }
}
