//! Unit tests for nasch-core primitives.

#[cfg(test)]
mod ids {
    use crate::VehicleId;

    #[test]
    fn rank_roundtrip() {
        let id = VehicleId::try_from(4usize).unwrap();
        assert_eq!(id, VehicleId(5));
        assert_eq!(id.rank(), 4);
        assert_eq!(VehicleId::try_from(0usize).unwrap().rank(), 0);
    }

    #[test]
    fn rank_past_u32_rejected() {
        assert_eq!(VehicleId::try_from(u32::MAX as usize - 1).unwrap(), VehicleId(u32::MAX));
        assert!(VehicleId::try_from(u32::MAX as usize).is_err());
        assert!(VehicleId::try_from(usize::MAX).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
    }
}

#[cfg(test)]
mod step {
    use crate::Step;

    #[test]
    fn step_arithmetic() {
        assert_eq!(Step::ZERO.next(), Step(1));
        assert_eq!(Step(12).to_string(), "S12");
    }
}

#[cfg(test)]
mod params {
    use crate::{ConfigError, ModelParams};

    #[test]
    fn vehicle_count_rounds() {
        assert_eq!(ModelParams::new(100, 0.6, 5, 0.2).vehicle_count(), 60);
        assert_eq!(ModelParams::new(10, 0.1, 2, 0.0).vehicle_count(), 1);
        assert_eq!(ModelParams::new(7, 0.3, 2, 0.0).vehicle_count(), 2); // 2.1
        assert_eq!(ModelParams::new(7, 0.5, 2, 0.0).vehicle_count(), 4); // 3.5 → even
        assert_eq!(ModelParams::new(5, 0.5, 2, 0.0).vehicle_count(), 2); // 2.5 → even
    }

    #[test]
    fn valid_params_return_count() {
        assert_eq!(ModelParams::new(5, 1.0, 2, 0.0).validate(), Ok(5));
        assert_eq!(ModelParams::new(10, 0.1, 2, 1.0).validate(), Ok(1));
    }

    #[test]
    fn zero_length_rejected() {
        assert_eq!(ModelParams::new(0, 0.5, 2, 0.1).validate(), Err(ConfigError::EmptyLane));
    }

    #[test]
    fn density_out_of_range_rejected() {
        for rho in [0.0, -0.1, 1.5] {
            assert_eq!(
                ModelParams::new(10, rho, 2, 0.1).validate(),
                Err(ConfigError::Density(rho)),
            );
        }
        assert!(matches!(
            ModelParams::new(10, f64::NAN, 2, 0.1).validate(),
            Err(ConfigError::Density(_)),
        ));
    }

    #[test]
    fn probability_out_of_range_rejected() {
        for p in [-0.01, 1.01] {
            assert_eq!(
                ModelParams::new(10, 0.5, 2, p).validate(),
                Err(ConfigError::SlowingProbability(p)),
            );
        }
        assert!(ModelParams::new(10, 0.5, 2, f64::NAN).validate().is_err());
    }

    #[test]
    fn density_too_small_for_lane_rejected() {
        // 10 * 0.04 = 0.4 → rounds to zero vehicles.
        assert_eq!(
            ModelParams::new(10, 0.04, 2, 0.1).validate(),
            Err(ConfigError::NoVehicles { lane_length: 10, density: 0.04 }),
        );
    }

    #[test]
    fn error_messages_name_the_value() {
        let msg = ConfigError::Density(1.5).to_string();
        assert!(msg.contains("1.5"), "got {msg}");
        let msg = ConfigError::TooManyVehicles { count: 11, lane_length: 10 }.to_string();
        assert!(msg.contains("11") && msg.contains("10"), "got {msg}");
    }
}

#[cfg(test)]
mod rng {
    use std::collections::HashSet;

    use crate::{RandomSource, SimRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        assert_eq!(a.sample_distinct(50, 20), b.sample_distinct(50, 20));
        let da: Vec<bool> = (0..64).map(|_| a.bernoulli(0.5)).collect();
        let db: Vec<bool> = (0..64).map(|_| b.bernoulli(0.5)).collect();
        assert_eq!(da, db);
    }

    #[test]
    fn sample_is_distinct_and_in_range() {
        let mut rng = SimRng::new(1);
        let picks = rng.sample_distinct(30, 30);
        assert_eq!(picks.len(), 30);
        let unique: HashSet<_> = picks.iter().copied().collect();
        assert_eq!(unique.len(), 30);
        assert!(picks.iter().all(|&i| i < 30));
    }

    #[test]
    fn bernoulli_extremes() {
        let mut rng = SimRng::new(3);
        assert!((0..100).all(|_| !rng.bernoulli(0.0)));
        assert!((0..100).all(|_| rng.bernoulli(1.0)));
    }

    #[test]
    fn streams_differ() {
        let mut a = SimRng::for_stream(42, 0);
        let mut b = SimRng::for_stream(42, 1);
        assert_ne!(a.sample_distinct(1_000_000, 8), b.sample_distinct(1_000_000, 8));
    }

    #[test]
    fn mut_ref_forwards() {
        fn draw<R: RandomSource>(mut source: R) -> bool {
            source.bernoulli(1.0)
        }
        let mut rng = SimRng::new(5);
        assert!(draw(&mut rng));
    }
}

#[cfg(all(test, feature = "serde"))]
mod config {
    use crate::SimConfig;

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: SimConfig = serde_json::from_str(r#"{ "steps": 7, "seed": 1 }"#).unwrap();
        assert_eq!(cfg.steps, 7);
        assert_eq!(cfg.seed, 1);
        assert_eq!(cfg.params, SimConfig::default().params);
    }
}
