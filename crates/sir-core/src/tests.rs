//! Unit tests for sir-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_matches_inner() {
        assert_eq!(AgentId(42).index(), 42);
        assert!(AgentId(3) < AgentId(10));
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert_eq!(AgentId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Extent, Point, Velocity};

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn advanced_adds_velocity() {
        let p = Point::new(1.0, 2.0).advanced(Velocity::new(0.5, -1.0));
        assert_eq!(p, Point::new(1.5, 1.0));
    }

    #[test]
    fn extent_contains_is_closed() {
        let e = Extent::new(10.0, 5.0);
        assert!(e.contains(Point::new(0.0, 0.0)));
        assert!(e.contains(Point::new(10.0, 5.0)));
        assert!(!e.contains(Point::new(10.01, 2.0)));
        assert!(!e.contains(Point::new(2.0, -0.01)));
    }

    #[test]
    fn scaled_extent() {
        let e = Extent::new(800.0, 600.0).scaled(0.5, 0.25);
        assert_eq!(e, Extent::new(400.0, 150.0));
    }
}

#[cfg(test)]
mod zone {
    use crate::{Point, SirError, Zone, ZoneRegistry};

    #[test]
    fn edge_points_are_outside() {
        let z = Zone::new(10.0, 20.0, 30.0, 40.0);
        assert!(!z.contains(Point::new(10.0, 30.0)), "left edge");
        assert!(!z.contains(Point::new(40.0, 30.0)), "right edge");
        assert!(!z.contains(Point::new(20.0, 20.0)), "top edge");
        assert!(!z.contains(Point::new(20.0, 60.0)), "bottom edge");
        assert!(z.contains(Point::new(10.000_001, 30.0)));
    }

    #[test]
    fn shared_requires_one_zone_holding_both() {
        let reg = ZoneRegistry::new(vec![
            Zone::new(0.0, 0.0, 10.0, 10.0),
            Zone::new(20.0, 0.0, 10.0, 10.0),
        ])
        .unwrap();
        let a = Point::new(5.0, 5.0);
        let b = Point::new(6.0, 6.0);
        let c = Point::new(25.0, 5.0);
        assert!(reg.shared_by(a, b));
        assert!(!reg.shared_by(a, c), "agents in different zones do not share one");
    }

    #[test]
    fn overlapping_zones_still_match() {
        let reg = ZoneRegistry::new(vec![
            Zone::new(0.0, 0.0, 10.0, 10.0),
            Zone::new(5.0, 5.0, 10.0, 10.0),
        ])
        .unwrap();
        assert!(reg.shared_by(Point::new(7.0, 7.0), Point::new(8.0, 8.0)));
    }

    #[test]
    fn empty_registry_never_matches() {
        let reg = ZoneRegistry::empty();
        assert!(reg.is_empty());
        assert!(!reg.shared_by(Point::new(1.0, 1.0), Point::new(1.0, 1.0)));
    }

    #[test]
    fn rejects_degenerate_zone() {
        let err = ZoneRegistry::new(vec![Zone::new(0.0, 0.0, 0.0, 5.0)]).unwrap_err();
        assert!(matches!(err, SirError::InvalidZone { index: 0, .. }));
    }
}

#[cfg(test)]
mod health {
    use crate::HealthState;

    #[test]
    fn legal_transitions() {
        use HealthState::*;
        assert!(Susceptible.can_become(Infected));
        assert!(Infected.can_become(Recovered));
        assert!(!Susceptible.can_become(Recovered));
        assert!(!Recovered.can_become(Susceptible));
        assert!(!Recovered.can_become(Infected));
        assert!(!Infected.can_become(Susceptible));
    }

    #[test]
    fn display() {
        assert_eq!(HealthState::Susceptible.to_string(), "S");
        assert_eq!(HealthState::Infected.to_string(), "I");
        assert_eq!(HealthState::Recovered.to_string(), "R");
        assert_eq!(HealthState::default(), HealthState::Susceptible);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.to_string(), "T10");
    }

    #[test]
    fn interval_boundaries() {
        assert!(Tick(0).is_on_interval(10));
        assert!(Tick(20).is_on_interval(10));
        assert!(!Tick(21).is_on_interval(10));
        assert!(!Tick(0).is_on_interval(0));
    }

    #[test]
    fn clock_elapsed_time() {
        let mut clock = SimClock::new(5);
        assert_eq!(clock.elapsed_time(), 0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_time(), 10);
    }

    #[test]
    fn zero_step_interval_rejected() {
        let cfg = SimConfig { step_interval: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        assert!(SimConfig::default().validate().is_ok());
        assert_eq!(SimConfig::default().end_tick(), Tick(300));
    }
}

#[cfg(test)]
mod params {
    use crate::{EpidemicParams, Extent, SirError, WorkPeriod, Zone};

    #[test]
    fn defaults_are_valid() {
        EpidemicParams::default().validate().unwrap();
    }

    #[test]
    fn zero_population_rejected() {
        let p = EpidemicParams { population: 0, ..Default::default() };
        assert!(matches!(p.validate(), Err(SirError::Config(_))));
    }

    #[test]
    fn probability_out_of_range_rejected() {
        for bad in [-0.1, 1.5, f64::NAN] {
            let p = EpidemicParams { base_probability: bad, ..Default::default() };
            assert!(
                matches!(p.validate(), Err(SirError::ProbabilityOutOfRange { name: "base_probability", .. })),
                "base_probability = {bad} should be rejected"
            );
        }
    }

    #[test]
    fn negative_radius_rejected() {
        let p = EpidemicParams { infection_radius: -1.0, ..Default::default() };
        assert!(matches!(p.validate(), Err(SirError::Negative { name: "infection_radius", .. })));
        let zero = EpidemicParams { infection_radius: 0.0, ..Default::default() };
        assert!(zero.validate().is_ok(), "radius 0 is legal (no transmission)");
    }

    #[test]
    fn bad_domain_rejected() {
        let p = EpidemicParams { domain: Extent::new(0.0, 600.0), ..Default::default() };
        assert!(matches!(p.validate(), Err(SirError::NotPositive { name: "domain.width", .. })));
    }

    #[test]
    fn bad_work_period_rejected() {
        let p = EpidemicParams {
            work_period: Some(WorkPeriod { width_fraction: 1.5, ..WorkPeriod::default() }),
            ..Default::default()
        };
        assert!(p.validate().is_err());
        let p = EpidemicParams {
            work_period: Some(WorkPeriod { interval: 0.0, ..WorkPeriod::default() }),
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn bad_zone_rejected() {
        let p = EpidemicParams {
            zones: vec![Zone::new(0.0, 0.0, 10.0, -2.0)],
            ..Default::default()
        };
        assert!(matches!(p.validate(), Err(SirError::InvalidZone { .. })));
    }

    #[test]
    fn vaccination_scales_baseline_and_zone_probability() {
        let mut p = EpidemicParams { base_probability: 0.5, ..Default::default() };
        assert_eq!(p.baseline_probability(), 0.5);
        assert!((p.zone_probability() - 0.66).abs() < 1e-12);

        p.vaccination.enabled = true;
        assert!((p.baseline_probability() - 0.2975).abs() < 1e-12);
        assert!((p.zone_probability() - 0.2975 * 1.32).abs() < 1e-12);
    }

    #[test]
    fn zone_probability_capped_at_one() {
        let p = EpidemicParams { base_probability: 0.9, ..Default::default() };
        assert_eq!(p.zone_probability(), 1.0);
    }

    #[test]
    fn initial_infected_count_rounds() {
        let p = EpidemicParams { population: 10, initial_infected_fraction: 0.1, ..Default::default() };
        assert_eq!(p.initial_infected_count(), 1);
        let p = EpidemicParams { population: 150, initial_infected_fraction: 0.01, ..Default::default() };
        assert_eq!(p.initial_infected_count(), 2);
        let p = EpidemicParams { population: 3, initial_infected_fraction: 1.0, ..Default::default() };
        assert_eq!(p.initial_infected_count(), 3);
    }

    #[test]
    fn work_extent_follows_schedule() {
        let p = EpidemicParams::default();
        assert_eq!(p.work_extent(), Some(Extent::new(400.0, 300.0)));
        let p = EpidemicParams { work_period: None, ..Default::default() };
        assert_eq!(p.work_extent(), None);
    }
}

#[cfg(test)]
mod rng {
    use crate::{Extent, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.unit(), r2.unit());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = SimRng::new(1).unit();
        let b = SimRng::new(2).unit();
        assert_ne!(a, b);
    }

    #[test]
    fn point_in_extent() {
        let mut rng = SimRng::new(0);
        let e = Extent::new(80.0, 60.0);
        for _ in 0..1000 {
            let p = rng.point_in(e);
            assert!((0.0..80.0).contains(&p.x) && (0.0..60.0).contains(&p.y));
        }
    }

    #[test]
    fn velocity_within_speed() {
        let mut rng = SimRng::new(3);
        for _ in 0..1000 {
            let v = rng.velocity(1.2);
            assert!(v.dx.abs() <= 1.2 && v.dy.abs() <= 1.2);
        }
        let still = rng.velocity(0.0);
        assert_eq!((still.dx, still.dy), (0.0, 0.0));
    }

    #[test]
    fn sample_size_edge_cases() {
        let mut rng = SimRng::new(9);
        assert_eq!(rng.sample_size(0, 0.5), 0);
        assert_eq!(rng.sample_size(100, 0.0), 0);
        assert_eq!(rng.sample_size(100, 1.0), 100);
        assert_eq!(rng.sample_size(40, 0.25), 10, "exact products need no rounding draw");
    }

    #[test]
    fn sample_size_rounds_stochastically() {
        let mut rng = SimRng::new(11);
        // 0.1 × 5 = 0.5 → 0 or 1, about half the time each.
        let trials = 10_000;
        let ones: usize = (0..trials).map(|_| rng.sample_size(5, 0.1)).sum();
        let rate = ones as f64 / trials as f64;
        assert!((0.45..0.55).contains(&rate), "rate = {rate}");
    }

    #[test]
    fn sample_indices_distinct_and_in_range() {
        let mut rng = SimRng::new(5);
        let mut picked = rng.sample_indices(20, 7);
        assert_eq!(picked.len(), 7);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 7, "no duplicates");
        assert!(picked.iter().all(|&i| i < 20));
        assert!(rng.sample_indices(0, 0).is_empty());
    }
}
