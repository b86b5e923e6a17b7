use glam::DVec3;
use gravity_swarm::prelude::*;

fn field_of(config: SwarmConfig, particles: Vec<Particle>) -> ParticleField {
    ParticleField::from_particles(config, particles).expect("valid configuration")
}

#[test]
fn two_body_orbit_stays_near_spawn_distance() {
    let central = CentralBody::default();
    let r = 100.0;
    let speed = (GravityLaw::DEFAULT_K * central.radius_cubed() / r).sqrt();

    let particle = Particle::new(DVec3::new(r, 0.0, 0.0), DVec3::new(0.0, speed, 0.0), 1.0);
    let mut field = field_of(SwarmConfig::orbit(), vec![particle]);

    // About four revolutions.
    for _ in 0..5_000 {
        let report = field.step(None);
        assert!(report.respawns.is_empty());

        let distance = field.particles()[0].position.length();
        assert!((95.0..105.0).contains(&distance), "drifted to {distance}");
    }
}

#[test]
fn mirrored_particles_stay_mirrored() {
    let position = DVec3::new(100.0, 5.0, 3.0);
    let velocity = DVec3::new(0.0, 0.45, 0.01);

    let mut field = field_of(
        SwarmConfig::orbit(),
        vec![
            Particle::new(position, velocity, 2.0),
            Particle::new(-position, -velocity, 2.0),
        ],
    );

    for _ in 0..2_000 {
        assert!(field.step(None).respawns.is_empty());

        let [a, b] = field.particles() else {
            panic!("the field has two slots");
        };
        assert_eq!(a.position, -b.position);
        assert_eq!(a.velocity, -b.velocity);
    }
}

#[test]
fn no_particle_persists_outside_the_band() {
    for config in [SwarmConfig::swarm(), SwarmConfig::orbit(), SwarmConfig::piloted()] {
        let mut field = ParticleField::new(config.with_seed(17)).unwrap();
        let radius = field.central().radius();
        let escape = field.config().escape_radius;
        let band = radius..=escape;

        let mut outside: Vec<usize> = Vec::new();

        for _ in 0..500 {
            let report = field.step(None);
            let respawned: Vec<_> = report.respawns.iter().map(|r| r.slot).collect();

            for slot in &outside {
                assert!(respawned.contains(slot), "slot {slot} stayed outside the band");
            }

            assert!(field
                .particles()
                .iter()
                .all(|p| band.contains(&p.distance())));

            outside = field
                .particles()
                .iter()
                .enumerate()
                .filter(|(_, p)| !band.contains(&p.position.length()))
                .map(|(slot, _)| slot)
                .collect();
        }
    }
}

#[test]
fn falling_swarm_collides_and_is_replaced() {
    // Without tangential speed, particles fall into the central body.
    let mut config = SwarmConfig::swarm().with_seed(1);
    config.spawn.speed = OrbitalSpeed::Fixed(0.0);
    let mut field = ParticleField::new(config).unwrap();

    let collisions: usize = (0..500).map(|_| field.step(None).collisions()).sum();

    assert!(collisions > 50);
    assert_eq!(field.len(), 100);
}

#[test]
fn doubling_radius_pulls_eight_times_harder() {
    let law = GravityLaw::default();
    let central = CentralBody::default();
    let affected = DVec3::new(100.0, 0.0, 0.0);
    let source = DVec3::new(0.0, 110.0, 20.0);

    let pull_of = |radius: f64| {
        let bodies = [(affected, 1.0), (source, radius * radius * radius)];
        let dv = sequential::BruteForce.compute(&law, &central, &bodies)[0];
        dv - law.central(affected, affected.length_squared(), central.radius_cubed())
    };

    let single = pull_of(1.5);
    let double = pull_of(3.0);

    assert!((double - single * 8.0).length() < single.length() * 1e-9);
}

#[test]
fn same_seed_gives_identical_runs() {
    let config = SwarmConfig::piloted().with_seed(123);
    let mut a = ParticleField::new(config).unwrap();
    let mut b = ParticleField::new(config).unwrap();

    let command = PilotCommand {
        thrust: Some(Thrust::Forward),
        lift: DVec3::Z,
    };

    for step in 0..300 {
        let pilot = (step % 3 == 0).then_some(&command);
        assert_eq!(a.step(pilot), b.step(pilot));
    }

    assert_eq!(a.particles(), b.particles());
}

#[test]
fn different_seeds_give_different_swarms() {
    let a = ParticleField::new(SwarmConfig::swarm().with_seed(1)).unwrap();
    let b = ParticleField::new(SwarmConfig::swarm().with_seed(2)).unwrap();

    assert_ne!(a.particles(), b.particles());
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_and_sequential_runs_are_identical() {
    let config = SwarmConfig::orbit().with_seed(99);
    let mut sequential_field = ParticleField::new(config).unwrap();
    let mut parallel_field = ParticleField::new(config).unwrap();

    for _ in 0..200 {
        let expected = sequential_field.step_with(&mut sequential::BruteForce, None);
        let computed = parallel_field.step_with(&mut parallel::BruteForce, None);
        assert_eq!(expected, computed);
    }

    assert_eq!(sequential_field.particles(), parallel_field.particles());
}

#[test]
fn pairs_method_tracks_brute_force() {
    let config = SwarmConfig::orbit().with_seed(8);
    let mut brute_force = ParticleField::new(config).unwrap();
    let mut pairs = ParticleField::new(config).unwrap();

    for _ in 0..20 {
        brute_force.step_with(&mut sequential::BruteForce, None);
        pairs.step_with(&mut sequential::BruteForcePairs, None);
    }

    for (a, b) in brute_force.particles().iter().zip(pairs.particles()) {
        assert!(a.position.abs_diff_eq(b.position, 1e-6));
    }
}

#[test]
fn guard_keeps_close_encounters_finite() {
    let config = SwarmConfig {
        gravity: GravityLaw::guarded(GravityLaw::DEFAULT_K, 1.0),
        ..SwarmConfig::orbit()
    };
    let position = DVec3::new(100.0, 0.0, 0.0);
    let velocity = DVec3::new(0.0, 0.5, 0.0);

    let mut field = field_of(
        config,
        vec![
            Particle::new(position, velocity, 5.0),
            Particle::new(position + DVec3::new(0.0, 1e-7, 0.0), velocity, 5.0),
        ],
    );

    field.step(None);

    for particle in field.particles() {
        assert!(particle.velocity.is_finite());
        assert!(particle.velocity.length() < 1.0);
    }
}

#[test]
fn unguarded_close_encounter_is_cleaned_up_by_respawn() {
    let position = DVec3::new(100.0, 0.0, 0.0);
    let velocity = DVec3::new(0.0, 0.5, 0.0);

    let mut field = field_of(
        SwarmConfig::orbit(),
        vec![
            Particle::new(position, velocity, 5.0),
            Particle::new(position + DVec3::new(0.0, 1e-7, 0.0), velocity, 5.0),
        ],
    );

    field.step(None);
    assert!(field.particles().iter().any(|p| p.velocity.length() > 1e6));

    let report = field.step(None);
    assert_eq!(report.escapes(), 2);
    assert!(field.particles().iter().all(|p| p.velocity.length() < 1.0));
}

#[test]
fn started_session_steps_the_field() {
    let mut session = Session::new(ParticleField::new(SwarmConfig::anchored()).unwrap());

    session.tick(&ControlInput {
        start: true,
        ..Default::default()
    });

    for _ in 0..50 {
        session.tick(&ControlInput {
            spin: [0.5, -0.5],
            up: true,
            a: true,
            ..Default::default()
        });
    }

    assert_eq!(session.field().steps(), 50);
}
