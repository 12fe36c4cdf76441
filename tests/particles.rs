use folio_fx::config::{FxConfig, RainConfig, TrailConfig};
use folio_fx::lifecycle::Size;
use folio_fx::rain::DotRain;
use folio_fx::trail::{PointerTrail, MAX_SAMPLES};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded uniform source so populations are reproducible.
fn seeded(seed: u64) -> impl FnMut() -> f32 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    move || rng.gen::<f32>()
}

fn size(width: u32, height: u32) -> Size {
    Size { width, height }
}

#[test]
fn trail_never_exceeds_its_cap() {
    let mut trail = PointerTrail::new(&TrailConfig::default());
    for i in 0..1_000 {
        trail.push(i as f32, 0.0);
        assert!(trail.len() <= 50);
    }
    assert_eq!(trail.len(), 50);
    let oldest = trail.samples().next().unwrap();
    assert_eq!(oldest.x, 950.0);
    assert_eq!(trail.cursor_glow().x, 999.0);
}

#[test]
fn configured_capacity_cannot_lift_the_cap() {
    let config = FxConfig::from_json(r#"{ "trail": { "capacity": 500 } }"#).unwrap();
    let mut trail = PointerTrail::new(&config.trail);
    assert_eq!(trail.capacity(), MAX_SAMPLES);
    for i in 0..1_000 {
        trail.push(i as f32, i as f32);
    }
    assert_eq!(trail.len(), 50);

    let small = TrailConfig {
        capacity: 0,
        ..TrailConfig::default()
    };
    let mut trail = PointerTrail::new(&small);
    trail.push(1.0, 1.0);
    trail.push(2.0, 2.0);
    assert_eq!(trail.len(), 1);
}

#[test]
fn trail_samples_expire_at_max_age() {
    let mut trail = PointerTrail::new(&TrailConfig::default());
    trail.push(10.0, 20.0);
    for _ in 0..39 {
        trail.advance(1.0);
    }
    assert_eq!(trail.len(), 1);
    let glow = trail.glows().next().unwrap();
    assert!((glow.life - 1.0 / 40.0).abs() < 1e-6);
    assert!((glow.radius - 60.0 / 40.0).abs() < 1e-4);

    trail.advance(1.0);
    assert!(trail.is_empty());
    assert_eq!(trail.glows().count(), 0);
}

#[test]
fn trail_cursor_starts_off_screen() {
    let trail = PointerTrail::new(&TrailConfig::default());
    let glow = trail.cursor_glow();
    assert_eq!((glow.x, glow.y, glow.radius), (-100.0, -100.0, 120.0));
}

#[test]
fn rain_ages_strictly_increase_without_recycling() {
    let mut rng = seeded(7);
    let config = RainConfig {
        max_age: 1.0e6,
        ..RainConfig::default()
    };
    let mut rain = DotRain::new(&config, size(800, 600), &mut rng);
    rain.resize(size(800, 1_000_000));

    let mut previous: Vec<f32> = rain.drops().iter().map(|d| d.age).collect();
    for _ in 0..50 {
        rain.advance(1.0, &mut rng);
        let ages: Vec<f32> = rain.drops().iter().map(|d| d.age).collect();
        for (before, after) in previous.iter().zip(&ages) {
            assert!(after > before);
        }
        previous = ages;
    }
}

#[test]
fn over_age_drops_are_recycled_not_removed() {
    let mut rng = seeded(11);
    let config = RainConfig {
        max_age: 5.0,
        ..RainConfig::default()
    };
    let mut rain = DotRain::new(&config, size(800, 600), &mut rng);
    assert_eq!(rain.len(), 120);

    for _ in 0..100 {
        rain.advance(1.0, &mut rng);
        assert_eq!(rain.len(), 120);
        assert!(rain.drops().iter().all(|d| d.age <= 5.0));
    }
}

#[test]
fn drops_leaving_the_bottom_respawn_above_the_top() {
    let mut rng = seeded(3);
    let mut rain = DotRain::new(&RainConfig::default(), size(800, 600), &mut rng);
    rain.resize(size(800, 1));
    let before = rain.drops().to_vec();

    rain.advance(1.0, &mut rng);
    let mut recycled = 0;
    for (old, drop) in before.iter().zip(rain.drops()) {
        if old.y + old.speed > 1.0 {
            assert_eq!(drop.age, 0.0);
            assert!(drop.y <= 0.0 && drop.y >= -0.3);
            recycled += 1;
        }
    }
    assert!(recycled > 100);
}

#[test]
fn resize_keeps_drops_in_place() {
    let mut rng = seeded(42);
    let mut rain = DotRain::new(&RainConfig::default(), size(800, 600), &mut rng);
    for _ in 0..10 {
        rain.advance(1.0, &mut rng);
    }
    let before = rain.drops().to_vec();

    rain.resize(size(1200, 400));
    assert_eq!(rain.drops(), &before[..]);
    assert_eq!(rain.bounds(), (1200.0, 400.0));

    rain.advance(1.0, &mut rng);
    for (old, new) in before.iter().zip(rain.drops()) {
        let moved = (new.y - (old.y + old.speed)).abs() < 1e-3 && new.x == old.x;
        let recycled = new.age == 0.0 && new.y <= 0.0;
        assert!(moved || recycled);
        if old.y + old.speed <= 400.0 {
            assert!(moved);
        }
    }
}

#[test]
fn spawned_drops_stay_in_their_ranges() {
    let mut rng = seeded(99);
    let rain = DotRain::new(&RainConfig::default(), size(640, 480), &mut rng);
    for d in rain.drops() {
        assert!((0.0..=640.0).contains(&d.x));
        assert!((0.0..=480.0).contains(&d.y));
        assert!((0.3..=1.0001).contains(&d.speed));
        assert!((1.3..=3.0001).contains(&d.size));
        assert!((0.1..=0.2601).contains(&d.opacity));
    }
}

#[test]
fn fade_applies_to_the_bottom_zone_only() {
    let mut rng = seeded(5);
    let rain = DotRain::new(&RainConfig::default(), size(100, 100), &mut rng);
    let mut drop = rain.drops()[0];

    drop.y = 50.0;
    assert_eq!(rain.fade(&drop), 1.0);
    drop.y = 85.0;
    assert!((rain.fade(&drop) - 0.5).abs() < 1e-4);
    drop.y = 100.0;
    assert!(rain.fade(&drop).abs() < 1e-6);
}

#[test]
fn zero_count_population_is_empty() {
    let mut rng = seeded(1);
    let config = RainConfig {
        count: 0,
        ..RainConfig::default()
    };
    let mut rain = DotRain::new(&config, size(10, 10), &mut rng);
    rain.advance(1.0, &mut rng);
    assert!(rain.is_empty());
}
