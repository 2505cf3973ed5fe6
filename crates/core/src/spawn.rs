//! Per-tick probabilistic bubble spawner.

use bevy::math::Vec2;
use rand::Rng;

use crate::pool::BubblePool;
use crate::state::GameParams;

/// Uniform sample from `[min, max)`. With `integer` set, the value is drawn from the
/// integers in that range. A degenerate range yields `min`.
pub fn sample_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32, integer: bool) -> f32 {
    if integer {
        let lo = min.ceil() as i64;
        let hi = max.ceil() as i64;
        if lo >= hi {
            return min;
        }
        return rng.gen_range(lo..hi) as f32;
    }
    if min >= max {
        return min;
    }
    rng.gen_range(min..max)
}

/// Roll the spawn chance once; on success append one new bubble just below the bottom edge.
pub fn maybe_spawn<R: Rng + ?Sized>(
    pool: &mut BubblePool,
    params: &GameParams,
    rng: &mut R,
) -> Option<u64> {
    let chance = params.spawn_chance;
    // also rejects NaN
    if !(chance > 0.0) || !rng.gen_bool(chance.min(1.0)) {
        return None;
    }
    let int = params.integer_sampling;
    let x = sample_range(rng, 0.0, params.width, int);
    let radius = sample_range(rng, params.radius_range.0, params.radius_range.1, int);
    let speed = sample_range(rng, params.speed_range.0, params.speed_range.1, int);
    Some(pool.spawn(Vec2::new(x, params.spawn_y), radius, speed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn integer_sampling_stays_in_half_open_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..500 {
            let v = sample_range(&mut rng, 1.0, 4.0, true);
            assert_eq!(v.fract(), 0.0);
            assert!((1.0..4.0).contains(&v), "speed {v} out of range");
            seen[v as usize - 1] = true;
        }
        assert_eq!(seen, [true; 3], "expected speeds 1, 2 and 3 to all appear");
    }

    #[test]
    fn fractional_sampling_when_integer_disabled() {
        let mut rng = StdRng::seed_from_u64(11);
        let any_fraction = (0..100)
            .map(|_| sample_range(&mut rng, 20.0, 50.0, false))
            .inspect(|v| assert!((20.0..50.0).contains(v)))
            .any(|v| v.fract() != 0.0);
        assert!(any_fraction);
    }

    #[test]
    fn degenerate_range_returns_min() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_range(&mut rng, 5.0, 5.0, true), 5.0);
        assert_eq!(sample_range(&mut rng, 9.0, 3.0, false), 9.0);
    }

    #[test]
    fn spawned_bubbles_use_configured_ranges() {
        let params = GameParams {
            spawn_chance: 1.0,
            ..GameParams::default()
        };
        let mut pool = BubblePool::new();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            assert!(maybe_spawn(&mut pool, &params, &mut rng).is_some());
        }
        for b in pool.iter() {
            assert!(b.active);
            assert_eq!(b.burst_timer, 0.0);
            assert_eq!(b.pos.y, -50.0);
            assert!((0.0..800.0).contains(&b.pos.x));
            assert!((20.0..50.0).contains(&b.radius));
            assert!((1.0..4.0).contains(&b.speed));
        }
    }

    #[test]
    fn default_spawn_is_hidden_below_the_bottom_edge_and_rises() {
        let params = GameParams {
            spawn_chance: 1.0,
            ..GameParams::default()
        };
        let mut pool = BubblePool::new();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            maybe_spawn(&mut pool, &params, &mut rng);
        }
        for b in pool.iter() {
            // top of the circle stays under y = 0 (bottom-left origin)
            assert!(b.pos.y + b.radius < 0.0, "visible at spawn: {b:?}");
        }
        let mut b = pool.iter().next().cloned().unwrap();
        let y = b.pos.y;
        b.step(params.height, 0.016);
        assert!(b.pos.y > y);
    }

    #[test]
    fn zero_chance_never_spawns() {
        let params = GameParams {
            spawn_chance: 0.0,
            ..GameParams::default()
        };
        let mut pool = BubblePool::new();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            assert!(maybe_spawn(&mut pool, &params, &mut rng).is_none());
        }
        assert!(pool.is_empty());
    }

    #[test]
    fn default_chance_is_roughly_one_in_ten() {
        let params = GameParams::default();
        let mut pool = BubblePool::new();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..10_000 {
            maybe_spawn(&mut pool, &params, &mut rng);
        }
        let n = pool.len();
        assert!((800..1200).contains(&n), "spawned {n} of 10000");
    }
}
