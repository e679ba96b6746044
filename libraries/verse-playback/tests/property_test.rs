//! Property-based tests for sequencing and volume invariants
//!
//! Uses proptest to verify invariants across many random inputs.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use verse_core::{Catalog, Track};
use verse_playback::{sequencer, AudioDevice, PlaybackEngine};

/// Inert device: property tests only exercise pure state logic
struct SilentDevice;

impl AudioDevice for SilentDevice {
    fn load(&mut self, _source_locator: &str) {}
    fn play(&mut self) {}
    fn pause(&mut self) {}
    fn set_position_secs(&mut self, _secs: f64) {}
    fn set_device_volume(&mut self, _gain: f32) {}
}

fn catalog_of(track_count: usize) -> Catalog {
    let tracks = (0..track_count)
        .map(|i| Track::new(format!("Track {i}"), "Artist", format!("/t/{i}.mp3"), 180.0))
        .collect();
    Catalog::new(tracks).expect("valid catalog")
}

proptest! {
    /// Property: generated shuffle orders are true permutations —
    /// every catalog index appears exactly once
    #[test]
    fn shuffle_order_is_permutation(track_count in 0usize..200, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let order = sequencer::generate_shuffle_order(track_count, &mut rng);

        prop_assert_eq!(order.len(), track_count);

        let unique: HashSet<usize> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), track_count, "duplicates in shuffle order");
        prop_assert!(order.iter().all(|&i| i < track_count), "index outside catalog");
    }

    /// Property: linear next then previous returns to the start index,
    /// and vice versa
    #[test]
    fn linear_sequencing_round_trips(track_count in 1usize..500, offset in any::<usize>()) {
        let current = offset % track_count;

        let forward = sequencer::resolve_next(track_count, current, false, &[]);
        prop_assert_eq!(sequencer::resolve_previous(track_count, forward, false, &[]), current);

        let backward = sequencer::resolve_previous(track_count, current, false, &[]);
        prop_assert_eq!(sequencer::resolve_next(track_count, backward, false, &[]), current);
    }

    /// Property: sequencing under a fixed shuffle order also round-trips
    #[test]
    fn shuffle_sequencing_round_trips(
        track_count in 1usize..200,
        seed in any::<u64>(),
        offset in any::<usize>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let order = sequencer::generate_shuffle_order(track_count, &mut rng);
        let current = offset % track_count;

        let forward = sequencer::resolve_next(track_count, current, true, &order);
        prop_assert_eq!(
            sequencer::resolve_previous(track_count, forward, true, &order),
            current
        );
    }

    /// Property: resolved indices always stay inside the catalog
    #[test]
    fn sequencing_stays_in_bounds(
        track_count in 1usize..300,
        offset in any::<usize>(),
        shuffled in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let order = sequencer::generate_shuffle_order(track_count, &mut rng);
        let current = offset % track_count;

        let next = sequencer::resolve_next(track_count, current, shuffled, &order);
        let prev = sequencer::resolve_previous(track_count, current, shuffled, &order);

        prop_assert!(next < track_count);
        prop_assert!(prev < track_count);
    }

    /// Property: mute then unmute restores the exact pre-mute volume
    #[test]
    fn mute_unmute_is_inverse(percent in 1u8..=100) {
        let mut engine = PlaybackEngine::with_seed(catalog_of(3), Box::new(SilentDevice), 0);
        engine.set_volume(percent).unwrap();
        let before = engine.volume();

        engine.toggle_mute();
        prop_assert_eq!(engine.volume(), 0.0);
        prop_assert!(engine.is_muted());

        engine.toggle_mute();
        prop_assert_eq!(engine.volume(), before);
    }

    /// Property: volume out of the 0-100 domain is rejected without
    /// mutating state
    #[test]
    fn invalid_volume_never_mutates(percent in 101u8..=u8::MAX) {
        let mut engine = PlaybackEngine::with_seed(catalog_of(3), Box::new(SilentDevice), 0);
        engine.set_volume(40).unwrap();
        engine.drain_events();

        prop_assert!(engine.set_volume(percent).is_err());
        prop_assert_eq!(engine.volume(), 0.4);
        prop_assert!(!engine.has_pending_events());
    }

    /// Property: a seeded engine generates the same traversal order every
    /// time, so shuffle behavior is reproducible
    #[test]
    fn seeded_shuffle_is_deterministic(track_count in 1usize..100, seed in any::<u64>()) {
        let mut a = PlaybackEngine::with_seed(catalog_of(track_count), Box::new(SilentDevice), seed);
        let mut b = PlaybackEngine::with_seed(catalog_of(track_count), Box::new(SilentDevice), seed);

        a.toggle_shuffle();
        b.toggle_shuffle();

        prop_assert_eq!(a.shuffle_order(), b.shuffle_order());
    }

    /// Property: empty-catalog commands never move the selection away
    /// from "nothing selected"
    #[test]
    fn empty_catalog_commands_never_select(commands in prop::collection::vec(0u8..3, 1..20)) {
        let mut engine = PlaybackEngine::with_seed(Catalog::empty(), Box::new(SilentDevice), 0);

        for command in commands {
            match command {
                0 => { engine.next().ok(); }
                1 => { engine.previous().ok(); }
                _ => { engine.toggle_play_pause().ok(); }
            }
            prop_assert_eq!(engine.current_index(), None);
        }
    }
}
