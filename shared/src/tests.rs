#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use time::{macros::datetime, Duration, OffsetDateTime};
    use crate::{
        Arena, ArenaAction, ArenaConfig, ArenaError, ArtworkId, RandomSource, RngSource,
        SimulatedFeed, Standings, Transition, VoteButtonState, VoteTally, VoterOrigin, REGIONS,
    };

    const START: OffsetDateTime = datetime!(2025-06-01 12:00 UTC);

    struct Scripted(VecDeque<u64>);

    impl Scripted {
        fn new(values: &[u64]) -> Self {
            Self(values.iter().copied().collect())
        }

        fn next(&mut self) -> u64 {
            self.0.pop_front().expect("scripted source exhausted")
        }
    }

    impl RandomSource for Scripted {
        fn between(&mut self, low: u64, high: u64) -> u64 {
            self.next().clamp(low, high)
        }

        fn index(&mut self, len: usize) -> usize {
            self.next() as usize % len
        }
    }

    fn arena() -> Arena {
        Arena::new(ArenaConfig::STANDARD, START)
    }

    fn external(a: &mut Arena, artwork: ArtworkId) -> Transition {
        a.apply(ArenaAction::ExternalVote { artwork, region: REGIONS[1], at: START })
    }

    fn user_vote(a: &mut Arena, artwork: ArtworkId) -> (Transition, Transition) {
        let begun = a.apply(ArenaAction::BeginVote { artwork });
        let done = a.apply(ArenaAction::CompleteVote { at: START });
        (begun, done)
    }

    fn ticks(a: &mut Arena, n: u32) -> Option<Transition> {
        (0..n).map(|_| a.apply(ArenaAction::Tick { at: START })).last()
    }

    #[test]
    fn test_initial_state() {
        let a = arena();
        assert_eq!(*a.tally(), VoteTally::new(0, 0));
        assert_eq!(a.round().number, 1);
        assert_eq!(a.round().remaining, Duration::seconds(3600));
        assert_eq!(a.user_vote(), None);
        assert!(a.log().is_empty());
        assert!(a.can_vote());
    }

    #[test]
    fn test_user_vote_scenario() {
        let mut a = arena();
        assert_eq!(user_vote(&mut a, ArtworkId::One), (Transition::VoteSubmitted, Transition::UserVoteRecorded));

        assert_eq!(*a.tally(), VoteTally::new(1, 0));
        assert_eq!(a.user_vote(), Some(ArtworkId::One));
        assert!(a.has_voted() && !a.can_vote());
        assert_eq!(a.log().len(), 1);
        let event = a.log().latest().unwrap();
        assert_eq!(event.origin, VoterOrigin::Local);
        assert_eq!(event.artwork, ArtworkId::One);
        assert_eq!(a.button_state(ArtworkId::One), VoteButtonState::Voted);
        assert_eq!(a.button_state(ArtworkId::Two), VoteButtonState::Closed);
        assert!(a.button_state(ArtworkId::One).is_disabled());
        assert!(a.button_state(ArtworkId::Two).is_disabled());
    }

    #[test]
    fn test_repeat_votes_are_ignored() {
        let mut a = arena();
        user_vote(&mut a, ArtworkId::Two);
        assert_eq!(user_vote(&mut a, ArtworkId::One), (Transition::Ignored, Transition::Ignored));
        assert_eq!(user_vote(&mut a, ArtworkId::Two), (Transition::Ignored, Transition::Ignored));
        assert_eq!(*a.tally(), VoteTally::new(0, 1));
        assert_eq!(a.user_vote(), Some(ArtworkId::Two));
        assert_eq!(a.log().len(), 1);
    }

    #[test]
    fn test_vote_in_flight_blocks_second_submission() {
        let mut a = arena();
        assert_eq!(a.apply(ArenaAction::BeginVote { artwork: ArtworkId::One }), Transition::VoteSubmitted);
        assert!(a.is_submitting());
        assert_eq!(a.button_state(ArtworkId::Two), VoteButtonState::Submitting);
        assert_eq!(a.apply(ArenaAction::BeginVote { artwork: ArtworkId::Two }), Transition::Ignored);
        assert_eq!(*a.tally(), VoteTally::new(0, 0));

        assert_eq!(a.apply(ArenaAction::CompleteVote { at: START }), Transition::UserVoteRecorded);
        assert_eq!(a.apply(ArenaAction::CompleteVote { at: START }), Transition::Ignored);
        assert_eq!(*a.tally(), VoteTally::new(1, 0));
        assert!(!a.is_submitting());
    }

    #[test]
    fn test_timers_keep_running_during_submission() {
        let mut a = arena();
        a.apply(ArenaAction::BeginVote { artwork: ArtworkId::Two });
        external(&mut a, ArtworkId::One);
        ticks(&mut a, 1);
        external(&mut a, ArtworkId::Two);
        a.apply(ArenaAction::CompleteVote { at: START });

        assert_eq!(*a.tally(), VoteTally::new(1, 2));
        assert_eq!(a.round().remaining, Duration::seconds(3599));
        let origins: Vec<_> = a.log().iter().map(|e| e.origin.is_local()).collect();
        assert_eq!(origins, vec![true, false, false]);
    }

    #[test]
    fn test_round_expiry_scenario() {
        let mut a = arena();
        (0..5).for_each(|_| { external(&mut a, ArtworkId::One); });
        (0..3).for_each(|_| { external(&mut a, ArtworkId::Two); });
        user_vote(&mut a, ArtworkId::One);
        ticks(&mut a, 3599);
        assert_eq!(a.round().remaining, Duration::seconds(1));
        assert_eq!(a.round().number, 1);

        let closing = START + Duration::hours(1);
        match a.apply(ArenaAction::Tick { at: closing }) {
            Transition::RoundReset(summary) => {
                assert_eq!(summary.number, 1);
                assert_eq!(summary.tally, VoteTally::new(6, 3));
                assert_eq!(summary.user_vote, Some(ArtworkId::One));
            }
            other => panic!("expected round reset, got {:?}", other),
        }

        assert_eq!(*a.tally(), VoteTally::new(0, 0));
        assert_eq!(a.round().number, 2);
        assert_eq!(a.round().remaining, Duration::seconds(3600));
        assert_eq!(a.round().started_at, closing);
        assert!(a.log().is_empty());
        assert_eq!(a.user_vote(), None);
        assert!(a.can_vote());
    }

    #[test]
    fn test_explicit_reset_increments_by_one() {
        let mut a = arena();
        for expected in 2..=4 {
            assert!(matches!(a.apply(ArenaAction::ResetRound { at: START }), Transition::RoundReset(_)));
            assert_eq!(a.round().number, expected);
        }
    }

    #[test]
    fn test_pending_vote_lands_in_next_round() {
        let mut a = arena();
        a.apply(ArenaAction::BeginVote { artwork: ArtworkId::Two });
        a.apply(ArenaAction::ResetRound { at: START });
        assert!(a.is_submitting());
        assert_eq!(a.apply(ArenaAction::CompleteVote { at: START }), Transition::UserVoteRecorded);
        assert_eq!(a.round().number, 2);
        assert_eq!(*a.tally(), VoteTally::new(0, 1));
        assert_eq!(a.user_vote(), Some(ArtworkId::Two));
    }

    #[test]
    fn test_user_can_vote_again_next_round() {
        let mut a = arena();
        user_vote(&mut a, ArtworkId::One);
        a.apply(ArenaAction::ResetRound { at: START });
        assert_eq!(user_vote(&mut a, ArtworkId::Two).1, Transition::UserVoteRecorded);
        assert_eq!(*a.tally(), VoteTally::new(0, 1));
    }

    #[test]
    fn test_voter_log_is_bounded_newest_first() {
        let mut a = arena();
        for i in 0..25 {
            let artwork = if i % 2 == 0 { ArtworkId::One } else { ArtworkId::Two };
            a.apply(ArenaAction::ExternalVote {
                artwork,
                region: REGIONS[i % REGIONS.len()],
                at: START + Duration::seconds(i as i64),
            });
            assert!(a.log().len() <= 10);
            assert_eq!(a.log().latest().unwrap().at, START + Duration::seconds(i as i64));
        }
        assert_eq!(a.log().len(), 10);
        assert_eq!(a.tally().total(), 25);
        let times: Vec<_> = a.log().iter().map(|e| e.at).collect();
        assert!(times.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_tally_matches_accepted_events() {
        let mut a = arena();
        let mut rng = RngSource::seeded(7);
        let feed = SimulatedFeed::new(a.config());
        let mut accepted = VoteTally::default();
        for step in 0..200 {
            let action = feed.next_vote(&mut rng, START);
            if let ArenaAction::ExternalVote { artwork, .. } = action {
                accepted.increment(artwork);
            }
            a.apply(action);
            if step == 120 {
                let (_, done) = user_vote(&mut a, ArtworkId::Two);
                assert_eq!(done, Transition::UserVoteRecorded);
                accepted.increment(ArtworkId::Two);
            }
        }
        assert_eq!(*a.tally(), accepted);
    }

    #[test]
    fn test_standings() {
        let empty = Standings::from_tally(&VoteTally::new(0, 0));
        assert_eq!(empty.total, 0);
        assert_eq!((empty.first_share, empty.second_share), (50.0, 50.0));
        assert_eq!(empty.leader, None);
        assert!(!empty.is_leading(ArtworkId::One) && !empty.is_leading(ArtworkId::Two));

        let tied = Standings::from_tally(&VoteTally::new(4, 4));
        assert_eq!(tied.leader, None);

        let s = Standings::from_tally(&VoteTally::new(1, 2));
        assert_eq!(s.total, 3);
        assert_eq!(s.leader, Some(ArtworkId::Two));
        assert!((s.share(ArtworkId::One) + s.share(ArtworkId::Two) - 100.0).abs() < 1e-9);

        let shutout = Standings::from_tally(&VoteTally::new(7, 0));
        assert_eq!((shutout.first_share, shutout.second_share), (100.0, 0.0));
    }

    #[test]
    fn test_feed_uses_random_source() {
        let feed = SimulatedFeed::new(&ArenaConfig::STANDARD);
        let mut rng = Scripted::new(&[3_200, 1, 4, 0, 14]);

        assert_eq!(feed.next_delay(&mut rng), Duration::milliseconds(3_200));
        assert_eq!(
            feed.next_vote(&mut rng, START),
            ArenaAction::ExternalVote { artwork: ArtworkId::Two, region: REGIONS[4], at: START }
        );
        assert_eq!(
            feed.next_vote(&mut rng, START),
            ArenaAction::ExternalVote { artwork: ArtworkId::One, region: REGIONS[14], at: START }
        );
    }

    #[test]
    fn test_feed_delay_bounds() {
        let feed = SimulatedFeed::new(&ArenaConfig::STANDARD);
        let mut rng = RngSource::seeded(42);
        for _ in 0..500 {
            let delay = feed.next_delay(&mut rng);
            assert!(delay >= Duration::seconds(2) && delay <= Duration::seconds(5), "{:?}", delay);
        }
    }

    #[test]
    fn test_seeded_sources_are_deterministic() {
        let feed = SimulatedFeed::new(&ArenaConfig::STANDARD);
        let (mut a, mut b) = (RngSource::seeded(9), RngSource::seeded(9));
        for _ in 0..20 {
            assert_eq!(feed.next_vote(&mut a, START), feed.next_vote(&mut b, START));
            assert_eq!(feed.next_delay(&mut a), feed.next_delay(&mut b));
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(ArenaConfig::STANDARD.validate().is_ok());

        let bad = |f: fn(&mut ArenaConfig)| {
            let mut c = ArenaConfig::STANDARD;
            f(&mut c);
            c.validate().unwrap_err()
        };
        assert_eq!(bad(|c| c.round_duration = Duration::ZERO), ArenaError::ZeroRoundDuration);
        assert_eq!(bad(|c| c.tick = Duration::ZERO), ArenaError::InvalidTick);
        assert_eq!(bad(|c| c.tick = Duration::hours(2)), ArenaError::InvalidTick);
        assert_eq!(
            bad(|c| c.feed_min = Duration::seconds(6)),
            ArenaError::InvalidFeedBounds { min_ms: 6_000, max_ms: 5_000 }
        );
        assert_eq!(bad(|c| c.log_capacity = 0), ArenaError::ZeroLogCapacity);
    }

    #[test]
    fn test_artwork_ids() {
        assert_eq!(ArtworkId::try_from(1u8), Ok(ArtworkId::One));
        assert_eq!(ArtworkId::try_from(2u8), Ok(ArtworkId::Two));
        assert_eq!(ArtworkId::try_from(3u8), Err(ArenaError::UnknownArtwork(3)));
        assert_eq!(ArtworkId::One.other(), ArtworkId::Two);
        assert_eq!(crate::artwork(ArtworkId::Two).id, ArtworkId::Two);

        assert_eq!(serde_json::to_string(&ArtworkId::Two).unwrap(), "2");
        assert!(serde_json::from_str::<ArtworkId>("0").is_err());
        assert_eq!(
            serde_json::to_string(&VoteTally::new(5, 3)).unwrap(),
            r#"{"first":5,"second":3}"#
        );
    }
}
