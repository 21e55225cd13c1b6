//! Unit tests for nav-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, SceneId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(SceneId(100) > SceneId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(SceneId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(SceneId(7).to_string(), "SceneId(7)");
    }
}

#[cfg(test)]
mod error {
    use crate::{NavError, SceneId};

    #[test]
    fn messages_name_the_subject() {
        let err = NavError::MissingGridData(SceneId(4));
        assert_eq!(err.to_string(), "no grid data for scene SceneId(4)");

        let io: NavError = std::io::Error::other("disk gone").into();
        assert!(io.to_string().contains("disk gone"));
    }
}

#[cfg(test)]
mod cell {
    use crate::{Facing, GridCell};

    #[test]
    fn offset_and_origin_roundtrip() {
        let origin = GridCell::new(40, -12);
        let local = GridCell::new(3, 5);
        let world = local.to_world(origin);
        assert_eq!(world, GridCell::new(43, -7));
        assert_eq!(world.to_local(origin), local);
    }

    #[test]
    fn diagonal_detection() {
        let c = GridCell::new(2, 2);
        assert!(c.is_diagonal_to(c.offset(1, 1)));
        assert!(c.is_diagonal_to(c.offset(-1, 1)));
        assert!(!c.is_diagonal_to(c.offset(1, 0)));
        assert!(!c.is_diagonal_to(c.offset(0, -1)));
    }

    #[test]
    fn facing_parse() {
        assert_eq!(Facing::parse("left"), Some(Facing::Left));
        assert_eq!(Facing::parse("sideways"), None);
        assert_eq!(Facing::default(), Facing::Down);
    }
}

#[cfg(test)]
mod time {
    use crate::{GameTime, Season, Weather};

    #[test]
    fn time_key() {
        assert_eq!(GameTime::new(8, 30, 0).time_key(), 830);
        assert_eq!(GameTime::new(14, 0, 59).time_key(), 1400);
        assert_eq!(GameTime::new(0, 5, 0).time_key(), 5);
    }

    #[test]
    fn plus_secs_carries() {
        let t = GameTime::new(9, 58, 30);
        assert_eq!(t.plus_secs(30), GameTime::new(9, 59, 0));
        assert_eq!(t.plus_secs(90), GameTime::new(10, 0, 0));
        assert_eq!(t.plus_secs(3_700), GameTime::new(11, 0, 10));
    }

    #[test]
    fn plus_secs_never_wraps_hour() {
        // Hour runs past 23 — the external clock owns day rollover.
        let t = GameTime::new(23, 59, 50);
        let later = t.plus_secs(20);
        assert_eq!(later, GameTime::new(24, 0, 10));
        assert!(later > t);
    }

    #[test]
    fn season_filter() {
        assert!(Season::Any.matches(Season::Winter));
        assert!(Season::Spring.matches(Season::Spring));
        assert!(!Season::Spring.matches(Season::Fall));
        assert_eq!(Season::parse("fall"), Some(Season::Fall));
        assert_eq!(Season::parse("autumn"), None);
    }

    #[test]
    fn weather_filter() {
        assert!(Weather::Any.matches(Weather::Storm));
        assert!(Weather::Rain.matches(Weather::Rain));
        assert!(!Weather::Rain.matches(Weather::Sunny));
        assert_eq!(Weather::parse("any"), Some(Weather::Any));
    }
}
