//! Unit tests for triphop-core primitives.

#[cfg(test)]
mod service_id {
    use crate::ServiceId;

    #[test]
    fn none_is_minus_one() {
        assert_eq!(ServiceId::NONE.0, -1);
        assert!(ServiceId::NONE.is_none());
        assert!(ServiceId::default().is_none());
    }

    #[test]
    fn ordinary_ids_are_not_none() {
        assert!(!ServiceId(0).is_none());
        assert!(!ServiceId(42).is_none());
    }

    #[test]
    fn display() {
        assert_eq!(ServiceId(7).to_string(), "ServiceId(7)");
        assert_eq!(ServiceId::NONE.to_string(), "ServiceId(none)");
    }
}

#[cfg(test)]
mod trip_id {
    use crate::TripId;

    #[test]
    fn cheap_clone_shares_storage() {
        let a = TripId::new("A1");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "A1");
    }

    #[test]
    fn from_str_and_string() {
        let a: TripId = "A1".into();
        let b: TripId = String::from("A1").into();
        assert_eq!(a, b);
    }

    #[test]
    fn display() {
        let a = TripId::new("B2");
        assert_eq!(a.to_string(), "B2");
    }
}

#[cfg(test)]
mod time {
    use crate::SECONDS_PER_DAY;

    #[test]
    fn seconds_per_day_is_86400() {
        assert_eq!(SECONDS_PER_DAY, 86_400);
    }
}
