use triphop_core::{CoreError, ServiceId};

use crate::calendar::{ServiceCalendar, ServicePeriod};
use crate::error::ScheduleError;
use crate::timezone::{Timezone, TimezonePeriod};

mod timezone_period {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        let err = TimezonePeriod::new(100, 50, 0).unwrap_err();
        assert_eq!(err, CoreError::InvertedPeriod { begin: 100, end: 50 });
    }

    #[test]
    fn contains_is_inclusive_both_ends() {
        let p = TimezonePeriod::new(0, 86_400, -8 * 3_600).unwrap();
        assert!(p.contains(0));
        assert!(p.contains(86_400));
        assert!(!p.contains(86_401));
    }

    #[test]
    fn datum_midnight_west_of_utc() {
        // UTC-8: absolute t=0 (1970-01-01T00:00:00Z) is 1969-12-31T16:00:00
        // local, so local midnight is 8h earlier in absolute time.
        let p = TimezonePeriod::new(-1_000_000, 1_000_000, -8 * 3_600).unwrap();
        assert_eq!(p.datum_midnight(0), -8 * 3_600);
    }

    #[test]
    fn datum_midnight_east_of_utc() {
        let p = TimezonePeriod::new(-1_000_000, 1_000_000, 9 * 3_600).unwrap();
        // 09:00 local on 1970-01-01 → local midnight is 9h earlier in absolute time.
        assert_eq!(p.datum_midnight(0), -9 * 3_600);
    }

    #[test]
    fn time_since_midnight_tracks_offset() {
        let p = TimezonePeriod::new(-1_000_000, 1_000_000, -8 * 3_600).unwrap();
        assert_eq!(p.time_since_midnight(0), 8 * 3_600);
    }
}

mod timezone {
    use super::*;

    fn pst_then_pdt() -> Timezone {
        let mut tz = Timezone::new();
        tz.add_period(TimezonePeriod::new(0, 999, -8 * 3_600).unwrap())
            .unwrap();
        tz.add_period(TimezonePeriod::new(1_000, 2_000, -7 * 3_600).unwrap())
            .unwrap();
        tz
    }

    #[test]
    fn add_period_rejects_overlap() {
        let mut tz = Timezone::new();
        tz.add_period(TimezonePeriod::new(0, 1_000, 0).unwrap())
            .unwrap();
        let err = tz
            .add_period(TimezonePeriod::new(999, 2_000, 3_600).unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::Core(CoreError::OverlappingPeriods {
                prev_end: 1_000,
                begin: 999,
            })
        );
    }

    #[test]
    fn add_period_accepts_back_to_back() {
        let mut tz = Timezone::new();
        tz.add_period(TimezonePeriod::new(0, 1_000, 0).unwrap())
            .unwrap();
        assert!(tz
            .add_period(TimezonePeriod::new(1_001, 2_000, 3_600).unwrap())
            .is_ok());
    }

    #[test]
    fn period_of_picks_correct_side_of_transition() {
        let tz = pst_then_pdt();
        assert_eq!(tz.utc_offset(500), Some(-8 * 3_600));
        assert_eq!(tz.utc_offset(1_500), Some(-7 * 3_600));
    }

    #[test]
    fn period_of_none_outside_coverage() {
        let tz = pst_then_pdt();
        assert_eq!(tz.utc_offset(10_000), None);
        assert_eq!(tz.time_since_midnight(-5), None);
    }

    #[test]
    fn empty_timezone_has_no_periods() {
        let tz = Timezone::new();
        assert!(tz.is_empty());
        assert_eq!(tz.len(), 0);
        assert_eq!(tz.utc_offset(0), None);
    }
}

mod service_period {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        let err = ServicePeriod::new(100, 50, vec![]).unwrap_err();
        assert_eq!(err, CoreError::InvertedPeriod { begin: 100, end: 50 });
    }

    #[test]
    fn has_service_checks_membership() {
        let weekday = ServiceId(1);
        let weekend = ServiceId(2);
        let p = ServicePeriod::new(0, 86_400, vec![weekday]).unwrap();
        assert!(p.has_service(weekday));
        assert!(!p.has_service(weekend));
    }

    #[test]
    fn normalize_time_matches_timezone_period_shape() {
        let p = ServicePeriod::new(-1_000_000, 1_000_000, vec![]).unwrap();
        assert_eq!(p.datum_midnight(-8 * 3_600), -8 * 3_600);
        assert_eq!(p.normalize_time(-8 * 3_600, 0), 8 * 3_600);
    }
}

mod service_calendar {
    use super::*;

    const WEEKDAY: ServiceId = ServiceId(1);
    const WEEKEND: ServiceId = ServiceId(2);

    fn three_days() -> ServiceCalendar {
        // Day 0: weekday service. Day 1: no service. Day 2: weekend service.
        let mut cal = ServiceCalendar::new();
        cal.add_period(ServicePeriod::new(0, 86_399, vec![WEEKDAY]).unwrap())
            .unwrap();
        cal.add_period(ServicePeriod::new(86_400, 172_799, vec![]).unwrap())
            .unwrap();
        cal.add_period(ServicePeriod::new(172_800, 259_199, vec![WEEKEND]).unwrap())
            .unwrap();
        cal
    }

    #[test]
    fn add_period_rejects_overlap() {
        let mut cal = ServiceCalendar::new();
        cal.add_period(ServicePeriod::new(0, 1_000, vec![]).unwrap())
            .unwrap();
        let err = cal
            .add_period(ServicePeriod::new(500, 2_000, vec![]).unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::Core(CoreError::OverlappingPeriods {
                prev_end: 1_000,
                begin: 500,
            })
        );
    }

    #[test]
    fn period_of_or_after_and_before() {
        let cal = three_days();
        assert_eq!(cal.period_of_or_after(50).unwrap().begin_time, 0);
        assert_eq!(cal.period_of_or_after(90_000).unwrap().begin_time, 86_400);
        assert_eq!(cal.period_of_or_after(999_999), None);

        assert_eq!(cal.period_of_or_before(90_000).unwrap().begin_time, 86_400);
        assert_eq!(cal.period_of_or_before(-1), None);
    }

    #[test]
    fn next_period_with_service_skips_service_free_day() {
        let cal = three_days();
        let (idx, period) = cal.next_period_with_service(1, WEEKEND).unwrap();
        assert_eq!(idx, 2);
        assert_eq!(period.begin_time, 172_800);
    }

    #[test]
    fn next_period_with_service_none_when_exhausted() {
        let cal = three_days();
        assert!(cal.next_period_with_service(1, WEEKDAY).is_none());
    }

    #[test]
    fn prev_period_with_service_scans_backward() {
        let cal = three_days();
        let (idx, period) = cal.prev_period_with_service(1, WEEKDAY).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(period.begin_time, 0);
    }

    #[test]
    fn prev_period_with_service_none_when_exhausted() {
        let cal = three_days();
        assert!(cal.prev_period_with_service(1, WEEKEND).is_none());
    }

    #[test]
    fn empty_calendar_has_no_periods() {
        let cal = ServiceCalendar::new();
        assert!(cal.is_empty());
        assert_eq!(cal.len(), 0);
        assert_eq!(cal.period_of_or_after(0), None);
    }
}
