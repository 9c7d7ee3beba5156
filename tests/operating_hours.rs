use boiler_fuel_switch::sampling::operating_hours::{
    sample_daily_operating_hours, OperatingHoursInput, SamplerError, SERIES_DAYS,
};
use chrono::NaiveDate;

#[test]
fn series_has_365_consecutive_days_from_reference_date() {
    let input = OperatingHoursInput {
        annual_operating_hours: 6500.0,
        seed: Some(42),
    };
    let series = sample_daily_operating_hours(&input).expect("valid input");
    assert_eq!(series.len(), SERIES_DAYS);
    assert_eq!(
        series[0].date,
        NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date")
    );
    assert_eq!(
        series[SERIES_DAYS - 1].date,
        NaiveDate::from_ymd_opt(2023, 12, 31).expect("valid date")
    );
    for pair in series.windows(2) {
        assert_eq!(pair[0].date.succ_opt().expect("valid date"), pair[1].date);
    }
}

#[test]
fn fixed_seed_reproduces_identical_series() {
    let input = OperatingHoursInput {
        annual_operating_hours: 6500.0,
        seed: Some(7),
    };
    let first = sample_daily_operating_hours(&input).expect("valid input");
    let second = sample_daily_operating_hours(&input).expect("valid input");
    assert_eq!(first, second);
}

#[test]
fn unseeded_series_still_has_full_length() {
    let input = OperatingHoursInput {
        annual_operating_hours: 6500.0,
        seed: None,
    };
    let series = sample_daily_operating_hours(&input).expect("valid input");
    assert_eq!(series.len(), SERIES_DAYS);
}

#[test]
fn seeded_runs_average_close_to_daily_mean() {
    let annual = 6500.0;
    let daily_mean = annual / SERIES_DAYS as f64;
    let mut sum = 0.0;
    let mut count = 0usize;
    for seed in 0..10_000u64 {
        let input = OperatingHoursInput {
            annual_operating_hours: annual,
            seed: Some(seed),
        };
        let series = sample_daily_operating_hours(&input).expect("valid input");
        assert_eq!(series.len(), SERIES_DAYS);
        sum += series.iter().map(|s| s.hours).sum::<f64>();
        count += series.len();
    }
    let mean = sum / count as f64;
    assert!(
        ((mean - daily_mean) / daily_mean).abs() < 0.01,
        "mean={mean} expected≈{daily_mean}"
    );
}

#[test]
fn annual_hours_out_of_domain_rejected() {
    for bad in [0.0, -100.0, 9000.0] {
        let input = OperatingHoursInput {
            annual_operating_hours: bad,
            seed: Some(1),
        };
        let result = sample_daily_operating_hours(&input);
        assert!(
            matches!(result, Err(SamplerError::HoursOutOfRange(h)) if h == bad),
            "hours={bad}"
        );
    }
}
