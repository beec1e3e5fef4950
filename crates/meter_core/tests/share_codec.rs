use meter_core::{
    cost_per_second, decode, encode, share_url, AverageSalary, FixedClock, IndividualSalaries,
    MeetingSession, RateKind, SalaryConfig, SalaryList, ShareError, ShareParams,
};
use pretty_assertions::assert_eq;

fn started_session(config: &SalaryConfig, start: i64) -> MeetingSession {
    let mut session = MeetingSession::new();
    session.start(config, &FixedClock(start)).unwrap();
    session
}

fn average(attendees: u32, annual_salary: f64) -> SalaryConfig {
    SalaryConfig::Average(AverageSalary {
        attendees,
        annual_salary,
        hours_per_week: 40.0,
    })
}

#[test]
fn average_session_round_trips_end_to_end() {
    let config = average(3, 60_000.0);
    let session = started_session(&config, 1_000);

    let params = encode(&session, &config).unwrap();
    let shared = decode(&params).unwrap();

    assert_eq!(shared.start_epoch_millis, 1_000);
    match shared.config {
        SalaryConfig::Average(avg) => {
            assert_eq!(avg.attendees, 3);
            assert_eq!(avg.annual_salary, 60_000.0);
            assert_eq!(avg.hours_per_week, 40.0);
        }
        other => panic!("expected average config, got {other:?}"),
    }
}

#[test]
fn encoded_average_params_are_plain_values() {
    let config = average(3, 60_000.0);
    let params = encode(&started_session(&config, 1_700_000_000_123), &config).unwrap();

    let pairs: Vec<_> = params.iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("attendees", "3"),
            ("hours", "40"),
            ("mode", "average"),
            ("salary", "60000"),
            ("start", "1700000000123"),
        ]
    );
}

#[test]
fn individual_session_drops_placeholders_and_keeps_rate() {
    let config = SalaryConfig::Individual(IndividualSalaries {
        salaries: SalaryList::from_values([55.5, 0.0, 80.25]),
        rate_kind: RateKind::Hourly,
        hours_per_week: 37.5,
    });
    let params = encode(&started_session(&config, 42), &config).unwrap();
    assert_eq!(params.get("type"), Some("hourly"));
    assert_eq!(params.get("salaries"), Some("55.5,80.25"));
    assert_eq!(params.get("hours"), Some("37.5"));

    let shared = decode(&params).unwrap();
    assert!((cost_per_second(&shared.config) - cost_per_second(&config)).abs() < 1e-9);
    match shared.config {
        SalaryConfig::Individual(ind) => {
            assert_eq!(ind.salaries.entries(), &[55.5, 80.25, 0.0]);
            assert_eq!(ind.rate_kind, RateKind::Hourly);
        }
        other => panic!("expected individual config, got {other:?}"),
    }
}

#[test]
fn individual_without_salaries_omits_the_list() {
    // Started in average mode, then switched to an empty individual list.
    let session = started_session(&average(3, 60_000.0), 5);
    let config = SalaryConfig::Individual(IndividualSalaries::default());
    let params = encode(&session, &config).unwrap();
    assert_eq!(params.get("mode"), Some("individual"));
    assert_eq!(params.get("type"), Some("annual"));
    assert!(!params.contains("salaries"));

    let shared = decode(&params).unwrap();
    match shared.config {
        SalaryConfig::Individual(ind) => {
            assert_eq!(ind.salaries.entries(), &[0.0]);
            assert_eq!(ind.rate_kind, RateKind::Annual);
        }
        other => panic!("expected individual config, got {other:?}"),
    }
}

#[test]
fn unstarted_session_cannot_be_shared() {
    let config = average(3, 60_000.0);
    assert_eq!(
        encode(&MeetingSession::new(), &config),
        Err(ShareError::NotStarted)
    );
}

#[test]
fn decode_without_start_has_nothing_to_restore() {
    let params = ShareParams::from_query("mode=average&attendees=3&salary=60000");
    assert_eq!(decode(&params), Err(ShareError::MissingStart));

    let params = ShareParams::from_query("start=soon");
    assert_eq!(decode(&params), Err(ShareError::MissingStart));
}

#[test]
fn malformed_fields_fall_back_to_defaults() {
    let params =
        ShareParams::from_query("?start=1000&mode=bogus&attendees=many&salary=lots&hours=-2");
    let shared = decode(&params).unwrap();

    assert_eq!(shared.start_epoch_millis, 1_000);
    assert_eq!(
        shared.config,
        SalaryConfig::Average(AverageSalary {
            attendees: 5,
            annual_salary: 80_000.0,
            hours_per_week: 40.0,
        })
    );
}

#[test]
fn zero_salary_round_trips_to_a_zero_rate() {
    // Started with a real salary, then the salary box was cleared.
    let session = started_session(&average(5, 80_000.0), 1_000);
    let config = average(5, 0.0);
    let params = encode(&session, &config).unwrap();
    assert_eq!(params.get("salary"), Some("0"));

    let shared = decode(&params).unwrap();
    assert_eq!(shared.config, config);
    assert!((cost_per_second(&shared.config) - cost_per_second(&config)).abs() < 1e-9);
}

#[test]
fn negative_salary_is_kept_and_costs_nothing() {
    let shared = decode(&ShareParams::from_query("start=1&salary=-5")).unwrap();
    match &shared.config {
        SalaryConfig::Average(avg) => assert_eq!(avg.annual_salary, -5.0),
        other => panic!("expected average config, got {other:?}"),
    }
    assert_eq!(cost_per_second(&shared.config), 0.0);
}

#[test]
fn malformed_individual_entries_are_dropped() {
    let params =
        ShareParams::from_query("start=1&mode=individual&type=weekly&salaries=70000,abc,,-5,90000");
    let shared = decode(&params).unwrap();
    match shared.config {
        SalaryConfig::Individual(ind) => {
            assert_eq!(ind.salaries.entries(), &[70_000.0, 90_000.0, 0.0]);
            assert_eq!(ind.rate_kind, RateKind::Annual);
        }
        other => panic!("expected individual config, got {other:?}"),
    }
}

#[test]
fn share_url_replaces_query_and_parses_back() {
    let config = SalaryConfig::Individual(IndividualSalaries {
        salaries: SalaryList::from_values([60_000.0, 90_000.0]),
        rate_kind: RateKind::Annual,
        hours_per_week: 40.0,
    });
    let params = encode(&started_session(&config, 987_654_321), &config).unwrap();

    let url = share_url("https://example.com/meter/?old=1#top", &params).unwrap();
    assert_eq!(url.path(), "/meter/");
    assert_eq!(url.fragment(), None);

    let reparsed = ShareParams::from_link(url.as_str());
    assert_eq!(reparsed, params);
    assert_eq!(decode(&reparsed).unwrap().start_epoch_millis, 987_654_321);
}

#[test]
fn share_url_rejects_relative_page() {
    let params = ShareParams::from_query("start=1");
    assert!(matches!(
        share_url("not a url", &params),
        Err(ShareError::InvalidPageUrl { .. })
    ));
}
