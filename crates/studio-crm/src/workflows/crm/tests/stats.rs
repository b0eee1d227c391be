use chrono::{Duration, NaiveDate, TimeZone, Utc};

use crate::workflows::crm::domain::{Lead, LeadId, LeadIntake, LeadStatus};
use crate::workflows::crm::stats::compute;
use crate::workflows::quiz::SiteCategory;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 17).expect("valid date")
}

fn lead_on(date: NaiveDate, status: LeadStatus, result: Option<SiteCategory>) -> Lead {
    let created = Utc
        .from_utc_datetime(&date.and_hms_opt(14, 30, 0).expect("valid time"));
    let result_label = result.map(|category| category.label()).unwrap_or("none");
    Lead {
        id: LeadId(format!("lead-{date}-{}-{result_label}", status.label())),
        contact: LeadIntake {
            name: "Cliente Exemplo".to_string(),
            email: "cliente@exemplo.com.br".to_string(),
            phone: "+55 11 90000-0000".to_string(),
            ..LeadIntake::default()
        },
        created_at: created,
        updated_at: created,
        status,
        quiz_answers: None,
        quiz_result: result,
        assigned_to: None,
        follow_up_date: None,
        tags: vec!["quiz".to_string()],
        interactions: Vec::new(),
        source: "quiz".to_string(),
    }
}

#[test]
fn empty_collection_produces_zeroed_stats() {
    let stats = compute(&[], today());
    assert_eq!(stats.total_leads, 0);
    assert_eq!(stats.new_leads_today, 0);
    assert_eq!(stats.conversion_rate, 0.0);
    assert_eq!(stats.popular_quiz_result, "Nenhum");
    assert_eq!(stats.leads_per_day.len(), 7);
    assert!(stats.leads_per_day.iter().all(|day| day.count == 0));
    assert_eq!(stats.leads_by_status.len(), 5);
    assert!(stats.leads_by_status.iter().all(|entry| entry.count == 0));
}

#[test]
fn conversion_rate_counts_converted_share() {
    let leads = vec![
        lead_on(today(), LeadStatus::Converted, None),
        lead_on(today(), LeadStatus::New, None),
        lead_on(today() - Duration::days(1), LeadStatus::Lost, None),
        lead_on(today() - Duration::days(2), LeadStatus::Converted, None),
    ];

    let stats = compute(&leads, today());
    assert_eq!(stats.total_leads, 4);
    assert_eq!(stats.new_leads_today, 2);
    assert!((stats.conversion_rate - 50.0).abs() < f64::EPSILON);

    let converted = stats
        .leads_by_status
        .iter()
        .find(|entry| entry.status == LeadStatus::Converted)
        .expect("converted bucket present");
    assert_eq!(converted.count, 2);
}

#[test]
fn status_breakdown_covers_every_status_in_order() {
    let stats = compute(&[lead_on(today(), LeadStatus::InProgress, None)], today());
    let statuses: Vec<LeadStatus> = stats
        .leads_by_status
        .iter()
        .map(|entry| entry.status)
        .collect();
    assert_eq!(statuses, LeadStatus::ordered().to_vec());
}

#[test]
fn per_day_window_is_seven_days_oldest_first() {
    let leads = vec![
        lead_on(today(), LeadStatus::New, None),
        lead_on(today() - Duration::days(6), LeadStatus::New, None),
        // Outside the window; must not be counted.
        lead_on(today() - Duration::days(7), LeadStatus::New, None),
    ];

    let stats = compute(&leads, today());
    assert_eq!(stats.leads_per_day.len(), 7);
    assert_eq!(stats.leads_per_day[0].date, today() - Duration::days(6));
    assert_eq!(stats.leads_per_day[0].count, 1);
    assert_eq!(stats.leads_per_day[6].date, today());
    assert_eq!(stats.leads_per_day[6].count, 1);
    let total_in_window: usize = stats.leads_per_day.iter().map(|day| day.count).sum();
    assert_eq!(total_in_window, 2);
}

#[test]
fn popular_result_ties_keep_the_first_encountered() {
    let leads = vec![
        lead_on(today(), LeadStatus::New, Some(SiteCategory::Portfolio)),
        lead_on(today(), LeadStatus::New, Some(SiteCategory::Ecommerce)),
        lead_on(today(), LeadStatus::New, None),
    ];

    let stats = compute(&leads, today());
    assert_eq!(stats.popular_quiz_result, "portfolio");
}

#[test]
fn popular_result_is_nenhum_without_quiz_results() {
    let stats = compute(&[lead_on(today(), LeadStatus::New, None)], today());
    assert_eq!(stats.popular_quiz_result, "Nenhum");
}

#[test]
fn compute_is_idempotent_over_an_unchanged_collection() {
    let leads = vec![
        lead_on(today(), LeadStatus::Converted, Some(SiteCategory::Business)),
        lead_on(today() - Duration::days(3), LeadStatus::New, None),
    ];
    assert_eq!(compute(&leads, today()), compute(&leads, today()));
}
