use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::workflows::quiz::SiteCategory;

use super::domain::{Lead, LeadStatus};

/// Shown when no lead carries a quiz result yet.
const NO_POPULAR_RESULT: &str = "Nenhum";

/// Number of calendar days (including today) in the per-day breakdown.
const PER_DAY_WINDOW: i64 = 7;

/// Derived dashboard metrics; never persisted, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_leads: usize,
    pub new_leads_today: usize,
    pub conversion_rate: f64,
    pub popular_quiz_result: String,
    pub leads_per_day: Vec<DailyLeadCount>,
    pub leads_by_status: Vec<StatusCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyLeadCount {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: LeadStatus,
    pub count: usize,
}

/// Pure aggregation over the current lead collection. `today` is the UTC
/// calendar date; callers pass `Utc::now().date_naive()`.
pub fn compute(leads: &[Lead], today: NaiveDate) -> DashboardStats {
    let total_leads = leads.len();

    let new_leads_today = leads
        .iter()
        .filter(|lead| lead.created_at.date_naive() == today)
        .count();

    let leads_by_status = LeadStatus::ordered()
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: leads.iter().filter(|lead| lead.status == status).count(),
        })
        .collect();

    let leads_per_day = (0..PER_DAY_WINDOW)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DailyLeadCount {
                date,
                count: leads
                    .iter()
                    .filter(|lead| lead.created_at.date_naive() == date)
                    .count(),
            }
        })
        .collect();

    // Single accumulation pass in collection order; only a strictly
    // greater count replaces the leader, so ties keep the first result
    // encountered.
    let mut result_counts: Vec<(SiteCategory, usize)> = Vec::new();
    for lead in leads {
        if let Some(result) = lead.quiz_result {
            match result_counts
                .iter_mut()
                .find(|(category, _)| *category == result)
            {
                Some((_, count)) => *count += 1,
                None => result_counts.push((result, 1)),
            }
        }
    }
    let mut popular_quiz_result = NO_POPULAR_RESULT.to_string();
    let mut max_count = 0;
    for (category, count) in &result_counts {
        if *count > max_count {
            max_count = *count;
            popular_quiz_result = category.label().to_string();
        }
    }

    let converted = leads
        .iter()
        .filter(|lead| lead.status == LeadStatus::Converted)
        .count();
    let conversion_rate = if total_leads > 0 {
        converted as f64 / total_leads as f64 * 100.0
    } else {
        0.0
    };

    DashboardStats {
        total_leads,
        new_leads_today,
        conversion_rate,
        popular_quiz_result,
        leads_per_day,
        leads_by_status,
    }
}
