use crate::infra::{InMemoryCrmStorage, RecordingSyncDispatcher};
use clap::Args;
use std::collections::BTreeMap;
use std::sync::Arc;
use studio_crm::error::AppError;
use studio_crm::workflows::crm::{
    export_leads_csv, stats, CrmConfigUpdate, InteractionDraft, InteractionKind, LeadIntake,
    LeadStatus, LeadStore,
};
use studio_crm::workflows::quiz::{
    ensure_catalog_integrity, question_catalog, recommendation_for, score, AnswerSet,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Pretend the external CRM integration is configured and show the
    /// sync jobs it would receive.
    #[arg(long)]
    pub(crate) with_sync: bool,
    /// Print the full question catalog before scoring.
    #[arg(long)]
    pub(crate) list_questions: bool,
}

fn demo_answers() -> AnswerSet {
    [
        (1u8, "1b"),
        (2, "2b"),
        (3, "3b"),
        (4, "4c"),
        (5, "5b"),
        (6, "6d"),
    ]
    .into_iter()
    .map(|(question, option)| (question, option.to_string()))
    .collect::<BTreeMap<u8, String>>()
}

fn demo_intake() -> LeadIntake {
    LeadIntake {
        name: "Dr. Helena Duarte".to_string(),
        email: "helena@exemplo.com.br".to_string(),
        phone: "+55 11 98888-7777".to_string(),
        company: Some("Clínica Duarte".to_string()),
        business_type: Some("saúde".to_string()),
        how_found: Some("indicação".to_string()),
        budget: Some("R$ 3.500 - R$ 6.000".to_string()),
        deadline: Some("1 mês".to_string()),
        notes: None,
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    ensure_catalog_integrity()?;

    println!("Studio CRM demo");

    if args.list_questions {
        println!("\nQuestion catalog");
        for question in question_catalog() {
            println!("{}. {}", question.id, question.prompt);
            for option in question.options {
                println!("   [{}] {}", option.id, option.label);
            }
        }
    }

    let answers = demo_answers();
    let outcome = score(&answers);
    let recommendation = recommendation_for(outcome.category);

    println!("\nQuiz scoring");
    println!(
        "- {} answer(s) -> category '{}' with {} point(s){}",
        answers.len(),
        outcome.category.label(),
        outcome.top_score,
        if outcome.fallback_applied {
            " (count fallback applied)"
        } else {
            ""
        }
    );
    for tally in &outcome.tallies {
        println!("  - {}: {}", tally.category.label(), tally.points);
    }
    println!("- Recommended package: {}", recommendation.title);
    println!("  {} | {}", recommendation.price, recommendation.timeframe);
    println!("  {}", recommendation.recommendation);

    println!("\nLead lifecycle");
    let storage = Arc::new(InMemoryCrmStorage::default());
    let sync = Arc::new(RecordingSyncDispatcher::default());
    let store = LeadStore::open(storage, sync.clone()).await?;

    if args.with_sync {
        store
            .update_config(CrmConfigUpdate {
                api_url: Some("https://crm.example.com/api".to_string()),
                api_key: Some("demo-token".to_string()),
                sync_enabled: Some(true),
                ..CrmConfigUpdate::default()
            })
            .await?;
        println!("- External sync enabled against https://crm.example.com/api");
    }

    let lead = store.create(demo_intake()).await?;
    println!(
        "- Created lead {} ({}) with status '{}'",
        lead.id.0,
        lead.contact.name,
        lead.status.label()
    );

    let lead = store
        .attach_quiz_result(&lead.id, answers, outcome.category)
        .await?;
    println!(
        "- Attached quiz result '{}' -> tags {:?}",
        outcome.category.label(),
        lead.tags
    );

    let lead = store.set_status(&lead.id, LeadStatus::Contacted).await?;
    let lead = store
        .append_interaction(
            &lead.id,
            InteractionDraft {
                kind: InteractionKind::Call,
                description: "Primeiro contato por telefone".to_string(),
                by: "Marina".to_string(),
            },
        )
        .await?;
    let lead = store.set_status(&lead.id, LeadStatus::Converted).await?;
    println!(
        "- Worked the lead to '{}' with {} interaction(s)",
        lead.status.label(),
        lead.interactions.len()
    );

    let leads = store.get_all().await?;
    let dashboard = stats::compute(&leads, chrono::Utc::now().date_naive());
    println!("\nDashboard");
    println!("- Total leads: {}", dashboard.total_leads);
    println!("- New today: {}", dashboard.new_leads_today);
    println!("- Conversion rate: {:.0}%", dashboard.conversion_rate);
    println!("- Popular quiz result: {}", dashboard.popular_quiz_result);
    println!("- Leads by status:");
    for entry in &dashboard.leads_by_status {
        println!("  - {}: {}", entry.status.label(), entry.count);
    }

    println!("\nCSV export");
    match export_leads_csv(&leads) {
        Ok(csv) if csv.is_empty() => println!("(no leads to export)"),
        Ok(csv) => print!("{csv}"),
        Err(err) => println!("export unavailable: {err}"),
    }

    let jobs = sync.jobs();
    if jobs.is_empty() {
        println!("\nExternal sync: no jobs dispatched");
    } else {
        println!("\nExternal sync jobs");
        for job in jobs {
            println!(
                "- POST {}/leads (lead {})",
                job.target.api_url, job.lead.id.0
            );
        }
    }

    Ok(())
}
