use crate::infra::{InMemoryAlertPublisher, InMemoryScreeningRepository};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tenant_screening::config::ScreeningConfig;
use tenant_screening::error::AppError;
use tenant_screening::screening::{
    evaluate, ApplicantId, BackgroundChecks, EmploymentChecks, FinancialChecks, IdentityChecks,
    ReferenceChecks, ScreeningCategory, ScreeningResult, ScreeningService, VerificationSnapshot,
};

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Path to a JSON verification snapshot
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
    /// Print the full result as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print every risk flag, not just the recommendation text.
    #[arg(long)]
    pub(crate) show_flags: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.snapshot)?;
    let snapshot: VerificationSnapshot = serde_json::from_str(&raw)?;
    let result = evaluate(&snapshot);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_result(&result, true);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryScreeningRepository::default());
    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let service = ScreeningService::new(repository, alerts.clone(), ScreeningConfig::default());

    println!("Tenant screening demo");
    for (applicant, label, snapshot) in demo_applicants() {
        let record = service.open(ApplicantId(applicant.to_string()))?;
        service.record_verification(&record.screening_id, snapshot)?;
        let result = service.evaluate(&record.screening_id)?;

        println!("\n{} ({}, {})", label, applicant, record.screening_id.0);
        render_result(&result, args.show_flags);
    }

    let events = alerts.events();
    if events.is_empty() {
        println!("\nRisk alerts: none dispatched");
    } else {
        println!("\nRisk alerts:");
        for alert in events {
            println!(
                "  - {} -> {} ({} risk)",
                alert.template,
                alert.screening_id.0,
                alert.risk_tier.label()
            );
        }
    }

    Ok(())
}

fn render_result(result: &ScreeningResult, show_flags: bool) {
    println!("  {}", result.summary());
    let breakdown = ScreeningCategory::ALL
        .iter()
        .map(|category| {
            format!(
                "{} {}/{}",
                category.label(),
                result.breakdown.get(*category),
                category.max_points()
            )
        })
        .collect::<Vec<_>>()
        .join(" | ");
    println!("  {breakdown}");

    if show_flags {
        for flag in &result.risk_flags {
            println!(
                "  [{}] {}: {}",
                flag.severity.label(),
                flag.category.label(),
                flag.description
            );
        }
    }

    for line in result.recommendation.lines() {
        println!("  > {line}");
    }
}

fn demo_applicants() -> Vec<(&'static str, &'static str, VerificationSnapshot)> {
    let verified = VerificationSnapshot {
        identity: IdentityChecks {
            identity_verified: true,
        },
        employment: EmploymentChecks {
            contract_verified: true,
            payslips_verified: true,
            payslip_months: 6,
            employer_contacted: true,
        },
        financial: FinancialChecks {
            income_verified: true,
            income_to_rent_ratio: Some(4.5),
            bank_account_verified: true,
            savings_verified: true,
        },
        references: ReferenceChecks {
            personal: 3,
            employment: 3,
            prior_landlord: 3,
            contacted: 9,
            positive: 9,
        },
        background: BackgroundChecks::default(),
    };

    let mut stretched = verified.clone();
    stretched.employment = EmploymentChecks {
        contract_verified: false,
        payslips_verified: true,
        payslip_months: 2,
        employer_contacted: false,
    };
    stretched.financial.income_to_rent_ratio = Some(2.7);
    stretched.financial.savings_verified = false;
    stretched.references = ReferenceChecks {
        personal: 1,
        employment: 1,
        prior_landlord: 0,
        contacted: 1,
        positive: 1,
    };

    let mut delinquent = verified.clone();
    delinquent.background.delinquency_registry_hit = true;

    vec![
        ("applicant-001", "Fully verified applicant", verified),
        ("applicant-002", "Stretched affordability", stretched),
        ("applicant-003", "Delinquency registry hit", delinquent),
        (
            "applicant-004",
            "Nothing verified yet",
            VerificationSnapshot::default(),
        ),
    ]
}
