use crate::materialize::Report;
use crate::models::ProblemRecord;
use crate::store::Outcome;

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Written => "written",
        Outcome::AlreadyPresent => "already listed",
        Outcome::AlreadyExists => "kept existing",
    }
}

pub fn display_report(record: &ProblemRecord, report: &Report) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", record.title.trim());
    println!("{}\n", "=".repeat(60));

    println!("Url:      {}", record.url);
    println!("Tags:     {}", record.tags.join(", "));
    println!("Category: {}", report.category);
    match &report.symbol {
        Some(symbol) => match &symbol.owner {
            Some(owner) => println!("Entry:    {}::{}", owner, symbol.name),
            None => println!("Entry:    {}", symbol.name),
        },
        None => println!("Entry:    (not detected)"),
    }

    println!("\n{}", "-".repeat(60));
    println!("Source:   {}", report.paths.source.display());
    println!("Test:     {} ({})", report.paths.test.display(), outcome_label(report.test));
    println!("README:   {}", outcome_label(report.ledger));
    for (entry, outcome) in &report.registries {
        println!("Registry: {} <- {} ({})", entry.path.display(), entry.line, outcome_label(*outcome));
    }
    println!("{}", "-".repeat(60));

    if report.needs_manual_test() {
        println!("\nThis problem needs a hand-written test case.");
    }
    println!();
}
