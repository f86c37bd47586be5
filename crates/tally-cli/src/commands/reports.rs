//! Report command implementations

use anyhow::Result;
use tally_core::{db::Database, grand_total, round_cents, OverviewFilter, Reports};

use super::{format_amount, truncate};

pub fn cmd_summary(db: &Database, json: bool) -> Result<()> {
    let summary = Reports::new(db).category_summary()?;
    let total = round_cents(grand_total(&summary));

    if json {
        let body = serde_json::json!({
            "categories": summary,
            "total": total,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    if summary.is_empty() {
        println!("No expenses to summarize.");
        return Ok(());
    }

    println!();
    println!("📊 Spending Summary");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:25} │ {:>12}", "Category", "Total");
    println!("   ──────────────────────────┼─────────────");

    for category in &summary {
        println!(
            "   {:25} │ {:>12}",
            truncate(&category.category, 25),
            format_amount(category.total)
        );
    }

    println!("   ──────────────────────────┼─────────────");
    println!("   {:25} │ {:>12}", "Total", format_amount(total));

    Ok(())
}

pub fn cmd_forecast(db: &Database, json: bool) -> Result<()> {
    let forecast = Reports::new(db).forecast()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
        return Ok(());
    }

    println!();
    println!("🔮 Spending Forecast");
    println!("   Based on the last 30 days");
    println!("   ─────────────────────────────");
    println!("   Weekly:  {:>12}", format_amount(forecast.weekly));
    println!("   Monthly: {:>12}", format_amount(forecast.monthly));
    println!("   Yearly:  {:>12}", format_amount(forecast.yearly));

    Ok(())
}

pub fn cmd_overview(
    db: &Database,
    month: Option<&str>,
    year: Option<&str>,
    json: bool,
) -> Result<()> {
    let filter = OverviewFilter::new(month, year);
    let overview = Reports::new(db).monthly_overview(&filter)?;

    if json {
        let body = serde_json::json!({
            "buckets": overview.buckets,
            "months": overview.months,
            "years": overview.years,
            "selected_month": filter.month(),
            "selected_year": filter.year(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!();
    println!("📅 Monthly Overview");
    if !overview.months.is_empty() {
        println!("   Months: {}", overview.months.join(", "));
        println!("   Years:  {}", overview.years.join(", "));
    }
    if let Some(month) = filter.month() {
        println!("   Month filter: {}", month);
    }
    if let Some(year) = filter.year() {
        println!("   Year filter: {}", year);
    }
    println!("   ─────────────────────────────────────────────────────────────");

    if overview.buckets.is_empty() {
        println!("   No expenses found.");
        return Ok(());
    }

    for bucket in &overview.buckets {
        println!();
        println!(
            "   {} ({} expense(s), {})",
            bucket.label,
            bucket.expenses.len(),
            format_amount(round_cents(bucket.total()))
        );
        for expense in &bucket.expenses {
            println!(
                "     {:19} │ {:15} │ {:>10} │ {}",
                expense.date.as_deref().unwrap_or("-"),
                truncate(&expense.category, 15),
                format_amount(expense.amount),
                truncate(&expense.description, 30)
            );
        }
    }

    Ok(())
}
