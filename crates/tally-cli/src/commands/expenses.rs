//! Expense command implementations

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tally_core::{db::Database, parse_amount, store::ExpenseStore, ExpenseRecord, NewExpense};

use super::{format_amount, truncate};

pub fn cmd_add(
    db: &Database,
    description: &str,
    category: &str,
    amount: &str,
    json: bool,
) -> Result<()> {
    let amount = parse_amount(amount)?;
    let expense = NewExpense::now(description.trim(), category.trim(), amount);
    expense.validate()?;

    let id = db.add_expense(&expense)?;

    if json {
        let record = ExpenseRecord::new(
            id,
            expense.description,
            expense.category,
            expense.amount,
            tally_core::format_timestamp(&expense.date),
        );
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("✅ Expense added successfully.");
        println!(
            "   [{}] {} │ {} │ {}",
            id,
            expense.description,
            expense.category,
            format_amount(expense.amount)
        );
    }

    Ok(())
}

pub fn cmd_list(db: &Database, limit: Option<usize>, json: bool) -> Result<()> {
    let expenses = db.list_expenses_limited(limit)?;
    print_expenses("📝 Expenses", &expenses, json)
}

pub fn cmd_recent(db: &Database, limit: usize, json: bool) -> Result<()> {
    let expenses = db.recent_expenses(limit)?;
    print_expenses("🕑 Recent Expenses", &expenses, json)
}

fn print_expenses(title: &str, expenses: &[ExpenseRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(expenses)?);
        return Ok(());
    }

    if expenses.is_empty() {
        println!("No expenses recorded yet. Add one with:");
        println!("  tally add -d Lunch -c Food -a 12.50");
        return Ok(());
    }

    println!();
    println!("{}", title);
    println!("   ─────────────────────────────────────────────────────────────");

    for expense in expenses {
        println!(
            "   {:19} │ {:15} │ {:>10} │ {}",
            expense.date.as_deref().unwrap_or("-"),
            truncate(&expense.category, 15),
            format_amount(expense.amount),
            truncate(&expense.description, 40)
        );
    }

    Ok(())
}

/// Ask a yes/no question, defaulting to no
pub fn confirm(prompt: &str, input: &mut impl BufRead) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

pub fn cmd_reset(db: &Database, yes: bool) -> Result<()> {
    cmd_reset_with(db, yes, &mut io::stdin().lock())
}

/// Reset with an explicit confirmation source
pub fn cmd_reset_with(db: &Database, yes: bool, input: &mut impl BufRead) -> Result<()> {
    if !yes {
        println!("⚠️  This will delete every recorded expense.");
        println!();
        if !confirm("Are you sure?", input)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let deleted = db.clear_expenses()?;
    println!("✅ Deleted {} expense(s).", deleted);

    Ok(())
}
