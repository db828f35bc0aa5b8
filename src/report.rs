// 📊 Report - Plain-text views of a ledger for the CLI

use crate::entities::Relation;
use crate::ledger::Ledger;

/// Creators with their works and totals, then works with their creators
pub fn render(ledger: &Ledger) -> String {
    let mut out = format!("Creators ({})\n", ledger.creator_count());
    for creator in ledger.creators() {
        let works: Vec<String> = creator.works(ledger).iter().map(|w| w.title()).collect();
        out.push_str(&format!(
            "  {}: total {} [{}]\n",
            creator.name(),
            creator.total_amount(ledger),
            works.join(", ")
        ));
    }

    out.push_str(&format!("Works ({})\n", ledger.work_count()));
    for work in ledger.works() {
        let creators: Vec<String> = work.creators(ledger).iter().map(|c| c.name()).collect();
        out.push_str(&format!("  {}: [{}]\n", work.title(), creators.join(", ")));
    }

    out
}

/// Relations on one date, ascending by amount
pub fn render_on_date(ledger: &Ledger, date: &str) -> String {
    let relations = Relation::relations_on_date(ledger, date);

    let mut out = format!("Relations on {} ({})\n", date, relations.len());
    for relation in relations {
        out.push_str(&format!("  {}\n", relation));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let ledger = Ledger::new();
        let ann = ledger.add_creator("Ann").unwrap();
        let book = ledger.add_work("Book1").unwrap();
        ann.establish_relation(&ledger, &book, "2023-05-01", 1500).unwrap();

        let report = render(&ledger);
        assert!(report.contains("Creators (1)"));
        assert!(report.contains("  Ann: total 1500 [Book1]"));
        assert!(report.contains("  Book1: [Ann]"));
        assert!(report.ends_with("\n"));
    }

    #[test]
    fn test_render_empty_ledger() {
        let ledger = Ledger::new();
        assert_eq!(render(&ledger), "Creators (0)\nWorks (0)\n");
    }

    #[test]
    fn test_render_on_date() {
        let ledger = Ledger::new();
        let ann = ledger.add_creator("Ann").unwrap();
        let book = ledger.add_work("Book1").unwrap();
        ann.establish_relation(&ledger, &book, "2024-01-01", 500).unwrap();
        ann.establish_relation(&ledger, &book, "2024-01-01", 100).unwrap();

        let report = render_on_date(&ledger, "2024-01-01");
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Relations on 2024-01-01 (2)");
        assert!(lines[1].ends_with("amount=100)"));
        assert!(lines[2].ends_with("amount=500)"));
    }
}
