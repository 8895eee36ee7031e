//! Dashboard search filter.

use invoice_model::Invoice;

/// Invoices whose client name contains `term` (ignoring case) or whose id
/// contains `term`, in list order.
///
/// The term is matched as typed: an empty term matches everything, while
/// surrounding whitespace is part of the match.
pub fn search<'a>(term: &str, invoices: &'a [Invoice]) -> Vec<&'a Invoice> {
    if term.is_empty() {
        return invoices.iter().collect();
    }
    let needle = term.to_lowercase();
    invoices
        .iter()
        .filter(|invoice| matches(invoice, term, &needle))
        .collect()
}

fn matches(invoice: &Invoice, term: &str, needle: &str) -> bool {
    invoice.client_name.to_lowercase().contains(needle) || invoice.id.to_string().contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_model::sample_invoices;

    fn ids(found: &[&Invoice]) -> Vec<String> {
        found.iter().map(|i| i.id.to_string()).collect()
    }

    #[test]
    fn matches_client_name_case_insensitively() {
        let invoices = sample_invoices();
        assert_eq!(ids(&search("tech", &invoices)), vec!["001"]);
        assert_eq!(ids(&search("STUDIO", &invoices)), vec!["002"]);
    }

    #[test]
    fn matches_id_substring() {
        let invoices = sample_invoices();
        assert_eq!(ids(&search("02", &invoices)), vec!["002"]);
        assert_eq!(ids(&search("00", &invoices)), vec!["001", "002"]);
    }

    #[test]
    fn empty_term_returns_all() {
        let invoices = sample_invoices();
        assert_eq!(search("", &invoices).len(), 2);
        assert!(search("zzz", &invoices).is_empty());
    }

    #[test]
    fn whitespace_is_matched_as_typed() {
        let invoices = sample_invoices();
        assert!(search("   ", &invoices).is_empty());
        assert!(search(" tech", &invoices).is_empty());
        assert_eq!(ids(&search("creative studio", &invoices)), vec!["002"]);
        assert_eq!(ids(&search("Studio ", &invoices)), Vec::<String>::new());
    }
}
