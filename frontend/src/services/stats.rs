use shared::{Transaction, TransactionType};
use std::collections::HashMap;

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 7;

/// Fixed category palette. Unknown categories have no color and are
/// omitted from every mapping built from this table.
pub const CATEGORY_COLORS: [(&str, &str); 10] = [
    ("Main expenses", "#fed057"),
    ("Products", "#ffd8d0"),
    ("Car", "rgba(253,148,152,1)"),
    ("Self care", "rgba(197,186,255,1)"),
    ("Child care", "#6e78e8"),
    ("Household products", "#4a56e2"),
    ("Education", "#81e1ff"),
    ("Other expenses", "#00ad84"),
    ("Entertainment", "#ff77a9"),
    ("Leisure", "rgba(36,204,167,1)"),
];

/// Two-digit month codes paired with their English names, in calendar order.
const MONTH_NAMES: [(&str, &str); 12] = [
    ("01", "January"),
    ("02", "February"),
    ("03", "March"),
    ("04", "April"),
    ("05", "May"),
    ("06", "June"),
    ("07", "July"),
    ("08", "August"),
    ("09", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

/// One page of the transaction table.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// Total page count, 0 for an empty list.
    pub pages: usize,
    /// Contiguous slice for the effective page.
    pub items: &'a [Transaction],
}

/// Slices `transactions` into pages of `page_size` rows and returns the
/// requested page.
///
/// The requested page is 1-based. A missing or zero page defaults to 1 and
/// a request past the end falls back to the last page; neither is an error.
pub fn paginate(transactions: &[Transaction], page: Option<usize>, page_size: usize) -> Page<'_> {
    if transactions.is_empty() || page_size == 0 {
        return Page { pages: 0, items: &[] };
    }

    let pages = transactions.len().div_ceil(page_size);
    let current = match page {
        None | Some(0) => 1,
        Some(requested) if requested > pages => pages,
        Some(requested) => requested,
    };

    let start = (current - 1) * page_size;
    let end = (current * page_size).min(transactions.len());
    Page {
        pages,
        items: &transactions[start..end],
    }
}

/// Month code (`"01"`..`"12"`) of a `dd.mm.yyyy` date string.
pub fn month_code(date: &str) -> Option<&str> {
    date.get(3..5)
}

/// Year component (`"2024"`) of a `dd.mm.yyyy` date string.
pub fn year_code(date: &str) -> Option<&str> {
    date.get(6..10)
}

/// Full English name for a two-digit month code, if the code is in range.
pub fn month_name(code: &str) -> Option<&'static str> {
    MONTH_NAMES
        .iter()
        .find(|(month, _)| *month == code)
        .map(|(_, name)| *name)
}

/// Two-digit code for a full English month name.
pub fn month_name_to_code(name: &str) -> Option<&'static str> {
    MONTH_NAMES
        .iter()
        .find(|(_, month)| *month == name)
        .map(|(code, _)| *code)
}

/// Distinct month names present in the list, ascending by calendar month,
/// optionally restricted to transactions of one year.
///
/// Codes outside `01`..`12` are silently dropped, so a malformed date can
/// shorten the result but never raise.
pub fn months_for_year(transactions: &[Transaction], year: Option<&str>) -> Vec<&'static str> {
    let mut codes: Vec<&str> = Vec::new();
    for transaction in transactions {
        if let Some(filter) = year {
            if year_code(&transaction.date) != Some(filter) {
                continue;
            }
        }
        if let Some(code) = month_code(&transaction.date) {
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
    }

    // Lexicographic sort equals numeric order for zero-padded codes.
    codes.sort_unstable();
    codes.iter().filter_map(|code| month_name(code)).collect()
}

/// Distinct year strings present in the list, sorted lexicographically.
/// The string sort is a deliberately preserved policy, not an oversight.
pub fn distinct_years(transactions: &[Transaction]) -> Vec<String> {
    let mut years: Vec<String> = Vec::new();
    for transaction in transactions {
        if let Some(year) = year_code(&transaction.date) {
            if !years.iter().any(|known| known == year) {
                years.push(year.to_string());
            }
        }
    }
    years.sort_unstable();
    years
}

/// Running income and expense sums.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

/// Sums `amount` per transaction type.
pub fn category_totals(transactions: &[Transaction]) -> Totals {
    transactions
        .iter()
        .fold(Totals::default(), |mut totals, transaction| {
            match transaction.transaction_type {
                TransactionType::Income => totals.income += transaction.amount,
                TransactionType::Expense => totals.expense += transaction.amount,
            }
            totals
        })
}

/// Maps each known category present in the list to its fixed color.
/// Duplicate categories are idempotent; unknown ones are omitted.
pub fn category_colors(transactions: &[Transaction]) -> HashMap<String, &'static str> {
    let mut colors = HashMap::new();
    for transaction in transactions {
        if let Some(category) = transaction.category.as_deref() {
            if let Some((name, color)) = CATEGORY_COLORS
                .iter()
                .find(|(name, _)| *name == category)
            {
                colors.insert((*name).to_string(), *color);
            }
        }
    }
    colors
}

/// Expense sum per category, largest first. Feeds the statistics table
/// and the chart.
pub fn expense_by_category(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for transaction in transactions {
        if transaction.transaction_type != TransactionType::Expense {
            continue;
        }
        let category = transaction
            .category
            .clone()
            .unwrap_or_else(|| "Other expenses".to_string());
        match totals.iter_mut().find(|(name, _)| *name == category) {
            Some((_, sum)) => *sum += transaction.amount,
            None => totals.push((category, transaction.amount)),
        }
    }
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    totals
}

/// Restricts the list to one month and/or year, both given as the codes
/// embedded in the date string.
pub fn filter_by_period(
    transactions: &[Transaction],
    month: Option<&str>,
    year: Option<&str>,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| match month {
            Some(code) => month_code(&transaction.date) == Some(code),
            None => true,
        })
        .filter(|transaction| match year {
            Some(code) => year_code(&transaction.date) == Some(code),
            None => true,
        })
        .cloned()
        .collect()
}

/// `dd.mm.yyyy` shortened to `dd.mm.yy` for the table. Anything else is
/// passed through untouched.
pub fn format_short_date(date: &str) -> String {
    let parts: Vec<&str> = date.split('.').collect();
    if parts.len() != 3 || parts[2].len() != 4 {
        return date.to_string();
    }
    format!("{}.{}.{}", parts[0], parts[1], &parts[2][2..])
}

/// Decodes a `#rrggbb` or `rgba(r,g,b,a)` palette entry into RGB bytes.
pub fn parse_color(color: &str) -> Option<(u8, u8, u8)> {
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some((red, green, blue));
    }

    let body = color.strip_prefix("rgba(")?.strip_suffix(')')?;
    let mut channels = body.split(',').map(str::trim);
    let red = channels.next()?.parse().ok()?;
    let green = channels.next()?.parse().ok()?;
    let blue = channels.next()?.parse().ok()?;
    Some((red, green, blue))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(id: &str, date: &str, transaction_type: TransactionType, category: Option<&str>, amount: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: date.to_string(),
            transaction_type,
            category: category.map(str::to_string),
            comment: None,
            amount,
        }
    }

    fn expenses(count: usize) -> Vec<Transaction> {
        (0..count)
            .map(|index| {
                transaction(
                    &format!("tx{index}"),
                    "01.01.2024",
                    TransactionType::Expense,
                    Some("Products"),
                    1.0,
                )
            })
            .collect()
    }

    #[test]
    fn test_paginate_empty_list() {
        let page = paginate(&[], Some(3), PAGE_SIZE);
        assert_eq!(page.pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_paginate_page_count_and_reconstruction() {
        for count in [1usize, 6, 7, 8, 14, 15, 20] {
            let transactions = expenses(count);
            let pages = paginate(&transactions, Some(1), PAGE_SIZE).pages;
            assert_eq!(pages, count.div_ceil(PAGE_SIZE), "count = {count}");

            // Concatenating every page in order rebuilds the list exactly.
            let mut rebuilt = Vec::new();
            for page in 1..=pages {
                rebuilt.extend_from_slice(paginate(&transactions, Some(page), PAGE_SIZE).items);
            }
            assert_eq!(rebuilt, transactions, "count = {count}");
        }
    }

    #[test]
    fn test_paginate_defaults_missing_and_zero_to_first_page() {
        let transactions = expenses(10);
        let first = paginate(&transactions, Some(1), PAGE_SIZE);
        assert_eq!(paginate(&transactions, None, PAGE_SIZE), first);
        assert_eq!(paginate(&transactions, Some(0), PAGE_SIZE), first);
        assert_eq!(first.items.len(), 7);
    }

    #[test]
    fn test_paginate_clamps_overflow_to_last_page() {
        let transactions = expenses(10);
        let last = paginate(&transactions, Some(2), PAGE_SIZE);
        assert_eq!(last.items.len(), 3);
        assert_eq!(paginate(&transactions, Some(7), PAGE_SIZE), last);
    }

    #[test]
    fn test_months_ascending_and_distinct() {
        let transactions = vec![
            transaction("a", "05.11.2023", TransactionType::Expense, Some("Car"), 10.0),
            transaction("b", "09.03.2023", TransactionType::Income, None, 20.0),
            transaction("c", "12.11.2023", TransactionType::Expense, Some("Car"), 5.0),
            transaction("d", "01.01.2023", TransactionType::Expense, Some("Products"), 7.0),
        ];
        assert_eq!(
            months_for_year(&transactions, None),
            vec!["January", "March", "November"]
        );
        assert!(months_for_year(&transactions, None).len() <= 12);
    }

    #[test]
    fn test_months_respect_year_filter() {
        let transactions = vec![
            transaction("a", "05.02.2023", TransactionType::Expense, Some("Car"), 10.0),
            transaction("b", "09.07.2024", TransactionType::Income, None, 20.0),
        ];
        assert_eq!(months_for_year(&transactions, Some("2024")), vec!["July"]);
        assert!(months_for_year(&transactions, Some("1999")).is_empty());
    }

    #[test]
    fn test_months_drop_out_of_range_codes() {
        let transactions = vec![
            transaction("a", "05.13.2023", TransactionType::Expense, Some("Car"), 10.0),
            transaction("b", "09.00.2023", TransactionType::Expense, Some("Car"), 10.0),
            transaction("c", "01.04.2023", TransactionType::Income, None, 1.0),
        ];
        assert_eq!(months_for_year(&transactions, None), vec!["April"]);
    }

    #[test]
    fn test_distinct_years_string_sort() {
        let transactions = vec![
            transaction("a", "01.01.2021", TransactionType::Income, None, 1.0),
            transaction("b", "01.01.2003", TransactionType::Income, None, 1.0),
            transaction("c", "02.02.2021", TransactionType::Income, None, 1.0),
        ];
        assert_eq!(distinct_years(&transactions), vec!["2003", "2021"]);
    }

    #[test]
    fn test_distinct_years_sort_is_lexicographic_not_numeric() {
        // A three-digit year sorts after "1999" numerically but before it
        // as a string; the string order is the contract.
        let transactions = vec![
            transaction("a", "01.01.1999", TransactionType::Income, None, 1.0),
            transaction("b", "01.01.0987", TransactionType::Income, None, 1.0),
            transaction("c", "01.01.21xx", TransactionType::Income, None, 1.0),
        ];
        assert_eq!(distinct_years(&transactions), vec!["0987", "1999", "21xx"]);
    }

    #[test]
    fn test_category_totals_accumulates_by_type() {
        let transactions = vec![
            transaction("a", "01.01.2024", TransactionType::Income, None, 200.0),
            transaction("b", "02.01.2024", TransactionType::Expense, Some("Car"), 50.0),
            transaction("c", "03.01.2024", TransactionType::Expense, Some("Products"), 25.5),
        ];
        let totals = category_totals(&transactions);
        assert_eq!(totals.income, 200.0);
        assert_eq!(totals.expense, 75.5);
        assert_eq!(category_totals(&[]), Totals::default());
    }

    #[test]
    fn test_category_colors_known_and_unknown() {
        let transactions = vec![
            transaction("a", "01.01.2024", TransactionType::Expense, Some("Car"), 1.0),
            transaction("b", "02.01.2024", TransactionType::Expense, Some("Car"), 2.0),
            transaction("c", "03.01.2024", TransactionType::Expense, Some("Unknown"), 3.0),
        ];
        let colors = category_colors(&transactions);
        assert_eq!(colors.len(), 1);
        assert_eq!(colors.get("Car").copied(), Some("rgba(253,148,152,1)"));
    }

    #[test]
    fn test_scenario_two_transactions() {
        let transactions = vec![
            transaction("a", "15.01.2024", TransactionType::Expense, Some("Products"), 50.0),
            transaction("b", "20.02.2024", TransactionType::Income, None, 200.0),
        ];
        assert_eq!(
            months_for_year(&transactions, None),
            vec!["January", "February"]
        );
        assert_eq!(distinct_years(&transactions), vec!["2024"]);

        let page = paginate(&transactions, Some(1), PAGE_SIZE);
        assert_eq!(page.pages, 1);
        assert_eq!(page.items, &transactions[..]);
    }

    #[test]
    fn test_expense_by_category_sums_and_orders() {
        let transactions = vec![
            transaction("a", "01.01.2024", TransactionType::Expense, Some("Car"), 30.0),
            transaction("b", "02.01.2024", TransactionType::Expense, Some("Products"), 80.0),
            transaction("c", "03.01.2024", TransactionType::Expense, Some("Car"), 20.0),
            transaction("d", "04.01.2024", TransactionType::Income, None, 500.0),
        ];
        assert_eq!(
            expense_by_category(&transactions),
            vec![("Products".to_string(), 80.0), ("Car".to_string(), 50.0)]
        );
    }

    #[test]
    fn test_filter_by_period() {
        let transactions = vec![
            transaction("a", "15.01.2024", TransactionType::Expense, Some("Car"), 1.0),
            transaction("b", "20.02.2024", TransactionType::Expense, Some("Car"), 2.0),
            transaction("c", "07.01.2023", TransactionType::Expense, Some("Car"), 3.0),
        ];
        let filtered = filter_by_period(&transactions, Some("01"), Some("2024"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "a");

        let whole_year = filter_by_period(&transactions, None, Some("2024"));
        assert_eq!(whole_year.len(), 2);
    }

    #[test]
    fn test_month_name_round_trip() {
        assert_eq!(month_name("09"), Some("September"));
        assert_eq!(month_name("13"), None);
        assert_eq!(month_name_to_code("September"), Some("09"));
        assert_eq!(month_name_to_code("Septembre"), None);
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("15.01.2024"), "15.01.24");
        assert_eq!(format_short_date("garbage"), "garbage");
    }

    #[test]
    fn test_parse_color_hex_and_rgba() {
        assert_eq!(parse_color("#fed057"), Some((0xfe, 0xd0, 0x57)));
        assert_eq!(parse_color("rgba(253,148,152,1)"), Some((253, 148, 152)));
        assert_eq!(parse_color("rgba(36, 204, 167, 1)"), Some((36, 204, 167)));
        assert_eq!(parse_color("hotpink"), None);

        // Every palette entry must decode for the chart.
        for (_, color) in CATEGORY_COLORS {
            assert!(parse_color(color).is_some(), "{color}");
        }
    }
}
