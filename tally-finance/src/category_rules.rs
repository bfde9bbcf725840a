//! Deterministic keyword rules mapping a narration to a spending Category.
//!
//! Rules are tried in canonical category order and the first rule with any
//! keyword contained in the lowercased narration wins, so a narration that
//! mentions both a grocer and rent is Groceries. Matching is plain substring
//! containment: "more" also matches "Baltimore".

use tally_core::Category;
use tracing::warn;

/// Built-in keyword table, in rule priority order.
/// Miscellaneous has no entry: it is the fallback, not a rule.
pub const DEFAULT_RULES: &[(Category, &[&str])] = &[
    (Category::Groceries, &["bigbasket", "grofers", "more", "dmart", "spencer"]),
    (Category::EatingOut, &["zomato", "swiggy", "dominos", "pizza", "restaurant", "eatery"]),
    (Category::Entertainment, &["netflix", "spotify", "hotstar", "prime", "bookmyshow"]),
    (Category::Utilities, &["electricity", "water", "gas", "bescom", "bills", "power"]),
    (Category::Transport, &["uber", "ola", "fuel", "petrol", "diesel", "metro"]),
    (Category::Shopping, &["amazon", "flipkart", "myntra", "ajio", "snapdeal"]),
    (Category::Healthcare, &["pharmacy", "hospital", "clinic", "apollo", "medlife"]),
    (Category::Education, &["fees", "tuition", "course", "udemy", "byjus"]),
    (Category::Salary, &["salary", "credited", "income"]),
    (Category::Rent, &["rent", "landlord"]),
];

/// Categorize with the built-in table.
pub fn categorize(narration: &str) -> Category {
    let text = narration.to_lowercase();
    DEFAULT_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Miscellaneous)
}

/// An owned, extendable copy of the keyword table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<(Category, Vec<String>)>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES
                .iter()
                .map(|(c, kws)| (*c, kws.iter().map(|k| k.to_string()).collect()))
                .collect(),
        }
    }
}

impl RuleTable {
    /// Add keywords to an existing category's rule. Rule order is fixed, so
    /// extra keywords never change which category wins a tie.
    pub fn add_keywords<I, S>(&mut self, category: Category, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some((_, list)) = self.rules.iter_mut().find(|(c, _)| *c == category) else {
            warn!(%category, "keywords for the fallback category are ignored");
            return;
        };

        for kw in keywords {
            let kw = kw.as_ref().trim().to_lowercase();
            // An empty keyword would match every narration
            if kw.is_empty() || list.contains(&kw) {
                continue;
            }
            list.push(kw);
        }
    }

    pub fn keywords(&self, category: Category) -> &[String] {
        self.rules
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, kws)| kws.as_slice())
            .unwrap_or(&[])
    }

    pub fn categorize(&self, narration: &str) -> Category {
        let text = narration.to_lowercase();
        self.rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw.as_str())))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Miscellaneous)
    }
}
