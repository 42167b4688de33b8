// 📧 Gather Emails - pick clients by plan or tag and collect their emails

use crate::person::Person;
use std::fmt;

/// Selection criterion for a bulk email gather.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatherEmailPrompt {
    /// Any financial plan contains the text, ignoring case
    ByFinancialPlan(String),

    /// Any tag contains the text, ignoring case
    ByTag(String),
}

impl GatherEmailPrompt {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            GatherEmailPrompt::ByFinancialPlan(prompt) => person
                .financial_plans()
                .iter()
                .any(|plan| plan.contains_ignore_case(prompt)),
            GatherEmailPrompt::ByTag(prompt) => person
                .tags()
                .iter()
                .any(|tag| tag.contains_ignore_case(prompt)),
        }
    }

    /// Matching emails joined by ", " in the order given
    pub fn gather<'a>(&self, persons: impl IntoIterator<Item = &'a Person>) -> String {
        persons
            .into_iter()
            .filter(|person| self.matches(person))
            .map(|person| person.email().as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for GatherEmailPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatherEmailPrompt::ByFinancialPlan(prompt) => write!(f, "financial plan '{}'", prompt),
            GatherEmailPrompt::ByTag(prompt) => write!(f, "tag '{}'", prompt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{alice, benson, carl, elle};

    #[test]
    fn test_gather_by_financial_plan() {
        let persons = vec![alice(), benson(), carl(), elle()];
        let prompt = GatherEmailPrompt::ByFinancialPlan("sample plan 1".into());
        assert_eq!(prompt.gather(&persons), "alice@example.com, werner@example.com");
    }

    #[test]
    fn test_gather_by_tag_substring() {
        let persons = vec![alice(), benson(), carl()];
        let prompt = GatherEmailPrompt::ByTag("MONEY".into());
        assert_eq!(prompt.gather(&persons), "johnd@example.com");
    }

    #[test]
    fn test_gather_without_matches_is_empty() {
        let persons = vec![carl()];
        assert_eq!(GatherEmailPrompt::ByTag("friends".into()).gather(&persons), "");
    }
}
