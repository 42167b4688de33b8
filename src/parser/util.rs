// 🔧 Field Parsers - trim raw argument text and turn it into field values
//
// Every helper returns ParseError so parsers can use `?` directly; field
// ValidationErrors convert through `From`.

use crate::appointment::{self, Appointment, AppointmentName};
use crate::error::ParseError;
use crate::index::Index;
use crate::person::{
    Address, Email, FinancialPlan, Name, NextOfKinName, NextOfKinPhone, Phone, Remark, Tag,
};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Parse a one-based, non-zero unsigned index
pub fn parse_index(raw: &str) -> Result<Index, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

pub fn parse_name(raw: &str) -> Result<Name, ParseError> {
    Ok(Name::new(raw.trim())?)
}

pub fn parse_phone(raw: &str) -> Result<Phone, ParseError> {
    Ok(Phone::new(raw.trim())?)
}

pub fn parse_email(raw: &str) -> Result<Email, ParseError> {
    Ok(Email::new(raw.trim())?)
}

pub fn parse_address(raw: &str) -> Result<Address, ParseError> {
    Ok(Address::new(raw.trim())?)
}

pub fn parse_next_of_kin_name(raw: &str) -> Result<NextOfKinName, ParseError> {
    Ok(NextOfKinName::new(raw.trim())?)
}

pub fn parse_next_of_kin_phone(raw: &str) -> Result<NextOfKinPhone, ParseError> {
    Ok(NextOfKinPhone::new(raw.trim())?)
}

pub fn parse_remark(raw: &str) -> Result<Remark, ParseError> {
    Ok(Remark::new(raw.trim())?)
}

pub fn parse_tag(raw: &str) -> Result<Tag, ParseError> {
    Ok(Tag::new(raw.trim())?)
}

pub fn parse_financial_plan(raw: &str) -> Result<FinancialPlan, ParseError> {
    Ok(FinancialPlan::new(raw.trim())?)
}

pub fn parse_tags<S: AsRef<str>>(raws: &[S]) -> Result<BTreeSet<Tag>, ParseError> {
    raws.iter().map(|raw| parse_tag(raw.as_ref())).collect()
}

pub fn parse_financial_plans<S: AsRef<str>>(raws: &[S]) -> Result<BTreeSet<FinancialPlan>, ParseError> {
    raws.iter()
        .map(|raw| parse_financial_plan(raw.as_ref()))
        .collect()
}

pub fn parse_appointment(name: &str, date_time: &str) -> Result<Appointment, ParseError> {
    let name = AppointmentName::new(name.trim())?;
    let date_time = appointment::parse_date_time(date_time)?;
    Ok(Appointment::new(name, date_time))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    Ok(appointment::parse_date(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::FieldValue;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("1").unwrap(), Index::from_zero_based(0));
        assert_eq!(parse_index("  10  ").unwrap(), Index::from_zero_based(9));

        assert_eq!(parse_index("0"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("-1"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("+1"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("10 a"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index(""), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("99999999999999999999999"), Err(ParseError::InvalidIndex));
    }

    #[test]
    fn test_parse_fields_trim_whitespace() {
        assert_eq!(parse_name("  Rachel Walker ").unwrap().as_str(), "Rachel Walker");
        assert_eq!(parse_phone(" 123456 ").unwrap().as_str(), "123456");
        assert_eq!(parse_email(" rachel@example.com ").unwrap().as_str(), "rachel@example.com");
        assert_eq!(parse_address(" 123 Main Street #0505 ").unwrap().as_str(), "123 Main Street #0505");
    }

    #[test]
    fn test_parse_field_failure_carries_constraint_message() {
        let err = parse_phone("+651234").unwrap_err();
        assert_eq!(err.to_string(), Phone::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_parse_tags() {
        let tags = parse_tags(&["friend", "neighbour", "friend"]).unwrap();
        assert_eq!(tags.len(), 2);

        assert!(parse_tags::<&str>(&[]).unwrap().is_empty());
        assert!(parse_tags(&["friend", "#friend"]).is_err());
    }

    #[test]
    fn test_parse_financial_plans() {
        let plans = parse_financial_plans(&["Plan A", "Plan B"]).unwrap();
        assert_eq!(plans.len(), 2);
        assert!(parse_financial_plans(&[""]).is_err());
    }

    #[test]
    fn test_parse_appointment() {
        let appointment = parse_appointment(" Review ", "01-01-2030 10:00").unwrap();
        assert_eq!(appointment.name().as_str(), "Review");
        assert!(parse_appointment("Review", "2030-01-01").is_err());
        assert!(parse_appointment("", "01-01-2030 10:00").is_err());
    }
}
