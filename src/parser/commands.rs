// 🧩 Command Parsers - one function per command keyword
//
// Every parser follows the same shape:
//   tokenize → index/preamble → duplicate check → field validation → Command
//
// A malformed preamble becomes InvalidCommandFormat with the command's usage;
// a bad field value surfaces its own constraint message.

use super::syntax::*;
use super::tokenizer::{ArgumentMultimap, ArgumentTokenizer};
use super::util;
use crate::commands::{self, CollectionEdit, Command, CompleteTarget, EditPersonDescriptor};
use crate::error::ParseError;
use crate::index::Index;
use crate::model::{GatherEmailPrompt, PersonComparator, PersonPredicate};
use crate::person::Person;
use std::collections::BTreeSet;

/// Single-valued prefixes shared by add and edit
const PERSON_SCALAR_PREFIXES: [Prefix; 6] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_NEXT_OF_KIN_NAME,
    PREFIX_NEXT_OF_KIN_PHONE,
];

fn index_from_preamble(args: &ArgumentMultimap, usage: &'static str) -> Result<Index, ParseError> {
    util::parse_index(args.preamble()).map_err(|_| ParseError::invalid_format(usage))
}

// ============================================================================
// PERSON COMMANDS
// ============================================================================

pub fn parse_add(args: &str) -> Result<Command, ParseError> {
    let args = ArgumentTokenizer::tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_NEXT_OF_KIN_NAME,
            PREFIX_NEXT_OF_KIN_PHONE,
            PREFIX_REMARK,
            PREFIX_FINANCIAL_PLAN,
            PREFIX_TAG,
        ],
    );

    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    if !required.iter().all(|p| args.is_present(*p)) || !args.preamble().is_empty() {
        return Err(ParseError::invalid_format(commands::ADD_USAGE));
    }

    let mut single_valued = PERSON_SCALAR_PREFIXES.to_vec();
    single_valued.push(PREFIX_REMARK);
    args.verify_no_duplicate_prefixes_for(&single_valued)?;

    // presence checked above
    let field = |prefix: Prefix| args.value(prefix).unwrap_or_default();

    let name = util::parse_name(field(PREFIX_NAME))?;
    let phone = util::parse_phone(field(PREFIX_PHONE))?;
    let email = util::parse_email(field(PREFIX_EMAIL))?;
    let address = util::parse_address(field(PREFIX_ADDRESS))?;

    let next_of_kin_name = args
        .value(PREFIX_NEXT_OF_KIN_NAME)
        .map(util::parse_next_of_kin_name)
        .transpose()?;
    let next_of_kin_phone = args
        .value(PREFIX_NEXT_OF_KIN_PHONE)
        .map(util::parse_next_of_kin_phone)
        .transpose()?;
    let remark = args.value(PREFIX_REMARK).map(util::parse_remark).transpose()?;
    let financial_plans = util::parse_financial_plans(args.all_values(PREFIX_FINANCIAL_PLAN))?;
    let tags = util::parse_tags(args.all_values(PREFIX_TAG))?;

    let person = Person::new(name, phone, email, address)
        .with_next_of_kin_name(next_of_kin_name)
        .with_next_of_kin_phone(next_of_kin_phone)
        .with_remark(remark)
        .with_financial_plans(financial_plans)
        .with_tags(tags);

    Ok(Command::Add(person))
}

pub fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let args = ArgumentTokenizer::tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_NEXT_OF_KIN_NAME,
            PREFIX_NEXT_OF_KIN_PHONE,
            PREFIX_FINANCIAL_PLAN,
            PREFIX_TAG,
        ],
    );

    let index = index_from_preamble(&args, commands::EDIT_USAGE)?;
    args.verify_no_duplicate_prefixes_for(&PERSON_SCALAR_PREFIXES)?;

    let descriptor = EditPersonDescriptor {
        name: args.value(PREFIX_NAME).map(util::parse_name).transpose()?,
        phone: args.value(PREFIX_PHONE).map(util::parse_phone).transpose()?,
        email: args.value(PREFIX_EMAIL).map(util::parse_email).transpose()?,
        address: args.value(PREFIX_ADDRESS).map(util::parse_address).transpose()?,
        next_of_kin_name: args
            .value(PREFIX_NEXT_OF_KIN_NAME)
            .map(util::parse_next_of_kin_name)
            .transpose()?,
        next_of_kin_phone: args
            .value(PREFIX_NEXT_OF_KIN_PHONE)
            .map(util::parse_next_of_kin_phone)
            .transpose()?,
        financial_plans: collection_edit(
            args.all_values(PREFIX_FINANCIAL_PLAN),
            util::parse_financial_plans,
        )?,
        tags: collection_edit(args.all_values(PREFIX_TAG), util::parse_tags)?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NothingEdited);
    }

    Ok(Command::Edit { index, descriptor })
}

/// No values keeps the set, a single empty value clears it, anything else replaces it
fn collection_edit<T: Ord>(
    values: &[String],
    parse: fn(&[String]) -> Result<BTreeSet<T>, ParseError>,
) -> Result<CollectionEdit<T>, ParseError> {
    match values {
        [] => Ok(CollectionEdit::Keep),
        [only] if only.is_empty() => Ok(CollectionEdit::Clear),
        _ => Ok(CollectionEdit::Replace(parse(values)?)),
    }
}

pub fn parse_delete(args: &str) -> Result<Command, ParseError> {
    let index =
        util::parse_index(args).map_err(|_| ParseError::invalid_format(commands::DELETE_USAGE))?;
    Ok(Command::Delete(index))
}

pub fn parse_remark(args: &str) -> Result<Command, ParseError> {
    let args = ArgumentTokenizer::tokenize(args, &[PREFIX_REMARK]);

    let index = index_from_preamble(&args, commands::REMARK_USAGE)?;
    let raw = args
        .value(PREFIX_REMARK)
        .ok_or(ParseError::invalid_format(commands::REMARK_USAGE))?;
    args.verify_no_duplicate_prefixes_for(&[PREFIX_REMARK])?;

    let remark = Some(util::parse_remark(raw)?).filter(|r| !r.is_blank());
    Ok(Command::Remark { index, remark })
}

// ============================================================================
// VIEW COMMANDS
// ============================================================================

pub fn parse_find(args: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::invalid_format(commands::FIND_USAGE));
    }
    Ok(Command::Find(PersonPredicate::NameContainsKeywords(keywords)))
}

pub fn parse_sort(args: &str) -> Result<Command, ParseError> {
    let comparator = match args.trim().to_lowercase().as_str() {
        "name" => PersonComparator::Name,
        "appointment" => PersonComparator::Appointment,
        _ => return Err(ParseError::invalid_format(commands::SORT_USAGE)),
    };
    Ok(Command::Sort(comparator))
}

pub fn parse_gather(args: &str) -> Result<Command, ParseError> {
    let args = ArgumentTokenizer::tokenize(args, &[PREFIX_FINANCIAL_PLAN, PREFIX_TAG]);

    let has_plan = args.is_present(PREFIX_FINANCIAL_PLAN);
    let has_tag = args.is_present(PREFIX_TAG);
    if has_plan == has_tag || !args.preamble().is_empty() {
        return Err(ParseError::invalid_format(commands::GATHER_USAGE));
    }
    args.verify_no_duplicate_prefixes_for(&[PREFIX_FINANCIAL_PLAN, PREFIX_TAG])?;

    let (prefix, make): (Prefix, fn(String) -> GatherEmailPrompt) = if has_plan {
        (PREFIX_FINANCIAL_PLAN, GatherEmailPrompt::ByFinancialPlan)
    } else {
        (PREFIX_TAG, GatherEmailPrompt::ByTag)
    };

    match args.value(prefix) {
        Some(prompt) if !prompt.is_empty() => Ok(Command::Gather(make(prompt.to_string()))),
        _ => Err(ParseError::invalid_format(commands::GATHER_USAGE)),
    }
}

// ============================================================================
// APPOINTMENT COMMANDS
// ============================================================================

pub fn parse_schedule(args: &str) -> Result<Command, ParseError> {
    let args = ArgumentTokenizer::tokenize(args, &[PREFIX_APPOINTMENT, PREFIX_DATE]);

    let index = index_from_preamble(&args, commands::SCHEDULE_USAGE)?;
    let (Some(name), Some(date_time)) = (args.value(PREFIX_APPOINTMENT), args.value(PREFIX_DATE))
    else {
        return Err(ParseError::invalid_format(commands::SCHEDULE_USAGE));
    };
    args.verify_no_duplicate_prefixes_for(&[PREFIX_APPOINTMENT, PREFIX_DATE])?;

    let appointment = util::parse_appointment(name, date_time)?;
    Ok(Command::Schedule { index, appointment })
}

pub fn parse_complete(args: &str) -> Result<Command, ParseError> {
    let args = ArgumentTokenizer::tokenize(args, &[PREFIX_DATE]);

    let target = match (args.value(PREFIX_DATE), args.preamble().is_empty()) {
        (Some(date), true) => {
            args.verify_no_duplicate_prefixes_for(&[PREFIX_DATE])?;
            CompleteTarget::ByDate(util::parse_date(date)?)
        }
        (None, false) => CompleteTarget::ByIndex(index_from_preamble(&args, commands::COMPLETE_USAGE)?),
        _ => return Err(ParseError::invalid_format(commands::COMPLETE_USAGE)),
    };

    Ok(Command::Complete(target))
}

// ============================================================================
// ARGUMENT-FREE COMMANDS
// ============================================================================

pub fn parse_list(_args: &str) -> Result<Command, ParseError> {
    Ok(Command::List)
}

pub fn parse_clear(_args: &str) -> Result<Command, ParseError> {
    Ok(Command::Clear)
}

pub fn parse_help(_args: &str) -> Result<Command, ParseError> {
    Ok(Command::Help)
}

pub fn parse_exit(_args: &str) -> Result<Command, ParseError> {
    Ok(Command::Exit)
}

// ============================================================================
// TESTS
// ============================================================================
