// 🌱 Sample Data - starter clients for a first run

use crate::error::ValidationError;
use crate::model::AddressBook;
use crate::person::{
    Address, Email, FinancialPlan, Name, NextOfKinName, NextOfKinPhone, Person, Phone, Tag,
};
use anyhow::{Context, Result};

struct SampleClient {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    next_of_kin: Option<(&'static str, &'static str)>,
    financial_plans: &'static [&'static str],
    tags: &'static [&'static str],
}

const SAMPLE_CLIENTS: [SampleClient; 6] = [
    SampleClient {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: "Blk 30 Geylang Street 29, #06-40",
        next_of_kin: Some(("Mary Yeoh", "87438808")),
        financial_plans: &["Retirement Plan"],
        tags: &["friends"],
    },
    SampleClient {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        next_of_kin: None,
        financial_plans: &["Education Savings", "Retirement Plan"],
        tags: &["colleagues", "friends"],
    },
    SampleClient {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        next_of_kin: Some(("Paul Oliveiro", "93210284")),
        financial_plans: &[],
        tags: &["neighbours"],
    },
    SampleClient {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        next_of_kin: None,
        financial_plans: &["Health Shield"],
        tags: &["family"],
    },
    SampleClient {
        name: "Irfan Ibrahim",
        phone: "92492021",
        email: "irfan@example.com",
        address: "Blk 47 Tampines Street 20, #17-35",
        next_of_kin: None,
        financial_plans: &[],
        tags: &["classmates"],
    },
    SampleClient {
        name: "Roy Balakrishnan",
        phone: "92624417",
        email: "royb@example.com",
        address: "Blk 45 Aljunied Street 85, #11-31",
        next_of_kin: Some(("Anita Balakrishnan", "92624418")),
        financial_plans: &["Health Shield", "Retirement Plan"],
        tags: &["colleagues"],
    },
];

impl SampleClient {
    fn to_person(&self) -> Result<Person, ValidationError> {
        let (next_of_kin_name, next_of_kin_phone) = match self.next_of_kin {
            Some((name, phone)) => (
                Some(NextOfKinName::new(name)?),
                Some(NextOfKinPhone::new(phone)?),
            ),
            None => (None, None),
        };

        Ok(Person::new(
            Name::new(self.name)?,
            Phone::new(self.phone)?,
            Email::new(self.email)?,
            Address::new(self.address)?,
        )
        .with_next_of_kin_name(next_of_kin_name)
        .with_next_of_kin_phone(next_of_kin_phone)
        .with_financial_plans(
            self.financial_plans
                .iter()
                .map(|p| FinancialPlan::new(p))
                .collect::<Result<Vec<_>, _>>()?,
        )
        .with_tags(
            self.tags
                .iter()
                .map(|t| Tag::new(t))
                .collect::<Result<Vec<_>, _>>()?,
        ))
    }
}

pub fn sample_persons() -> Result<Vec<Person>> {
    SAMPLE_CLIENTS
        .iter()
        .map(|client| {
            client
                .to_person()
                .with_context(|| format!("Invalid sample client {}", client.name))
        })
        .collect()
}

pub fn sample_address_book() -> Result<AddressBook> {
    Ok(AddressBook::from_persons(sample_persons()?)?)
}
