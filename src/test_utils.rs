// 🧪 Test fixtures - typical clients and a string-based Person builder

use crate::appointment::{parse_date_time, Appointment, AppointmentName, ScheduleItem};
use crate::model::AddressBook;
use crate::person::{
    Address, Email, FinancialPlan, Name, NextOfKinName, NextOfKinPhone, Person, Phone, Remark, Tag,
};

// ============================================================================
// PERSON BUILDER
// ============================================================================

/// Builds persons from plain strings. Panics on invalid input; test-only.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new(name: &str) -> Self {
        PersonBuilder {
            person: Person::new(
                Name::new(name).unwrap(),
                Phone::new("85355255").unwrap(),
                Email::new("amy@gmail.com").unwrap(),
                Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
            ),
        }
    }

    pub fn from(person: &Person) -> Self {
        PersonBuilder {
            person: person.clone(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.person = self.person.with_name(Name::new(name).unwrap());
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.person = self.person.with_phone(Phone::new(phone).unwrap());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.person = self.person.with_email(Email::new(email).unwrap());
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.person = self.person.with_address(Address::new(address).unwrap());
        self
    }

    pub fn next_of_kin(mut self, name: &str, phone: &str) -> Self {
        self.person = self
            .person
            .with_next_of_kin_name(Some(NextOfKinName::new(name).unwrap()))
            .with_next_of_kin_phone(Some(NextOfKinPhone::new(phone).unwrap()));
        self
    }

    pub fn remark(mut self, remark: &str) -> Self {
        self.person = self.person.with_remark(Some(Remark::new(remark).unwrap()));
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.person = self
            .person
            .with_tags(tags.iter().map(|t| Tag::new(t).unwrap()));
        self
    }

    pub fn financial_plans(mut self, plans: &[&str]) -> Self {
        self.person = self
            .person
            .with_financial_plans(plans.iter().map(|p| FinancialPlan::new(p).unwrap()));
        self
    }

    pub fn appointment(mut self, name: &str, date_time: &str) -> Self {
        let appointment = Appointment::new(
            AppointmentName::new(name).unwrap(),
            parse_date_time(date_time).unwrap(),
        );
        self.person = self.person.with_appointment(ScheduleItem::Scheduled(appointment));
        self
    }

    pub fn no_appointment(mut self) -> Self {
        self.person = self.person.with_appointment(ScheduleItem::Unscheduled);
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}

// ============================================================================
// TYPICAL PERSONS
// ============================================================================

pub fn alice() -> Person {
    PersonBuilder::new("Alice Pauline")
        .phone("94351253")
        .email("alice@example.com")
        .address("123, Jurong West Ave 6, #08-111")
        .next_of_kin("Paul Pauline", "98765431")
        .financial_plans(&["Sample Plan 1"])
        .tags(&["friends"])
        .appointment("Annual review", "12-06-2030 10:00")
        .build()
}

pub fn benson() -> Person {
    PersonBuilder::new("Benson Meier")
        .phone("98765432")
        .email("johnd@example.com")
        .address("311, Clementi Ave 2, #02-25")
        .next_of_kin("Mary Meier", "98765433")
        .financial_plans(&["Retirement Plan", "Sample Plan 2"])
        .tags(&["owesMoney", "friends"])
        .appointment("Policy renewal", "01-06-2030 09:00")
        .build()
}

pub fn carl() -> Person {
    PersonBuilder::new("Carl Kurz")
        .phone("95352563")
        .email("heinz@example.com")
        .address("wall street")
        .build()
}

pub fn daniel() -> Person {
    PersonBuilder::new("Daniel Meier")
        .phone("87652533")
        .email("cornelia@example.com")
        .address("10th street")
        .tags(&["friends"])
        .appointment("Portfolio check", "12-06-2030 08:30")
        .build()
}

pub fn elle() -> Person {
    PersonBuilder::new("Elle Meyer")
        .phone("9482224")
        .email("werner@example.com")
        .address("michegan ave")
        .financial_plans(&["Sample Plan 1"])
        .build()
}

pub fn fiona() -> Person {
    PersonBuilder::new("Fiona Kunz")
        .phone("9482427")
        .email("lydia@example.com")
        .address("little tokyo")
        .build()
}

pub fn george() -> Person {
    PersonBuilder::new("George Best")
        .phone("9482442")
        .email("anna@example.com")
        .address("4th street")
        .build()
}

/// Not in the typical book
pub fn amy() -> Person {
    PersonBuilder::new("Amy Bee")
        .phone("11111111")
        .email("amy@example.com")
        .address("Block 312, Amy Street 1")
        .tags(&["friend"])
        .build()
}

/// Not in the typical book
pub fn bob() -> Person {
    PersonBuilder::new("Bob Choo")
        .phone("22222222")
        .email("bob@example.com")
        .address("Block 123, Bobby Street 3")
        .next_of_kin("Bobby Choo", "33333333")
        .tags(&["husband", "friend"])
        .build()
}

pub fn typical_persons() -> Vec<Person> {
    vec![alice(), benson(), carl(), daniel(), elle(), fiona(), george()]
}

pub fn typical_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    for person in typical_persons() {
        book.add_person(person).unwrap();
    }
    book
}
