// 👤 Person Entity - a client record in the address book
//
// "Name is IDENTITY for duplicate detection, every other field is a VALUE"
//
// A Person is never changed in place: edits build a new Person that replaces
// the old one in the AddressBook.

pub mod contact;
pub mod field;
pub mod financial_plan;
pub mod name;
pub mod next_of_kin;
pub mod remark;
pub mod tag;

pub use contact::{Address, Email, Phone};
pub use field::FieldValue;
pub use financial_plan::FinancialPlan;
pub use name::Name;
pub use next_of_kin::{NextOfKinName, NextOfKinPhone};
pub use remark::Remark;
pub use tag::Tag;

use crate::appointment::ScheduleItem;
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// PERSON ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    // ========================================================================
    // IDENTITY FIELDS
    // ========================================================================
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,

    // ========================================================================
    // OPTIONAL FIELDS
    // ========================================================================
    next_of_kin_name: Option<NextOfKinName>,
    next_of_kin_phone: Option<NextOfKinPhone>,
    remark: Option<Remark>,
    appointment: ScheduleItem,

    // ========================================================================
    // SETS (unique, ordered for stable display)
    // ========================================================================
    financial_plans: BTreeSet<FinancialPlan>,
    tags: BTreeSet<Tag>,
}

impl Person {
    /// Create a person with the required fields; everything else empty
    pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Person {
            name,
            phone,
            email,
            address,
            next_of_kin_name: None,
            next_of_kin_phone: None,
            remark: None,
            appointment: ScheduleItem::Unscheduled,
            financial_plans: BTreeSet::new(),
            tags: BTreeSet::new(),
        }
    }

    // ========================================================================
    // BUILDERS (consume self, return the new value)
    // ========================================================================

    pub fn with_name(mut self, name: Name) -> Self {
        self.name = name;
        self
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phone = phone;
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = email;
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    pub fn with_next_of_kin_name(mut self, name: Option<NextOfKinName>) -> Self {
        self.next_of_kin_name = name;
        self
    }

    pub fn with_next_of_kin_phone(mut self, phone: Option<NextOfKinPhone>) -> Self {
        self.next_of_kin_phone = phone;
        self
    }

    /// Blank remarks are stored as no remark
    pub fn with_remark(mut self, remark: Option<Remark>) -> Self {
        self.remark = remark.filter(|r| !r.is_blank());
        self
    }

    pub fn with_appointment(mut self, appointment: ScheduleItem) -> Self {
        self.appointment = appointment;
        self
    }

    pub fn with_financial_plans(mut self, plans: impl IntoIterator<Item = FinancialPlan>) -> Self {
        self.financial_plans = plans.into_iter().collect();
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn next_of_kin_name(&self) -> Option<&NextOfKinName> {
        self.next_of_kin_name.as_ref()
    }

    pub fn next_of_kin_phone(&self) -> Option<&NextOfKinPhone> {
        self.next_of_kin_phone.as_ref()
    }

    pub fn remark(&self) -> Option<&Remark> {
        self.remark.as_ref()
    }

    pub fn appointment(&self) -> &ScheduleItem {
        &self.appointment
    }

    pub fn financial_plans(&self) -> &BTreeSet<FinancialPlan> {
        &self.financial_plans
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    // ========================================================================
    // IDENTITY
    // ========================================================================

    /// Weaker notion of equality used for duplicate detection:
    /// names match ignoring case.
    pub fn is_same_person(&self, other: &Person) -> bool {
        std::ptr::eq(self, other) || self.name.eq_ignore_case(&other.name)
    }
}

/// One-line summary used in command feedback
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;

        if let Some(nok) = &self.next_of_kin_name {
            write!(f, "; Next-of-kin: {}", nok)?;
            if let Some(phone) = &self.next_of_kin_phone {
                write!(f, " ({})", phone)?;
            }
        } else if let Some(phone) = &self.next_of_kin_phone {
            write!(f, "; Next-of-kin phone: {}", phone)?;
        }

        if let Some(remark) = &self.remark {
            write!(f, "; Remark: {}", remark)?;
        }

        // empty sets are left out
        if !self.financial_plans.is_empty() {
            f.write_str("; Financial plans: ")?;
            for plan in &self.financial_plans {
                write!(f, "{}", plan)?;
            }
        }

        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{}", tag)?;
            }
        }

        if let ScheduleItem::Scheduled(appointment) = &self.appointment {
            write!(f, "; Appointment: {}", appointment)?;
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
