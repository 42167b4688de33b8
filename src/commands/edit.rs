// ✏️ Edit Descriptor - which fields an edit replaces
//
// Scalar fields are Option slots: Some replaces, None keeps.
// Sets use a tri-state so "clear" and "leave alone" stay distinct.

use crate::person::{
    Address, Email, FinancialPlan, Name, NextOfKinName, NextOfKinPhone, Person, Phone, Tag,
};
use std::collections::BTreeSet;

// ============================================================================
// COLLECTION EDIT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CollectionEdit<T: Ord> {
    /// Leave the existing set untouched
    #[default]
    Keep,

    /// Empty the set
    Clear,

    /// Replace the set wholesale
    Replace(BTreeSet<T>),
}

impl<T: Ord + Clone> CollectionEdit<T> {
    pub fn is_edit(&self) -> bool {
        !matches!(self, CollectionEdit::Keep)
    }

    /// Resolve against the current set
    pub fn resolve(&self, current: &BTreeSet<T>) -> BTreeSet<T> {
        match self {
            CollectionEdit::Keep => current.clone(),
            CollectionEdit::Clear => BTreeSet::new(),
            CollectionEdit::Replace(values) => values.clone(),
        }
    }
}

// ============================================================================
// EDIT PERSON DESCRIPTOR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub next_of_kin_name: Option<NextOfKinName>,
    pub next_of_kin_phone: Option<NextOfKinPhone>,
    pub financial_plans: CollectionEdit<FinancialPlan>,
    pub tags: CollectionEdit<Tag>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.next_of_kin_name.is_some()
            || self.next_of_kin_phone.is_some()
            || self.financial_plans.is_edit()
            || self.tags.is_edit()
    }

    /// Build the edited person. Remark and appointment are carried over.
    pub fn apply(&self, person: &Person) -> Person {
        let mut edited = person.clone();

        if let Some(name) = &self.name {
            edited = edited.with_name(name.clone());
        }
        if let Some(phone) = &self.phone {
            edited = edited.with_phone(phone.clone());
        }
        if let Some(email) = &self.email {
            edited = edited.with_email(email.clone());
        }
        if let Some(address) = &self.address {
            edited = edited.with_address(address.clone());
        }
        if self.next_of_kin_name.is_some() {
            edited = edited.with_next_of_kin_name(self.next_of_kin_name.clone());
        }
        if self.next_of_kin_phone.is_some() {
            edited = edited.with_next_of_kin_phone(self.next_of_kin_phone.clone());
        }

        let plans = self.financial_plans.resolve(person.financial_plans());
        let tags = self.tags.resolve(person.tags());
        edited.with_financial_plans(plans).with_tags(tags)
    }
}
