// Command syntax: the prefixes that mark each argument

use std::fmt;

/// A short marker such as `n/` that introduces an argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Prefix(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_NEXT_OF_KIN_NAME: Prefix = Prefix::new("nkn/");
pub const PREFIX_NEXT_OF_KIN_PHONE: Prefix = Prefix::new("nkp/");
pub const PREFIX_FINANCIAL_PLAN: Prefix = Prefix::new("fp/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_REMARK: Prefix = Prefix::new("r/");
pub const PREFIX_APPOINTMENT: Prefix = Prefix::new("ap/");
pub const PREFIX_DATE: Prefix = Prefix::new("d/");
