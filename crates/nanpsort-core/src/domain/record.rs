use crate::domain::phone::PhoneNumber;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: String,
    pub number: PhoneNumber,
}

impl Record {
    pub fn new(name: impl Into<String>, number: PhoneNumber) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }

    /// `(AAA) EEE-LLLL<TAB>NAME`
    pub fn to_output_line(&self) -> String {
        format!("{}\t{}", self.number, self.name)
    }
}
