pub mod person;

pub use person::{Address, Person, PersonDraft, StoredPerson};
