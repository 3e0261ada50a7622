pub mod keypad;
pub mod phone;
pub mod record;

pub use keypad::{keypad_digit, map_keypad_letters};
pub use phone::PhoneNumber;
pub use record::Record;
