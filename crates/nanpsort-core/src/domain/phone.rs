//! NANP phone number value object.

use crate::domain::keypad::map_keypad_letters;
use crate::error::CoreError;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const CANONICAL_LEN: usize = 10;
const COUNTRY_CODE: u8 = b'1';

/// A validated North American phone number.
///
/// The canonical form is ten ASCII digits: a 3-digit area code, a 3-digit
/// exchange code and a 4-digit line number. An optional leading country
/// code `1` is accepted on input and stripped. Values order by their
/// canonical digits, which is the same as ordering by [`PhoneNumber::to_integer`].
///
/// # Example
///
/// ```
/// use nanpsort_core::PhoneNumber;
///
/// let phone = PhoneNumber::from_text("1 (202) 555-1234").unwrap();
/// assert_eq!(phone.to_string(), "(202) 555-1234");
/// assert_eq!(phone.to_integer(), 2025551234);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber {
    digits: String,
}

impl PhoneNumber {
    /// Parses free-form text. Letters are mapped through the telephone
    /// keypad and any other non-digit character is discarded before
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidNumber` when the remaining digits do not
    /// form a NANP number.
    pub fn from_text(raw: &str) -> Result<Self, CoreError> {
        Self::from_digits(map_keypad_letters(raw))
    }

    /// Parses the decimal representation of an integer. Negative values are
    /// rejected like any other malformed digit string.
    pub fn from_integer(value: i64) -> Result<Self, CoreError> {
        Self::from_digits(value.to_string())
    }

    fn from_digits(digits: String) -> Result<Self, CoreError> {
        match canonical_digits(&digits) {
            Some(canonical) => Ok(Self {
                digits: canonical.to_string(),
            }),
            None => Err(CoreError::InvalidNumber(digits)),
        }
    }

    pub fn area_code(&self) -> &str {
        &self.digits[..3]
    }

    pub fn exchange_code(&self) -> &str {
        &self.digits[3..6]
    }

    pub fn line_number(&self) -> &str {
        &self.digits[6..]
    }

    /// The canonical 10-digit string.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Numeric value of the canonical digits, used as a sort key.
    pub fn to_integer(&self) -> u64 {
        self.digits
            .bytes()
            .fold(0, |acc, b| acc * 10 + u64::from(b - b'0'))
    }

    /// `(AAA) EEE-LLLL`
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// `PhoneNumber('AAAEEELLLL')`
    pub fn to_debug_string(&self) -> String {
        format!("{self:?}")
    }
}

/// Returns the 10-digit body when `digits` matches
/// `1?[2-9](?:[02-8]\d|1[02-8])[2-9](?:[02-8]\d|1[02-8])\d{4}` in full.
fn canonical_digits(digits: &str) -> Option<&str> {
    let body = match digits.len() {
        CANONICAL_LEN => digits,
        n if n == CANONICAL_LEN + 1 && digits.as_bytes()[0] == COUNTRY_CODE => &digits[1..],
        _ => return None,
    };

    let bytes = body.as_bytes();
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if !is_office_code(&bytes[..3]) || !is_office_code(&bytes[3..6]) {
        return None;
    }
    Some(body)
}

/// Shared shape of area and exchange codes: `[2-9](?:[02-8]\d|1[02-8])`.
fn is_office_code(code: &[u8]) -> bool {
    let &[first, second, third] = code else {
        return false;
    };
    let leading = matches!(first, b'2'..=b'9');
    let tail = match second {
        b'0' | b'2'..=b'8' => third.is_ascii_digit(),
        b'1' => matches!(third, b'0' | b'2'..=b'8'),
        _ => false,
    };
    leading && tail
}

impl FromStr for PhoneNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl TryFrom<i64> for PhoneNumber {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_integer(value)
    }
}

impl TryFrom<u64> for PhoneNumber {
    type Error = CoreError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_digits(value.to_string())
    }
}

impl From<PhoneNumber> for u64 {
    fn from(phone: PhoneNumber) -> Self {
        phone.to_integer()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) {}-{}",
            self.area_code(),
            self.exchange_code(),
            self.line_number()
        )
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhoneNumber('{}')", self.digits)
    }
}

// Serialized as the canonical digit string.
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.digits.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PhoneNumberVisitor)
    }
}

struct PhoneNumberVisitor;

impl PhoneNumberVisitor {
    fn unsupported<E: de::Error>(kind: &str) -> E {
        E::custom(CoreError::UnsupportedInputType(kind.to_string()))
    }
}

impl<'de> Visitor<'de> for PhoneNumberVisitor {
    type Value = PhoneNumber;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a phone number as a string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        PhoneNumber::from_text(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        PhoneNumber::from_integer(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        PhoneNumber::try_from(v).map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Err(Self::unsupported("boolean"))
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Self::Value, E> {
        Err(Self::unsupported("float"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(Self::unsupported("null"))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(Self::unsupported("null"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Self::Value, A::Error> {
        Err(Self::unsupported("sequence"))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Self::Value, A::Error> {
        Err(Self::unsupported("map"))
    }
}
