/// Telephone keypad digit for an ASCII letter, case-insensitive.
///
/// S sits with P, Q and R on the 7 key.
pub fn keypad_digit(ch: char) -> Option<char> {
    let digit = match ch.to_ascii_uppercase() {
        'A' | 'B' | 'C' => '2',
        'D' | 'E' | 'F' => '3',
        'G' | 'H' | 'I' => '4',
        'J' | 'K' | 'L' => '5',
        'M' | 'N' | 'O' => '6',
        'P' | 'Q' | 'R' | 'S' => '7',
        'T' | 'U' | 'V' => '8',
        'W' | 'X' | 'Y' | 'Z' => '9',
        _ => return None,
    };
    Some(digit)
}

/// Reduces free-form text to digits: letters become keypad digits, ASCII
/// digits pass through and everything else is dropped.
pub fn map_keypad_letters(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        // Non-ASCII decimal digits (e.g. Arabic-Indic) are dropped, not kept.
        if ch.is_ascii_digit() {
            out.push(ch);
        } else if let Some(digit) = keypad_digit(ch) {
            out.push(digit);
        }
    }
    out
}
