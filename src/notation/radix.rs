const DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// A numeric base between 2 and 16.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Radix(u32);

impl Radix {
    pub const BINARY: Radix = Radix(2);
    pub const HEX: Radix = Radix(16);

    pub fn new(base: u32) -> Option<Radix> {
        (2..=16).contains(&base).then_some(Radix(base))
    }

    pub fn base(&self) -> u32 {
        self.0
    }
}

/// Renders `number` in the given base using digits `0-9A-F`.
///
/// Negative numbers are rendered by magnitude, without a sign.
pub fn to_base(number: i64, radix: Radix) -> String {
    let base = u64::from(radix.base());
    let mut remaining = number.unsigned_abs();
    if remaining == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while remaining > 0 {
        digits.push(DIGITS[(remaining % base) as usize]);
        remaining /= base;
    }

    digits.iter().rev().collect()
}
