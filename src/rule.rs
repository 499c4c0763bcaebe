use crate::error::Error;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// An elementary rule, given by its Wolfram code.
///
/// `rule_table[i]` is the next state of a cell whose neighborhood, read as
/// a 3-bit number `left center right`, equals `7 - i`. So `rule_table[0]`
/// belongs to `111` and `rule_table[7]` to `000`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Rule {
    number: u8,
    rule_table: [bool; 8],
}

impl Rule {
    pub const fn new(number: u8) -> Self {
        let mut rule_table = [false; 8];
        let mut i = 0;
        while i < 8 {
            rule_table[i] = number & 0x80 >> i != 0;
            i += 1;
        }
        Rule { number, rule_table }
    }

    /// Negative codes are clamped to rule 0. Codes above 255 have no 8-bit
    /// pattern and are rejected.
    pub fn from_code(code: i64) -> Result<Self, Error> {
        match u8::try_from(code.max(0)) {
            Ok(number) => Ok(Rule::new(number)),
            Err(_) => Err(Error::InvalidRuleNumber(code)),
        }
    }

    pub const fn number(&self) -> u8 {
        self.number
    }

    pub const fn table(&self) -> &[bool; 8] {
        &self.rule_table
    }

    pub const fn index(left: bool, center: bool, right: bool) -> usize {
        7 - ((left as usize) << 2 | (center as usize) << 1 | right as usize)
    }

    pub const fn evaluate(&self, left: bool, center: bool, right: bool) -> bool {
        self.rule_table[Rule::index(left, center, right)]
    }
}

impl From<u8> for Rule {
    fn from(number: u8) -> Self {
        Rule::new(number)
    }
}

impl TryFrom<i64> for Rule {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Rule::from_code(code)
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "W{}", self.number)
    }
}

// Accepts a bare code (`30`) or Golly's `W30` notation.
impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('W')
            .or_else(|| trimmed.strip_prefix('w'))
            .unwrap_or(trimmed);
        let code = digits
            .parse::<i64>()
            .map_err(|_| Error::InvalidRuleLine(s.to_string()))?;
        Rule::from_code(code)
    }
}

#[cfg(test)]
#[allow(clippy::unusual_byte_groupings)]
mod tests {
    use super::*;

    const NEIGHBORHOODS: [(bool, bool, bool); 8] = [
        (true, true, true),
        (true, true, false),
        (true, false, true),
        (true, false, false),
        (false, true, true),
        (false, true, false),
        (false, false, true),
        (false, false, false),
    ];

    #[test]
    fn test_index_order() {
        for (i, &(l, c, r)) in NEIGHBORHOODS.iter().enumerate() {
            assert_eq!(Rule::index(l, c, r), i);
        }
    }

    #[test]
    fn test_rule_table() {
        let rule = Rule::new(0b_0001_1110);
        assert_eq!(
            rule.rule_table,
            [false, false, false, true, true, true, true, false]
        );
        let rule = Rule::new(110);
        assert_eq!(
            rule.rule_table,
            [false, true, true, false, true, true, true, false]
        );
    }

    #[test]
    fn test_rule_0_and_255() {
        let dead = Rule::new(0);
        let alive = Rule::new(255);
        for &(l, c, r) in NEIGHBORHOODS.iter() {
            assert_eq!(dead.evaluate(l, c, r), false);
            assert_eq!(alive.evaluate(l, c, r), true);
        }
    }

    #[test]
    fn test_rule_90_is_xor() {
        let rule = Rule::new(90);
        for &(l, c, r) in NEIGHBORHOODS.iter() {
            assert_eq!(rule.evaluate(l, c, r), l ^ r);
        }
    }

    #[test]
    fn test_evaluate_matches_bits() {
        for number in 0..=255u8 {
            let rule = Rule::new(number);
            for &(l, c, r) in NEIGHBORHOODS.iter() {
                let pattern = (l as u8) << 2 | (c as u8) << 1 | r as u8;
                assert_eq!(rule.evaluate(l, c, r), number >> pattern & 1 == 1);
            }
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Rule::from_code(30).unwrap().number(), 30);
        assert_eq!(Rule::from_code(-7).unwrap(), Rule::new(0));
        assert_eq!(Rule::from_code(255).unwrap().number(), 255);
        assert!(matches!(
            Rule::from_code(256),
            Err(Error::InvalidRuleNumber(256))
        ));
    }

    #[test]
    fn test_parse_rule() {
        assert_eq!("30".parse::<Rule>().unwrap(), Rule::new(30));
        assert_eq!(" W110 ".parse::<Rule>().unwrap(), Rule::new(110));
        assert_eq!("w90".parse::<Rule>().unwrap(), Rule::new(90));
        assert_eq!("-3".parse::<Rule>().unwrap(), Rule::new(0));
        assert!(matches!(
            "B3/S23".parse::<Rule>(),
            Err(Error::InvalidRuleLine(_))
        ));
        assert!(matches!(
            "300".parse::<Rule>(),
            Err(Error::InvalidRuleNumber(300))
        ));
        assert_eq!(Rule::new(184).to_string(), "W184");
    }
}
