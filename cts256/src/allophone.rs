//! The SP0256-AL2 allophone inventory and its numeric codes.
//!
//! The chip speaks one allophone per byte written to it. Bytes `0..=63` select
//! the 64 allophones below; the first five are silences of increasing length.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

macro_rules! allophones {
    ($($(#[$doc:meta])* $name:ident = $code:literal,)*) => {
        /// One SP0256-AL2 allophone. The discriminant is the byte sent to the chip.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Allophone {
            $($(#[$doc])* $name = $code,)*
        }

        impl Allophone {
            /// Every allophone, ordered by code.
            pub const ALL: [Allophone; 64] = [$(Allophone::$name,)*];

            /// The mnemonic used in rule tables, e.g. `"PA3"`.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Allophone::$name => stringify!($name),)*
                }
            }
        }
    };
}

allophones! {
    /// 10 ms pause.
    PA1 = 0,
    /// 30 ms pause.
    PA2 = 1,
    /// 50 ms pause.
    PA3 = 2,
    /// 100 ms pause.
    PA4 = 3,
    /// 200 ms pause.
    PA5 = 4,
    OY = 5,
    AY = 6,
    EH = 7,
    KK3 = 8,
    PP = 9,
    JH = 10,
    NN1 = 11,
    IH = 12,
    TT2 = 13,
    RR1 = 14,
    AX = 15,
    MM = 16,
    TT1 = 17,
    DH1 = 18,
    IY = 19,
    EY = 20,
    DD1 = 21,
    UW1 = 22,
    AO = 23,
    AA = 24,
    YY2 = 25,
    AE = 26,
    HH1 = 27,
    BB1 = 28,
    TH = 29,
    UH = 30,
    UW2 = 31,
    AW = 32,
    DD2 = 33,
    GG3 = 34,
    VV = 35,
    GG1 = 36,
    SH = 37,
    ZH = 38,
    RR2 = 39,
    FF = 40,
    KK2 = 41,
    KK1 = 42,
    ZZ = 43,
    NG = 44,
    LL = 45,
    WW = 46,
    XR = 47,
    WH = 48,
    YY1 = 49,
    CH = 50,
    ER1 = 51,
    ER2 = 52,
    OW = 53,
    DH2 = 54,
    SS = 55,
    NN2 = 56,
    HH2 = 57,
    OR = 58,
    AR = 59,
    YR = 60,
    GG2 = 61,
    EL = 62,
    BB2 = 63,
}

/// Appended to every translation so the chip settles between utterances.
pub const END_OF_UTTERANCE: Allophone = Allophone::PA3;

impl Allophone {
    /// The byte that makes the chip speak this allophone.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up the allophone for a chip code; codes above 63 have none.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }
}

impl TryFrom<u8> for Allophone {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| Error::UnknownAllophone(format!("code {code}")))
    }
}

impl FromStr for Allophone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name() == s)
            .ok_or_else(|| Error::UnknownAllophone(s.to_string()))
    }
}

impl fmt::Display for Allophone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps allophones to the bytes the chip expects, in order.
#[must_use]
pub fn encode(allophones: &[Allophone]) -> Vec<u8> {
    allophones.iter().map(|a| a.code()).collect()
}

/// Maps allophone mnemonics to chip bytes.
///
/// # Errors
///
/// [`Error::UnknownAllophone`] for the first name outside the inventory.
pub fn encode_names<I, S>(names: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().parse::<Allophone>().map(Allophone::code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_declaration_order() {
        for (i, a) in Allophone::ALL.iter().enumerate() {
            assert_eq!(usize::from(a.code()), i, "{a}");
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Allophone::ALL.iter().map(|a| a.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 64);
    }

    #[test]
    fn parse_known_names() {
        assert_eq!("PA1".parse::<Allophone>(), Ok(Allophone::PA1));
        assert_eq!("BB2".parse::<Allophone>(), Ok(Allophone::BB2));
        assert_eq!("NN1".parse::<Allophone>().map(Allophone::code), Ok(11));
    }

    #[test]
    fn parse_unknown_name() {
        assert_eq!(
            "pa1".parse::<Allophone>(),
            Err(Error::UnknownAllophone("pa1".to_string()))
        );
    }

    #[test]
    fn from_code_bounds() {
        assert_eq!(Allophone::from_code(63), Some(Allophone::BB2));
        assert_eq!(Allophone::from_code(64), None);
        assert!(Allophone::try_from(200).is_err());
    }

    #[test]
    fn encode_pauses() {
        assert_eq!(encode(&[Allophone::PA1, Allophone::PA3]), vec![0, 2]);
        assert_eq!(encode(&[]), Vec::<u8>::new());
    }

    #[test]
    fn encode_names_rejects_unknown() {
        assert_eq!(encode_names(["HH1", "EH"]), Ok(vec![27, 7]));
        assert_eq!(
            encode_names(["HH1", "QQ"]),
            Err(Error::UnknownAllophone("QQ".to_string()))
        );
    }
}
