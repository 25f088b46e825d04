//! The built-in letter-to-sound rules.
//!
//! Derived from the rule ROM of the CTS256A-AL2 text-to-speech controller,
//! the companion chip of the SP0256-AL2. Each section lists the rules for
//! one leading character; within a section the first rule whose literal and
//! contexts match wins, so the order below is significant.
//!
//! A rule reads as `left[literal]right = output`. Contexts use the
//! meta-symbols of [`MetaSymbol`](crate::MetaSymbol).

#[allow(clippy::enum_glob_use)]
use crate::allophone::Allophone::{self, *};

/// One rule as written in the table, before its contexts are compiled.
pub(crate) struct RuleSpec {
    pub(crate) left: &'static str,
    pub(crate) literal: &'static str,
    pub(crate) right: &'static str,
    pub(crate) output: &'static [Allophone],
}

const fn rule(
    left: &'static str,
    literal: &'static str,
    right: &'static str,
    output: &'static [Allophone],
) -> RuleSpec {
    RuleSpec {
        left,
        literal,
        right,
        output,
    }
}

pub(crate) static SECTIONS: &[(char, &[RuleSpec])] = &[
    ('-', &[rule("", "-", "", &[PA1])]),
    ('\'', &[
        rule(".", "'S", "", &[ZZ]),
        rule("#:.E", "'S", "", &[ZZ]),
        rule("#", "'S", "", &[ZZ]),
        rule("", "'S", "", &[SS]),
        rule("", "'", "", &[]),
    ]),
    (',', &[rule("", ",", "", &[PA4])]),
    (';', &[rule("", ";", "", &[PA4])]),
    (' ', &[rule("", " ", "", &[PA2])]),
    ('.', &[rule("", ".", "", &[PA5, PA5])]),
    ('!', &[rule("", "!", "", &[PA5, PA5])]),
    ('?', &[rule("", "?", "", &[PA5, PA5])]),
    (':', &[rule("", ":", "", &[PA5])]),
    ('%', &[rule("", "%", "", &[PP, ER2, SS, SS, EH, NN1, TT2, PA1])]),
    ('$', &[rule("", "$", "", &[DD2, AA, LL, ER1, ZZ, PA1])]),
    ('#', &[rule("", "#", "", &[NN2, AX, MM, BB1, ER1, PA1])]),
    ('A', &[
        rule("<", "A", "<", &[EY]),
        rule("", "ACHE", "", &[EY, PA3, KK2]),
        rule("", "A", "<", &[AX]),
        rule("<", "ARE", "<", &[AR]),
        rule("^", "AS", "#", &[EY, SS]),
        rule("<", "AR", "O", &[AX, RR2]),
        rule("<", "A", "^R", &[AX]),
        rule("", "AR", "#", &[XR]),
        rule("<:", "ANY", "", &[EH, NN1, IY]),
        rule("", "AGAIN", "", &[AX, PA2, GG1, EH, EH, NN1]),
        rule("", "A", "WA", &[AX]),
        rule("", "AW", "", &[AO, AO]),
        rule("<:", "A", "^+<", &[EY]),
        rule("<", "A", "^#", &[AX]),
        rule("", "A", "^+#", &[EY]),
        rule("#:", "ALLY", "", &[AX, LL, IY]),
        rule("<", "AL", "#", &[AX, LL]),
        rule("#:", "AG", "E", &[IH, PA2, JH]),
        rule("", "A", "^%", &[EY]),
        rule("", "A", "^+:#", &[AE]),
        rule("<", "ARR", "", &[AX, RR2]),
        rule("", "ARR", "", &[AE, RR2]),
        rule("<:", "AR", "<", &[AR]),
        rule("", "AR", "<", &[ER1]),
        rule("", "AR", "", &[AR]),
        rule("", "AIR", "", &[EH, XR]),
        rule("", "AI", "", &[EY]),
        rule("", "AY", "", &[EY]),
        rule("", "AU", "", &[AO]),
        rule("#:", "AL", "<", &[EL]),
        rule("#:", "ALS", "<", &[EL, ZZ]),
        rule("", "ALK", "", &[AO, PA3, KK2]),
        rule("", "A", "L^", &[AO]),
        rule("<:", "ABLE", "", &[EY, PA2, BB2, EL]),
        rule("", "ABLE", "", &[AX, PA2, BB2, EL]),
        rule("", "ANG", "+", &[EY, NN1, PA2, JH]),
        rule("", "A", "", &[AE]),
    ]),
    ('B', &[
        rule("<", "B", "<", &[PA2, BB2, IY]),
        rule("MAY", "BE", "", &[BB2, IY]),
        rule("<", "BE", "^#", &[PA2, BB2, IY]),
        rule("<", "BEEN", "<", &[BB2, IH, NN1]),
        rule("<", "BOTH", "<", &[PA2, BB2, OW, TH]),
        rule("<", "BUS", "#", &[PA2, BB2, IH, ZZ]),
        rule("", "BUIL", "", &[PA2, BB2, IH, IH, LL]),
        rule("", "B", "B", &[]),
        rule("", "B", "<", &[PA2, BB1]),
        rule("", "B", "S", &[PA2, BB1]),
        rule("", "BT", "", &[PA3, TT2]),
        rule("<", "B", "^", &[PA2, BB1]),
        rule("", "B", "", &[PA2, BB2]),
    ]),
    ('C', &[
        rule("<", "C", "<", &[SS, SS, IY]),
        rule("<", "CH", "^", &[PA3, KK1]),
        rule("^E", "CH", "", &[PA3, KK1]),
        rule("", "CH", "", &[PA3, CH]),
        rule("S", "CI", "#", &[SS, SS, AY]),
        rule("", "CI", "#", &[SH]),
        rule("", "CI", "O", &[SH]),
        rule("", "CI", "EN", &[SH]),
        rule("", "C", "+", &[SS, SS]),
        rule("C", "C", "", &[]),
        rule("", "CK", "#", &[PA3, KK1]),
        rule("", "CK", "", &[PA3, KK2]),
        rule("", "COM", "%", &[PA3, KK3, AX, MM]),
        rule("", "CC", "+", &[PA3, KK1, SS, SS]),
        rule("", "C", "<", &[PA3, KK2]),
        rule("", "C", "S", &[PA3, KK2]),
        rule("", "C", ">", &[PA3, KK3]),
        rule("", "C", "", &[PA3, KK1]),
    ]),
    ('D', &[
        rule("<", "D", "<", &[PA2, DD2, IY]),
        rule("", "D", "D", &[]),
        rule("#:", "DED", "<", &[PA2, DD2, IH, PA2, DD1]),
        rule(".E", "D", "<", &[PA2, DD1]),
        rule("#*E", "D", "<", &[PA3, TT2]),
        rule("<", "DE", "^#", &[PA2, DD2, IH]),
        rule("<", "DO", "<", &[PA2, DD2, UW2]),
        rule("<", "DOES", "", &[PA2, DD2, AX, ZZ]),
        rule("<", "DOING", "", &[PA2, DD2, UW2, IH, NG]),
        rule("<", "DOW", "", &[PA2, DD2, AW]),
        rule("#", "DU", ":A", &[PA2, JH, UW1]),
        rule("", "DG", "", &[PA2, JH]),
        rule("", "DJ", "", &[PA2, JH]),
        rule("", "D", "<", &[PA2, DD1]),
        rule("", "D", "S", &[PA2, DD1]),
        rule("", "D", "", &[PA2, DD2]),
    ]),
    ('E', &[
        rule("<", "E", "<", &[IY]),
        rule("#:", "E", "<", &[]),
        rule("'*", "E", "<", &[]),
        rule("*", "E", "<", &[IY]),
        rule("#", "ED", "<", &[PA2, DD1]),
        rule("#:", "E", "D<", &[]),
        rule("", "EV", "ER", &[EH, VV]),
        rule("#*", "EL", "", &[EL]),
        rule("", "ERI", "#", &[YR, IY]),
        rule("#:", "ER", "#", &[ER1]),
        rule("", "E", "^%", &[IY]),
        rule("", "ERI", "", &[EH, EH, RR1, IH]),
        rule("", "ER", "#", &[EH, XR]),
        rule("", "ER", "", &[ER1]),
        rule("<", "EVEN", "<", &[IY, VV, IH, NN1]),
        rule("<", "EVEN", "", &[IY, VV, EH, EH, NN1]),
        rule("#:", "EW", "", &[YY1, UW2]),
        rule("@", "EW", "", &[UW2]),
        rule("", "EW", "", &[YY1, UW2]),
        rule("", "E", "O", &[IY]),
        rule("#:&", "ES", "<", &[IH, ZZ]),
        rule("#:", "E", "S<", &[]),
        rule("#:", "ELY", "<", &[LL, IY]),
        rule("#:", "EMENT", "", &[MM, IH, NN1, PA3, TT2]),
        rule("", "EFUL", "", &[FF, UH, LL]),
        rule("", "EER", "", &[YR]),
        rule("", "EE", "", &[IY]),
        rule("", "EARN", "", &[ER2, NN1]),
        rule("<", "EAR", "^", &[ER2]),
        rule("*", "EAR", "", &[YR]),
        rule("", "EAD", "", &[EH, EH, PA2, DD1]),
        rule("#:", "EA", "<", &[IY, AX]),
        rule("", "EA", "SU", &[EH]),
        rule("", "EA", "", &[IY]),
        rule("", "EIGH", "", &[EY]),
        rule("", "EI", "", &[IY]),
        rule("<", "EYE", "", &[AY]),
        rule("", "EY", "", &[IY]),
        rule("", "EU", "", &[UW1]),
        rule("", "E", "", &[EH]),
    ]),
    ('F', &[
        rule("<", "F", "<", &[EH, EH, FF]),
        rule("", "FU", "L", &[FF, UH]),
        rule("", "F", "F", &[]),
        rule("", "FOUR", "", &[FF, OR]),
        rule("", "F", "", &[FF]),
    ]),
    ('G', &[
        rule("<", "G", "<", &[PA2, JH, IY]),
        rule("", "GIV", "", &[PA2, GG1, IH, VV]),
        rule("<", "G", "I^", &[PA2, GG1]),
        rule("", "GE", "T", &[PA2, GG1, EH]),
        rule("SU", "GGES", "", &[PA2, GG2, PA2, JH, EH, EH, SS]),
        rule("", "GG", "", &[PA2, GG1]),
        rule("", "GREAT", "", &[PA2, GG3, RR2, EY, TT2]),
        rule("", "G", "<", &[PA2, GG3]),
        rule("<B#", "G", "", &[PA2, GG2]),
        rule("", "G", "+", &[PA2, JH]),
        rule("#", "GH", "", &[FF]),
        rule("", "GH", "", &[PA2, GG2]),
        rule("", "G", "", &[PA2, GG2]),
    ]),
    ('H', &[
        rule("<", "H", "<", &[EY, PA3, CH]),
        rule("<", "HAV", "", &[HH1, AE, VV]),
        rule("<", "HERE", "", &[HH1, YR]),
        rule("<", "HOUR", "", &[AW, ER1]),
        rule("", "HOW", "", &[HH1, AW]),
        rule("", "HYP", "", &[HH1, IH, PA3, PP]),
        rule("", "H", ">", &[HH2]),
        rule("", "H", "#", &[HH1]),
        rule("", "H", "", &[]),
    ]),
    ('I', &[
        rule("<", "IN", "", &[IH, NN1]),
        rule("N", "I", "NE", &[AY]),
        rule("", "I", "<", &[AY]),
        rule("", "IN", "D", &[AY, NN1]),
        rule("<:", "I", "%", &[AY]),
        rule("<:", "IED", "<", &[AY, PA2, DD1]),
        rule("#*", "IED", "<", &[IY, PA2, DD1]),
        rule("FR", "IE", "ND", &[EH]),
        rule("", "IEN", "", &[IY, IH, NN1]),
        rule("", "IE", "T", &[AY, IH]),
        rule("", "IER", "", &[IY, ER1]),
        rule("", "I", "%", &[IY]),
        rule("", "IE", "", &[IY]),
        rule("", "IN", "%", &[IY, NN1]),
        rule("", "IR", "#", &[AY, ER1]),
        rule("", "I", "^%", &[AY]),
        rule("", "I", "^+:#", &[IH]),
        rule("", "IZ", "%", &[AY, ZZ]),
        rule("", "IS", "%", &[AY, ZZ]),
        // Listed as `[I]$%` in the ROM dump where `D%` is meant. `I ^%` above already covers it.
        rule("", "I", "D%", &[AY]),
        rule("+^", "I", "^+", &[IH]),
        rule("", "I", "T%", &[AY]),
        rule("#*", "I", "^+", &[IH]),
        rule("", "IR", "", &[ER2]),
        rule("*", "I", "ON", &[YY1]),
        rule("", "IGH", "", &[AY]),
        rule("", "ILD", "", &[AY, EL, PA2, DD1]),
        rule("", "IGN", "", &[AY, NN1]),
        rule("", "IGN", "^", &[AY, NN1]),
        rule("", "IGN", "%", &[AY, NN1]),
        rule("", "IQUE", "", &[IY, PA3, KK2]),
        rule("", "I", "A", &[AY]),
        rule("M", "I", "C", &[AY]),
        rule("", "I", "", &[IH]),
    ]),
    ('J', &[
        rule("<", "J", "<", &[PA2, JH, EY]),
        rule("", "J", "", &[PA2, JH]),
    ]),
    ('K', &[
        rule("<", "K", "<", &[PA3, KK1, EY]),
        rule("<", "K", "N", &[]),
        rule("", "K", "<", &[PA3, KK2]),
        rule("", "K", "", &[PA3, KK1]),
    ]),
    ('L', &[
        rule("<", "L", "<", &[EH, EH, LL]),
        rule("", "LO", "C#", &[LL, OW]),
        rule("", "L", "L", &[]),
        rule("", "L", "%", &[EL]),
        rule("", "LEAD", "", &[LL, IY, PA2, DD1]),
        rule("", "LAUGH", "", &[LL, AE, FF]),
        rule("", "L", "", &[LL]),
    ]),
    ('M', &[
        rule("", "MB", "", &[MM]),
        rule("<", "M", "<", &[EH, EH, MM]),
        rule("", "MOV", "", &[MM, UW2, VV]),
        rule("", "M", "M", &[]),
        rule("", "M", "", &[MM]),
    ]),
    ('N', &[
        rule("<", "N", "<", &[EH, EH, NN1]),
        rule("E", "NG", "+", &[NN1, PA2, JH]),
        rule("", "NG", "R", &[NG, PA2, GG1]),
        rule("", "NG", "#", &[NG, PA2, GG1]),
        rule("", "NGL", "%", &[NG, PA2, GG1, EL]),
        rule("", "NG", "", &[NG]),
        rule("", "NK", "<", &[NG, PA3, KK2]),
        rule("", "NK", "S", &[NG, PA3, KK2]),
        rule("", "NK", "", &[NG, PA3, KK1]),
        rule("<", "NOW", "<", &[NN2, AW]),
        rule("", "N", "N", &[]),
        rule("#:", "NU", "", &[NN1, YY1, UW1]),
        rule("<", "N", "", &[NN2]),
        rule("", "N'T", "", &[NN1, PA3, TT2]),
        rule("", "N", "", &[NN1]),
    ]),
    ('O', &[
        rule("<", "O", "<", &[OW]),
        rule("", "OF", "<", &[AX, VV]),
        rule("", "OROUGH", "", &[AX, AX, RR2, OW]),
        rule("#:", "OR", "<", &[ER1]),
        rule("#:", "ORS", "<", &[ER1, ZZ]),
        rule("", "OR", "", &[OR]),
        rule("<", "ONE", "", &[WW, AX, NN1]),
        rule("+", "ONE", "", &[WW, AX, NN1]),
        rule("*", "OW", "N", &[AW]),
        rule("", "OW", "", &[OW]),
        rule("<", "OVER", "", &[OW, VV, ER1]),
        rule("", "OV", "", &[AX, VV]),
        rule("", "O", "^%", &[OW]),
        rule("", "O", "^EN", &[OW]),
        rule("", "O", "^I#", &[OW]),
        rule("", "OL", "D", &[OW, LL]),
        rule("", "OUGHT", "", &[AO, AO, PA3, TT2]),
        rule("", "OUGH", "", &[AX, AX, FF]),
        rule("&", "OUR", "", &[OR]),
        rule(":", "OUR", "", &[AW, ER1]),
        rule("<", "OU", "", &[AW]),
        rule(":", "OU", "S#", &[AW]),
        rule("", "OUS", "", &[AX, SS]),
        rule("", "OULD", "", &[UH, PA2, DD1]),
        rule("^", "OU", "^L", &[AX]),
        rule("", "OUP", "", &[UW2, PA3, PP]),
        rule("", "OU", "", &[AW]),
        rule("", "OY", "", &[OY]),
        rule("", "OING", "", &[OW, IH, NG]),
        rule("", "OI", "", &[OY]),
        rule("", "OOR", "", &[OR]),
        rule("", "OOK", "<", &[UH, PA3, KK2]),
        rule("", "OOK", "S", &[UH, PA3, KK2]),
        rule("", "OOK", "", &[UH, PA3, KK1]),
        rule("", "OOD", "<", &[UH, PA2, DD1]),
        rule("", "OO", "D", &[UH]),
        rule("", "OO", "", &[UW2]),
        rule("", "O", "E", &[OW]),
        rule("", "O", "<", &[OW]),
        rule("", "OAR", "", &[OR]),
        rule("", "OA", "", &[OW]),
        rule("<", "ONLY", "", &[OW, NN1, LL, IY]),
        rule("<", "ONCE", "", &[WW, AX, NN1, SS]),
        rule("", "ON'T", "", &[OW, NN1, PA3, TT2]),
        rule("C", "O", "N", &[AX]),
        rule("", "O", "NG", &[AO]),
        rule("<*", "O", "N", &[AX]),
        rule("I", "ON", "", &[AX, NN1]),
        rule("#:", "ON", "<", &[AX, NN1]),
        rule("", "O", "ST<", &[OW]),
        rule("", "OF", "^", &[AO, FF]),
        rule("", "OTHER", "", &[AX, DH2, ER1]),
        rule("", "OSS", "<", &[AO, AO, SS, SS]),
        rule("#*", "OM", "", &[AX, MM]),
        rule("", "O", "", &[AA]),
    ]),
    ('P', &[
        rule("", "PSYCH", "", &[SS, SS, AY, PA2, KK1]),
        rule("<", "P", "<", &[PA3, PP, IY]),
        rule("", "PH", "", &[FF]),
        rule("", "PEOP", "", &[PA3, PP, IY, PA3, PP]),
        rule("", "POW", "", &[PA3, PP, AW]),
        rule("", "PUT", "<", &[PA3, PP, UH, PA3, TT2]),
        rule("", "P", "P", &[]),
        rule("", "P", "", &[PA3, PP]),
    ]),
    ('Q', &[
        rule("<", "Q", "<", &[PA3, KK1, YY1, UW2]),
        rule("", "QUAR", "", &[PA3, KK3, WH, AA]),
        rule("", "QUE", "<", &[PA3, KK1, YY1, UW2]),
        rule("", "QU", "", &[PA3, KK3, WH]),
        rule("", "Q", "", &[PA3, KK3]),
    ]),
    ('R', &[
        rule("<", "R", "<", &[AR]),
        rule("<", "RE", "^#", &[RR1, IY]),
        rule("", "RH", "", &[RR1]),
        rule("", "R", "R", &[]),
        rule("*", "R", "", &[RR2]),
        rule("", "R", "", &[RR1]),
    ]),
    ('S', &[
        rule("<", "S", "<", &[EH, EH, SS, SS]),
        rule("", "SH", "", &[SH]),
        rule("#", "SION", "", &[ZH, AX, NN1]),
        rule("", "SOME", "", &[SS, AX, MM]),
        rule("#", "SUR", "#", &[ZH, ER1]),
        rule("", "SUR", "#", &[SH, ER1]),
        rule("#", "SU", "#", &[ZH, UW1]),
        rule("#", "SSU", "#", &[SH, UW1]),
        rule("#", "SED", "<", &[ZZ, PA2, DD1]),
        rule("#", "S", "#", &[ZZ]),
        rule("", "SAID", "", &[SS, SS, EH, EH, PA2, DD1]),
        rule("^", "SION", "", &[SH, AX, NN1]),
        rule("", "S", "S", &[]),
        rule(".", "S", "<", &[ZZ]),
        rule("#:.E", "S", "<", &[ZZ]),
        rule("#*?", "S", "<", &[ZZ]),
        rule("#*#", "S", "<", &[SS]),
        rule("U", "S", "<", &[SS]),
        rule("<:#", "S", "<", &[ZZ]),
        rule("<", "SCH", "", &[SS, SS, PA3, KK2]),
        rule("", "S", "C+", &[]),
        rule("#", "SM", "", &[ZZ, MM]),
        rule("#", "S", "N'", &[ZZ]),
        rule("", "S", "<", &[SS]),
        rule("", "S", "", &[SS, SS]),
    ]),
    ('T', &[
        rule("", "T", "'S", &[PA3, TT1]),
        rule("", "TCH", "", &[PA3, CH]),
        rule("<", "T", "<", &[PA3, TT2, IY]),
        rule("<", "THE", "<#", &[DH1, IY]),
        rule("<", "THE", "<", &[DH1, AX]),
        rule("", "TO", "<", &[PA3, TT2, UW2]),
        rule("", "TODAY", "", &[PA3, TT2, UW2, DD2, EY]),
        rule("", "THA", "^<", &[DH1, AE]),
        rule("<", "THIS", "<", &[DH1, IH, SS, SS]),
        rule("<", "THEY", "", &[DH1, EY]),
        rule("<", "THERE", "", &[DH1, XR]),
        rule("<", "THER", "", &[TH, ER1]),
        rule("", "THER", "", &[DH2, ER1]),
        rule("", "THEIR", "", &[DH1, XR]),
        rule("<", "THEM", ":", &[DH1, EH, MM]),
        rule("", "THESE", "<", &[DH1, IY, ZZ]),
        rule("<", "THEN", "", &[DH1, EH, NN1]),
        rule("", "THROUGH", "<", &[TH, RR2, UW2]),
        rule("", "THOSE", "", &[DH1, OW, SS]),
        rule("", "THOUGH", "<", &[DH1, OW]),
        rule("<", "THUS", "", &[DH1, AX, SS, SS]),
        rule("", "THE", "<", &[DH1]),
        rule("", "TH", "", &[TH]),
        rule("#:", "TED", "<", &[PA3, TT2, IH, PA2, DD1]),
        rule("S", "TI", "#N", &[PA3, CH]),
        rule("", "TI", "O", &[SH]),
        rule("", "TI", "A", &[SH]),
        rule("", "TIEN", "", &[SH, AX, NN1]),
        rule("", "TUR", "#", &[PA3, CH, ER1]),
        rule("", "TU", "A", &[PA3, CH, UW1]),
        rule("<", "TWO", "", &[PA3, TT2, UW2]),
        rule("", "T", "T", &[]),
        rule("", "T", "S", &[PA3, TT1]),
        rule("", "T", "", &[PA3, TT2]),
    ]),
    ('U', &[
        rule("<", "U", "<", &[YY1, UW2]),
        rule("", "UN", "I", &[YY2, UW1, NN1]),
        rule("<", "UN", "", &[AX, NN1]),
        rule("<", "UPON", "", &[AX, PA3, PP, AA, NN1]),
        rule("@", "UR", "#", &[UW1, ER1]),
        rule("", "UR", "#", &[YY1, UW1, ER1]),
        rule("", "UR", "*", &[ER1]),
        rule("", "U", "^<", &[AX]),
        rule("", "U", "^^", &[AX]),
        rule("", "UY", "", &[AY]),
        rule("<G", "U", "#", &[]),
        rule("G", "U", "%", &[]),
        rule("G", "U", "#", &[WW]),
        rule("@", "U", "", &[UW2]),
        rule("", "U", "", &[YY1, UW1]),
    ]),
    ('V', &[
        rule("<", "V", "<", &[VV, IY]),
        rule("", "VIEW", "", &[VV, YY1, UW2]),
        rule("", "V", "", &[VV]),
    ]),
    ('W', &[
        rule("<", "W", "<", &[PA2, DD2, AX, PA2, BB2, EL, YY1, UW1]),
        rule("<", "WERE", "", &[WW, ER2]),
        rule("<", "WAS", "<", &[WW, AX, ZZ]),
        rule("", "WA", "S", &[WW, AA]),
        rule("", "WA", "T", &[WW, AO, AO]),
        rule("", "WAN", "", &[WW, AA, NN1]),
        rule("", "WHERE", "", &[WH, XR]),
        rule("", "WHAT", "", &[WH, AA, PA3, TT2]),
        rule("", "WHOL", "", &[HH2, OW, LL]),
        rule("", "WHO", "", &[HH2, UW2]),
        rule("", "WO", "M", &[WW, AX]),
        rule("", "WH", "", &[WH]),
        rule("", "WAR", "", &[WW, OR]),
        rule("", "WOR", "^", &[WW, ER1]),
        rule("", "WR", "", &[RR1]),
        rule("", "W", "", &[WW]),
    ]),
    ('X', &[
        rule("<", "X", "<", &[EH, PA3, KK2, SS]),
        rule("<", "X", "", &[ZZ]),
        rule("", "X", "", &[PA3, KK2, SS]),
    ]),
    ('Y', &[
        rule("", "YOUR", "", &[YY2, OR]),
        rule("<", "Y", "<", &[WW, AY]),
        rule("", "YOUNG", "", &[YY2, AX, NG]),
        rule("<", "YOU", "", &[YY2, UW2]),
        rule("", "YEAR", ":", &[YY2, YR]),
        rule("<", "YES", "", &[YY2, EH, SS, SS]),
        rule("<", "Y", "", &[YY2]),
        rule("#*", "Y", "<", &[IY]),
        rule("#*", "Y", "I", &[IY]),
        rule("<:", "Y", "<", &[AY]),
        rule("<:", "Y", "#", &[AY]),
        rule("<:", "Y", "^+:#", &[IH]),
        rule("<:", "Y", "^#", &[AY]),
        rule("", "Y", "", &[IH]),
    ]),
    ('Z', &[
        rule("<", "Z", "<", &[ZZ, IY]),
        rule("", "Z", "Z", &[]),
        rule("", "Z", "", &[ZZ]),
    ]),
    ('0', &[rule("", "0", "", &[ZZ, YR, OW])]),
    ('1', &[rule("", "1", "", &[WW, AX, AX, NN1])]),
    ('2', &[rule("", "2", "", &[PA3, TT2, UW2])]),
    ('3', &[rule("", "3", "", &[TH, RR1, IY])]),
    ('4', &[rule("", "4", "", &[FF, OR])]),
    ('5', &[rule("", "5", "", &[FF, AY, VV])]),
    ('6', &[rule("", "6", "", &[SS, SS, IH, PA3, KK2, SS])]),
    ('7', &[rule("", "7", "", &[SS, SS, EH, VV, IH, NN1])]),
    ('8', &[rule("", "8", "", &[EY, PA3, TT2])]),
    ('9', &[rule("", "9", "", &[NN2, AY, NN1])]),
];
