use super::{Allophone::*, Error, RuleTable, encode, translate};

#[test]
fn every_translation_ends_with_the_pause() {
    let table = RuleTable::builtin().unwrap();
    for text in ["", " ", "A", "WHY?", " 1984 ", "$5", "DON'T STOP!"] {
        let out = translate(&table, text).unwrap();
        assert_eq!(out.last(), Some(&PA3), "{text:?}");
    }
}

#[test]
fn translation_is_deterministic() {
    let table = RuleTable::builtin().unwrap();
    let text = " THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG. ";
    assert_eq!(translate(&table, text), translate(&table, text));
    let other = RuleTable::builtin().unwrap();
    assert_eq!(translate(&table, text), translate(&other, text));
}

#[test]
fn symbols_expand_to_words() {
    let table = RuleTable::builtin().unwrap();
    assert_eq!(
        translate(&table, "$"),
        Ok(vec![DD2, AA, LL, ER1, ZZ, PA1, PA3])
    );
    assert_eq!(
        translate(&table, "#"),
        Ok(vec![NN2, AX, MM, BB1, ER1, PA1, PA3])
    );
    assert_eq!(
        translate(&table, "%"),
        Ok(vec![PP, ER2, SS, SS, EH, NN1, TT2, PA1, PA3])
    );
}

#[test]
fn digits_are_spoken_one_by_one() {
    let table = RuleTable::builtin().unwrap();
    assert_eq!(
        translate(&table, "42"),
        Ok(vec![FF, OR, PA3, TT2, UW2, PA3])
    );
}

#[test]
fn failures_leave_no_partial_output() {
    let table = RuleTable::builtin().unwrap();
    let err = translate(&table, "OK\tTHEN").unwrap_err();
    assert_eq!(
        err,
        Error::NoRuleForCharacter {
            character: '\t',
            position: 2,
        }
    );
}

#[test]
fn pauses_encode_to_their_codes() {
    assert_eq!(encode(&[PA1, PA3]), vec![0, 2]);
}
