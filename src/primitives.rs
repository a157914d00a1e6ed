use crate::{WideWord, Word};

/// Computes `lhs + rhs + carry`, returning the result along with the new carry (0 or 1).
#[inline(always)]
pub(crate) const fn carrying_add(lhs: Word, rhs: Word, carry: Word) -> (Word, Word) {
    let ret = (lhs as WideWord) + (rhs as WideWord) + (carry as WideWord);
    (ret as Word, (ret >> Word::BITS) as Word)
}

#[cfg(test)]
mod tests {
    use super::carrying_add;
    use crate::Word;

    #[test]
    fn carrying_add_no_carry() {
        assert_eq!(carrying_add(1, 2, 0), (3, 0));
        assert_eq!(carrying_add(1, 2, 1), (4, 0));
    }

    #[test]
    fn carrying_add_with_carry() {
        assert_eq!(carrying_add(Word::MAX, 1, 0), (0, 1));
        assert_eq!(carrying_add(Word::MAX, Word::MAX, 1), (Word::MAX, 1));
    }
}
