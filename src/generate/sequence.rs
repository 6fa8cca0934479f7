use std::cmp::Reverse;

use itertools::Itertools;

use crate::crossword::WordEntry;

/// Orders words longest first.
/// The sort is stable so words of equal length keep their input order.
pub(crate) fn order_words(words: &[WordEntry]) -> Vec<&WordEntry> {
    words.iter().sorted_by_key(|word| Reverse(word.len())).collect()
}

#[cfg(test)]
mod tests {
    use crate::crossword::WordEntry;
    use crate::generate::sequence::order_words;

    fn words(texts: &[&str]) -> Vec<WordEntry> {
        texts
            .iter()
            .map(|text| WordEntry::new(*text, "clue").unwrap())
            .collect()
    }

    #[test]
    fn longest_first() {
        let words = words(&["SOL", "CASA", "AB", "LUNA", "MAR"]);
        let ordered: Vec<String> = order_words(&words).iter().map(|w| w.text()).collect();
        assert_eq!(vec!["CASA", "LUNA", "SOL", "MAR", "AB"], ordered);
    }

    #[test]
    fn empty() {
        assert!(order_words(&[]).is_empty());
    }
}
