//! Heuristics that flag reports for a closer look by admins.
//!
//! The verdicts are advisory and never block a submission.

pub const MAX_REPORTS_PER_DAY: usize = 5;
pub const MAX_REPORTS_PER_WEEK: usize = 20;
pub const MIN_DESCRIPTION_LEN: usize = 10;

const MIN_VOWEL_RATIO: f64 = 0.2;
const MAX_CHAR_REPETITION: usize = 3;
const MAX_AVG_WORD_LEN: usize = 15;

/// Number of reports an author created recently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorActivity {
    /// Reports within the trailing 24 hours.
    pub last_day: usize,
    /// Reports within the trailing 7 days.
    pub last_week: usize,
}

impl AuthorActivity {
    pub const fn is_excessive(&self) -> bool {
        self.last_day > MAX_REPORTS_PER_DAY || self.last_week > MAX_REPORTS_PER_WEEK
    }
}

pub fn is_potential_spam(description: &str, activity: AuthorActivity) -> bool {
    activity.is_excessive()
        || description.chars().count() < MIN_DESCRIPTION_LEN
        || is_gibberish(description)
}

pub fn is_gibberish(text: &str) -> bool {
    let squeezed: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    if squeezed.is_empty() {
        return false;
    }
    if vowel_ratio(&squeezed).is_some_and(|ratio| ratio < MIN_VOWEL_RATIO) {
        return true;
    }
    if longest_run(&squeezed) > MAX_CHAR_REPETITION {
        return true;
    }
    !text.contains(' ')
        && squeezed.len() > MAX_AVG_WORD_LEN
        && average_word_len(text) > MAX_AVG_WORD_LEN as f64
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// `None` if there are no letters at all.
fn vowel_ratio(chars: &[char]) -> Option<f64> {
    let (letters, vowels) = chars
        .iter()
        .filter(|c| c.is_alphabetic())
        .fold((0usize, 0usize), |(letters, vowels), c| {
            (letters + 1, vowels + usize::from(is_vowel(*c)))
        });
    (letters > 0).then(|| vowels as f64 / letters as f64)
}

fn longest_run(chars: &[char]) -> usize {
    chars
        .chunk_by(|a, b| a == b)
        .map(<[char]>::len)
        .max()
        .unwrap_or_default()
}

/// Words are separated by whitespace only.
fn average_word_len(text: &str) -> f64 {
    let (words, total) = text
        .split_whitespace()
        .fold((0usize, 0usize), |(words, total), w| {
            (words + 1, total + w.chars().count())
        });
    if words == 0 {
        return 0.0;
    }
    total as f64 / words as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repetitive_text_is_gibberish() {
        assert!(is_gibberish("aaaaaaaaaa"));
        assert!(is_gibberish("help!!!! now"));
    }

    #[test]
    fn plain_sentence_is_not_gibberish() {
        assert!(!is_gibberish("The drainage near my house is flooded"));
        assert!(!is_gibberish("Baha sa kanto ng Quirino Avenue"));
    }

    #[test]
    fn consonant_soup_is_gibberish() {
        assert!(is_gibberish("xkcd qwrt zxcv bnm"));
    }

    #[test]
    fn long_single_token_is_gibberish() {
        assert!(is_gibberish("asdkfjaoweiruaosidufoaiwe"));
        assert!(!is_gibberish("streetlight"));
    }

    #[test]
    fn punctuation_does_not_split_words() {
        assert!(is_gibberish("barangaysandionisio.pothole"));
        assert!(is_gibberish("pothole,streetlight;flooding"));
    }

    #[test]
    fn fractional_average_word_length() {
        assert_eq!(15.5, average_word_len("brokenstreetlamp\tsandionisioroad"));
        assert!(is_gibberish("brokenstreetlamp\tsandionisioroad"));
    }

    #[test]
    fn empty_text_is_not_gibberish() {
        assert!(!is_gibberish(""));
        assert!(!is_gibberish("   "));
    }

    #[test]
    fn text_without_letters_only_checks_repetitions() {
        assert!(!is_gibberish("12 34 56"));
        assert!(is_gibberish("1111"));
    }

    #[test]
    fn short_description_is_potential_spam() {
        assert!(is_potential_spam("pothole", AuthorActivity::default()));
        assert!(!is_potential_spam(
            "Deep pothole in front of the barangay hall",
            AuthorActivity::default()
        ));
    }

    #[test]
    fn busy_authors_are_potential_spammers() {
        let description = "Deep pothole in front of the barangay hall";
        let busy_day = AuthorActivity {
            last_day: 6,
            last_week: 6,
        };
        let busy_week = AuthorActivity {
            last_day: 0,
            last_week: 21,
        };
        let at_limit = AuthorActivity {
            last_day: 5,
            last_week: 20,
        };
        assert!(is_potential_spam(description, busy_day));
        assert!(is_potential_spam(description, busy_week));
        assert!(!is_potential_spam(description, at_limit));
    }
}
