use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Greedy word wrap.
///
/// Whitespace runs collapse to single spaces. A word wider than `width` is
/// never split and sits alone on its own line. Empty input yields one empty
/// line; `width == 0` disables wrapping entirely.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return vec![String::new()];
    }
    let normalized = words.join(" ");
    let options = Options::new(width)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit);
    textwrap::wrap(&normalized, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use textwrap::core::display_width;

    fn words_of(lines: &[String]) -> Vec<String> {
        lines.join(" ").split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
        assert_eq!(wrap_text("   \t ", 10), vec![String::new()]);
    }

    #[test]
    fn zero_width_returns_input_unchanged() {
        assert_eq!(wrap_text("a  b c", 0), vec!["a  b c".to_string()]);
    }

    #[test]
    fn packs_greedily() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn exact_fit_stays_on_line() {
        assert_eq!(wrap_text("abcd efgh", 9), vec!["abcd efgh"]);
        assert_eq!(wrap_text("abcd efgh", 8), vec!["abcd", "efgh"]);
    }

    #[test]
    fn long_word_gets_its_own_line() {
        assert_eq!(
            wrap_text("a supercalifragilistic b", 6),
            vec!["a", "supercalifragilistic", "b"]
        );
    }

    #[test]
    fn hyphenated_words_are_not_split() {
        assert_eq!(wrap_text("x well-known", 8), vec!["x", "well-known"]);
    }

    #[rstest]
    #[case("Inspect the scene graph, materials and textures of a running app", 12)]
    #[case("one   two\tthree\nfour  five six seven eight nine ten", 9)]
    #[case("tiny", 1)]
    #[case("- Shows how to   hook into the render loop with a custom plugin", 25)]
    fn lines_respect_width_and_keep_words(#[case] text: &str, #[case] width: usize) {
        let lines = wrap_text(text, width);
        for line in &lines {
            let single_word = !line.contains(' ');
            assert!(
                display_width(line) <= width || single_word,
                "line {line:?} exceeds {width}"
            );
        }
        let expected: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        assert_eq!(words_of(&lines), expected);
    }
}
