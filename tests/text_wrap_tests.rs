use feature_atlas::core::{DEFAULT_WRAP_WIDTH, LINE_BREAK, wrap, wrap_lines};

#[test]
fn short_text_stays_on_one_line() {
    assert_eq!(wrap("cardiomegaly", DEFAULT_WRAP_WIDTH), "cardiomegaly");
}

#[test]
fn lines_are_joined_with_html_break() {
    let wrapped = wrap("left lower lobe consolidation", 10);
    assert_eq!(wrapped, "left lower<br>lobe<br>consolidation");
    assert_eq!(wrapped.split(LINE_BREAK).count(), 3);
}

#[test]
fn runs_of_whitespace_collapse_to_single_spaces() {
    assert_eq!(wrap_lines("  small\t\tpleural \n effusion  ", 50), vec![
        "small pleural effusion"
    ]);
}

#[test]
fn words_filling_budget_share_a_line() {
    assert_eq!(wrap_lines("abcd efgh", 8), vec!["abcd efgh"]);
    assert_eq!(wrap_lines("abcd efgh", 7), vec!["abcd", "efgh"]);
    assert_eq!(wrap("abc de", 5), "abc de");
}

#[test]
fn default_width_wraps_long_descriptions() {
    let text = "bilateral interstitial opacities with a reticular pattern predominantly in the lower zones";
    let lines = wrap_lines(text, DEFAULT_WRAP_WIDTH);
    assert!(lines.len() > 1);
    assert!(lines.iter().all(|line| line.chars().count() <= DEFAULT_WRAP_WIDTH + 1));
    assert_eq!(lines.join(" "), text);
}
