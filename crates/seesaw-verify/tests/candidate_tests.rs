use seesaw_verify::CandidateFilter;

#[test]
fn test_accumulates_across_pushes() {
    let mut filter = CandidateFilter::new(6);
    assert_eq!(filter.push("10"), None);
    assert_eq!(filter.pending(), 4);
    assert_eq!(filter.push("01"), None);
    assert_eq!(filter.push("10"), Some("100110".to_owned()));
}

/// Junk characters are dropped outright here, unlike the codec decoder
/// which maps them to −1. Both policies are contractual at their own call
/// sites; this test pins the strict one.
#[test]
fn test_non_binary_input_is_discarded() {
    let mut filter = CandidateFilter::new(4);
    assert_eq!(filter.push("a1b0 c?"), None);
    assert_eq!(filter.pending(), 2);
    assert_eq!(filter.push("x0!1y"), Some("1001".to_owned()));
}

#[test]
fn test_excess_digits_truncated() {
    let mut filter = CandidateFilter::new(3);
    assert_eq!(filter.push("110101"), Some("110".to_owned()));
}

#[test]
fn test_exact_fit() {
    let mut filter = CandidateFilter::new(2);
    assert_eq!(filter.push("01"), Some("01".to_owned()));
    assert_eq!(filter.pending(), 0);
}
