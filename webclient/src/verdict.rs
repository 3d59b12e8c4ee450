//! Every literal phrase the judge is known to answer with lives here.

use ::lazy_regex::{lazy_regex, Lazy, Regex};

use crate::error::*;

pub const RATE_LIMITED_MARKER: &str = "You gave an answer too recently";

pub const RIGHT_ANSWER_MARKER: &str = "That's the right answer!";

/// `COMPLETION_MARKERS[i]`: levels `1..=i+1` are already solved.
pub const COMPLETION_MARKERS: [&str; 2] = [
    "The first half of this puzzle is complete! It provides one gold star: *",
    "Both parts of this puzzle are complete! They provide two gold stars: **",
];

static RE_DISCLOSED_ANSWER: Lazy<Regex> =
    lazy_regex!(r"(?s)Your puzzle answer was <code>(.*?)</code>");

/// What the judge said about one submission, before it is compared with the candidate.
#[derive(Debug, Clone, PartialEq, Eq, strum::Display)]
pub enum Verdict {
    /// Submitted too soon after the previous one.
    RateLimited,
    /// The level is already solved and the page shows its answer.
    Disclosed(String),
    /// The submitted value was accepted.
    Accepted,
    /// Neither accepted nor disclosed.
    Rejected,
}

/// Classify the body returned by the answer endpoint for level `level_index + 1`.
///
/// Disclosure is looked for before plain acceptance.
pub fn classify(body: &str, level_index: usize) -> Result<Verdict> {
    if body.contains(RATE_LIMITED_MARKER) {
        return Ok(Verdict::RateLimited);
    }

    let completed = (level_index..COMPLETION_MARKERS.len())
        .rev()
        .any(|i| body.contains(COMPLETION_MARKERS[i]));
    if completed {
        return self::disclosed_answer(body, level_index).map(Verdict::Disclosed);
    }

    if body.contains(RIGHT_ANSWER_MARKER) {
        Ok(Verdict::Accepted)
    } else {
        Ok(Verdict::Rejected)
    }
}

/// The `level_index`-th `Your puzzle answer was <code>..</code>` on a completed page.
pub fn disclosed_answer(body: &str, level_index: usize) -> Result<String> {
    let found = RE_DISCLOSED_ANSWER.captures_iter(body).count();
    RE_DISCLOSED_ANSWER
        .captures_iter(body)
        .nth(level_index)
        .map(|caps| caps[1].to_owned())
        .ok_or_else(|| {
            Error::parse(
                "judge response",
                format!(
                    "puzzle marked complete but found {} disclosed answer(s), wanted level {}",
                    found,
                    level_index + 1
                ),
            )
        })
}

#[cfg(test)]
mod test {
    use super::*;

    fn page(main: &str) -> String {
        format!("<html><body><main>{}</main></body></html>", main)
    }

    #[test]
    fn rate_limited() {
        let body = page("<article><p>You gave an answer too recently; you have to wait after submitting an answer before trying again.  You have 34s left to wait.</p></article>");
        assert_eq!(classify(&body, 0).unwrap(), Verdict::RateLimited);
        assert_eq!(classify(&body, 1).unwrap(), Verdict::RateLimited);
    }

    #[test]
    fn accepted() {
        let body = page("<article><p>That's the right answer! You are one gold star closer.</p></article>");
        assert_eq!(classify(&body, 0).unwrap(), Verdict::Accepted);
    }

    #[test]
    fn rejected() {
        let body = page("<article><p>That's not the right answer; your answer is too low.</p></article>");
        assert_eq!(classify(&body, 0).unwrap(), Verdict::Rejected);
        assert_eq!(classify("", 1).unwrap(), Verdict::Rejected);
    }

    #[test]
    fn disclosed_after_one_star() {
        let body = page(
            "<p>Your puzzle answer was <code>69795</code>.</p>\
             <p class=\"day-success\">The first half of this puzzle is complete! It provides one gold star: *</p>",
        );
        assert_eq!(
            classify(&body, 0).unwrap(),
            Verdict::Disclosed("69795".to_owned())
        );
        // level 2 is not solved yet: the level-1 marker must not be consulted
        assert_eq!(classify(&body, 1).unwrap(), Verdict::Rejected);
    }

    #[test]
    fn disclosed_after_two_stars() {
        let body = page(
            "<p>Your puzzle answer was <code>69795</code>.</p>\
             <p>Your puzzle answer was <code>208437</code>.</p>\
             <p class=\"day-success\">Both parts of this puzzle are complete! They provide two gold stars: **</p>",
        );
        assert_eq!(
            classify(&body, 0).unwrap(),
            Verdict::Disclosed("69795".to_owned())
        );
        assert_eq!(
            classify(&body, 1).unwrap(),
            Verdict::Disclosed("208437".to_owned())
        );
    }

    #[test]
    fn disclosure_wins_over_right_answer() {
        let body = page(
            "<p>That's the right answer!</p>\
             <p>Your puzzle answer was <code>7</code>.</p>\
             <p>The first half of this puzzle is complete! It provides one gold star: *</p>",
        );
        assert_eq!(classify(&body, 0).unwrap(), Verdict::Disclosed("7".to_owned()));
    }

    #[test]
    fn disclosed_answer_spans_lines() {
        let body = "Your puzzle answer was <code>ab\ncd</code>. Both parts of this puzzle are complete! They provide two gold stars: **";
        assert_eq!(disclosed_answer(body, 0).unwrap(), "ab\ncd");
    }

    #[test]
    fn completed_without_enough_codes_is_parse_error() {
        let body = "Your puzzle answer was <code>1</code>. Both parts of this puzzle are complete! They provide two gold stars: **";
        assert!(matches!(classify(body, 1), Err(Error::Parse { .. })));
    }
}
