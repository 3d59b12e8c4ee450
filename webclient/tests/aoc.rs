use aocv_webclient::verdict::{self, Verdict};
use aocv_webclient::*;

#[test]
fn payload_is_form_encoded() {
    let url = Url::parse("https://adventofcode.com/2022/day/1/answer").unwrap();
    let payload = AnswerPayload::new(2, "a b&c");
    let req = reqwest::Client::new()
        .post(url)
        .form(&payload)
        .build()
        .unwrap();
    let body = req.body().and_then(|b| b.as_bytes()).unwrap();
    assert_eq!(std::str::from_utf8(body).unwrap(), "level=2&answer=a+b%26c");
}

#[test]
fn answer_url_of_each_day() {
    let root = aoc::ROOT_URL.clone();
    for day in 1..=25 {
        let urls = PuzzleUrls::new(&root, PuzzleRef::new(2022, day));
        assert_eq!(
            urls.answer().unwrap().as_str(),
            format!("https://adventofcode.com/2022/day/{}/answer", day)
        );
    }
}

#[test]
fn sanitized_page_of_solved_puzzle_still_discloses_nothing() {
    // the description cache must not carry the answers shown on a solved page
    let page = r#"<html><body><main>
<article class="day-desc"><h2>--- Day 2: Rock Paper Scissors ---</h2><p>Prose.</p></article>
<p>Your puzzle answer was <code>11150</code>.</p>
<p class="day-success">The first half of this puzzle is complete! It provides one gold star: *</p>
</main></body></html>"#;

    assert_eq!(
        verdict::classify(page, 0).unwrap(),
        Verdict::Disclosed("11150".to_owned())
    );

    let sanitized = sanitize::sanitize(page).unwrap();
    assert!(sanitized.contains("Rock Paper Scissors"));
    assert_eq!(verdict::classify(&sanitized, 0).unwrap(), Verdict::Rejected);
}

#[test]
fn session_token_from_env_style_value() {
    assert!(SessionToken::new("").is_none());
    let token = SessionToken::new("53616c7465645f5f\n").unwrap();
    assert_eq!(token.as_str(), "53616c7465645f5f");
}
