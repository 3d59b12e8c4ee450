use aocv_webclient::{verdict, AnswerPayload, Client, PuzzleUrls, Verdict};
use serde::Serialize;

use crate::puzzle::{PuzzleInstance, Slot};

/// How the judge rated one local candidate. Never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, strum::Display)]
#[serde(tag = "status", content = "answer", rename_all = "snake_case")]
pub enum Verification {
    /// Carries the accepted value (the disclosed one when the level was already solved).
    Correct(String),
    /// Carries the disclosed right answer, or `""` when the judge did not say.
    Wrong(String),
    RateLimited,
    /// No local candidate, nothing was submitted.
    Unknown,
}

/// Submit the candidate in `slot` and map the judge's page to a [`Verification`].
pub async fn verify(
    cli: &dyn Client,
    instance: &PuzzleInstance,
    slot: Slot,
) -> aocv_webclient::Result<Verification> {
    let candidate = instance.answer(slot);
    if candidate.is_empty() {
        return Ok(Verification::Unknown);
    }

    let url = PuzzleUrls::new(cli.root_url(), instance.puzzle).answer()?;
    let payload = AnswerPayload::new(slot.level(), candidate);

    log::info!("Submitting level {} of {}", slot.level(), instance.puzzle);
    let body = cli.submit(&url, &payload).await?;
    log::debug!("Judge response for {} level {}:\n{}", instance.puzzle, slot.level(), body);

    let verification = match verdict::classify(&body, slot.index())? {
        Verdict::RateLimited => Verification::RateLimited,
        Verdict::Disclosed(answer) if answer == candidate => Verification::Correct(answer),
        Verdict::Disclosed(answer) => Verification::Wrong(answer),
        Verdict::Accepted => Verification::Correct(candidate.to_owned()),
        Verdict::Rejected => Verification::Wrong(String::new()),
    };
    Ok(verification)
}
