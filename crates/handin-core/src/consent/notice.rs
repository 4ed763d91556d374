//! Data-processing notice shown before asking for consent.

/// Notice text; the closing question is built from the configured yes-token.
pub const CONSENT_NOTICE: &str = "\
To comply with the GDPR we need your consent to process your personal data.
The course's test server administrator is the data controller.
Your personal data is processed for the following purpose:
 - Administration of hand-ins for the introductory programming course.

We process the following personal data about you:
 - Your full name
 - Your auID and student number
 - Metadata about every upload (including time and user agent)

Your personal data is not shared with third parties and is processed only in the EU/EEA.
It is kept indefinitely, but you can have it deleted or corrected at any time.";

pub fn consent_question(affirmative: &str) -> String {
    format!("\nDo you consent to this (type '{}')?\n:> ", affirmative)
}
