use anyhow::{anyhow, Result};

/// Replaced with the live participant count in raffle and winner messages.
pub const PARTICIPANTS_PLACEHOLDER: &str = "$numberOfParticipants";
/// Replaced with the drawn winners in winner messages.
pub const WINNER_PLACEHOLDER: &str = "$winner";

const MAX_TEMPLATE_LENGTH: usize = 2048;

/// Returns the required placeholders the text does not contain.
pub fn missing_placeholders<'a>(text: &str, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .filter(|placeholder| !text.contains(**placeholder))
        .copied()
        .collect()
}

pub fn validate_template(text: &str, required: &[&str]) -> Result<()> {
    let text = text.trim();

    if text.is_empty() {
        return Err(anyhow!("Template cannot be empty"));
    }

    if text.len() > MAX_TEMPLATE_LENGTH {
        return Err(anyhow!(
            "Template cannot be longer than {MAX_TEMPLATE_LENGTH} characters"
        ));
    }

    let missing = missing_placeholders(text, required);
    if !missing.is_empty() {
        return Err(anyhow!("Template is missing: {}", missing.join(", ")));
    }

    Ok(())
}

pub fn render_raffle_message(template: &str, participants: i64) -> String {
    template.replace(PARTICIPANTS_PLACEHOLDER, &participants.to_string())
}

pub fn render_winner_message(template: &str, participants: i64, winners: &str) -> String {
    template
        .replace(PARTICIPANTS_PLACEHOLDER, &participants.to_string())
        .replace(WINNER_PLACEHOLDER, winners)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_placeholders() {
        let missing = missing_placeholders(
            "win something",
            &[PARTICIPANTS_PLACEHOLDER, WINNER_PLACEHOLDER],
        );
        assert_eq!(missing, vec![PARTICIPANTS_PLACEHOLDER, WINNER_PLACEHOLDER]);

        let missing = missing_placeholders(
            "out of $numberOfParticipants, $winner wins",
            &[PARTICIPANTS_PLACEHOLDER, WINNER_PLACEHOLDER],
        );
        assert!(missing.is_empty());
    }

    #[test]
    fn rejects_empty_and_oversized_templates() {
        assert!(validate_template("   ", &[]).is_err());
        assert!(validate_template(&"x".repeat(3000), &[]).is_err());
    }

    #[test]
    fn accepts_template_with_required_placeholders() {
        let text = "Join! $numberOfParticipants are already in";
        assert!(validate_template(text, &[PARTICIPANTS_PLACEHOLDER]).is_ok());
        assert!(validate_template(text, &[PARTICIPANTS_PLACEHOLDER, WINNER_PLACEHOLDER]).is_err());
    }

    #[test]
    fn substitutes_participant_count() {
        let rendered = render_raffle_message("now at $numberOfParticipants!", 42);
        assert_eq!(rendered, "now at 42!");
    }

    #[test]
    fn substitutes_winners_and_count() {
        let rendered = render_winner_message(
            "$winner won out of $numberOfParticipants",
            10,
            "@alice, @bob",
        );
        assert_eq!(rendered, "@alice, @bob won out of 10");
    }
}
