use raffle_bot::utils::templates::*;
use raffle_bot::utils::validation::*;

#[cfg(test)]
mod validation_tests {
    use super::*;

    // Telegram chat ID validation tests
    #[test]
    fn test_valid_chat_ids() {
        let valid_ids = vec![
            12345i64,          // User chat
            2147483647,        // Max user chat ID
            -12345,            // Group chat
            -1001234567890,    // Supergroup/channel
        ];

        for id in valid_ids {
            assert!(validate_telegram_chat_id(id).is_ok(), "Should accept chat ID: {}", id);
        }
    }

    #[test]
    fn test_invalid_chat_ids() {
        let invalid_ids = vec![
            0i64,              // Zero
            2147483648,        // Too large for user chat
            -3000000000000,    // Too large negative
        ];

        for id in invalid_ids {
            assert!(validate_telegram_chat_id(id).is_err(), "Should reject chat ID: {}", id);
        }
    }

    // Number-of-winners validation tests
    #[test]
    fn test_number_of_winners_range() {
        for count in 1..=10 {
            assert!(validate_number_of_winners(count).is_ok());
        }
        assert!(validate_number_of_winners(0).is_err());
        assert!(validate_number_of_winners(11).is_err());
        assert!(validate_number_of_winners(-1).is_err());
    }

    // Template validation tests
    #[test]
    fn test_raffle_template_requires_participants_placeholder() {
        assert!(validate_template(
            "Join now, $numberOfParticipants are in!",
            &[PARTICIPANTS_PLACEHOLDER],
        )
        .is_ok());

        assert!(validate_template("Join now!", &[PARTICIPANTS_PLACEHOLDER]).is_err());
    }

    #[test]
    fn test_winner_template_requires_both_placeholders() {
        let required = [PARTICIPANTS_PLACEHOLDER, WINNER_PLACEHOLDER];

        assert!(validate_template(
            "$winner won, $numberOfParticipants played",
            &required,
        )
        .is_ok());

        assert!(validate_template("$winner won", &required).is_err());
        assert!(validate_template("$numberOfParticipants played", &required).is_err());
    }

    #[test]
    fn test_template_length_limits() {
        assert!(validate_template("", &[]).is_err());
        assert!(validate_template("   ", &[]).is_err());
        assert!(validate_template(&"a".repeat(2049), &[]).is_err());
        assert!(validate_template(&"a".repeat(100), &[]).is_ok());
    }

    #[test]
    fn test_missing_placeholder_reporting() {
        let required = [PARTICIPANTS_PLACEHOLDER, WINNER_PLACEHOLDER];

        let missing = missing_placeholders("no placeholders here", &required);
        assert_eq!(missing.len(), 2);

        let missing = missing_placeholders("$winner only", &required);
        assert_eq!(missing, vec![PARTICIPANTS_PLACEHOLDER]);
    }

    // Rendering tests
    #[test]
    fn test_render_raffle_message() {
        let rendered = render_raffle_message("Participants: $numberOfParticipants", 7);
        assert_eq!(rendered, "Participants: 7");
    }

    #[test]
    fn test_render_winner_message() {
        let rendered = render_winner_message(
            "$winner won out of $numberOfParticipants players",
            128,
            "@alice, @bob",
        );
        assert_eq!(rendered, "@alice, @bob won out of 128 players");
    }

    #[test]
    fn test_render_leaves_other_text_alone() {
        let rendered = render_raffle_message("No placeholders", 7);
        assert_eq!(rendered, "No placeholders");
    }
}
