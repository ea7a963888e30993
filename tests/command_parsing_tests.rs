use raffle_bot::bot::commands::{Command, SuperAdminCommand};
use teloxide::utils::command::BotCommands;

#[cfg(test)]
mod command_parsing_tests {
    use super::*;

    #[test]
    fn test_help_command_parsing() {
        let result = Command::parse("/help", "testbot");
        assert!(matches!(result, Ok(Command::Help)));
    }

    #[test]
    fn test_start_command_parsing() {
        let result = Command::parse("/start", "testbot");
        assert!(matches!(result, Ok(Command::Start)));
    }

    #[test]
    fn test_randy_command_parsing() {
        let result = Command::parse("/randy", "testbot");
        assert!(matches!(result, Ok(Command::Randy)));
    }

    #[test]
    fn test_language_command_parsing() {
        let result = Command::parse("/language", "testbot");
        assert!(matches!(result, Ok(Command::Language)));
    }

    #[test]
    fn test_configuration_command_parsing() {
        assert!(matches!(
            Command::parse("/choosechanneltoconfigure", "testbot"),
            Ok(Command::ChooseChannelToConfigure)
        ));
        assert!(matches!(
            Command::parse("/numberofwinners", "testbot"),
            Ok(Command::NumberOfWinners)
        ));
        assert!(matches!(
            Command::parse("/checksubscription", "testbot"),
            Ok(Command::CheckSubscription)
        ));
        assert!(matches!(
            Command::parse("/keeprafflemessage", "testbot"),
            Ok(Command::KeepRaffleMessage)
        ));
    }

    #[test]
    fn test_template_command_parsing() {
        assert!(matches!(
            Command::parse("/customrafflemessage", "testbot"),
            Ok(Command::CustomRaffleMessage)
        ));
        assert!(matches!(
            Command::parse("/customwinnermessage", "testbot"),
            Ok(Command::CustomWinnerMessage)
        ));
        assert!(matches!(
            Command::parse("/nocustomrafflemessage", "testbot"),
            Ok(Command::NoCustomRaffleMessage)
        ));
        assert!(matches!(
            Command::parse("/nocustomwinnermessage", "testbot"),
            Ok(Command::NoCustomWinnerMessage)
        ));
    }

    #[test]
    fn test_command_with_bot_mention() {
        let result = Command::parse("/randy@testbot", "testbot");
        assert!(matches!(result, Ok(Command::Randy)));
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(Command::parse("/growdick", "testbot").is_err());
        assert!(Command::parse("not a command", "testbot").is_err());
    }

    #[test]
    fn test_superadmin_command_parsing() {
        assert!(matches!(
            SuperAdminCommand::parse("/debug", "testbot"),
            Ok(SuperAdminCommand::Debug)
        ));
        assert!(matches!(
            SuperAdminCommand::parse("/delete", "testbot"),
            Ok(SuperAdminCommand::Delete)
        ));
    }

    #[test]
    fn test_superadmin_commands_not_in_main_set() {
        assert!(Command::parse("/debug", "testbot").is_err());
        assert!(Command::parse("/delete", "testbot").is_err());
    }
}
