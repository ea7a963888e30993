use raffle_bot::config::Config;
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("DATABASE_URL", "sqlite:test.db");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("SUPER_ADMIN_ID", "42");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.database_url, "sqlite:test.db");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.super_admin_id, 42);

    // Clean up
    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("DATABASE_URL");
    env::remove_var("HTTP_PORT");
    env::remove_var("SUPER_ADMIN_ID");
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    // Only set required values, let others use defaults
    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");
    env::set_var("SUPER_ADMIN_ID", "7");
    env::remove_var("DATABASE_URL");
    env::remove_var("HTTP_PORT");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.database_url, "sqlite:./data/raffle-bot.db");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.super_admin_id, 7);

    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("SUPER_ADMIN_ID");
}

#[test]
fn test_config_missing_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::set_var("SUPER_ADMIN_ID", "7");

    assert!(Config::from_env().is_err());

    env::remove_var("SUPER_ADMIN_ID");
}

#[test]
fn test_config_empty_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    env::set_var("SUPER_ADMIN_ID", "7");

    assert!(Config::from_env().is_err());

    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("SUPER_ADMIN_ID");
}

#[test]
fn test_config_missing_super_admin() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TELEGRAM_BOT_TOKEN", "token");
    env::remove_var("SUPER_ADMIN_ID");

    assert!(Config::from_env().is_err());

    env::remove_var("TELEGRAM_BOT_TOKEN");
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TELEGRAM_BOT_TOKEN", "token");
    env::set_var("SUPER_ADMIN_ID", "7");
    env::set_var("HTTP_PORT", "not-a-port");

    assert!(Config::from_env().is_err());

    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("SUPER_ADMIN_ID");
    env::remove_var("HTTP_PORT");
}
