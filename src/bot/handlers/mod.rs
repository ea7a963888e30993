pub mod callback;
pub mod chat_member;
pub mod message;
pub mod reply;

use teloxide::{dispatching::UpdateHandler, prelude::*};
use teloxide::types::{ChatMemberUpdated, Me};

use crate::bot::checks;
use crate::bot::commands::{Command, SuperAdminCommand};
use crate::config::Config;
use crate::database::connection::DatabaseManager;

pub struct BotHandler {
    pub db: DatabaseManager,
    pub config: Config,
}

impl BotHandler {
    pub fn new(db: DatabaseManager, config: Config) -> Self {
        Self { db, config }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::UpdateFilterExt;

        let db_chat_member = self.db.clone();
        let db_command = self.db.clone();
        let db_superadmin = self.db.clone();
        let config_superadmin = self.config.clone();
        let db_callback = self.db.clone();
        let db_reply = self.db.clone();

        dptree::entry()
            .branch(
                Update::filter_my_chat_member().endpoint(move |upd: ChatMemberUpdated| {
                    let db = db_chat_member.clone();
                    async move { chat_member::chat_member_handler(upd, db).await }
                }),
            )
            .branch(
                Update::filter_message()
                    .filter(checks::is_recent)
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let db = db_command.clone();
                        async move { message::command_handler(bot, msg, cmd, db).await }
                    }),
            )
            .branch(
                Update::filter_message()
                    .filter(checks::is_recent)
                    .filter_command::<SuperAdminCommand>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: SuperAdminCommand| {
                        let db = db_superadmin.clone();
                        let config = config_superadmin.clone();
                        async move {
                            message::superadmin_command_handler(bot, msg, cmd, db, config).await
                        }
                    }),
            )
            .branch(
                Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                    let db = db_callback.clone();
                    async move { callback::callback_handler(bot, q, db).await }
                }),
            )
            .branch(
                Update::filter_message()
                    .filter(checks::is_recent)
                    .endpoint(move |bot: Bot, msg: Message, me: Me| {
                        let db = db_reply.clone();
                        async move { reply::reply_capture_handler(bot, msg, me, db).await }
                    }),
            )
    }
}
