use anyhow::{bail, Result};
use clap::Parser;
use serde_json::Value;
use strand_core::{Messaging, Presence, ResponseCallback};
use strand_models::StatusKind;
use strand_transport::HttpTransport;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;

use cli::Command;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("strand=info")),
        )
        .init();

    let args = cli::Args::parse();
    let config = config::Config::load(&args.config)?;

    let (transport, mut outbox) = HttpTransport::new(&config.api, Handle::current())?;
    let bot = strand_core::client(transport);

    let (tx, rx) = oneshot::channel();
    match args.command {
        Command::SendMessage {
            channel,
            content,
            embed,
        } => bot.send_message(&channel, &content, embed.to_embed().as_ref(), reply(tx))?,
        Command::EditMessage {
            channel,
            message,
            content,
            embed,
        } => bot.edit_message(
            &channel,
            &message,
            &content,
            embed.to_embed().as_ref(),
            reply(tx),
        )?,
        Command::DeleteMessage { channel, message } => {
            bot.delete_message(&channel, &message, reply(tx))
        }
        Command::Typing { channel } => bot.trigger_typing(&channel, reply(tx)),
        Command::SetStatus {
            status,
            afk,
            activity,
        } => {
            let mut presence = config.presence;
            if let Some(status) = status {
                presence.status = StatusKind::from(status);
            }
            presence.afk |= afk;
            if activity.is_some() {
                presence.activity_name = activity;
            }

            bot.set_status(&presence.to_status(), None)?;
            // The websocket connection is owned elsewhere; show what it would send.
            if let Some(frame) = outbox.recv().await {
                println!("{}", serde_json::to_string_pretty(&frame)?);
            }
            return Ok(());
        }
    }

    let body = rx.await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    if let Some(error) = body.get("error") {
        bail!("request failed: {}", error["message"]);
    }
    Ok(())
}

fn reply(tx: oneshot::Sender<Value>) -> Option<ResponseCallback> {
    Some(Box::new(move |body| {
        let _ = tx.send(body);
    }))
}
