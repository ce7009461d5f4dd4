use clap::{Parser, Subcommand, ValueEnum};
use strand_models::{Embed, StatusKind};

#[derive(Parser, Debug)]
#[command(name = "strand-bot", about = "Strand bot client")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/strand.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Post a message, optionally with an embed
    SendMessage {
        #[arg(long)]
        channel: String,
        #[arg(long, default_value = "")]
        content: String,
        #[command(flatten)]
        embed: EmbedArgs,
    },
    /// Replace the content and embed of a message
    EditMessage {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        message: String,
        #[arg(long, default_value = "")]
        content: String,
        #[command(flatten)]
        embed: EmbedArgs,
    },
    DeleteMessage {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        message: String,
    },
    /// Show the typing indicator in a channel
    Typing {
        #[arg(long)]
        channel: String,
    },
    /// Queue a presence update and print the gateway frame
    SetStatus {
        /// Overrides `presence.status` from the config file
        #[arg(long)]
        status: Option<StatusArg>,
        #[arg(long)]
        afk: bool,
        /// Overrides `presence.activity_name`
        #[arg(long)]
        activity: Option<String>,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct EmbedArgs {
    #[arg(long)]
    pub embed_title: Option<String>,
    #[arg(long)]
    pub embed_description: Option<String>,
    #[arg(long)]
    pub embed_url: Option<String>,
    #[arg(long)]
    pub embed_color: Option<u32>,
}

impl EmbedArgs {
    /// `None` unless at least one embed flag was passed.
    pub fn to_embed(&self) -> Option<Embed> {
        let embed = Embed {
            title: self.embed_title.clone(),
            description: self.embed_description.clone(),
            url: self.embed_url.clone(),
            color: self.embed_color.unwrap_or_default(),
            ..Default::default()
        };
        let any_flag = self.embed_title.is_some()
            || self.embed_description.is_some()
            || self.embed_url.is_some()
            || self.embed_color.is_some();
        any_flag.then_some(embed)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Online,
    Dnd,
    Idle,
    Invisible,
    Offline,
}

impl From<StatusArg> for StatusKind {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Online => StatusKind::Online,
            StatusArg::Dnd => StatusKind::Dnd,
            StatusArg::Idle => StatusKind::Idle,
            StatusArg::Invisible => StatusKind::Invisible,
            StatusArg::Offline => StatusKind::Offline,
        }
    }
}
