pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::{CommentSort, ResultType};

#[derive(Parser)]
#[command(name = "tubelens")]
#[command(
    about = "Extract transcripts, listings, comments and search results from YouTube's rendered pages",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a video's transcript
    Transcript {
        /// Video id (the `v=` parameter of a watch URL)
        video_id: String,

        /// Preferred transcript language
        #[arg(short, long, default_value = "en")]
        lang: String,
    },
    /// List a channel's uploaded videos
    ChannelVideos {
        /// Channel URL, @handle, UC… id, or custom-URL slug
        channel: String,

        /// Maximum number of videos to return
        #[arg(short, long, default_value_t = 30)]
        limit: usize,
    },
    /// Search within a channel's videos
    ChannelSearch {
        /// Channel URL, @handle, UC… id, or custom-URL slug
        channel: String,

        /// Search term
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = 30)]
        limit: usize,
    },
    /// Extract a video's comments
    Comments {
        /// Video id
        video_id: String,

        /// Maximum number of comments to return
        #[arg(short, long, default_value_t = 50)]
        limit: usize,

        /// Comment ordering
        #[arg(short, long, value_enum, default_value = "top")]
        sort: SortArg,
    },
    /// Extract a video's metadata and description
    Metadata {
        /// Video id
        video_id: String,

        /// Leave a truncated description collapsed
        #[arg(long)]
        no_expand: bool,
    },
    /// Search all of YouTube for videos and channels
    Search {
        /// Search term
        query: String,

        /// Maximum number of results (1-20)
        #[arg(short, long, default_value_t = 10)]
        max_results: usize,

        /// Result kinds to include
        #[arg(short, long, value_enum, default_value = "all")]
        types: TypeArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Top,
    Newest,
}

impl From<SortArg> for CommentSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Top => CommentSort::Top,
            SortArg::Newest => CommentSort::Newest,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TypeArg {
    All,
    Videos,
    Channels,
}

impl From<TypeArg> for ResultType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::All => ResultType::All,
            TypeArg::Videos => ResultType::Videos,
            TypeArg::Channels => ResultType::Channels,
        }
    }
}
