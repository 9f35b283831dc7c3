use clap::{Parser, Subcommand, ValueEnum};
use link_scope::config::HeaderProfile;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "link-scope")]
#[command(about = "Classifies the links and images of a page for SEO comparison")]
#[command(version)]
pub struct Args {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Header profile presented to target sites
    #[arg(short, long, value_enum, global = true)]
    pub profile: Option<ProfileArg>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the JSON HTTP API
    Serve {
        /// Address to listen on (defaults to 0.0.0.0:$PORT, then the config value)
        #[arg(short, long)]
        listen: Option<String>,
    },
    /// Analyze a single page and print the result as JSON
    Analyze {
        /// Page URL
        url: String,
    },
    /// Analyze two pages and print the comparison and plan as JSON
    Compare {
        /// Your page URL
        user_url: String,
        /// Competitor page URL
        competitor_url: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    Bot,
    Browser,
}

/// Convert from CLI argument profile to the configuration profile
impl From<ProfileArg> for HeaderProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Bot => HeaderProfile::Bot,
            ProfileArg::Browser => HeaderProfile::Browser,
        }
    }
}
