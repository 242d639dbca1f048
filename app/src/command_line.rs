//! Configs that are gathered from the command line -- see [CommandLineOptions]

use structopt::StructOpt;


/// Command-line options
#[derive(Debug,StructOpt)]
#[structopt(about = "
================================================================
Builds per-match statistics out of Quake3 Server log files.
By default, fetches the reference log over HTTP.
================================================================
")]
pub struct CommandLineOptions {

    // FLAGS
    ////////

    /// Outputs any non-fatal inconsistencies in the log lines to stderr
    #[structopt(long)]
    pub verbose: bool,

    /// Reads the log from stdin instead of fetching it
    #[structopt(long)]
    pub stdin: bool,


    // OPTIONS
    //////////


    /// Local file with Quake3 Server log messages -- takes precedence over --url
    #[structopt(long)]
    pub log_file: Option<String>,

    /// URL to fetch the Quake3 Server log from
    #[structopt(long, default_value = "https://gist.github.com/alissonsales/01a2ba6d5042464df009725f499e8ba2/raw/a7ca32c40bdb753f8defa0160a583b173459ef7c/games.log")]
    pub url: String,

}

pub fn parse_from_args() -> CommandLineOptions {
    fill_in_defaults(CommandLineOptions::from_args())
}

fn fill_in_defaults(command_line_options: CommandLineOptions) -> CommandLineOptions {
    // no defaults to fill in yet
    command_line_options
}
