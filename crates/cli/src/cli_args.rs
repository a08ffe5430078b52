use clap::Parser;

#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Candidates to choose from. Read from `--input` or piped stdin when empty.
    pub candidates: Vec<String>,

    /// File to read candidates from, one per line.
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// Text shown in front of the query.
    #[arg(long, short = 'p')]
    pub prompt: Option<String>,

    /// Path to the settings YAML.
    #[arg(long, short = 's')]
    pub settings_path: Option<String>,
}
