use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ciliahub")]
#[command(about = "Query the CiliaHub gene annotation table", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset source: a local JSON file or an http(s) URL
    /// (default: the configured CiliaHub URL)
    #[arg(short, long, global = true)]
    pub data: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search and filter the gene table
    #[command(alias = "s")]
    Search {
        /// Free-text query over all fields
        #[arg(required = false)]
        query: Option<String>,

        /// Exact localization filter (e.g. "basal-body" or "Basal Body")
        #[arg(short, long)]
        localization: Option<String>,

        /// OMIM filter: any, has, no, or an inclusive MIN-MAX range
        #[arg(long)]
        omim: Option<String>,

        /// Reference filter: any, has or no
        #[arg(long)]
        reference: Option<String>,

        /// Synonym substring filter
        #[arg(short, long)]
        synonym: Option<String>,

        /// Sort key: gene, omim, localization or relevance
        #[arg(long, default_value = "gene")]
        sort: String,

        /// Write the result set as CSV instead of printing it
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
    },

    /// Look up many gene names or IDs at once
    #[command(alias = "b")]
    Batch {
        /// Gene symbols, Ensembl IDs or OMIM IDs (comma/space separated)
        #[arg(required = true, num_args = 1..)]
        genes: Vec<String>,
    },

    /// Export the full table as CSV
    Export {
        /// Output file (default: ciliahub_data.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show statistics over the cilia-related genes
    Stats,

    /// Show the most-searched queries
    Popular {
        /// How many entries to show
        #[arg(short)]
        n: Option<usize>,
    },

    /// Clear the search statistics
    Reset,

    /// Suggest completions for a partial gene name or ID
    Suggest { query: String },

    /// Get or set configuration
    Config {
        /// Configuration key (data-url, top-n)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
