//! domaintools library: public suffix aware domain decomposition
//!
//! This library splits host names into subdomain, registrable label and public
//! suffix using the [Public Suffix List](https://publicsuffix.org), validates
//! them as registrable hosts, and pulls valid domains out of free text.
//!
//! # Example
//!
//! ```
//! use domaintools::{Decomposer, SuffixDatabase};
//!
//! let db = SuffixDatabase::parse("com\nuk\nco.uk\n")?;
//! let domain = Decomposer::new(&db).decompose("www.goat.co.uk");
//! assert_eq!(domain.subdomain(), Some("www"));
//! assert_eq!(domain.registrable_label(), Some("goat"));
//! assert_eq!(domain.suffix(), Some("co.uk"));
//! assert_eq!(domain.registrable_domain().as_deref(), Some("goat.co.uk"));
//! # Ok::<(), domaintools::DatabaseError>(())
//! ```
//!
//! # Requirements
//!
//! Decomposition is synchronous and never blocks. Loading the list from a URL
//! ([`loader::load_database`]) needs a Tokio runtime; [`run`] creates its own.

#![warn(missing_docs)]

mod app;
pub mod config;
mod dns;
mod domain;
mod error_handling;
pub mod initialization;
pub mod loader;
pub mod normalize;
mod suffix;
pub mod validate;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Mode, OutputFormat};
pub use dns::DnsSuffixResolver;
pub use domain::{tokens, Decomposer, Domain, SuffixResolver};
pub use error_handling::{
    classify, DatabaseError, EncodingError, InitializationError, OutcomeType, ProcessingStats,
};
pub use run::{run, run_to, RunReport};
pub use suffix::{find_suffix, RuleKind, Section, SuffixDatabase, SuffixLookup, SuffixMatch, SuffixRule};

// Internal run module (contains the command-line driver)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::io::Write;
    use std::time::Instant;

    use crate::app::{
        print_outcome_statistics, print_summary, process_text, read_input, ProcessOptions,
    };
    use crate::config::Config;
    use crate::dns::DnsSuffixResolver;
    use crate::domain::Decomposer;
    use crate::error_handling::{OutcomeType, ProcessingStats};
    use crate::initialization::init_resolver;
    use crate::loader::load_database;

    /// Results of a run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of inputs decomposed
        pub total: usize,
        /// Number of inputs that were valid domains
        pub valid: usize,
        /// Number of result lines written
        pub written: usize,
        /// Number of rules in the suffix list used
        pub rules: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the command-line tool, printing results to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the suffix list or the input cannot be loaded, the
    /// DNS resolver cannot be created, or stdout cannot be written.
    pub fn run(config: Config) -> Result<RunReport> {
        let stdout = std::io::stdout();
        let mut out = std::io::BufWriter::new(stdout.lock());
        run_to(config, &mut out)
    }

    /// Like [`run`], writing results to `out`.
    ///
    /// Must not be called from inside a Tokio runtime: the list is loaded on a
    /// runtime created here, and the DNS fallback blocks on its own.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use domaintools::{run_to, Config};
    /// use std::path::PathBuf;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config {
    ///     file: PathBuf::from("hosts.txt"),
    ///     psl: "public_suffix_list.dat".to_string(),
    ///     ..Default::default()
    /// };
    /// let mut out = Vec::new();
    /// let report = run_to(config, &mut out)?;
    /// println!("{} of {} inputs valid", report.valid, report.total);
    /// # Ok(())
    /// # }
    /// ```
    pub fn run_to<W: Write>(config: Config, out: &mut W) -> Result<RunReport> {
        let start_time = Instant::now();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;
        let (database, text) = runtime.block_on(async {
            let database = load_database(&config.psl, &config.cache_dir).await?;
            let text = read_input(&config.file).await?;
            anyhow::Ok((database, text))
        })?;
        drop(runtime);

        let resolver = if config.dns_fallback {
            info!("DNS fallback enabled for unlisted top-level labels");
            Some(DnsSuffixResolver::new(
                init_resolver().context("Failed to initialize DNS resolver")?,
            ))
        } else {
            None
        };

        let mut decomposer = Decomposer::new(&database).allow_private(config.allow_private);
        if let Some(resolver) = resolver.as_ref() {
            decomposer = decomposer.with_resolver(resolver);
        }

        let options = ProcessOptions {
            mode: config.mode,
            only_valid: config.only_valid,
            output: config.output,
        };
        let stats = ProcessingStats::new();
        let written = process_text(&decomposer, options, &text, out, &stats)?;
        out.flush().context("Failed to flush output")?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        let report = RunReport {
            total: stats.total(),
            valid: stats.get_count(OutcomeType::Valid),
            written,
            rules: database.len(),
            elapsed_seconds,
        };

        print_outcome_statistics(&stats);
        print_summary(report.total, report.valid, elapsed_seconds);

        Ok(report)
    }
}
