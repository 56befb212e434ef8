//! Process command implementation

use crate::config::{load_rules, Settings};
use crate::error::CliError;
use crate::input::{resolve_patterns, InputSource};
use crate::output::{JsonFormatter, MisspelledText, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use misspell_core::{passthrough_count, Misspeller, Mode};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Text to misspell
    #[arg(short, long, value_name = "STRING", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        num_args = 1..,
        required_unless_present = "text"
    )]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Which misspelling passes to run
    #[arg(short, long, value_enum, default_value = "all")]
    pub mode: ModeArg,

    /// Settings file with probabilities and blacklist
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Phonological rule file (overrides the settings file)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Seed for reproducible output (random when omitted); input k, in
    /// command-line order, uses seed + k
    #[arg(long, value_name = "N", env = "MISSPELL_SEED")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Misspelled text only
    Text,
    /// JSON array with source, seed and pass-through counts
    Json,
}

/// Misspelling modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// Phonological then typographical
    All,
    /// Phonological only
    Phono,
    /// Typographical only
    Typo,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::All => Mode::All,
            ModeArg::Phono => Mode::Phonological,
            ModeArg::Typo => Mode::Typographical,
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting misspelling");
        log::debug!("Arguments: {:?}", self);

        let misspeller = self.build_misspeller()?;
        let sources = self.sources()?;
        let mode = Mode::from(self.mode);
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("Using seed {seed} for {} input(s)", sources.len());

        let texts = sources
            .iter()
            .map(|source| -> Result<String> {
                let text = source.read()?;
                log::debug!("Read {} bytes from {}", text.len(), source);
                Ok(text)
            })
            .collect::<Result<Vec<_>>>()?;

        let results = self.run(&misspeller, mode, seed, &sources, &texts)?;

        let mut formatter = self.create_formatter()?;
        for result in &results {
            formatter.format_result(result)?;
        }
        formatter.finish()?;

        log::info!("Misspelled {} input(s)", results.len());
        Ok(())
    }

    /// Build a misspeller from the settings file and rule overrides
    fn build_misspeller(&self) -> Result<Misspeller> {
        let settings = match &self.config {
            Some(path) => {
                log::info!("Loading settings from {}", path.display());
                Settings::load(path)?
            }
            None => {
                log::info!("Using default settings");
                Settings::default()
            }
        };

        let rules_path = self.rules.clone().or_else(|| settings.rules_path());
        let rules = load_rules(rules_path.as_deref())?;
        log::info!("Using rule set '{}' ({})", rules.code(), rules.name());

        let blacklist = settings.blacklist()?;
        if !blacklist.is_empty() {
            log::debug!("Blacklist: {:?}", blacklist.words());
        }

        let misspeller = Misspeller::builder()
            .config(settings.probabilities()?)
            .rules(rules)
            .blacklist(blacklist)
            .build()
            .map_err(CliError::from)?;
        Ok(misspeller)
    }

    fn sources(&self) -> Result<Vec<InputSource>> {
        match &self.text {
            Some(text) => Ok(vec![InputSource::Inline(text.clone())]),
            None => {
                let sources = resolve_patterns(&self.input)?;
                log::info!("Found {} input(s) to process", sources.len());
                Ok(sources)
            }
        }
    }

    /// Misspell every input in parallel; input `k` uses seed `seed + k`
    fn run(
        &self,
        misspeller: &Misspeller,
        mode: Mode,
        seed: u64,
        sources: &[InputSource],
        texts: &[String],
    ) -> Result<Vec<MisspelledText>> {
        let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to create thread pool")?;
        log::debug!("Using {threads} worker thread(s)");

        let mut progress = ProgressReporter::new(self.quiet || sources.len() < 2);
        progress.init_files(sources.len() as u64);

        let results = pool.install(|| {
            sources
                .par_iter()
                .zip(texts.par_iter())
                .enumerate()
                .map(|(k, (source, text))| {
                    let input_seed = seed.wrapping_add(k as u64);
                    let passthrough = passthrough_count(text);
                    if passthrough > 0 {
                        log::debug!("{source}: {passthrough} character(s) passed through unedited");
                    }

                    let mut rng = StdRng::seed_from_u64(input_seed);
                    let misspelled = misspeller.misspell(text, mode, &mut rng);
                    progress.file_completed(&source.to_string());

                    MisspelledText {
                        source: source.to_string(),
                        mode: mode.to_string(),
                        seed: input_seed,
                        passthrough,
                        text: misspelled,
                    }
                })
                .collect::<Vec<_>>()
        });

        progress.finish();
        Ok(results)
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second command in the same process keeps the first logger
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(text: &str) -> ProcessArgs {
        ProcessArgs {
            text: Some(text.to_string()),
            input: Vec::new(),
            output: None,
            mode: ModeArg::All,
            config: None,
            rules: None,
            seed: Some(1),
            format: OutputFormat::Text,
            threads: Some(2),
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_mode_conversion() {
        assert_eq!(Mode::from(ModeArg::All), Mode::All);
        assert_eq!(Mode::from(ModeArg::Phono), Mode::Phonological);
        assert_eq!(Mode::from(ModeArg::Typo), Mode::Typographical);
    }

    #[test]
    fn test_run_is_seeded_per_input() {
        let args = args("unused");
        let misspeller = args.build_misspeller().unwrap();
        let sources = vec![
            InputSource::Inline("one".to_string()),
            InputSource::Inline("two".to_string()),
        ];
        let texts = vec!["The first text.".repeat(20), "The second text.".repeat(20)];

        let first = args
            .run(&misspeller, Mode::All, 10, &sources, &texts)
            .unwrap();
        let second = args
            .run(&misspeller, Mode::All, 10, &sources, &texts)
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].seed, 10);
        assert_eq!(first[1].seed, 11);

        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(first[1].text, misspeller.misspell(&texts[1], Mode::All, &mut rng));
    }

    #[test]
    fn test_settings_blacklist_applied() {
        let temp_dir = TempDir::new().unwrap();
        let settings = temp_dir.path().join("settings.toml");
        fs::write(
            &settings,
            r#"
[typo]
delete_space = 0.0
delete_char = 0.0
swap = 0.0
insert = 0.0
replace = 0.0

[phono]
delete = 0.0
insert = 0.0
replace = 0.0

[blacklist]
words = ["cat"]
"#,
        )
        .unwrap();

        let mut args = args("the cat sat");
        args.config = Some(settings);
        let misspeller = args.build_misspeller().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(misspeller.misspell("the cat sat", Mode::All, &mut rng), "the sat");
    }

    #[test]
    fn test_invalid_settings_fail_before_processing() {
        let temp_dir = TempDir::new().unwrap();
        let settings = temp_dir.path().join("settings.toml");
        let output = temp_dir.path().join("out.txt");
        fs::write(&settings, "[typo]\nswap = 1.5\n").unwrap();

        let mut args = args("text");
        args.config = Some(settings);
        args.output = Some(output.clone());
        assert!(args.execute().is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.json");

        let mut args = args("hello world");
        args.output = Some(output.clone());
        args.format = OutputFormat::Json;
        args.execute().unwrap();

        let results: Vec<MisspelledText> =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].source, "<text>");
        assert_eq!(results[0].seed, 1);
    }
}
