//! End-to-end curation run.
//!
//! Stages run strictly in order, each finishing before the next starts:
//!
//! 1. read every blacklist source
//! 2. build the complete blacklist
//! 3. fetch the frequency list
//! 4. filter it against the now-immutable blacklist
//! 5. render and write the artifact
//!
//! Any failure aborts the run. Nothing is written unless stages 1 to 4
//! succeeded.

use std::path::PathBuf;

use curator_types::{CurateError, Result};

use crate::analyzer::{Inflector, NaiveInflector};
use crate::blacklist::{Blacklist, BlacklistBuilder};
use crate::config::CuratorConfig;
use crate::emit::write_artifact;
use crate::filter::{CandidateFilter, FilterStats, WordList};
use crate::source::{build_client, WordSource};

/// Output of the curation core, before anything is written.
#[derive(Debug, Clone)]
pub struct Curated {
    /// Blacklist the words were filtered against.
    pub blacklist: Blacklist,
    /// Surviving words, most frequent first.
    pub words: WordList,
    /// What the filter dropped.
    pub stats: FilterStats,
}

/// Builds the blacklist from `blacklists`, then filters `frequency` with it.
///
/// `frequency` is not touched until every blacklist source has been read.
///
/// # Errors
///
/// Propagates the first fetch or decode failure of any source.
pub fn curate<I: Inflector>(
    frequency: &dyn WordSource,
    blacklists: &[&dyn WordSource],
    inflector: I,
) -> Result<Curated> {
    let mut builder = BlacklistBuilder::with_inflector(inflector);
    for source in blacklists {
        builder.add_source(*source)?;
    }
    let blacklist = builder.build();
    tracing::info!(
        sources = blacklists.len(),
        entries = blacklist.len(),
        "blacklist ready"
    );

    let (words, stats) = CandidateFilter::new(&blacklist).filter_with_stats(frequency)?;
    Ok(Curated {
        blacklist,
        words,
        stats,
    })
}

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Blacklist sources actually read.
    pub blacklist_sources: usize,
    /// Blacklist size, inflections included.
    pub blacklist_entries: usize,
    /// Filter counters.
    pub stats: FilterStats,
    /// Artifact path, or `None` for a dry run.
    pub output: Option<PathBuf>,
}

/// Configured curation run.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: CuratorConfig,
    dry_run: bool,
}

impl Pipeline {
    /// Creates a run for `config`.
    pub fn new(config: CuratorConfig) -> Self {
        Self {
            config,
            dry_run: false,
        }
    }

    /// When set, everything runs except writing the artifact.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CuratorConfig {
        &self.config
    }

    /// Executes the run.
    ///
    /// # Errors
    ///
    /// Returns the first failure of any stage; see [`CurateError::stage`].
    pub fn run(&self) -> Result<RunSummary> {
        self.config.validate()?;
        let client = build_client()?;

        let blacklists = self.open_blacklists(&client)?;
        let blacklist_refs: Vec<&dyn WordSource> = blacklists.iter().map(|b| b.as_ref()).collect();
        let frequency = self.config.words.open(&client);

        let curated = curate(frequency.as_ref(), &blacklist_refs, NaiveInflector)?;
        self.finish(curated, blacklist_refs.len())
    }

    /// Writes the artifact for an already-curated list.
    ///
    /// # Errors
    ///
    /// Returns `CurateError::Write` if the artifact cannot be written.
    pub fn finish(&self, curated: Curated, blacklist_sources: usize) -> Result<RunSummary> {
        let output = if self.dry_run {
            tracing::info!(words = curated.words.len(), "dry run, artifact not written");
            None
        } else {
            let path = &self.config.output.path;
            let contents = self.config.output.template.render(&curated.words);
            write_artifact(path, &contents)?;
            Some(path.clone())
        };

        Ok(RunSummary {
            blacklist_sources,
            blacklist_entries: curated.blacklist.len(),
            stats: curated.stats,
            output,
        })
    }

    fn open_blacklists(
        &self,
        client: &reqwest::blocking::Client,
    ) -> Result<Vec<Box<dyn WordSource>>> {
        let mut sources = Vec::with_capacity(self.config.blacklists.len());

        for spec in &self.config.blacklists {
            if let Some(path) = spec.store_path() {
                if !path.is_file() {
                    if self.config.optional_store_missing_ok {
                        tracing::warn!(store = %path.display(), "blacklist store not found, skipping");
                        continue;
                    }
                    return Err(CurateError::unavailable(
                        path.display().to_string(),
                        "store file does not exist",
                    ));
                }
            }
            sources.push(spec.open(client));
        }

        Ok(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ExactOnly;
    use crate::source::MemorySource;
    use curator_types::Stage;

    #[test]
    fn curate_worked_scenario() {
        let freq = MemorySource::new("freq", "the\ncat\nass\nassembly\nan\ndog\n");
        let bl = MemorySource::new("bl", "ass\n");
        let curated = curate(&freq, &[&bl], NaiveInflector).unwrap();

        let mut entries: Vec<&str> = curated.blacklist.iter().collect();
        entries.sort_unstable();
        assert_eq!(entries, vec!["ass", "assed", "assing", "asss"]);
        assert_eq!(curated.words.as_slice(), &["the", "cat", "assembly", "dog"]);
        assert_eq!(curated.stats.kept, 4);
    }

    #[test]
    fn curate_without_blacklists_keeps_long_words() {
        let freq = MemorySource::new("freq", "an\nant\n");
        let curated = curate(&freq, &[], NaiveInflector).unwrap();
        assert_eq!(curated.words.as_slice(), &["ant"]);
        assert!(curated.blacklist.is_empty());
    }

    #[test]
    fn curate_with_exact_policy_lets_inflections_through() {
        let freq = MemorySource::new("freq", "hell\nhells\n");
        let bl = MemorySource::new("bl", "hell\n");
        let curated = curate(&freq, &[&bl], ExactOnly).unwrap();
        assert_eq!(curated.words.as_slice(), &["hells"]);
    }

    #[test]
    fn bad_blacklist_aborts_before_frequency_is_read() {
        use std::cell::Cell;

        struct Spy<'a>(&'a Cell<bool>);
        impl WordSource for Spy<'_> {
            fn name(&self) -> &str {
                "spy"
            }
            fn for_each_token(&self, _emit: &mut dyn FnMut(&str)) -> Result<()> {
                self.0.set(true);
                Ok(())
            }
        }

        let touched = Cell::new(false);
        let freq = Spy(&touched);
        let bl = MemorySource::new("bl", b"\xff\n");

        let err = curate(&freq, &[&bl], NaiveInflector).unwrap_err();
        assert_eq!(err.stage(), Stage::Decode);
        assert!(!touched.get());
    }

    #[test]
    fn missing_store_fails_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CuratorConfig::default();
        config.set_store(dir.path().join("absent.db"));

        let client = reqwest::blocking::Client::new();
        let err = Pipeline::new(config)
            .open_blacklists(&client)
            .err()
            .unwrap();
        assert_eq!(err.stage(), Stage::Fetch);
    }

    #[test]
    fn missing_store_skipped_when_opted_in() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CuratorConfig::default();
        config.set_store(dir.path().join("absent.db"));
        config.optional_store_missing_ok = true;

        let client = reqwest::blocking::Client::new();
        let sources = Pipeline::new(config).open_blacklists(&client).unwrap();
        assert_eq!(sources.len(), 1);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CuratorConfig::default();
        config.output.path = dir.path().join("Words.swift");

        let freq = MemorySource::new("freq", "word\n");
        let curated = curate(&freq, &[], NaiveInflector).unwrap();
        let summary = Pipeline::new(config).dry_run(true).finish(curated, 0).unwrap();

        assert!(summary.output.is_none());
        assert_eq!(summary.stats.kept, 1);
        assert!(!dir.path().join("Words.swift").exists());
    }
}
