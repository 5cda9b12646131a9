use crate::analyst::{LlmClient, Summarizer};
use crate::domain::OutputFolder;
use crate::errors::PipelineError;
use crate::persist::Persister;
use crate::report::{ReportBuilder, ANALYSIS_FILE, REPORT_FILE};
use crate::scraper::{FetchError, Fetcher, ListingExtractor};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Extract,
    Persist,
    Summarize,
    Report,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Fetch => "fetch",
            Stage::Extract => "extract",
            Stage::Persist => "persist",
            Stage::Summarize => "summarize",
            Stage::Report => "report",
        };
        f.write_str(name)
    }
}

/// What a successful run left on disk.
#[derive(Debug)]
pub struct RunSummary {
    pub folder: PathBuf,
    pub listings: usize,
    pub files: Vec<PathBuf>,
}

/// Fetch -> Extract -> Persist -> Summarize -> Report, strictly in that order.
/// The first failing stage ends the run; nothing here retries.
pub struct Pipeline<L> {
    fetcher: Fetcher,
    extractor: ListingExtractor,
    persister: Persister,
    summarizer: Summarizer<L>,
    output_root: PathBuf,
}

impl<L: LlmClient> Pipeline<L> {
    pub fn new(
        fetcher: Fetcher,
        extractor: ListingExtractor,
        persister: Persister,
        summarizer: Summarizer<L>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            persister,
            summarizer,
            output_root: output_root.into(),
        }
    }

    pub fn run(&self, url: &str) -> Result<RunSummary, PipelineError> {
        let url = parse_url(url)?;
        let folder = OutputFolder::for_url(&self.output_root, &url).ok_or_else(|| {
            FetchError::InvalidUrl {
                url: url.to_string(),
                reason: "no host to name the output folder after".to_string(),
            }
        })?;

        let run_start = Instant::now();
        tracing::info!(%url, mode = ?self.fetcher.mode(), "run started");

        let html = stage(Stage::Fetch, || self.fetcher.fetch(&url))?;

        let records = stage(Stage::Extract, || {
            Ok::<_, PipelineError>(self.extractor.extract(&html))
        })?;

        let folder_existed = folder.path().is_dir();
        let mut files = stage(Stage::Persist, || self.persister.save(&folder, &records))?;

        let analysis = match stage(Stage::Summarize, || self.summarizer.analyze(&records)) {
            Ok(analysis) => analysis,
            Err(e) => {
                discard(&folder, &files, folder_existed);
                return Err(e);
            }
        };

        let written = stage(Stage::Report, || {
            ReportBuilder::new()
                .records(&records)
                .analysis(&analysis)
                .build()?
                .write_to(&folder)
        });
        match written {
            Ok(written) => files.extend(written),
            Err(e) => {
                files.push(folder.file(ANALYSIS_FILE));
                files.push(folder.file(REPORT_FILE));
                discard(&folder, &files, folder_existed);
                return Err(e);
            }
        }

        tracing::info!(
            elapsed = ?run_start.elapsed(),
            listings = records.len(),
            "run completed"
        );

        Ok(RunSummary {
            folder: folder.path().to_path_buf(),
            listings: records.len(),
            files,
        })
    }
}

/// A failed run leaves no partial output: removes what this run wrote, and the
/// folder too if the run created it.
fn discard(folder: &OutputFolder, files: &[PathBuf], folder_existed: bool) {
    for path in files.iter().map(PathBuf::as_path).filter(|p| p.exists()) {
        match std::fs::remove_file(path) {
            Ok(()) => tracing::debug!("removed {}", path.display()),
            Err(e) => tracing::warn!("could not remove {}: {e}", path.display()),
        }
    }

    if !folder_existed {
        // Only succeeds when empty.
        let _ = std::fs::remove_dir(folder.path());
    }
}

fn parse_url(raw: &str) -> Result<Url, FetchError> {
    Url::parse(raw.trim()).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Runs one stage inside its own span, logging entry, exit and duration.
fn stage<T, E>(stage: Stage, f: impl FnOnce() -> Result<T, E>) -> Result<T, PipelineError>
where
    E: Into<PipelineError>,
{
    let span = tracing::info_span!("stage", name = %stage);
    let _guard = span.enter();

    let start = Instant::now();
    tracing::info!("{stage} started");

    match f() {
        Ok(value) => {
            tracing::info!(elapsed = ?start.elapsed(), "{stage} completed");
            Ok(value)
        }
        Err(e) => {
            let e = e.into();
            tracing::error!(elapsed = ?start.elapsed(), "{stage} failed: {e}");
            Err(e)
        }
    }
}
