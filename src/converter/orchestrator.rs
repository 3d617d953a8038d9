//! Conversion orchestration: single files, whole folders, and path dispatch

use crate::codec::{IconCodec, ImageCodec};
use crate::converter::batch::{
    allocate_destination, collect_sources, BatchSummary, ExtensionFilter, FileOutcome,
};
use crate::converter::single::{convert_file, ConversionResult, SingleOutcome};
use crate::converter::target::{resolve_target, Target};
use crate::selector::SizeLadder;
use crate::utils::config::ConverterSettings;
use crate::utils::error::{ConversionError, IcoForgeError};
use crate::utils::naming::output_stem;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

type ConversionTask = JoinHandle<Result<ConversionResult, ConversionError>>;

/// What `dispatch` ended up doing
#[derive(Debug)]
pub enum DispatchOutcome {
    Single(SingleOutcome),
    Batch(BatchSummary),
}

impl DispatchOutcome {
    /// True when nothing failed
    pub fn is_clean(&self) -> bool {
        match self {
            DispatchOutcome::Single(outcome) => outcome.is_success(),
            DispatchOutcome::Batch(summary) => summary.error_count() == 0,
        }
    }
}

/// Converts images to icons with a shared codec and size ladder
pub struct Converter<C> {
    codec: Arc<C>,
    ladder: Arc<SizeLadder>,
    output_dir_name: String,
    max_concurrent: usize,
}

impl Converter<ImageCodec> {
    /// Converter backed by the `image` crate, configured from settings
    pub fn from_settings(settings: &ConverterSettings) -> Result<Self, IcoForgeError> {
        Self::new(ImageCodec::new(settings.resize_filter), settings)
    }
}

impl<C: IconCodec + 'static> Converter<C> {
    pub fn new(codec: C, settings: &ConverterSettings) -> Result<Self, IcoForgeError> {
        Ok(Self {
            codec: Arc::new(codec),
            ladder: Arc::new(settings.size_ladder()?),
            output_dir_name: settings.output_dir_name.clone(),
            max_concurrent: settings.max_concurrent.max(1),
        })
    }

    pub fn ladder(&self) -> &SizeLadder {
        &self.ladder
    }

    /// Convert one file next to itself; failures end up in the outcome
    pub fn convert_single(&self, path: &Path) -> SingleOutcome {
        let stem = output_stem(path.file_name().unwrap_or_default());
        let directory = path.parent().unwrap_or_else(|| Path::new(""));

        let result = convert_file(self.codec.as_ref(), &self.ladder, path, &stem, directory);
        match &result {
            Ok(done) => info!("Converted {:?} -> {:?}", path, done.output_path),
            Err(e) => warn!("Failed to convert {:?}: {}", path, e),
        }

        SingleOutcome {
            source: path.to_path_buf(),
            result,
        }
    }

    /// Convert every matching file of `folder` into a fresh result folder
    pub async fn convert_batch(
        &self,
        folder: &Path,
        filter: &ExtensionFilter,
    ) -> Result<BatchSummary, IcoForgeError> {
        self.convert_batch_with(folder, filter, |_| {}).await
    }

    /// Like [`convert_batch`](Self::convert_batch), calling `on_outcome` for
    /// each file as soon as its result is known (in file-name order).
    ///
    /// One file failing never stops the others. Only failing to create the
    /// result folder or to list `folder` aborts the batch.
    pub async fn convert_batch_with<F>(
        &self,
        folder: &Path,
        filter: &ExtensionFilter,
        mut on_outcome: F,
    ) -> Result<BatchSummary, IcoForgeError>
    where
        F: FnMut(&FileOutcome),
    {
        let sources = collect_sources(folder, filter)?;
        let destination = allocate_destination(folder, &self.output_dir_name).map_err(|e| {
            error!("{}", e);
            e
        })?;
        info!(
            "Converting {} file(s) matching {} from {:?}",
            sources.len(),
            filter,
            folder
        );

        // At most `max_concurrent` conversions in flight; the oldest one is
        // awaited and reported before the next file starts.
        let mut in_flight = VecDeque::with_capacity(self.max_concurrent);
        let mut summary = BatchSummary::new(destination.clone());

        for source in sources {
            if in_flight.len() >= self.max_concurrent {
                if let Some((done, handle)) = in_flight.pop_front() {
                    let outcome = settle(done, handle).await;
                    on_outcome(&outcome);
                    summary.record(outcome);
                }
            }

            let codec = Arc::clone(&self.codec);
            let ladder = Arc::clone(&self.ladder);
            let dest = destination.clone();
            let src = source.clone();
            let handle = tokio::task::spawn_blocking(move || {
                let stem = output_stem(src.file_name().unwrap_or_default());
                convert_file(codec.as_ref(), &ladder, &src, &stem, &dest)
            });
            in_flight.push_back((source, handle));
        }

        while let Some((source, handle)) = in_flight.pop_front() {
            let outcome = settle(source, handle).await;
            on_outcome(&outcome);
            summary.record(outcome);
        }

        info!(
            "Batch finished: {} converted, {} failed, results in {:?}",
            summary.success_count(),
            summary.error_count(),
            summary.destination
        );
        Ok(summary)
    }

    /// Normalize `raw`, then convert a file or a folder depending on what it is.
    ///
    /// `extension` is only asked for when the path is a folder.
    pub async fn dispatch<E, F>(
        &self,
        raw: &str,
        extension: E,
        on_outcome: F,
    ) -> Result<DispatchOutcome, IcoForgeError>
    where
        E: FnOnce() -> String,
        F: FnMut(&FileOutcome),
    {
        match resolve_target(raw)? {
            Target::File(path) => Ok(DispatchOutcome::Single(self.convert_single(&path))),
            Target::Directory(folder) => {
                let filter = ExtensionFilter::parse(&extension())?;
                let summary = self.convert_batch_with(&folder, &filter, on_outcome).await?;
                Ok(DispatchOutcome::Batch(summary))
            }
        }
    }
}

/// Wait for one conversion; a panicked task becomes that file's error
async fn settle(source: PathBuf, handle: ConversionTask) -> FileOutcome {
    let result = match handle.await {
        Ok(result) => result,
        Err(join_err) => Err(ConversionError::Aborted(join_err.to_string())),
    };
    if let Err(e) = &result {
        warn!("Failed to convert {:?}: {}", source, e);
    }
    FileOutcome { source, result }
}
