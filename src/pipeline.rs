// src/pipeline.rs
//! Pipeline capability traits for converting page bundles.
//!
//! Each trait describes a single capability, enabling testing each stage in
//! isolation. `FileConverter` wires them to page-bundle files on disk.

use crate::bundle::PageBundle;
use crate::config::{OutputFormat, RenderConfig};
use crate::error::AppError;
use crate::formatting::{render_standalone_html, to_html, to_plain_text};
use crate::model::PageDocument;
use crate::output::{deliver, DeliveryTarget, FilenameRegistry, OutputPlan, OutputReport};
use crate::transform::compose_page_document;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Supplies a fully materialized page bundle.
pub trait ContentSource {
    fn load(&self, input: &Path) -> Result<PageBundle, AppError>;
}

/// Turns a page bundle into an encoded document.
pub trait DocumentComposer {
    fn compose(&self, bundle: &PageBundle) -> Result<RenderedDocument, AppError>;
}

/// Delivers encoded documents to their destinations.
pub trait DocumentDelivery {
    fn deliver(&self, documents: &[RenderedDocument]) -> OutputReport;
}

/// An encoded page, ready to be written out.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Encodes a page document in the requested format.
pub fn render_document(
    document: &PageDocument,
    format: OutputFormat,
    standalone: bool,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Html if standalone => render_standalone_html(document),
        OutputFormat::Html => Ok(to_html(&document.body)),
        OutputFormat::Text => Ok(to_plain_text(&document.body)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
    }
}

/// Outcome of converting one input file.
#[derive(Debug)]
pub struct Conversion {
    pub input: PathBuf,
    pub result: Result<RenderedDocument, AppError>,
}

/// Converts page-bundle files according to a `RenderConfig`.
pub struct FileConverter<'a> {
    config: &'a RenderConfig,
}

impl<'a> FileConverter<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Converts every configured input in parallel; results keep input order.
    pub fn convert_all(&self) -> Result<Vec<Conversion>, AppError> {
        let run = || {
            self.config
                .inputs
                .par_iter()
                .map(|input| Conversion {
                    input: input.clone(),
                    result: self.convert_one(input),
                })
                .collect::<Vec<_>>()
        };

        match self.config.jobs {
            Some(jobs) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .build()
                    .map_err(|e| AppError::InvalidConfiguration(e.to_string()))?;
                Ok(pool.install(run))
            }
            None => Ok(run()),
        }
    }

    fn convert_one(&self, input: &Path) -> Result<RenderedDocument, AppError> {
        let bundle = self.load(input)?;
        let document = self.compose(&bundle)?;
        log::info!(
            "Converted {} ('{}', {} bytes)",
            input.display(),
            document.title,
            document.content.len()
        );
        Ok(document)
    }

    /// Plans one delivery per document: a file in the output directory, or stdout.
    ///
    /// Filenames are unique within the plan, so no document overwrites
    /// another from the same batch.
    pub fn plan(&self, documents: &[RenderedDocument]) -> OutputPlan {
        let mut filenames = FilenameRegistry::new();
        let mut plan = OutputPlan::new();

        for document in documents {
            let target = match &self.config.output_dir {
                Some(dir) => DeliveryTarget::WriteFile {
                    path: dir.join(filenames.claim(
                        &document.title,
                        &document.id,
                        self.config.format.extension(),
                    )),
                    content: document.content.clone(),
                },
                None => DeliveryTarget::PrintToStdout {
                    content: document.content.clone(),
                },
            };
            plan = plan.with_operation(target);
        }

        plan
    }
}

impl ContentSource for FileConverter<'_> {
    fn load(&self, input: &Path) -> Result<PageBundle, AppError> {
        PageBundle::load(input)
    }
}

impl DocumentComposer for FileConverter<'_> {
    fn compose(&self, bundle: &PageBundle) -> Result<RenderedDocument, AppError> {
        let document = compose_page_document(&bundle.page, &bundle.blocks);
        let content = render_document(&document, self.config.format, self.config.standalone)?;

        Ok(RenderedDocument {
            id: document.id,
            title: document.title,
            content,
        })
    }
}

impl DocumentDelivery for FileConverter<'_> {
    fn deliver(&self, documents: &[RenderedDocument]) -> OutputReport {
        deliver(self.plan(documents))
    }
}
