//! Application entry points for the window and headless modes

use crate::extractor::{DownloadResult, SourceResolver};
use crate::gui::{launcher, AppFlags, TikloaderApp};
use crate::utils::error::TikloaderError;
use crate::utils::validation::validate_input_url;
use anyhow::Result;
use iced::{Application, Settings};
use std::io::Write;
use std::sync::Arc;

/// What a headless run should do after the lookup
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    /// Print the result as JSON instead of labelled lines
    pub json: bool,
    /// 1-based source to open in the external viewer
    pub open: Option<usize>,
}

/// Run the desktop window
pub fn run_gui(resolver: Arc<dyn SourceResolver>, initial_url: Option<String>) -> Result<()> {
    TikloaderApp::run(Settings {
        window: iced::window::Settings {
            size: iced::Size::new(640.0, 720.0),
            min_size: Some(iced::Size::new(480.0, 520.0)),
            ..Default::default()
        },
        antialiasing: true,
        ..Settings::with_flags(AppFlags {
            resolver,
            initial_url,
        })
    })?;
    Ok(())
}

/// Resolve one URL, print the sources and optionally open one
pub async fn run_headless<W: Write>(
    resolver: &dyn SourceResolver,
    input: &str,
    options: &HeadlessOptions,
    out: &mut W,
) -> Result<DownloadResult, TikloaderError> {
    let url = validate_input_url(input)?;
    let result = resolver.fetch_sources(url).await?;

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else if result.is_empty() {
        writeln!(out, "{}", crate::gui::state::NO_SOURCES_MESSAGE)?;
    } else {
        for (label, source) in result.labelled() {
            writeln!(out, "{}: {}", label, source.url)?;
        }
    }

    if let Some(position) = options.open {
        match result.get_display(position) {
            Some(source) => launcher::open_source(source)?,
            None => {
                return Err(TikloaderError::InvalidSelection(format!(
                    "source {} is out of range ({} source(s))",
                    position,
                    result.len()
                )))
            }
        }
    }

    Ok(result)
}
