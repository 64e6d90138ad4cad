//! Main GUI application

use crate::extractor::{DownloadResult, SourceResolver};
use crate::gui::clipboard;
use crate::gui::launcher;
use crate::gui::state::{Screen, ScreenState};
use crate::gui::theme;
use crate::gui::views::main_view;
use crate::utils::error::FetchError;
use iced::widget::container;
use iced::{Application, Command, Element, Length, Theme};
use std::sync::Arc;
use tracing::{info, warn};

/// Startup data passed in from `main`
pub struct AppFlags {
    pub resolver: Arc<dyn SourceResolver>,
    /// Link the app was launched with
    pub initial_url: Option<String>,
}

/// Main application state
pub struct TikloaderApp {
    resolver: Arc<dyn SourceResolver>,
    screen: Screen,
    /// Transient feedback that is not part of the lookup workflow
    status_line: Option<String>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    PasteFromClipboard,
    ClearUrlInput,
    SubmitPressed,

    // Lookup outcome
    SourcesFetched(Result<DownloadResult, FetchError>),

    // Results
    OpenSource(usize), // 1-based position
    NewSearch,
}

impl Application for TikloaderApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let app = Self {
            resolver: flags.resolver,
            screen: Screen::new(flags.initial_url),
            status_line: None,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Tikloader - TikTok Video Downloader")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::UrlInputChanged(url) => {
                self.screen.set_input(url);
                Command::none()
            }

            Message::PasteFromClipboard => {
                match clipboard::get_clipboard_content() {
                    Ok(content) => {
                        self.status_line = if self.screen.apply_clipboard(&content) {
                            Some("URL pasted from clipboard".to_string())
                        } else {
                            Some("Clipboard does not contain a TikTok link".to_string())
                        };
                    }
                    Err(e) => {
                        warn!("{}", e);
                        self.status_line = Some(e.to_string());
                    }
                }
                Command::none()
            }

            Message::ClearUrlInput => {
                self.screen.clear_input();
                Command::none()
            }

            Message::SubmitPressed => {
                let Some(url) = self.screen.submit() else {
                    return Command::none();
                };
                info!("Looking up sources for {}", url);
                self.status_line = None;

                let resolver = Arc::clone(&self.resolver);
                Command::perform(
                    async move { resolver.fetch_sources(&url).await },
                    Message::SourcesFetched,
                )
            }

            Message::SourcesFetched(outcome) => {
                self.screen.finish(outcome);
                if let ScreenState::Completed(result) = &self.screen.state {
                    info!("Lookup finished with {} source(s)", result.len());
                }
                Command::none()
            }

            Message::OpenSource(position) => {
                let source = self
                    .screen
                    .results()
                    .and_then(|result| result.get_display(position))
                    .cloned();
                if let Some(source) = source {
                    self.status_line = match launcher::open_source(&source) {
                        Ok(()) => None,
                        Err(e) => Some(e.to_string()),
                    };
                }
                Command::none()
            }

            Message::NewSearch => {
                self.screen.reset();
                self.status_line = None;
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        container(main_view(&self.screen, self.status_line.as_deref()))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .padding(16)
            .style(iced::theme::Container::Custom(Box::new(theme::PageContainer)))
            .into()
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }
}
