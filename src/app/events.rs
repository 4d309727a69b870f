use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use crate::domain::{location::GeocodeResolution, report::AnalysisReport};

/// Messages folded into [`AppState`](crate::app::state::AppState) by the UI loop.
///
/// Everything produced by a background search carries the generation it was
/// started with; the state drops events whose search has since been replaced
/// or cancelled.
#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Input(Event),
    PinNamed {
        generation: u64,
        name: Option<String>,
    },
    GeocodeResolved {
        generation: u64,
        resolution: GeocodeResolution,
    },
    AnalysisSucceeded {
        generation: u64,
        report: Box<AnalysisReport>,
    },
    SearchFailed {
        generation: u64,
        message: String,
    },
    Quit,
}

impl AppEvent {
    /// Generation of the search that produced this event, if any.
    #[must_use]
    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::PinNamed { generation, .. }
            | Self::GeocodeResolved { generation, .. }
            | Self::AnalysisSucceeded { generation, .. }
            | Self::SearchFailed { generation, .. } => Some(*generation),
            Self::Bootstrap | Self::Input(_) | Self::Quit => None,
        }
    }
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}
