//! Single-question selection component.
//!
//! `pollbox-view` manages the state of one question with a fixed set of
//! candidate answers: exclusive or independent toggles, optional "other"
//! text inputs coupled to their toggles, and a canonical selection snapshot
//! derived from live control state. Drawing is delegated to a host-provided
//! [`surface::RenderSurface`]; [`headless::HeadlessSurface`] is a ready-made
//! in-memory implementation for tests and screenless hosts.
//!
//! Hosts construct a [`QuestionView`] with a [`QuestionEventSender`], feed
//! surface events into [`QuestionView::handle_control_event`], and call
//! [`QuestionView::selection`] whenever a
//! [`QuestionEvent::SelectionChanged`] arrives.

mod error;
mod event;
mod event_sender;
pub mod headless;
mod registry;
pub mod surface;
mod view;

pub use error::QuestionViewError;
pub use error::Result;
pub use event::QuestionEvent;
pub use event_sender::QuestionEventSender;
pub use view::QuestionView;
