//! Presentation seams: notices, navigation and rendering.
//!
//! The storefront never talks to a concrete UI. It emits [`Notice`]s to a
//! [`Notifier`], sends the user to [`Route`]s through a [`Navigator`], and
//! draws through a [`StorefrontView`]. The `tracing` implementations
//! ([`TracingNotifier`], [`TracingNavigator`], [`TracingView`]) keep no state
//! and are the defaults. Recording implementations ([`NoticeLog`],
//! [`NavigationLog`], [`RecordedView`]) are provided for hosts that poll
//! state and for tests.

mod navigation;
mod notify;
mod view;

pub use navigation::{NavigationLog, Navigator, Route, TracingNavigator};
pub use notify::{ChannelNotifier, Notice, NoticeLevel, NoticeLog, Notifier, TracingNotifier};
pub use view::{AuthBanner, RecordedView, StorefrontView, TracingView};
