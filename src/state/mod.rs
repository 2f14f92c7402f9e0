//! Target-independent UI state. The Yew layer in `frontend` owns instances of these and
//! drives them from DOM events, timers and observers.

pub mod contact;
pub mod gallery;
pub mod reveal;
pub mod rotator;
pub mod scroll;
pub mod theme;
pub mod toast;
