//! Activatable validation
//!
//! A field should not turn red while the user is typing the first few
//! characters. [`ActivatableValidator`] holds validation back until the
//! normalized input reaches a minimum length; from then on it validates on
//! every call, even if the text shrinks again.
//!
//! ```text
//!            len >= min_chars
//!  Dormant ───────────────────▶ Active ──┐
//!     │  ▲                         ▲     │ any input
//!     └──┘ len < min_chars         └─────┘
//! ```

mod gate;
mod source;
mod validator;

pub use gate::{ActivationGate, GateState};
pub use source::{FromFn, TextSource, from_fn};
pub use validator::{ActivatableValidator, strip_whitespace};
