// Copyright 2026 the Teamcard Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod drag;
pub mod edit_types;
pub mod selection;
pub mod session;

pub use drag::{resolve_drag, DragOutcome};
pub use edit_types::EditType;
pub use selection::LinkSelection;
pub use session::BlockSession;
