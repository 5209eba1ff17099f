//! Interactive app command (`tmuber view`)
//!
//! Launches the full-screen TUI with the passenger, support, and admin
//! screens.

use iocraft::prelude::*;

use crate::error::{Result, TmuberError};
use crate::tui::TmuberApp;
use crate::types::Screen;

/// Launch the TUI, starting on the given screen
pub fn cmd_view(screen: Screen) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| TmuberError::Other(format!("Failed to create runtime: {}", e)))?;

    rt.block_on(async {
        element!(TmuberApp(initial_screen: screen))
            .fullscreen()
            .await
            .map_err(|e| TmuberError::Other(format!("TUI error: {}", e)))
    })
}
