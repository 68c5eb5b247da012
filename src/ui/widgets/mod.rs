// src/ui/widgets/mod.rs

// One module per dashboard region. `summary` also hosts the label/value row
// helper the sidebar reuses.

pub mod control_bar; // Active scanner title and pause/restart controls.
pub mod footer;      // Decorative report actions and key hints.
pub mod log_view;    // The scripted scan terminal.
pub mod sidebar;     // Branding, system status, scan modes, quick actions.
pub mod summary;     // Threat monitor, network status, activity log.
