//! Snake arena - grid snake sessions with an optional greedy autopilot
//!
//! This library provides:
//! - Core simulation (game module): grid, snakes, step engine, heuristic agent
//! - Keyboard mapping for the human snake (input module)
//! - TUI rendering of grid snapshots (render module)
//! - Wall-clock session stats (metrics module)
//! - Interactive and spectator loops (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
