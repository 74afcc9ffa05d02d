//! Grammars built on the `statelex` engine.
//!
//! Both use only the public state-function API, and double as end-to-end
//! checks of it.
//!
//! - **ini** - `key=value` lines and `[section]` headers
//! - **comments** - pulls `--line` and `--[[block]]` comments out of
//!   Lua-style source

pub mod comments;
pub mod ini;
