//! Capability traits standing in for the runtime services the components
//! need (media element, fullscreen surface, codec support query, audio
//! pipeline, clipboard), plus in-process implementations for the CLI and
//! for tests.

pub mod audio;
pub mod clipboard;
pub mod media;
pub mod support;
