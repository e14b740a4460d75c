#![allow(dead_code)]

pub mod failing_renderer;
pub mod recording_renderer;
