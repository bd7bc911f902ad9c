// Engine configuration (engine.json): timing, playfield geometry, judge rules, lane bindings

pub mod engine_config;

pub use engine_config::EngineConfig;
