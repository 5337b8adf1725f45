//! Admin pipeline integration tests.
//!
//! Drives the real `HttpGenerator` against a scripted in-process endpoint,
//! then runs full form-to-store submissions through it.

mod fake_generator;
mod flow;
mod generator_http;
