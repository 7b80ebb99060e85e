//! Display adapter for RoboEyes
//!
//! This crate provides:
//! - `GraphicsCanvas`, an implementation of the engine's `Canvas` trait on
//!   top of any `embedded-graphics` `DrawTarget`
//! - `Palette`, mapping the engine's semantic colour indices to pixel colours
//!
//! # Architecture
//!
//! The engine issues filled rounded rectangles and triangles. The canvas
//! rasterises them into the draw target, which is usually an in-RAM frame
//! buffer; the firmware pushes that buffer to the panel once the engine has
//! presented a finished frame.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod canvas;
pub mod palette;

pub use canvas::GraphicsCanvas;
pub use palette::Palette;
