//! Sub-stepped Verlet physics for circles in 2D.
//!
//! `verlet2d` advances a set of circular bodies under gravity with position
//! Verlet integration, keeps them from overlapping, relaxes distance links
//! between them, and optionally holds everything inside a circular container.
//! It is a stable real-time approximation (position-based dynamics), not a
//! rigid-body engine.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity from consecutive positions
//! - **Contacts**: pairwise non-penetration, split evenly between free bodies
//! - **Links**: rods (`is_fixed`) and cords that only resist stretching
//! - **Container**: hard circular boundary
//! - **Stable handles**: generational handles for bodies and links
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: only needs `alloc`
//!
//! # Example
//! ```
//! use verlet2d::{BoundaryConstraint, Solver, SolverConfig, Vec2};
//!
//! let config = SolverConfig::new()
//!     .with_sub_steps(8)
//!     .with_boundary(BoundaryConstraint::new(Vec2::new(375.0f32, 335.0), 325.0)?);
//! let mut solver = Solver::new(config);
//!
//! let anchor = solver.spawn(Vec2::new(375.0, 100.0), 10.0, true)?;
//! let ball = solver.spawn(Vec2::new(475.0, 100.0), 10.0, false)?;
//! solver.link_bodies(anchor, ball, 100.0, true)?;
//!
//! for _ in 0..60 {
//!     solver.step(1.0 / 60.0)?;
//! }
//! assert_eq!(solver.body(anchor).unwrap().position(), Vec2::new(375.0, 100.0));
//! # Ok::<(), verlet2d::PhysicsError>(())
//! ```

#![no_std]

extern crate alloc;

mod arena;
pub mod float;
pub mod vec;
pub mod body;
pub mod link;
pub mod boundary;
pub mod solver;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use body::Body;
pub use link::{Link, LINK_RELAXATION_DIVISOR};
pub use boundary::BoundaryConstraint;
pub use solver::{resolve_pairwise, Anchor, BodyHandle, LinkHandle, Solver};
pub use config::{SolverConfig, DEFAULT_GRAVITY};
pub use observer::{NoOpStepObserver, StepObserver};
pub use error::PhysicsError;
