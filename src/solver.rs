//! Sub-stepped Verlet solver owning the body and link registries.

use crate::arena::{Arena, Index};
use crate::body::Body;
use crate::boundary::BoundaryConstraint;
use crate::config::SolverConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::link::Link;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::vec::Vec2;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};

/// Opaque handle to a body registered with a [`Solver`].
///
/// Handles to removed bodies never resolve again, even once the storage slot
/// is reused.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct BodyHandle(Index);

/// Opaque handle to a link registered with a [`Solver`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct LinkHandle(Index);

impl BodyHandle {
    #[cfg(test)]
    pub(crate) fn from_raw(slot: u32, generation: u32) -> Self {
        BodyHandle(Index { slot, generation })
    }
}

impl fmt::Debug for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BodyHandle({}v{})", self.0.slot, self.0.generation)
    }
}

impl fmt::Debug for LinkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkHandle({}v{})", self.0.slot, self.0.generation)
    }
}

/// One end of a link passed to [`Solver::add_link`].
#[derive(Clone, Debug)]
pub enum Anchor<F: Float> {
    /// A body already registered with the solver.
    Existing(BodyHandle),
    /// A body that is registered as part of adding the link.
    New(Body<F>),
}

impl<F: Float> From<BodyHandle> for Anchor<F> {
    fn from(handle: BodyHandle) -> Self {
        Anchor::Existing(handle)
    }
}

impl<F: Float> From<Body<F>> for Anchor<F> {
    fn from(body: Body<F>) -> Self {
        Anchor::New(body)
    }
}

/// Push two overlapping bodies apart, half the overlap each.
///
/// Only free bodies move. Returns whether a correction was applied; touching
/// or separate bodies, and bodies with exactly coincident centers, are left
/// alone.
pub fn resolve_pairwise<F: Float>(a: &mut Body<F>, b: &mut Body<F>) -> bool {
    if a.is_static() && b.is_static() {
        return false;
    }
    let axis = a.position() - b.position();
    let dist = axis.length();
    let min_dist = a.radius() + b.radius();
    if dist >= min_dist {
        return false;
    }
    let Ok(n) = axis.try_div(dist) else {
        trace!("coincident centers at {:?}; no separating direction", a.position());
        return false;
    };
    let d = (min_dist - dist) * F::half();
    a.displace(n.scale(d));
    b.displace(-n.scale(d));
    true
}

/// Sub-stepped Verlet solver for circles, links, and an optional container.
///
/// Each sub-step walks the free bodies in registry order: a body is
/// integrated, contained, and pushed out of every body it overlaps before
/// the next one moves. Links are relaxed once at the end of the sub-step.
#[derive(Clone, Debug)]
pub struct Solver<F: Float> {
    bodies: Arena<Body<F>>,
    links: Arena<Link<F>>,
    config: SolverConfig<F>,
}

impl<F: Float> Solver<F> {
    pub fn new(config: SolverConfig<F>) -> Self {
        Solver {
            bodies: Arena::new(),
            links: Arena::new(),
            config,
        }
    }

    pub fn config(&self) -> &SolverConfig<F> { &self.config }
    pub fn config_mut(&mut self) -> &mut SolverConfig<F> { &mut self.config }

    pub fn boundary(&self) -> Option<&BoundaryConstraint<F>> {
        self.config.boundary.as_ref()
    }

    /// Advance the simulation by `dt`.
    pub fn step(&mut self, dt: F) -> Result<(), PhysicsError> {
        self.step_observed(dt, &mut NoOpStepObserver)
    }

    /// Advance the simulation by `dt`, reporting progress to `observer`.
    ///
    /// Degenerate links are skipped for the sub-step they occur in. A body
    /// the boundary cannot clamp aborts the step with the error; bodies ahead
    /// of it in registry order have already advanced by then, and every later
    /// step fails the same way until that body is moved or removed.
    pub fn step_observed<O: StepObserver>(
        &mut self,
        dt: F,
        observer: &mut O,
    ) -> Result<(), PhysicsError> {
        if !dt.is_finite() || dt < F::zero() {
            return Err(PhysicsError::InvalidTimeStep);
        }
        let sub_steps = self.config.effective_sub_steps();
        let sub_dt = dt / F::from_usize(sub_steps);
        let gravity = self.config.gravity;

        let order: Vec<Index> = self.bodies.iter().map(|(index, _)| index).collect();

        for _sub in 0..sub_steps {
            let mut resolved = 0;
            for &i in &order {
                let Some(body) = self.bodies.get_mut(i) else { continue };
                if body.is_static() {
                    continue;
                }
                body.accelerate(gravity);
                body.integrate(sub_dt);
                if let Some(boundary) = &self.config.boundary {
                    boundary.apply(body)?;
                }
                // Includes bodies not yet integrated this sub-step.
                for &j in &order {
                    if let Some((a, b)) = self.bodies.pair_mut(i, j) {
                        if resolve_pairwise(a, b) {
                            resolved += 1;
                        }
                    }
                }
            }
            observer.on_integrate();
            observer.on_contacts(resolved);

            let mut skipped = 0;
            for (index, link) in self.links.iter() {
                let (a, b) = link.bodies();
                let Some((body_a, body_b)) = self.bodies.pair_mut(a.0, b.0) else {
                    continue;
                };
                if let Err(err) = link.relax(body_a, body_b) {
                    skipped += 1;
                    trace!("skipping {:?} this sub-step: {err}", LinkHandle(index));
                }
            }
            observer.on_links_relaxed(skipped);
        }

        observer.on_step_complete();
        Ok(())
    }

    pub fn add_body(&mut self, body: Body<F>) -> BodyHandle {
        let handle = BodyHandle(self.bodies.insert(body));
        debug!("added {handle:?}");
        handle
    }

    /// Create and register a body in one go.
    pub fn spawn(
        &mut self,
        position: Vec2<F>,
        radius: F,
        is_static: bool,
    ) -> Result<BodyHandle, PhysicsError> {
        let body = if is_static {
            Body::pinned(position, radius)?
        } else {
            Body::new(position, radius)?
        };
        Ok(self.add_body(body))
    }

    /// Remove a body along with every link attached to it.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<Body<F>, PhysicsError> {
        let body = self
            .bodies
            .remove(handle.0)
            .ok_or(PhysicsError::BodyNotFound(handle))?;
        let dropped = self.links.retain(|link| !link.involves(handle));
        debug!("removed {handle:?} and {dropped} attached link(s)");
        Ok(body)
    }

    /// Link two ends, registering any end given as a new body.
    ///
    /// Nothing is registered if the link is rejected.
    pub fn add_link(
        &mut self,
        a: impl Into<Anchor<F>>,
        b: impl Into<Anchor<F>>,
        length: F,
        is_fixed: bool,
    ) -> Result<LinkHandle, PhysicsError> {
        let (a, b) = (a.into(), b.into());
        if !length.is_finite() || length < F::zero() {
            return Err(PhysicsError::InvalidLinkLength);
        }
        for anchor in [&a, &b] {
            if let Anchor::Existing(handle) = anchor {
                self.require_body(*handle)?;
            }
        }
        if let (Anchor::Existing(ha), Anchor::Existing(hb)) = (&a, &b) {
            if ha == hb {
                return Err(PhysicsError::SameBody(*ha));
            }
        }
        let a = self.register(a);
        let b = self.register(b);
        self.link_bodies(a, b, length, is_fixed)
    }

    /// Link two bodies that are already registered.
    pub fn link_bodies(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
        length: F,
        is_fixed: bool,
    ) -> Result<LinkHandle, PhysicsError> {
        let link = Link::new(a, b, length, is_fixed)?;
        self.require_body(a)?;
        self.require_body(b)?;
        let handle = LinkHandle(self.links.insert(link));
        debug!("added {handle:?} between {a:?} and {b:?}");
        Ok(handle)
    }

    /// Remove a link. Its bodies stay registered.
    pub fn remove_link(&mut self, handle: LinkHandle) -> Result<Link<F>, PhysicsError> {
        let link = self
            .links
            .remove(handle.0)
            .ok_or(PhysicsError::LinkNotFound(handle))?;
        debug!("removed {handle:?}");
        Ok(link)
    }

    /// Pin a body and move it to `position` without giving it velocity.
    pub fn drag(&mut self, handle: BodyHandle, position: Vec2<F>) -> Result<(), PhysicsError> {
        let body = self.body_entry(handle)?;
        body.pin();
        body.move_to(position);
        Ok(())
    }

    pub fn set_static(&mut self, handle: BodyHandle, is_static: bool) -> Result<(), PhysicsError> {
        let body = self.body_entry(handle)?;
        if is_static {
            body.pin();
        } else {
            body.unpin();
        }
        Ok(())
    }

    /// Remove every body and link. Outstanding handles stop resolving.
    pub fn clear(&mut self) {
        self.links.clear();
        self.bodies.clear();
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body<F>> {
        self.bodies.get(handle.0)
    }

    pub fn link(&self, handle: LinkHandle) -> Option<&Link<F>> {
        self.links.get(handle.0)
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body<F>)> {
        self.bodies.iter().map(|(index, body)| (BodyHandle(index), body))
    }

    pub fn links(&self) -> impl Iterator<Item = (LinkHandle, &Link<F>)> {
        self.links.iter().map(|(index, link)| (LinkHandle(index), link))
    }

    pub fn body_count(&self) -> usize { self.bodies.len() }
    pub fn link_count(&self) -> usize { self.links.len() }

    /// Bounding box of a body, for drawing.
    pub fn body_bounds(&self, handle: BodyHandle) -> Option<(Vec2<F>, Vec2<F>)> {
        self.body(handle).map(Body::bounds)
    }

    /// Current positions of a link's two ends, for drawing.
    pub fn link_endpoints(&self, handle: LinkHandle) -> Option<(Vec2<F>, Vec2<F>)> {
        let (a, b) = self.link(handle)?.bodies();
        Some((self.body(a)?.position(), self.body(b)?.position()))
    }

    fn require_body(&self, handle: BodyHandle) -> Result<(), PhysicsError> {
        if self.bodies.contains(handle.0) {
            Ok(())
        } else {
            Err(PhysicsError::BodyNotFound(handle))
        }
    }

    fn body_entry(&mut self, handle: BodyHandle) -> Result<&mut Body<F>, PhysicsError> {
        self.bodies
            .get_mut(handle.0)
            .ok_or(PhysicsError::BodyNotFound(handle))
    }

    fn register(&mut self, anchor: Anchor<F>) -> BodyHandle {
        match anchor {
            Anchor::Existing(handle) => handle,
            Anchor::New(body) => self.add_body(body),
        }
    }
}

impl<F: Float> Default for Solver<F> {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
