use log::{debug, trace};

use crate::bodies::Body;
use crate::collision::{
    detect_bodies, CollisionFilter, ExceptionFilter, ImpulseResolver, SymmetricExceptionFilter,
};
use crate::core::{CollisionEvent, EventQueue, RelaxationState, SimulationConfig};
use crate::integration::{Integrator, SymplecticEulerIntegrator};
use crate::Result;

/// The per-tick driver: integrates every body, then performs exactly one
/// all-pairs detection and resolution sweep.
///
/// Pairs are visited in the order the bodies are supplied (`(0, 1), (0, 2),
/// ..., (1, 2), ...`) and impulses are applied in place, so with three or more
/// mutually overlapping bodies the outcome depends on that order.
///
/// The core does not own bodies. The caller hands over the same slice every
/// tick and may read or reposition bodies in between.
pub struct PhysicsCore {
    /// Configuration for the simulation
    config: SimulationConfig,

    /// Cross-tick relaxation bookkeeping
    relaxation: RelaxationState,

    /// Velocity and position integration
    integrator: Box<dyn Integrator>,

    /// Pair filter run before the geometry test
    filter: Box<dyn CollisionFilter>,

    /// Collision response
    resolver: ImpulseResolver,

    /// Collisions resolved by the latest tick
    events: EventQueue,

    /// Number of ticks performed
    tick_count: u64,
}

impl PhysicsCore {
    /// Creates a new physics core with default settings
    pub fn new() -> Self {
        Self::build(SimulationConfig::default())
    }

    /// Creates a new physics core with the given configuration
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SimulationConfig) -> Self {
        let filter: Box<dyn CollisionFilter> = if config.symmetric_exceptions {
            Box::new(SymmetricExceptionFilter::new())
        } else {
            Box::new(ExceptionFilter::new())
        };

        Self {
            resolver: ImpulseResolver::from_config(&config),
            config,
            relaxation: RelaxationState::new(),
            integrator: Box::new(SymplecticEulerIntegrator::new()),
            filter,
            events: EventQueue::new(),
            tick_count: 0,
        }
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the cross-tick relaxation state
    pub fn relaxation_state(&self) -> &RelaxationState {
        &self.relaxation
    }

    /// Returns the collision resolver
    pub fn resolver(&self) -> &ImpulseResolver {
        &self.resolver
    }

    /// Replaces the integrator
    pub fn set_integrator(&mut self, integrator: Box<dyn Integrator>) {
        self.integrator = integrator;
    }

    /// Replaces the pair filter
    pub fn set_filter(&mut self, filter: Box<dyn CollisionFilter>) {
        self.filter = filter;
    }

    /// Returns the collisions resolved by the latest tick
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns a mutable reference to the event queue, for draining
    pub fn get_events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Returns the number of ticks performed since construction or reset
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Forgets all cross-tick state
    pub fn reset(&mut self) {
        self.relaxation = RelaxationState::new();
        self.events.clear();
        self.tick_count = 0;
    }

    /// Advances the simulation by one tick of length `dt`
    pub fn tick(&mut self, bodies: &mut [Body], dt: f64) {
        self.events.clear();

        for body in bodies.iter_mut() {
            self.integrator.integrate(body, dt);
        }

        if self.relaxation.begin_sweep(self.config.relaxation_iterations) {
            debug!(
                "tick {}: starting relaxation episode of {} ticks",
                self.tick_count, self.config.relaxation_iterations
            );
        }

        let resolved = self.sweep(bodies);

        trace!(
            "tick {}: {} bodies, {} pairs resolved, budget {}",
            self.tick_count,
            bodies.len(),
            resolved,
            self.relaxation.budget()
        );

        self.tick_count += 1;
    }

    /// Tests and resolves every pair with at least one dynamic body, once.
    /// Returns the number of resolved pairs.
    fn sweep(&mut self, bodies: &mut [Body]) -> usize {
        let mut resolved = 0;

        let count = bodies.len();

        for i in 0..count {
            for j in (i + 1)..count {
                let (head, tail) = bodies.split_at_mut(j);
                let body_a = &mut head[i];
                let body_b = &mut tail[0];

                if body_a.is_static() && body_b.is_static() {
                    continue;
                }

                let record = match detect_bodies(self.filter.as_ref(), body_a, body_b) {
                    Some(record) => record,
                    None => continue,
                };

                trace!(
                    "resolving ({}, {}): normal {}, depth {}",
                    i, j, record.normal, record.depth
                );

                self.resolver.resolve(body_a, body_b, &record);
                self.relaxation.record_collision();
                self.events.add_collision_event(CollisionEvent {
                    body_a: i,
                    body_b: j,
                    record,
                });
                resolved += 1;
            }
        }

        resolved
    }
}

impl Default for PhysicsCore {
    fn default() -> Self {
        Self::new()
    }
}
